use alloy::sol;

sol! {
   #[sol(rpc)]
   contract ERC20 {
        function name() public view returns (string);

        function symbol() public view returns (string);

        function decimals() public view returns (uint8);
   }
}
