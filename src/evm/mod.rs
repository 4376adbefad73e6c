pub mod erc20;
