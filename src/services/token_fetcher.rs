use crate::domain::{Network, TokenEntry};
use crate::evm::erc20::ERC20;
use crate::services::errors::FetchError;
use crate::services::retry::{retry_with_backoff, RetryPolicy};
use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use std::collections::BTreeMap;

/// Reads ERC20 metadata of a contract on `network` over JSON-RPC.
pub struct Erc20MetadataFetcher {
    provider: DynProvider,
    network: Network,
    retry: RetryPolicy,
}

impl Erc20MetadataFetcher {
    /// Connects and makes sure the rpc actually serves `network`.
    pub async fn connect(
        rpc_url: &str,
        network: Network,
        retry: RetryPolicy,
    ) -> Result<Self, FetchError> {
        let provider = ProviderBuilder::new()
            .connect(rpc_url)
            .await
            .map_err(|err| FetchError::Connection(rpc_url.to_string(), err.to_string()))?
            .erased();

        let fetcher = Self::from_provider(provider, network, retry).await?;
        tracing::info!(rpc = rpc_url, "connected to rpc");

        Ok(fetcher)
    }

    /// Wraps an existing provider; fails when it serves another chain.
    pub async fn from_provider(
        provider: DynProvider,
        network: Network,
        retry: RetryPolicy,
    ) -> Result<Self, FetchError> {
        let found = {
            let provider = &provider;
            retry_with_backoff(&retry, "read chain id", || async move {
                provider.get_chain_id().await
            })
            .await?
        };

        if found != network.chain_id() {
            return Err(FetchError::ChainMismatch {
                expected: network.chain_id(),
                found,
            });
        }

        tracing::debug!(%network, chain_id = found, "chain id verified");

        Ok(Self {
            provider,
            network,
            retry,
        })
    }

    /// Each field gets its own retry loop, so a flaky `symbol` call does not
    /// re-read `name`.
    pub async fn fetch(&self, address: Address) -> Result<TokenEntry, FetchError> {
        let erc20 = ERC20::new(address, &self.provider);
        let erc20 = &erc20;

        let name = retry_with_backoff(&self.retry, "fetch name", || async move {
            erc20.name().call().await
        })
        .await?;

        let symbol = retry_with_backoff(&self.retry, "fetch symbol", || async move {
            erc20.symbol().call().await
        })
        .await?;

        let decimals = retry_with_backoff(&self.retry, "fetch decimals", || async move {
            erc20.decimals().call().await
        })
        .await?;

        tracing::info!(%address, name = %name, symbol = %symbol, decimals, "token metadata fetched");

        Ok(TokenEntry {
            chain_id: self.network.chain_id(),
            address,
            name,
            symbol,
            decimals,
            logo_uri: None,
            extensions: BTreeMap::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, Bytes, U64};
    use alloy::providers::mock::Asserter;
    use alloy::sol_types::SolCall;
    use std::time::Duration;

    const WETH: Address = address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            delay: Duration::from_millis(1),
            backoff: 1.0,
        }
    }

    fn mocked(asserter: &Asserter) -> DynProvider {
        ProviderBuilder::new()
            .connect_mocked_client(asserter.clone())
            .erased()
    }

    fn push_chain_id(asserter: &Asserter, chain_id: u64) {
        asserter.push_success(&U64::from(chain_id));
    }

    fn push_name(asserter: &Asserter, name: &str) {
        let ret = ERC20::nameCall::abi_encode_returns(&name.to_string());
        asserter.push_success(&Bytes::from(ret));
    }

    fn push_symbol(asserter: &Asserter, symbol: &str) {
        let ret = ERC20::symbolCall::abi_encode_returns(&symbol.to_string());
        asserter.push_success(&Bytes::from(ret));
    }

    fn push_decimals(asserter: &Asserter, decimals: u8) {
        let ret = ERC20::decimalsCall::abi_encode_returns(&decimals);
        asserter.push_success(&Bytes::from(ret));
    }

    #[tokio::test]
    async fn refuses_rpc_of_another_chain() {
        let asserter = Asserter::new();
        push_chain_id(&asserter, 1);

        let result =
            Erc20MetadataFetcher::from_provider(mocked(&asserter), Network::Mainnet, fast_policy(1))
                .await;

        assert!(matches!(
            result,
            Err(FetchError::ChainMismatch {
                expected: 143,
                found: 1
            })
        ));
    }

    #[tokio::test]
    async fn fetches_metadata_into_an_entry() {
        let asserter = Asserter::new();
        push_chain_id(&asserter, 10143);
        push_name(&asserter, "Wrapped Ether");
        push_symbol(&asserter, "WETH");
        push_decimals(&asserter, 18);

        let fetcher =
            Erc20MetadataFetcher::from_provider(mocked(&asserter), Network::Testnet, fast_policy(1))
                .await
                .unwrap();
        let entry = fetcher.fetch(WETH).await.unwrap();

        assert_eq!(entry.chain_id, 10143);
        assert_eq!(entry.address, WETH);
        assert_eq!(entry.name, "Wrapped Ether");
        assert_eq!(entry.symbol, "WETH");
        assert_eq!(entry.decimals, 18);
        assert_eq!(entry.logo_uri, None);
        assert!(entry.extensions.is_empty());
    }

    #[tokio::test]
    async fn gives_up_on_symbol_after_every_attempt_fails() {
        let asserter = Asserter::new();
        push_chain_id(&asserter, 143);
        push_name(&asserter, "Wrapped Ether");
        asserter.push_failure_msg("execution reverted");
        asserter.push_failure_msg("execution reverted");

        let fetcher =
            Erc20MetadataFetcher::from_provider(mocked(&asserter), Network::Mainnet, fast_policy(2))
                .await
                .unwrap();

        match fetcher.fetch(WETH).await {
            Err(FetchError::Exhausted {
                operation,
                attempts,
                last_error,
            }) => {
                assert_eq!(operation, "fetch symbol");
                assert_eq!(attempts, 2);
                assert!(last_error.contains("execution reverted"), "{last_error}");
            }
            other => panic!("expected exhausted symbol read, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn retries_a_flaky_chain_id_read() {
        let asserter = Asserter::new();
        asserter.push_failure_msg("temporarily unavailable");
        push_chain_id(&asserter, 143);

        let fetcher =
            Erc20MetadataFetcher::from_provider(mocked(&asserter), Network::Mainnet, fast_policy(3))
                .await;

        assert!(fetcher.is_ok());
    }
}
