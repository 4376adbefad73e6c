use crate::config::constants::{DEFAULT_LIST_VERSION, DEFAULT_MAX_DECIMALS, DEFAULT_MIN_DECIMALS};
use crate::domain::{Network, Version};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "token-list", version, about = "Maintain the network token lists")]
pub struct Args {
    #[arg(long, env = "TOKEN_LIST_NETWORK", default_value = "mainnet", global = true)]
    pub network: Network,

    /// Directory with one submission file per token, defaults to the network name
    #[arg(long, env = "TOKENS_DIR", global = true)]
    pub tokens_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check every submission file against the entry rules
    Validate {
        #[arg(long, env = "SKIP_LOGO_CHECK")]
        skip_logo_check: bool,

        #[arg(long, default_value_t = DEFAULT_MIN_DECIMALS)]
        min_decimals: u8,

        #[arg(long, default_value_t = DEFAULT_MAX_DECIMALS)]
        max_decimals: u8,
    },

    /// Assemble the submission files into a token list document
    Generate {
        #[arg(long, env = "TOKEN_LIST_OUTPUT")]
        output: Option<PathBuf>,

        #[arg(long, env = "TOKEN_LIST_VERSION", default_value = DEFAULT_LIST_VERSION)]
        list_version: Version,
    },

    /// Check a built document, by path or URL, defaults to the published list
    Check { source: Option<String> },

    /// Read token metadata from the chain and write a new submission file
    Add {
        address: Option<String>,

        #[arg(long, env = "MONAD_RPC_URL")]
        rpc_url: Option<String>,
    },
}

impl Args {
    pub fn from_env() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_validate_with_defaults() {
        let args = Args::try_parse_from(["token-list", "validate"]).unwrap();
        assert_eq!(args.network, Network::Mainnet);
        match args.command {
            Command::Validate {
                skip_logo_check,
                min_decimals,
                max_decimals,
            } => {
                assert!(!skip_logo_check);
                assert_eq!(min_decimals, 6);
                assert_eq!(max_decimals, 36);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "token-list",
            "generate",
            "--network",
            "testnet",
            "--tokens-dir",
            "lists/testnet",
            "--list-version",
            "1.2.3",
        ])
        .unwrap();

        assert_eq!(args.network, Network::Testnet);
        assert_eq!(args.tokens_dir, Some(PathBuf::from("lists/testnet")));
        match args.command {
            Command::Generate { list_version, .. } => assert_eq!(list_version.to_string(), "1.2.3"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_version() {
        assert!(Args::try_parse_from(["token-list", "generate", "--list-version", "one"]).is_err());
    }
}
