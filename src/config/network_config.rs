use crate::args::Args;
use crate::config::constants::LIST_REPOSITORY_BASE;
use crate::config::errors::ConfigError;
use crate::domain::Network;
use alloy::transports::http::reqwest::Url;
use std::path::{Path, PathBuf};

/// Per-network paths and endpoints, resolved from the command line.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub network: Network,
    pub tokens_dir: PathBuf,
}

impl NetworkConfig {
    pub fn init(args: &Args) -> Self {
        let tokens_dir = args
            .tokens_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(args.network.to_string()));

        Self {
            network: args.network,
            tokens_dir,
        }
    }

    pub fn tokens_dir(&self) -> &Path {
        &self.tokens_dir
    }

    pub fn rpc_url(&self, from_args: Option<&str>) -> Result<Url, ConfigError> {
        let raw = from_args
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(self.network.default_rpc_url());

        let url = Url::parse(raw)
            .map_err(|err| ConfigError::InvalidRpcUrl(raw.to_string(), err.to_string()))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(ConfigError::UnsupportedRpcScheme(raw.to_string())),
        }
    }

    pub fn output_path(&self, from_args: Option<&Path>) -> PathBuf {
        from_args
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(self.network.list_file_name()))
    }

    pub fn published_url(&self) -> String {
        format!("{}/{}", LIST_REPOSITORY_BASE, self.network.list_file_name())
    }
}
