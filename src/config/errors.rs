use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Invalid rpc url {0}: {1}")]
    InvalidRpcUrl(String, String),

    #[error("Rpc url {0} should use http or https")]
    UnsupportedRpcScheme(String),
}
