use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Network with id {0} is not supported")]
    UnsupportedNetwork(u64),

    #[error("Unknown network: {0}, expected mainnet, testnet or a chain id")]
    UnknownNetwork(String),

    #[error("Invalid list version {0}, should be <major>.<minor>.<patch>")]
    InvalidVersion(String),

    #[error("Invalid address {0}, expected 0x followed by 40 hex digits")]
    InvalidAddress(String),

    #[error("Address {found} has a bad checksum, expected {expected}")]
    ChecksumMismatch { found: String, expected: String },
}
