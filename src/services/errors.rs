use alloy::primitives::Address;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilesError {
    #[error("Tokens directory not found: {0}")]
    MissingDirectory(PathBuf),

    #[error("Unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Unable to serialize token entry: {0}")]
    Serialize(String),

    #[error("Token directory already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("Symbol {0:?} can not be used as a directory name")]
    InvalidSymbol(String),
}

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Files(#[from] FilesError),

    #[error("Invalid token entry in {path}: {message}")]
    InvalidEntry { path: PathBuf, message: String },

    #[error("Duplicate token {address} for chain {chain_id}")]
    DuplicateKey { chain_id: u64, address: Address },

    #[error("Unable to write {path}: {message}")]
    Write { path: PathBuf, message: String },
}

#[derive(Debug, Clone, Error)]
pub enum LoaderError {
    #[error("Unable to load list({0}): {1}")]
    UnableToLoadList(String, String),

    #[error("Malformed token list({0}): {1}")]
    Malformed(String, String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LogoError {
    #[error("Unable to build http client: {0}")]
    Client(String),

    #[error("Request to {0} failed: {1}")]
    Request(String, String),

    #[error("{0} responded with status {1}")]
    Status(String, u16),

    #[error("{0} is not an image (content type: {1})")]
    NotAnImage(String, String),
}

#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("Failed to connect to rpc at {0}: {1}")]
    Connection(String, String),

    #[error("Rpc serves chain {found}, expected {expected}")]
    ChainMismatch { expected: u64, found: u64 },

    #[error("Failed to {operation} after {attempts} attempts: {last_error}")]
    Exhausted {
        operation: &'static str,
        attempts: u32,
        last_error: String,
    },
}
