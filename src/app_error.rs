use crate::config::errors::ConfigError;
use crate::services::errors::{FetchError, FilesError, GeneratorError, LoaderError, LogoError};
use crate::services::validator::ValidationIssue;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Files(#[from] FilesError),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    Loader(#[from] LoaderError),

    #[error(transparent)]
    Logo(#[from] LogoError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Invalid address: {0}")]
    InvalidAddress(ValidationIssue),

    #[error("min decimals {0} is greater than max decimals {1}")]
    InvalidDecimalsRange(u8, u8),

    #[error("No address provided")]
    NoAddress,

    #[error("Unable to read input: {0}")]
    Input(#[from] std::io::Error),

    #[error("{0} of {1} token files are invalid")]
    ValidationFailed(usize, usize),

    #[error("Token list has {0} issue(s)")]
    DocumentInvalid(usize),
}
