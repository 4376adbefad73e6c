use crate::config::constants::{DEFAULT_MAX_DECIMALS, DEFAULT_MIN_DECIMALS, LOGO_CHECK_CONCURRENCY};
use crate::domain::{token, DomainError, Network, TokenEntry, TokenListDocument};
use crate::services::errors::FilesError;
use crate::services::logo_checker::LogoChecker;
use crate::services::token_files;
use alloy::primitives::Address;
use alloy::transports::http::reqwest::Url;
use futures::{stream, StreamExt};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

const REQUIRED_FIELDS: [&str; 5] = ["chainId", "address", "name", "symbol", "decimals"];
const LOGO_FIELD: &str = "logoURI";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("not readable: {0}")]
    Unreadable(String),

    #[error("missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("{field} should be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("invalid chainId {found}, expected {expected}")]
    ChainIdMismatch { expected: u64, found: u64 },

    #[error("{0} is invalid address")]
    InvalidAddress(String),

    #[error("{found} has a bad checksum, expected {expected}")]
    ChecksumMismatch { found: String, expected: String },

    #[error("invalid decimals {found}, expected {min}..={max}")]
    DecimalsOutOfRange { found: u64, min: u8, max: u8 },

    #[error("{0} is empty")]
    EmptyField(&'static str),

    #[error("{0} is not an http(s) url")]
    InvalidLogoUri(String),

    #[error("logo is not usable: {0}")]
    LogoNotImage(String),

    #[error("duplicate token {address} for chain {chain_id}")]
    DuplicateKey { chain_id: u64, address: Address },

    #[error("list name is empty")]
    EmptyListName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    /// Expected chainId of every entry, any chain when unset
    pub chain_id: Option<u64>,
    pub min_decimals: u8,
    pub max_decimals: u8,
    pub require_logo: bool,
}

impl ValidationRules {
    /// Rules for new submissions to the list of `network`.
    pub fn for_submissions(network: Network) -> Self {
        Self {
            chain_id: Some(network.chain_id()),
            min_decimals: DEFAULT_MIN_DECIMALS,
            max_decimals: DEFAULT_MAX_DECIMALS,
            require_logo: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub issues: Vec<ValidationIssue>,
}

impl FileReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub files: Vec<FileReport>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.files.iter().all(FileReport::is_valid)
    }

    pub fn invalid_count(&self) -> usize {
        self.files.iter().filter(|file| !file.is_valid()).count()
    }
}

/// Parses an EVM address, requiring the `0x` prefix and 40 hex digits.
///
/// Mixed-case input must carry a valid EIP-55 checksum, single-case input is
/// taken as unchecksummed.
pub fn parse_address(raw: &str) -> Result<Address, ValidationIssue> {
    token::parse_address(raw).map_err(|err| match err {
        DomainError::ChecksumMismatch { found, expected } => {
            ValidationIssue::ChecksumMismatch { found, expected }
        }
        _ => ValidationIssue::InvalidAddress(raw.to_string()),
    })
}

/// Checks one raw submission against `rules`.
///
/// Missing fields are reported together and stop the check, every other rule
/// runs and all of its issues are returned.
pub fn validate_value(
    value: &Value,
    rules: &ValidationRules,
) -> Result<TokenEntry, Vec<ValidationIssue>> {
    let Some(obj) = value.as_object() else {
        return Err(vec![ValidationIssue::WrongType {
            field: "entry",
            expected: "an object",
        }]);
    };

    let mut missing: Vec<&'static str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !obj.contains_key(*field))
        .collect();
    if rules.require_logo && !obj.contains_key(LOGO_FIELD) {
        missing.push(LOGO_FIELD);
    }
    if !missing.is_empty() {
        return Err(vec![ValidationIssue::MissingFields(missing)]);
    }

    let mut issues = Vec::new();

    match obj["chainId"].as_u64() {
        Some(found) => {
            if let Some(expected) = rules.chain_id {
                if found != expected {
                    issues.push(ValidationIssue::ChainIdMismatch { expected, found });
                }
            }
        }
        None => issues.push(ValidationIssue::WrongType {
            field: "chainId",
            expected: "an unsigned integer",
        }),
    }

    match obj["address"].as_str() {
        Some(raw) => {
            if let Err(issue) = parse_address(raw) {
                issues.push(issue);
            }
        }
        None => issues.push(ValidationIssue::WrongType {
            field: "address",
            expected: "a string",
        }),
    }

    match obj["decimals"].as_u64() {
        Some(found) => {
            if found < u64::from(rules.min_decimals) || found > u64::from(rules.max_decimals) {
                issues.push(ValidationIssue::DecimalsOutOfRange {
                    found,
                    min: rules.min_decimals,
                    max: rules.max_decimals,
                });
            }
        }
        None => issues.push(ValidationIssue::WrongType {
            field: "decimals",
            expected: "a non-negative integer",
        }),
    }

    check_text(obj, "name", &mut issues);
    check_text(obj, "symbol", &mut issues);

    if let Some(logo) = obj.get(LOGO_FIELD) {
        match logo.as_str() {
            Some(uri) if !is_http_url(uri) => {
                issues.push(ValidationIssue::InvalidLogoUri(uri.to_string()))
            }
            Some(_) => {}
            None => issues.push(ValidationIssue::WrongType {
                field: "logoURI",
                expected: "a string",
            }),
        }
    }

    if !issues.is_empty() {
        return Err(issues);
    }

    serde_json::from_value::<TokenEntry>(value.clone())
        .map_err(|err| vec![ValidationIssue::Unreadable(err.to_string())])
}

fn check_text(obj: &Map<String, Value>, field: &'static str, issues: &mut Vec<ValidationIssue>) {
    match obj[field].as_str() {
        Some(text) if text.trim().is_empty() => issues.push(ValidationIssue::EmptyField(field)),
        Some(_) => {}
        None => issues.push(ValidationIssue::WrongType {
            field,
            expected: "a string",
        }),
    }
}

fn is_http_url(uri: &str) -> bool {
    match Url::parse(uri) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host().is_some(),
        Err(_) => false,
    }
}

/// Document-level checks on an assembled list.
pub fn validate_document(doc: &TokenListDocument) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if doc.name.trim().is_empty() {
        issues.push(ValidationIssue::EmptyListName);
    }

    for (chain_id, address) in doc.duplicate_keys() {
        issues.push(ValidationIssue::DuplicateKey { chain_id, address });
    }

    issues
}

/// Validates every submission file under `dir`.
///
/// A file that can not be read is reported and the run goes on. Logos are only
/// fetched for entries that passed the local rules.
pub async fn validate_dir(
    dir: &Path,
    rules: &ValidationRules,
    logo_checker: Option<&LogoChecker>,
) -> Result<ValidationReport, FilesError> {
    let paths = token_files::discover(dir)?;

    let mut files = Vec::with_capacity(paths.len());
    let mut entries: Vec<(usize, TokenEntry)> = Vec::new();

    for path in paths {
        let issues = match token_files::read_raw(&path) {
            Ok(value) => match validate_value(&value, rules) {
                Ok(entry) => {
                    entries.push((files.len(), entry));
                    Vec::new()
                }
                Err(issues) => issues,
            },
            Err(err) => vec![ValidationIssue::Unreadable(err.to_string())],
        };

        files.push(FileReport { path, issues });
    }

    let mut seen: HashMap<(u64, Address), usize> = HashMap::new();
    for (index, entry) in &entries {
        if seen.insert(entry.key(), *index).is_some() {
            files[*index].issues.push(ValidationIssue::DuplicateKey {
                chain_id: entry.chain_id,
                address: entry.address,
            });
        }
    }

    if let Some(checker) = logo_checker {
        let to_check: Vec<(usize, String)> = entries
            .iter()
            .filter(|(index, _)| files[*index].is_valid())
            .filter_map(|(index, entry)| entry.logo_uri.clone().map(|uri| (*index, uri)))
            .collect();

        let results: Vec<(usize, Result<(), _>)> = stream::iter(to_check)
            .map(|(index, uri)| async move { (index, checker.check(&uri).await) })
            .buffer_unordered(LOGO_CHECK_CONCURRENCY)
            .collect()
            .await;

        for (index, result) in results {
            if let Err(err) = result {
                files[index].issues.push(ValidationIssue::LogoNotImage(err.to_string()));
            }
        }
    }

    let report = ValidationReport { files };
    tracing::info!(
        files = report.files.len(),
        invalid = report.invalid_count(),
        "validation finished"
    );

    Ok(report)
}
