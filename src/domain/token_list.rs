use crate::config::constants::LIST_LOGO_URI;
use crate::domain::errors::DomainError;
use crate::domain::{Network, TokenEntry};
use alloy::primitives::Address;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl FromStr for Version {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidVersion(s.to_string());

        let parts: Vec<u32> = s
            .trim()
            .split('.')
            .map(|part| part.parse::<u32>().map_err(|_| invalid()))
            .collect::<Result<_, _>>()?;

        match parts.as_slice() {
            [major, minor, patch] => Ok(Version {
                major: *major,
                minor: *minor,
                patch: *patch,
            }),
            _ => Err(invalid()),
        }
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// The published document: list header plus the ordered token entries.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenListDocument {
    pub name: String,
    #[serde(rename = "logoURI", default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub tokens: Vec<TokenEntry>,
    #[serde(default)]
    pub version: Version,
    #[serde(flatten)]
    pub extensions: BTreeMap<String, Value>,
}

impl TokenListDocument {
    pub fn new(
        network: Network,
        tokens: Vec<TokenEntry>,
        version: Version,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            name: network.list_name().to_string(),
            logo_uri: Some(LIST_LOGO_URI.to_string()),
            keywords: network.keywords(),
            timestamp: Some(now),
            tokens,
            version,
            extensions: BTreeMap::new(),
        }
    }

    /// Keys that occur more than once, in order of their first occurrence.
    pub fn duplicate_keys(&self) -> Vec<(u64, Address)> {
        let mut counts: HashMap<(u64, Address), usize> = HashMap::new();
        let mut order = Vec::new();

        for token in &self.tokens {
            let count = counts.entry(token.key()).or_insert(0);
            if *count == 1 {
                order.push(token.key());
            }
            *count += 1;
        }

        order
    }
}
