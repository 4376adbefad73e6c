use crate::domain::errors::DomainError;
use alloy::primitives::Address;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;

/// One deployed token as it appears in a list and in a submission file.
///
/// Keys the tooling does not know about are kept in `extensions` and written
/// back unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenEntry {
    pub chain_id: u64,
    #[serde(
        serialize_with = "serialize_checksummed",
        deserialize_with = "deserialize_strict"
    )]
    pub address: Address,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    #[serde(rename = "logoURI", default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
    #[serde(flatten)]
    pub extensions: BTreeMap<String, Value>,
}

impl TokenEntry {
    /// `(chainId, address)`, unique within a list.
    pub fn key(&self) -> (u64, Address) {
        (self.chain_id, self.address)
    }
}

/// Parses an EVM address, requiring the `0x` prefix and 40 hex digits.
///
/// Mixed-case input must carry a valid EIP-55 checksum.
pub fn parse_address(raw: &str) -> Result<Address, DomainError> {
    let invalid = || DomainError::InvalidAddress(raw.to_string());

    let hex = raw.strip_prefix("0x").ok_or_else(invalid)?;
    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let address = Address::from_str(raw).map_err(|_| invalid())?;

    let has_lower = hex.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = hex.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        let expected = address.to_checksum(None);
        if expected != raw {
            return Err(DomainError::ChecksumMismatch {
                found: raw.to_string(),
                expected,
            });
        }
    }

    Ok(address)
}

fn deserialize_strict<'de, D>(deserializer: D) -> Result<Address, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_address(&raw).map_err(serde::de::Error::custom)
}

fn serialize_checksummed<S>(address: &Address, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&address.to_checksum(None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;
    use serde_json::json;

    #[test]
    fn serializes_with_list_field_names() {
        let entry = TokenEntry {
            chain_id: 143,
            address: address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
            name: "Wrapped Ether".into(),
            symbol: "WETH".into(),
            decimals: 18,
            logo_uri: Some("https://example.com/weth.svg".into()),
            extensions: BTreeMap::new(),
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            json!({
                "chainId": 143,
                "address": "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
                "name": "Wrapped Ether",
                "symbol": "WETH",
                "decimals": 18,
                "logoURI": "https://example.com/weth.svg"
            })
        );
    }

    #[test]
    fn keeps_unknown_keys_and_omits_missing_logo() {
        let entry: TokenEntry = serde_json::from_value(json!({
            "chainId": 143,
            "address": "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
            "name": "Wrapped Ether",
            "symbol": "WETH",
            "decimals": 18,
            "tags": ["wrapped"]
        }))
        .unwrap();

        assert_eq!(entry.logo_uri, None);
        assert_eq!(entry.extensions.get("tags"), Some(&json!(["wrapped"])));

        let value = serde_json::to_value(&entry).unwrap();
        assert!(value.get("logoURI").is_none());
        assert_eq!(value["tags"], json!(["wrapped"]));
        assert_eq!(value["address"], "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
    }

    #[test]
    fn decimals_above_u8_do_not_parse() {
        let parsed = serde_json::from_value::<TokenEntry>(json!({
            "chainId": 143,
            "address": "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
            "name": "Wrapped Ether",
            "symbol": "WETH",
            "decimals": 256
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn address_without_prefix_does_not_parse() {
        let parsed = serde_json::from_value::<TokenEntry>(json!({
            "chainId": 143,
            "address": "c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
            "name": "Wrapped Ether",
            "symbol": "WETH",
            "decimals": 18
        }));
        let err = parsed.unwrap_err().to_string();
        assert!(err.contains("expected 0x followed by 40 hex digits"), "{err}");
    }

    #[test]
    fn address_with_bad_checksum_does_not_parse() {
        let parsed = serde_json::from_value::<TokenEntry>(json!({
            "chainId": 143,
            "address": "0xc02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
            "name": "Wrapped Ether",
            "symbol": "WETH",
            "decimals": 18
        }));
        assert!(parsed.is_err());
    }
}
