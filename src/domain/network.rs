use crate::domain::errors::DomainError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u64)]
pub enum Network {
    Mainnet = 143,
    Testnet = 10143,
}

impl Network {
    pub fn chain_id(self) -> u64 {
        self as u64
    }

    pub fn list_name(self) -> &'static str {
        match self {
            Network::Mainnet => "Monad Mainnet",
            Network::Testnet => "Monad Testnet",
        }
    }

    pub fn keywords(self) -> Vec<String> {
        match self {
            Network::Mainnet => vec!["monad mainnet".to_string()],
            Network::Testnet => vec!["monad testnet".to_string()],
        }
    }

    /// File name the assembled list is published under.
    pub fn list_file_name(self) -> String {
        format!("tokenlist-{self}.json")
    }

    pub fn default_rpc_url(self) -> &'static str {
        match self {
            Network::Mainnet => "https://rpc.monad.xyz",
            Network::Testnet => "https://testnet-rpc.monad.xyz",
        }
    }
}

impl TryFrom<u64> for Network {
    type Error = DomainError;

    fn try_from(id: u64) -> Result<Self, DomainError> {
        match id {
            143 => Ok(Network::Mainnet),
            10143 => Ok(Network::Testnet),
            _ => Err(DomainError::UnsupportedNetwork(id)),
        }
    }
}

impl FromStr for Network {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            other => {
                let id: u64 = other
                    .parse()
                    .map_err(|_| DomainError::UnknownNetwork(s.to_string()))?;
                Network::try_from(id)
            }
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}
