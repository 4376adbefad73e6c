use crate::config::constants::HTTP_TIMEOUT;
use crate::domain::TokenListDocument;
use crate::services::errors::LoaderError;
use alloy::transports::http::reqwest::Client;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSource {
    Path(PathBuf),
    Url(String),
}

impl From<&str> for ListSource {
    fn from(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            ListSource::Url(raw.to_string())
        } else {
            ListSource::Path(PathBuf::from(raw))
        }
    }
}

impl Display for ListSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ListSource::Path(path) => write!(f, "{}", path.display()),
            ListSource::Url(url) => write!(f, "{url}"),
        }
    }
}

pub struct ListLoader {
    client: Client,
}

impl ListLoader {
    pub fn new() -> Result<Self, LoaderError> {
        let client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|err| LoaderError::UnableToLoadList("http client".into(), err.to_string()))?;

        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub async fn load(&self, source: &ListSource) -> Result<TokenListDocument, LoaderError> {
        let name = source.to_string();

        let text = match source {
            ListSource::Path(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|err| LoaderError::UnableToLoadList(name.clone(), err.to_string()))?,
            ListSource::Url(url) => self.fetch_text(url).await?,
        };

        let doc = parse_document(&name, &text)?;
        tracing::info!(list = %name, tokens = doc.tokens.len(), "token list loaded");

        Ok(doc)
    }

    async fn fetch_text(&self, url: &str) -> Result<String, LoaderError> {
        self.client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| LoaderError::UnableToLoadList(url.to_string(), err.to_string()))?
            .text()
            .await
            .map_err(|err| LoaderError::UnableToLoadList(url.to_string(), err.to_string()))
    }
}

pub fn parse_document(source: &str, text: &str) -> Result<TokenListDocument, LoaderError> {
    serde_json::from_str(text).map_err(|err| LoaderError::Malformed(source.to_string(), err.to_string()))
}
