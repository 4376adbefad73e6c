use crate::config::constants::{HTTP_TIMEOUT, IMAGE_CONTENT_TYPES};
use crate::services::errors::LogoError;
use alloy::transports::http::reqwest::{header::CONTENT_TYPE, Client};

pub struct LogoChecker {
    client: Client,
}

impl LogoChecker {
    pub fn new() -> Result<Self, LogoError> {
        let client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|err| LogoError::Client(err.to_string()))?;

        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Sends `HEAD uri` and accepts the logo when the server reports an image type.
    pub async fn check(&self, uri: &str) -> Result<(), LogoError> {
        let response = self
            .client
            .head(uri)
            .send()
            .await
            .map_err(|err| LogoError::Request(uri.to_string(), err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LogoError::Status(uri.to_string(), status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();

        if is_image_content_type(&content_type) {
            Ok(())
        } else {
            Err(LogoError::NotAnImage(uri.to_string(), content_type))
        }
    }
}

pub fn is_image_content_type(content_type: &str) -> bool {
    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    IMAGE_CONTENT_TYPES.contains(&media_type.as_str())
}
