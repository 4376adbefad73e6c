use crate::app_error::AppError;
use crate::config::network_config::NetworkConfig;
use crate::domain::Version;
use crate::services::generator;
use chrono::Utc;
use std::path::Path;

pub fn generate(
    config: &NetworkConfig,
    output: Option<&Path>,
    version: Version,
) -> Result<(), AppError> {
    let doc = generator::generate(config.tokens_dir(), config.network, version, Utc::now())?;

    if doc.tokens.is_empty() {
        tracing::warn!(dir = %config.tokens_dir().display(), "no token files found");
    }

    let output = config.output_path(output);
    generator::write_document(&output, &doc)?;

    println!(
        "Token list '{}' created with {} tokens (version {}).",
        output.display(),
        doc.tokens.len(),
        doc.version
    );

    Ok(())
}
