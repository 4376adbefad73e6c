use crate::app_error::AppError;
use crate::config::network_config::NetworkConfig;
use crate::services::list_loader::{ListLoader, ListSource};
use crate::services::validator::validate_document;

pub async fn check(config: &NetworkConfig, source: Option<&str>) -> Result<(), AppError> {
    let source = match source {
        Some(source) => ListSource::from(source),
        None => ListSource::Url(config.published_url()),
    };

    let loader = ListLoader::new()?;
    let doc = loader.load(&source).await?;

    let issues = validate_document(&doc);
    if issues.is_empty() {
        println!(
            "✅ {} ({}, version {}) has {} tokens and no issues.",
            source,
            doc.name,
            doc.version,
            doc.tokens.len()
        );
        return Ok(());
    }

    for issue in &issues {
        println!("❌ {issue}");
    }

    Err(AppError::DocumentInvalid(issues.len()))
}
