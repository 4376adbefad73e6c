use crate::app_error::AppError;
use crate::config::network_config::NetworkConfig;
use crate::services::logo_checker::LogoChecker;
use crate::services::token_files::display_name;
use crate::services::validator::{validate_dir, ValidationRules};

pub async fn validate(
    config: &NetworkConfig,
    rules: &ValidationRules,
    check_logos: bool,
) -> Result<(), AppError> {
    let checker = if check_logos {
        Some(LogoChecker::new()?)
    } else {
        None
    };

    let report = validate_dir(config.tokens_dir(), rules, checker.as_ref()).await?;

    if report.files.is_empty() {
        println!("⚠️ No JSON files found in {}", config.tokens_dir().display());
        return Ok(());
    }

    println!("Validating {} files...\n", report.files.len());
    for file in &report.files {
        let name = display_name(&file.path);
        if file.is_valid() {
            println!("✅ {name} is valid.");
            continue;
        }

        for issue in &file.issues {
            println!("❌ {name}: {issue}");
        }
        println!("❌ {name} is invalid.");
    }

    if report.is_valid() {
        Ok(())
    } else {
        Err(AppError::ValidationFailed(
            report.invalid_count(),
            report.files.len(),
        ))
    }
}
