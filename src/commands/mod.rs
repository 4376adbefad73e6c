pub mod add;
pub mod check;
pub mod generate;
pub mod validate;

use crate::app_error::AppError;
use crate::args::{Args, Command};
use crate::config::network_config::NetworkConfig;
use crate::domain::Network;
use crate::services::validator::ValidationRules;

pub async fn run(args: Args) -> Result<(), AppError> {
    let config = NetworkConfig::init(&args);
    tracing::debug!(network = %config.network, dir = %config.tokens_dir.display(), "config resolved");

    match args.command {
        Command::Validate {
            skip_logo_check,
            min_decimals,
            max_decimals,
        } => {
            let rules = submission_rules(config.network, min_decimals, max_decimals)?;
            validate::validate(&config, &rules, !skip_logo_check).await
        }
        Command::Generate {
            output,
            list_version,
        } => generate::generate(&config, output.as_deref(), list_version),
        Command::Check { source } => check::check(&config, source.as_deref()).await,
        Command::Add { address, rpc_url } => {
            add::add(&config, address.as_deref(), rpc_url.as_deref()).await
        }
    }
}

fn submission_rules(
    network: Network,
    min_decimals: u8,
    max_decimals: u8,
) -> Result<ValidationRules, AppError> {
    if min_decimals > max_decimals {
        return Err(AppError::InvalidDecimalsRange(min_decimals, max_decimals));
    }

    Ok(ValidationRules {
        min_decimals,
        max_decimals,
        ..ValidationRules::for_submissions(network)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_decimals_range_is_rejected() {
        assert!(matches!(
            submission_rules(Network::Mainnet, 40, 10),
            Err(AppError::InvalidDecimalsRange(40, 10))
        ));
    }

    #[test]
    fn decimals_flags_override_submission_defaults() {
        let rules = submission_rules(Network::Testnet, 0, 18).unwrap();
        assert_eq!(rules.min_decimals, 0);
        assert_eq!(rules.max_decimals, 18);
        assert_eq!(rules.chain_id, Some(10143));
        assert!(rules.require_logo);
    }
}
