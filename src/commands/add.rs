use crate::app_error::AppError;
use crate::config::network_config::NetworkConfig;
use crate::services::retry::RetryPolicy;
use crate::services::token_fetcher::Erc20MetadataFetcher;
use crate::services::token_files;
use crate::services::validator::parse_address;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader};

pub async fn add(
    config: &NetworkConfig,
    address: Option<&str>,
    rpc_url: Option<&str>,
) -> Result<(), AppError> {
    let raw = match address.map(str::trim).filter(|s| !s.is_empty()) {
        Some(address) => address.to_string(),
        None => prompt_address().await?,
    };
    if raw.is_empty() {
        return Err(AppError::NoAddress);
    }

    println!("Validating address: {raw}");
    let address = parse_address(&raw).map_err(AppError::InvalidAddress)?;
    println!("Checksummed address: {}", address.to_checksum(None));

    let rpc_url = config.rpc_url(rpc_url)?;
    let fetcher =
        Erc20MetadataFetcher::connect(rpc_url.as_str(), config.network, RetryPolicy::default())
            .await?;
    println!("Connected successfully");

    println!("\nFetching token data from {address}...");
    let entry = fetcher.fetch(address).await?;

    println!("\nToken found:");
    println!("  Name: {}", entry.name);
    println!("  Symbol: {}", entry.symbol);
    println!("  Decimals: {}", entry.decimals);

    let data_file = token_files::write_entry(config.tokens_dir(), &entry)?;

    println!("\n✓ Token successfully added!");
    println!("  Data file: {}", data_file.display());
    println!(
        "\n  Note: add a logoURI to {} before submitting, validation requires it.",
        data_file.display()
    );

    Ok(())
}

async fn prompt_address() -> Result<String, AppError> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(b"Enter token contract address: ").await?;
    stdout.flush().await?;

    read_address(BufReader::new(tokio::io::stdin())).await
}

async fn read_address<R: AsyncBufRead + Unpin>(mut reader: R) -> Result<String, AppError> {
    let mut line = String::new();
    reader.read_line(&mut line).await?;

    Ok(line.trim().to_string())
}
