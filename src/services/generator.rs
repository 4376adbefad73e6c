use crate::domain::{Network, TokenEntry, TokenListDocument, Version};
use crate::services::errors::GeneratorError;
use crate::services::token_files;
use alloy::primitives::Address;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Assembles every submission file under `dir` into one document.
pub fn generate(
    dir: &Path,
    network: Network,
    version: Version,
    now: DateTime<Utc>,
) -> Result<TokenListDocument, GeneratorError> {
    let t0 = Instant::now();
    let paths = token_files::discover(dir)?;

    let mut seen: HashSet<(u64, Address)> = HashSet::new();
    let mut tokens: Vec<TokenEntry> = Vec::with_capacity(paths.len());

    for path in paths {
        let value = token_files::read_raw(&path)?;
        let token: TokenEntry =
            serde_json::from_value(value).map_err(|err| GeneratorError::InvalidEntry {
                path: path.clone(),
                message: err.to_string(),
            })?;

        if !seen.insert(token.key()) {
            return Err(GeneratorError::DuplicateKey {
                chain_id: token.chain_id,
                address: token.address,
            });
        }

        tokens.push(token);
    }

    tracing::info!(
        tokens = tokens.len(),
        time = t0.elapsed().as_millis(),
        "token list assembled"
    );

    Ok(TokenListDocument::new(network, tokens, version, now))
}

/// Writes `doc` as JSON with 4-space indentation and a trailing newline.
pub fn write_document(path: &Path, doc: &TokenListDocument) -> Result<(), GeneratorError> {
    let write_err = |message: String| GeneratorError::Write {
        path: path.to_path_buf(),
        message,
    };

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut serializer)
        .map_err(|err| write_err(err.to_string()))?;
    buf.push(b'\n');

    fs::write(path, buf).map_err(|err| write_err(err.to_string()))?;

    tracing::info!(path = %path.display(), "token list written");
    Ok(())
}
