use crate::config::constants::ENTRY_FILE_NAME;
use crate::domain::TokenEntry;
use crate::services::errors::FilesError;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Lists submission files under `dir`, sorted by path.
///
/// Both `<dir>/<any>.json(c)` and `<dir>/<name>/data.json` are picked up.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>, FilesError> {
    if !dir.is_dir() {
        return Err(FilesError::MissingDirectory(dir.to_path_buf()));
    }

    let io_err = |source: std::io::Error| FilesError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();

        if path.is_dir() {
            let nested = path.join(ENTRY_FILE_NAME);
            if nested.is_file() {
                files.push(nested);
            }
        } else if is_submission_file(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn is_submission_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("json") | Some("jsonc")
    )
}

/// Reads a submission file as JSON5, so comments and trailing commas are fine.
pub fn read_raw(path: &Path) -> Result<Value, FilesError> {
    let content = fs::read_to_string(path).map_err(|source| FilesError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    json5::from_str::<Value>(&content).map_err(|err| FilesError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Short name for reports: `USDC/data.json` rather than the bare `data.json`.
pub fn display_name(path: &Path) -> String {
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    if file == ENTRY_FILE_NAME {
        if let Some(parent) = path.parent().and_then(|p| p.file_name()) {
            return format!("{}/{}", parent.to_string_lossy(), file);
        }
    }

    file
}

/// Writes `entry` to `<dir>/<SYMBOL>/data.json`, never overwriting.
pub fn write_entry(dir: &Path, entry: &TokenEntry) -> Result<PathBuf, FilesError> {
    if !dir.is_dir() {
        return Err(FilesError::MissingDirectory(dir.to_path_buf()));
    }

    let symbol = entry.symbol.trim();
    if symbol.is_empty()
        || symbol == "."
        || symbol == ".."
        || symbol.contains(['/', '\\'])
    {
        return Err(FilesError::InvalidSymbol(entry.symbol.clone()));
    }

    let token_dir = dir.join(symbol);
    if token_dir.exists() {
        return Err(FilesError::AlreadyExists(token_dir));
    }

    let mut body =
        serde_json::to_string_pretty(entry).map_err(|err| FilesError::Serialize(err.to_string()))?;
    body.push('\n');

    let data_file = create_token_dir(&token_dir, ENTRY_FILE_NAME, &body)?;

    tracing::info!(path = %data_file.display(), symbol, "token entry written");

    Ok(data_file)
}

/// Creates `token_dir` holding one file; the directory is removed again if
/// the file cannot be written.
fn create_token_dir(token_dir: &Path, file_name: &str, body: &str) -> Result<PathBuf, FilesError> {
    fs::create_dir(token_dir).map_err(|source| FilesError::Io {
        path: token_dir.to_path_buf(),
        source,
    })?;

    let data_file = token_dir.join(file_name);
    if let Err(source) = fs::write(&data_file, body) {
        if let Err(err) = fs::remove_dir_all(token_dir) {
            tracing::warn!(path = %token_dir.display(), error = %err, "unable to remove token dir");
        }
        return Err(FilesError::Io {
            path: data_file,
            source,
        });
    }

    Ok(data_file)
}
