// sequence.rs

use crate::error::{ConvertError, ConvertResult};
use log::{debug, info};
use std::fs;
use std::path::Path;

fn is_delimiter(c: char) -> bool {
    matches!(c, '-' | '\r' | '\n')
}

/// Split raw sequence text into tokens.
///
/// Surrounding whitespace is trimmed first, then the text is split on runs of
/// `-`, CR and LF. Empty pieces are dropped.
pub fn tokenize(raw: &str) -> Vec<&str> {
    raw.trim()
        .split(is_delimiter)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Read the sequence file at `path` as UTF-8 text.
///
/// A missing file is reported as [`ConvertError::InputNotFound`] before any
/// read is attempted.
pub fn read_sequence(path: &Path) -> ConvertResult<String> {
    if !path.exists() {
        return Err(ConvertError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    String::from_utf8(bytes).map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and tokenize the sequence file at `path`.
pub fn load_tokens(path: &Path) -> ConvertResult<Vec<String>> {
    let raw = read_sequence(path)?;
    let tokens: Vec<String> = tokenize(&raw).into_iter().map(String::from).collect();
    info!("Loaded {} tokens from {}", tokens.len(), path.display());
    Ok(tokens)
}
