use std::path::Path;

use serde::Deserialize;

use crate::error::SubsetError;
use crate::types::{DEFAULT_BASE_SCORE, Entry};

// Lenient on missing fields; `baseScore` is read as a JSON integer only,
// so a quoted score like "42" falls back to the default
#[derive(Debug, Deserialize)]
struct RawDocument {
    entries: Option<Vec<RawEntry>>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    kanji: Option<String>,
    #[serde(default)]
    hiragana: Option<String>,
    #[serde(rename = "baseScore", default)]
    base_score: Option<serde_json::Value>,
}

/// Parse subset JSON text into entries.
///
/// Entries missing `kanji` or `hiragana` (or with either empty) are skipped.
/// A missing or non-integer `baseScore` becomes [`DEFAULT_BASE_SCORE`].
pub fn parse_subset(json: &str) -> Result<Vec<Entry>, SubsetError> {
    let raw: RawDocument = serde_json::from_str(json).map_err(SubsetError::Parse)?;
    let raw_entries = raw.entries.ok_or(SubsetError::MissingEntries)?;

    let mut entries = Vec::with_capacity(raw_entries.len());
    for (index, raw_entry) in raw_entries.into_iter().enumerate() {
        let kanji = raw_entry.kanji.unwrap_or_default();
        let hiragana = raw_entry.hiragana.unwrap_or_default();
        if kanji.is_empty() || hiragana.is_empty() {
            tracing::debug!("Skipping entry {index}: empty kanji or hiragana");
            continue;
        }

        let base_score = raw_entry
            .base_score
            .as_ref()
            .and_then(serde_json::Value::as_i64)
            .unwrap_or(DEFAULT_BASE_SCORE);

        entries.push(Entry::new(kanji, hiragana, base_score));
    }

    Ok(entries)
}

/// Read a subset file from disk
pub fn read_subset(path: &Path) -> Result<Vec<Entry>, SubsetError> {
    tracing::info!("Loading dictionary subset from file: {}", path.display());
    let json = std::fs::read_to_string(path).map_err(|e| SubsetError::io(path, e))?;
    let entries = parse_subset(&json)?;
    tracing::info!("Loaded {} dictionary entries from file", entries.len());
    Ok(entries)
}

/// Read `path` back and check it holds `expected` entries
pub fn verify_subset(path: &Path, expected: usize) -> Result<Vec<Entry>, SubsetError> {
    let entries = read_subset(path)?;
    if entries.len() != expected {
        return Err(SubsetError::CountMismatch {
            expected,
            found: entries.len(),
        });
    }
    Ok(entries)
}
