use serde::{Deserialize, Serialize};

/// Score given to every built-in entry, and to entries read back without one
pub const DEFAULT_BASE_SCORE: i64 = 100;

/// Single dictionary entry as written to the subset file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "kanji")]
    pub surface_form: String, // e.g., "凄い"
    #[serde(rename = "hiragana")]
    pub reading: String, // e.g., "すごい"
    #[serde(rename = "baseScore")]
    pub base_score: i64,
}

impl Entry {
    pub fn new(
        surface_form: impl Into<String>,
        reading: impl Into<String>,
        base_score: i64,
    ) -> Self {
        Self {
            surface_form: surface_form.into(),
            reading: reading.into(),
            base_score,
        }
    }
}

/// Envelope written to disk: `{ "entries": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryDocument {
    pub entries: Vec<Entry>,
}

impl DictionaryDocument {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
