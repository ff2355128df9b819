use crate::types::{DEFAULT_BASE_SCORE, DictionaryDocument, Entry};

/// Placeholder until the real IPADIC conversion lands.
/// Order is kept stable so generated files can be diffed.
const BUILTIN_ENTRIES: [(&str, &str); 15] = [
    ("凄い", "すごい"),
    ("可愛い", "かわいい"),
    ("美味しい", "おいしい"),
    ("新しい", "あたらしい"),
    ("古い", "ふるい"),
    ("大きい", "おおきい"),
    ("小さい", "ちいさい"),
    ("速い", "はやい"),
    ("遅い", "おそい"),
    ("強い", "つよい"),
    ("弱い", "よわい"),
    ("高い", "たかい"),
    ("低い", "ひくい"),
    ("深い", "ふかい"),
    ("浅い", "あさい"),
];

/// Number of entries in the built-in subset
pub const BUILTIN_ENTRY_COUNT: usize = BUILTIN_ENTRIES.len();

/// Build the built-in entries, fresh on every call
pub fn builtin_entries() -> Vec<Entry> {
    BUILTIN_ENTRIES
        .iter()
        .map(|(kanji, hiragana)| Entry::new(*kanji, *hiragana, DEFAULT_BASE_SCORE))
        .collect()
}

pub fn builtin_document() -> DictionaryDocument {
    DictionaryDocument::new(builtin_entries())
}
