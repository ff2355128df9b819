pub mod builtin;
pub mod error;
pub mod generator;
pub mod reader;
pub mod types;

#[cfg(test)]
mod tests;

pub use builtin::{BUILTIN_ENTRY_COUNT, builtin_document, builtin_entries};
pub use error::SubsetError;
pub use generator::{
    DEFAULT_OUTPUT, GenerateReport, generate, generate_with, render, write_document,
};
pub use reader::{parse_subset, read_subset, verify_subset};
pub use types::{DEFAULT_BASE_SCORE, DictionaryDocument, Entry};
