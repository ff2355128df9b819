use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::builtin::builtin_document;
use crate::error::SubsetError;
use crate::types::DictionaryDocument;

/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "ipadic-subset.json";

/// What a finished `generate` run wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub path: PathBuf,
    pub entry_count: usize,
}

/// Serialize a document the way the subset file is stored:
/// pretty-printed with 2-space indent, non-ASCII kept literal.
pub fn render(document: &DictionaryDocument) -> Result<String, SubsetError> {
    let json = serde_json::to_string_pretty(document).map_err(SubsetError::Serialize)?;
    tracing::debug!(
        "Rendered {} entries into {} bytes",
        document.entry_count(),
        json.len()
    );
    Ok(json)
}

/// Write any document to `path`, truncating an existing file
pub fn write_document(path: &Path, document: &DictionaryDocument) -> Result<(), SubsetError> {
    let json = render(document)?;
    std::fs::write(path, json).map_err(|e| SubsetError::io(path, e))?;
    tracing::info!("Wrote dictionary subset to {}", path.display());
    Ok(())
}

/// Generate the built-in subset at `path`, reporting progress on stdout
pub fn generate(path: &Path) -> Result<GenerateReport, SubsetError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    generate_with(path, &mut out)
}

/// Same as [`generate`], with progress lines going to `out`
pub fn generate_with<W: Write>(path: &Path, out: &mut W) -> Result<GenerateReport, SubsetError> {
    writeln!(out, "Generating IPADIC-compatible dictionary...").map_err(SubsetError::Report)?;

    let document = builtin_document();
    write_document(path, &document)?;

    let report = GenerateReport {
        path: path.to_path_buf(),
        entry_count: document.entry_count(),
    };

    writeln!(out, "Generated: {}", report.path.display()).map_err(SubsetError::Report)?;
    writeln!(out, "Entries: {}", report.entry_count).map_err(SubsetError::Report)?;

    Ok(report)
}
