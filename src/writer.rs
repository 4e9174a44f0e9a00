use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use crate::error::{Result, ScrapeError};
use crate::model::Corpus;

const INDENT: &[u8] = b"    ";

/// Pretty-print with 4-space indentation. Non-ASCII is written as-is.
pub fn to_json(corpus: &Corpus) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    corpus.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// Write the corpus to `path`, replacing whatever is there.
pub fn write_corpus(path: &Path, corpus: &Corpus) -> Result<()> {
    let json = to_json(corpus)?;
    std::fs::write(path, json).map_err(|source| ScrapeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        years = corpus.len(),
        categories = corpus.iter().map(|y| y.category_count()).sum::<usize>(),
        "wrote corpus"
    );
    Ok(())
}

/// Read a previously written document back into memory.
#[allow(dead_code)]
pub fn load_corpus(path: &Path) -> Result<Corpus> {
    let json = std::fs::read_to_string(path).map_err(|source| ScrapeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&json)?)
}

// ── Tests ──
