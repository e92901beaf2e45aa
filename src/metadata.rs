//! Emoji metadata table loader
//!
//! The table is a two-column delimited file: display glyph, then description.
//! Only the first comma splits; descriptions may contain further commas and
//! are trimmed of surrounding spaces and double quotes. The row count must
//! match the catalog size; that check lives in the CLI because only it knows
//! which catalog the table describes.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::search::SearchError;

/// One metadata row: display glyph and human-readable description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiMetadata {
    pub character: String,
    pub description: String,
}

fn unavailable(path: &Path, err: &std::io::Error) -> SearchError {
    SearchError::SourceUnavailable {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Load the metadata table, skipping blank lines
pub fn load_metadata<P: AsRef<Path>>(path: P) -> Result<Vec<EmojiMetadata>, SearchError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| unavailable(path, &e))?;

    let mut rows = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| unavailable(path, &e))?;
        if line.trim().is_empty() {
            continue;
        }

        let (character, description) = match line.split_once(',') {
            Some((glyph, rest)) => (
                glyph.to_string(),
                rest.trim_matches(|c| c == ' ' || c == '"').to_string(),
            ),
            None => (line, String::new()),
        };

        rows.push(EmojiMetadata {
            character,
            description,
        });
    }

    Ok(rows)
}
