//! Input discovery and card loading

use crate::error::CardIoError;
use crate::parser::{split_cards, CardDocument};
use pathcards_domain::IndexCard;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File name marker of exported files that are never read as input
pub const EXCLUDED_MARKER: &str = "_mskcc";

/// Cards read from one or more input files
#[derive(Debug, Clone, Default)]
pub struct CardSet {
    /// Successfully parsed cards in input order
    pub documents: Vec<CardDocument>,

    /// Cards or files dropped because they could not be parsed
    pub skipped: usize,
}

impl CardSet {
    /// Number of parsed cards
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True if nothing was parsed
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Domain cards, cloned out of the documents
    pub fn cards(&self) -> Vec<IndexCard> {
        self.documents.iter().map(|doc| doc.card.clone()).collect()
    }

    /// Split into raw JSON and domain cards, position for position
    pub fn into_parts(self) -> (Vec<Value>, Vec<IndexCard>) {
        self.documents
            .into_iter()
            .map(|doc| (doc.raw, doc.card))
            .unzip()
    }

    fn absorb(&mut self, raw_cards: Vec<Value>, source: &Path) {
        for (index, raw) in raw_cards.into_iter().enumerate() {
            match CardDocument::parse(raw, index) {
                Ok(doc) => self.documents.push(doc),
                Err(e) => {
                    warn!("Skipping card in {}: {}", source.display(), e);
                    self.skipped += 1;
                }
            }
        }
    }
}

/// Check if a path names a card file
///
/// Card files are JSON files whose name does not carry the excluded marker.
pub fn is_card_file(path: &Path) -> bool {
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name.to_lowercase(),
        None => return false,
    };

    name.ends_with(".json") && !name.contains(EXCLUDED_MARKER)
}

/// Resolve an input path into the card files it names
///
/// A file is returned as is. A directory is walked recursively and its card
/// files are returned in sorted order. Symlinked directories are not entered.
pub fn discover_inputs(path: &Path) -> Result<Vec<PathBuf>, CardIoError> {
    if !path.is_dir() {
        if !path.exists() {
            return Err(CardIoError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )));
        }
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    walk(path, &mut files)?;
    files.retain(|file| is_card_file(file));
    files.sort();
    Ok(files)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), CardIoError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            walk(&entry.path(), files)?;
        } else {
            files.push(entry.path());
        }
    }
    Ok(())
}

/// Read a JSON document from a file
pub fn read_json(path: &Path) -> Result<Value, CardIoError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Read every card under an input path
///
/// Malformed cards are logged and skipped. When the path is a directory,
/// unreadable files are skipped too; a single unreadable file is an error.
pub fn read_cards(path: &Path) -> Result<CardSet, CardIoError> {
    let files = discover_inputs(path)?;
    let walking = path.is_dir();
    let mut set = CardSet::default();

    for file in &files {
        info!("Reading cards from {}", file.display());

        match read_json(file) {
            Ok(json) => set.absorb(split_cards(json), file),
            Err(e) if walking => {
                warn!("Skipping file {}: {}", file.display(), e);
                set.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Read {} cards from {} file(s) ({} skipped)",
        set.len(),
        files.len(),
        set.skipped
    );

    Ok(set)
}
