//! Output writing

use crate::error::CardIoError;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Output options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Keep per-candidate match arrays
    ///
    /// Written to a `<stem>_match.json` side file when the output is a file,
    /// inline when writing to a stream.
    pub detailed_output: bool,
}

/// A single card is written as itself, several as an array
pub fn collapse(mut values: Vec<Value>) -> Value {
    if values.len() == 1 {
        values.remove(0)
    } else {
        Value::Array(values)
    }
}

/// Remove the match array from a card, returning it
pub fn take_matches(card: &mut Value) -> Option<Value> {
    card.as_object_mut().and_then(|obj| obj.remove("match"))
}

/// Output document for a batch of annotated cards
///
/// Match arrays are dropped unless detailed output is on.
pub fn generate_output(cards: &[Value], options: &OutputOptions) -> Value {
    let cards = cards
        .iter()
        .cloned()
        .map(|mut card| {
            if !options.detailed_output {
                take_matches(&mut card);
            }
            card
        })
        .collect();

    collapse(cards)
}

/// Side file holding the match arrays for an output file
///
/// `out/cards.json` maps to `out/cards_match.json`.
pub fn match_file_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    output.with_file_name(format!("{}_match.json", stem))
}

/// Write annotated cards to a file
///
/// With detailed output the match arrays go to the side file, one entry per
/// card, collapsed like the main output. Returns the side file path when one
/// was written.
pub fn write_cards(output: &Path, cards: &[Value], options: &OutputOptions) -> Result<Option<PathBuf>, CardIoError> {
    let mut main = Vec::with_capacity(cards.len());
    let mut matches = Vec::with_capacity(cards.len());

    for card in cards {
        let mut card = card.clone();
        let card_matches = take_matches(&mut card);
        matches.push(card_matches.unwrap_or_else(|| Value::Array(Vec::new())));
        main.push(card);
    }

    fs::write(output, to_pretty_string(&collapse(main))?)?;
    info!("Wrote {} cards to {}", cards.len(), output.display());

    let has_matches = matches
        .iter()
        .any(|m| m.as_array().is_some_and(|entries| !entries.is_empty()));

    if !options.detailed_output || !has_matches {
        return Ok(None);
    }

    let match_file = match_file_path(output);
    fs::write(&match_file, to_pretty_string(&collapse(matches))?)?;
    info!("Wrote match details to {}", match_file.display());

    Ok(Some(match_file))
}

/// Write annotated cards to a stream
pub fn write_cards_to<W: Write>(writer: &mut W, cards: &[Value], options: &OutputOptions) -> Result<(), CardIoError> {
    let output = generate_output(cards, options);
    writeln!(writer, "{}", to_pretty_string(&output)?)?;
    Ok(())
}

/// Pretty-printed JSON text
pub fn to_pretty_string(value: &Value) -> Result<String, CardIoError> {
    Ok(serde_json::to_string_pretty(value)?)
}
