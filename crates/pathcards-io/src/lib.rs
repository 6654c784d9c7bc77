//! Pathcards I/O
//!
//! JSON boundary of the comparator: reads index cards from files, hands the
//! comparator domain values, and writes annotated cards back out.
//!
//! # Input
//!
//! An input path is either a JSON file holding one card or an array of
//! cards, or a directory searched recursively for `*.json` files (files
//! marked `_mskcc` are ignored). Cards nest their fields under
//! `extracted_information`:
//!
//! ```json
//! {
//!   "extracted_information": {
//!     "interaction_type": "adds_modification",
//!     "participant_a": {"entity_type": "protein", "identifier": "Uniprot:P1"},
//!     "participant_b": {"entity_type": "protein", "identifier": "Uniprot:P2"},
//!     "modifications": [{"modification_type": "phosphorylation", "position": 5}]
//!   }
//! }
//! ```
//!
//! # Output
//!
//! Every card gains `model_relation` and `score`, plus `model_element`,
//! `best_match` and `match` when something in the model relates to it.
//!
//! # SIF export
//!
//! [`SifConverter`] turns cards into a de-duplicated Simple Interaction
//! Format network of HGNC symbols.

#![warn(missing_docs)]

mod annotate;
mod error;
mod parser;
mod reader;
mod sif;
mod writer;

pub use annotate::{annotate, match_json, score_json};
pub use error::CardIoError;
pub use parser::{parse_card, parse_modifications, parse_participant, split_cards, CardDocument, EXTRACTED_INFORMATION};
pub use reader::{discover_inputs, is_card_file, read_cards, read_json, CardSet, EXCLUDED_MARKER};
pub use sif::{HgncMap, SifConverter, SifEdge, IN_COMPLEX_WITH, IS_UPSTREAM_OF, UNGROUNDED};
pub use writer::{
    collapse, generate_output, match_file_path, take_matches, to_pretty_string, write_cards, write_cards_to,
    OutputOptions,
};
