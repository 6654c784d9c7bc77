//! Pathcards Domain Layer
//!
//! This crate contains the domain model shared by every other Pathcards crate.
//! It has ZERO external dependencies and defines index cards, participants,
//! interaction features and the outcome vocabulary used by the comparator.
//!
//! ## Key Concepts
//!
//! - **Index card**: One extracted or curated molecular interaction
//! - **Participant**: A simple entity, a complex, or a protein family
//! - **Features**: Modifications and translocations attached to an interaction
//! - **Comparison outcome**: How two feature sets relate (exact, subset, ...)
//! - **Model relation**: Final classification of an inference card
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure functions only; no I/O
//! - JSON parsing lives in `pathcards-io`, matching in `pathcards-comparator`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod card;
pub mod identifier;
pub mod participant;
pub mod relation;
pub mod traits;

// Re-exports for convenience
pub use card::{IndexCard, InteractionType, Modification, Translocation};
pub use identifier::{normalize_id, IdSet};
pub use participant::{extract_all_ids, Participant};
pub use relation::{ComparisonOutcome, ModelRelation};
