//! Pathcards Comparator
//!
//! Matching and classification engine for index cards.
//!
//! # Overview
//!
//! An inference card (one extracted interaction) is compared against a
//! reference model (a collection of curated cards):
//!
//! 1. **Candidate lookup**: reference cards sharing a participant id
//! 2. **Match filter**: keep candidates of a comparable interaction family
//! 3. **Relation finder**: compare features per category and flag conflicts
//! 4. **Classifier**: score every match and keep the best one
//! 5. **Statistics**: tally outcomes across a batch
//!
//! ## Set comparison
//!
//! Feature sets are compared with a strong equality, a weak equality and a
//! weak difference per feature family:
//!
//! | Outcome | Meaning |
//! |---------|---------|
//! | **exact** | Same features |
//! | **subset** | Inference is less specific than the model |
//! | **superset** | Inference is more specific than the model |
//! | **intersects** | Partial overlap |
//! | **distinct** | Nothing in common |
//!
//! ## Scoring
//!
//! | Feature outcome | Base score | Relation |
//! |-----------------|------------|----------|
//! | exact | 10 | corroboration |
//! | subset | 6 | corroboration |
//! | superset | 6 | specification |
//!
//! The base is halved or divided by three when participant A matches less
//! well, and a potential conflict turns the relation into `conflicting` with
//! one point off.
//!
//! # Usage
//!
//! ```
//! use pathcards_comparator::{Comparator, ComparatorConfig};
//! use pathcards_domain::{IndexCard, InteractionType, Modification, ModelRelation, Participant};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let phosphorylation = vec![Modification::new("phosphorylation", Some("5"))];
//!
//! let reference = vec![IndexCard::new(
//!     InteractionType::new("adds_modification")?,
//!     Participant::simple("uniprot:P1"),
//!     Participant::simple("uniprot:P2"),
//! )
//! .with_modifications(phosphorylation.clone())];
//! let mut comparator = Comparator::new(reference, ComparatorConfig::default())?;
//!
//! let inference = IndexCard::new(
//!     InteractionType::new("removes_modification")?,
//!     Participant::simple("uniprot:P1"),
//!     Participant::simple("uniprot:P2"),
//! )
//! .with_modifications(phosphorylation);
//! let comparison = comparator.compare_card(&inference)?;
//!
//! assert_eq!(comparison.classification.model_relation, ModelRelation::Conflicting);
//! println!("{}", comparator.stats().summary());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! [comparator]
//! position_tolerance = 1
//! max_candidates = 10000
//! ```

#![warn(missing_docs)]

mod classifier;
mod comparator;
mod config;
mod error;
mod filter;
mod index;
mod relation;
mod set_compare;
mod stats;

pub use classifier::{classify, Classification, EXACT_BASE, PARTIAL_BASE};
pub use comparator::{CardComparison, Comparator};
pub use config::ComparatorConfig;
pub use error::ComparatorError;
pub use filter::match_filter;
pub use index::{query_ids, CandidateIndex, IndexKind};
pub use relation::{find_model_relation, MatchResult};
pub use set_compare::{compare, FeatureRules, IdentifierRules, ModificationRules, TranslocationRules};
pub use stats::{composite_key, ComparisonStats};
