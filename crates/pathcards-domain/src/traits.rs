//! Trait definitions for external interactions
//!
//! These traits define the boundary between the matching engine and wherever
//! reference cards live. The in-memory index in `pathcards-comparator` is one
//! implementation; a document-store adapter would be another.

use crate::IndexCard;

/// Source of candidate reference cards for an inference card
///
/// Reference cards are addressed by their position in the loaded reference
/// collection, so results can be traced back to the original input.
pub trait CardSource {
    /// Error type for lookups
    type Error;

    /// Positions of reference cards sharing at least one relevant participant
    /// id with the inference card, in a stable order
    ///
    /// Repeats are allowed; callers narrow the result further.
    fn candidates(&self, inference: &IndexCard) -> Result<Vec<usize>, Self::Error>;

    /// Get a reference card by position
    fn card(&self, position: usize) -> Option<&IndexCard>;

    /// Number of reference cards available
    fn len(&self) -> usize;

    /// True if no reference cards are available
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
