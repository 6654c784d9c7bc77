//! Relation module - comparison outcomes and model relations

use std::fmt;

/// Outcome of comparing an inference feature set against a model feature set
///
/// The comparison is asymmetric: `Subset` means the inference set is covered
/// by the model set, `Superset` the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOutcome {
    /// Same elements on both sides
    Exact,

    /// Inference set is contained in the model set
    Subset,

    /// Inference set contains the model set
    Superset,

    /// Some overlap, neither contains the other
    Intersect,

    /// No matching element
    Distinct,
}

impl ComparisonOutcome {
    /// Wire name of the outcome
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOutcome::Exact => "exact",
            ComparisonOutcome::Subset => "subset",
            ComparisonOutcome::Superset => "superset",
            ComparisonOutcome::Intersect => "intersects",
            ComparisonOutcome::Distinct => "distinct",
        }
    }
}

impl fmt::Display for ComparisonOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of an inference card relative to the reference model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelRelation {
    /// The model states the same interaction
    Corroboration,

    /// The model states the opposite interaction
    Conflicting,

    /// The inference is more specific than the model
    Specification,

    /// Nothing in the model covers the inference
    #[default]
    Extension,
}

impl ModelRelation {
    /// Wire name of the relation
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelRelation::Corroboration => "corroboration",
            ModelRelation::Conflicting => "conflicting",
            ModelRelation::Specification => "specification",
            ModelRelation::Extension => "extension",
        }
    }
}

impl fmt::Display for ModelRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
