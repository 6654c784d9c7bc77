//! Index card module - one molecular interaction and its features

use crate::identifier::IdSet;
use crate::participant::Participant;
use std::fmt;

/// Lower-cased interaction type tag (e.g. `binds`, `adds_modification`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InteractionType(String);

/// Interaction types that contradict each other when asserted on the same
/// participants and features
const OPPOSITE_PAIRS: &[(&str, &str)] = &[
    ("adds_modification", "removes_modification"),
    ("increases", "decreases"),
    ("increase", "decrease"),
    ("increases_activity", "decreases_activity"),
];

impl InteractionType {
    /// Create an interaction type
    ///
    /// # Errors
    /// Returns error if the tag is blank
    pub fn new(value: &str) -> Result<Self, String> {
        let value = value.trim();
        if value.is_empty() {
            return Err("Interaction type cannot be empty".to_string());
        }
        Ok(Self(value.to_lowercase()))
    }

    /// Get the lower-cased tag
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Complex-binding interaction
    pub fn is_binds(&self) -> bool {
        self.0.contains("binds")
    }

    /// Sub-cellular translocation
    pub fn is_translocation(&self) -> bool {
        self.0 == "translocation"
    }

    /// Quantity increase or decrease
    pub fn is_increase_decrease(&self) -> bool {
        matches!(
            self.0.as_str(),
            "increase" | "increases" | "decrease" | "decreases"
        )
    }

    /// Activity change (e.g. `increases_activity`)
    pub fn is_activity(&self) -> bool {
        self.0.contains("activity")
    }

    /// Check if the two types form an opposite pair, in either order
    pub fn is_opposite_of(&self, other: &InteractionType) -> bool {
        OPPOSITE_PAIRS.iter().any(|(left, right)| {
            (self.0 == *left && other.0 == *right) || (self.0 == *right && other.0 == *left)
        })
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A post-translational modification feature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modification {
    /// Modification type (e.g. `phosphorylation`)
    pub modification_type: String,
    /// Residue position, if known
    pub position: Option<String>,
}

impl Modification {
    /// Create a modification
    pub fn new(modification_type: impl Into<String>, position: Option<&str>) -> Self {
        Self {
            modification_type: modification_type.into(),
            position: position.map(str::to_string),
        }
    }

    /// Expand a modification listing several candidate positions
    ///
    /// One copy is produced per position; an empty position list collapses to
    /// a single position-less modification.
    pub fn expand_positions(modification_type: &str, positions: &[String]) -> Vec<Modification> {
        if positions.is_empty() {
            return vec![Modification::new(modification_type, None)];
        }

        positions
            .iter()
            .map(|position| Modification::new(modification_type, Some(position)))
            .collect()
    }

    /// Case-insensitive type comparison
    pub fn same_type(&self, other: &Modification) -> bool {
        self.modification_type.to_lowercase() == other.modification_type.to_lowercase()
    }
}

/// A change-of-location feature
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translocation {
    /// Source compartment
    pub from: Option<String>,
    /// Destination compartment
    pub to: Option<String>,
}

impl Translocation {
    /// Create a translocation
    pub fn new(from: Option<&str>, to: Option<&str>) -> Self {
        Self {
            from: from.map(str::to_string),
            to: to.map(str::to_string),
        }
    }

    /// True if at least one end is known
    pub fn is_known(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }
}

/// An index card - one extracted or curated interaction
///
/// Cards are immutable once parsed; comparison results are returned as
/// separate values by the comparator.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexCard {
    /// Interaction type tag
    pub interaction_type: InteractionType,

    /// Upstream participant (may be absent)
    pub participant_a: Participant,

    /// Downstream participant
    pub participant_b: Participant,

    /// Modifications, one entry per candidate position
    pub modifications: Vec<Modification>,

    /// Translocation endpoints
    pub translocation: Translocation,

    /// Model element tag of a reference card
    pub model_element: Option<String>,
}

impl IndexCard {
    /// Create a card with no features
    pub fn new(
        interaction_type: InteractionType,
        participant_a: Participant,
        participant_b: Participant,
    ) -> Self {
        Self {
            interaction_type,
            participant_a,
            participant_b,
            modifications: Vec::new(),
            translocation: Translocation::default(),
            model_element: None,
        }
    }

    /// Attach modifications
    pub fn with_modifications(mut self, modifications: Vec<Modification>) -> Self {
        self.modifications = modifications;
        self
    }

    /// Attach a translocation
    pub fn with_translocation(mut self, translocation: Translocation) -> Self {
        self.translocation = translocation;
        self
    }

    /// Attach a model element tag
    pub fn with_model_element(mut self, model_element: impl Into<String>) -> Self {
        self.model_element = Some(model_element.into());
        self
    }

    /// Normalized ids of participant A
    pub fn participant_a_ids(&self) -> IdSet {
        self.participant_a.ids()
    }

    /// Normalized ids of participant B
    pub fn participant_b_ids(&self) -> IdSet {
        self.participant_b.ids()
    }

    /// Union of participant A and participant B ids
    pub fn all_participant_ids(&self) -> IdSet {
        self.participant_a_ids().union(self.participant_b_ids())
    }

    /// Card lists at least one modification
    pub fn has_modification(&self) -> bool {
        !self.modifications.is_empty()
    }

    /// Translocation card with at least one known location
    pub fn has_translocation(&self) -> bool {
        self.interaction_type.is_translocation() && self.translocation.is_known()
    }

    /// Complex-binding card
    pub fn has_bind(&self) -> bool {
        self.interaction_type.is_binds()
    }

    /// Increase/decrease card
    pub fn has_increase_decrease(&self) -> bool {
        self.interaction_type.is_increase_decrease()
    }

    /// Activity-change card
    pub fn has_activity(&self) -> bool {
        self.interaction_type.is_activity()
    }

    /// Card makes a claim about participant A
    pub fn has_valid_participant_a(&self) -> bool {
        self.participant_a.is_valid()
    }
}
