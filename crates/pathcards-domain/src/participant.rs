//! Participant module - the molecular entities on either side of an interaction

use crate::identifier::{normalize_id, IdSet};

/// Entity type marking a participant as semantically absent
pub const ABSENT_ENTITY_TYPE: &str = "N/A";

/// Entity type marking a participant as a protein family
pub const PROTEIN_FAMILY_ENTITY_TYPE: &str = "protein_family";

/// A participant of an interaction
///
/// Participants are tree-shaped: complexes and families nest other
/// participants, simple entities are the leaves.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Participant {
    /// No participant, or one whose entity type is `"N/A"`
    #[default]
    Absent,

    /// A single entity
    Simple {
        /// Vocabulary-prefixed identifier (e.g. `uniprot:P12345`)
        identifier: Option<String>,
        /// Entity type tag (e.g. `protein`, `chemical`)
        entity_type: Option<String>,
    },

    /// A complex made of other participants
    Complex(Vec<Participant>),

    /// A protein family
    Family {
        /// The family's own identifier, used only when no member list is known
        identifier: Option<String>,
        /// Family members, if the source listed them
        members: Option<Vec<Participant>>,
    },
}

impl Participant {
    /// Create a simple participant from an identifier
    pub fn simple(identifier: impl Into<String>) -> Self {
        Participant::Simple {
            identifier: Some(identifier.into()),
            entity_type: None,
        }
    }

    /// Create a family participant from its members
    pub fn family(members: Vec<Participant>) -> Self {
        Participant::Family {
            identifier: None,
            members: Some(members),
        }
    }

    /// True unless the participant is absent
    ///
    /// An inference card without a valid participant A makes no claim about
    /// the upstream actor.
    pub fn is_valid(&self) -> bool {
        !matches!(self, Participant::Absent)
    }

    /// All normalized identifiers reachable from this participant
    pub fn ids(&self) -> IdSet {
        extract_all_ids(self)
    }
}

/// Recursively extract the normalized identifiers of a participant
///
/// Complexes and families contribute the union of their members' ids; a
/// family's own identifier is ignored when it has a member list. Absent
/// participants yield an empty set.
///
/// # Examples
///
/// ```
/// use pathcards_domain::{extract_all_ids, Participant};
///
/// let complex = Participant::Complex(vec![
///     Participant::simple("uniprot:P1"),
///     Participant::family(vec![Participant::simple("uniprot:P2"), Participant::simple("P1")]),
/// ]);
///
/// let ids = extract_all_ids(&complex);
/// assert_eq!(ids.as_slice(), &["p1".to_string(), "p2".to_string()]);
/// ```
pub fn extract_all_ids(participant: &Participant) -> IdSet {
    let mut ids = IdSet::new();
    collect_ids(participant, &mut ids);
    ids
}

fn collect_ids(participant: &Participant, ids: &mut IdSet) {
    match participant {
        Participant::Absent => {}
        Participant::Complex(members)
        | Participant::Family {
            members: Some(members),
            ..
        } => {
            for member in members {
                collect_ids(member, ids);
            }
        }
        Participant::Simple { identifier, .. } | Participant::Family { identifier, .. } => {
            if let Some(id) = identifier {
                ids.insert(normalize_id(id));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_has_no_ids() {
        assert!(extract_all_ids(&Participant::Absent).is_empty());
        assert!(!Participant::Absent.is_valid());
    }

    #[test]
    fn test_simple_without_identifier() {
        let participant = Participant::Simple {
            identifier: None,
            entity_type: Some("protein".to_string()),
        };
        assert!(extract_all_ids(&participant).is_empty());
        assert!(participant.is_valid());
    }

    #[test]
    fn test_family_ignores_own_identifier() {
        let family = Participant::Family {
            identifier: Some("pfam:PF00069".to_string()),
            members: Some(vec![Participant::simple("uniprot:P1")]),
        };

        let ids = extract_all_ids(&family);
        assert_eq!(ids.len(), 1);
        assert!(ids.contains("p1"));
        assert!(!ids.contains("pf00069"));
    }

    #[test]
    fn test_family_without_members_uses_own_identifier() {
        let family = Participant::Family {
            identifier: Some("pfam:PF00069".to_string()),
            members: None,
        };

        assert!(extract_all_ids(&family).contains("pf00069"));
    }

    #[test]
    fn test_nested_complex_deduplicates() {
        let complex = Participant::Complex(vec![
            Participant::simple("uniprot:P1"),
            Participant::Complex(vec![Participant::simple("UNIPROT:p1"), Participant::Absent]),
            Participant::simple("uniprot:P2"),
        ]);

        let ids = extract_all_ids(&complex);
        assert_eq!(ids.as_slice(), &["p1".to_string(), "p2".to_string()]);
    }
}
