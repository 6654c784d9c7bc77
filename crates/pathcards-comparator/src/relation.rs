//! Relation finder - per-category comparison of an inference card with its
//! candidates

use crate::set_compare::{compare, IdentifierRules, ModificationRules, TranslocationRules};
use pathcards_domain::{ComparisonOutcome, IndexCard};

/// Comparison of an inference card with one reference card
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// How the compared features relate
    pub delta_feature: ComparisonOutcome,

    /// The reference card states a contradicting interaction
    pub potential_conflict: bool,

    /// Position of the reference card in the loaded model
    pub card: usize,

    /// Model element tag of the reference card
    pub model_element: Option<String>,

    /// How the participant A sets relate (not set for binding cards)
    pub participant_a: Option<ComparisonOutcome>,

    /// Score assigned by the classifier, if this match scored
    pub score: Option<f64>,
}

impl MatchResult {
    fn new(delta_feature: ComparisonOutcome, potential_conflict: bool, card: usize, reference: &IndexCard) -> Self {
        Self {
            delta_feature,
            potential_conflict,
            card,
            model_element: reference.model_element.clone(),
            participant_a: None,
            score: None,
        }
    }
}

/// Compare an inference card with its filtered candidates
///
/// The inference card's category picks the comparison (first match wins):
/// modifications, translocation, binding participants, then interaction type
/// alone. Distinct results without a potential conflict carry no information
/// and are dropped, so an empty result means nothing in the model relates.
/// For non-binding cards every surviving match also gets a participant A
/// outcome.
pub fn find_model_relation(
    inference: &IndexCard,
    candidates: &[(usize, &IndexCard)],
    modification_rules: &ModificationRules,
) -> Vec<MatchResult> {
    let mut compared: Vec<(MatchResult, &IndexCard)> = if inference.has_modification() {
        compare_modifications(inference, candidates, modification_rules)
    } else if inference.has_translocation() {
        compare_translocations(inference, candidates)
    } else if inference.has_bind() {
        compare_bound_participants(inference, candidates)
    } else {
        compare_types(inference, candidates)
    };

    compared.retain(|(result, _)| {
        result.delta_feature != ComparisonOutcome::Distinct || result.potential_conflict
    });

    if !inference.has_bind() {
        for (result, reference) in &mut compared {
            result.participant_a = Some(compare_participant_a(inference, reference));
        }
    }

    compared.into_iter().map(|(result, _)| result).collect()
}

fn compare_modifications<'a>(
    inference: &IndexCard,
    candidates: &[(usize, &'a IndexCard)],
    rules: &ModificationRules,
) -> Vec<(MatchResult, &'a IndexCard)> {
    candidates
        .iter()
        .filter(|(_, reference)| reference.has_modification())
        .map(|&(position, reference)| {
            let outcome = compare(&inference.modifications, &reference.modifications, rules);
            let conflict = outcome != ComparisonOutcome::Distinct && opposing(inference, reference);
            (MatchResult::new(outcome, conflict, position, reference), reference)
        })
        .collect()
}

fn compare_translocations<'a>(
    inference: &IndexCard,
    candidates: &[(usize, &'a IndexCard)],
) -> Vec<(MatchResult, &'a IndexCard)> {
    candidates
        .iter()
        .filter(|(_, reference)| reference.has_translocation())
        .map(|&(position, reference)| {
            let outcome = compare(
                std::slice::from_ref(&inference.translocation),
                std::slice::from_ref(&reference.translocation),
                &TranslocationRules,
            );
            let conflict = outcome == ComparisonOutcome::Distinct
                && inference.has_valid_participant_a()
                && is_reversal(inference, reference);
            (MatchResult::new(outcome, conflict, position, reference), reference)
        })
        .collect()
}

fn compare_bound_participants<'a>(
    inference: &IndexCard,
    candidates: &[(usize, &'a IndexCard)],
) -> Vec<(MatchResult, &'a IndexCard)> {
    let inference_ids = inference.all_participant_ids();

    candidates
        .iter()
        .map(|&(position, reference)| {
            let reference_ids = reference.all_participant_ids();
            let outcome = compare(inference_ids.as_slice(), reference_ids.as_slice(), &IdentifierRules);
            (MatchResult::new(outcome, false, position, reference), reference)
        })
        .collect()
}

fn compare_types<'a>(
    inference: &IndexCard,
    candidates: &[(usize, &'a IndexCard)],
) -> Vec<(MatchResult, &'a IndexCard)> {
    candidates
        .iter()
        .map(|&(position, reference)| {
            let outcome = if inference.interaction_type == reference.interaction_type {
                ComparisonOutcome::Exact
            } else {
                ComparisonOutcome::Distinct
            };
            let conflict = outcome == ComparisonOutcome::Distinct && opposing(inference, reference);
            (MatchResult::new(outcome, conflict, position, reference), reference)
        })
        .collect()
}

/// Opposite interaction types asserted by an inference card that names its
/// upstream participant
fn opposing(inference: &IndexCard, reference: &IndexCard) -> bool {
    inference.has_valid_participant_a()
        && inference.interaction_type.is_opposite_of(&reference.interaction_type)
}

/// The inference moves the entity back where the reference moves it from
fn is_reversal(inference: &IndexCard, reference: &IndexCard) -> bool {
    same_location(&inference.translocation.to, &reference.translocation.from)
        && same_location(&inference.translocation.from, &reference.translocation.to)
}

fn same_location(a: &Option<String>, b: &Option<String>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.to_lowercase() == b.to_lowercase(),
        (None, None) => true,
        _ => false,
    }
}

fn compare_participant_a(inference: &IndexCard, reference: &IndexCard) -> ComparisonOutcome {
    if !inference.has_valid_participant_a() {
        return if reference.has_valid_participant_a() {
            ComparisonOutcome::Subset
        } else {
            ComparisonOutcome::Exact
        };
    }

    let inference_ids = inference.participant_a_ids();
    let reference_ids = reference.participant_a_ids();
    compare(inference_ids.as_slice(), reference_ids.as_slice(), &IdentifierRules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathcards_domain::{InteractionType, Modification, Participant, Translocation};

    fn card(kind: &str, a: Participant) -> IndexCard {
        IndexCard::new(InteractionType::new(kind).unwrap(), a, Participant::simple("uniprot:B"))
    }

    fn phospho(position: &str) -> Vec<Modification> {
        vec![Modification::new("phosphorylation", Some(position))]
    }

    fn run(inference: &IndexCard, references: &[IndexCard]) -> Vec<MatchResult> {
        let candidates: Vec<(usize, &IndexCard)> = references.iter().enumerate().collect();
        find_model_relation(inference, &candidates, &ModificationRules::default())
    }

    #[test]
    fn test_no_candidates_no_matches() {
        let inference = card("increases", Participant::simple("uniprot:A"));
        assert!(run(&inference, &[]).is_empty());
    }

    #[test]
    fn test_modification_exact() {
        let inference = card("adds_modification", Participant::simple("uniprot:A")).with_modifications(phospho("5"));
        let reference = card("adds_modification", Participant::simple("uniprot:A"))
            .with_modifications(phospho("6"))
            .with_model_element("pc:Reaction1");

        let matches = run(&inference, &[reference]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].delta_feature, ComparisonOutcome::Exact);
        assert!(!matches[0].potential_conflict);
        assert_eq!(matches[0].participant_a, Some(ComparisonOutcome::Exact));
        assert_eq!(matches[0].model_element.as_deref(), Some("pc:Reaction1"));
    }

    #[test]
    fn test_modification_conflict_requires_participant_a() {
        let reference = card("removes_modification", Participant::simple("uniprot:A")).with_modifications(phospho("5"));

        let named = card("adds_modification", Participant::simple("uniprot:A")).with_modifications(phospho("5"));
        assert!(run(&named, &[reference.clone()])[0].potential_conflict);

        let anonymous = card("adds_modification", Participant::Absent).with_modifications(phospho("5"));
        let matches = run(&anonymous, &[reference]);
        assert!(!matches[0].potential_conflict);
        assert_eq!(matches[0].participant_a, Some(ComparisonOutcome::Subset));
    }

    #[test]
    fn test_distinct_modifications_dropped() {
        let inference = card("adds_modification", Participant::simple("uniprot:A")).with_modifications(phospho("50"));
        let reference = card("adds_modification", Participant::simple("uniprot:A")).with_modifications(phospho("5"));
        assert!(run(&inference, &[reference]).is_empty());
    }

    #[test]
    fn test_candidates_without_modifications_skipped() {
        let inference = card("adds_modification", Participant::simple("uniprot:A")).with_modifications(phospho("5"));
        let reference = card("adds_modification", Participant::simple("uniprot:A"));
        assert!(run(&inference, &[reference]).is_empty());
    }

    #[test]
    fn test_translocation_reversal_is_conflict() {
        let inference = card("translocation", Participant::simple("uniprot:A"))
            .with_translocation(Translocation::new(Some("nucleus"), Some("cytosol")));
        let reference = card("translocation", Participant::simple("uniprot:A"))
            .with_translocation(Translocation::new(Some("Cytosol"), Some("Nucleus")));

        let matches = run(&inference, &[reference]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].delta_feature, ComparisonOutcome::Distinct);
        assert!(matches[0].potential_conflict);
    }

    #[test]
    fn test_translocation_reversal_requires_participant_a() {
        let inference = card("translocation", Participant::Absent)
            .with_translocation(Translocation::new(Some("nucleus"), Some("cytosol")));
        let reference = card("translocation", Participant::simple("uniprot:A"))
            .with_translocation(Translocation::new(Some("cytosol"), Some("nucleus")));

        assert!(run(&inference, &[reference]).is_empty());
    }

    #[test]
    fn test_opposite_type_requires_participant_a() {
        let inference = card("increases", Participant::Absent);
        let reference = card("decreases", Participant::simple("uniprot:A"));

        assert!(run(&inference, &[reference]).is_empty());
    }

    #[test]
    fn test_translocation_exact() {
        let located = Translocation::new(Some("cytosol"), Some("nucleus"));
        let inference = card("translocation", Participant::Absent).with_translocation(located.clone());
        let reference = card("translocation", Participant::Absent).with_translocation(located);

        let matches = run(&inference, &[reference]);
        assert_eq!(matches[0].delta_feature, ComparisonOutcome::Exact);
        assert_eq!(matches[0].participant_a, Some(ComparisonOutcome::Exact));
    }

    #[test]
    fn test_binds_compare_all_participants() {
        let inference = card("binds", Participant::simple("uniprot:A"));
        let reference = IndexCard::new(
            InteractionType::new("binds").unwrap(),
            Participant::simple("uniprot:B"),
            Participant::simple("uniprot:A"),
        );
        let larger = IndexCard::new(
            InteractionType::new("binds").unwrap(),
            Participant::simple("uniprot:A"),
            Participant::Complex(vec![Participant::simple("uniprot:B"), Participant::simple("uniprot:C")]),
        );

        let matches = run(&inference, &[reference, larger]);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].delta_feature, ComparisonOutcome::Exact);
        assert_eq!(matches[1].delta_feature, ComparisonOutcome::Subset);
        assert!(matches.iter().all(|m| m.participant_a.is_none() && !m.potential_conflict));
    }

    #[test]
    fn test_type_only_comparison() {
        let inference = card("increases", Participant::simple("uniprot:A"));
        let same = card("Increases", Participant::simple("uniprot:Z"));
        let opposite = card("decreases", Participant::simple("uniprot:A"));

        let matches = run(&inference, &[same, opposite]);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].delta_feature, ComparisonOutcome::Exact);
        assert_eq!(matches[0].participant_a, Some(ComparisonOutcome::Distinct));
        assert_eq!(matches[1].delta_feature, ComparisonOutcome::Distinct);
        assert!(matches[1].potential_conflict);
        assert_eq!(matches[1].card, 1);
    }
}
