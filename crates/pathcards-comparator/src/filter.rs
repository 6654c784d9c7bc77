//! Match filter - decides whether a candidate is worth comparing

use crate::set_compare::{compare, IdentifierRules};
use pathcards_domain::{ComparisonOutcome, IndexCard};

/// Check if a reference card is comparable with an inference card
///
/// Two binding cards are always comparable. Otherwise the expanded
/// participant B ids must match exactly and both cards must belong to the
/// same interaction family (modification, increase/decrease, activity change
/// or translocation).
pub fn match_filter(inference: &IndexCard, candidate: &IndexCard) -> bool {
    if inference.has_bind() && candidate.has_bind() {
        return true;
    }

    exact_participant_b(inference, candidate) && same_family(inference, candidate)
}

fn exact_participant_b(inference: &IndexCard, candidate: &IndexCard) -> bool {
    let inference_ids = inference.participant_b_ids();
    let candidate_ids = candidate.participant_b_ids();

    compare(inference_ids.as_slice(), candidate_ids.as_slice(), &IdentifierRules)
        == ComparisonOutcome::Exact
}

fn same_family(inference: &IndexCard, candidate: &IndexCard) -> bool {
    (inference.has_modification() && candidate.has_modification())
        || (inference.has_increase_decrease() && candidate.has_increase_decrease())
        || (inference.has_activity() && candidate.has_activity())
        || (inference.has_translocation() && candidate.has_translocation())
}
