//! Classifier - turns per-candidate matches into one model relation

use crate::relation::MatchResult;
use pathcards_domain::{ComparisonOutcome, IndexCard, ModelRelation};

/// Base score of an exact feature match
pub const EXACT_BASE: f64 = 10.0;

/// Base score of a subset or superset feature match
pub const PARTIAL_BASE: f64 = 6.0;

/// Winning classification of an inference card
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Relation to the best-matching reference card
    pub model_relation: ModelRelation,

    /// Score of the best match (0 when nothing scored)
    pub score: f64,

    /// Model element tag of the best match
    pub model_element: Option<String>,

    /// Index of the best match in the match list
    pub best_match: Option<usize>,
}

impl Default for Classification {
    fn default() -> Self {
        Self {
            model_relation: ModelRelation::Extension,
            score: 0.0,
            model_element: None,
            best_match: None,
        }
    }
}

/// Classify an inference card from its matches
///
/// Each scoring match gets its `score` set. The card adopts a match's relation
/// only when its score is strictly higher than the best so far, so the first
/// of several equally good matches wins.
pub fn classify(inference: &IndexCard, matches: &mut [MatchResult]) -> Classification {
    let mut classification = Classification::default();
    let binds = inference.has_bind();

    for (position, result) in matches.iter_mut().enumerate() {
        let scored = if binds {
            match result.delta_feature {
                ComparisonOutcome::Exact => Some(score(ModelRelation::Corroboration, EXACT_BASE, result)),
                _ => None,
            }
        } else {
            match result.delta_feature {
                ComparisonOutcome::Exact => weigh_participant_a(result, EXACT_BASE, ModelRelation::Corroboration),
                ComparisonOutcome::Subset => weigh_participant_a(result, PARTIAL_BASE, ModelRelation::Corroboration),
                ComparisonOutcome::Superset => weigh_participant_a(result, PARTIAL_BASE, ModelRelation::Specification),
                ComparisonOutcome::Intersect | ComparisonOutcome::Distinct => None,
            }
        };

        if let Some((relation, candidate_score)) = scored {
            update(&mut classification, relation, candidate_score, result, position);
        }
    }

    classification
}

/// Scale the base score by how well participant A matches
///
/// A less specific participant A halves the score; a more specific or only
/// overlapping one also turns the relation into a specification.
fn weigh_participant_a(
    result: &MatchResult,
    base: f64,
    target: ModelRelation,
) -> Option<(ModelRelation, f64)> {
    match result.participant_a? {
        ComparisonOutcome::Exact => Some(score(target, base, result)),
        ComparisonOutcome::Subset => Some(score(target, base / 2.0, result)),
        ComparisonOutcome::Superset => Some(score(ModelRelation::Specification, base / 2.0, result)),
        ComparisonOutcome::Intersect => Some(score(ModelRelation::Specification, base / 3.0, result)),
        ComparisonOutcome::Distinct => None,
    }
}

/// Target relation at full base, or a conflict one point lower
fn score(target: ModelRelation, base: f64, result: &MatchResult) -> (ModelRelation, f64) {
    if result.potential_conflict {
        (ModelRelation::Conflicting, base - 1.0)
    } else {
        (target, base)
    }
}

fn update(
    classification: &mut Classification,
    relation: ModelRelation,
    candidate_score: f64,
    result: &mut MatchResult,
    position: usize,
) {
    result.score = Some(candidate_score);

    if candidate_score > classification.score {
        classification.model_relation = relation;
        classification.score = candidate_score;
        classification.model_element = result.model_element.clone();
        classification.best_match = Some(position);
    }
}
