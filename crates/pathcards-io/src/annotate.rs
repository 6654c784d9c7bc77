//! Merge comparison results back into raw card JSON

use pathcards_comparator::{CardComparison, MatchResult};
use serde_json::{Map, Value};

/// Build the JSON entry for one match
///
/// `reference` holds the raw reference cards by position; the matched card is
/// embedded under `card`.
pub fn match_json(result: &MatchResult, reference: &[Value]) -> Value {
    let mut entry = Map::new();
    entry.insert("deltaFeature".to_string(), Value::from(result.delta_feature.as_str()));
    entry.insert("potentialConflict".to_string(), Value::from(result.potential_conflict));
    entry.insert(
        "card".to_string(),
        reference.get(result.card).cloned().unwrap_or(Value::Null),
    );

    if let Some(participant_a) = result.participant_a {
        entry.insert("participantA".to_string(), Value::from(participant_a.as_str()));
    }
    if let Some(model_element) = &result.model_element {
        entry.insert("model_element".to_string(), Value::from(model_element.as_str()));
    }
    if let Some(score) = result.score {
        entry.insert("score".to_string(), score_json(score));
    }

    Value::Object(entry)
}

/// Annotate a raw card with its comparison
///
/// Adds `model_relation` and `score`, plus `model_element`, `best_match`
/// and `match` when there is something to report. Earlier annotations on the
/// input are replaced, so annotating twice gives the same result.
pub fn annotate(raw: &Value, comparison: &CardComparison, reference: &[Value]) -> Value {
    let mut card = match raw {
        Value::Object(map) => map.clone(),
        other => return other.clone(),
    };

    for key in ["match", "model_relation", "score", "model_element", "best_match"] {
        card.remove(key);
    }

    let classification = &comparison.classification;
    card.insert(
        "model_relation".to_string(),
        Value::from(classification.model_relation.as_str()),
    );
    card.insert("score".to_string(), score_json(classification.score));

    if let Some(model_element) = &classification.model_element {
        card.insert("model_element".to_string(), Value::from(model_element.as_str()));
    }

    if let Some(best) = comparison.best_match() {
        card.insert("best_match".to_string(), match_json(best, reference));
    }

    if !comparison.matches.is_empty() {
        let matches = comparison
            .matches
            .iter()
            .map(|result| match_json(result, reference))
            .collect();
        card.insert("match".to_string(), Value::Array(matches));
    }

    Value::Object(card)
}

/// Scores are written as integers when they have no fractional part
pub fn score_json(score: f64) -> Value {
    if score.fract() == 0.0 && score.abs() < i64::MAX as f64 {
        Value::from(score as i64)
    } else {
        Value::from(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathcards_comparator::Classification;
    use pathcards_domain::{ComparisonOutcome, ModelRelation};
    use serde_json::json;

    fn scored_match(card: usize) -> MatchResult {
        MatchResult {
            delta_feature: ComparisonOutcome::Subset,
            potential_conflict: false,
            card,
            model_element: Some("elem_1".to_string()),
            participant_a: Some(ComparisonOutcome::Exact),
            score: Some(6.0),
        }
    }

    #[test]
    fn test_match_json() {
        let reference = vec![json!({"id": "ref0"})];
        let entry = match_json(&scored_match(0), &reference);

        assert_eq!(
            entry,
            json!({
                "deltaFeature": "subset",
                "potentialConflict": false,
                "card": {"id": "ref0"},
                "participantA": "exact",
                "model_element": "elem_1",
                "score": 6
            })
        );
    }

    #[test]
    fn test_annotate_with_best_match() {
        let reference = vec![json!({"id": "ref0"})];
        let comparison = CardComparison {
            matches: vec![scored_match(0)],
            classification: Classification {
                model_relation: ModelRelation::Corroboration,
                score: 6.0,
                model_element: Some("elem_1".to_string()),
                best_match: Some(0),
            },
        };

        let raw = json!({"pmc_id": "PMC1", "match": "stale"});
        let annotated = annotate(&raw, &comparison, &reference);

        assert_eq!(annotated["pmc_id"], "PMC1");
        assert_eq!(annotated["model_relation"], "corroboration");
        assert_eq!(annotated["score"], 6);
        assert_eq!(annotated["model_element"], "elem_1");
        assert_eq!(annotated["best_match"]["card"]["id"], "ref0");
        assert_eq!(annotated["match"].as_array().map(Vec::len), Some(1));

        assert_eq!(annotate(&annotated, &comparison, &reference), annotated);
    }

    #[test]
    fn test_annotate_extension() {
        let comparison = CardComparison {
            matches: Vec::new(),
            classification: Classification::default(),
        };

        let annotated = annotate(&json!({"match": []}), &comparison, &[]);
        assert_eq!(annotated, json!({"model_relation": "extension", "score": 0}));
    }

    #[test]
    fn test_fractional_score() {
        assert_eq!(score_json(10.0 / 3.0), Value::from(10.0 / 3.0));
        assert_eq!(score_json(4.5), json!(4.5));
        assert_eq!(score_json(9.0), json!(9));
    }
}
