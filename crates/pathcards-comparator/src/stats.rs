//! Statistics collected across a comparison batch

use crate::comparator::CardComparison;
use pathcards_domain::ModelRelation;
use std::collections::BTreeMap;

/// Tallies of classification outcomes
///
/// Counts final model relations, plus a finer-grained counter keyed by
/// `{relation}_{score}[_{best match delta feature}]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonStats {
    /// Cards classified as conflicting
    pub conflict_count: usize,

    /// Cards classified as corroboration
    pub corroboration_count: usize,

    /// Cards classified as specification
    pub specification_count: usize,

    /// Cards classified as extension
    pub extension_count: usize,

    /// Composite-key counter
    pub detailed: BTreeMap<String, usize>,

    /// Cards skipped because of a record-scoped error
    pub skipped: usize,
}

impl ComparisonStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a classified card
    pub fn record(&mut self, comparison: &CardComparison) {
        let classification = &comparison.classification;

        match classification.model_relation {
            ModelRelation::Conflicting => self.conflict_count += 1,
            ModelRelation::Corroboration => self.corroboration_count += 1,
            ModelRelation::Specification => self.specification_count += 1,
            ModelRelation::Extension => self.extension_count += 1,
        }

        *self.detailed.entry(composite_key(comparison)).or_insert(0) += 1;
    }

    /// Record a card that could not be classified
    pub fn record_skip(&mut self) {
        self.skipped += 1;
    }

    /// Total classified cards
    pub fn total(&self) -> usize {
        self.conflict_count + self.corroboration_count + self.specification_count + self.extension_count
    }

    /// Count for a single relation
    pub fn count(&self, relation: ModelRelation) -> usize {
        match relation {
            ModelRelation::Conflicting => self.conflict_count,
            ModelRelation::Corroboration => self.corroboration_count,
            ModelRelation::Specification => self.specification_count,
            ModelRelation::Extension => self.extension_count,
        }
    }

    /// Reset all counters
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Comparison Summary".to_string(),
            "==================".to_string(),
            format!("Classified cards: {}", self.total()),
            format!("Skipped cards: {}", self.skipped),
            String::new(),
            format!("Corroboration: {}", self.corroboration_count),
            format!("Conflicting: {}", self.conflict_count),
            format!("Specification: {}", self.specification_count),
            format!("Extension: {}", self.extension_count),
        ];

        if !self.detailed.is_empty() {
            lines.push(String::new());
            lines.push("Detailed outcomes:".to_string());
            for (key, count) in &self.detailed {
                lines.push(format!("  {}: {}", key, count));
            }
        }

        lines.join("\n")
    }
}

/// Build the composite counter key for a classified card
pub fn composite_key(comparison: &CardComparison) -> String {
    let classification = &comparison.classification;
    let mut key = format!("{}_{}", classification.model_relation, classification.score);

    if let Some(best) = comparison.best_match() {
        key.push('_');
        key.push_str(best.delta_feature.as_str());
    }

    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Classification;
    use crate::relation::MatchResult;
    use pathcards_domain::ComparisonOutcome;

    fn comparison(relation: ModelRelation, score: f64, delta: Option<ComparisonOutcome>) -> CardComparison {
        let matches: Vec<MatchResult> = delta
            .map(|delta_feature| MatchResult {
                delta_feature,
                potential_conflict: false,
                card: 0,
                model_element: None,
                participant_a: Some(ComparisonOutcome::Exact),
                score: Some(score),
            })
            .into_iter()
            .collect();

        CardComparison {
            classification: Classification {
                model_relation: relation,
                score,
                model_element: None,
                best_match: delta.map(|_| 0),
            },
            matches,
        }
    }

    #[test]
    fn test_stats_creation() {
        let stats = ComparisonStats::new();
        assert_eq!(stats.total(), 0);
        assert_eq!(stats.skipped, 0);
        assert!(stats.detailed.is_empty());
    }

    #[test]
    fn test_record_counts_relations() {
        let mut stats = ComparisonStats::new();
        stats.record(&comparison(ModelRelation::Corroboration, 10.0, Some(ComparisonOutcome::Exact)));
        stats.record(&comparison(ModelRelation::Corroboration, 10.0, Some(ComparisonOutcome::Exact)));
        stats.record(&comparison(ModelRelation::Conflicting, 9.0, Some(ComparisonOutcome::Exact)));
        stats.record(&comparison(ModelRelation::Extension, 0.0, None));

        assert_eq!(stats.count(ModelRelation::Corroboration), 2);
        assert_eq!(stats.conflict_count, 1);
        assert_eq!(stats.extension_count, 1);
        assert_eq!(stats.specification_count, 0);
        assert_eq!(stats.total(), 4);
    }

    #[test]
    fn test_composite_keys() {
        let mut stats = ComparisonStats::new();
        stats.record(&comparison(ModelRelation::Corroboration, 10.0, Some(ComparisonOutcome::Exact)));
        stats.record(&comparison(ModelRelation::Specification, 2.5, Some(ComparisonOutcome::Superset)));
        stats.record(&comparison(ModelRelation::Extension, 0.0, None));
        stats.record(&comparison(ModelRelation::Extension, 0.0, None));

        assert_eq!(stats.detailed.get("corroboration_10_exact"), Some(&1));
        assert_eq!(stats.detailed.get("specification_2.5_superset"), Some(&1));
        assert_eq!(stats.detailed.get("extension_0"), Some(&2));
    }

    #[test]
    fn test_reset() {
        let mut stats = ComparisonStats::new();
        stats.record(&comparison(ModelRelation::Extension, 0.0, None));
        stats.record_skip();

        stats.reset();
        assert_eq!(stats, ComparisonStats::default());
    }

    #[test]
    fn test_summary() {
        let mut stats = ComparisonStats::new();
        stats.record(&comparison(ModelRelation::Corroboration, 10.0, Some(ComparisonOutcome::Exact)));
        stats.record_skip();

        let summary = stats.summary();
        assert!(summary.contains("Classified cards: 1"));
        assert!(summary.contains("Skipped cards: 1"));
        assert!(summary.contains("Corroboration: 1"));
        assert!(summary.contains("corroboration_10_exact: 1"));
    }
}
