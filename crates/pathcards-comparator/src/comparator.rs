//! Comparator - runs inference cards through the matching pipeline

use crate::classifier::{classify, Classification};
use crate::filter::match_filter;
use crate::index::CandidateIndex;
use crate::relation::{find_model_relation, MatchResult};
use crate::set_compare::ModificationRules;
use crate::{ComparatorConfig, ComparatorError, ComparisonStats};
use pathcards_domain::traits::CardSource;
use pathcards_domain::IndexCard;
use std::fmt::Display;
use tracing::{debug, info, warn};

/// Result of comparing one inference card with the reference model
#[derive(Debug, Clone, PartialEq)]
pub struct CardComparison {
    /// Per-candidate matches, in candidate order
    ///
    /// Empty when nothing in the reference model relates to the card.
    pub matches: Vec<MatchResult>,

    /// Winning classification
    pub classification: Classification,
}

impl CardComparison {
    /// Match the classification was taken from, if any scored
    pub fn best_match(&self) -> Option<&MatchResult> {
        self.classification
            .best_match
            .and_then(|position| self.matches.get(position))
    }
}

/// Matching engine over a source of reference cards
///
/// Inference cards are processed one at a time against a read-only card
/// source; the only state that changes between cards is the statistics.
///
/// # Examples
///
/// ```
/// use pathcards_comparator::{Comparator, ComparatorConfig};
/// use pathcards_domain::{IndexCard, InteractionType, Participant};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let card = IndexCard::new(
///     InteractionType::new("increases")?,
///     Participant::simple("uniprot:P1"),
///     Participant::simple("uniprot:P2"),
/// );
///
/// let mut comparator = Comparator::new(vec![card.clone()], ComparatorConfig::default())?;
/// let comparison = comparator.compare_card(&card)?;
///
/// assert_eq!(comparison.classification.score, 10.0);
/// assert_eq!(comparator.stats().corroboration_count, 1);
/// # Ok(())
/// # }
/// ```
pub struct Comparator<S = CandidateIndex> {
    source: S,
    config: ComparatorConfig,
    stats: ComparisonStats,
}

impl Comparator<CandidateIndex> {
    /// Index a reference collection and build a comparator over it
    pub fn new(reference: Vec<IndexCard>, config: ComparatorConfig) -> Result<Self, ComparatorError> {
        let index = CandidateIndex::load(reference);
        info!("Loaded {} reference cards", index.len());
        Self::with_source(index, config)
    }

    /// Build a comparator with default configuration
    pub fn default_config(reference: Vec<IndexCard>) -> Result<Self, ComparatorError> {
        Self::new(reference, ComparatorConfig::default())
    }
}

impl<S> Comparator<S>
where
    S: CardSource,
    S::Error: Display,
{
    /// Build a comparator over any card source
    pub fn with_source(source: S, config: ComparatorConfig) -> Result<Self, ComparatorError> {
        config.validate().map_err(ComparatorError::Config)?;

        Ok(Self {
            source,
            config,
            stats: ComparisonStats::new(),
        })
    }

    /// Get the active configuration
    pub fn config(&self) -> &ComparatorConfig {
        &self.config
    }

    /// Get the reference card source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a reference to the current statistics
    pub fn stats(&self) -> &ComparisonStats {
        &self.stats
    }

    /// Reset statistics counters
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Match and classify one inference card without touching statistics
    ///
    /// # Errors
    ///
    /// Fails when the card source lookup fails, when it hands back a position
    /// it cannot resolve, or when the filtered candidates exceed
    /// `max_candidates`.
    pub fn evaluate(&self, inference: &IndexCard) -> Result<CardComparison, ComparatorError> {
        let positions = self
            .source
            .candidates(inference)
            .map_err(|e| ComparatorError::Source(e.to_string()))?;

        let mut candidates = Vec::with_capacity(positions.len());
        for position in positions {
            let reference = self
                .source
                .card(position)
                .ok_or(ComparatorError::UnknownCard(position))?;

            if match_filter(inference, reference) {
                candidates.push((position, reference));
            }
        }

        if let Some(limit) = self.config.max_candidates {
            if candidates.len() > limit {
                return Err(ComparatorError::TooManyCandidates {
                    count: candidates.len(),
                    limit,
                });
            }
        }

        let rules = ModificationRules {
            position_tolerance: self.config.position_tolerance,
        };
        let mut matches = find_model_relation(inference, &candidates, &rules);
        let classification = classify(inference, &mut matches);

        debug!(
            "Classified '{}' card as {} (score {}, {} candidates, {} matches)",
            inference.interaction_type,
            classification.model_relation,
            classification.score,
            candidates.len(),
            matches.len()
        );

        Ok(CardComparison {
            matches,
            classification,
        })
    }

    /// Match and classify one inference card, folding the result into the
    /// statistics
    pub fn compare_card(&mut self, inference: &IndexCard) -> Result<CardComparison, ComparatorError> {
        match self.evaluate(inference) {
            Ok(comparison) => {
                self.stats.record(&comparison);
                Ok(comparison)
            }
            Err(e) => {
                self.stats.record_skip();
                Err(e)
            }
        }
    }

    /// Compare a batch of inference cards in order
    ///
    /// A failing card is logged and skipped; it never stops the batch. The
    /// returned results line up with the input slice.
    pub fn compare_cards(&mut self, cards: &[IndexCard]) -> Vec<Result<CardComparison, ComparatorError>> {
        let results: Vec<_> = cards
            .iter()
            .enumerate()
            .map(|(position, card)| {
                let result = self.compare_card(card);
                if let Err(e) = &result {
                    warn!("Skipping inference card {}: {}", position, e);
                }
                result
            })
            .collect();

        info!(
            "Compared {} cards ({} classified, {} skipped)",
            cards.len(),
            self.stats.total(),
            self.stats.skipped
        );

        results
    }
}
