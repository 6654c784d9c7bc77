//! Candidate index over the reference model

use pathcards_domain::traits::CardSource;
use pathcards_domain::{IdSet, IndexCard};
use std::collections::HashMap;
use std::convert::Infallible;
use tracing::debug;

/// Which identifier map a lookup goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    /// Cards keyed by participant A ids
    ParticipantA,
    /// Cards keyed by participant B ids
    ParticipantB,
    /// Cards keyed by participant A and participant B ids
    Either,
}

/// Identifier-keyed lookup over the reference cards
///
/// Built once from the reference collection and read-only afterwards, so a
/// shared reference can serve concurrent lookups. Buckets keep insertion
/// order; a card appears once per id it carries (twice in the `Either` map if
/// an id is on both sides).
#[derive(Debug, Default)]
pub struct CandidateIndex {
    cards: Vec<IndexCard>,
    by_participant_a: HashMap<String, Vec<usize>>,
    by_participant_b: HashMap<String, Vec<usize>>,
    by_either: HashMap<String, Vec<usize>>,
}

impl CandidateIndex {
    /// Build the index from the reference cards
    pub fn load(cards: Vec<IndexCard>) -> Self {
        let mut index = Self {
            cards,
            ..Default::default()
        };

        for (position, card) in index.cards.iter().enumerate() {
            let a_ids = card.participant_a_ids();
            let b_ids = card.participant_b_ids();

            insert_ids(&mut index.by_participant_a, &a_ids, position);
            insert_ids(&mut index.by_participant_b, &b_ids, position);
            insert_ids(&mut index.by_either, &a_ids, position);
            insert_ids(&mut index.by_either, &b_ids, position);
        }

        debug!(
            "Loaded {} reference cards ({} participant A ids, {} participant B ids)",
            index.cards.len(),
            index.by_participant_a.len(),
            index.by_participant_b.len()
        );

        index
    }

    /// All reference cards in load order
    pub fn cards(&self) -> &[IndexCard] {
        &self.cards
    }

    /// Card positions stored under a normalized id
    pub fn lookup(&self, kind: IndexKind, id: &str) -> &[usize] {
        let map = match kind {
            IndexKind::ParticipantA => &self.by_participant_a,
            IndexKind::ParticipantB => &self.by_participant_b,
            IndexKind::Either => &self.by_either,
        };

        map.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Reference cards for the query ids that pass the filter
    ///
    /// Results follow query-id order, then bucket order. A card reachable
    /// through several query ids is returned once per id.
    pub fn find_matching_cards<F>(
        &self,
        query_ids: &IdSet,
        inference: &IndexCard,
        kind: IndexKind,
        filter: F,
    ) -> Vec<usize>
    where
        F: Fn(&IndexCard, &IndexCard) -> bool,
    {
        query_ids
            .iter()
            .flat_map(|id| self.lookup(kind, id).iter().copied())
            .filter(|&position| filter(inference, &self.cards[position]))
            .collect()
    }
}

fn insert_ids(map: &mut HashMap<String, Vec<usize>>, ids: &IdSet, position: usize) {
    for id in ids {
        map.entry(id.clone()).or_default().push(position);
    }
}

/// Query ids and index for an inference card
///
/// Binding cards look up every participant id in the combined map; all other
/// cards look up their participant B ids (complexes and families expanded).
pub fn query_ids(inference: &IndexCard) -> (IdSet, IndexKind) {
    if inference.has_bind() {
        (inference.all_participant_ids(), IndexKind::Either)
    } else {
        (inference.participant_b_ids(), IndexKind::ParticipantB)
    }
}

impl CardSource for CandidateIndex {
    type Error = Infallible;

    fn candidates(&self, inference: &IndexCard) -> Result<Vec<usize>, Self::Error> {
        let (ids, kind) = query_ids(inference);
        Ok(self.find_matching_cards(&ids, inference, kind, |_, _| true))
    }

    fn card(&self, position: usize) -> Option<&IndexCard> {
        self.cards.get(position)
    }

    fn len(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathcards_domain::{InteractionType, Participant};

    fn card(kind: &str, a: Participant, b: Participant) -> IndexCard {
        IndexCard::new(InteractionType::new(kind).unwrap(), a, b)
    }

    fn reference() -> Vec<IndexCard> {
        vec![
            card("increases", Participant::simple("uniprot:A"), Participant::simple("uniprot:B")),
            card(
                "binds",
                Participant::simple("uniprot:C"),
                Participant::Complex(vec![Participant::simple("uniprot:B"), Participant::simple("uniprot:D")]),
            ),
            card("decreases", Participant::Absent, Participant::simple("uniprot:B")),
        ]
    }

    #[test]
    fn test_load_builds_all_maps() {
        let index = CandidateIndex::load(reference());

        assert_eq!(index.lookup(IndexKind::ParticipantA, "a"), &[0]);
        assert_eq!(index.lookup(IndexKind::ParticipantB, "b"), &[0, 1, 2]);
        assert_eq!(index.lookup(IndexKind::ParticipantB, "d"), &[1]);
        assert_eq!(index.lookup(IndexKind::Either, "c"), &[1]);
        assert!(index.lookup(IndexKind::ParticipantA, "missing").is_empty());
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_either_map_keeps_duplicates() {
        let index = CandidateIndex::load(vec![card(
            "binds",
            Participant::simple("uniprot:X"),
            Participant::simple("X"),
        )]);

        assert_eq!(index.lookup(IndexKind::Either, "x"), &[0, 0]);
    }

    #[test]
    fn test_query_ids_policy() {
        let binds = card("binds", Participant::simple("uniprot:A"), Participant::simple("uniprot:B"));
        let (ids, kind) = query_ids(&binds);
        assert_eq!(kind, IndexKind::Either);
        assert_eq!(ids.len(), 2);

        let increases = card(
            "increases",
            Participant::simple("uniprot:A"),
            Participant::family(vec![Participant::simple("uniprot:B1"), Participant::simple("uniprot:B2")]),
        );
        let (ids, kind) = query_ids(&increases);
        assert_eq!(kind, IndexKind::ParticipantB);
        assert_eq!(ids.as_slice(), &["b1".to_string(), "b2".to_string()]);
    }

    #[test]
    fn test_find_matching_cards_applies_filter_in_order() {
        let index = CandidateIndex::load(reference());
        let inference = card("increases", Participant::simple("uniprot:A"), Participant::simple("uniprot:B"));
        let ids: IdSet = vec!["b".to_string(), "d".to_string()].into_iter().collect();

        let all = index.find_matching_cards(&ids, &inference, IndexKind::ParticipantB, |_, _| true);
        assert_eq!(all, vec![0, 1, 2, 1]);

        let no_binds = index.find_matching_cards(&ids, &inference, IndexKind::ParticipantB, |_, c| !c.has_bind());
        assert_eq!(no_binds, vec![0, 2]);
    }

    #[test]
    fn test_card_source_candidates() {
        let index = CandidateIndex::load(reference());
        let inference = card("decreases", Participant::Absent, Participant::simple("UniProt:b"));

        let candidates = index.candidates(&inference).unwrap();
        assert_eq!(candidates, vec![0, 1, 2]);
        assert!(index.card(3).is_none());
    }
}
