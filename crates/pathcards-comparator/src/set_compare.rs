//! Fuzzy set comparison
//!
//! Feature sets are small (a handful of modifications or one translocation per
//! card), and feature equality is not transitive (positions match within a
//! tolerance), so the comparison is pairwise rather than hash-based.

use pathcards_domain::{ComparisonOutcome, Modification, Translocation};

/// Equality and difference relations for one feature type
///
/// `weak_eq` falls back to `strong_eq` unless a rule set overrides it.
pub trait FeatureRules<T: ?Sized> {
    /// Both elements describe the same feature
    fn strong_eq(&self, a: &T, b: &T) -> bool;

    /// Elements are compatible when one side is less specific
    fn weak_eq(&self, a: &T, b: &T) -> bool {
        self.strong_eq(a, b)
    }

    /// Element `a` says something `b` does not
    fn weak_diff(&self, a: &T, b: &T) -> bool;
}

/// Compare an inference feature set against a model feature set
///
/// Decision order:
/// 1. no strong or weak match at all: `Distinct`
/// 2. equal sizes: `Exact` if every element matches strongly, else `Subset`
///    or `Superset` if one side has no weak difference
/// 3. smaller inference set with no difference: `Subset`
/// 4. larger inference set and model has no difference: `Superset`
/// 5. otherwise `Intersect`
///
/// # Examples
///
/// ```
/// use pathcards_comparator::{compare, IdentifierRules};
/// use pathcards_domain::ComparisonOutcome;
///
/// let inference = vec!["p1".to_string()];
/// let model = vec!["P1".to_string(), "p2".to_string()];
///
/// assert_eq!(compare(&inference, &model, &IdentifierRules), ComparisonOutcome::Subset);
/// ```
pub fn compare<T, R>(inference: &[T], model: &[T], rules: &R) -> ComparisonOutcome
where
    R: FeatureRules<T> + ?Sized,
{
    let strong_intersection = intersect_count(inference, model, |a, b| rules.strong_eq(a, b));
    let weak_intersection = intersect_count(inference, model, |a, b| rules.weak_eq(a, b));
    let inference_diff_model = difference_count(inference, model, |a, b| rules.weak_diff(a, b));
    let model_diff_inference = difference_count(model, inference, |a, b| rules.weak_diff(a, b));

    if strong_intersection == 0 && weak_intersection == 0 {
        return ComparisonOutcome::Distinct;
    }

    if inference.len() == model.len() {
        if strong_intersection == inference.len() {
            return ComparisonOutcome::Exact;
        } else if inference_diff_model == 0 {
            return ComparisonOutcome::Subset;
        } else if model_diff_inference == 0 {
            return ComparisonOutcome::Superset;
        }
    }

    if inference.len() < model.len() && inference_diff_model == 0 {
        return ComparisonOutcome::Subset;
    }

    if inference.len() > model.len() && model_diff_inference == 0 {
        return ComparisonOutcome::Superset;
    }

    ComparisonOutcome::Intersect
}

/// Elements of `set_a` with at least one equal element in `set_b`
fn intersect_count<T>(set_a: &[T], set_b: &[T], eq: impl Fn(&T, &T) -> bool) -> usize {
    set_a
        .iter()
        .filter(|a| set_b.iter().any(|b| eq(a, b)))
        .count()
}

/// Elements of `set_a` that differ from every element of `set_b`
fn difference_count<T>(set_a: &[T], set_b: &[T], diff: impl Fn(&T, &T) -> bool) -> usize {
    set_a
        .iter()
        .filter(|a| set_b.iter().all(|b| diff(a, b)))
        .count()
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Optional strings equal case-insensitively, `None == None`
fn optional_eq(a: &Option<String>, b: &Option<String>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => eq_ignore_case(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Both present and equal case-insensitively
fn present_eq(a: &Option<String>, b: &Option<String>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if eq_ignore_case(a, b))
}

/// Rules for modifications
#[derive(Debug, Clone, Copy)]
pub struct ModificationRules {
    /// Integer positions within this distance are equal
    pub position_tolerance: u32,
}

impl Default for ModificationRules {
    fn default() -> Self {
        Self { position_tolerance: 1 }
    }
}

impl ModificationRules {
    /// Position equality
    ///
    /// Integer positions match within the tolerance; anything else falls back
    /// to raw string equality, where two missing positions are equal.
    pub fn positions_equal(&self, a: &Modification, b: &Modification) -> bool {
        let parsed = (
            a.position.as_deref().and_then(parse_position),
            b.position.as_deref().and_then(parse_position),
        );

        match parsed {
            (Some(pos_a), Some(pos_b)) => pos_a.abs_diff(pos_b) <= u64::from(self.position_tolerance),
            _ => a.position == b.position,
        }
    }
}

fn parse_position(position: &str) -> Option<i64> {
    position.trim().parse().ok()
}

impl FeatureRules<Modification> for ModificationRules {
    fn strong_eq(&self, a: &Modification, b: &Modification) -> bool {
        a.same_type(b) && self.positions_equal(a, b)
    }

    fn weak_eq(&self, a: &Modification, b: &Modification) -> bool {
        a.same_type(b) && (a.position.is_none() || b.position.is_none())
    }

    fn weak_diff(&self, a: &Modification, b: &Modification) -> bool {
        if !a.same_type(b) {
            return true;
        }

        match (&a.position, &b.position) {
            (Some(_), None) => true,
            (Some(_), Some(_)) => !self.positions_equal(a, b),
            _ => false,
        }
    }
}

/// Rules for translocations
#[derive(Debug, Clone, Copy, Default)]
pub struct TranslocationRules;

impl FeatureRules<Translocation> for TranslocationRules {
    fn strong_eq(&self, a: &Translocation, b: &Translocation) -> bool {
        optional_eq(&a.from, &b.from) && optional_eq(&a.to, &b.to)
    }

    fn weak_eq(&self, a: &Translocation, b: &Translocation) -> bool {
        let to_missing = a.to.is_none() || b.to.is_none();
        let from_missing = a.from.is_none() || b.from.is_none();

        (to_missing && present_eq(&a.from, &b.from)) || (from_missing && present_eq(&a.to, &b.to))
    }

    fn weak_diff(&self, a: &Translocation, b: &Translocation) -> bool {
        !optional_eq(&a.from, &b.from) || !optional_eq(&a.to, &b.to)
    }
}

/// Rules for normalized participant identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifierRules;

impl FeatureRules<String> for IdentifierRules {
    fn strong_eq(&self, a: &String, b: &String) -> bool {
        eq_ignore_case(a, b)
    }

    fn weak_diff(&self, a: &String, b: &String) -> bool {
        !eq_ignore_case(a, b)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn modification() -> impl Strategy<Value = Modification> {
        (
            prop_oneof!["phosphorylation", "acetylation", "ubiquitination"],
            proptest::option::of(0u32..500),
        )
            .prop_map(|(kind, position)| {
                Modification::new(kind, position.map(|p| p.to_string()).as_deref())
            })
    }

    proptest! {
        /// Property: a non-empty set compared with itself is exact
        #[test]
        fn test_identifier_reflexive(values in proptest::collection::vec("[a-z0-9]{1,6}", 1..8)) {
            prop_assert_eq!(compare(&values, &values, &IdentifierRules), ComparisonOutcome::Exact);
        }

        /// Property: modification sets compared with themselves are exact
        #[test]
        fn test_modification_reflexive(mods in proptest::collection::vec(modification(), 1..6)) {
            let rules = ModificationRules::default();
            prop_assert_eq!(compare(&mods, &mods, &rules), ComparisonOutcome::Exact);
        }

        /// Property: swapping sides swaps subset and superset for identifiers
        #[test]
        fn test_identifier_subset_superset_flip(
            base in proptest::collection::vec("[a-z]{1,4}", 1..5),
            extra in "[0-9]{1,4}",
        ) {
            let mut larger = base.clone();
            larger.push(extra);
            let mut smaller = base;
            smaller.sort();
            smaller.dedup();
            larger.sort();
            larger.dedup();
            prop_assume!(larger.len() > smaller.len());

            prop_assert_eq!(compare(&smaller, &larger, &IdentifierRules), ComparisonOutcome::Subset);
            prop_assert_eq!(compare(&larger, &smaller, &IdentifierRules), ComparisonOutcome::Superset);
        }
    }
}
