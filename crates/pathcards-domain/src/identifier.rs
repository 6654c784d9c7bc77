//! Identifier normalization

/// Normalize a vocabulary-prefixed identifier
///
/// Identifiers are compared case-insensitively and without their vocabulary
/// prefix, so `"UniProt:P12345"` and `"p12345"` normalize to the same value.
/// Only the first `:` separates the prefix.
///
/// # Examples
///
/// ```
/// use pathcards_domain::normalize_id;
///
/// assert_eq!(normalize_id("UniProt:P12345"), "p12345");
/// assert_eq!(normalize_id(" P12345 "), "p12345");
/// ```
pub fn normalize_id(id: &str) -> String {
    let lowered = id.to_lowercase();

    match lowered.split_once(':') {
        Some((_prefix, rest)) => rest.trim().to_string(),
        None => lowered.trim().to_string(),
    }
}

/// Insertion-ordered set of normalized identifiers
///
/// Never contains empty strings or duplicates. Iteration follows first
/// insertion, which keeps candidate lookups reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSet(Vec<String>);

impl IdSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an already-normalized id, ignoring empties and duplicates
    ///
    /// Returns true if the id was added.
    pub fn insert(&mut self, id: String) -> bool {
        if id.is_empty() || self.0.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    /// Add every id of another set, preserving this set's order first
    pub fn extend(&mut self, other: IdSet) {
        for id in other.0 {
            self.insert(id);
        }
    }

    /// Union of two sets
    pub fn union(mut self, other: IdSet) -> IdSet {
        self.extend(other);
        self
    }

    /// Check membership
    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|existing| existing == id)
    }

    /// Number of ids
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no ids
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// View as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl FromIterator<String> for IdSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = IdSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl IntoIterator for IdSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a IdSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
