//! Occurrence counter with first-seen tie-breaking.

use std::collections::HashMap;

/// Counts occurrences of string keys.
///
/// Keys remember the order they were first seen, so [`most_common`] ranks
/// equal counts by first appearance.
///
/// ```
/// use tweetpack::core::Counter;
///
/// let mut counter = Counter::new();
/// for tag in ["rust", "serde", "tokio", "serde"] {
///     counter.add(tag);
/// }
///
/// assert_eq!(counter.len(), 3);
/// assert_eq!(counter.most_common(2), vec![("serde", 2), ("rust", 1)]);
/// ```
///
/// [`most_common`]: Counter::most_common
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counter {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl Counter {
    /// Creates an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments `key` by one.
    pub fn add(&mut self, key: &str) {
        self.add_n(key, 1);
    }

    /// Increments `key` by `n`.
    pub fn add_n(&mut self, key: &str, n: u64) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 += n,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), n));
            }
        }
    }

    /// Returns the count for `key` (0 if unseen).
    pub fn get(&self, key: &str) -> u64 {
        self.index.get(key).map_or(0, |&i| self.entries[i].1)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no key has been counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Iterates `(key, count)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), *c))
    }

    /// The `n` highest counts, descending, ties in first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self.iter().collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

impl<'a> Extend<&'a str> for Counter {
    fn extend<T: IntoIterator<Item = &'a str>>(&mut self, iter: T) {
        for key in iter {
            self.add(key);
        }
    }
}

impl<'a> FromIterator<&'a str> for Counter {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut counter = Counter::new();
        counter.extend(iter);
        counter
    }
}
