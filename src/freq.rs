//! Symbol frequency tallying.
//!
//! The table remembers the order in which symbols were first seen. Tree
//! construction uses that order to break ties between equal counts, which
//! keeps the whole pipeline reproducible independent of hashing.

use std::hash::Hash;

use ahash::AHashMap;

use crate::error::{Error, Result};

/// Mapping from symbol to a positive occurrence count.
#[derive(Debug, Clone)]
pub struct FrequencyTable<S> {
    entries: Vec<(S, u64)>,
    index: AHashMap<S, usize>,
    total: u64,
}

impl<S: Eq + Hash + Clone> FrequencyTable<S> {
    /// Count every symbol in `symbols`.
    pub fn tally<I: IntoIterator<Item = S>>(symbols: I) -> Self {
        let mut table = Self::empty();
        for s in symbols {
            // One per symbol: the total is bounded by the iterator length.
            table.total = table.total.saturating_add(1);
            table.bump(s, 1);
        }
        table
    }

    /// Build a table from explicit `(symbol, count)` pairs.
    ///
    /// Repeated symbols have their counts summed. Zero counts are skipped.
    /// Fails with [`Error::WeightOverflow`] if the counts sum past `u64::MAX`,
    /// which keeps every subtree weight built from the table in range.
    pub fn from_counts<I: IntoIterator<Item = (S, u64)>>(counts: I) -> Result<Self> {
        let mut table = Self::empty();
        for (s, n) in counts {
            if n > 0 {
                table.total = table.total.checked_add(n).ok_or(Error::WeightOverflow)?;
                table.bump(s, n);
            }
        }
        Ok(table)
    }

    fn empty() -> Self {
        Self {
            entries: Vec::new(),
            index: AHashMap::new(),
            total: 0,
        }
    }

    // Callers keep `total` in range, so no single count can overflow.
    fn bump(&mut self, symbol: S, n: u64) {
        match self.index.get(&symbol) {
            Some(&i) => self.entries[i].1 += n,
            None => {
                self.index.insert(symbol.clone(), self.entries.len());
                self.entries.push((symbol, n));
            }
        }
    }

    /// Count for `symbol`, if it occurs.
    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.index.get(symbol).map(|&i| self.entries[i].1)
    }
}

impl<S> FrequencyTable<S> {
    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no symbol was counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the input length.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> + '_ {
        self.entries.iter().map(|(s, n)| (s, *n))
    }

    /// Entries by descending count; equal counts stay in first-occurrence order.
    pub fn by_frequency(&self) -> Vec<(&S, u64)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

impl<S: Eq + Hash + Clone> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::tally(iter)
    }
}

/// Count symbol occurrences. Empty input gives an empty table.
pub fn tally<S, I>(symbols: I) -> FrequencyTable<S>
where
    S: Eq + Hash + Clone,
    I: IntoIterator<Item = S>,
{
    FrequencyTable::tally(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts() {
        let freq = tally("aaabbc".chars());
        assert_eq!(freq.len(), 3);
        assert_eq!(freq.get(&'a'), Some(3));
        assert_eq!(freq.get(&'b'), Some(2));
        assert_eq!(freq.get(&'c'), Some(1));
        assert_eq!(freq.get(&'z'), None);
        assert_eq!(freq.total(), 6);
    }

    #[test]
    fn test_tally_empty() {
        let freq = tally("".chars());
        assert!(freq.is_empty());
        assert_eq!(freq.total(), 0);
    }

    #[test]
    fn test_first_occurrence_order() {
        let freq = tally("cabbac".chars());
        let order: Vec<char> = freq.iter().map(|(s, _)| *s).collect();
        assert_eq!(order, vec!['c', 'a', 'b']);
    }

    #[test]
    fn test_by_frequency_is_stable() {
        let freq = tally("xyzzy".chars());
        let sorted: Vec<(char, u64)> = freq.by_frequency().into_iter().map(|(s, n)| (*s, n)).collect();
        assert_eq!(sorted, vec![('y', 2), ('z', 2), ('x', 1)]);
    }

    #[test]
    fn test_from_counts_merges_and_skips_zero() {
        let freq = FrequencyTable::from_counts([(1u8, 4), (2, 0), (1, 2), (3, 1)]).unwrap();
        assert_eq!(freq.len(), 2);
        assert_eq!(freq.get(&1), Some(6));
        assert_eq!(freq.get(&2), None);
        assert_eq!(freq.total(), 7);
    }

    #[test]
    fn test_from_counts_rejects_overflow() {
        let result = FrequencyTable::from_counts([('a', u64::MAX), ('b', 1), ('c', 1)]);
        assert!(matches!(result, Err(Error::WeightOverflow)));

        let result = FrequencyTable::from_counts([('a', u64::MAX), ('a', 1)]);
        assert!(matches!(result, Err(Error::WeightOverflow)));
    }

    #[test]
    fn test_from_counts_at_the_limit() {
        let freq = FrequencyTable::from_counts([('a', u64::MAX - 1), ('b', 1)]).unwrap();
        assert_eq!(freq.total(), u64::MAX);
    }

    #[test]
    fn test_collect_tallies() {
        let freq: FrequencyTable<char> = "aab".chars().collect();
        assert_eq!(freq.get(&'a'), Some(2));
        assert_eq!(freq.get(&'b'), Some(1));
        assert_eq!(freq.total(), 3);
    }
}
