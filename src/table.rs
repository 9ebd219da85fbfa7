//! Code tables: symbol to bitstring.

use std::fmt;
use std::hash::Hash;

use ahash::AHashMap;
use bitvec::prelude::*;

use crate::bits;
use crate::codec::Decoder;
use crate::error::{Error, Result};
use crate::freq::FrequencyTable;
use crate::tree::{CodeTree, Node};

/// A sequence of bits, most significant bit first within each byte.
pub type Bitstring = BitVec<u8, Msb0>;

/// Prefix-free mapping from symbol to a non-empty code.
///
/// Entries keep the depth-first leaf order of the tree they came from.
#[derive(Debug, Clone)]
pub struct CodeTable<S> {
    entries: Vec<(S, Bitstring)>,
    index: AHashMap<S, usize>,
}

impl<S: Eq + Hash + Clone> CodeTable<S> {
    /// Derive the code table from a tree.
    ///
    /// Walks depth-first, left before right, appending `0` for each left
    /// edge and `1` for each right edge. A tree that is a single leaf gives
    /// that symbol the one-bit code `0`.
    pub fn from_tree(tree: &CodeTree<S>) -> Self {
        let mut table = Self {
            entries: Vec::with_capacity(tree.len() / 2 + 1),
            index: AHashMap::with_capacity(tree.len() / 2 + 1),
        };

        let mut stack = vec![(tree.root(), Bitstring::new())];
        while let Some((id, path)) = stack.pop() {
            match tree.node(id) {
                Node::Leaf { symbol, .. } => {
                    let code = if path.is_empty() { bitvec![u8, Msb0; 0] } else { path };
                    table.push(symbol.clone(), code);
                }
                Node::Internal { left, right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push(true);
                    stack.push((*right, right_path));

                    let mut left_path = path;
                    left_path.push(false);
                    stack.push((*left, left_path));
                }
            }
        }
        table
    }

    /// Rebuild a table from `(symbol, code)` pairs, e.g. after transport.
    ///
    /// Fails with [`Error::InvalidCodeTable`] on an empty code, a repeated
    /// symbol, or a code that is a prefix of another.
    pub fn from_codes<I: IntoIterator<Item = (S, Bitstring)>>(codes: I) -> Result<Self> {
        let mut table = Self {
            entries: Vec::new(),
            index: AHashMap::new(),
        };
        for (symbol, code) in codes {
            if code.is_empty() {
                return Err(Error::InvalidCodeTable(format!(
                    "entry {} has an empty code",
                    table.entries.len()
                )));
            }
            if table.index.contains_key(&symbol) {
                return Err(Error::InvalidCodeTable(format!(
                    "entry {} repeats an earlier symbol",
                    table.entries.len()
                )));
            }
            table.push(symbol, code);
        }
        // Building the trie rejects any prefix overlap.
        Decoder::new(&table)?;
        Ok(table)
    }

    fn push(&mut self, symbol: S, code: Bitstring) {
        self.index.insert(symbol.clone(), self.entries.len());
        self.entries.push((symbol, code));
    }

    /// Code for `symbol`, if it has one.
    pub fn get(&self, symbol: &S) -> Option<&BitSlice<u8, Msb0>> {
        self.index
            .get(symbol)
            .map(|&i| self.entries[i].1.as_bitslice())
    }

    /// Payload size in bits for input with these frequencies.
    ///
    /// Symbols without a code contribute nothing. Saturates at `u64::MAX`.
    pub fn encoded_len(&self, freq: &FrequencyTable<S>) -> u64 {
        freq.iter()
            .filter_map(|(s, n)| self.get(s).map(|code| (code.len() as u64).saturating_mul(n)))
            .fold(0u64, u64::saturating_add)
    }
}

impl<S> CodeTable<S> {
    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(symbol, code)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitSlice<u8, Msb0>)> + '_ {
        self.entries.iter().map(|(s, c)| (s, c.as_bitslice()))
    }

    /// Length of the longest code, 0 for an empty table.
    pub fn max_code_len(&self) -> usize {
        self.entries.iter().map(|(_, c)| c.len()).max().unwrap_or(0)
    }
}

impl<S: PartialEq> PartialEq for CodeTable<S> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<S: Eq> Eq for CodeTable<S> {}

impl<S: fmt::Debug> fmt::Display for CodeTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in &self.entries {
            writeln!(f, "{:?}: {}", symbol, bits::to_string(code))?;
        }
        Ok(())
    }
}

/// Derive the code table for a tree. See [`CodeTable::from_tree`].
pub fn build_code_table<S: Eq + Hash + Clone>(tree: &CodeTree<S>) -> CodeTable<S> {
    CodeTable::from_tree(tree)
}
