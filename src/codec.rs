//! Encoding with a code table and trie-based decoding.
//!
//! Encoding is a table lookup per symbol. Decoding rebuilds the code as a
//! binary trie once and then walks it bit by bit, so a stream of `m` bits
//! decodes in O(m) regardless of how many symbols the table holds.

use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;

use bitvec::prelude::*;

use crate::error::{Error, Malformed, Result};
use crate::table::{Bitstring, CodeTable};
use crate::tree::arena_index;

/// Encode a symbol sequence into a bitstring.
///
/// Fails with [`Error::LookupFailure`] at the first symbol that has no code.
pub fn encode<S, I>(symbols: I, table: &CodeTable<S>) -> Result<Bitstring>
where
    S: Eq + Hash + Clone + Debug,
    I: IntoIterator,
    I::Item: Borrow<S>,
{
    let mut bits = Bitstring::new();
    for (position, s) in symbols.into_iter().enumerate() {
        let s = s.borrow();
        match table.get(s) {
            Some(code) => bits.extend_from_bitslice(code),
            None => {
                return Err(Error::LookupFailure {
                    position,
                    symbol: format!("{:?}", s),
                })
            }
        }
    }
    Ok(bits)
}

/// Decode a bitstring with a code table.
///
/// Builds a [`Decoder`] for one use; keep a `Decoder` around to decode many
/// streams with the same table.
pub fn decode<S: Clone>(table: &CodeTable<S>, bits: &BitSlice<u8, Msb0>) -> Result<Vec<S>> {
    Decoder::new(table)?.decode(bits)
}

/// Trie node. Branch children are arena indices for bits `0` and `1`.
#[derive(Debug, Clone, Copy)]
enum TrieNode {
    Branch([Option<u32>; 2]),
    Leaf(u32),
}

const ROOT: usize = 0;

/// Prefix-trie decoder built from a code table.
#[derive(Debug, Clone)]
pub struct Decoder<S> {
    trie: Vec<TrieNode>,
    symbols: Vec<S>,
}

impl<S: Clone> Decoder<S> {
    /// Build the trie for `table`.
    ///
    /// Tables derived from a tree always succeed. A table whose codes are
    /// empty or overlap as prefixes fails with [`Error::InvalidCodeTable`].
    pub fn new(table: &CodeTable<S>) -> Result<Self> {
        let mut trie = vec![TrieNode::Branch([None, None])];
        let mut symbols = Vec::with_capacity(table.len());

        for (symbol, code) in table.iter() {
            if code.is_empty() {
                return Err(Error::InvalidCodeTable(format!(
                    "entry {} has an empty code",
                    symbols.len()
                )));
            }
            let last = code.len() - 1;
            let mut at = ROOT;
            for (depth, bit) in code.iter().by_vals().enumerate() {
                let TrieNode::Branch(children) = trie[at] else {
                    return Err(overlap(symbols.len()));
                };
                let next = match children[bit as usize] {
                    // Something already lives at or below this code.
                    Some(_) if depth == last => return Err(overlap(symbols.len())),
                    Some(next) => next as usize,
                    None => {
                        let next = trie.len();
                        let next_index = arena_index(next)?;
                        trie.push(if depth == last {
                            TrieNode::Leaf(arena_index(symbols.len())?)
                        } else {
                            TrieNode::Branch([None, None])
                        });
                        if let TrieNode::Branch(children) = &mut trie[at] {
                            children[bit as usize] = Some(next_index);
                        }
                        next
                    }
                };
                at = next;
            }
            symbols.push(symbol.clone());
        }

        Ok(Self { trie, symbols })
    }

    /// Decode `bits` back into symbols.
    ///
    /// Fails with [`Error::MalformedBitstream`] if a bit leads nowhere in the
    /// trie or the stream stops part way through a code.
    pub fn decode(&self, bits: &BitSlice<u8, Msb0>) -> Result<Vec<S>> {
        let mut out = Vec::new();
        let mut at = ROOT;

        for (offset, bit) in bits.iter().by_vals().enumerate() {
            let TrieNode::Branch(children) = self.trie[at] else {
                unreachable!("decoder resets to the root after every leaf");
            };
            let next = children[bit as usize].ok_or_else(|| Error::MalformedBitstream {
                offset,
                kind: Malformed::UnmatchedPrefix,
            })? as usize;

            match self.trie[next] {
                TrieNode::Leaf(sym) => {
                    out.push(self.symbols[sym as usize].clone());
                    at = ROOT;
                }
                TrieNode::Branch(_) => at = next,
            }
        }

        if at != ROOT {
            return Err(Error::MalformedBitstream {
                offset: bits.len(),
                kind: Malformed::Truncated,
            });
        }
        Ok(out)
    }
}

fn overlap(entry: usize) -> Error {
    Error::InvalidCodeTable(format!("entry {} overlaps another code as a prefix", entry))
}
