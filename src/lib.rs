//! # Static Huffman coding
//!
//! *Optimal prefix codes from observed symbol frequencies.*
//!
//! ## Intuition First
//!
//! Frequent symbols should cost fewer bits than rare ones. Huffman's
//! construction gets there greedily: keep merging the two rarest subtrees
//! until a single tree remains, then read each symbol's code off its path
//! from the root (`0` for left, `1` for right). Because every symbol sits at
//! a leaf, no code is a prefix of another and a bitstream decodes without
//! separators.
//!
//! ## Pipeline
//!
//! ```text
//! symbols ──tally──▶ FrequencyTable ──build_tree──▶ CodeTree
//!                                                       │
//!                                              build_code_table
//!                                                       ▼
//! symbols ─────────────encode(·, table)──────────▶ CodeTable ──▶ Bitstring
//! Bitstring ───────────decode(table, ·)──────────────────────▶ symbols
//! ```
//!
//! Each stage is a pure function of its inputs; tables and decoders are
//! read-only once built and can be shared across threads.
//!
//! ```rust
//! let text = "aaabbc";
//! let freq = huff::tally(text.chars());
//! let tree = huff::build_tree(&freq)?;
//! let table = huff::build_code_table(&tree);
//!
//! let bits = huff::encode(text.chars(), &table)?;
//! assert_eq!(bits.len(), 9);
//!
//! let decoded: String = huff::decode(&table, &bits)?.into_iter().collect();
//! assert_eq!(decoded, text);
//! # Ok::<(), huff::Error>(())
//! ```
//!
//! ## Determinism
//!
//! Ties between equal weights are broken by first occurrence in the input
//! (see [`tree`]), so identical input always yields an identical table and
//! bitstream.
//!
//! ## Complexity Analysis
//!
//! - **Tally**: $O(n)$ in input length.
//! - **Tree**: $O(N \log N)$ in distinct symbols, via a binary heap.
//! - **Encode**: $O(n)$ table lookups.
//! - **Decode**: $O(m)$ in bitstream length, via a prefix trie.
//!
//! ## Failure Modes
//!
//! 1. **Empty input**: there is no tree for zero symbols.
//! 2. **Table mismatch**: encoding a symbol the table does not know.
//! 3. **Damaged stream**: bits that stop mid-code or lead nowhere.
//! 4. **Oversized counts**: explicit counts whose total exceeds `u64`.
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bits;
pub mod codec;
pub mod error;
pub mod freq;
pub mod report;
pub mod table;
pub mod tree;

pub use codec::{decode, encode, Decoder};
pub use error::{Error, Malformed, Result};
pub use freq::{tally, FrequencyTable};
pub use report::{code_listing, CodeRow, CompressionStats};
pub use table::{build_code_table, Bitstring, CodeTable};
pub use tree::{build_tree, CodeTree, Node, NodeId};
