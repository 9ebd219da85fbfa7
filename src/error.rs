//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for tree construction, encoding and decoding.
#[derive(Debug, Error)]
pub enum Error {
    /// There are no symbols to build a code tree from.
    #[error("empty input: no symbols to build a code tree from")]
    EmptyInput,

    /// Counts sum past `u64::MAX`.
    #[error("symbol counts overflow a 64-bit total")]
    WeightOverflow,

    /// More distinct symbols or trie nodes than a 32-bit index can address.
    #[error("{0} entries exceed the 32-bit node index space")]
    TooManyNodes(usize),

    /// A symbol being encoded has no entry in the code table.
    #[error("symbol {symbol} at position {position} has no code in the table")]
    LookupFailure {
        /// Index of the symbol in the input sequence.
        position: usize,
        /// Debug rendering of the missing symbol.
        symbol: String,
    },

    /// The bitstream does not decode under the code table.
    #[error("malformed bitstream at bit {offset}: {kind}")]
    MalformedBitstream {
        /// Bit offset at which decoding failed.
        offset: usize,
        /// What went wrong.
        kind: Malformed,
    },

    /// A code table supplied from outside is not a valid prefix code.
    #[error("invalid code table: {0}")]
    InvalidCodeTable(String),

    /// Bit text contained something other than `0` or `1`.
    #[error("invalid bit digit {digit:?} at position {position}")]
    InvalidBitDigit {
        /// The offending character.
        digit: char,
        /// Character index in the text.
        position: usize,
    },
}

/// Why a bitstream failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Malformed {
    /// The stream ended part way through a code.
    #[error("stream ends inside a partial code")]
    Truncated,

    /// No code continues the accumulated prefix with the next bit.
    #[error("no code matches the accumulated prefix")]
    UnmatchedPrefix,
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
