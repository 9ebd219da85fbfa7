//! Size accounting and the per-symbol code listing.

use std::hash::Hash;

use crate::freq::FrequencyTable;
use crate::table::{Bitstring, CodeTable};

/// Bits per symbol in the uncompressed baseline.
pub const BASELINE_BITS_PER_SYMBOL: u64 = 8;

/// Payload size before and after coding.
///
/// The code table is not counted against the encoded size. Bit counts
/// saturate at `u64::MAX` for tables built from huge explicit counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    /// Input length in symbols.
    pub symbols: u64,
    /// Size at a fixed 8 bits per symbol.
    pub original_bits: u64,
    /// Size of the Huffman payload.
    pub encoded_bits: u64,
}

impl CompressionStats {
    /// Compute sizes from the tally and the table derived from it.
    pub fn new<S: Eq + Hash + Clone>(freq: &FrequencyTable<S>, table: &CodeTable<S>) -> Self {
        let symbols = freq.total();
        Self {
            symbols,
            original_bits: symbols.saturating_mul(BASELINE_BITS_PER_SYMBOL),
            encoded_bits: table.encoded_len(freq),
        }
    }

    /// Encoded size as a percentage of the original; 0 for empty input.
    pub fn ratio(&self) -> f64 {
        if self.original_bits == 0 {
            return 0.0;
        }
        self.encoded_bits as f64 / self.original_bits as f64 * 100.0
    }

    /// Bits saved relative to the baseline.
    pub fn saved_bits(&self) -> u64 {
        self.original_bits.saturating_sub(self.encoded_bits)
    }
}

/// One line of the code listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRow<S> {
    /// The symbol.
    pub symbol: S,
    /// Its code.
    pub code: Bitstring,
    /// Its occurrence count.
    pub frequency: u64,
}

/// Every coded symbol with its code and count, most frequent first.
pub fn code_listing<S: Eq + Hash + Clone>(
    freq: &FrequencyTable<S>,
    table: &CodeTable<S>,
) -> Vec<CodeRow<S>> {
    freq.by_frequency()
        .into_iter()
        .filter_map(|(symbol, frequency)| {
            table.get(symbol).map(|code| CodeRow {
                symbol: symbol.clone(),
                code: code.to_bitvec(),
                frequency,
            })
        })
        .collect()
}
