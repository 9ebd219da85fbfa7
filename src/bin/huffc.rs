//! huffc - Huffman-code a text file and report the result.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;

use huff::{bits, code_listing, CompressionStats, Decoder};

#[derive(Parser)]
#[command(name = "huffc")]
#[command(about = "Build a Huffman code for a text file and report the compression", long_about = None)]
#[command(version)]
struct Cli {
    /// Text file to code
    path: PathBuf,

    /// Print the encoded bitstring
    #[arg(long, default_value_t = false)]
    show_bits: bool,

    /// Print how long each stage took
    #[arg(long, default_value_t = false)]
    timings: bool,

    /// Skip the per-symbol code listing
    #[arg(long, default_value_t = false)]
    no_listing: bool,
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let text = std::fs::read_to_string(&cli.path)
        .with_context(|| format!("reading {}", cli.path.display()))?;
    if text.is_empty() {
        println!("{} is empty; nothing to code", cli.path.display());
        return Ok(());
    }

    let (freq, t_tally) = timed(|| huff::tally(text.chars()));
    let (tree, t_tree) = timed(|| huff::build_tree(&freq));
    let tree = tree.context("building code tree")?;
    let (table, t_table) = timed(|| huff::build_code_table(&tree));
    let (bits, t_encode) = timed(|| huff::encode(text.chars(), &table));
    let bits = bits.context("encoding input")?;
    let (decoded, t_decode) = timed(|| Decoder::new(&table).and_then(|d| d.decode(&bits)));
    let decoded: String = decoded.context("decoding payload")?.into_iter().collect();

    if !cli.no_listing {
        println!("{:<12} | {:<16} | frequency", "symbol", "code");
        println!("{}", "-".repeat(44));
        for row in code_listing(&freq, &table) {
            println!(
                "{:<12} | {:<16} | {}",
                format!("{:?}", row.symbol),
                bits::to_string(&row.code),
                row.frequency
            );
        }
        println!();
    }

    if cli.show_bits {
        println!("{}", bits::to_string(&bits));
        println!();
    }

    let stats = CompressionStats::new(&freq, &table);
    println!(
        "{} symbols, {} distinct: {} bits at 8 bits/symbol, {} bits coded ({:.2}% of original, {} bits saved)",
        stats.symbols,
        freq.len(),
        stats.original_bits,
        stats.encoded_bits,
        stats.ratio(),
        stats.saved_bits()
    );

    if cli.timings {
        println!();
        println!("tally:       {:?}", t_tally);
        println!("build tree:  {:?}", t_tree);
        println!("code table:  {:?}", t_table);
        println!("encode:      {:?}", t_encode);
        println!("decode:      {:?}", t_decode);
    }

    if decoded != text {
        bail!("round trip mismatch: decoded text differs from input");
    }
    println!("round trip ok");

    Ok(())
}
