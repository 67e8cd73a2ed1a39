//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use clap::Parser;
use log::{info, warn, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use entropic::arithmetic::ArithmeticCodec;
use entropic::huffman::HuffmanCodec;

/// Round-trip a text message through the Huffman and arithmetic coders.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// Text to encode and decode
    #[clap(default_value = "abac")]
    text: String,

    /// Log level: off, error, warn, info, debug, trace
    #[clap(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<(), entropic::Error> {
    let args = Args::parse();

    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        args.log_level,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    let symbols: Vec<char> = args.text.chars().collect();

    //----- Huffman
    let mut huffman = HuffmanCodec::new();
    let bits = huffman.compress(&symbols)?;
    info!("Huffman dictionary: {:?}", huffman.dictionary());
    info!(
        "Huffman output: {} bits (fixed 8-bit baseline {} bits)",
        bits.len(),
        symbols.len() * 8
    );
    let decoded: String = huffman.decode(&bits)?.into_iter().collect();
    assert_eq!(decoded, args.text, "Huffman round trip mismatch");
    info!("Huffman decoded {} symbols back.", decoded.chars().count());

    //----- Arithmetic
    if symbols.len() > 40 {
        warn!("Arithmetic coding is unreliable past a few dozen symbols at f64 precision.");
    }
    let arithmetic = ArithmeticCodec::new(&symbols)?;
    for (sym, probability, interval) in arithmetic.model().iter() {
        info!(
            "p({:?}) = {:.6} -> [{:.6}, {:.6})",
            sym, probability, interval.low, interval.high
        );
    }
    let value = arithmetic.encode()?;
    info!("Arithmetic encoded value: {}", value);
    let decoded: String = arithmetic
        .decode(value, symbols.len())?
        .into_iter()
        .collect();
    assert_eq!(decoded, args.text, "Arithmetic round trip mismatch");
    info!("Arithmetic decoded {} symbols back.", decoded.chars().count());

    info!("Done.\n");
    Ok(())
}
