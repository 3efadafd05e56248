use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use symcodec::{Codec, CodecConfig, CompressionStats, EncodedBlock, MatchPolicy};

#[derive(Parser, Debug)]
#[command(name = "symcodec")]
#[command(about = "Compress raw 8-bit symbol data with RLE, LZ77 or Huffman coding")]
#[command(version)]
struct Args {
    /// Input file (use - for stdin): raw symbols, or a JSON block with --decompress
    #[arg(short, long)]
    input: PathBuf,

    /// Output file (use - for stdout)
    #[arg(short, long)]
    output: PathBuf,

    /// Codec name: rle, lz77 or huffman (case-insensitive)
    #[arg(short, long)]
    codec: String,

    /// Decompress a JSON block back to raw symbols instead of compressing
    #[arg(short, long)]
    decompress: bool,

    /// LZ77 window size (lz77 only, default 64)
    #[arg(short, long, allow_negative_numbers = true)]
    window_size: Option<i64>,

    /// Only emit LZ77 back-references that overlap their own output (lz77 only)
    #[arg(long)]
    require_overlap: bool,

    /// Show verbose statistics and debug logging
    #[arg(short, long)]
    verbose: bool,
}

const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run() -> Result<u8, Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = CodecConfig {
        window_size: args.window_size.map(CodecConfig::window_size_from_signed).transpose()?,
        match_policy: args.require_overlap.then_some(MatchPolicy::RequireOverlap),
    };
    let codec = Codec::from_name(&args.codec, &config)?;

    let input = read_input(&args.input)?;
    let start = std::time::Instant::now();

    let output = if args.decompress {
        let block: EncodedBlock = serde_json::from_slice(&input)?;
        let symbols = codec.decompress(&block)?;
        tracing::info!(codec = %codec.kind(), symbols = symbols.len(), "decompressed");
        symbols
    } else {
        let block = codec.compress(&input)?;
        let stats = CompressionStats::from_block(input.len(), &block);
        tracing::info!(codec = %codec.kind(), units = stats.encoded_units, "compressed");

        if args.verbose {
            eprintln!("Compression complete:");
            eprintln!("  Input symbols:    {}", stats.input_symbols);
            eprintln!("  Encoded units:    {}", stats.encoded_units);
            eprintln!("  Estimated bytes:  {}", stats.encoded_bytes_estimate);
            eprintln!("  Ratio:            {:.3}", stats.ratio());
        }
        serde_json::to_vec(&block)?
    };

    write_output(&args.output, &output)?;

    if args.verbose {
        eprintln!("  Time:             {:.2?}", start.elapsed());
    }

    Ok(0)
}

fn read_input(path: &Path) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    if path.to_str() == Some("-") {
        io::stdin().lock().read_to_end(&mut data)?;
    } else {
        BufReader::new(File::open(path)?).read_to_end(&mut data)?;
    }
    Ok(data)
}

fn write_output(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut output: Box<dyn Write> = if path.to_str() == Some("-") {
        Box::new(io::stdout().lock())
    } else {
        Box::new(BufWriter::new(File::create(path)?))
    };
    output.write_all(data)?;
    output.flush()
}
