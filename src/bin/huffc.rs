use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::error;

use canonical_huffman::report::{Report, DEFAULT_PREVIEW_BITS};
use canonical_huffman::utils::{load_input, SAMPLE_CASES};
use canonical_huffman::{HuffmanCoder, MIN_INPUT_LENGTH};

#[derive(Parser, Debug)]
#[command(
    about = "Compresses a text with canonical Huffman codes and reports the result",
    long_about = None
)]
struct Args {
    /// The text to compress.
    text: Option<String>,

    /// Compress the content of this file instead.
    #[clap(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Run the built-in sample cases.
    #[clap(short, long, conflicts_with_all = ["text", "file"])]
    samples: bool,

    /// The minimum number of symbols an input must contain.
    #[clap(short, long, default_value_t = MIN_INPUT_LENGTH)]
    min_length: usize,

    /// How many encoded bits to show.
    #[clap(short, long, default_value_t = DEFAULT_PREVIEW_BITS)]
    preview_bits: usize,

    /// Increase the log verbosity, can be repeated.
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all logging.
    #[clap(short, long)]
    quiet: bool,
}

fn compress(coder: &HuffmanCoder, input: &[u8], preview_bits: usize) -> Result<()> {
    let run = coder.run(input)?;
    println!("{}", Report::with_preview_bits(&run, preview_bits));
    Ok(())
}

pub fn main() -> Result<()> {
    let args = Args::parse();

    stderrlog::new()
        .verbosity(2 + args.verbose as usize)
        .quiet(args.quiet)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let coder = HuffmanCoder::with_min_length(args.min_length);

    if args.samples {
        for (index, (description, text)) in SAMPLE_CASES.iter().enumerate() {
            println!("=== Sample {}: {} ===", index + 1, description);
            println!("Input: {:?}\n", text);
            // every sample is independent from the others
            if let Err(e) = compress(&coder, text.as_bytes(), args.preview_bits) {
                error!("Sample {} failed: {:#}", index + 1, e);
            }
        }
        return Ok(());
    }

    let input = match (args.text, args.file) {
        (Some(text), _) => text.into_bytes(),
        (None, Some(path)) => {
            load_input(&path).with_context(|| format!("Cannot read {}", path.display()))?
        }
        (None, None) => bail!("Nothing to compress: pass a text, --file or --samples"),
    };

    compress(&coder, &input, args.preview_bits).context("Compression failed")
}
