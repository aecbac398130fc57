use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use randcheck::{logging, Bounds, RandomArray, SeededRng};

/// Write N random integers to a text file: the count, then the values.
#[derive(Parser, Debug)]
#[command(name = "gen_array", version, about)]
struct Args {
    /// Number of integers to generate
    #[arg(short = 'n', long, default_value_t = 100_000)]
    size: usize,

    /// Smallest value (inclusive)
    #[arg(long, default_value_t = -1_000_000_007, allow_negative_numbers = true)]
    min: i64,

    /// Largest value (inclusive)
    #[arg(long, default_value_t = 1_000_000_007, allow_negative_numbers = true)]
    max: i64,

    /// RNG seed; random if omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Destination file
    #[arg(short, long, default_value = "input.txt")]
    output: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(args: &Args) -> Result<()> {
    let bounds = Bounds::new(args.min, args.max)?;
    let mut rng = match args.seed {
        Some(seed) => SeededRng::new(seed),
        None => SeededRng::from_entropy(),
    };

    info!(size = args.size, min = bounds.min(), max = bounds.max(), seed = rng.seed(), "gen integers");
    let array = RandomArray::generate(args.size, bounds, &mut rng);

    array
        .write_file(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);
    run(&args)
}
