use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use randcheck::compare::{DEFAULT_COUNT, DEFAULT_PREFIX};
use randcheck::{logging, ComparePlan};

/// Check that <prefix>_2.txt .. <prefix>_K.txt all match <prefix>_1.txt.
#[derive(Parser, Debug)]
#[command(name = "check_outputs", version, about)]
struct Args {
    /// Directory holding the files
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// File name prefix
    #[arg(short, long, default_value = DEFAULT_PREFIX)]
    prefix: String,

    /// Number of files to compare
    #[arg(short = 'k', long, default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Writes the report. A missing file is a reported outcome, not an error.
fn run<W: Write>(args: &Args, writer: &mut W) -> Result<()> {
    let outcome = ComparePlan::numbered(&args.dir, &args.prefix, args.count).run();
    outcome.report(writer)?;
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    run(&args, &mut writer)
}
