use std::path::PathBuf;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use primersort::{classify_and_sort, seqio, table};

/// Primersort CLI
#[derive(Parser, Debug)]
#[command(name = "primersort")]
#[command(version)]
#[command(about = "Sort sequencing reads by the first primer matching their prefix", long_about = None)]
struct Cli {
    /// Input reads (FASTQ, gzipped FASTQ, or FASTQ text in a .txt)
    #[arg(short = 'f', long = "reads")]
    reads: PathBuf,

    /// Primer table with a 'Primers' column (CSV/TSV)
    #[arg(short = 'p', long = "primers")]
    primers: PathBuf,

    /// Destination table for the sorted reads (CSV/TSV)
    #[arg(short = 's', long = "output")]
    output: PathBuf,

    /// Worker threads for classification (0 = all logical cores)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

// One exit code per failure case so callers can tell them apart.
const EXIT_FAILURE: i32 = 1;
const EXIT_HELP: i32 = 2;
const EXIT_BAD_READS_EXT: i32 = 3;
const EXIT_BAD_PRIMER_EXT: i32 = 4;
const EXIT_BAD_OUTPUT_EXT: i32 = 5;
const EXIT_MISSING_ARG: i32 = 6;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp => EXIT_HELP,
                ErrorKind::DisplayVersion => 0,
                ErrorKind::MissingRequiredArgument => EXIT_MISSING_ARG,
                _ => EXIT_FAILURE,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let filter = if cli.verbose {
        EnvFilter::new("primersort=debug,info")
    } else {
        EnvFilter::new("primersort=info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    // Path validation happens before any file is touched.
    if !seqio::has_reads_extension(&cli.reads) {
        error!("'{}' is not a reads file (expected {})", cli.reads.display(), seqio::READS_EXTENSIONS);
        std::process::exit(EXIT_BAD_READS_EXT);
    }
    if !table::has_table_extension(&cli.primers) {
        error!(
            "'{}' is not a primer table (expected {})",
            cli.primers.display(),
            table::TABLE_EXTENSIONS
        );
        std::process::exit(EXIT_BAD_PRIMER_EXT);
    }
    if !table::has_table_extension(&cli.output) {
        error!(
            "'{}' is not a valid output table path (expected {})",
            cli.output.display(),
            table::TABLE_EXTENSIONS
        );
        std::process::exit(EXIT_BAD_OUTPUT_EXT);
    }

    if let Err(e) = run(&cli) {
        error!("{e:#}");
        std::process::exit(EXIT_FAILURE);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let threads = if cli.threads == 0 { std::cmp::max(1, num_cpus::get()) } else { cli.threads };
    rayon::ThreadPoolBuilder::new().num_threads(threads).build_global().ok();

    let primers = table::load_primers(&cli.primers)
        .with_context(|| format!("loading primers from {}", cli.primers.display()))?;
    info!("loaded {} primer pattern(s) from {}", primers.len(), cli.primers.display());

    let reads = seqio::load_reads(&cli.reads)
        .with_context(|| format!("loading reads from {}", cli.reads.display()))?;
    info!("loaded {} read(s) from {}", reads.len(), cli.reads.display());

    let sorted = classify_and_sort(&primers, reads);
    table::write_classified(&cli.output, &sorted)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    info!("wrote {} row(s) to {}", sorted.len(), cli.output.display());

    // Per-primer tally on stdout (requires polars 'fmt' feature).
    let df = table::tally_dataframe(&sorted)?;
    println!("{df}");

    Ok(())
}
