use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod commands;

use config::Config;

#[derive(Parser)]
#[command(name = "pixreads")]
#[command(about = "pixreads - paint synthetic alignment data from images")]
#[command(version)]
#[command(long_about = "
pixreads converts a two-tone raster image into fake short-read alignment
records whose per-coordinate coverage reproduces the image, plus matching
FASTQ reads. A random mode lays down non-image baseline coverage instead.

Examples:
  pixreads image --image logo.png --protein NP_047110.2 --index meta.json \\
      --json hits.json.gz --fastq reads.fastq.gz
  pixreads random --protein NP_047110.2 --index meta.json --read-count 1000 \\
      --json noise.json.gz --fastq noise.fastq.gz
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (defaults to pixreads.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for the jitter RNG, for reproducible output
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate hits that reproduce an image when rendered as coverage
    Image {
        /// The image file to convert
        #[arg(long, required = true)]
        image: PathBuf,

        /// Accession number of the protein to paint the image onto
        #[arg(long, required = true)]
        protein: String,

        /// Protein/genome metadata index (JSON, optionally .gz)
        #[arg(long, required = true)]
        index: PathBuf,

        /// Output file for the hit records (JSON lines; .gz compresses)
        #[arg(long, required = true)]
        json: PathBuf,

        /// Output file for the fake reads (FASTQ; .gz compresses)
        #[arg(long, required = true)]
        fastq: PathBuf,

        /// Horizontal OFF pixels to bridge between ON pixels on a row
        #[arg(long)]
        tolerance: Option<usize>,

        /// Row sampling modulus; higher means sparser sampling
        #[arg(long)]
        modulus: Option<usize>,
    },

    /// Generate random baseline coverage with no image
    Random {
        /// Accession number of the protein to cover
        #[arg(long, required = true)]
        protein: String,

        /// Protein/genome metadata index (JSON, optionally .gz)
        #[arg(long, required = true)]
        index: PathBuf,

        /// Output file for the hit records (JSON lines; .gz compresses)
        #[arg(long, required = true)]
        json: PathBuf,

        /// Output file for the fake reads (FASTQ; .gz compresses)
        #[arg(long, required = true)]
        fastq: PathBuf,

        /// The number of random regions to cover
        #[arg(long, default_value = "1000")]
        read_count: usize,
    },
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Image {
            image,
            protein,
            index,
            json,
            fastq,
            tolerance,
            modulus,
        } => {
            commands::image::execute(
                &config, cli.seed, image, protein, index, json, fastq, tolerance, modulus,
            )?;
        }

        Commands::Random {
            protein,
            index,
            json,
            fastq,
            read_count,
        } => {
            commands::random::execute(&config, cli.seed, protein, index, json, fastq, read_count)?;
        }
    }

    Ok(())
}
