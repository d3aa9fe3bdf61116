// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! cytosim - explore and simulate cytokine measurement tables.
//!
//! # Commands
//!
//! - `cytosim show` - Print the first rows of the table
//! - `cytosim summary` - Summary statistics of selected columns
//! - `cytosim generate` - Generate synthetic records
//! - `cytosim hist` - Observed vs. simulated histogram as PNG
//! - `cytosim heatmap` - Correlation heatmap of selected columns as PNG
//!
//! # Examples
//!
//! ```bash
//! cytosim --data data/norm_cytokine_data.csv summary --columns IL-6,TNF
//! cytosim generate --columns IL-6,TNF --records 20 --distribution negative_binomial --prob 0.3
//! cytosim hist --column IL-6 --distribution normal --output il6.png
//! ```

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cytosim::config::{
    DEFAULT_BINS, DEFAULT_HISTOGRAM_RECORDS, DEFAULT_RECORDS, DEFAULT_SOURCE_PATH, DatasetConfig,
};
use cytosim::generation::{Distribution, DistributionParams, create_rng};
use cytosim::{Dataset, DatasetError, Describe, Result, plot};

/// Simulate cytokine levels from distributions fitted to observed data
#[derive(Parser)]
#[command(name = "cytosim")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Measurement file to load
    #[arg(short, long, global = true, default_value = DEFAULT_SOURCE_PATH)]
    data: PathBuf,

    /// Header of the sample-ID column
    #[arg(long, global = true)]
    index_column: Option<String>,

    /// Index value of the label row to discard
    #[arg(long, global = true)]
    label_row: Option<String>,

    /// Seed for reproducible generation
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the first rows of the table
    Show {
        /// Number of rows to print
        #[arg(short, long, default_value_t = 5)]
        rows: usize,
    },

    /// Summary statistics of the selected columns
    Summary {
        /// Columns to summarise (comma-separated, default: all)
        #[arg(short, long, value_delimiter = ',')]
        columns: Option<Vec<String>>,
    },

    /// Generate synthetic records
    Generate {
        /// Columns to generate (comma-separated, default: all)
        #[arg(short, long, value_delimiter = ',')]
        columns: Option<Vec<String>>,

        /// Number of records
        #[arg(short = 'n', long, default_value_t = DEFAULT_RECORDS)]
        records: usize,

        /// Distribution family (poisson, normal, negative_binomial)
        #[arg(short = 'D', long, default_value = "poisson")]
        distribution: String,

        /// Success probability for negative_binomial
        #[arg(short, long)]
        prob: Option<f64>,

        /// Write records to this CSV file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also print the summary and correlation of the generated records
        #[arg(long)]
        describe: bool,
    },

    /// Render observed vs. simulated histogram of one column
    Hist {
        /// Column to simulate
        #[arg(short, long)]
        column: String,

        /// Number of simulated records
        #[arg(short = 'n', long, default_value_t = DEFAULT_HISTOGRAM_RECORDS)]
        records: usize,

        /// Distribution family (poisson, normal, negative_binomial)
        #[arg(short = 'D', long, default_value = "poisson")]
        distribution: String,

        /// Success probability for negative_binomial
        #[arg(short, long)]
        prob: Option<f64>,

        /// Number of bins
        #[arg(short, long, default_value_t = DEFAULT_BINS)]
        bins: usize,

        /// Only draw the simulated histogram
        #[arg(long)]
        single: bool,

        /// PNG file to write
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Render a correlation heatmap of the selected columns
    Heatmap {
        /// Columns to correlate (comma-separated, default: all)
        #[arg(short, long, value_delimiter = ',')]
        columns: Option<Vec<String>>,

        /// PNG file to write
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve a column selection; omitted means every column, an empty list is refused.
fn select_columns(dataset: &Dataset, columns: Option<Vec<String>>) -> Result<Vec<String>> {
    match columns {
        None => Ok(dataset.table().columns().to_vec()),
        Some(cols) => {
            let cols: Vec<String> = cols
                .into_iter()
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect();
            if cols.is_empty() {
                return Err(DatasetError::invalid_parameter("select at least one column"));
            }
            Ok(cols)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = DatasetConfig::new(&cli.data);
    if let Some(index_column) = cli.index_column {
        config = config.with_index_column(index_column);
    }
    if let Some(label_row) = cli.label_row {
        config = config.with_label_row(label_row);
    }
    let dataset = Dataset::load(&config)?;
    let mut rng = create_rng(cli.seed);

    match cli.command {
        Commands::Show { rows } => {
            let (n_rows, n_cols) = dataset.table().shape();
            println!("Data Dimension: {n_rows} rows and {n_cols} columns.");
            print!("{}", dataset.table().head(rows));
        }

        Commands::Summary { columns } => {
            let cols = select_columns(&dataset, columns)?;
            let refs: Vec<&str> = cols.iter().map(String::as_str).collect();
            print!("{}", dataset.get_summary(Some(refs.as_slice()))?);
        }

        Commands::Generate {
            columns,
            records,
            distribution,
            prob,
            output,
            describe,
        } => {
            let cols = select_columns(&dataset, columns)?;
            let distribution = Distribution::from_name(&distribution, DistributionParams { prob })?;
            let generated = dataset.generate_records(&cols, records, distribution, &mut rng)?;
            match output {
                Some(path) => {
                    generated.write_csv(BufWriter::new(File::create(&path)?))?;
                    info!(path = %path.display(), records, "wrote generated records");
                }
                None => print!("{generated}"),
            }
            if describe {
                println!("\nSummary of generated records");
                print!("{}", generated.describe());
                println!("\nCorrelation of generated records");
                print!("{}", generated.correlation());
            }
        }

        Commands::Hist {
            column,
            records,
            distribution,
            prob,
            bins,
            single,
            output,
        } => {
            let distribution = Distribution::from_name(&distribution, DistributionParams { prob })?;
            let (observed, generated) =
                dataset.compare_histograms(&column, records, distribution, bins, &mut rng)?;
            if single {
                plot::render_histogram(&output, &column, &generated)?;
            } else {
                plot::render_histogram_comparison(&output, &column, &observed, &generated)?;
            }
            info!(path = %output.display(), "wrote histogram");
        }

        Commands::Heatmap { columns, output } => {
            let cols = select_columns(&dataset, columns)?;
            let matrix = dataset.correlation(&cols)?;
            plot::render_correlation_heatmap(&output, &matrix)?;
            info!(path = %output.display(), "wrote correlation heatmap");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
