use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;

use spanbench::batch::{run_batch, BatchConfig};
use spanbench::dataset::{read_input, write_input, write_output};
use spanbench::generator::{GraphGenerator, DEFAULT_SEED};
use spanbench::report::{write_edges_csv, write_metrics_csv};

/// spanbench - Compare Prim and Kruskal minimum spanning trees
///
/// Reads a JSON dataset of weighted undirected graphs, runs both algorithms on
/// each graph and writes cost, timing and operation-count comparisons
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Input dataset (JSON)
    #[clap(short = 'i', long = "input", default_value = "data/input.json")]
    input: PathBuf,

    /// Output results (JSON)
    #[clap(short = 'o', long = "output", default_value = "output/output.json")]
    output: PathBuf,

    /// Also write per-run metrics as CSV
    #[clap(long = "metrics-csv")]
    metrics_csv: Option<PathBuf>,

    /// Also write the selected MST edges as CSV
    #[clap(long = "edges-csv")]
    edges_csv: Option<PathBuf>,

    /// Fail instead of generating a synthetic dataset when the input is missing
    #[clap(long = "no-generate")]
    no_generate: bool,

    /// Seed for synthetic dataset generation
    #[clap(long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Number of graphs processed in parallel
    #[clap(short = 't', long = "threads", default_value = "1")]
    threads: usize,

    /// Skip the connectivity warning pass
    #[clap(long = "skip-connectivity")]
    skip_connectivity: bool,

    /// Quiet mode (warnings and errors only)
    #[clap(long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if !args.input.exists() {
        if args.no_generate {
            anyhow::bail!("Input file not found: {}", args.input.display());
        }
        info!(
            "Input file {} not found, generating dataset (seed {})",
            args.input.display(),
            args.seed
        );
        let dataset = GraphGenerator::new(args.seed).generate_complete_dataset();
        write_input(&args.input, &dataset)?;
        info!("Dataset generated: {}", args.input.display());
    }

    let input = read_input(&args.input)?;

    let config = BatchConfig {
        threads: args.threads.max(1),
        check_connectivity: !args.skip_connectivity,
    };
    let output = run_batch(&input, &config)?;

    write_output(&args.output, &output)?;
    info!("Results saved to {}", args.output.display());

    if let Some(ref path) = args.metrics_csv {
        write_metrics_csv(path, &output)?;
        info!("Metrics CSV saved to {}", path.display());
    }
    if let Some(ref path) = args.edges_csv {
        write_edges_csv(path, &output)?;
        info!("Edges CSV saved to {}", path.display());
    }

    Ok(())
}
