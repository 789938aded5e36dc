/// mstgen - Generate synthetic weighted graph datasets
///
/// Every graph is seeded with a random spanning tree, so generated graphs are
/// always connected. Without --sizes the standard 28-graph tiered dataset is
/// produced.
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

use spanbench::dataset::write_input;
use spanbench::generator::{GraphGenerator, DEFAULT_SEED};

#[derive(Parser)]
#[clap(name = "mstgen", about = "Generate synthetic weighted graph datasets")]
struct Args {
    /// Output dataset path (JSON)
    #[clap(short = 'o', long = "output", default_value = "data/input.json")]
    output: PathBuf,

    /// Random seed
    #[clap(long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Comma-separated node counts, one graph per entry
    #[clap(long = "sizes", value_delimiter = ',')]
    sizes: Vec<usize>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut generator = GraphGenerator::new(args.seed);
    let dataset = if args.sizes.is_empty() {
        generator.generate_complete_dataset()
    } else {
        generator.generate_sizes(&args.sizes)
    };

    let total_edges: usize = dataset.graphs.iter().map(|g| g.edges.len()).sum();
    write_input(&args.output, &dataset)
        .with_context(|| format!("Failed to write dataset to {}", args.output.display()))?;
    info!(
        "Wrote {} graphs ({} edges) to {}",
        dataset.graphs.len(),
        total_edges,
        args.output.display()
    );

    Ok(())
}
