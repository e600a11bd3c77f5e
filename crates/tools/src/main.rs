use std::io;

use anyhow::{Context, Result};
use cavegen::{Cell, GenerationParameters, Grid, format_snapshot_hash, iterations_from_signed};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Hash,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a cellular-automaton cave and print it", long_about = None)]
struct Args {
    #[arg(long, default_value_t = 32)]
    width: usize,
    #[arg(long, default_value_t = 32)]
    height: usize,
    /// Wall bias in percent; a cell starts as wall when its roll in [1, 100) is at or below it
    #[arg(short, long, default_value_t = 50.0)]
    density: f64,
    /// Number of smoothing passes
    #[arg(short, long, default_value_t = 4, allow_negative_numbers = true)]
    iterations: i64,
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Serialize)]
struct CaveReport<'a> {
    width: usize,
    height: usize,
    density: f64,
    iterations: u32,
    seed: u64,
    hash: String,
    walls: usize,
    rows: Vec<String>,
    #[serde(skip)]
    grid: &'a Grid,
}

impl<'a> CaveReport<'a> {
    fn new(params: &GenerationParameters, seed: u64, grid: &'a Grid) -> Self {
        Self {
            width: params.width,
            height: params.height,
            density: params.density,
            iterations: params.iterations,
            seed,
            hash: format_snapshot_hash(grid.snapshot_hash()),
            walls: grid.count(Cell::Wall),
            rows: grid.row_strings(),
            grid,
        }
    }

    fn render(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Text => self.grid.to_text(),
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize cave report")?
            }
            OutputFormat::Hash => self.hash.clone(),
        })
    }
}

fn params_from_args(args: &Args) -> Result<GenerationParameters> {
    let iterations = iterations_from_signed(args.iterations)
        .with_context(|| format!("Rejected --iterations {}", args.iterations))?;
    Ok(GenerationParameters {
        width: args.width,
        height: args.height,
        density: args.density,
        iterations,
    })
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let args = Args::parse();
    let params = params_from_args(&args)?;
    let grid = params
        .generate_seeded(args.seed)
        .with_context(|| format!("Failed to generate cave with {params:?}"))?;
    tracing::info!(seed = args.seed, walls = grid.count(Cell::Wall), "cave generated");

    println!("{}", CaveReport::new(&params, args.seed, &grid).render(args.format)?);
    Ok(())
}
