use anyhow::{Result, bail};
use cavegen::{AutomatonSmoother, Cell, GenerationParameters, Grid};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Check generation invariants over random parameters", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 500)]
    runs: u32,
}

fn pick(rng: &mut ChaCha8Rng, min_value: u64, max_value: u64) -> u64 {
    min_value + rng.next_u64() % (max_value - min_value + 1)
}

fn random_params(rng: &mut ChaCha8Rng) -> GenerationParameters {
    GenerationParameters {
        width: pick(rng, 1, 64) as usize,
        height: pick(rng, 1, 64) as usize,
        density: pick(rng, 0, 100) as f64,
        iterations: pick(rng, 0, 12) as u32,
    }
}

fn check_run(params: &GenerationParameters, map_seed: u64) -> Result<()> {
    let first = params.generate_seeded(map_seed)?;
    let second = params.generate_seeded(map_seed)?;
    if first != second {
        bail!("non-deterministic output for {params:?} seed={map_seed}");
    }
    if (first.width(), first.height()) != (params.width, params.height) {
        bail!(
            "dimensions drifted to {}x{} for {params:?}",
            first.width(),
            first.height()
        );
    }
    if AutomatonSmoother::smooth(first.clone(), 0) != first {
        bail!("zero-pass smoothing changed the grid for {params:?} seed={map_seed}");
    }

    let solid = Grid::filled(params.width, params.height, Cell::Wall)?;
    if AutomatonSmoother::smooth(solid, params.iterations).count(Cell::Wall)
        != params.width * params.height
    {
        bail!("all-wall grid opened up for {params:?}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    tracing::info!(seed = args.seed, runs = args.runs, "starting invariant sweep");
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for run in 0..args.runs {
        let params = random_params(&mut rng);
        let map_seed = rng.next_u64();
        if let Err(err) = check_run(&params, map_seed) {
            tracing::error!(run, error = %err, "invariant violated");
            return Err(err);
        }
    }

    tracing::info!(runs = args.runs, "all runs passed");
    Ok(())
}
