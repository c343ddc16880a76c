use anyhow::ensure;
use chrono::Utc;
use fledge_engine::{SessionConfig, TrainingSession, seed::SimulationSeed};
use rand::Rng as _;

/// Tick budget per generation; keeps an unbeatable bird from stalling
/// training forever.
const DEFAULT_LIFETIME: u64 = 6_000;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TrainArg {
    /// Number of birds in the population
    #[arg(long, default_value_t = 200)]
    population: usize,
    /// Per-entry chromosome mutation probability
    #[arg(long, default_value_t = 0.02)]
    mutation_rate: f32,
    /// Hidden layer sizes of every bird's network
    #[arg(long = "hidden", value_name = "SIZE", default_values_t = [8_usize])]
    hidden_layers: Vec<usize>,
    /// Number of generations to train
    #[arg(long, default_value_t = 50)]
    generations: usize,
    /// Tick budget per generation
    #[arg(long, default_value_t = DEFAULT_LIFETIME)]
    lifetime: u64,
    /// 32-character hex seed for a reproducible run
    #[arg(long)]
    seed: Option<SimulationSeed>,
}

pub(crate) fn run(arg: &TrainArg) -> anyhow::Result<()> {
    ensure!(arg.population > 0, "population must be non-zero");
    ensure!(
        (0.0..=1.0).contains(&arg.mutation_rate),
        "mutation rate must be in [0, 1]"
    );
    ensure!(
        !arg.hidden_layers.contains(&0),
        "hidden layer sizes must be non-zero"
    );

    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let config = SessionConfig {
        population_size: arg.population,
        mutation_rate: arg.mutation_rate,
        hidden_layers: arg.hidden_layers.clone(),
        tick_budget: Some(arg.lifetime),
        ..SessionConfig::default()
    };

    eprintln!("Training started at {} (seed {seed})", Utc::now());
    let mut session = TrainingSession::with_seed(config, seed);

    for _ in 0..arg.generations {
        let stats = session.run_generation();
        eprintln!(
            "Generation {:>4}: \tMax Fitness: {:.0} \tAverage Fitness: {:.2} \t({} ticks, {} pipes)",
            stats.generation, stats.best_fitness, stats.mean_fitness, stats.ticks, stats.pipes_spawned,
        );
    }

    eprintln!(
        "Training completed: {} generations, seed {seed}",
        arg.generations
    );
    Ok(())
}
