//! The tick-by-tick generation controller.

use fledge_evolution::{Breeder, Population};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::{
    bird::Bird,
    config::SessionConfig,
    pipe::{self, Pipe},
    seed::SimulationSeed,
};

/// Aggregate statistics of one completed generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Index of the completed generation, starting at zero.
    pub generation: usize,
    /// Highest fitness in the generation.
    pub best_fitness: f32,
    /// Mean fitness across the generation.
    pub mean_fitness: f32,
    /// Ticks the episode lasted.
    pub ticks: u64,
    /// Pipes spawned during the episode.
    pub pipes_spawned: u32,
}

/// Drives the simulation tick-by-tick and breeds the population at
/// generation boundaries.
///
/// All randomness of a session (network initialization, gap placement,
/// breeding) draws from one generator seeded at construction, so a session
/// is fully reproducible from its [`SimulationSeed`].
///
/// The session is single-threaded and cooperative: the external driver
/// decides when to stop calling [`tick`](Self::tick) or
/// [`run_generation`](Self::run_generation); there is no cancellation or
/// timeout inside the core.
#[derive(Debug, Clone)]
pub struct TrainingSession {
    config: SessionConfig,
    population: Population<Bird>,
    pipes: Vec<Pipe>,
    rng: Pcg32,
    ticks: u64,
    ticks_since_spawn: u32,
    pipes_spawned: u32,
    last_stats: Option<GenerationStats>,
}

impl TrainingSession {
    /// Creates a session with a random seed.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_seed(config, rand::rng().random())
    }

    /// Like [`Self::new`], but fully reproducible from `seed`.
    ///
    /// # Panics
    ///
    /// Panics on configuration errors: zero population size, a mutation
    /// rate outside `[0, 1]`, or a malformed network topology.
    #[must_use]
    pub fn with_seed(config: SessionConfig, seed: SimulationSeed) -> Self {
        assert!(config.population_size > 0, "population size must be non-zero");
        assert!(
            (0.0..=1.0).contains(&config.mutation_rate),
            "mutation rate must be in [0, 1]"
        );

        let mut rng = Pcg32::from_seed(seed.to_bytes());
        let topology = config.topology();
        let birds = (0..config.population_size)
            .map(|_| Bird::new(config.world.bird, &topology, &mut rng))
            .collect();

        // Counter starts saturated so the first pipe spawns on the first tick.
        let ticks_since_spawn = config.world.pipe.start_spawn_interval;
        Self {
            population: Population::new(birds),
            pipes: Vec::new(),
            rng,
            ticks: 0,
            ticks_since_spawn,
            pipes_spawned: 0,
            last_stats: None,
            config,
        }
    }

    /// Returns the session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns all birds in population order.
    #[must_use]
    pub fn birds(&self) -> &[Bird] {
        self.population.members()
    }

    /// Returns the live obstacle stream.
    #[must_use]
    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    /// Returns the number of birds still alive in the current episode.
    #[must_use]
    pub fn num_alive(&self) -> usize {
        self.population
            .members()
            .iter()
            .filter(|bird| bird.is_alive())
            .count()
    }

    /// Returns the current generation index, starting at zero.
    #[must_use]
    pub fn generation(&self) -> usize {
        self.population.generation()
    }

    /// Returns ticks elapsed in the current episode.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Returns the statistics of the most recently completed generation.
    #[must_use]
    pub fn last_generation_stats(&self) -> Option<&GenerationStats> {
        self.last_stats.as_ref()
    }

    /// Returns `true` once the current episode has ended: every bird is
    /// dead, or the configured tick budget is exhausted.
    #[must_use]
    pub fn is_generation_over(&self) -> bool {
        self.num_alive() == 0
            || self
                .config
                .tick_budget
                .is_some_and(|budget| self.ticks >= budget)
    }

    /// Advances the whole simulation by one unit of time.
    ///
    /// The obstacle stream settles first (spawn, advance, prune); every
    /// live bird then senses the settled stream and updates independently.
    pub fn tick(&mut self) {
        self.ticks_since_spawn = self.ticks_since_spawn.saturating_add(1);
        let interval = self.config.world.pipe.spawn_interval_for(self.pipes_spawned);
        if self.ticks_since_spawn >= interval {
            let speed = self.config.world.pipe.speed_for(self.pipes_spawned);
            self.pipes
                .push(Pipe::spawn(&self.config.world, speed, &mut self.rng));
            self.pipes_spawned += 1;
            self.ticks_since_spawn = 0;
        }

        for pipe in &mut self.pipes {
            pipe.advance();
        }
        self.pipes.retain(|pipe| !pipe.is_offscreen());

        let world = self.config.world;
        let pipes = &self.pipes;
        for bird in self.population.members_mut() {
            let nearest = pipe::nearest_ahead(pipes, bird.x());
            bird.update(&world, nearest);
        }

        self.ticks += 1;
    }

    /// Ends the current episode: records its statistics, breeds the next
    /// generation, and resets the obstacle stream and tick counters.
    ///
    /// Breeding is a barrier: it runs against every bird's settled final
    /// fitness and fully replaces the population before the next tick.
    pub fn advance_generation(&mut self) -> GenerationStats {
        let fitness = self.population.fitness_stats();
        let stats = GenerationStats {
            generation: self.population.generation(),
            best_fitness: fitness.max,
            mean_fitness: fitness.mean,
            ticks: self.ticks,
            pipes_spawned: self.pipes_spawned,
        };

        let breeder = Breeder {
            mutation_rate: self.config.mutation_rate,
            ranges: self.config.gene_ranges(),
        };
        self.population.breed(&breeder, &mut self.rng);

        self.pipes.clear();
        self.ticks = 0;
        self.ticks_since_spawn = self.config.world.pipe.start_spawn_interval;
        self.pipes_spawned = 0;
        self.last_stats = Some(stats);
        stats
    }

    /// Runs one full episode to its end, then breeds and returns the
    /// completed generation's statistics.
    ///
    /// Without a tick budget this only returns once every bird has died;
    /// configure [`SessionConfig::tick_budget`] to bound episode length.
    pub fn run_generation(&mut self) -> GenerationStats {
        while !self.is_generation_over() {
            self.tick();
        }
        self.advance_generation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(population_size: usize, tick_budget: Option<u64>) -> SessionConfig {
        SessionConfig {
            population_size,
            tick_budget,
            ..SessionConfig::default()
        }
    }

    fn seed(value: u8) -> SimulationSeed {
        SimulationSeed::from_bytes([value; 16])
    }

    #[test]
    fn test_population_size_invariant_across_generations() {
        let mut session = TrainingSession::with_seed(config(25, Some(200)), seed(1));
        for _ in 0..4 {
            session.run_generation();
            assert_eq!(session.birds().len(), 25);
        }
        assert_eq!(session.generation(), 4);
    }

    #[test]
    fn test_generation_ends_when_all_birds_die() {
        // No tick budget: the episode ends by extinction alone.
        let mut session = TrainingSession::with_seed(config(10, None), seed(2));
        assert_eq!(session.num_alive(), 10);
        let stats = session.run_generation();
        assert_eq!(session.num_alive(), 10, "breeding revives every bird");
        assert!(stats.ticks > 0);
        assert_eq!(stats.generation, 0);
    }

    #[test]
    fn test_tick_budget_bounds_episode_length() {
        let mut session = TrainingSession::with_seed(config(10, Some(50)), seed(3));
        let stats = session.run_generation();
        assert!(stats.ticks <= 50);
    }

    #[test]
    fn test_advance_generation_resets_episode_state() {
        let mut session = TrainingSession::with_seed(config(10, Some(100)), seed(4));
        session.run_generation();
        assert_eq!(session.ticks(), 0);
        assert!(session.pipes().is_empty());
        assert_eq!(session.generation(), 1);
        assert_eq!(
            session.last_generation_stats().map(|s| s.generation),
            Some(0)
        );
    }

    #[test]
    fn test_pipes_spawn_on_schedule_and_get_pruned() {
        let mut session = TrainingSession::with_seed(config(5, None), seed(5));
        session.tick();
        assert_eq!(session.pipes().len(), 1);

        // The second pipe appears only after the first spawn interval.
        let interval = SessionConfig::default()
            .world
            .pipe
            .spawn_interval_for(1);
        for _ in 0..interval {
            session.tick();
        }
        assert_eq!(session.pipes().len(), 2);
        assert!(session.pipes().iter().all(|p| !p.is_offscreen()));
    }

    #[test]
    fn test_same_seed_reproduces_identical_runs() {
        let mut a = TrainingSession::with_seed(config(15, Some(120)), seed(6));
        let mut b = TrainingSession::with_seed(config(15, Some(120)), seed(6));
        for _ in 0..3 {
            assert_eq!(a.run_generation(), b.run_generation());
        }
    }

    #[test]
    fn test_fitness_stats_reflect_survival() {
        let mut session = TrainingSession::with_seed(config(10, Some(100)), seed(7));
        let stats = session.run_generation();
        assert!(stats.best_fitness >= stats.mean_fitness);
        assert!(stats.mean_fitness >= 0.0);
    }

    #[test]
    #[should_panic(expected = "population size must be non-zero")]
    fn test_zero_population_rejected() {
        let _ = TrainingSession::with_seed(config(0, None), seed(8));
    }

    #[test]
    #[should_panic(expected = "mutation rate must be in [0, 1]")]
    fn test_invalid_mutation_rate_rejected() {
        let bad = SessionConfig {
            mutation_rate: 1.5,
            ..config(5, None)
        };
        let _ = TrainingSession::with_seed(bad, seed(9));
    }
}
