//! Explicit typed configuration for the simulation and a training session.
//!
//! Defaults carry the reference tuning of the original game. Everything is
//! passed per instance at construction time; nothing is shared through
//! process-wide mutable state.

use fledge_neural::topology::{GeneRanges, NetworkTopology, ValueRange};

use crate::bird::Bird;

/// Physics and start-state parameters for every bird.
///
/// The vertical axis grows downward: gravity is positive, a jump impulse
/// (`lift`) is negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdConfig {
    /// Horizontal start position. Birds never move horizontally.
    pub start_x: f32,
    /// Vertical start position.
    pub start_y: f32,
    /// Side length of the bird's square collision box.
    pub size: f32,
    /// Constant downward acceleration applied every tick.
    pub gravity: f32,
    /// Instantaneous velocity impulse applied on a jump (negative = up).
    pub lift: f32,
    /// Lower bound on velocity, capping upward speed after jump impulses
    /// (negative = up).
    pub min_velocity: f32,
}

impl Default for BirdConfig {
    fn default() -> Self {
        Self {
            start_x: 40.0,
            start_y: 250.0,
            size: 40.0,
            gravity: 1.0,
            lift: -20.0,
            min_velocity: -10.0,
        }
    }
}

/// Geometry and difficulty-curve parameters for the obstacle stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeConfig {
    /// Horizontal width of each pipe.
    pub width: f32,
    /// Fixed size of the traversable gap.
    pub gap: f32,
    /// Minimum height of the solid segment above or below the gap.
    pub min_segment: f32,
    /// Speed of the first pipe of a generation.
    pub start_speed: f32,
    /// Speed ceiling.
    pub max_speed: f32,
    /// Speed increase per pipe already spawned this generation.
    pub speed_step: f32,
    /// Spawn interval (in ticks) for the first pipe of a generation.
    pub start_spawn_interval: u32,
    /// Spawn interval floor.
    pub min_spawn_interval: u32,
    /// Spawn interval decrease per pipe already spawned this generation.
    pub spawn_interval_step: u32,
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            width: 50.0,
            gap: 220.0,
            min_segment: 20.0,
            start_speed: 3.5,
            max_speed: 11.0,
            speed_step: 0.03,
            start_spawn_interval: 120,
            min_spawn_interval: 80,
            spawn_interval_step: 1,
        }
    }
}

impl PipeConfig {
    /// Returns the speed for the next pipe, given how many pipes have
    /// already spawned this generation.
    ///
    /// Grows linearly and is clamped at [`max_speed`](Self::max_speed), so
    /// difficulty increases monotonically within a generation.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn speed_for(&self, pipes_spawned: u32) -> f32 {
        (self.start_speed + pipes_spawned as f32 * self.speed_step).min(self.max_speed)
    }

    /// Returns the number of ticks until the next pipe spawns, given how
    /// many pipes have already spawned this generation.
    ///
    /// Shrinks linearly and is clamped at
    /// [`min_spawn_interval`](Self::min_spawn_interval).
    #[must_use]
    pub fn spawn_interval_for(&self, pipes_spawned: u32) -> u32 {
        self.start_spawn_interval
            .saturating_sub(pipes_spawned.saturating_mul(self.spawn_interval_step))
            .max(self.min_spawn_interval)
    }
}

/// The playable area and its inhabitants' parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldConfig {
    /// Horizontal extent; pipes spawn at `x == width`.
    pub width: f32,
    /// Vertical extent of the playable bounds.
    pub height: f32,
    /// Bird physics and start state.
    pub bird: BirdConfig,
    /// Pipe geometry and difficulty curve.
    pub pipe: PipeConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 800.0,
            bird: BirdConfig::default(),
            pipe: PipeConfig::default(),
        }
    }
}

/// Complete configuration of a training session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// The world every generation is evaluated in.
    pub world: WorldConfig,
    /// Number of birds; constant across generations.
    pub population_size: usize,
    /// Per-entry chromosome mutation probability in `[0, 1]`.
    pub mutation_rate: f32,
    /// Hidden layer sizes of every bird's network. May be empty.
    pub hidden_layers: Vec<usize>,
    /// Initialization and mutation range for network weights.
    pub weight_range: ValueRange,
    /// Initialization and mutation range for network biases.
    pub bias_range: ValueRange,
    /// Optional per-generation tick budget; `None` runs each generation
    /// until every bird is dead.
    pub tick_budget: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            population_size: 200,
            mutation_rate: 0.02,
            hidden_layers: vec![8],
            weight_range: ValueRange::new(-1.0, 1.0),
            bias_range: ValueRange::new(-1.0, 1.0),
            tick_budget: None,
        }
    }
}

impl SessionConfig {
    /// Returns the network topology every bird is built with.
    #[must_use]
    pub fn topology(&self) -> NetworkTopology {
        NetworkTopology {
            inputs: Bird::SENSOR_LEN,
            hidden: self.hidden_layers.clone(),
            outputs: Bird::NUM_ACTIONS,
            ranges: self.gene_ranges(),
        }
    }

    /// Returns the gene ranges used for initialization and mutation.
    #[must_use]
    pub fn gene_ranges(&self) -> GeneRanges {
        GeneRanges {
            weight: self.weight_range,
            bias: self.bias_range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_strictly_increases_until_ceiling() {
        let cfg = PipeConfig::default();
        // Back-to-back spawns early in a generation get strictly faster.
        assert!(cfg.speed_for(0) < cfg.speed_for(5));
        assert_eq!(cfg.speed_for(0), 3.5);
        assert_eq!(cfg.speed_for(5), 3.65);
        // Clamped at the ceiling far into a generation.
        assert_eq!(cfg.speed_for(1_000), cfg.max_speed);
        assert_eq!(cfg.speed_for(u32::MAX), cfg.max_speed);
    }

    #[test]
    fn test_spawn_interval_shrinks_to_floor() {
        let cfg = PipeConfig::default();
        assert!(cfg.spawn_interval_for(5) <= cfg.spawn_interval_for(0));
        assert_eq!(cfg.spawn_interval_for(0), 120);
        assert_eq!(cfg.spawn_interval_for(5), 115);
        // Clamped at the floor.
        assert_eq!(cfg.spawn_interval_for(40), cfg.min_spawn_interval);
        assert_eq!(cfg.spawn_interval_for(u32::MAX), cfg.min_spawn_interval);
    }

    #[test]
    fn test_topology_matches_sensor_and_action_counts() {
        let config = SessionConfig::default();
        let topology = config.topology();
        assert_eq!(topology.inputs, Bird::SENSOR_LEN);
        assert_eq!(topology.outputs, Bird::NUM_ACTIONS);
        assert_eq!(topology.hidden, config.hidden_layers);
    }
}
