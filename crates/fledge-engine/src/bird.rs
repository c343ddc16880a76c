//! The trained agent: physics, sensing, and death rules.

use fledge_evolution::Member;
use fledge_neural::{Chromosome, NeuralNetwork, topology::NetworkTopology};
use rand::Rng;

use crate::{
    config::{BirdConfig, WorldConfig},
    pipe::Pipe,
};

/// One agent in the population.
///
/// A bird owns exactly one network, its physical state (vertical position
/// and velocity), its survival state, and its survival score. It never
/// mutates pipes or other birds; its per-tick update reads only its own
/// state plus the read-only pipe passed in by the session.
///
/// The sensed pipe is recomputed by the session every tick and handed in by
/// reference; birds never store it.
#[derive(Debug, Clone)]
pub struct Bird {
    cfg: BirdConfig,
    y: f32,
    velocity: f32,
    alive: bool,
    score: u32,
    network: NeuralNetwork,
}

impl Bird {
    /// Length of the sensory input vector: normalized vertical velocity,
    /// plus horizontal distance and the two gap-edge offsets of the nearest
    /// pipe ahead.
    pub const SENSOR_LEN: usize = 4;

    /// Number of competing output scores: `[no_jump, jump]`.
    pub const NUM_ACTIONS: usize = 2;

    /// Creates a bird at its start state with a freshly randomized network.
    ///
    /// # Panics
    ///
    /// Panics if the topology's input/output sizes do not match
    /// [`SENSOR_LEN`](Self::SENSOR_LEN) / [`NUM_ACTIONS`](Self::NUM_ACTIONS),
    /// or if `cfg.min_velocity` is not negative (it normalizes the velocity
    /// sensor and caps upward speed).
    #[must_use]
    pub fn new<R>(cfg: BirdConfig, topology: &NetworkTopology, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        assert_eq!(topology.inputs, Self::SENSOR_LEN, "bird sensor length mismatch");
        assert_eq!(topology.outputs, Self::NUM_ACTIONS, "bird action count mismatch");
        assert!(cfg.min_velocity < 0.0, "min_velocity must be negative");
        Self {
            cfg,
            y: cfg.start_y,
            velocity: 0.0,
            alive: true,
            score: 0,
            network: NeuralNetwork::random(topology, rng),
        }
    }

    /// Returns the fixed horizontal position.
    #[must_use]
    pub fn x(&self) -> f32 {
        self.cfg.start_x
    }

    /// Returns the current vertical position.
    #[must_use]
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Returns the current vertical velocity (negative = up).
    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Returns the side length of the collision box.
    #[must_use]
    pub fn size(&self) -> f32 {
        self.cfg.size
    }

    /// Returns `true` until the bird collides or leaves the bounds.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Returns the number of ticks survived this generation.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the bird's network.
    #[must_use]
    pub fn network(&self) -> &NeuralNetwork {
        &self.network
    }

    /// Builds the sensory input vector.
    ///
    /// Components, all normalized to roughly unit scale:
    ///
    /// 1. vertical velocity / `|min_velocity|`
    /// 2. horizontal distance to the nearest pipe's right edge / world width
    /// 3. gap-top offset `(gap_top - y)` / world height
    /// 4. gap-bottom offset `(gap_bottom - (y + size))` / world height
    ///
    /// Gap offsets are gap-edge minus bird, so a positive value means the
    /// edge is below the bird's reference point. Components 2-4 are zero
    /// when no pipe is ahead.
    #[must_use]
    pub fn sense(&self, world: &WorldConfig, nearest: Option<&Pipe>) -> [f32; Self::SENSOR_LEN] {
        let mut input = [0.0; Self::SENSOR_LEN];
        input[0] = self.velocity / self.cfg.min_velocity.abs();
        if let Some(pipe) = nearest {
            input[1] = (pipe.right_edge() - self.x()) / world.width;
            input[2] = (pipe.gap_top() - self.y) / world.height;
            input[3] = (pipe.gap_bottom() - (self.y + self.cfg.size)) / world.height;
        }
        input
    }

    /// Returns `true` once the bird's vertical position leaves the playable
    /// bounds.
    #[must_use]
    pub fn is_out_of_bounds(&self, world: &WorldConfig) -> bool {
        self.y < 0.0 || self.y + self.cfg.size > world.height
    }

    /// Advances the bird by one tick. No-op once dead.
    ///
    /// 1. Sense, feedforward, and jump if the jump score dominates (an
    ///    exact tie means no jump)
    /// 2. Integrate gravity into velocity (clamped at the `min_velocity`
    ///    floor) and velocity into position
    /// 3. Die on leaving the bounds or colliding with the nearest pipe;
    ///    otherwise score one survived tick
    pub fn update(&mut self, world: &WorldConfig, nearest: Option<&Pipe>) {
        if !self.alive {
            return;
        }

        let output = self.network.feedforward(&self.sense(world, nearest));
        if output[1] > output[0] {
            self.velocity += self.cfg.lift;
        }

        self.velocity = (self.velocity + self.cfg.gravity).max(self.cfg.min_velocity);
        self.y += self.velocity;

        let collided = nearest.is_some_and(|pipe| pipe.hits(self.x(), self.y, self.cfg.size));
        if self.is_out_of_bounds(world) || collided {
            self.alive = false;
            return;
        }

        self.score += 1;
    }
}

impl Member for Bird {
    /// Survival score squared: rewards longer survival super-linearly,
    /// biasing selection toward consistently long survivors.
    #[expect(clippy::cast_precision_loss)]
    fn fitness(&self) -> f32 {
        let score = self.score as f32;
        score * score
    }

    fn chromosome(&self) -> Chromosome {
        self.network.chromosome()
    }

    fn install_chromosome(&mut self, chromosome: Chromosome) {
        self.network.install_chromosome(chromosome);
    }

    fn reset(&mut self) {
        self.y = self.cfg.start_y;
        self.velocity = 0.0;
        self.alive = true;
        self.score = 0;
    }
}
