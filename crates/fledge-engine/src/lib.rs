//! Tick-driven obstacle-course simulation for neuroevolution training.
//!
//! This crate hosts the world the agents are trained in and the generation
//! controller that drives training:
//!
//! - [`config`] - explicit typed configuration for the world, birds, pipes,
//!   and a whole training session; no process-wide mutable state
//! - [`bird`] - the agent: physics, sensing, death rules, and its
//!   [`Member`](fledge_evolution::Member) implementation
//! - [`pipe`] - procedurally generated gap obstacles with a difficulty
//!   curve that steepens within each generation
//! - [`session`] - [`TrainingSession`], the tick-by-tick generation
//!   controller that triggers breeding at episode boundaries
//! - [`seed`] - [`SimulationSeed`] for fully reproducible runs
//!
//! # Tick order
//!
//! Within one tick the obstacle stream is fully advanced (spawn, move,
//! prune) before any bird reads it; every bird's update then depends only on
//! its own state plus the settled read-only pipe list. Breeding only happens
//! at a generation boundary, after every bird's score has settled.
//!
//! # Example
//!
//! ```
//! use fledge_engine::{SessionConfig, TrainingSession, seed::SimulationSeed};
//!
//! let config = SessionConfig {
//!     population_size: 20,
//!     tick_budget: Some(300),
//!     ..SessionConfig::default()
//! };
//! let mut session = TrainingSession::with_seed(config, SimulationSeed::from_bytes([7; 16]));
//!
//! let stats = session.run_generation();
//! assert_eq!(stats.generation, 0);
//! assert_eq!(session.generation(), 1);
//! ```

pub use self::{
    bird::Bird,
    config::{BirdConfig, PipeConfig, SessionConfig, WorldConfig},
    pipe::Pipe,
    seed::SimulationSeed,
    session::{GenerationStats, TrainingSession},
};

pub mod bird;
pub mod config;
pub mod pipe;
pub mod seed;
pub mod session;
