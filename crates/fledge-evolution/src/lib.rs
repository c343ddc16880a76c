//! Population-level selection and breeding for neuroevolution.
//!
//! This crate implements the generational loop around the genetic operators
//! of `fledge-neural`:
//!
//! 1. **Evaluate** - an external driver ticks every member until the episode
//!    ends; each member accumulates its own fitness signal
//! 2. **Select** - two parents per offspring slot, chosen with probability
//!    proportional to fitness (roulette-wheel sampling)
//! 3. **Crossover** - parents' chromosomes are averaged elementwise
//! 4. **Mutate** - each child entry is redrawn with the configured rate
//! 5. **Replace** - every bred chromosome is installed into a reset member;
//!    the population is fully replaced, never partially
//!
//! # Key components
//!
//! - [`Member`] - capability trait a concrete agent type implements to take
//!   part in breeding
//! - [`Population`] - the fixed-size ordered member collection plus the
//!   generation counter
//! - [`Breeder`] - the breeding parameters (mutation rate, gene ranges)
//!
//! # Selection pressure
//!
//! Selection is done independently per offspring slot, so a high-fitness
//! parent may be selected many times. When the whole population scored zero,
//! selection degrades to uniform-random parent choice instead of dividing by
//! zero.

pub use self::{
    member::Member,
    population::{Breeder, Population},
};

pub mod member;
pub mod population;
