//! Statistical utilities for the Fledge trainer.
//!
//! This crate provides the descriptive statistics used to summarize a
//! population's fitness distribution after each generation:
//!
//! - [`descriptive`]: min/max/mean/median/variance/standard deviation
//!
//! # Examples
//!
//! ```
//! use fledge_stats::descriptive::DescriptiveStats;
//!
//! let fitness = [0.0, 4.0, 16.0, 36.0, 64.0];
//! let stats = DescriptiveStats::new(fitness).unwrap();
//! assert_eq!(stats.max, 64.0);
//! assert_eq!(stats.mean, 24.0);
//! ```

pub mod descriptive;
