//! Fixed-topology feedforward networks and their genetic operators.
//!
//! This crate provides the neural substrate for the Fledge trainer:
//!
//! - [`matrix`] - Dense 2-D `f32` matrices used uniformly for weights,
//!   biases, and activations
//! - [`activation`] - Pure elementwise activation functions
//! - [`topology`] - Network shape and weight/bias initialization ranges
//! - [`chromosome`] - The full ordered set of weight and bias matrices of
//!   one network; the unit operated on by crossover and mutation
//! - [`network`] - Feedforward evaluation and chromosome install/extract
//!
//! # Genetic operators
//!
//! A network never learns by gradient descent. Its parameters only change
//! through two operators on its [`Chromosome`]:
//!
//! - **Crossover** - elementwise average of two parents' matrices
//! - **Mutation** - each entry independently redrawn from its configured
//!   initialization range with a small probability
//!
//! # Dimensional integrity
//!
//! All operations are dimension-checked and panic on mismatch. A dimension
//! mismatch is a programming error (malformed topology or a chromosome bred
//! from a different topology), never a recoverable runtime condition.
//!
//! # Example
//!
//! ```
//! use fledge_neural::{
//!     Chromosome, NeuralNetwork,
//!     topology::{GeneRanges, NetworkTopology, ValueRange},
//! };
//!
//! let topology = NetworkTopology {
//!     inputs: 4,
//!     hidden: vec![8],
//!     outputs: 2,
//!     ranges: GeneRanges {
//!         weight: ValueRange::new(-1.0, 1.0),
//!         bias: ValueRange::new(-1.0, 1.0),
//!     },
//! };
//!
//! let mut rng = rand::rng();
//! let parent_a = NeuralNetwork::random(&topology, &mut rng);
//! let parent_b = NeuralNetwork::random(&topology, &mut rng);
//!
//! let mut child = Chromosome::crossover(&parent_a.chromosome(), &parent_b.chromosome());
//! child.mutate(0.02, &topology.ranges, &mut rng);
//!
//! let mut offspring = NeuralNetwork::random(&topology, &mut rng);
//! offspring.install_chromosome(child);
//! let output = offspring.feedforward(&[0.1, 0.2, 0.3, 0.4]);
//! assert_eq!(output.len(), 2);
//! ```

pub use self::{
    activation::Activation,
    chromosome::{Chromosome, LayerGenes},
    matrix::Matrix,
    network::NeuralNetwork,
};

pub mod activation;
pub mod chromosome;
pub mod matrix;
pub mod network;
pub mod topology;
