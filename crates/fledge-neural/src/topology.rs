//! Network shape and parameter initialization ranges.

use rand::Rng;

/// A half-open `[min, max)` range for uniform parameter sampling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    min: f32,
    max: f32,
}

impl ValueRange {
    /// Creates a sampling range.
    ///
    /// # Panics
    ///
    /// Panics unless `min < max`.
    #[must_use]
    pub fn new(min: f32, max: f32) -> Self {
        assert!(min < max, "value range requires min < max, got [{min}, {max})");
        Self { min, max }
    }

    /// Returns the lower bound (inclusive).
    #[must_use]
    pub fn min(self) -> f32 {
        self.min
    }

    /// Returns the upper bound (exclusive).
    #[must_use]
    pub fn max(self) -> f32 {
        self.max
    }

    /// Returns `true` if `value` lies within the range.
    #[must_use]
    pub fn contains(self, value: f32) -> bool {
        (self.min..self.max).contains(&value)
    }

    /// Draws a uniform sample from the range.
    pub fn sample<R>(self, rng: &mut R) -> f32
    where
        R: Rng + ?Sized,
    {
        rng.random_range(self.min..self.max)
    }
}

/// Sampling ranges for the two kinds of gene matrices.
///
/// Weight matrices and bias vectors are initialized from, and mutated back
/// into, their own configured ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneRanges {
    /// Range for weight matrix entries.
    pub weight: ValueRange,
    /// Range for bias vector entries.
    pub bias: ValueRange,
}

/// The shape of a fixed-topology feedforward network.
///
/// A network built from this topology has one layer per hidden size plus an
/// output layer, chained so that each layer's input dimension equals the
/// previous layer's output dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkTopology {
    /// Length of the sensory input vector.
    pub inputs: usize,
    /// Sizes of the hidden layers, in order. May be empty.
    pub hidden: Vec<usize>,
    /// Length of the output vector.
    pub outputs: usize,
    /// Initialization and mutation ranges for weights and biases.
    pub ranges: GeneRanges,
}

impl NetworkTopology {
    /// Returns the `(inputs, outputs)` dimensions of each layer in order.
    ///
    /// # Panics
    ///
    /// Panics if any layer size is zero (malformed topology).
    #[must_use]
    pub fn layer_dims(&self) -> Vec<(usize, usize)> {
        let sizes: Vec<usize> = std::iter::once(self.inputs)
            .chain(self.hidden.iter().copied())
            .chain(std::iter::once(self.outputs))
            .collect();
        assert!(
            sizes.iter().all(|&s| s > 0),
            "network topology contains a zero-size layer: {sizes:?}"
        );
        sizes.windows(2).map(|w| (w[0], w[1])).collect()
    }
}
