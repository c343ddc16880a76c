//! Feedforward evaluation and chromosome install/extract.

use rand::Rng;

use crate::{
    activation::Activation,
    chromosome::{Chromosome, LayerGenes},
    matrix::Matrix,
    topology::NetworkTopology,
};

/// One network layer: weights, bias, and the activation applied elementwise
/// to `weights · input + bias`.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    weights: Matrix,
    bias: Matrix,
    activation: Activation,
}

impl Layer {
    fn random<R>(inputs: usize, outputs: usize, topology: &NetworkTopology, activation: Activation, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self {
            weights: Matrix::random(outputs, inputs, topology.ranges.weight, rng),
            bias: Matrix::random(outputs, 1, topology.ranges.bias, rng),
            activation,
        }
    }

    /// Returns the weight matrix, `outputs × inputs`.
    #[must_use]
    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    /// Returns the bias column vector, `outputs × 1`.
    #[must_use]
    pub fn bias(&self) -> &Matrix {
        &self.bias
    }

    /// Returns the layer's activation function.
    #[must_use]
    pub fn activation(&self) -> Activation {
        self.activation
    }

    fn forward(&self, input: &Matrix) -> Matrix {
        let activation = self.activation;
        self.weights
            .dot(input)
            .add(&self.bias)
            .map(|v| activation.apply(v))
    }
}

/// A fixed-topology feedforward network.
///
/// The layer sequence satisfies the dimensional-chaining invariant: each
/// layer's input dimension equals the previous layer's output dimension (or
/// the sensory input length, for the first layer). Hidden layers use
/// [`Activation::Relu`], the output layer [`Activation::Linear`].
///
/// A network is created once per agent, either at population creation or at
/// breeding time; it is never shared between agents. Feedforward is a pure
/// function of the input and the current chromosome.
#[derive(Debug, Clone, PartialEq)]
pub struct NeuralNetwork {
    layers: Vec<Layer>,
}

impl NeuralNetwork {
    /// Creates a network with every weight and bias drawn uniformly from
    /// the topology's configured ranges.
    ///
    /// # Panics
    ///
    /// Panics if the topology contains a zero-size layer.
    #[must_use]
    pub fn random<R>(topology: &NetworkTopology, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let dims = topology.layer_dims();
        let last = dims.len() - 1;
        let layers = dims
            .iter()
            .enumerate()
            .map(|(i, &(inputs, outputs))| {
                let activation = if i == last {
                    Activation::Linear
                } else {
                    Activation::Relu
                };
                Layer::random(inputs, outputs, topology, activation, rng)
            })
            .collect();
        Self { layers }
    }

    /// Returns the layers in evaluation order.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Returns the expected sensory input length.
    #[must_use]
    pub fn num_inputs(&self) -> usize {
        self.layers[0].weights.cols()
    }

    /// Returns the output vector length.
    #[must_use]
    pub fn num_outputs(&self) -> usize {
        self.layers[self.layers.len() - 1].weights.rows()
    }

    /// Propagates an input vector through every layer in order and returns
    /// the final activated output.
    ///
    /// Deterministic: identical chromosome and input produce bit-identical
    /// output.
    ///
    /// # Panics
    ///
    /// Panics unless `input.len() == self.num_inputs()`.
    #[must_use]
    pub fn feedforward(&self, input: &[f32]) -> Vec<f32> {
        assert_eq!(
            input.len(),
            self.num_inputs(),
            "feedforward input length mismatch"
        );
        let mut signal = Matrix::column(input);
        for layer in &self.layers {
            signal = layer.forward(&signal);
        }
        signal.as_slice().to_vec()
    }

    /// Extracts a copy of the network's chromosome.
    #[must_use]
    pub fn chromosome(&self) -> Chromosome {
        Chromosome::new(
            self.layers
                .iter()
                .map(|layer| LayerGenes {
                    weights: layer.weights.clone(),
                    bias: layer.bias.clone(),
                })
                .collect(),
        )
    }

    /// Replaces the network's parameters with a bred chromosome.
    ///
    /// The chromosome is validated against the network's topology before any
    /// layer is touched; a malformed chromosome is never partially applied.
    ///
    /// # Panics
    ///
    /// Panics if the chromosome's layer count or matrix dimensions do not
    /// match the network's topology.
    pub fn install_chromosome(&mut self, chromosome: Chromosome) {
        assert!(
            self.chromosome_fits(&chromosome),
            "chromosome does not match network topology"
        );
        let genes: Vec<LayerGenes> = chromosome.genes().to_vec();
        for (layer, gene) in std::iter::zip(&mut self.layers, genes) {
            layer.weights = gene.weights;
            layer.bias = gene.bias;
        }
    }

    fn chromosome_fits(&self, chromosome: &Chromosome) -> bool {
        chromosome.len() == self.layers.len()
            && std::iter::zip(self.layers.iter(), chromosome.genes()).all(|(layer, gene)| {
                layer.weights.same_shape(&gene.weights) && layer.bias.same_shape(&gene.bias)
            })
    }
}
