//! Chromosomes: the genetic representation of a network.

use rand::Rng;

use crate::{matrix::Matrix, topology::GeneRanges};

/// The genes of a single layer: its weight matrix and bias vector.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerGenes {
    /// Weight matrix, `outputs × inputs`.
    pub weights: Matrix,
    /// Bias vector, `outputs × 1`.
    pub bias: Matrix,
}

/// The complete ordered set of weight and bias matrices of one network.
///
/// A chromosome is the unit operated on by [`crossover`](Self::crossover)
/// and [`mutate`](Self::mutate). It carries no behavior of its own; it only
/// becomes active once installed into a network with
/// [`NeuralNetwork::install_chromosome`](crate::NeuralNetwork::install_chromosome).
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    genes: Vec<LayerGenes>,
}

impl Chromosome {
    /// Wraps per-layer genes into a chromosome.
    ///
    /// # Panics
    ///
    /// Panics if `genes` is empty or any layer's bias is not a column vector
    /// matching its weight matrix's row count.
    #[must_use]
    pub fn new(genes: Vec<LayerGenes>) -> Self {
        assert!(!genes.is_empty(), "chromosome must contain at least one layer");
        for (i, layer) in genes.iter().enumerate() {
            assert!(
                layer.bias.cols() == 1 && layer.bias.rows() == layer.weights.rows(),
                "layer {i} bias must be a {}x1 column vector",
                layer.weights.rows()
            );
        }
        Self { genes }
    }

    /// Returns the per-layer genes in network order.
    #[must_use]
    pub fn genes(&self) -> &[LayerGenes] {
        &self.genes
    }

    /// Returns the number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if the chromosome has no layers. Never true for a
    /// constructed chromosome; provided for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Returns `true` if `other` has the same layer count and matrix shapes.
    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        self.genes.len() == other.genes.len()
            && std::iter::zip(&self.genes, &other.genes).all(|(a, b)| {
                a.weights.same_shape(&b.weights) && a.bias.same_shape(&b.bias)
            })
    }

    /// Combines two parent chromosomes into a child by elementwise
    /// averaging of every corresponding weight and bias matrix.
    ///
    /// The operation is commutative in its parents; the stochastic step of
    /// breeding is [`mutate`](Self::mutate), applied afterwards.
    ///
    /// # Panics
    ///
    /// Panics unless both parents have identical topology.
    #[must_use]
    pub fn crossover(a: &Self, b: &Self) -> Self {
        assert!(
            a.same_shape(b),
            "crossover requires parents with identical topology"
        );
        let genes = std::iter::zip(&a.genes, &b.genes)
            .map(|(ga, gb)| LayerGenes {
                weights: Matrix::average(&ga.weights, &gb.weights),
                bias: Matrix::average(&ga.bias, &gb.bias),
            })
            .collect();
        Self::new(genes)
    }

    /// Mutates every matrix in place: each entry is independently redrawn
    /// with probability `rate` from the weight or bias range as appropriate.
    ///
    /// Mutation is the population's sole source of genetic novelty beyond
    /// recombination of existing alleles.
    ///
    /// # Panics
    ///
    /// Panics unless `rate` is within `[0, 1]`.
    pub fn mutate<R>(&mut self, rate: f32, ranges: &GeneRanges, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        for layer in &mut self.genes {
            layer.weights = layer.weights.mutated(rate, ranges.weight, rng);
            layer.bias = layer.bias.mutated(rate, ranges.bias, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng as _, rngs::StdRng};

    use crate::topology::ValueRange;

    use super::*;

    fn ranges() -> GeneRanges {
        GeneRanges {
            weight: ValueRange::new(-1.0, 1.0),
            bias: ValueRange::new(-1.0, 1.0),
        }
    }

    fn random_chromosome(rng: &mut StdRng) -> Chromosome {
        let r = ranges();
        Chromosome::new(vec![
            LayerGenes {
                weights: Matrix::random(3, 4, r.weight, rng),
                bias: Matrix::random(3, 1, r.bias, rng),
            },
            LayerGenes {
                weights: Matrix::random(2, 3, r.weight, rng),
                bias: Matrix::random(2, 1, r.bias, rng),
            },
        ])
    }

    #[test]
    fn test_crossover_averages_every_entry() {
        let a = Chromosome::new(vec![LayerGenes {
            weights: Matrix::from_rows(&[&[2.0, 4.0]]),
            bias: Matrix::column(&[6.0]),
        }]);
        let b = Chromosome::new(vec![LayerGenes {
            weights: Matrix::from_rows(&[&[0.0, -4.0]]),
            bias: Matrix::column(&[2.0]),
        }]);
        let child = Chromosome::crossover(&a, &b);
        assert_eq!(child.genes()[0].weights.as_slice(), &[1.0, 0.0]);
        assert_eq!(child.genes()[0].bias.as_slice(), &[4.0]);
    }

    #[test]
    fn test_crossover_preserves_parent_shapes() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = random_chromosome(&mut rng);
        let b = random_chromosome(&mut rng);
        let child = Chromosome::crossover(&a, &b);
        assert!(child.same_shape(&a));
        assert!(child.same_shape(&b));
    }

    #[test]
    #[should_panic(expected = "identical topology")]
    fn test_crossover_rejects_mismatched_topologies() {
        let a = Chromosome::new(vec![LayerGenes {
            weights: Matrix::zeros(2, 3),
            bias: Matrix::zeros(2, 1),
        }]);
        let b = Chromosome::new(vec![LayerGenes {
            weights: Matrix::zeros(3, 3),
            bias: Matrix::zeros(3, 1),
        }]);
        let _ = Chromosome::crossover(&a, &b);
    }

    #[test]
    fn test_mutate_rate_zero_is_identity() {
        let mut rng = StdRng::seed_from_u64(2);
        let original = random_chromosome(&mut rng);
        let mut mutated = original.clone();
        mutated.mutate(0.0, &ranges(), &mut rng);
        assert_eq!(original, mutated);
    }

    #[test]
    fn test_mutate_rate_one_redraws_from_kind_specific_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut chromosome = random_chromosome(&mut rng);
        let disjoint = GeneRanges {
            weight: ValueRange::new(10.0, 11.0),
            bias: ValueRange::new(-11.0, -10.0),
        };
        chromosome.mutate(1.0, &disjoint, &mut rng);
        for layer in chromosome.genes() {
            assert!(layer.weights.as_slice().iter().all(|&v| disjoint.weight.contains(v)));
            assert!(layer.bias.as_slice().iter().all(|&v| disjoint.bias.contains(v)));
        }
    }

    #[test]
    #[should_panic(expected = "column vector")]
    fn test_non_column_bias_rejected() {
        let _ = Chromosome::new(vec![LayerGenes {
            weights: Matrix::zeros(2, 2),
            bias: Matrix::zeros(2, 2),
        }]);
    }
}
