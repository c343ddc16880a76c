/// A pure elementwise activation function applied to a layer's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Identity: `f(x) = x`.
    Linear,
    /// Rectified linear: `f(x) = max(x, 0)`.
    Relu,
}

impl Activation {
    /// Applies the activation function to a single value.
    #[must_use]
    pub fn apply(self, x: f32) -> f32 {
        match self {
            Self::Linear => x,
            Self::Relu => x.max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_is_identity() {
        assert_eq!(Activation::Linear.apply(-3.5), -3.5);
        assert_eq!(Activation::Linear.apply(0.0), 0.0);
        assert_eq!(Activation::Linear.apply(2.25), 2.25);
    }

    #[test]
    fn test_relu_clamps_negatives() {
        assert_eq!(Activation::Relu.apply(-3.5), 0.0);
        assert_eq!(Activation::Relu.apply(0.0), 0.0);
        assert_eq!(Activation::Relu.apply(2.25), 2.25);
    }
}
