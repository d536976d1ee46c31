use serde::{Serialize, Deserialize};
use std::f64::consts::E;

/// The two activations used by the XOR network.
///
/// `derivative()` follows an output-space convention: it expects the FORWARD
/// OUTPUT `z = function(x)`, never the pre-activation `x`. The backward pass
/// always has the forward outputs at hand, so the derivative never needs to
/// recompute the activation. Passing a pre-activation value instead produces
/// silently wrong gradients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Activation {
    Sigmoid,
    /// Present on the public surface; the training path never selects it.
    Tanh,
}

impl Activation {
    /// Element-wise forward value.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            Activation::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            Activation::Tanh => (1.0 - E.powf(-x)) / (1.0 + E.powf(-x)),
        }
    }

    /// Element-wise derivative, expressed in terms of the forward output `z`.
    ///
    /// - Sigmoid: `z * (1 - z)`
    /// - Tanh:    `1 - z * z`
    pub fn derivative(&self, z: f64) -> f64 {
        match self {
            Activation::Sigmoid => z * (1.0 - z),
            Activation::Tanh => 1.0 - z * z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid_output_is_in_open_unit_interval() {
        for &x in &[-700.0, -30.0, -1.0, 0.0, 1.0, 30.0, 700.0] {
            let z = Activation::Sigmoid.function(x);
            assert!(z > 0.0 && z < 1.0, "sigmoid({x}) = {z} out of (0, 1)");
        }
        assert_eq!(Activation::Sigmoid.function(0.0), 0.5);
    }

    #[test]
    fn test_sigmoid_derivative_uses_forward_output() {
        for &x in &[-3.0, -0.5, 0.0, 0.5, 3.0] {
            let z = Activation::Sigmoid.function(x);
            assert_eq!(Activation::Sigmoid.derivative(z), z * (1.0 - z));
        }
        // Maximal slope at z = 0.5.
        assert_eq!(Activation::Sigmoid.derivative(0.5), 0.25);
    }

    #[test]
    fn test_tanh_forward_and_derivative() {
        assert_eq!(Activation::Tanh.function(0.0), 0.0);
        assert!(Activation::Tanh.function(10.0) > 0.99);
        assert!(Activation::Tanh.function(-10.0) < -0.99);

        let z = Activation::Tanh.function(0.7);
        assert_eq!(Activation::Tanh.derivative(z), 1.0 - z * z);
    }
}
