use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Serialize, Deserialize};

use crate::math::matrix::Matrix;

/// The full parameter set of the two-layer network.
///
/// Shapes are fixed at construction: `w1` is `(input_dim, hidden_dim)` and
/// `w2` is `(hidden_dim, output_dim)`. The trainer mutates both in place
/// every epoch; nothing else touches them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub w1: Matrix,
    pub w2: Matrix,
}

impl Weights {
    /// Draws both matrices uniform on [-1, 1) from one seeded rng (`w1`
    /// first, then `w2`) and rescales each by `1 / sqrt(fan_in)`.
    pub fn init(input_dim: usize, hidden_dim: usize, output_dim: usize, seed: u64) -> Weights {
        let mut rng = StdRng::seed_from_u64(seed);

        let w1 = Matrix::random_uniform(input_dim, hidden_dim, &mut rng);
        let w2 = Matrix::random_uniform(hidden_dim, output_dim, &mut rng);

        // Calibrate variances with 1/sqrt(fan_in).
        let w1 = w1.map(|v| v / (input_dim as f64).sqrt());
        let w2 = w2.map(|v| v / (hidden_dim as f64).sqrt());

        Weights { w1, w2 }
    }
}
