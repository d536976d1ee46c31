use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::math::matrix::Matrix;

/// Generates the synthetic XOR dataset.
///
/// Features are `n` points drawn from the 2-D standard normal distribution.
/// A point belongs to class 1 exactly when exactly one of its coordinates is
/// positive (logical XOR of the coordinate signs). Labels come back one-hot:
/// `[1, 0]` for class 0, `[0, 1]` for class 1.
///
/// Deterministic for a fixed `(n, seed)`; the caller generates the set once
/// per run and treats it as immutable.
pub fn load_xor_data(n: usize, seed: u64) -> (Matrix, Matrix) {
    let mut rng = StdRng::seed_from_u64(seed);
    let x = Matrix::random_normal(n, 2, &mut rng);

    let labels = x.data.iter().map(|row| {
        let class_one = (row[0] > 0.0) ^ (row[1] > 0.0);
        if class_one {
            vec![0.0, 1.0]
        } else {
            vec![1.0, 0.0]
        }
    }).collect();

    (x, Matrix::from_data(labels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_yields_identical_dataset() {
        let (x1, y1) = load_xor_data(300, 0);
        let (x2, y2) = load_xor_data(300, 0);

        assert_eq!(x1, x2);
        assert_eq!(y1, y2);
    }

    #[test]
    fn test_shapes() {
        let (x, y) = load_xor_data(25, 3);

        assert_eq!((x.rows, x.cols), (25, 2));
        assert_eq!((y.rows, y.cols), (25, 2));
    }

    #[test]
    fn test_labels_follow_sign_xor() {
        let (x, y) = load_xor_data(500, 42);

        for (features, label) in x.data.iter().zip(y.data.iter()) {
            let expected_one = (features[0] > 0.0) ^ (features[1] > 0.0);
            if expected_one {
                assert_eq!(label, &vec![0.0, 1.0]);
            } else {
                assert_eq!(label, &vec![1.0, 0.0]);
            }
        }
    }

    #[test]
    fn test_labels_are_one_hot_pairs() {
        let (_, y) = load_xor_data(100, 7);

        for label in &y.data {
            assert_eq!(label.len(), 2);
            assert_eq!(label[0] + label[1], 1.0);
            assert!(label.iter().all(|&v| v == 0.0 || v == 1.0));
        }
    }

    #[test]
    fn test_seed_zero_matches_recorded_reference_rows() {
        // Recorded from this implementation for (N=300, seed 0); pins the
        // Box-Muller draw order across the whole generated set.
        let (x, y) = load_xor_data(300, 0);

        assert!((x.data[0][0] - 0.23804647985344415).abs() < 1e-9);
        assert!((x.data[0][1] - -0.19758708114135018).abs() < 1e-9);
        assert!((x.data[299][0] - 1.8096818375206813).abs() < 1e-9);
        assert!((x.data[299][1] - 0.6567025556238681).abs() < 1e-9);
        // (+, -) coordinates: exactly one positive, class 1.
        assert_eq!(y.data[0], vec![0.0, 1.0]);
    }

    #[test]
    fn test_different_seeds_differ() {
        let (x1, _) = load_xor_data(50, 1);
        let (x2, _) = load_xor_data(50, 2);

        assert_ne!(x1, x2);
    }
}
