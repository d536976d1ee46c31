use crate::activation::activation::Activation;
use crate::math::matrix::Matrix;
use crate::model::weights::Weights;

/// Row-wise softmax: `exp(v) / sum(exp(row))`.
///
/// Plain `exp` with no max-shift; a large logit overflows to inf and the
/// resulting NaN propagates through later computations unguarded.
pub fn softmax(logits: &Matrix) -> Matrix {
    let data = logits.data.iter().map(|row| {
        let exps: Vec<f64> = row.iter().map(|&v| v.exp()).collect();
        let total: f64 = exps.iter().sum();
        exps.into_iter().map(|v| v / total).collect()
    }).collect();
    Matrix::from_data(data)
}

/// Index of the maximum element in a slice.
pub fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Predicted class index per input row.
///
/// `h1 = sigmoid(X·w1)`, `logits = h1·w2` with NO activation, then softmax
/// and argmax. Note the second layer differs from the training forward pass,
/// which does apply a sigmoid there; the discrepancy is inherited from the
/// reference experiment and kept.
///
/// Pure and deterministic for fixed weights.
pub fn infer(weights: &Weights, x: &Matrix) -> Vec<usize> {
    let h1 = (x.clone() * weights.w1.clone()).map(|v| Activation::Sigmoid.function(v));
    let logits = h1 * weights.w2.clone();
    let probs = softmax(&logits);

    probs.data.iter().map(|row| argmax(row)).collect()
}

/// Fraction of rows where the predicted class matches the one-hot label.
pub fn accuracy(weights: &Weights, x: &Matrix, y: &Matrix) -> f64 {
    let predictions = infer(weights, x);
    let correct = predictions.iter()
        .zip(y.data.iter())
        .filter(|(&predicted, label)| predicted == argmax(label))
        .count();
    correct as f64 / x.rows as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::xor::load_xor_data;

    #[test]
    fn test_softmax_rows_are_distributions() {
        let logits = Matrix::from_data(vec![
            vec![0.0, 0.0],
            vec![2.0, -1.0],
            vec![-3.0, 5.0],
        ]);
        let probs = softmax(&logits);

        for row in &probs.data {
            let total: f64 = row.iter().sum();
            assert!((total - 1.0).abs() < 1e-12);
            assert!(row.iter().all(|&p| p > 0.0));
        }
        assert_eq!(probs.data[0], vec![0.5, 0.5]);
    }

    #[test]
    fn test_argmax() {
        assert_eq!(argmax(&[0.1, 0.9]), 1);
        assert_eq!(argmax(&[0.9, 0.1]), 0);
        assert_eq!(argmax(&[1.0, 1.0]), 0);
    }

    #[test]
    fn test_predictions_are_valid_class_indices_and_match_probs() {
        let (x, _) = load_xor_data(100, 0);
        let weights = Weights::init(2, 10, 2, 2017);

        let predictions = infer(&weights, &x);

        assert_eq!(predictions.len(), 100);

        let h1 = (x.clone() * weights.w1.clone())
            .map(|v| Activation::Sigmoid.function(v));
        let probs = softmax(&(h1 * weights.w2.clone()));

        for (prediction, prob_row) in predictions.iter().zip(probs.data.iter()) {
            assert!(*prediction < 2);
            assert_eq!(*prediction, argmax(prob_row));
        }
    }

    #[test]
    fn test_accuracy_bounds_and_determinism() {
        let (x, y) = load_xor_data(50, 0);
        let weights = Weights::init(2, 10, 2, 2017);

        let a = accuracy(&weights, &x, &y);

        assert!((0.0..=1.0).contains(&a));
        assert_eq!(a, accuracy(&weights, &x, &y));
    }
}
