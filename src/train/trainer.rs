use log::info;

use crate::activation::activation::Activation;
use crate::math::matrix::Matrix;
use crate::model::inference::{accuracy, softmax};
use crate::model::weights::Weights;
use crate::train::epoch_stats::{EpochStats, MetricHistory};
use crate::train::train_config::TrainConfig;

/// Result of a single forward/backward/update step.
#[derive(Debug, Clone, Copy)]
pub struct StepOutcome {
    /// MSE against the sigmoid output plus the ridge penalty, over 2N.
    pub loss: f64,
    /// Mean of |dL/dh2| = |h2 - y| over the batch.
    pub mean_abs_error: f64,
}

/// Owns the weight pair and the per-epoch metric records, and runs the
/// forward/backward/update loop.
///
/// The whole trainer is a single steady-state loop: there is no optimizer
/// state, no scheduler, and no NaN guard — if the arithmetic blows up the
/// inf/NaN values flow through every later epoch, matching the reference
/// behavior.
pub struct Trainer {
    pub weights: Weights,
    pub history: MetricHistory,
}

impl Trainer {
    /// Builds a trainer with freshly initialized weights (uniform [-1, 1)
    /// scaled by 1/sqrt(fan_in), drawn from `weight_seed`).
    pub fn new(input_dim: usize, hidden_dim: usize, output_dim: usize, weight_seed: u64) -> Trainer {
        Trainer {
            weights: Weights::init(input_dim, hidden_dim, output_dim, weight_seed),
            history: MetricHistory::new(),
        }
    }

    /// One gradient descent step over the given batch.
    ///
    /// Forward: `h1 = sigmoid(x·w1)`, `h2 = sigmoid(h1·w2)`. The softmax of
    /// `h2` belongs to the reporting surface only; the loss is computed
    /// directly against `h2`, while evaluation goes through
    /// `model::inference::infer`, which softmaxes NON-activated logits. That
    /// mismatch is inherited from the reference experiment and kept.
    ///
    /// Backward: manual chain rule with derivatives taken from the forward
    /// outputs (`Activation::derivative` expects post-activation values).
    /// The ridge term added to each gradient is the SCALAR `reg * sum(w²)`,
    /// not the per-weight derivative of the penalty — also inherited, also
    /// kept. Both gradients are computed from the pre-update weights before
    /// either matrix is touched.
    pub fn step(&mut self, x: &Matrix, y: &Matrix, config: &TrainConfig) -> StepOutcome {
        let n = x.rows as f64;

        // Forward.
        let h1 = (x.clone() * self.weights.w1.clone())
            .map(|v| Activation::Sigmoid.function(v));
        let h2 = (h1.clone() * self.weights.w2.clone())
            .map(|v| Activation::Sigmoid.function(v));
        let _probs = softmax(&h2);

        // Loss: MSE plus ridge penalty, both over 2N.
        let error = y.clone() - h2.clone();
        let penalty = self.weights.w1.sum_sq() + self.weights.w2.sum_sq();
        let loss = error.sum_sq() / (2.0 * n) + config.reg_coeff * penalty / (2.0 * n);

        // Backward: dL/dw2 = dL/dh2 * dh2/dz2 * dz2/dw2
        let d_h2 = error.map(|v| -v);
        let delta2 = d_h2.hadamard(&h2.map(|z| Activation::Sigmoid.derivative(z)));
        let w2_penalty = config.reg_coeff * self.weights.w2.sum_sq();
        let w2_grad = (h1.transpose() * delta2.clone()).map(|v| v + w2_penalty);

        // dL/dw1 = dL/dh1 * dh1/dz1 * dz1/dw1, with dL/dh1 = delta2 · w2ᵀ
        let d_h1 = delta2 * self.weights.w2.transpose();
        let delta1 = d_h1.hadamard(&h1.map(|z| Activation::Sigmoid.derivative(z)));
        let w1_penalty = config.reg_coeff * self.weights.w1.sum_sq();
        let w1_grad = (x.transpose() * delta1).map(|v| v + w1_penalty);

        // In-place update: w <- w - lr * grad.
        self.weights.w2 = self.weights.w2.clone()
            - w2_grad.map(|v| v * config.learning_rate);
        self.weights.w1 = self.weights.w1.clone()
            - w1_grad.map(|v| v * config.learning_rate);

        StepOutcome {
            loss,
            mean_abs_error: d_h2.mean_abs(),
        }
    }

    /// Runs the full epoch loop over `(x, y)`.
    ///
    /// The "minibatch" is the fixed first-`batch_size` rows of the dataset,
    /// sliced once up front and reused every epoch without shuffling; every
    /// epoch therefore trains on identical data. Accuracy is evaluated over
    /// the FULL dataset every epoch. Every `report_every` epochs the current
    /// stats are logged and handed to `on_report` together with the trainer
    /// (weights plus metric history) for plotting.
    pub fn run<F>(&mut self, x: &Matrix, y: &Matrix, config: &TrainConfig, mut on_report: F)
    where
        F: FnMut(&Trainer, &EpochStats),
    {
        assert!(x.rows > 0, "dataset must not be empty");
        assert_eq!(x.rows, y.rows, "features and labels must have equal row counts");
        assert!(config.batch_size > 0, "batch_size must be at least 1");

        let batch = config.batch_size.min(x.rows);
        let x_batch = Matrix::from_data(x.data[..batch].to_vec());
        let y_batch = Matrix::from_data(y.data[..batch].to_vec());

        for epoch in 0..config.epochs {
            let outcome = self.step(&x_batch, &y_batch, config);
            self.history.record_loss(epoch, outcome.loss);

            let acc = accuracy(&self.weights, x, y);
            self.history.record_accuracy(epoch, acc);

            if (epoch + 1) % config.report_every == 0 {
                let stats = EpochStats {
                    epoch,
                    loss: outcome.loss,
                    mean_abs_error: outcome.mean_abs_error,
                    accuracy: acc,
                };
                info!(
                    "epoch {}\tloss: {:.6} average L1 error: {:.6} accuracy: {:.6}",
                    stats.epoch, stats.loss, stats.mean_abs_error, stats.accuracy
                );
                on_report(&*self, &stats);
            }
        }
    }
}
