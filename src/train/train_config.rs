use serde::{Serialize, Deserialize};

/// Hyperparameters for a training run.
///
/// # Fields
/// - `epochs`        — total update steps; the loop always runs to the end
///                     (no early stopping, no convergence check)
/// - `batch_size`    — rows of the dataset used per step; always the FIRST
///                     `batch_size` rows, never reshuffled (see `Trainer::run`)
/// - `learning_rate` — step size for the in-place gradient descent update
/// - `reg_coeff`     — ridge (L2) penalty coefficient
/// - `report_every`  — epochs between progress reports / plot handoffs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub epochs: usize,
    pub batch_size: usize,
    pub learning_rate: f64,
    pub reg_coeff: f64,
    pub report_every: usize,
}

impl TrainConfig {
    pub fn new(epochs: usize, batch_size: usize, learning_rate: f64, reg_coeff: f64) -> Self {
        TrainConfig {
            epochs,
            batch_size,
            learning_rate,
            reg_coeff,
            report_every: 10_000,
        }
    }
}

impl Default for TrainConfig {
    /// The reference XOR experiment: one million epochs over a fixed
    /// 50-row batch with lr 1e-3 and ridge coefficient 1e-6.
    fn default() -> Self {
        TrainConfig::new(1_000_000, 50, 1e-3, 1e-6)
    }
}
