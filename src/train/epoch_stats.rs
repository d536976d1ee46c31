use serde::{Serialize, Deserialize};

/// Progress snapshot handed to the report callback every
/// `TrainConfig::report_every` epochs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochStats {
    /// 0-based epoch index.
    pub epoch: usize,
    /// Loss over the training batch at this epoch.
    pub loss: f64,
    /// Mean absolute output error |h2 - y| over the training batch.
    pub mean_abs_error: f64,
    /// Classification accuracy over the FULL dataset.
    pub accuracy: f64,
}

/// Append-only per-epoch metric records.
///
/// One `(epoch, loss)` and one `(epoch, accuracy)` entry is pushed per epoch;
/// entries are never mutated after append. Plotting consumes these as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricHistory {
    pub losses: Vec<(usize, f64)>,
    pub accuracies: Vec<(usize, f64)>,
}

impl MetricHistory {
    pub fn new() -> MetricHistory {
        MetricHistory::default()
    }

    pub fn record_loss(&mut self, epoch: usize, loss: f64) {
        self.losses.push((epoch, loss));
    }

    pub fn record_accuracy(&mut self, epoch: usize, accuracy: f64) {
        self.accuracies.push((epoch, accuracy));
    }
}
