pub mod trainer;
pub mod epoch_stats;
pub mod train_config;

pub use trainer::{Trainer, StepOutcome};
pub use epoch_stats::{EpochStats, MetricHistory};
pub use train_config::TrainConfig;
