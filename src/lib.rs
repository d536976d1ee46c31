pub mod math;
pub mod activation;
pub mod data;
pub mod model;
pub mod train;
pub mod plot;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::Activation;
pub use data::xor::load_xor_data;
pub use model::weights::Weights;
pub use model::inference::{infer, accuracy, softmax};
pub use train::trainer::Trainer;
pub use train::train_config::TrainConfig;
pub use train::epoch_stats::{EpochStats, MetricHistory};
pub use plot::folders::{PlotDirs, PlotKind};
