pub mod weights;
pub mod inference;

pub use weights::Weights;
pub use inference::{infer, accuracy, softmax};
