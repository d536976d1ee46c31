pub mod xor;

pub use xor::load_xor_data;
