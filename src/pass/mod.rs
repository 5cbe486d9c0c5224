//! Password generation, presets, strength and output.

pub mod charset;
mod generate;
pub mod output;
mod preset;
pub mod strength;

pub use charset::{PassConfig, Pool};
pub use generate::generate_from_pool;
pub use preset::Preset;
