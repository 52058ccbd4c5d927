pub mod config;
pub mod network;

pub use config::NetworkConfig;
pub use network::{Network, LAYER_COUNT, INPUT_LAYER, HIDDEN_LAYER, OUTPUT_LAYER};
