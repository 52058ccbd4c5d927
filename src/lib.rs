pub mod error;
pub mod math;
pub mod activation;
pub mod neuron;
pub mod network;
pub mod loss;
pub mod io;
pub mod train;

// Convenience re-exports
pub use error::{NetworkError, Result};
pub use activation::activation::ActivationFunction;
pub use neuron::neuron::Neuron;
pub use network::network::Network;
pub use network::config::NetworkConfig;
pub use loss::mse::MseLoss;
pub use io::training_file::{TrainingSet, TrainingRow};
pub use train::{train_network, replay, EpochStats, TrainConfig};
