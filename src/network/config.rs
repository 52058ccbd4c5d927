use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::error::{NetworkError, Result};
use crate::network::network::Network;

/// Construction parameters for a `Network`.
///
/// Kept separate from the network so a setup can be stored as JSON and
/// rebuilt with fresh random weights.
///
/// Fields:
/// - `x_size`, `y_size`: canvas bounds used only to position neurons
/// - `activation`:       applied to every hidden and output neuron
/// - `momentum`:         share of the previous weight delta carried into the next update
/// - `*_neurons`:        layer sizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub x_size: f64,
    pub y_size: f64,
    pub activation: ActivationFunction,
    pub momentum: f64,
    pub input_neurons: usize,
    pub hidden_neurons: usize,
    pub output_neurons: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            x_size: 800.0,
            y_size: 800.0,
            activation: ActivationFunction::Sigmoid,
            momentum: 0.3,
            input_neurons: 2,
            hidden_neurons: 3,
            output_neurons: 1,
        }
    }
}

impl NetworkConfig {
    /// Checks that every layer is populated and the momentum is usable.
    pub fn validate(&self) -> Result<()> {
        let layers = [
            ("input", self.input_neurons),
            ("hidden", self.hidden_neurons),
            ("output", self.output_neurons),
        ];
        for (name, size) in layers {
            if size == 0 {
                return Err(NetworkError::InvalidConfig {
                    message: format!("{name} layer must have at least one neuron"),
                });
            }
        }
        if !self.momentum.is_finite() || self.momentum < 0.0 {
            return Err(NetworkError::InvalidConfig {
                message: format!("momentum must be a finite, non-negative number, got {}", self.momentum),
            });
        }
        Ok(())
    }

    /// Validates the configuration and builds a network with thread-local randomness.
    pub fn build(&self) -> Result<Network> {
        self.build_with_rng(&mut rand::thread_rng())
    }

    /// Validates the configuration and builds a network drawing weights from `rng`.
    pub fn build_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Network> {
        self.validate()?;
        Ok(Network::with_rng(self, rng))
    }

    /// Serializes the configuration to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a configuration from a JSON file. Missing fields take their defaults.
    pub fn load_json(path: &str) -> Result<NetworkConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
