use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NetworkError;

/// Activation applied to every hidden and output neuron of a network.
///
/// The set is closed: each variant pairs `function` with its matching
/// `derivative`, so there is no runtime "unknown kind" to fall into. Names
/// coming from outside (CLI flags, config files) go through `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActivationFunction {
    /// f(x) = x
    Linear,
    /// f(x) = 1 / (1 + e^-x)
    #[default]
    Sigmoid,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Linear => x,
            ActivationFunction::Sigmoid => 1.0 / (1.0 + (-x).exp()),
        }
    }

    /// Derivative evaluated at the pre-activation sum `x`.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Linear => 1.0,
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActivationFunction::Linear => "LINEAR",
            ActivationFunction::Sigmoid => "SIGMOID",
        }
    }
}

impl FromStr for ActivationFunction {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LINEAR" => Ok(ActivationFunction::Linear),
            "SIGMOID" => Ok(ActivationFunction::Sigmoid),
            _ => Err(NetworkError::UnknownActivation { name: s.to_string() }),
        }
    }
}

impl fmt::Display for ActivationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
