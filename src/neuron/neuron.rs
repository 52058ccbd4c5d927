use rand::Rng;
use serde::{Serialize, Deserialize};
use std::fmt;

use crate::math::init::uniform_weights;

/// A single node of the network.
///
/// `weights[i]` is the connection to neuron `i` of the next layer and
/// `weights_delta[i]` the change applied to it by the last backward pass.
/// Both vectors are as long as the next layer; output neurons have none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neuron {
    /// Display coordinates; the math never reads them.
    pub x_position: f64,
    pub y_position: f64,
    /// Activated output, or the injected input / target.
    pub value: f64,
    /// Pre-activation weighted input from the last forward pass.
    pub sum: f64,
    pub weights: Vec<f64>,
    pub weights_delta: Vec<f64>,
}

impl Neuron {
    /// Creates a neuron with `next_layer_size` weights drawn from [0, 1) and zeroed deltas.
    pub fn new<R: Rng + ?Sized>(
        x_position: f64,
        y_position: f64,
        next_layer_size: usize,
        rng: &mut R,
    ) -> Neuron {
        Neuron {
            x_position,
            y_position,
            value: 0.0,
            sum: 0.0,
            weights: uniform_weights(next_layer_size, rng),
            weights_delta: vec![0.0; next_layer_size],
        }
    }

    /// Applies `delta` to weight `index` and remembers it for the momentum term.
    pub fn adjust_weight(&mut self, index: usize, delta: f64) {
        self.weights[index] += delta;
        self.weights_delta[index] = delta;
    }

    /// Number of outgoing connections.
    pub fn fan_out(&self) -> usize {
        self.weights.len()
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value: {} x_position: {} y_position: {} weights: {:?} weights_delta: {:?}",
            self.value, self.x_position, self.y_position, self.weights, self.weights_delta
        )
    }
}
