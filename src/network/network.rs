use log::debug;
use rand::Rng;
use serde::{Serialize, Deserialize};
use std::fmt;

use crate::activation::activation::ActivationFunction;
use crate::error::{NetworkError, Result};
use crate::math::init::even_spacing;
use crate::network::config::NetworkConfig;
use crate::neuron::neuron::Neuron;

pub const LAYER_COUNT: usize = 3;
pub const INPUT_LAYER: usize = 0;
pub const HIDDEN_LAYER: usize = 1;
pub const OUTPUT_LAYER: usize = 2;

/// A three-column network: inputs, one hidden layer, outputs.
///
/// Neurons are addressed by `neurons[layer][row]`; a neuron's weights point at
/// the rows of the following layer by position, so the layers form a plain
/// forward chain with no shared references.
///
/// After `forward_propagation` the first output neuron keeps the *target* the
/// caller staged and `result` holds the *prediction*. `backward_propagation`
/// relies on that arrangement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    pub x_size: f64,
    pub y_size: f64,
    pub activation: ActivationFunction,
    pub momentum: f64,
    pub neurons: [Vec<Neuron>; LAYER_COUNT],
    pub result: f64,
}

impl Network {
    /// Builds a network with thread-local randomness.
    ///
    /// # Panics
    /// Panics if any layer size is zero; use `NetworkConfig::build` for a
    /// checked construction.
    pub fn new(
        x_size: f64,
        y_size: f64,
        activation: ActivationFunction,
        momentum: f64,
        input_neurons: usize,
        output_neurons: usize,
        hidden_neurons: usize,
    ) -> Network {
        let config = NetworkConfig {
            x_size,
            y_size,
            activation,
            momentum,
            input_neurons,
            hidden_neurons,
            output_neurons,
        };
        Network::with_rng(&config, &mut rand::thread_rng())
    }

    /// Builds a network from `config`, drawing initial weights from `rng`.
    ///
    /// # Panics
    /// Panics if any layer size is zero.
    pub fn with_rng<R: Rng + ?Sized>(config: &NetworkConfig, rng: &mut R) -> Network {
        let sizes = [config.input_neurons, config.hidden_neurons, config.output_neurons];
        assert!(
            sizes.iter().all(|&s| s > 0),
            "every layer needs at least one neuron, got {:?}",
            sizes
        );

        let column_width = config.x_size / (LAYER_COUNT + 1) as f64;
        let neurons: [Vec<Neuron>; LAYER_COUNT] = std::array::from_fn(|column| {
            let next_size = sizes.get(column + 1).copied().unwrap_or(0);
            let x = (column + 1) as f64 * column_width;
            even_spacing(sizes[column], config.y_size)
                .into_iter()
                .map(|y| Neuron::new(x, y, next_size, &mut *rng))
                .collect()
        });

        debug!(
            "built {}-{}-{} network ({} activation, momentum {})",
            sizes[0], sizes[1], sizes[2], config.activation, config.momentum
        );

        Network {
            x_size: config.x_size,
            y_size: config.y_size,
            activation: config.activation,
            momentum: config.momentum,
            neurons,
            result: 0.0,
        }
    }

    /// Computes hidden and output values from the staged inputs.
    ///
    /// The target staged in the first output neuron is stashed before the pass
    /// and swapped back afterwards, leaving the prediction in `result`.
    pub fn forward_propagation(&mut self) {
        let activation = self.activation;

        self.result = self.neurons[OUTPUT_LAYER][0].value;

        for layer in self.neurons.iter_mut().skip(1) {
            for neuron in layer.iter_mut() {
                neuron.sum = 0.0;
            }
        }

        for column in 0..LAYER_COUNT - 1 {
            let (head, tail) = self.neurons.split_at_mut(column + 1);
            let source = &head[column];
            let next = &mut tail[0];

            for neuron in source {
                for (target, weight) in next.iter_mut().zip(&neuron.weights) {
                    target.sum += neuron.value * weight;
                }
            }
            for target in next.iter_mut() {
                target.value = activation.function(target.sum);
            }
        }

        std::mem::swap(&mut self.neurons[OUTPUT_LAYER][0].value, &mut self.result);
    }

    /// Adjusts input and hidden weights from the error between the staged
    /// target and the last prediction, adding `momentum` times the previous delta.
    ///
    /// The step size is the raw factor; there is no separate learning rate.
    pub fn backward_propagation(&mut self) {
        let activation = self.activation;
        let momentum = self.momentum;

        let output = &self.neurons[OUTPUT_LAYER][0];
        let weight_factor = activation.derivative(output.sum) * (output.value - self.result);

        // Gradient reaching each hidden neuron through its single output weight,
        // taken before that weight moves.
        let hidden_gradients: Vec<f64> = self.neurons[HIDDEN_LAYER]
            .iter()
            .map(|hidden| weight_factor * hidden.weights[0] * activation.derivative(hidden.sum))
            .collect();

        for neuron in self.neurons[INPUT_LAYER].iter_mut() {
            for (index, gradient) in hidden_gradients.iter().enumerate().take(neuron.fan_out()) {
                let delta = gradient + momentum * neuron.weights_delta[index];
                neuron.adjust_weight(index, delta);
            }
        }

        for neuron in self.neurons[HIDDEN_LAYER].iter_mut() {
            let delta = weight_factor * neuron.value + momentum * neuron.weights_delta[0];
            neuron.adjust_weight(0, delta);
        }
    }

    /// Stages values into the input layer.
    pub fn set_inputs(&mut self, inputs: &[f64]) -> Result<()> {
        stage(&mut self.neurons[INPUT_LAYER], inputs, "input layer")
    }

    /// Stages targets into the output layer.
    pub fn set_targets(&mut self, targets: &[f64]) -> Result<()> {
        stage(&mut self.neurons[OUTPUT_LAYER], targets, "output layer")
    }

    /// Stages one example, runs a forward and a backward pass and returns the prediction.
    pub fn evaluate(&mut self, inputs: &[f64], targets: &[f64]) -> Result<f64> {
        self.set_inputs(inputs)?;
        self.set_targets(targets)?;
        self.forward_propagation();
        self.backward_propagation();
        Ok(self.result)
    }

    /// The prediction produced by the last forward pass.
    pub fn prediction(&self) -> f64 {
        self.result
    }

    /// The target currently held by the first output neuron.
    pub fn target(&self) -> f64 {
        self.neurons[OUTPUT_LAYER][0].value
    }

    pub fn layer(&self, index: usize) -> &[Neuron] {
        &self.neurons[index]
    }

    pub fn layer_sizes(&self) -> [usize; LAYER_COUNT] {
        std::array::from_fn(|i| self.neurons[i].len())
    }

    pub fn neuron_count(&self) -> usize {
        self.neurons.iter().map(Vec::len).sum()
    }

    pub fn weight_count(&self) -> usize {
        self.neurons.iter().flatten().map(Neuron::fan_out).sum()
    }

    /// The configuration this network's shape and hyperparameters correspond to.
    pub fn config(&self) -> NetworkConfig {
        let [input_neurons, hidden_neurons, output_neurons] = self.layer_sizes();
        NetworkConfig {
            x_size: self.x_size,
            y_size: self.y_size,
            activation: self.activation,
            momentum: self.momentum,
            input_neurons,
            hidden_neurons,
            output_neurons,
        }
    }

    /// Serializes the full network state to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a network from a JSON file previously written by `save_json`.
    ///
    /// The snapshot's shape is checked before it is handed out, so a damaged
    /// file is an error rather than a panic in a later pass.
    pub fn load_json(path: &str) -> Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let network: Network = serde_json::from_reader(reader)?;
        network.validate_shape()?;
        Ok(network)
    }

    /// Checks that no layer is empty and that every neuron has exactly one
    /// weight and one delta per neuron of the next layer.
    pub fn validate_shape(&self) -> Result<()> {
        for (column, layer) in self.neurons.iter().enumerate() {
            if layer.is_empty() {
                return Err(NetworkError::InvalidConfig {
                    message: format!("layer {column} has no neurons"),
                });
            }
            let fan_out = self.neurons.get(column + 1).map_or(0, Vec::len);
            for (row, neuron) in layer.iter().enumerate() {
                check_len(|| format!("weights of neuron {column}/{row}"), fan_out, neuron.weights.len())?;
                check_len(
                    || format!("weight deltas of neuron {column}/{row}"),
                    fan_out,
                    neuron.weights_delta.len(),
                )?;
            }
        }
        Ok(())
    }
}

/// Returns `ShapeMismatch` when `actual != expected`; `context` is only built on failure.
pub(crate) fn check_len<F: FnOnce() -> String>(context: F, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(NetworkError::ShapeMismatch { context: context(), expected, actual })
    }
}

fn stage(layer: &mut [Neuron], values: &[f64], context: &str) -> Result<()> {
    check_len(|| context.to_string(), layer.len(), values.len())?;
    for (neuron, &value) in layer.iter_mut().zip(values) {
        neuron.value = value;
    }
    Ok(())
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "x_size: {}", self.x_size)?;
        writeln!(f, "y_size: {}", self.y_size)?;
        writeln!(f, "activation: {} momentum: {}", self.activation, self.momentum)?;
        for (column, layer) in self.neurons.iter().enumerate() {
            writeln!(f, "layer {column}:")?;
            for neuron in layer {
                writeln!(f, "  {neuron}")?;
            }
        }
        write!(f, "result: {}", self.result)
    }
}
