use log::{info, warn};

use crate::error::{NetworkError, Result};
use crate::io::{is_skipped, parse_fields};
use crate::network::network::{check_len, Network, LAYER_COUNT};

const LAYER_NAMES: [&str; LAYER_COUNT] = ["input", "hidden", "output"];

/// One neuron's line of a start-values file: `value,weight0,weight1,...`.
#[derive(Debug, Clone, PartialEq)]
pub struct NeuronRecord {
    /// 1-based line number in the source text.
    pub line: usize,
    pub value: f64,
    pub weights: Vec<f64>,
}

/// Parses every data line of a start-values file.
pub fn parse_start_values(text: &str) -> Result<Vec<NeuronRecord>> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if is_skipped(line) {
            continue;
        }
        let mut fields = parse_fields(line, idx + 1)?;
        let value = fields.remove(0);
        records.push(NeuronRecord { line: idx + 1, value, weights: fields });
    }
    Ok(records)
}

/// Copies `records` into the network, layer by layer and row by row.
///
/// Every record is checked against the network's shape first; on any mismatch
/// the network is left untouched. Weight deltas are kept as they are.
pub fn apply_start_values(network: &mut Network, records: &[NeuronRecord]) -> Result<()> {
    network.validate_shape()?;

    let needed = network.neuron_count();
    if records.len() < needed {
        return Err(NetworkError::MissingStartValues { needed, found: records.len() });
    }
    if records.len() > needed {
        warn!(
            "start values provide {} neurons, network has {}; ignoring the rest",
            records.len(),
            needed
        );
    }

    let sizes = network.layer_sizes();
    let mut slots = Vec::with_capacity(needed);
    for (column, &size) in sizes.iter().enumerate() {
        let fan_out = sizes.get(column + 1).copied().unwrap_or(0);
        for row in 0..size {
            slots.push((column, row, fan_out));
        }
    }

    for (record, &(column, row, fan_out)) in records.iter().zip(&slots) {
        check_len(
            || format!("start values line {} ({} neuron {})", record.line, LAYER_NAMES[column], row),
            fan_out,
            record.weights.len(),
        )?;
    }

    for (record, &(column, row, _)) in records.iter().zip(&slots) {
        let neuron = &mut network.neurons[column][row];
        neuron.value = record.value;
        neuron.weights = record.weights.clone();
    }
    Ok(())
}

/// Reads a start-values file from `path` and applies it.
pub fn load_start_values(network: &mut Network, path: &str) -> Result<()> {
    let text = std::fs::read_to_string(path)?;
    let records = parse_start_values(&text)?;
    apply_start_values(network, &records)?;
    info!("loaded start values for {} neurons from {}", network.neuron_count(), path);
    Ok(())
}

/// Renders the network in the start-values format, one commented block per layer.
pub fn write_start_values(network: &Network) -> String {
    let mut out = String::new();
    for (column, layer) in network.neurons.iter().enumerate() {
        out.push_str(&format!("# {} layer\n", LAYER_NAMES[column]));
        for neuron in layer {
            let fields: Vec<String> = std::iter::once(neuron.value)
                .chain(neuron.weights.iter().copied())
                .map(|v| v.to_string())
                .collect();
            out.push_str(&fields.join(","));
            out.push('\n');
        }
    }
    out
}

/// Writes the network's start values to `path`.
pub fn save_start_values(network: &Network, path: &str) -> Result<()> {
    std::fs::write(path, write_start_values(network))?;
    Ok(())
}
