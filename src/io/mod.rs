//! Plain-text formats used to seed a network and to replay training data.
//!
//! Both formats are line based: blank lines and lines starting with `#` are
//! ignored, every other line is a comma-separated list of numbers.

pub mod start_values;
pub mod training_file;

pub use start_values::{
    NeuronRecord, apply_start_values, load_start_values, parse_start_values,
    save_start_values, write_start_values,
};
pub use training_file::{TrainingRow, TrainingSet, load_training_file, parse_training_file};

use crate::error::{NetworkError, Result};

/// Returns `true` for lines that carry no data.
pub(crate) fn is_skipped(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

/// Parses a comma-separated line of floats; `line_num` is 1-based and only used for errors.
pub(crate) fn parse_fields(line: &str, line_num: usize) -> Result<Vec<f64>> {
    line.split(',')
        .map(|cell| {
            let cell = cell.trim();
            cell.parse::<f64>().map_err(|_| NetworkError::Parse {
                line: line_num,
                message: format!("'{cell}' is not a valid number"),
            })
        })
        .collect()
}
