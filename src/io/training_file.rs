use crate::error::{NetworkError, Result};
use crate::io::{is_skipped, parse_fields};

/// One example line of a training file: inputs followed by targets.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingRow {
    /// 1-based line number in the source text; 0 for rows built in code.
    pub line: usize,
    pub values: Vec<f64>,
}

impl TrainingRow {
    /// Splits the row into `(inputs, targets)` after `input_count` fields.
    pub fn split(&self, input_count: usize) -> (&[f64], &[f64]) {
        self.values.split_at(input_count.min(self.values.len()))
    }
}

/// Parsed training file: the rows and how many times to replay them.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSet {
    pub iterations: usize,
    pub rows: Vec<TrainingRow>,
}

impl TrainingSet {
    /// Builds a set from paired inputs and targets.
    ///
    /// # Panics
    /// Panics if `inputs` and `targets` differ in length.
    pub fn from_examples(inputs: &[Vec<f64>], targets: &[Vec<f64>], iterations: usize) -> TrainingSet {
        assert_eq!(inputs.len(), targets.len(), "inputs and targets must have equal length");
        let rows = inputs.iter().zip(targets)
            .map(|(input, target)| TrainingRow {
                line: 0,
                values: input.iter().chain(target).copied().collect(),
            })
            .collect();
        TrainingSet { iterations, rows }
    }
}

/// Parses a training file.
///
/// Data lines are `input0,...,inputN,target0,...`. A line `*K` sets how often
/// the whole set is replayed; the last such directive wins and the default is 1.
pub fn parse_training_file(text: &str) -> Result<TrainingSet> {
    let mut iterations = 1;
    let mut rows = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if is_skipped(line) {
            continue;
        }
        let line = line.trim();
        if let Some(count) = line.strip_prefix('*') {
            iterations = count.trim().parse::<usize>().map_err(|_| NetworkError::Parse {
                line: idx + 1,
                message: format!("repeat count '{}' is not a non-negative integer", count.trim()),
            })?;
            continue;
        }
        rows.push(TrainingRow { line: idx + 1, values: parse_fields(line, idx + 1)? });
    }

    Ok(TrainingSet { iterations, rows })
}

/// Reads and parses a training file from `path`.
pub fn load_training_file(path: &str) -> Result<TrainingSet> {
    let text = std::fs::read_to_string(path)?;
    parse_training_file(&text)
}
