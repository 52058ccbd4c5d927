use serde::{Serialize, Deserialize};

/// Statistics for one replay of a training set.
///
/// `replay` returns one of these per completed epoch and, when a progress
/// channel is configured, also sends each one as soon as the epoch ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    pub total_epochs: usize,
    /// Mean squared error between prediction and first target over the epoch.
    pub mse: f64,
    /// Rows that were actually trained on (mismatched rows are skipped).
    pub trained_rows: usize,
    pub elapsed_ms: u64,
}
