use std::sync::mpsc;
use std::sync::{Arc, atomic::AtomicBool};
use crate::train::epoch_stats::EpochStats;

/// Options for a `replay` run.
///
/// # Fields
/// - `log_interval`: emit a debug log line every this many epochs (0 disables)
/// - `progress_tx`:  optional channel; one `EpochStats` is sent per completed
///                    epoch. If the receiver is dropped the replay stops.
/// - `stop_flag`:    optional flag; when set the replay stops before the next epoch.
pub struct TrainConfig {
    pub log_interval: usize,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TrainConfig {
    pub fn new(log_interval: usize) -> Self {
        TrainConfig {
            log_interval,
            progress_tx: None,
            stop_flag: None,
        }
    }

    pub fn with_progress(mut self, tx: mpsc::Sender<EpochStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn with_stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop_flag = Some(flag);
        self
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(100)
    }
}
