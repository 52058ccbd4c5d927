use std::sync::atomic::Ordering;
use std::time::Instant;

use log::{debug, info, warn};

use crate::io::training_file::{TrainingRow, TrainingSet};
use crate::loss::mse::MseLoss;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

/// Replays `set` against `network` `set.iterations` times and returns the
/// statistics of every completed epoch.
///
/// Rows whose field count differs from `inputs + outputs` are reported once
/// and skipped; they never touch the network.
///
/// # Early termination
/// The replay stops before the next epoch if `config.stop_flag` is set, or
/// after the current one if the `progress_tx` receiver has been dropped.
pub fn replay(network: &mut Network, set: &TrainingSet, config: &TrainConfig) -> Vec<EpochStats> {
    let [input_count, _, output_count] = network.layer_sizes();
    let expected = input_count + output_count;

    let rows: Vec<&TrainingRow> = set.rows.iter()
        .filter(|row| {
            let fits = row.values.len() == expected;
            if !fits {
                warn!(
                    "training line {} does not fit the network: expected {} values, got {}",
                    row.line,
                    expected,
                    row.values.len()
                );
            }
            fits
        })
        .collect();

    let mut history = Vec::with_capacity(set.iterations);

    for epoch in 1..=set.iterations {
        if let Some(ref flag) = config.stop_flag {
            if flag.load(Ordering::Relaxed) {
                break;
            }
        }

        let t_start = Instant::now();
        let loss = run_one_epoch(network, &rows, input_count);

        let stats = EpochStats {
            epoch,
            total_epochs: set.iterations,
            mse: loss.mean(),
            trained_rows: loss.count(),
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };

        if config.log_interval > 0 && (epoch % config.log_interval == 0 || epoch == set.iterations) {
            debug!("epoch {}/{}: mse = {:.6}", epoch, set.iterations, stats.mse);
        }

        history.push(stats.clone());

        if let Some(ref tx) = config.progress_tx {
            if tx.send(stats).is_err() {
                break;
            }
        }
    }

    if let Some(last) = history.last() {
        info!(
            "replayed {} of {} epochs over {} rows, final mse = {:.6}",
            history.len(),
            set.iterations,
            rows.len(),
            last.mse
        );
    }

    history
}

/// One pass over the pre-validated rows: stage, forward, backward.
fn run_one_epoch(network: &mut Network, rows: &[&TrainingRow], input_count: usize) -> MseLoss {
    let mut loss = MseLoss::new();

    for row in rows {
        let (inputs, targets) = row.split(input_count);
        match network.evaluate(inputs, targets) {
            Ok(prediction) => loss.add(prediction, targets[0]),
            Err(e) => warn!("skipping training line {}: {}", row.line, e),
        }
    }

    loss
}
