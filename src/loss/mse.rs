/// Running mean-squared error over (prediction, target) pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MseLoss {
    total: f64,
    count: usize,
}

impl MseLoss {
    pub fn new() -> MseLoss {
        MseLoss::default()
    }

    pub fn add(&mut self, prediction: f64, target: f64) {
        self.total += (prediction - target).powi(2);
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean of the recorded squared errors; 0 when nothing was recorded.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total / self.count as f64
        }
    }
}
