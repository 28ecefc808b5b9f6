use std::time::Duration;

/// Fixed-frequency delay between executed statements.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pacing {
    frequency_hz: f64,
}

impl Pacing {
    pub fn new(frequency_hz: f64) -> Pacing {
        Pacing { frequency_hz }
    }

    pub fn frequency_hz(&self) -> f64 {
        self.frequency_hz
    }

    pub fn is_unlimited(&self) -> bool {
        !(self.frequency_hz > 0.0)
    }

    pub fn interval(&self) -> Option<Duration> {
        if self.is_unlimited() {
            None
        } else {
            Some(Duration::from_micros((1_000_000.0 / self.frequency_hz) as u64))
        }
    }

    /// Blocks the calling thread for one period.
    pub fn delay(&self) {
        if let Some(interval) = self.interval() {
            std::thread::sleep(interval);
        }
    }
}
