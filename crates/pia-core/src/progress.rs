//! Cosmetic progress indicator for an in-flight submission.
//!
//! The backend answers a single request with no progress channel, so the
//! percentage here only advances by random steps on a timer and never
//! reaches 100. It ends when the submission ends.

use rand::Rng;

pub const INITIAL_MESSAGE: &str = "Initializing...";
pub const CONNECTING_MESSAGE: &str = "Connecting to Google Analytics...";
pub const FETCHING_MESSAGE: &str = "Fetching analytics data...";
pub const GENERATING_MESSAGE: &str = "Generating reports and AI insights...";

/// Point-in-time view of the indicator, handed to the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSnapshot {
    /// Displayed width in percent, in `[0, cap]`.
    pub percent: f64,
    pub message: &'static str,
}

/// Simulated progress: percent plus a status message with three thresholds.
#[derive(Debug, Clone)]
pub struct ProgressModel {
    percent: f64,
    cap: f64,
    message: &'static str,
}

impl ProgressModel {
    pub fn new(cap: f64) -> Self {
        Self {
            percent: 0.0,
            cap,
            message: INITIAL_MESSAGE,
        }
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            percent: self.percent,
            message: self.message,
        }
    }

    /// Advances by `increment` (negative values count as zero), capped.
    ///
    /// Once the cap is reached the last message stays.
    pub fn advance(&mut self, increment: f64) -> ProgressSnapshot {
        self.percent = (self.percent + increment.max(0.0)).min(self.cap);
        if self.percent < 30.0 {
            self.message = CONNECTING_MESSAGE;
        } else if self.percent < 60.0 {
            self.message = FETCHING_MESSAGE;
        } else if self.percent < 90.0 {
            self.message = GENERATING_MESSAGE;
        }
        self.snapshot()
    }
}

impl Default for ProgressModel {
    fn default() -> Self {
        Self::new(90.0)
    }
}

/// Source of per-tick increments.
pub trait IncrementSource: Send {
    fn next_increment(&mut self) -> f64;
}

/// Uniform random increments in `[0, max)`.
#[derive(Debug, Clone, Copy)]
pub struct RandomIncrements {
    max: f64,
}

impl RandomIncrements {
    pub fn new(max: f64) -> Self {
        Self { max }
    }
}

impl Default for RandomIncrements {
    fn default() -> Self {
        Self::new(15.0)
    }
}

impl IncrementSource for RandomIncrements {
    fn next_increment(&mut self) -> f64 {
        if !self.max.is_finite() || self.max <= 0.0 {
            return 0.0;
        }
        rand::rng().random_range(0.0..self.max)
    }
}

/// Same increment on every tick.
#[derive(Debug, Clone, Copy)]
pub struct FixedIncrements(pub f64);

impl IncrementSource for FixedIncrements {
    fn next_increment(&mut self) -> f64 {
        self.0
    }
}
