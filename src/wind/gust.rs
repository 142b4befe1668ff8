use std::collections::VecDeque;

use chrono::{DateTime, TimeDelta, Utc};

use crate::constants::{GUST_WINDOW_SECS, KTS_PER_MPS};

/// Time-bounded moving average
///
/// Holds the samples whose timestamps fall in the trailing window
/// `(t - span, t]` of the most recent push. Pushes must arrive in
/// non-decreasing time order. The running sum makes push and eviction
/// amortized O(1).
pub struct TimedWindow {
    span: TimeDelta,
    entries: VecDeque<(DateTime<Utc>, f64)>,
    sum: f64,
}

impl TimedWindow {
    pub fn new(span: TimeDelta) -> Self {
        Self {
            span,
            entries: VecDeque::new(),
            sum: 0.0,
        }
    }

    /// Add a value and return the mean of the window after eviction.
    pub fn push(&mut self, time: DateTime<Utc>, value: f64) -> f64 {
        self.entries.push_back((time, value));
        self.sum += value;

        let cutoff = time - self.span;
        while let Some(&(t, v)) = self.entries.front() {
            if t > cutoff {
                break;
            }
            self.entries.pop_front();
            self.sum -= v;
        }

        self.mean()
    }

    pub fn mean(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.sum / self.entries.len() as f64
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Peak 10-second mean wind speed, in knots.
///
/// Speeds are in m/s and must be in time order. Missing speeds are skipped.
/// The result is the largest trailing-window mean seen over the whole
/// sequence; if that never rises above zero the largest single speed is used
/// instead. Returns `None` when no speed is present at all.
pub fn peak_gust_knots<I>(speeds: I) -> Option<f64>
where
    I: IntoIterator<Item = (DateTime<Utc>, Option<f64>)>,
{
    let mut window = TimedWindow::new(TimeDelta::seconds(GUST_WINDOW_SECS));
    let mut best_mean = 0.0_f64;
    let mut max_speed: Option<f64> = None;

    for (time, speed) in speeds {
        let Some(speed) = speed else {
            continue;
        };
        max_speed = Some(max_speed.map_or(speed, |m| m.max(speed)));
        best_mean = best_mean.max(window.push(time, speed));
    }

    let max_speed = max_speed?;

    // Only reachable when no speed is positive, where max_speed is at most 0 too.
    let peak = if best_mean > 0.0 { best_mean } else { max_speed };
    Some(peak * KTS_PER_MPS)
}
