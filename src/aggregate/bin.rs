use chrono::{DateTime, TimeDelta, Utc};

use crate::iwg1::Sample;

/// A clock-aligned aggregation interval and the samples inside it
///
/// Covers `[start, start + length)`. Bins produced by [`Bins`] are never
/// empty.
#[derive(Debug, Clone, Copy)]
pub struct Bin<'a> {
    pub start: DateTime<Utc>,
    pub length: TimeDelta,
    pub samples: &'a [Sample],
}

impl Bin<'_> {
    pub fn end(&self) -> DateTime<Utc> {
        self.start + self.length
    }

    /// Centre of the bin, truncated to whole seconds.
    pub fn midpoint(&self) -> DateTime<Utc> {
        self.start + TimeDelta::seconds(self.length.num_seconds() / 2)
    }
}

/// Start of the `interval_secs` boundary at or before `time`.
pub fn align_to_interval(time: DateTime<Utc>, interval_secs: i64) -> DateTime<Utc> {
    let aligned = time.timestamp().div_euclid(interval_secs) * interval_secs;
    DateTime::from_timestamp(aligned, 0).unwrap_or(time)
}

/// Walks time-sorted samples bin by bin.
///
/// The first bin starts on the interval boundary at or before the first
/// sample. Bins then advance contiguously, except that a gap of one or more
/// whole intervals re-anchors the next bin on the boundary of the next
/// sample instead of producing empty bins.
pub struct Bins<'a> {
    samples: &'a [Sample],
    interval_secs: i64,
    next_start: Option<DateTime<Utc>>,
}

impl<'a> Bins<'a> {
    /// `samples` must be sorted by time.
    pub fn new(samples: &'a [Sample], interval_secs: i64) -> Self {
        let next_start = samples
            .first()
            .map(|s| align_to_interval(s.time, interval_secs));
        Self {
            samples,
            interval_secs,
            next_start,
        }
    }
}

impl<'a> Iterator for Bins<'a> {
    type Item = Bin<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let length = TimeDelta::seconds(self.interval_secs);

        loop {
            if self.samples.is_empty() {
                return None;
            }
            let start = self.next_start?;
            let end = start + length;

            let taken = self.samples.partition_point(|s| s.time < end);
            let (inside, rest) = self.samples.split_at(taken);
            self.samples = rest;

            self.next_start = match rest.first() {
                Some(next) if next.time >= end + length => {
                    Some(align_to_interval(next.time, self.interval_secs))
                }
                _ => Some(end),
            };

            if !inside.is_empty() {
                return Some(Bin {
                    start,
                    length,
                    samples: inside,
                });
            }
        }
    }
}
