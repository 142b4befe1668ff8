use crate::config::TimeOfDay;
use crate::iwg1::Sample;

/// UTC time-of-day window applied to samples before binning
///
/// Both bounds are inclusive. A start later than the end wraps past
/// midnight; a missing bound leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: Option<TimeOfDay>,
    pub end: Option<TimeOfDay>,
}

impl TimeWindow {
    pub fn new(start: Option<TimeOfDay>, end: Option<TimeOfDay>) -> Self {
        Self { start, end }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, second_of_day: u32) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start <= end => {
                (start.seconds()..=end.seconds()).contains(&second_of_day)
            }
            (Some(start), Some(end)) => {
                second_of_day >= start.seconds() || second_of_day <= end.seconds()
            }
            (Some(start), None) => second_of_day >= start.seconds(),
            (None, Some(end)) => second_of_day <= end.seconds(),
            (None, None) => true,
        }
    }

    pub fn apply(&self, samples: Vec<Sample>) -> Vec<Sample> {
        if self.is_unbounded() {
            return samples;
        }
        samples
            .into_iter()
            .filter(|s| self.contains(s.second_of_day()))
            .collect()
    }
}
