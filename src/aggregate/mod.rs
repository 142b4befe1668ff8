//! Clock-aligned binning and per-bin reduction.

mod bin;
mod observation;

pub use bin::{Bin, Bins, align_to_interval};
pub use observation::Observation;

use crate::iwg1::Sample;

/// Sort samples by time (stable) and reduce every non-empty bin.
pub fn aggregate(samples: &mut [Sample], interval_secs: i64) -> Vec<Observation> {
    samples.sort_by_key(|s| s.time);

    Bins::new(samples, interval_secs)
        .map(|bin| {
            let obs = Observation::from_bin(&bin);
            log::debug!(
                "Bin {} .. {}: {} samples",
                bin.start.format("%H:%M:%S"),
                bin.end().format("%H:%M:%S"),
                obs.sample_count
            );
            obs
        })
        .collect()
}
