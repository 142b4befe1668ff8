use std::num::NonZeroUsize;
use std::thread;

use crossbeam_channel::{bounded, unbounded};

use super::{Sample, parse_record};
use crate::config::ParseConfig;

/// Jobs queued per worker before the producer blocks.
const QUEUE_DEPTH_PER_WORKER: usize = 256;

/// Record parser with a strategy fixed at construction.
///
/// Both strategies return the successfully decoded samples in input order,
/// so the pooled parser is a drop-in replacement for the sequential one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleParser {
    /// Parse on the calling thread
    Sequential,
    /// Parse on a bounded pool of scoped worker threads
    Pooled { workers: usize },
}

impl SampleParser {
    pub fn new(config: &ParseConfig) -> Self {
        Self::with_workers(config.workers)
    }

    /// Select a strategy for `workers` threads; 0 or 1 is sequential.
    pub fn with_workers(workers: usize) -> Self {
        if workers <= 1 {
            return Self::Sequential;
        }

        let limit = thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(4)
            * 4;
        if workers > limit {
            log::warn!("Clamping parser workers from {} to {}", workers, limit);
        }
        Self::Pooled {
            workers: workers.min(limit),
        }
    }

    pub fn parse(&self, records: &[&str]) -> Vec<Sample> {
        let samples = match *self {
            Self::Sequential => records.iter().filter_map(|r| parse_record(r)).collect(),
            Self::Pooled { workers } => parse_pooled(records, workers),
        };

        let dropped = records.len() - samples.len();
        if dropped > 0 {
            log::debug!("Dropped {} of {} records", dropped, records.len());
        }
        samples
    }
}

fn parse_pooled(records: &[&str], workers: usize) -> Vec<Sample> {
    let (job_tx, job_rx) = bounded::<(usize, &str)>(workers * QUEUE_DEPTH_PER_WORKER);
    let (result_tx, result_rx) = unbounded::<(usize, Sample)>();

    let mut indexed: Vec<(usize, Sample)> = thread::scope(|scope| {
        for _ in 0..workers {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();
            scope.spawn(move || {
                for (idx, line) in job_rx.iter() {
                    if let Some(sample) = parse_record(line) {
                        if result_tx.send((idx, sample)).is_err() {
                            break;
                        }
                    }
                }
            });
        }
        drop(job_rx);
        drop(result_tx);

        for job in records.iter().copied().enumerate() {
            if job_tx.send(job).is_err() {
                break;
            }
        }
        drop(job_tx);

        result_rx.iter().collect()
    });

    indexed.sort_unstable_by_key(|&(idx, _)| idx);
    indexed.into_iter().map(|(_, sample)| sample).collect()
}
