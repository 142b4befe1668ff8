pub mod aggregate;
pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod hdob;
pub mod iwg1;
pub mod mission;
pub mod output;
pub mod physics;
pub mod processing;
pub mod source;
pub mod wind;

pub use config::ConverterConfig;
pub use error::{HdobError, Result};
pub use processing::{Converter, Outcome, Report, RunSummary};
