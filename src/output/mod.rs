mod hdob;
mod json;

pub use self::hdob::HdobFormatter;
pub use self::json::JsonFormatter;

use crate::processing::Report;

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width HDOB messages
    #[default]
    Hdob,
    /// One JSON object per bin
    Json,
}

pub trait Formatter: Send {
    fn format(&self, report: &Report) -> String;
}

pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Hdob => Box::new(HdobFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
