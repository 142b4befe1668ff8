use super::Formatter;
use crate::processing::Report;

/// JSON lines, one reduced bin per line.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, report: &Report) -> String {
        let mut out = String::new();
        for obs in &report.observations {
            match serde_json::to_string(obs) {
                Ok(json) => {
                    out.push_str(&json);
                    out.push('\n');
                }
                Err(e) => log::error!("Failed to serialize observation at {}: {}", obs.time, e),
            }
        }
        out
    }
}
