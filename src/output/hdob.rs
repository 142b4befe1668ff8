use super::Formatter;
use crate::processing::Report;

pub struct HdobFormatter;

impl Formatter for HdobFormatter {
    fn format(&self, report: &Report) -> String {
        report.text()
    }
}
