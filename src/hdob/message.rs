use std::fmt;

use chrono::NaiveDate;

use super::ReportLine;
use crate::config::ReportConfig;

/// Terminates every message.
pub const END_MARKER: &str = "$$";

/// Identity shared by every message of one product.
#[derive(Debug, Clone)]
pub struct MissionInfo {
    /// Mission identifier, e.g. `AF302 0915A HELENE`
    pub mission: String,
    /// Date printed on the mission line
    pub storm_date: NaiveDate,
}

/// One transmittable HDOB message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: String,
    pub mission_line: String,
    pub lines: Vec<String>,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        writeln!(f, "{}", self.mission_line)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        write!(f, "{}", END_MARKER)
    }
}

/// Chunk report lines into messages of at most `lines_per_message` lines.
///
/// Each header carries the day-hour-minute of its own first line; the
/// observation number counts up from `first_ob_number`.
pub fn package_messages(
    lines: &[ReportLine],
    config: &ReportConfig,
    mission: &MissionInfo,
) -> Vec<Message> {
    let per_message = config.lines_per_message.max(1);
    let date = mission.storm_date.format("%Y%m%d");

    lines
        .chunks(per_message)
        .zip(config.first_ob_number..)
        .map(|(chunk, ob_number)| {
            let stamp = chunk[0].time.format("%d%H%M");
            Message {
                header: format!("{} {} {}", config.wmo_header, config.center, stamp),
                mission_line: format!("{} HDOB {:02} {}", mission.mission, ob_number, date),
                lines: chunk.iter().map(|l| l.text.clone()).collect(),
            }
        })
        .collect()
}

/// Join messages with a blank line; non-empty output ends with a newline.
pub fn render_messages(messages: &[Message]) -> String {
    if messages.is_empty() {
        return String::new();
    }
    let mut out = messages
        .iter()
        .map(Message::to_string)
        .collect::<Vec<_>>()
        .join("\n\n");
    out.push('\n');
    out
}
