//! HDOB (high-density observation) product rendering.

pub mod decode;
pub mod encode;
mod line;
mod message;

pub use decode::{DecodedLine, decode_report};
pub use line::ReportLine;
pub use message::{END_MARKER, Message, MissionInfo, package_messages, render_messages};
