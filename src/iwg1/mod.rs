pub mod parser;
pub mod record;
mod sample;

pub use parser::SampleParser;
pub use record::{candidate_records, parse_field, parse_record, parse_time};
pub use sample::Sample;
