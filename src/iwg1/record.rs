//! IWG1 record decoding.
//!
//! IWG1 is a comma-separated ASCII packet whose fields are addressed by
//! fixed position. Only the fields the HDOB product needs are decoded.

use chrono::{DateTime, NaiveDateTime, Utc};

use super::Sample;

/// Leading token of every IWG1 packet.
pub const RECORD_MARKER: &str = "IWG1";

/// Fewest comma-separated fields a candidate record may have.
pub const MIN_FIELDS: usize = 3;

const IDX_TIME: usize = 1;
const IDX_LAT: usize = 2;
const IDX_LON: usize = 3;
const IDX_GPS_MSL_ALT: usize = 4;
const IDX_WGS84_ALT: usize = 5;
const IDX_AMBIENT_TEMP: usize = 20;
const IDX_DEW_POINT: usize = 21;
const IDX_STATIC_PRESS: usize = 23;
const IDX_WIND_SPEED: usize = 26;
const IDX_WIND_DIR: usize = 27;

const NAIVE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y%m%dT%H%M%S",
    "%Y%m%d %H%M%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%d %H%M%S%.f",
];

const ZONED_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y%m%dT%H%M%S%.f%z",
];

/// Select the candidate IWG1 records from raw input text.
///
/// A line is a candidate when, once trimmed, it starts with the record
/// marker and has at least [`MIN_FIELDS`] fields. Everything else is skipped.
pub fn candidate_records(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| {
            line.strip_prefix(RECORD_MARKER)
                .is_some_and(|rest| rest.starts_with(','))
        })
        .filter(|line| line.split(',').count() >= MIN_FIELDS)
        .collect()
}

/// Decode one record into a [`Sample`].
///
/// Returns `None` only when the timestamp cannot be parsed or the line is not
/// an IWG1 record; unreadable numeric fields become missing values instead.
pub fn parse_record(line: &str) -> Option<Sample> {
    let parts: Vec<&str> = line.trim().split(',').collect();
    if parts.len() < MIN_FIELDS || parts[0].trim() != RECORD_MARKER {
        return None;
    }

    let time = parse_time(parts[IDX_TIME])?;
    let field = |idx: usize| parts.get(idx).and_then(|s| parse_field(s));

    Some(Sample {
        time,
        lat: field(IDX_LAT),
        lon: field(IDX_LON),
        altitude_m: field(IDX_GPS_MSL_ALT).or_else(|| field(IDX_WGS84_ALT)),
        pressure_hpa: field(IDX_STATIC_PRESS),
        temp_c: field(IDX_AMBIENT_TEMP),
        dew_point_c: field(IDX_DEW_POINT),
        wind_speed_ms: field(IDX_WIND_SPEED),
        wind_dir_deg: field(IDX_WIND_DIR),
    })
}

/// Parse a numeric field.
///
/// Empty fields, `nan`, `inf`, `+inf`, `-inf` (any case) and anything else
/// that is not a finite number are missing.
pub fn parse_field(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if matches!(
        s.to_ascii_lowercase().as_str(),
        "nan" | "inf" | "+inf" | "-inf"
    ) {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse an IWG1 timestamp, normalizing to UTC.
///
/// Times without a zone are taken as UTC.
pub fn parse_time(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in NAIVE_TIME_FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(t.and_utc());
        }
    }

    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    for fmt in ZONED_TIME_FORMATS {
        if let Ok(t) = DateTime::parse_from_str(s, fmt) {
            return Some(t.with_timezone(&Utc));
        }
    }

    None
}
