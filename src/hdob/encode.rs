//! HDOB field encoders.
//!
//! Each encoder maps a physical value, or its absence, to a fixed-width
//! token. Missing input always renders the field's fill pattern.
//!
//! | Field   | Token    | Fill     |
//! |---------|----------|----------|
//! | time    | `HHMMSS` | -        |
//! | lat     | `LLLLH`  | `/////`  |
//! | lon     | `NNNNNH` | `//////` |
//! | press   | `PPPP`   | `////`   |
//! | height  | `GGGGG`  | `/////`  |
//! | altim   | `XXXX`   | `////`   |
//! | temp/dp | `sTTT`   | `///`    |
//! | wind    | `wwwSSS` | `//////` |
//! | gust    | `MMM`    | `///`    |
//!
//! Rounding is half to even: 12.5 rounds to 12, 13.5 to 14.

use chrono::{DateTime, Utc};

use crate::constants::{ALTIMETRY_THRESHOLD_HPA, D_VALUE_NEGATIVE_OFFSET, KTS_PER_MPS};
use crate::physics::{d_value, extrapolate_surface_pressure};

pub const LAT_FILL: &str = "/////";
pub const LON_FILL: &str = "//////";
pub const PRESSURE_FILL: &str = "////";
pub const ALTITUDE_FILL: &str = "/////";
pub const ALTIMETRY_FILL: &str = "////";
pub const SIGNED_TENTHS_FILL: &str = "///";
pub const WIND_FILL: &str = "//////";
pub const GUST_FILL: &str = "///";

/// Fill for the quality and auxiliary groups, which are never reported.
pub const PLACEHOLDER_FILL: &str = "///";

/// `HHMMSS` of a UTC timestamp.
pub fn encode_time(time: &DateTime<Utc>) -> String {
    time.format("%H%M%S").to_string()
}

/// Split an absolute coordinate into whole degrees and rounded minutes,
/// carrying 60 minutes into the degrees.
fn degrees_minutes(value: f64) -> (i64, i64) {
    let abs = value.abs();
    let mut degrees = abs.floor() as i64;
    let mut minutes = ((abs - abs.floor()) * 60.0).round_ties_even() as i64;
    if minutes == 60 {
        degrees += 1;
        minutes = 0;
    }
    (degrees, minutes)
}

pub fn encode_latitude(lat: Option<f64>) -> String {
    let Some(lat) = lat else {
        return LAT_FILL.to_string();
    };
    let hemisphere = if lat >= 0.0 { 'N' } else { 'S' };
    let (degrees, minutes) = degrees_minutes(lat);
    format!("{degrees:02}{minutes:02}{hemisphere}")
}

pub fn encode_longitude(lon: Option<f64>) -> String {
    let Some(lon) = lon else {
        return LON_FILL.to_string();
    };
    let hemisphere = if lon >= 0.0 { 'E' } else { 'W' };
    let (degrees, minutes) = degrees_minutes(lon);
    format!("{degrees:03}{minutes:02}{hemisphere}")
}

/// Pressure in tenths of hPa, thousands digit dropped.
///
/// The wrap is part of the format: 1013.2 hPa and 13.2 hPa both encode
/// as `0132`.
pub fn encode_pressure(pressure_hpa: Option<f64>) -> String {
    match pressure_hpa {
        Some(p) => {
            let tenths = (p * 10.0).round_ties_even() as i64;
            format!("{:04}", tenths.rem_euclid(10_000))
        }
        None => PRESSURE_FILL.to_string(),
    }
}

/// Geopotential altitude in whole metres.
pub fn encode_altitude(altitude_m: Option<f64>) -> String {
    match altitude_m {
        Some(z) => format!("{:05}", z.round_ties_even() as i64),
        None => ALTITUDE_FILL.to_string(),
    }
}

/// Composite altimetry group.
///
/// At or above 550 hPa this is the extrapolated surface pressure in the
/// pressure encoding. Above that level (lower pressure) it is the D-value,
/// with negative values folded by adding 5000.
pub fn encode_altimetry(
    pressure_hpa: Option<f64>,
    altitude_m: Option<f64>,
    temp_c: Option<f64>,
) -> String {
    let (Some(p), Some(z)) = (pressure_hpa, altitude_m) else {
        return ALTIMETRY_FILL.to_string();
    };

    if p >= ALTIMETRY_THRESHOLD_HPA {
        return encode_pressure(extrapolate_surface_pressure(p, z, temp_c));
    }

    match d_value(Some(z), Some(p)) {
        Some(d) => {
            let folded = if d < 0 { d + D_VALUE_NEGATIVE_OFFSET } else { d };
            format!("{:04}", folded.rem_euclid(10_000))
        }
        None => ALTIMETRY_FILL.to_string(),
    }
}

/// Sign and tenths of a degree, e.g. `+123` or `-045`.
pub fn encode_signed_tenths(value: Option<f64>) -> String {
    let Some(v) = value else {
        return SIGNED_TENTHS_FILL.to_string();
    };
    let sign = if v >= 0.0 { '+' } else { '-' };
    let magnitude = (v.abs() * 10.0).round_ties_even() as i64;
    format!("{sign}{magnitude:03}")
}

/// Wind direction (degrees) and speed (m/s, reported in knots).
pub fn encode_wind(direction_deg: Option<f64>, speed_ms: Option<f64>) -> String {
    let (Some(dir), Some(speed)) = (direction_deg, speed_ms) else {
        return WIND_FILL.to_string();
    };
    let direction = (dir.round_ties_even() as i64).rem_euclid(360);
    let knots = (speed * KTS_PER_MPS).round_ties_even() as i64;
    format!("{direction:03}{knots:03}")
}

/// Peak gust, already in knots.
pub fn encode_gust(knots: Option<f64>) -> String {
    match knots {
        Some(k) => format!("{:03}", k.round_ties_even() as i64),
        None => GUST_FILL.to_string(),
    }
}
