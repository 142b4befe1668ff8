//! Reading HDOB report lines back.
//!
//! Recovers the position, pressure and wind groups of rendered lines, the
//! groups a map front end needs. Fill patterns decode to `None`.

use chrono::NaiveTime;

use super::message::END_MARKER;

/// Decoded groups of one report line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedLine {
    pub time: NaiveTime,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    /// Static pressure in tenths of hPa, thousands digit dropped
    pub pressure_tenths: Option<u32>,
    /// Direction (degrees) and speed (knots)
    pub wind: Option<(u32, u32)>,
    /// Peak gust in knots
    pub peak_gust_kt: Option<u32>,
}

impl DecodedLine {
    /// Parse a 13-group report line; anything else is `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let groups: Vec<&str> = line.split_whitespace().collect();
        if groups.len() != 13 {
            return None;
        }
        let time = NaiveTime::parse_from_str(groups[0], "%H%M%S").ok()?;

        Some(Self {
            time,
            lat: decode_latitude(groups[1]),
            lon: decode_longitude(groups[2]),
            pressure_tenths: digits(groups[3], 4),
            wind: decode_wind(groups[8]),
            peak_gust_kt: digits(groups[9], 3),
        })
    }
}

/// Decode every report line of an HDOB product, skipping headers, mission
/// lines and end markers.
pub fn decode_report(text: &str) -> Vec<DecodedLine> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && *line != END_MARKER)
        .filter_map(DecodedLine::parse)
        .collect()
}

fn digits(token: &str, width: usize) -> Option<u32> {
    if token.len() != width || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// `DDMM[SS]H` with `deg_width` degree digits.
fn decode_coordinate(token: &str, deg_width: usize, positive: char, negative: char) -> Option<f64> {
    let hemisphere = token.chars().last()?;
    let sign = match hemisphere {
        c if c == positive => 1.0,
        c if c == negative => -1.0,
        _ => return None,
    };
    let body = &token[..token.len() - 1];
    let degrees = digits(body.get(..deg_width)?, deg_width)?;
    let minutes = digits(body.get(deg_width..deg_width + 2)?, 2)?;
    let seconds = match body.len() - deg_width {
        2 => 0,
        4 => digits(&body[deg_width + 2..], 2)?,
        _ => return None,
    };
    if minutes >= 60 || seconds >= 60 {
        return None;
    }
    Some(sign * (degrees as f64 + minutes as f64 / 60.0 + seconds as f64 / 3600.0))
}

/// `LLLL[SS]H` latitude token to decimal degrees.
pub fn decode_latitude(token: &str) -> Option<f64> {
    decode_coordinate(token, 2, 'N', 'S')
}

/// `NNNNN[SS]H` longitude token to decimal degrees.
pub fn decode_longitude(token: &str) -> Option<f64> {
    decode_coordinate(token, 3, 'E', 'W')
}

/// `wwwSSS` wind token to (direction, knots).
pub fn decode_wind(token: &str) -> Option<(u32, u32)> {
    digits(token, 6)?;
    let direction = token[..3].parse().ok()?;
    let speed = token[3..].parse().ok()?;
    (direction <= 360).then_some((direction, speed))
}
