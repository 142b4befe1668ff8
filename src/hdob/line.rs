use chrono::{DateTime, Utc};

use super::encode::{
    PLACEHOLDER_FILL, encode_altimetry, encode_altitude, encode_gust, encode_latitude,
    encode_longitude, encode_pressure, encode_signed_tenths, encode_time, encode_wind,
};
use crate::aggregate::Observation;

/// One rendered HDOB report line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    /// Midpoint of the bin the line reports
    pub time: DateTime<Utc>,
    pub text: String,
}

impl ReportLine {
    /// Render `HHMMSS LLLLH NNNNNH PPPP GGGGG XXXX sTTT sddd wwwSSS MMM KKK ppp FF`.
    pub fn render(obs: &Observation, flags: &str) -> Self {
        let groups = [
            encode_time(&obs.time),
            encode_latitude(obs.lat),
            encode_longitude(obs.lon),
            encode_pressure(obs.pressure_hpa),
            encode_altitude(obs.altitude_m),
            encode_altimetry(obs.pressure_hpa, obs.altitude_m, obs.temp_c),
            encode_signed_tenths(obs.temp_c),
            encode_signed_tenths(obs.dew_point_c),
            encode_wind(obs.wind_dir_deg, obs.wind_speed_ms),
            encode_gust(obs.peak_gust_kt),
            PLACEHOLDER_FILL.to_string(),
            PLACEHOLDER_FILL.to_string(),
            flags.to_string(),
        ];

        Self {
            time: obs.time,
            text: groups.join(" "),
        }
    }
}
