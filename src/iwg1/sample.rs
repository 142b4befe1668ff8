use chrono::{DateTime, Timelike, Utc};

/// One IWG1 instrument reading
///
/// Every numeric field is `None` when the instrument did not report it, so a
/// legitimate zero is never confused with absence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Observation time (UTC)
    pub time: DateTime<Utc>,
    /// Latitude in decimal degrees, north positive
    pub lat: Option<f64>,
    /// Longitude in decimal degrees, east positive
    pub lon: Option<f64>,
    /// Geometric altitude in metres (GPS MSL, else WGS-84)
    pub altitude_m: Option<f64>,
    /// Static pressure in hPa
    pub pressure_hpa: Option<f64>,
    /// Ambient temperature in °C
    pub temp_c: Option<f64>,
    /// Dew point in °C
    pub dew_point_c: Option<f64>,
    /// Wind speed in m/s
    pub wind_speed_ms: Option<f64>,
    /// Wind direction in degrees true (direction the wind blows from)
    pub wind_dir_deg: Option<f64>,
}

impl Sample {
    /// A sample at `time` with every measurement missing.
    pub fn empty(time: DateTime<Utc>) -> Self {
        Self {
            time,
            lat: None,
            lon: None,
            altitude_m: None,
            pressure_hpa: None,
            temp_c: None,
            dew_point_c: None,
            wind_speed_ms: None,
            wind_dir_deg: None,
        }
    }

    /// Whole seconds since UTC midnight.
    pub fn second_of_day(&self) -> u32 {
        self.time.num_seconds_from_midnight()
    }

    /// Direction and speed, only when both are present.
    pub fn wind(&self) -> Option<(f64, f64)> {
        Some((self.wind_dir_deg?, self.wind_speed_ms?))
    }
}
