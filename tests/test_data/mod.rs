//! Synthetic IWG1 input for integration tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeDelta, TimeZone, Utc};

/// Fields written into a synthetic IWG1 record; `None` leaves the field empty.
#[derive(Debug, Clone, Copy)]
pub struct Row {
    pub time: DateTime<Utc>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub gps_alt: Option<f64>,
    pub wgs_alt: Option<f64>,
    pub temp: Option<f64>,
    pub dew: Option<f64>,
    pub press: Option<f64>,
    pub wspd: Option<f64>,
    pub wdir: Option<f64>,
}

impl Row {
    /// Steady flight at 700 hPa in a westerly.
    pub fn steady(time: DateTime<Utc>) -> Self {
        Self {
            time,
            lat: Some(25.5),
            lon: Some(-80.25),
            gps_alt: Some(3050.0),
            wgs_alt: Some(3070.0),
            temp: Some(12.3),
            dew: Some(-1.5),
            press: Some(700.4),
            wspd: Some(10.0),
            wdir: Some(270.0),
        }
    }

    pub fn to_line(&self) -> String {
        let mut fields = vec![String::new(); 33];
        fields[0] = "IWG1".to_string();
        fields[1] = self.time.format("%Y-%m-%dT%H:%M:%S%.3f").to_string();
        for (idx, value) in [
            (2, self.lat),
            (3, self.lon),
            (4, self.gps_alt),
            (5, self.wgs_alt),
            (20, self.temp),
            (21, self.dew),
            (23, self.press),
            (26, self.wspd),
            (27, self.wdir),
        ] {
            if let Some(v) = value {
                fields[idx] = v.to_string();
            }
        }
        fields.join(",")
    }
}

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 15, 18, 0, 0).unwrap()
}

pub fn at(seconds: i64) -> DateTime<Utc> {
    base_time() + TimeDelta::seconds(seconds)
}

/// Steady-flight rows at the given second offsets from the base time.
pub fn steady_rows(offsets: impl IntoIterator<Item = i64>) -> Vec<Row> {
    offsets.into_iter().map(|s| Row::steady(at(s))).collect()
}

pub fn to_text(rows: &[Row]) -> String {
    rows.iter().map(|r| r.to_line() + "\n").collect()
}
