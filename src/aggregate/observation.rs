use chrono::{DateTime, Utc};
use rolling_stats::Stats;
use serde::Serialize;

use super::Bin;
use crate::iwg1::Sample;
use crate::wind::{peak_gust_knots, vector_mean_wind};

/// Reduced values of one non-empty bin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    /// Bin midpoint; the report line's time group
    pub time: DateTime<Utc>,
    pub sample_count: usize,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub altitude_m: Option<f64>,
    pub pressure_hpa: Option<f64>,
    pub temp_c: Option<f64>,
    pub dew_point_c: Option<f64>,
    /// Vector-mean wind direction, degrees true
    pub wind_dir_deg: Option<f64>,
    /// Vector-mean wind speed, m/s
    pub wind_speed_ms: Option<f64>,
    /// Peak trailing 10-second mean speed, knots
    pub peak_gust_kt: Option<f64>,
}

impl Observation {
    pub fn from_bin(bin: &Bin<'_>) -> Self {
        let samples = bin.samples;
        let wind = vector_mean_wind(samples.iter().filter_map(Sample::wind));
        let peak_gust_kt = peak_gust_knots(samples.iter().map(|s| (s.time, s.wind_speed_ms)));

        Self {
            time: bin.midpoint(),
            sample_count: samples.len(),
            lat: mean_of(samples, |s| s.lat),
            lon: mean_of(samples, |s| s.lon),
            altitude_m: mean_of(samples, |s| s.altitude_m),
            pressure_hpa: mean_of(samples, |s| s.pressure_hpa),
            temp_c: mean_of(samples, |s| s.temp_c),
            dew_point_c: mean_of(samples, |s| s.dew_point_c),
            wind_dir_deg: wind.map(|w| w.direction_deg),
            wind_speed_ms: wind.map(|w| w.speed),
            peak_gust_kt,
        }
    }
}

/// Arithmetic mean of the present values of one field.
fn mean_of<F>(samples: &[Sample], field: F) -> Option<f64>
where
    F: Fn(&Sample) -> Option<f64>,
{
    let mut stats: Stats<f64> = Stats::new();
    for value in samples.iter().filter_map(field) {
        stats.update(value);
    }
    (stats.count > 0).then_some(stats.mean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::{TimeDelta, TimeZone};

    fn sample(sec: i64) -> Sample {
        let base = Utc.with_ymd_and_hms(2024, 9, 15, 18, 0, 0).unwrap();
        Sample::empty(base + TimeDelta::seconds(sec))
    }

    fn bin(samples: &[Sample]) -> Bin<'_> {
        Bin {
            start: Utc.with_ymd_and_hms(2024, 9, 15, 18, 0, 0).unwrap(),
            length: TimeDelta::seconds(30),
            samples,
        }
    }

    #[test]
    fn test_means_ignore_missing() {
        let mut a = sample(1);
        a.lat = Some(25.0);
        a.temp_c = Some(10.0);
        let mut b = sample(2);
        b.lat = Some(26.0);
        let mut c = sample(3);
        c.lat = None;
        c.temp_c = Some(20.0);

        let obs = Observation::from_bin(&bin(&[a, b, c]));
        assert_eq!(obs.sample_count, 3);
        assert_abs_diff_eq!(obs.lat.unwrap(), 25.5, epsilon = 1e-12);
        assert_abs_diff_eq!(obs.temp_c.unwrap(), 15.0, epsilon = 1e-12);
        assert_eq!(obs.lon, None);
        assert_eq!(obs.pressure_hpa, None);
    }

    #[test]
    fn test_zero_is_a_value() {
        let mut a = sample(1);
        a.temp_c = Some(0.0);
        let obs = Observation::from_bin(&bin(&[a]));
        assert_eq!(obs.temp_c, Some(0.0));
    }

    #[test]
    fn test_wind_requires_both_fields() {
        let mut a = sample(1);
        a.wind_dir_deg = Some(90.0);
        let mut b = sample(2);
        b.wind_speed_ms = Some(12.0);

        let obs = Observation::from_bin(&bin(&[a, b]));
        assert_eq!(obs.wind_dir_deg, None);
        assert_eq!(obs.wind_speed_ms, None);
        // The gust only needs speeds
        assert!(obs.peak_gust_kt.is_some());
    }

    #[test]
    fn test_midpoint_time() {
        let obs = Observation::from_bin(&bin(&[sample(4)]));
        assert_eq!(obs.time, Utc.with_ymd_and_hms(2024, 9, 15, 18, 0, 15).unwrap());
    }
}
