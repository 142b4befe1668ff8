//! Standard-atmosphere altimetry
//!
//! Pure functions converting between pressure and altitude. Nothing here
//! panics or errors: results that would be undefined come back as `None`.

use crate::constants::{CELSIUS_TO_KELVIN, G0, LAPSE_RATE, P0_STD_HPA, R_DRY_AIR, T0_STD_K};

/// Standard-atmosphere altitude (m) for a pressure (hPa), floored at 0.
///
/// `z = (T0 / L) * (1 - (p / p0)^(R·L / g0))`
pub fn altitude_from_pressure(pressure_hpa: f64) -> f64 {
    let exponent = (R_DRY_AIR * LAPSE_RATE) / G0;
    let z = (T0_STD_K / LAPSE_RATE) * (1.0 - (pressure_hpa / P0_STD_HPA).powf(exponent));
    z.max(0.0)
}

/// D-value: measured altitude minus the standard-atmosphere altitude of the
/// measured pressure, rounded to whole metres.
pub fn d_value(altitude_m: Option<f64>, pressure_hpa: Option<f64>) -> Option<i64> {
    let d = altitude_m? - altitude_from_pressure(pressure_hpa?);
    d.is_finite().then(|| d.round_ties_even() as i64)
}

/// Extrapolate flight-level pressure down to the reference level with the
/// hypsometric equation.
///
/// The layer mean temperature is `T_z + ½·L·z`, where `T_z` is the measured
/// temperature or, when absent, the standard-atmosphere temperature at the
/// pressure altitude. Returns `None` when the mean temperature is not positive.
pub fn extrapolate_surface_pressure(
    pressure_hpa: f64,
    altitude_m: f64,
    temp_c: Option<f64>,
) -> Option<f64> {
    let t_z = match temp_c {
        Some(t) => t + CELSIUS_TO_KELVIN,
        None => T0_STD_K - LAPSE_RATE * altitude_from_pressure(pressure_hpa),
    };
    let t_mean = t_z + 0.5 * LAPSE_RATE * altitude_m;
    if t_mean <= 0.0 {
        return None;
    }

    let p0 = pressure_hpa * (G0 * altitude_m / (R_DRY_AIR * t_mean)).exp();
    p0.is_finite().then_some(p0)
}
