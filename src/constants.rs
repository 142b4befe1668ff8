//! Physical and format constants
//!
//! Standard-atmosphere reference values used by the altimetry corrections,
//! plus the fixed thresholds of the HDOB encoding.

/// Standard gravity (m/s²)
pub const G0: f64 = 9.80665;

/// Specific gas constant for dry air (J/(kg·K))
pub const R_DRY_AIR: f64 = 287.05;

/// Standard-atmosphere temperature lapse rate (K/m)
pub const LAPSE_RATE: f64 = 0.0065;

/// Standard sea-level pressure (hPa)
pub const P0_STD_HPA: f64 = 1013.25;

/// Standard sea-level temperature (K)
pub const T0_STD_K: f64 = 288.15;

/// Offset between Celsius and Kelvin
pub const CELSIUS_TO_KELVIN: f64 = 273.15;

/// Knots per metre-per-second
pub const KTS_PER_MPS: f64 = 1.9438444924406;

/// Length of the trailing gust window in seconds.
pub const GUST_WINDOW_SECS: i64 = 10;

/// Station pressures at or above this level (hPa) report extrapolated surface
/// pressure in the altimetry field; below it they report the D-value.
pub const ALTIMETRY_THRESHOLD_HPA: f64 = 550.0;

/// Added to negative D-values before the mod-10000 fold.
pub const D_VALUE_NEGATIVE_OFFSET: i64 = 5000;
