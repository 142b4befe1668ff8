pub mod gust;
pub mod vector_mean;

pub use gust::{TimedWindow, peak_gust_knots};
pub use vector_mean::{MeanWind, vector_mean_wind};
