/// Mean wind over a bin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanWind {
    /// Direction the wind blows from, degrees true in [0, 360)
    pub direction_deg: f64,
    /// Speed in the input units
    pub speed: f64,
}

/// Vector-mean wind of `(direction_deg, speed)` pairs.
///
/// Each pair is decomposed into `u = -s·sin(d)`, `v = -s·cos(d)`; the
/// components are averaged and recombined. Returns `None` for no pairs.
pub fn vector_mean_wind<I>(winds: I) -> Option<MeanWind>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut u = 0.0;
    let mut v = 0.0;
    let mut n = 0usize;

    for (dir_deg, speed) in winds {
        let rad = dir_deg.to_radians();
        u += -speed * rad.sin();
        v += -speed * rad.cos();
        n += 1;
    }

    if n == 0 {
        return None;
    }

    u /= n as f64;
    v /= n as f64;

    let speed = u.hypot(v);
    let direction_deg = ((-u).atan2(-v).to_degrees() + 360.0) % 360.0;

    Some(MeanWind {
        direction_deg,
        speed,
    })
}
