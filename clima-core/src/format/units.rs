use crate::model::Kilometers;

const HPA_PER_ATM: f64 = 1013.0;

/// Round to the nearest integer, halves going toward positive infinity.
pub fn round_half_up(x: f64) -> i64 {
    let floor = x.floor();
    let rounded = if x - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

pub fn hpa_to_atm(hpa: f64) -> f64 {
    hpa / HPA_PER_ATM
}

/// m/s to whole km/h.
pub fn mps_to_kmh(speed: f64) -> i64 {
    round_half_up(speed * 3.6)
}

/// Whole kilometers when exact, otherwise two decimals.
pub fn meters_to_km(meters: f64) -> Kilometers {
    let km = meters / 1000.0;
    if km.is_finite() && km.fract() == 0.0 {
        Kilometers::Whole(km as i64)
    } else {
        Kilometers::Fractional((km * 100.0).round() / 100.0)
    }
}
