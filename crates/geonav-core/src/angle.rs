//! Normalization helpers for angles expressed in degrees.

/// Wraps an angle into `[0, 360)`.
///
/// Non-finite input is returned unchanged; callers reject it before normalizing.
#[must_use]
pub fn normalize_degrees_360(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Wraps a longitude into `[-180, 180]`.
///
/// Positive multiples of 180 map to `+180` and negative ones to `-180`, so both
/// antimeridian representations are fixed points.
#[must_use]
pub fn normalize_longitude(degrees: f64) -> f64 {
    // In-range values pass through untouched; shifting them by 180 loses bits.
    if (-180.0..=180.0).contains(&degrees) {
        return degrees;
    }
    let wrapped = (degrees + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 && degrees > 0.0 {
        180.0
    } else if wrapped >= 180.0 {
        -180.0
    } else {
        wrapped
    }
}

/// Clamps a latitude into `[-90, 90]`.
#[must_use]
pub fn clamp_latitude(degrees: f64) -> f64 {
    degrees.clamp(-90.0, 90.0)
}
