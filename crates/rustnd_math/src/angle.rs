//! Angle helpers

/// One full turn in radians
pub const FULL_TURN: f64 = std::f64::consts::TAU;

/// Wrap an angle into `[0, 2π)`
///
/// Works for any number of wraparounds in either direction. Non-finite input maps
/// to 0.0 so a single bad frame cannot poison accumulated state.
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = angle.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 2π for tiny negative inputs
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}
