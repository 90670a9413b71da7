
/// Snaps a value to zero when its magnitude does not exceed the given threshold, values strictly
/// above the threshold are passed through untouched.
///
pub fn apply_threshold(value: f64, threshold: f64) -> f64 {
    if libm::fabs(value) <= threshold {
        return 0.0;
    }
    value
}

/// Compare two floats with an absolute tolerance.
///
#[inline]
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    libm::fabs(a - b) <= tol
}
