//! Fixed age and duration bucket taxonomies.

/// Age bucket boundaries: half-open intervals (lo, hi].
pub const AGE_BOUNDS: [f64; 6] = [0.0, 20.0, 40.0, 60.0, 80.0, f64::INFINITY];

/// Age bucket labels, aligned with [`AGE_BOUNDS`] windows.
pub const AGE_LABELS: [&str; 5] = ["≤20", "21-40", "41-60", "61-80", ">80"];

/// Treatment-duration bucket boundaries: half-open intervals (lo, hi].
pub const DURATION_BOUNDS: [f64; 5] = [-1.0, 2.0, 5.0, 10.0, 100.0];

/// Duration bucket labels, aligned with [`DURATION_BOUNDS`] windows.
pub const DURATION_LABELS: [&str; 4] = ["≤2 anos", "3-5 anos", "6-10 anos", ">10 Anos"];

/// Index of the half-open bucket (bounds[i], bounds[i+1]] containing `value`,
/// or None when the value falls outside every bucket.
pub fn bucket_index(value: f64, bounds: &[f64]) -> Option<usize> {
    bounds
        .windows(2)
        .position(|window| value > window[0] && value <= window[1])
}
