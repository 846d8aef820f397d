/// In-place elementwise sum: `v[i] += w[i]`.
pub fn add(v: &mut [f64], w: &[f64]) {
    assert_eq!(v.len(), w.len(), "vector lengths must match");
    for (a, b) in v.iter_mut().zip(w) {
        *a += b;
    }
}

/// In-place scaling: `v[i] *= c`. No special casing for zero or infinite `c`.
pub fn scale(v: &mut [f64], c: f64) {
    for x in v.iter_mut() {
        *x *= c;
    }
}

/// Largest absolute component of `v`, seeded with `|v[0]|`.
///
/// A later component only wins when it is strictly greater, so a NaN in the
/// seed position is returned as-is and NaNs elsewhere are skipped.
pub fn max_abs(v: &[f64]) -> f64 {
    assert!(!v.is_empty(), "max_abs of an empty vector");
    let mut max = v[0].abs();
    for x in &v[1..] {
        if max < x.abs() {
            max = x.abs();
        }
    }
    max
}

/// All-ones starting vector for power iteration.
pub fn ones(len: usize) -> Vec<f64> {
    vec![1.0; len]
}
