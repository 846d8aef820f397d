use std::fmt::Write;

use crate::math::matrix::Matrix;

/// One row as tab-terminated `{:.4}` cells followed by a newline.
pub fn format_row(row: &[f64]) -> String {
    let mut s = String::new();
    for x in row {
        let _ = write!(s, "{:.4}\t", x);
    }
    s.push('\n');
    s
}

/// Every row of `m`, then a blank line.
pub fn format_matrix(m: &Matrix) -> String {
    let mut s = String::new();
    for i in 0..m.rows() {
        s.push_str(&format_row(m.row(i)));
    }
    s.push('\n');
    s
}

pub fn format_estimate(mu: f64) -> String {
    format!("{:.6}", mu)
}
