use crate::math::matrix::Matrix;

/// Overwrite every entry of a square matrix with `1 / (i + j + 1)` (0-indexed).
pub fn fill_hilbert(m: &mut Matrix) -> anyhow::Result<()> {
    anyhow::ensure!(m.is_square(), "hilbert matrix must be square (got {}x{})", m.rows(), m.cols());
    let n = m.rows();
    for i in 0..n {
        for j in 0..n {
            m.set(i, j, 1.0 / (i + j + 1) as f64);
        }
    }
    Ok(())
}

/// The `n x n` Hilbert matrix.
pub fn hilbert(n: usize) -> anyhow::Result<Matrix> {
    let mut m = Matrix::zeros(n, n)?;
    fill_hilbert(&mut m)?;
    Ok(m)
}
