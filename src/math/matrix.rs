use crate::math::vector::{add, scale};

/// Dense row-major matrix of `f64` with fixed, non-zero dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> anyhow::Result<Self> {
        anyhow::ensure!(rows > 0 && cols > 0, "matrix dimensions must be positive (got {}x{})", rows, cols);
        let len = rows
            .checked_mul(cols)
            .ok_or_else(|| anyhow::anyhow!("matrix {}x{} is too large", rows, cols))?;

        let mut data: Vec<f64> = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|e| anyhow::anyhow!("cannot allocate {}x{} matrix: {}", rows, cols, e))?;
        data.resize(len, 0.0);
        Ok(Self { rows, cols, data })
    }

    /// Build from nested rows. All rows must have the same, non-zero length.
    pub fn from_rows(rows: &[Vec<f64>]) -> anyhow::Result<Self> {
        let n_rows = rows.len();
        anyhow::ensure!(n_rows > 0, "matrix must have at least one row");
        let n_cols = rows[0].len();
        anyhow::ensure!(rows.iter().all(|r| r.len() == n_cols), "matrix rows must all have {} columns", n_cols);

        let mut m = Self::zeros(n_rows, n_cols)?;
        for (i, r) in rows.iter().enumerate() {
            m.data[i * n_cols..(i + 1) * n_cols].copy_from_slice(r);
        }
        Ok(m)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[self.index(i, j)]
    }

    pub fn set(&mut self, i: usize, j: usize, x: f64) {
        let idx = self.index(i, j);
        self.data[idx] = x;
    }

    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.rows, "row {} out of bounds ({} rows)", i, self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Exact symmetry check (`a[i][j] == a[j][i]`).
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 0..self.rows {
            for j in (i + 1)..self.cols {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// Freshly allocated copy of column `col`.
    pub fn column_vector(&self, col: usize) -> Vec<f64> {
        assert!(col < self.cols, "column {} out of bounds ({} cols)", col, self.cols);
        (0..self.rows).map(|i| self.data[i * self.cols + col]).collect()
    }

    fn index(&self, i: usize, j: usize) -> usize {
        assert!(i < self.rows && j < self.cols, "index ({}, {}) out of bounds for {}x{}", i, j, self.rows, self.cols);
        i * self.cols + j
    }
}

/// `out = A x`, accumulated as a weighted sum of A's columns.
pub fn matrix_vector_product_into(a: &Matrix, x: &[f64], out: &mut [f64]) {
    assert_eq!(x.len(), a.cols(), "input length must equal matrix cols");
    assert_eq!(out.len(), a.rows(), "output length must equal matrix rows");

    out.fill(0.0);
    for (j, &xj) in x.iter().enumerate() {
        let mut col = a.column_vector(j);
        scale(&mut col, xj);
        add(out, &col);
    }
}

/// In-place `v <- A v` for a square `A`.
pub fn matrix_vector_product(a: &Matrix, v: &mut [f64]) {
    assert!(a.is_square(), "in-place product needs a square matrix ({}x{})", a.rows(), a.cols());
    // the product overwrites its own input
    let v_copy = v.to_vec();
    matrix_vector_product_into(a, &v_copy, v);
}
