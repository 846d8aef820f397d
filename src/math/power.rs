use tracing::trace;

use crate::math::matrix::{matrix_vector_product, Matrix};
use crate::math::vector::{max_abs, scale};

/// Result of a fixed-length power iteration run.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenEstimate {
    /// One estimate per round, oldest first (`iterations + 1` entries).
    pub estimates: Vec<f64>,
    /// Working vector after the final product (not rescaled).
    pub eigenvector: Vec<f64>,
}

impl EigenEstimate {
    pub fn eigenvalue(&self) -> f64 {
        self.estimates.last().copied().unwrap_or(f64::NAN)
    }

    /// True if any round produced a zero or non-finite estimate. Once that
    /// happens the rescale divides by zero and later rounds are NaN/inf.
    pub fn is_degenerate(&self) -> bool {
        self.estimates.iter().any(|mu| *mu == 0.0 || !mu.is_finite())
    }
}

/// Power method with max-component rescaling and a fixed round count.
pub struct PowerIteration {
    matrix: Matrix,
}

impl PowerIteration {
    pub fn new(matrix: Matrix) -> anyhow::Result<Self> {
        anyhow::ensure!(
            matrix.is_square(),
            "power iteration needs a square matrix (got {}x{})",
            matrix.rows(),
            matrix.cols()
        );
        Ok(Self { matrix })
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn size(&self) -> usize {
        self.matrix.rows()
    }

    /// Runs `iterations + 1` rounds on `v` in place, handing each estimate to
    /// `on_estimate` as it is produced, and returns the last one.
    ///
    /// Each round computes `v <- A v`, takes `mu = max|v_i|`, and, unless it
    /// is the last round, rescales `v` by `1 / mu`. A zero `mu` is not guarded.
    pub fn run_with<F>(&self, v: &mut [f64], iterations: usize, mut on_estimate: F) -> anyhow::Result<f64>
    where
        F: FnMut(usize, f64),
    {
        anyhow::ensure!(
            v.len() == self.size(),
            "vector length {} does not match matrix size {}",
            v.len(),
            self.size()
        );

        let mut round = 0;
        loop {
            matrix_vector_product(&self.matrix, v);
            let mu = max_abs(v);
            trace!(round, mu, "power iteration estimate");
            on_estimate(round, mu);

            if round == iterations {
                return Ok(mu);
            }
            scale(v, 1.0 / mu);
            round += 1;
        }
    }

    /// Collects every estimate for a run starting from `initial`.
    pub fn run(&self, initial: &[f64], iterations: usize) -> anyhow::Result<EigenEstimate> {
        let mut v = initial.to_vec();
        let mut estimates = Vec::with_capacity(iterations.saturating_add(1).min(1 << 20));
        self.run_with(&mut v, iterations, |_, mu| estimates.push(mu))?;
        Ok(EigenEstimate { estimates, eigenvector: v })
    }
}
