use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::math::hilbert::fill_hilbert;
use crate::math::matrix::Matrix;
use crate::math::power::{EigenEstimate, PowerIteration};
use crate::math::vector::ones;

/// Dimensions and round count for one power iteration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub rows: usize,
    pub cols: usize,
    pub iterations: usize,
}

impl RunConfig {
    pub fn check(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.rows > 0, "rows must be >= 1");
        anyhow::ensure!(self.rows == self.cols, "hilbert matrix must be square (rows={} cols={})", self.rows, self.cols);
        Ok(())
    }

    /// Parse a `"rows cols iterations"` reply to the interactive prompt.
    pub fn parse_prompt_line(line: &str) -> anyhow::Result<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        anyhow::ensure!(
            fields.len() == 3,
            "expected 3 integers (rows cols iterations), got {} field(s)",
            fields.len()
        );
        let rows = parse_count("rows", fields[0])?;
        let cols = parse_count("cols", fields[1])?;
        let iterations = parse_count("iterations", fields[2])?;
        Ok(Self { rows, cols, iterations })
    }
}

fn parse_count(name: &str, field: &str) -> anyhow::Result<usize> {
    let v: i64 = field
        .parse()
        .map_err(|e| anyhow::anyhow!("{} is not an integer ({:?}): {}", name, field, e))?;
    anyhow::ensure!(v >= 0, "{} must be non-negative (got {})", name, v);
    Ok(v as usize)
}

/// Allocate the Hilbert matrix and all-ones vector described by `cfg` and
/// run the power method on them.
pub fn run(cfg: &RunConfig) -> anyhow::Result<EigenEstimate> {
    cfg.check()?;
    let mut matrix = Matrix::zeros(cfg.rows, cfg.cols)?;
    fill_hilbert(&mut matrix)?;

    debug!(rows = cfg.rows, iterations = cfg.iterations, "starting power iteration");
    let engine = PowerIteration::new(matrix)?;
    let out = engine.run(&ones(cfg.rows), cfg.iterations)?;
    debug!(eigenvalue = out.eigenvalue(), degenerate = out.is_degenerate(), "power iteration finished");
    Ok(out)
}
