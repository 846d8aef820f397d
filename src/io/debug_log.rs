use anyhow::Context;

use crate::config::RunConfig;
use crate::io::print::format_estimate;

/// Write the estimate stream of one run to `<out_dir>/power_<run_id>.txt`.
pub fn write_power_debug_log(
    out_dir: impl AsRef<std::path::Path>,
    run_id: &str,
    cfg: &RunConfig,
    estimates: &[f64],
) -> anyhow::Result<std::path::PathBuf> {
    use std::io::Write;

    anyhow::ensure!(
        estimates.len() == cfg.iterations + 1,
        "expected {} estimates, got {}",
        cfg.iterations + 1,
        estimates.len()
    );

    std::fs::create_dir_all(out_dir.as_ref()).context("create logs dir failed")?;
    let path = out_dir.as_ref().join(format!("power_{}.txt", run_id));
    let mut f = std::fs::File::create(&path)
        .with_context(|| format!("create debug log file failed (path={:?})", path))?;

    writeln!(f, "run_id={}", run_id)?;
    writeln!(f, "rows={}", cfg.rows)?;
    writeln!(f, "cols={}", cfg.cols)?;
    writeln!(f, "iterations={}", cfg.iterations)?;
    writeln!(f)?;
    writeln!(f, "iteration,estimate")?;

    for (i, mu) in estimates.iter().enumerate() {
        writeln!(f, "{},{}", i, format_estimate(*mu))?;
    }

    Ok(path)
}
