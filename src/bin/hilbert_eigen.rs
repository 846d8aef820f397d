use std::io::{BufRead, Write};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use hilbert_eigen::config::RunConfig;
use hilbert_eigen::io::debug_log::write_power_debug_log;
use hilbert_eigen::io::print::{format_estimate, format_matrix};
use hilbert_eigen::math::hilbert::hilbert;
use hilbert_eigen::math::power::PowerIteration;
use hilbert_eigen::math::vector::ones;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let print_matrix = std::env::var("HILBERT_PRINT_MATRIX").map(|v| v == "1").unwrap_or(false);
    let log_dir = std::env::var("HILBERT_LOG_DIR").ok();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write!(out, "How many rows, how many columns and how many iterations: ")?;
    out.flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line).context("failed to read from stdin")?;
    let cfg = RunConfig::parse_prompt_line(&line)?;
    cfg.check()?;

    let matrix = hilbert(cfg.rows)?;
    if print_matrix {
        write!(out, "{}", format_matrix(&matrix))?;
    }

    let engine = PowerIteration::new(matrix)?;
    let mut v = ones(cfg.rows);
    let mut estimates = Vec::new();
    let mut write_err = None;
    engine.run_with(&mut v, cfg.iterations, |_, mu| {
        if write_err.is_none() {
            write_err = writeln!(out, "{}", format_estimate(mu)).err();
        }
        if log_dir.is_some() {
            estimates.push(mu);
        }
    })?;
    if let Some(e) = write_err {
        return Err(e).context("failed to write estimate");
    }

    if let Some(dir) = log_dir {
        let run_id = format!("{}x{}-{}", cfg.rows, cfg.cols, cfg.iterations);
        let path = write_power_debug_log(&dir, &run_id, &cfg, &estimates)?;
        tracing::info!(path = %path.display(), "wrote debug log");
    }

    Ok(())
}
