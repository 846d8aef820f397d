use std::net::SocketAddr;

use axum::{http::StatusCode, response::IntoResponse, routing::{get, post}, Json, Router};
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hilbert_eigen::config::{run, RunConfig};

#[derive(Debug, Serialize)]
struct RunResponse {
    return_code: i32,
    rows: usize,
    iterations: usize,
    estimates: Vec<f64>,
    eigenvalue: f64,
    eigenvector: Vec<f64>,
    degenerate: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8000);

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/power_iteration", post(power_iteration));

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn healthz() -> impl IntoResponse {
    Json(json!({"ok": true}))
}

async fn power_iteration(Json(cfg): Json<RunConfig>) -> impl IntoResponse {
    if let Err(e) = cfg.check() {
        warn!(error = %e, "rejected run config");
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"return_code": 1, "error": format!("invalid run config: {e}")})),
        )
            .into_response();
    }

    // CPU-bound for large sizes/round counts
    let join = tokio::task::spawn_blocking(move || run(&cfg));

    match join.await {
        Ok(Ok(est)) => {
            // NaN/inf are not representable in JSON; they serialize as null
            let resp = RunResponse {
                return_code: 0,
                rows: cfg.rows,
                iterations: cfg.iterations,
                eigenvalue: est.eigenvalue(),
                degenerate: est.is_degenerate(),
                estimates: est.estimates,
                eigenvector: est.eigenvector,
            };
            (StatusCode::OK, Json(resp)).into_response()
        }
        Ok(Err(e)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({"return_code": 1, "error": format!("{e:#}")})),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"return_code": 2, "error": format!("join error: {e}")})),
        )
            .into_response(),
    }
}
