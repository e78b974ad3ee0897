//! clip-processor — HTTP microservice that validates and normalizes clip payloads.
//!
//! Endpoints:
//! - `GET /health` liveness probe.
//! - `POST /api/process-clip` normalizes a clip (slug, duration estimate,
//!   canonical URL). Success is `200 {"data": ...}`, a rejected payload is
//!   `422 {"message": ...}`, and a body that is not JSON is `400`.
//!
//! Run:
//! ```bash
//! # pretty logs (default); PORT optional
//! cargo run -p clip-processor
//!
//! # JSON logs on another port
//! LOG_FORMAT=json PORT=8080 cargo run -p clip-processor
//! ```
//!
//! Configuration: See `config.rs` for all environment variables.
//!

mod config;

use std::net::SocketAddr;

use axum::http::HeaderValue;
use axum::{
    body::Bytes,
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

#[tokio::main]
async fn main() {
    // Load and validate config first (fail fast on misconfiguration)
    let cfg = match config::Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&cfg);
    cfg.warn_if_permissive();

    let app = build_app(&cfg);

    let addr = SocketAddr::new(cfg.bind_addr, cfg.port);
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    info!(%addr, "clip-processor listening");
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("server error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(cfg: &config::Config) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);
    match cfg.log_format {
        config::LogFormat::Json => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(fmt::time::SystemTime)
                        .with_writer(std::io::stdout),
                )
                .init();
        }
        config::LogFormat::Pretty => {
            registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_writer(std::io::stdout),
                )
                .init();
        }
    }
}

/// Routes plus the request-id, tracing, body-limit and CORS layers.
fn build_app(cfg: &config::Config) -> Router {
    // Request ID header name
    let x_request_id = axum::http::HeaderName::from_static("x-request-id");

    let app = routes()
        .layer(DefaultBodyLimit::max(cfg.max_body_bytes))
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        )
        .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid));

    // CORS - already validated in Config::from_env()
    let cors = if cfg.cors_allow_origin == HeaderValue::from_static("*") {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list([cfg.cors_allow_origin.clone()]))
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([axum::http::header::CONTENT_TYPE])
    };
    app.layer(cors)
}

fn routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/process-clip", post(process_clip))
        .fallback(not_found)
}

async fn health() -> impl IntoResponse {
    Json(Health { status: "ok" })
}

async fn process_clip(body: Bytes) -> impl IntoResponse {
    // An empty body is an empty object; malformed JSON never reaches the
    // normalizer.
    let payload: Value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Object(serde_json::Map::new())
    } else {
        match serde_json::from_slice(&body) {
            Ok(v) => v,
            Err(e) => {
                warn!(err = %e, "malformed json body");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(http_common::json_error_with_message(
                        "bad_request",
                        "Request body is not valid JSON.",
                    )),
                )
                    .into_response();
            }
        }
    };

    match domain::process_clip(&payload) {
        Ok(clip) => {
            info!(
                slug = %clip.slug,
                status = clip.status.as_str(),
                source_host = clip.metadata.source_host.as_deref().unwrap_or("-"),
                duration_s = clip.estimated_duration_seconds,
                "clip processed"
            );
            (StatusCode::OK, Json(http_common::json_data(&clip))).into_response()
        }
        Err(e) => {
            warn!(kind = e.kind(), "clip rejected");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(http_common::json_message(e.message())),
            )
                .into_response()
        }
    }
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(http_common::json_err("not_found")),
    )
}
