use crate::calculator::{Calculator, Number, Operation, OperationError};
use crate::config::Config;
use crate::error::Result;
use crate::observability::{self, Outcome};
use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use hyper::Server;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

const INDEX_HTML: &str = include_str!("../templates/index.html");

/// Returned when a finite pair of operands overflows to infinity
pub const OUT_OF_RANGE_MESSAGE: &str = "Result is out of range.";

#[derive(Clone)]
pub struct AppState {
    pub calculator: Arc<Calculator>,
}

/// Body of every operation request. Operands stay raw JSON here so the
/// calculator's own validation decides what counts as a number.
#[derive(Debug, Deserialize)]
pub struct OperandsRequest {
    pub a: Value,
    pub b: Value,
}

#[derive(Debug, Serialize)]
pub struct ResultResponse {
    pub result: Number,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    observability::metrics::health_checked();
    Json(serde_json::json!({
        "status": "ok",
        "message": "Calculator is running",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Interactive calculator page
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Prometheus scrape endpoint
async fn metrics_page() -> Response {
    match observability::render() {
        Some(text) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            text,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "metrics disabled").into_response(),
    }
}

/// HTTP status for a failed operation. The two kinds must stay distinguishable.
pub fn status_for(err: &OperationError) -> StatusCode {
    match err {
        OperationError::DivisionByZero => StatusCode::BAD_REQUEST,
        OperationError::InvalidOperand => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

fn calculate(state: &AppState, op: Operation, req: OperandsRequest) -> Response {
    match state.calculator.evaluate(op, &req.a, &req.b) {
        Ok(result) if !result.is_finite() => {
            observability::record_operation(op, Outcome::OutOfRange);
            warn!(operation = %op, a = %req.a, b = %req.b, "{} result out of range: {}", op.label(), result);
            let body = ErrorResponse {
                error: OUT_OF_RANGE_MESSAGE.to_string(),
            };
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
        Ok(result) => {
            observability::record_operation(op, Outcome::Success);
            (StatusCode::OK, Json(ResultResponse { result })).into_response()
        }
        Err(err) => {
            observability::record_operation(op, Outcome::from(&err));
            match err {
                OperationError::DivisionByZero => warn!(operation = %op, "Division error: {}", err),
                OperationError::InvalidOperand => error!(operation = %op, "{} failed: {}", op.label(), err),
            }
            let body = ErrorResponse {
                error: err.to_string(),
            };
            (status_for(&err), Json(body)).into_response()
        }
    }
}

/// Create the HTTP router with the page, health, metrics and one POST route per operation
pub fn create_server(calculator: Arc<Calculator>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let mut router: Router<AppState> = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/metrics", get(metrics_page));

    for op in Operation::ALL {
        router = router.route(
            &format!("/{}", op.as_str()),
            post(
                move |State(state): State<AppState>, Json(req): Json<OperandsRequest>| async move {
                    calculate(&state, op, req)
                },
            ),
        );
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(AppState { calculator })
}

/// Start the HTTP server and run until Ctrl-C
pub async fn start_server(config: &Config, calculator: Arc<Calculator>) -> Result<()> {
    let addr = config.socket_addr()?;
    let app = create_server(calculator);

    let server = Server::try_bind(&addr)?.serve(app.into_make_service());

    info!(%addr, "HTTP server listening");
    println!("🚀 Calculator running on http://{addr}");
    println!("💚 Health check: http://{addr}/health");
    if config.metrics.enabled {
        println!("📈 Metrics:      http://{addr}/metrics");
    }

    server.with_graceful_shutdown(shutdown_signal()).await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
