//! Axum server and routes.

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use sum_types::{coerce_int, ErrorResponse, SumRequest, SumResponse};
use tower_http::cors::CorsLayer;

pub fn router() -> Router {
    Router::new()
        .route("/sum_integers/", post(handle_sum_integers))
        .route("/health", get(handle_health))
        .layer(CorsLayer::permissive())
}

// Raw body, not Json<SumRequest>: malformed JSON collapses into the same
// 400 body as missing keys and uncoercible values.
async fn handle_sum_integers(body: Bytes) -> Response {
    let req: SumRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(_) => return invalid_integers(),
    };
    let (int_1, int_2) = match (coerce_int(req.int_1.as_ref()), coerce_int(req.int_2.as_ref())) {
        (Ok(a), Ok(b)) => (a, b),
        _ => return invalid_integers(),
    };
    let total = int_1 as i128 + int_2 as i128;
    Json(SumResponse { sum: total }).into_response()
}

fn invalid_integers() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::invalid_integers()),
    )
        .into_response()
}

async fn handle_health() -> &'static str {
    "ok"
}
