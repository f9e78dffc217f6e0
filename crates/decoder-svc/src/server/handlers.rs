//! Axum request handlers for all service endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::{
    protocol::{
        CipherListResponse, DecodeResponse, EncodeResponse, ErrorResponse, HealthResponse,
        TransformRequest,
    },
    DecodeError,
};
use engine::CipherSpec;
use tracing::debug;

use super::state::AppState;

/// `POST /decode` — decode `text` with the named cipher.
///
/// Engine errors map to the status of their kind (404 unknown cipher, 422
/// invalid parameter or encoding, 500 anything else). Bodies that fail to
/// parse get a `bad_request` [`ErrorResponse`] with the rejection's status.
pub async fn decode(
    State(state): State<AppState>,
    payload: Result<Json<TransformRequest>, JsonRejection>,
) -> Response {
    let req = match accept(&state, payload) {
        Ok(req) => req,
        Err(resp) => return resp,
    };
    match engine::decode_named(&req.cipher, &req.text, &req.params) {
        Ok(plaintext) => {
            let body = DecodeResponse {
                cipher: req.cipher,
                plaintext,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            debug!(cipher = %req.cipher, kind = %e.kind(), "decode failed");
            error_response(&e)
        }
    }
}

/// `POST /encode` — encode `text` with the named cipher.
pub async fn encode(
    State(state): State<AppState>,
    payload: Result<Json<TransformRequest>, JsonRejection>,
) -> Response {
    let req = match accept(&state, payload) {
        Ok(req) => req,
        Err(resp) => return resp,
    };
    match engine::encode_named(&req.cipher, &req.text, &req.params) {
        Ok(ciphertext) => {
            let body = EncodeResponse {
                cipher: req.cipher,
                ciphertext,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            debug!(cipher = %req.cipher, kind = %e.kind(), "encode failed");
            error_response(&e)
        }
    }
}

/// `GET /ciphers` — every registered cipher and its parameters, in registry order.
pub async fn ciphers() -> Json<CipherListResponse> {
    Json(CipherListResponse {
        ciphers: engine::list_ciphers().iter().map(CipherSpec::to_info).collect(),
    })
}

/// `GET /health` — liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        ciphers_loaded: engine::list_ciphers().len(),
    })
}

/// Catch-all 404 handler.
pub async fn not_found() -> impl IntoResponse {
    let err = ErrorResponse::new("not_found", "the requested resource does not exist");
    (StatusCode::NOT_FOUND, Json(err))
}

/// Unwrap a parsed request body and enforce the text length limit.
fn accept(
    state: &AppState,
    payload: Result<Json<TransformRequest>, JsonRejection>,
) -> Result<TransformRequest, Response> {
    let Json(req) = payload.map_err(|rejection| {
        debug!(status = %rejection.status(), "request body rejected");
        let err = ErrorResponse::new("bad_request", rejection.body_text());
        (rejection.status(), Json(err)).into_response()
    })?;
    check_text_len(state, &req.text)?;
    Ok(req)
}

fn check_text_len(state: &AppState, text: &str) -> Result<(), Response> {
    let len = text.chars().count();
    if len > state.max_text_len {
        let err = ErrorResponse::new(
            "payload_too_large",
            format!("text is {len} characters; the limit is {}", state.max_text_len),
        );
        return Err((StatusCode::PAYLOAD_TOO_LARGE, Json(err)).into_response());
    }
    Ok(())
}

fn error_response(e: &DecodeError) -> Response {
    let status = StatusCode::from_u16(e.kind().http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::from(e))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::post, Router};
    use std::time::Duration;
    use tower::ServiceExt;

    fn test_router(max_text_len: usize) -> Router {
        Router::new()
            .route("/decode", post(decode))
            .with_state(AppState::new(max_text_len, Duration::from_secs(5)))
    }

    fn decode_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/decode")
            .header("content-type", "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    #[tokio::test]
    async fn decode_returns_plaintext() {
        let app = test_router(64);
        let req = decode_request(r#"{"cipher":"rot13","text":"URYYB JBEYQ"}"#);
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn overlong_text_is_413() {
        let app = test_router(4);
        let req = decode_request(r#"{"cipher":"rot13","text":"URYYB"}"#);
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn text_limit_counts_characters() {
        let app = test_router(4);
        // 4 characters, 8 bytes.
        let req = decode_request(r#"{"cipher":"reverse_text","text":"жжжж"}"#);
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[test]
    fn error_response_uses_kind_status() {
        let resp = error_response(&DecodeError::unknown_cipher("enigma"));
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let resp = error_response(&DecodeError::invalid_encoding("Invalid Hex"));
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let resp = error_response(&DecodeError::decoding("boom"));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
