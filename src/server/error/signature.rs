use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignatureError {
    /// A signature header required by the interactions endpoint is absent or not
    /// valid UTF-8.
    #[error("Interaction request is missing the {0} header")]
    MissingHeader(&'static str),

    /// The Ed25519 signature does not match the request timestamp and body.
    #[error("Interaction request signature does not match")]
    InvalidSignature,
}

/// Converts signature errors into HTTP responses.
///
/// Every variant maps to 401 Unauthorized with the plain-text body Discord expects
/// from an interactions endpoint that rejects a request.
impl IntoResponse for SignatureError {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, "Bad request signature").into_response()
    }
}
