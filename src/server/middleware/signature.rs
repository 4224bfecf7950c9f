//! Request signature guard for the interactions endpoint.
//!
//! Discord signs every interaction with the application's Ed25519 key over the
//! timestamp header followed by the raw body. Requests failing the check must be
//! answered with 401 or Discord disables the endpoint.

use axum::http::HeaderMap;
use serenity::interactions_endpoint::Verifier;

use crate::server::error::{signature::SignatureError, AppError};

pub const SIGNATURE_HEADER: &str = "X-Signature-Ed25519";
pub const TIMESTAMP_HEADER: &str = "X-Signature-Timestamp";

pub struct SignatureGuard<'a> {
    verifier: &'a Verifier,
}

impl<'a> SignatureGuard<'a> {
    pub fn new(verifier: &'a Verifier) -> Self {
        Self { verifier }
    }

    /// Verifies the signature headers against the raw request body.
    ///
    /// # Returns
    /// - `Ok(())` - The request was signed with the application's key
    /// - `Err(AppError::SignatureErr)` - A header is missing or the signature is invalid
    pub fn require(&self, headers: &HeaderMap, body: &[u8]) -> Result<(), AppError> {
        let signature = header(headers, SIGNATURE_HEADER)?;
        let timestamp = header(headers, TIMESTAMP_HEADER)?;

        self.verifier
            .verify(signature, timestamp, body)
            .map_err(|_| SignatureError::InvalidSignature)?;

        Ok(())
    }
}

fn header<'h>(headers: &'h HeaderMap, name: &'static str) -> Result<&'h str, SignatureError> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .ok_or(SignatureError::MissingHeader(name))
}
