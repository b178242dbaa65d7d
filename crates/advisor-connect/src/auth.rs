//! Operator identity at the service boundary.
//!
//! Authentication itself is an external collaborator; callers arrive with an already
//! authenticated identity carried in the `x-operator-email` header. This module only
//! decides whether that identity may review advisor applications.

use axum::http::HeaderMap;

pub const OPERATOR_EMAIL_HEADER: &str = "x-operator-email";

/// Authenticated identity extracted from request headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorIdentity {
    pub email: String,
}

/// Errors raised while gating review endpoints.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("missing operator identity header")]
    MissingIdentity,
    #[error("operator '{email}' is not permitted to review applications")]
    Forbidden { email: String },
}

/// Gate comparing the caller identity against the configured reviewer.
#[derive(Debug, Clone)]
pub struct ReviewerGate {
    reviewer_email: String,
}

impl ReviewerGate {
    pub fn new(reviewer_email: impl Into<String>) -> Self {
        Self {
            reviewer_email: reviewer_email.into(),
        }
    }

    pub fn reviewer_email(&self) -> &str {
        &self.reviewer_email
    }

    /// Extract the caller identity and check it against the reviewer allow-list.
    pub fn authorize(&self, headers: &HeaderMap) -> Result<OperatorIdentity, AuthError> {
        let email = headers
            .get(OPERATOR_EMAIL_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(AuthError::MissingIdentity)?;

        if !email.eq_ignore_ascii_case(&self.reviewer_email) {
            return Err(AuthError::Forbidden {
                email: email.to_string(),
            });
        }

        Ok(OperatorIdentity {
            email: email.to_string(),
        })
    }
}
