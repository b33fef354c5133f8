//! Validate-then-send submission shared by every form.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::future::Future;

use super::validation::FieldError;
use crate::net::error::ApiError;

/// A form's in-progress values.
pub trait FormDraft {
    /// Request body built from a valid draft.
    type Payload;

    /// Every rule the current values break; empty when submittable.
    fn validate(&self) -> Vec<FieldError>;

    fn payload(&self) -> Self::Payload;
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SubmitError {
    /// Client-side validation failed; no request was issued.
    #[error("{} field(s) need attention", .0.len())]
    Invalid(Vec<FieldError>),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SubmitError {
    /// Inline message for the form's error banner. Invalid drafts show no
    /// banner because the fields themselves are highlighted.
    pub fn banner(&self) -> Option<String> {
        match self {
            Self::Invalid(_) => None,
            Self::Api(err) => Some(err.user_message()),
        }
    }

    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Invalid(errors) => errors,
            Self::Api(_) => &[],
        }
    }
}

/// Validate `draft`; only if it passes, call `send` exactly once.
///
/// # Errors
///
/// `Invalid` when validation fails, `Api` when `send` fails.
pub async fn submit<D, F, Fut, T>(draft: &D, send: F) -> Result<T, SubmitError>
where
    D: FormDraft,
    F: FnOnce(D::Payload) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let errors = draft.validate();
    if !errors.is_empty() {
        return Err(SubmitError::Invalid(errors));
    }
    Ok(send(draft.payload()).await?)
}
