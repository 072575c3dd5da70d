//! Route handlers, one module per resource.

use axum::http::{Method, Uri};
use serde::Deserialize;

use crate::error::ApiError;

pub mod categories;
pub mod questions;
pub mod quizzes;

/// `?page=N` query parameter. Missing means the first page.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: Option<usize>,
}

impl PageParams {
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1)
    }
}

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NoRoute(uri.path().to_string())
}

/// Fallback for known paths requested with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
