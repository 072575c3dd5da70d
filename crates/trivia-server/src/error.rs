//! API error type and its mapping onto HTTP responses.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use trivia_core::TriviaError;

use crate::envelope::Envelope;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Trivia(#[from] TriviaError),

    #[error("invalid JSON body: {}", .0.body_text())]
    Json(#[from] JsonRejection),

    #[error("invalid query string: {}", .0.body_text())]
    Query(#[from] QueryRejection),

    #[error("invalid path: {}", .0.body_text())]
    Path(#[from] PathRejection),

    #[error("no route for {0}")]
    NoRoute(String),

    #[error("method {method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Trivia(TriviaError::OutOfRange { .. }) => StatusCode::RANGE_NOT_SATISFIABLE,
            ApiError::Trivia(
                TriviaError::QuestionNotFound(_)
                | TriviaError::CategoryNotFound(_)
                | TriviaError::Validation(_),
            ) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Json(rejection) => rejection.status(),
            ApiError::Query(_) | ApiError::Path(_) => StatusCode::BAD_REQUEST,
            ApiError::NoRoute(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(%status, "request failed: {self}");
        } else {
            warn!(%status, "request rejected: {self}");
        }

        Envelope::with_status(status, json!({ "error": self.to_string() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivia_errors_map_to_statuses() {
        let cases = [
            (
                TriviaError::OutOfRange {
                    start: 20,
                    total: 12,
                },
                StatusCode::RANGE_NOT_SATISFIABLE,
            ),
            (
                TriviaError::QuestionNotFound(1),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                TriviaError::CategoryNotFound(1),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                TriviaError::validation("bad"),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }

    #[test]
    fn no_route_is_not_found() {
        let response = ApiError::NoRoute("/nope".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn wrong_method_is_method_not_allowed() {
        let err = ApiError::MethodNotAllowed {
            method: "PUT".into(),
            path: "/questions".into(),
        };
        assert_eq!(err.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.to_string(), "method PUT not allowed for /questions");
    }
}
