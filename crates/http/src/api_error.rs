//! Typed API error for HTTP handlers.
//!
//! Validation failures and "already exists"/"not found" outcomes never get
//! here: handlers render them as normal pages. What remains are storage and
//! rendering failures.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use contact_list_service::ServiceError;

/// Handler error with HTTP status code.
///
/// `Internal` logs the real error server-side and returns a static page to
/// the client.
#[derive(Debug)]
pub enum ApiError {
    /// 500 Internal Server Error: storage or rendering failure.
    Internal(anyhow::Error),
    /// 503 Service Unavailable: the database did not hand out a connection in time.
    ServiceUnavailable(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            },
            Self::ServiceUnavailable(err) => {
                tracing::warn!(error = ?err, "service unavailable");
                (StatusCode::SERVICE_UNAVAILABLE, "service temporarily unavailable")
            },
        };
        let body = format!(
            "<!DOCTYPE html><html><head><title>{code}</title></head>\
             <body><h1>{code}</h1><p>{message}</p><p><a href=\"/\">Back</a></p></body></html>",
            code = status.as_u16(),
        );
        (status, Html(body)).into_response()
    }
}

impl From<tera::Error> for ApiError {
    fn from(err: tera::Error) -> Self {
        Self::Internal(anyhow::Error::new(err).context("template rendering failed"))
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        if err.is_transient() {
            Self::ServiceUnavailable(err.into())
        } else {
            Self::Internal(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contact_list_storage::StorageError;

    #[test]
    fn storage_failure_is_internal() {
        let err: ApiError =
            ServiceError::Storage(StorageError::Migration("boom".to_owned())).into();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn pool_timeout_is_unavailable() {
        let err: ApiError =
            ServiceError::Storage(StorageError::Database(sqlx_pool_timeout())).into();
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    fn sqlx_pool_timeout() -> sqlx::Error {
        sqlx::Error::PoolTimedOut
    }
}
