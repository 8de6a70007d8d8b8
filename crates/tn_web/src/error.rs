use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tn_core::Error;

/// Wraps the pipeline error for the HTTP surface: every failure becomes a
/// structured `{"error": …}` body with a status matching the error kind.
#[derive(Debug)]
pub struct ApiError(pub Error);

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::Validation(_) | Error::EmptyInput(_) => StatusCode::BAD_REQUEST,
            Error::ExternalService(_) => StatusCode::BAD_GATEWAY,
            Error::DegenerateVector(_) | Error::Embedding(_) | Error::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            tracing::error!("recommendation request failed: {}", self.0);
        } else {
            tracing::debug!("rejected request: {}", self.0);
        }

        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: Error) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn test_client_errors_map_to_400() {
        assert_eq!(
            status_of(Error::Validation("bad".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(Error::EmptyInput("empty".to_string())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_upstream_errors_map_to_502() {
        assert_eq!(
            status_of(Error::ExternalService("down".to_string())),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_internal_errors_map_to_500() {
        assert_eq!(
            status_of(Error::DegenerateVector("zero".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(Error::Embedding("broken".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
