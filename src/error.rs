use crate::models::message::ErrorResponse;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Deliberate fault returned by `/api/message`.
    #[error("{}", .0.error)]
    SimulatedFailure(ErrorResponse),

    /// Query string that could not be parsed, e.g. `iterations=abc`.
    #[error("invalid query string: {0}")]
    InvalidQuery(String),

    #[error("blocking task failed: {0}")]
    Blocking(String),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::SimulatedFailure(body) => HttpResponse::InternalServerError().json(body),
            _ => HttpResponse::InternalServerError().finish(),
        }
    }
}

impl From<actix_web::error::BlockingError> for ServiceError {
    fn from(err: actix_web::error::BlockingError) -> Self {
        ServiceError::Blocking(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_simulated_failure_renders_json_body() {
        let err = ServiceError::SimulatedFailure(ErrorResponse::simulated_failure(
            "backend-service",
            "pod-a",
            "req-1",
        ));
        assert_eq!(err.to_string(), "Random service failure for demo purposes");

        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["request_id"], "req-1");
        assert_eq!(json["instance"], "pod-a");
    }

    #[actix_web::test]
    async fn test_invalid_query_is_generic_server_error() {
        let err = ServiceError::InvalidQuery("iterations: invalid digit".to_string());
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body()).await.unwrap();
        assert!(body.is_empty());
    }
}
