use crate::config::ServiceConfig;
use crate::models::health::HealthStatus;
use actix_web::{HttpResponse, Responder, get, web};

/// # Health Check Endpoint
///
/// Liveness probe for the mesh. There is no failure path.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "backend-service",
///   "version": "1.0.0",
///   "instance": "backend-v1-5d8f7c9b4-x2x7q",
///   "timestamp": "2023-10-05T12:34:56.789+00:00"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health(config: web::Data<ServiceConfig>) -> impl Responder {
    HttpResponse::Ok().json(HealthStatus::healthy(&config))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use chrono::DateTime;
    use serde_json::from_str;

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ServiceConfig::with_instance("pod-h")))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let content_type = resp
            .headers()
            .get("content-type")
            .expect("Content-Type header should be present");
        assert_eq!(content_type, "application/json");

        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).unwrap();
        let status: HealthStatus = from_str(body_str).unwrap();

        assert_eq!(status.status, "healthy");
        assert_eq!(status.service, "backend-service");
        assert_eq!(status.version, "1.0.0");
        assert_eq!(status.instance, "pod-h");
        DateTime::parse_from_rfc3339(&status.timestamp)
            .expect("Timestamp should be a valid RFC 3339 / ISO 8601 date");
    }

    #[actix_web::test]
    async fn test_health_is_stable_across_calls() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ServiceConfig::with_instance("pod-h")))
                .configure(configure_routes),
        )
        .await;

        for _ in 0..20 {
            let req = test::TestRequest::get().uri("/health").to_request();
            let status: HealthStatus = test::call_and_read_body_json(&app, req).await;
            assert_eq!(status.status, "healthy");
            assert_eq!(status.version, "1.0.0");
        }
    }
}
