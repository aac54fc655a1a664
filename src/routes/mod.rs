use actix_cors::Cors;
use actix_web::web;

/// # Health Check Endpoint
///
/// `GET /health`, always `200 OK` with status `"healthy"` and the identity of
/// the replica that answered.
pub mod health;

/// # Message Endpoint
///
/// `GET /api/message` with injected latency and a 10% chance of a
/// deliberate `500`. Echoes `X-Request-ID` and `X-Source`.
pub mod message;

/// # Load Simulation Endpoint
///
/// `GET /api/load?iterations=N`, CPU-bound sum of squares.
pub mod load;

/// # Service Chain Endpoint
///
/// `GET /api/chain?next=NAME`, reports the position in a simulated call chain.
pub mod chain;


/// # API Route Configuration
///
/// Mounts the health probe at the root and the demo endpoints under `/api`.
///
/// ```text
/// GET /health
/// GET /api/message
/// GET /api/load?iterations=1000
/// GET /api/chain?next=svc2
/// ```
///
/// Handlers expect `web::Data<ServiceConfig>` and `web::Data<dyn FaultInjector>`
/// to be registered on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes).service(
        web::scope("/api")
            .app_data(load::query_config())
            .configure(message::configure_routes)
            .configure(load::configure_routes)
            .configure(chain::configure_routes),
    );
}

/// Cross-origin policy applied to every response: any origin, method and header.
pub fn cors() -> Cors {
    Cors::permissive()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::ServiceConfig;
    use crate::simulation::FaultInjector;
    use actix_web::body::{BoxBody, EitherBody};
    use actix_web::dev::ServiceResponse;
    use actix_web::{App, test, web};
    use std::sync::Arc;

    pub const TEST_INSTANCE: &str = "backend-test-0";

    pub async fn create_test_app(
        injector: Arc<dyn FaultInjector>,
    ) -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = ServiceResponse<EitherBody<BoxBody>>,
        Error = actix_web::Error,
    > {
        test::init_service(
            App::new()
                .wrap(super::cors())
                .app_data(web::Data::new(ServiceConfig::with_instance(TEST_INSTANCE)))
                .app_data(web::Data::from(injector))
                .configure(super::configure),
        )
        .await
    }
}
