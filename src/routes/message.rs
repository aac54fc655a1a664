use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::models::message::{ErrorResponse, MessageResponse};
use crate::simulation::{FaultInjector, millis_rounded};
use actix_web::{HttpRequest, HttpResponse, get, web};
use chrono::Utc;
use tracing::{info, warn};

pub const REQUEST_ID_HEADER: &str = "X-Request-ID";
pub const SOURCE_HEADER: &str = "X-Source";

/// Header bytes outside visible ASCII are decoded lossily rather than dropped,
/// so a supplied value is always echoed.
fn header_value(req: &HttpRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}

/// # Message Endpoint
///
/// 1. Sleeps for a random 100-500 ms without blocking the worker
/// 2. Reads `X-Request-ID` (default `req-<unix seconds>`) and `X-Source`
///    (default `unknown`)
/// 3. Fails with `500` and an [`ErrorResponse`] on roughly 10% of calls
/// 4. Otherwise answers with a [`MessageResponse`]
///
/// [`ErrorResponse`]: crate::models::message::ErrorResponse
/// [`MessageResponse`]: crate::models::message::MessageResponse
#[utoipa::path(
    get,
    path = "/api/message",
    params(
        ("X-Request-ID" = Option<String>, Header, description = "Trace id echoed in the response"),
        ("X-Source" = Option<String>, Header, description = "Name of the calling service")
    ),
    responses(
        (status = 200, description = "Message with processing metadata", body = MessageResponse),
        (status = 500, description = "Injected failure", body = ErrorResponse)
    ),
    tag = "Demo"
)]
#[get("/message")]
pub async fn message(
    req: HttpRequest,
    config: web::Data<ServiceConfig>,
    injector: web::Data<dyn FaultInjector>,
) -> Result<HttpResponse, ServiceError> {
    let delay = injector.processing_delay();
    tokio::time::sleep(delay).await;

    let request_id = header_value(&req, REQUEST_ID_HEADER)
        .unwrap_or_else(|| format!("req-{}", Utc::now().timestamp()));
    let source = header_value(&req, SOURCE_HEADER).unwrap_or_else(|| "unknown".to_string());

    if injector.should_fail() {
        warn!(request_id = %request_id, source = %source, "injected service failure");
        return Err(ServiceError::SimulatedFailure(ErrorResponse::simulated_failure(
            &config.service_name,
            &config.instance_id,
            &request_id,
        )));
    }

    info!(
        request_id = %request_id,
        source = %source,
        elapsed = %format!("{:.3}s", delay.as_secs_f64()),
        "request processed"
    );

    Ok(HttpResponse::Ok().json(MessageResponse::new(
        &config,
        millis_rounded(delay),
        request_id,
        source,
    )))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(message);
}
