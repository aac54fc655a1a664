use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::models::load::{DEFAULT_ITERATIONS, LoadResult, sum_of_squares};
use crate::simulation::millis_rounded;
use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use std::time::Instant;
use tracing::{debug, warn};

/// `iterations` must be a plain signed 64-bit integer. Padded values such as
/// `" 5"`, digit separators such as `1_000`, and out-of-range numbers are
/// rejected as malformed.
#[derive(Deserialize, Debug)]
pub struct LoadQuery {
    iterations: Option<i64>,
}

/// Maps query strings that fail to parse to a plain `500`.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| {
        warn!(path = %req.path(), error = %err, "rejected query string");
        ServiceError::InvalidQuery(err.to_string()).into()
    })
}

/// # Load Simulation Endpoint
///
/// Sums `i * i` over `0..iterations` on the blocking thread pool and reports
/// how long it took. `iterations` defaults to `1000` and has no upper bound.
#[utoipa::path(
    get,
    path = "/api/load",
    params(
        ("iterations" = Option<i64>, Query, description = "Loop length, defaults to 1000")
    ),
    responses(
        (status = 200, description = "Computation result and timing", body = LoadResult),
        (status = 500, description = "Malformed iterations value")
    ),
    tag = "Demo"
)]
#[get("/load")]
pub async fn load(
    query: web::Query<LoadQuery>,
    config: web::Data<ServiceConfig>,
) -> Result<HttpResponse, ServiceError> {
    let iterations = query.iterations.unwrap_or(DEFAULT_ITERATIONS);

    let (result, elapsed) = web::block(move || {
        let started = Instant::now();
        let result = sum_of_squares(iterations);
        (result, started.elapsed())
    })
    .await?;

    debug!(iterations, elapsed_ms = elapsed.as_secs_f64() * 1000.0, "load simulated");

    Ok(HttpResponse::Ok().json(LoadResult::new(
        &config,
        iterations,
        result,
        millis_rounded(elapsed),
    )))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(load);
}
