use crate::config::ServiceConfig;
use crate::models::chain::ChainResult;
use actix_web::{HttpResponse, Responder, get, web};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct ChainQuery {
    next: Option<String>,
}

/// # Service Chain Endpoint
///
/// Without `next` (or with an empty one) this hop is the end of the chain.
/// With `next=NAME` the response marks this hop as intermediate and names
/// the next service. The next service is not called.
#[utoipa::path(
    get,
    path = "/api/chain",
    params(
        ("next" = Option<String>, Query, description = "Name of the next service in the chain")
    ),
    responses(
        (status = 200, description = "Position of this hop in the chain", body = ChainResult)
    ),
    tag = "Demo"
)]
#[get("/chain")]
pub async fn chain(
    query: web::Query<ChainQuery>,
    config: web::Data<ServiceConfig>,
) -> impl Responder {
    let body = match query.next.as_deref().filter(|next| !next.is_empty()) {
        Some(next) => ChainResult::intermediate(&config, next),
        None => ChainResult::terminal(&config),
    };
    HttpResponse::Ok().json(body)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(chain);
}
