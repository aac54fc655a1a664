use actix_web::{App, HttpServer, middleware, web};
use mesh_demo_backend::config::ServiceConfig;
use mesh_demo_backend::openapi::ApiDoc;
use mesh_demo_backend::routes;
use mesh_demo_backend::simulation::{FaultInjector, ThreadRngInjector};
use std::io;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Mesh Demo Backend Entry Point
///
/// Loads settings from the environment (and `.env` if present), then serves
/// the demo routes on `0.0.0.0:$PORT` with permissive CORS.
///
/// # Endpoints
/// - `GET /health`
/// - `GET /api/message`, `GET /api/load`, `GET /api/chain`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();

    let config = ServiceConfig::from_env()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .init();

    info!(
        service = %config.service_name,
        version = %config.version,
        instance = %config.instance_id,
        port = config.port,
        debug = config.debug,
        "starting"
    );

    let port = config.port;
    let debug = config.debug;
    let config = web::Data::new(config);
    let injector: web::Data<dyn FaultInjector> =
        web::Data::from(Arc::new(ThreadRngInjector) as Arc<dyn FaultInjector>);

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(middleware::Condition::new(debug, middleware::Logger::default()))
            .wrap(routes::cors())
            .app_data(config.clone())
            .app_data(injector.clone())
            .configure(routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
