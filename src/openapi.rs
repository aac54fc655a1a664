use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// handlers and served at `/api-docs/openapi.json`, with Swagger UI at
/// `/swagger-ui/`.
///
/// # Endpoints
/// - Health Check: `GET /health`
/// - Demo: `GET /api/message`, `GET /api/load`, `GET /api/chain`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::message::message,
        crate::routes::load::load,
        crate::routes::chain::chain,
    ),
    components(
        schemas(
            crate::models::health::HealthStatus,
            crate::models::message::MessageResponse,
            crate::models::message::Metadata,
            crate::models::message::ErrorResponse,
            crate::models::load::LoadResult,
            crate::models::chain::ChainResult,
            crate::models::chain::ChainPosition
        )
    ),
    tags(
        (name = "Health Check", description = "Liveness probe for the mesh"),
        (name = "Demo", description = "Latency, fault injection, load and chaining demos")
    ),
    info(
        description = "Backend service for service-mesh traffic demos",
        title = "Mesh Demo Backend",
        version = "1.0.0",
    )
)]
pub struct ApiDoc;
