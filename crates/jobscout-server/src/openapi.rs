use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Jobscout API",
        version = "0.2.0",
        description = "Multi-source job search aggregator with relevance filtering."
    ),
    paths(crate::routes::search, crate::routes::sites, crate::routes::health,),
    components(schemas(
        crate::dto::SearchRequestDto,
        crate::dto::SearchResponse,
        crate::dto::SearchMeta,
        crate::dto::JobDto,
        crate::dto::SourceStatusDto,
        crate::dto::SitesResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "search", description = "Job search aggregation"),
        (name = "system", description = "Health and system status"),
    )
)]
pub struct ApiDoc;
