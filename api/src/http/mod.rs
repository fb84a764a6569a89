//! HTTP service

use salvo::prelude::*;
use tracing::trace;

use crate::{config::AppConfig, svc::sandbox::SandboxService};

pub mod actions;
pub mod page;

/// Initializes the router
pub fn init_router(cfg: &AppConfig) -> Router {
    // init the services
    let sandbox_service = SandboxService::new(&cfg.sandbox);

    Router::new()
        .hoop(salvo::affix::inject(cfg.clone()))
        .hoop(salvo::affix::inject(sandbox_service))
        .get(page::demo_page)
        .push(Router::with_path("/health").get(healthcheck))
        .push(
            Router::with_path("/sandbox")
                .push(Router::with_path("/users").post(actions::create_user))
                .push(Router::with_path("/cards").post(actions::create_card))
                .push(Router::with_path("/transfers").post(actions::transfer)),
        )
}

/// Initializes the service
pub fn init_service(cfg: &AppConfig) -> Service {
    let router = init_router(cfg);

    // add the OpenAPI routes
    let openapi = gen_openapi_specs(&router);
    let router = router
        .push(openapi.into_router("/openapi"))
        .push(SwaggerUi::new("/openapi").into_router("/openapi/ui"));

    Service::new(router)
}

/// Generates the OpenAPI specs
pub fn gen_openapi_specs(router: &Router) -> OpenApi {
    let version = env!("CARGO_PKG_VERSION");
    OpenApi::new("Bankdemo Api", version).merge_router(router)
}

/// Performs a health check
#[endpoint]
#[tracing::instrument(skip_all)]
pub async fn healthcheck() -> &'static str {
    trace!("healthcheck");
    "API is up"
}
