use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::infrastructure::config::Config;
use crate::{
    controllers::{health, home::HomeController, pages::PagesController},
    domain::resources::ResourceRepository,
    infrastructure::middleware::request_id_middleware,
};

/// Build the application router with all routes configured
pub fn build_router(
    resource_repo: Arc<dyn ResourceRepository>,
    home_controller: Arc<HomeController>,
    pages_controller: Arc<PagesController>,
) -> Router {
    let home_routes = Router::new()
        .route("/:lang/home", get(HomeController::home))
        .with_state(home_controller);

    let pages_routes = Router::new()
        .route("/:lang/pages/*slug", get(PagesController::show_page))
        .with_state(pages_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(resource_repo)
        .merge(home_routes)
        .merge(pages_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Serve `app` on the configured address until the process stops
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
