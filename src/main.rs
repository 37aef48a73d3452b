use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use portal_front::controllers::{home::HomeController, pages::PagesController};
use portal_front::domain::blog::{BlogSummary, FeedSummaryService};
use portal_front::domain::pages::{
    ContentLocationResolver, LocaleFetch, PageContentFetcher, PageService, TieredPageCache,
};
use portal_front::domain::resources::{ResourceRepository, TaggedResourceResolver};
use portal_front::infrastructure::cache::MokaCacheStore;
use portal_front::infrastructure::config::{Config, LogFormat};
use portal_front::infrastructure::db::{check_connection, create_pool, run_migrations};
use portal_front::infrastructure::http::{build_router, start_http_server};
use portal_front::infrastructure::remote::HttpRemoteClient;
use portal_front::infrastructure::repositories::PgResourceRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        "Starting portal front on {}:{}",
        config.host,
        config.port
    );

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    // Verify database connection
    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    if config.feed_url_template.is_none() {
        tracing::warn!("FEED_URL_TEMPLATE not set, the home page will have no blog post");
    }
    if config.pages_repo_name.is_none() {
        tracing::warn!("PAGES_REPO_NAME not set, every page will be not found");
    }

    let pool = Arc::new(pool);
    let config = Arc::new(config);
    let localization = config.localization();

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories and remote clients
    tracing::info!("Instantiating repositories...");
    let resource_repo: Arc<dyn ResourceRepository> = Arc::new(PgResourceRepository::new(pool.clone()));
    let remote_client = Arc::new(HttpRemoteClient::new(config.remote_timeout())?);

    // 2. Instantiate caches
    let summary_cache = Arc::new(MokaCacheStore::<BlogSummary>::with_capacity(
        config.feed_cache_capacity,
    ));
    let page_cache = TieredPageCache::new(
        Arc::new(MokaCacheStore::<LocaleFetch>::unbounded()),
        Arc::new(MokaCacheStore::<String>::unbounded()),
        config.page_cache_ttl(),
    );

    // 3. Instantiate services
    tracing::info!("Instantiating services...");
    let feed_service = Arc::new(FeedSummaryService::new(
        remote_client.clone(),
        summary_cache,
        config.feed_settings(),
    ));
    let page_fetcher = PageContentFetcher::new(
        ContentLocationResolver::new(config.pages_settings(), remote_client.clone()),
        remote_client,
        page_cache,
    );
    let page_service = Arc::new(PageService::new(
        page_fetcher,
        TaggedResourceResolver::new(resource_repo.clone()),
    ));

    // 4. Instantiate controllers
    tracing::info!("Instantiating controllers...");
    let home_controller = Arc::new(HomeController::new(feed_service, localization.clone()));
    let pages_controller = Arc::new(PagesController::new(page_service, localization));

    // Start HTTP server with all routes
    let app = build_router(resource_repo, home_controller, pages_controller);
    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "portal_front=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
