use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::header::CONTENT_TYPE,
    http::Method,
    routing::{get, post},
    BoxError, Router,
};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
};
use tracing_subscriber::EnvFilter;

use crate::{
    app::{env::Envy, errors::DefaultApiError},
    assets::store::AssetStore,
    backend::service::{BackendClient, StyleTransferApi},
    results::store::ResultStore,
    styles::service::StyleCatalog,
    transfer::{client::TransferClient, store::JobStore},
};

mod app;
mod assets;
mod backend;
mod education;
mod results;
mod styles;
mod transfer;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub styles: Arc<StyleCatalog>,
    pub backend: Arc<dyn StyleTransferApi>,
    pub transfer: Arc<TransferClient>,
    pub assets: Arc<AssetStore>,
    pub jobs: Arc<JobStore>,
    pub results: Arc<ResultStore>,
}

impl AppState {
    pub fn new(envy: Envy, styles: StyleCatalog, backend: Arc<dyn StyleTransferApi>) -> Self {
        let assets = Arc::new(AssetStore::new());
        let transfer = TransferClient::new(backend.clone(), assets.clone())
            .with_polling(envy.poll_interval(), envy.max_poll_attempts());

        Self {
            envy: Arc::new(envy),
            styles: Arc::new(styles),
            backend,
            transfer: Arc::new(transfer),
            assets,
            jobs: Arc::new(JobStore::new()),
            results: Arc::new(ResultStore::new()),
        }
    }

    #[cfg(test)]
    pub fn for_tests(backend: Arc<dyn StyleTransferApi>) -> Self {
        let styles = StyleCatalog::embedded().unwrap();
        Self::new(app::env::tests::test_envy(), styles, backend)
    }
}

pub fn router(state: AppState) -> Router {
    let max_upload_bytes = state.envy.max_upload_bytes();

    Router::new()
        .route("/", get(app::controller::get_root))
        // styles
        .route("/styles", get(styles::controller::get_styles))
        // transfer
        .route("/transfer", post(transfer::controller::create_transfer))
        .route("/jobs/:id", get(transfer::controller::get_job_by_id))
        .route(
            "/jobs/:id/progress",
            get(transfer::controller::get_job_progress),
        )
        .route("/jobs/:id/cancel", post(transfer::controller::cancel_job))
        // results
        .route("/results/:id", get(results::controller::get_result_by_id))
        .route(
            "/results/:id/education",
            get(results::controller::get_education),
        )
        .route("/results/:id/toggle", post(results::controller::toggle_info))
        .route(
            "/results/:id/download",
            get(results::controller::download_result),
        )
        .route("/results/:id/reset", post(results::controller::reset_result))
        // assets
        .route("/assets/:id", get(assets::controller::get_asset_by_id))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_upload_bytes))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));

    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    tracing::info!("starting in {}", envy.app_env);

    let styles = match StyleCatalog::embedded() {
        Ok(styles) => styles,
        Err(e) => panic!("failed to load style catalog: {:#?}", e),
    };
    tracing::info!("loaded {} styles", styles.all().len());

    // properties
    let port = envy.port();
    let backend = Arc::new(BackendClient::new(&envy.backend_url));
    if envy.mock_transfer() {
        tracing::warn!("mock transfer enabled, the backend will not be called for transfers");
    }
    tracing::info!("using backend {}", envy.backend_url);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET]);

    let state = AppState::new(envy, styles, backend);
    app::util::janitor::spawn(state.clone());

    // app
    let app = router(state).layer(cors).layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(|err: BoxError| async move {
                tracing::error!("unhandled service error: {}", err);
                DefaultApiError::InternalServerError.value()
            }))
            .layer(BufferLayer::new(1024))
            .layer(RateLimitLayer::new(20, Duration::from_secs(1))),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!("server error: {}", e);
    }
}
