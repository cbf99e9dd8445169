pub mod handlers;
mod types;

pub use handlers::AppState;
pub use types::{AskRequest, AskResponse, ErrorResponse, HealthResponse, UploadResponse};

use crate::{
    Error, Result,
    assistant::{QuestionAnswerer, Uploader},
    aws,
    config::{Config, CorsConfig},
    inference::create_inference_client,
    storage::create_object_store,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
};
use std::net::SocketAddr;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    let sdk_config = aws::load_sdk_config(&config.aws).await;

    let store = create_object_store(&config.storage, &sdk_config);
    let client = create_inference_client(&config.inference, &sdk_config);

    let app_state = AppState {
        uploader: Uploader::new(store),
        answerer: QuestionAnswerer::new(client, &config.inference),
    };

    let app = router(app_state, &config.server.cors)?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the application router, mounting the routes both at the root and under `/api`.
pub fn router(state: AppState, cors: &CorsConfig) -> Result<Router> {
    Ok(Router::new()
        .merge(routes())
        .nest("/api", routes())
        .layer(cors_layer(cors)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/upload",
            post(handlers::upload).layer(DefaultBodyLimit::disable()),
        )
        .route("/ask", post(handlers::ask))
        .route("/health", get(handlers::health))
}

/// Credentialed CORS for the configured origins. Methods and headers are mirrored
/// from the request since wildcards are not allowed alongside credentials.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|e| Error::config(format!("Invalid CORS origin '{}': {}", origin, e)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
