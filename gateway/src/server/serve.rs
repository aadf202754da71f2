//! HTTP server setup

use std::future::Future;
use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::app::options::ServerOptions;
use crate::errors::GatewayError;
use crate::server::handlers::{
    create_deploy_handler, create_release_handler, delete_deploy_handler, health_handler,
    list_apps_handler, list_deploys_handler, list_flavors_handler, list_images_handler,
    list_instances_handler, list_regions_handler, list_releases_handler, push_image_handler,
    version_handler,
};
use crate::server::state::ServerState;

/// Build the gateway routes
pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        // Health and version
        .route("/health", get(health_handler))
        .route("/version", get(version_handler))
        // Registry
        .route("/images", get(list_images_handler).post(push_image_handler))
        // Catalog
        .route("/apps", get(list_apps_handler))
        .route("/flavors", get(list_flavors_handler))
        .route("/regions", get(list_regions_handler))
        // Releases
        .route(
            "/apps/{app}/releases",
            get(list_releases_handler).post(create_release_handler),
        )
        // Deploys
        .route(
            "/apps/{app}/deploys",
            get(list_deploys_handler)
                .post(create_deploy_handler)
                .delete(delete_deploy_handler),
        )
        .route(
            "/apps/{app}/deploys/{deploy}/instances",
            get(list_instances_handler),
        )
        // State and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn serve(
    options: &ServerOptions,
    state: Arc<ServerState>,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<JoinHandle<Result<(), GatewayError>>, GatewayError> {
    let app = router(state);

    let addr = options.bind_addr();
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| GatewayError::ServerError(format!("bind {}: {}", addr, e)))?;

    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| GatewayError::ServerError(e.to_string()))
    });

    Ok(handle)
}
