//! HTTP request handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use openapi_server::{
    App, CreateDeployRequest, CreateDeployResponse, CreateReleaseArgs, CreateReleaseResponse,
    DeleteDeployRequest, Deploy, Flavor, HealthResponse, Image, Instance, PushImageRequest,
    Region, Release, VersionResponse,
};
use tracing::{debug, info};

use crate::errors::GatewayError;
use crate::mapper::image::image_exists;
use crate::mapper::release::{apply_defaults, ReleaseStage};
use crate::server::extract::{AppName, QueryParams, StrictJson};
use crate::server::state::ServerState;
use crate::utils::version_info;

type HandlerResult<T> = Result<T, GatewayError>;

/// Health check handler
pub async fn health_handler() -> impl IntoResponse {
    let version = version_info();
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "qappgw".to_string(),
        version: version.version,
    })
}

/// Version handler
pub async fn version_handler() -> impl IntoResponse {
    let version = version_info();
    Json(VersionResponse {
        version: version.version,
        git_hash: version.git_hash,
        build_time: version.build_time,
    })
}

// ================================= IMAGES ==================================== //

pub async fn list_images_handler(
    State(state): State<Arc<ServerState>>,
) -> HandlerResult<Json<Vec<Image>>> {
    info!("Handling list images");
    Ok(Json(state.control_plane.list_images().await?))
}

/// Push an image to the platform registry unless it is already there
pub async fn push_image_handler(
    State(state): State<Arc<ServerState>>,
    StrictJson(req): StrictJson<PushImageRequest>,
) -> HandlerResult<StatusCode> {
    info!("Handling push image");

    if req.image.is_empty() {
        return Err(GatewayError::BadRequest("empty image".to_string()));
    }

    if image_exists(state.control_plane.as_ref(), &req.image).await? {
        debug!("Image {} already in registry, skipping push", req.image);
        return Ok(StatusCode::OK);
    }

    state.build_host.ensure_image(&req.image).await?;
    state.control_plane.push_image(&req.image).await?;

    info!("Pushed image {}", req.image);
    Ok(StatusCode::OK)
}

// ================================= CATALOG =================================== //

pub async fn list_apps_handler(
    State(state): State<Arc<ServerState>>,
) -> HandlerResult<Json<Vec<App>>> {
    info!("Handling list apps");
    Ok(Json(state.control_plane.list_apps().await?))
}

pub async fn list_flavors_handler(
    State(state): State<Arc<ServerState>>,
) -> HandlerResult<Json<Vec<Flavor>>> {
    info!("Handling list flavors");
    Ok(Json(state.control_plane.list_flavors().await?))
}

pub async fn list_regions_handler(
    State(state): State<Arc<ServerState>>,
) -> HandlerResult<Json<Vec<Region>>> {
    info!("Handling list regions");
    Ok(Json(state.control_plane.list_regions().await?))
}

// ================================ RELEASES =================================== //

pub async fn list_releases_handler(
    State(state): State<Arc<ServerState>>,
    AppName(app): AppName,
) -> HandlerResult<Json<Vec<Release>>> {
    info!("Handling list releases of {}", app);
    Ok(Json(state.control_plane.list_releases(&app).await?))
}

/// Create a release from an image already in the registry.
///
/// The release YAML is staged in a temporary directory that is removed once
/// `qappctl` returns, whatever the outcome.
pub async fn create_release_handler(
    State(state): State<Arc<ServerState>>,
    AppName(app): AppName,
    StrictJson(mut args): StrictJson<CreateReleaseArgs>,
) -> HandlerResult<Json<CreateReleaseResponse>> {
    info!("Handling create release of {}", app);

    apply_defaults(&mut args);

    if args.image.is_empty() {
        return Err(GatewayError::BadRequest("empty image".to_string()));
    }
    if !image_exists(state.control_plane.as_ref(), &args.image).await? {
        return Err(GatewayError::BadRequest(format!(
            "image '{}' does not exist, please upload it first",
            args.image
        )));
    }

    let stage = ReleaseStage::prepare(&args).await?;
    let created = state.control_plane.create_release(&app, stage.path()).await;
    stage.close();
    created?;

    info!("Created release {} of {}", args.name, app);
    Ok(Json(CreateReleaseResponse { name: args.name }))
}

// ================================= DEPLOYS =================================== //

/// List deploys in a region, optionally narrowed to one release
pub async fn list_deploys_handler(
    State(state): State<Arc<ServerState>>,
    AppName(app): AppName,
    query: QueryParams,
) -> HandlerResult<Json<Vec<Deploy>>> {
    info!("Handling list deploys of {}", app);

    let region = query.require("region")?;
    let deploys = state.control_plane.list_deploys(&app, region).await?;

    let deploys = match query.first("release") {
        Some(release) => deploys
            .into_iter()
            .filter(|deploy| deploy.release == release)
            .collect(),
        None => deploys,
    };
    Ok(Json(deploys))
}

pub async fn create_deploy_handler(
    State(state): State<Arc<ServerState>>,
    AppName(app): AppName,
    StrictJson(req): StrictJson<CreateDeployRequest>,
) -> HandlerResult<Json<CreateDeployResponse>> {
    info!("Handling create deploy of {}", app);

    if req.region.is_empty() || req.release.is_empty() {
        return Err(GatewayError::BadRequest(
            "empty region or release".to_string(),
        ));
    }

    let deploy = state
        .control_plane
        .create_deploy(&app, &req.release, &req.region, req.replicas)
        .await?;

    info!("Created deploy {} of {} in {}", deploy.id, app, req.region);
    Ok(Json(CreateDeployResponse { id: deploy.id }))
}

pub async fn delete_deploy_handler(
    State(state): State<Arc<ServerState>>,
    AppName(app): AppName,
    StrictJson(req): StrictJson<DeleteDeployRequest>,
) -> HandlerResult<StatusCode> {
    info!("Handling delete deploy of {}", app);

    if req.region.is_empty() || req.id.is_empty() {
        return Err(GatewayError::BadRequest("empty region or ID".to_string()));
    }

    state
        .control_plane
        .delete_deploy(&app, &req.id, &req.region)
        .await?;

    info!("Deleted deploy {} of {}", req.id, app);
    Ok(StatusCode::OK)
}

pub async fn list_instances_handler(
    State(state): State<Arc<ServerState>>,
    AppName(app): AppName,
    Path((_, deploy)): Path<(String, String)>,
    query: QueryParams,
) -> HandlerResult<Json<Vec<Instance>>> {
    info!("Handling list instances of {} deploy {}", app, deploy);

    let region = query.require("region")?;
    Ok(Json(
        state
            .control_plane
            .list_instances(&app, &deploy, region)
            .await?,
    ))
}
