//! Image reference matching

use openapi_server::Image;

use crate::cli::ControlPlane;
use crate::errors::GatewayError;

/// Strip any registry/namespace prefix: `reg.io/ns/app:v1` becomes `app:v1`
pub fn image_basename(reference: &str) -> &str {
    match reference.rfind('/') {
        Some(idx) => &reference[idx + 1..],
        None => reference,
    }
}

/// Whether `reference` names one of `images` by `name:tag`
pub fn contains_image(images: &[Image], reference: &str) -> bool {
    let wanted = image_basename(reference);
    images.iter().any(|image| image.reference() == wanted)
}

/// Look `reference` up in the platform registry
pub async fn image_exists(
    control_plane: &dyn ControlPlane,
    reference: &str,
) -> Result<bool, GatewayError> {
    let images = control_plane.list_images().await?;
    Ok(contains_image(&images, reference))
}
