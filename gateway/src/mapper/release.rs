//! Release configuration staging

use std::path::Path;

use chrono::{DateTime, Local, TimeZone};
use openapi_server::CreateReleaseArgs;
use tempfile::TempDir;
use tracing::{debug, warn};

use crate::errors::GatewayError;

/// File name `qappctl release create` looks for in the config directory
pub const RELEASE_FILE_NAME: &str = "dora.yaml";

const STAGE_DIR_PREFIX: &str = "qapp-release-yml";

/// Release name derived from a point in time: `v` + `YYMMDD-HHMMSS`
pub fn release_name_at<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("v%y%m%d-%H%M%S").to_string()
}

/// Fill in the fields the caller may leave out
pub fn apply_defaults(args: &mut CreateReleaseArgs) {
    if args.name.is_empty() {
        args.name = release_name_at(&Local::now());
    }
}

pub fn encode_release(args: &CreateReleaseArgs) -> Result<String, GatewayError> {
    Ok(serde_yaml::to_string(args)?)
}

/// A temporary config directory holding the release YAML.
///
/// The directory and everything in it is removed when the stage is dropped.
pub struct ReleaseStage {
    dir: TempDir,
}

impl ReleaseStage {
    pub async fn prepare(args: &CreateReleaseArgs) -> Result<Self, GatewayError> {
        let yaml = encode_release(args)?;
        let dir = tempfile::Builder::new()
            .prefix(STAGE_DIR_PREFIX)
            .tempdir()?;

        tokio::fs::write(dir.path().join(RELEASE_FILE_NAME), yaml).await?;
        debug!("Staged release {} in {}", args.name, dir.path().display());

        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Remove the directory now, logging instead of failing
    pub fn close(self) {
        let path = self.dir.path().to_path_buf();
        if let Err(e) = self.dir.close() {
            warn!("Failed to remove release stage {}: {}", path.display(), e);
        }
    }
}
