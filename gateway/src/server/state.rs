//! Server state

use std::sync::Arc;

use crate::cli::{BuildHost, ControlPlane};

/// Server state shared across handlers
pub struct ServerState {
    pub control_plane: Arc<dyn ControlPlane>,
    pub build_host: Arc<dyn BuildHost>,
}

impl ServerState {
    pub fn new(control_plane: Arc<dyn ControlPlane>, build_host: Arc<dyn BuildHost>) -> Self {
        Self {
            control_plane,
            build_host,
        }
    }
}
