//! Camgrid core: in-memory camera dashboard state
//!
//! Cameras are grouped by location, users hold capability grants at global or
//! per-camera scope, and every UI event is a [`DashboardAction`] applied to a
//! single [`Dashboard`] value.

pub mod access;
pub mod config;
pub mod directory;
pub mod error;
pub mod reorder;
pub mod search;
pub mod seed;
pub mod state;
pub mod types;
pub mod validation;

pub use access::{
    Capability, CapabilitySet, PermissionGrant, PermissionOverlay, Scope, ToggleOutcome,
};
pub use self::config::{CamgridConfig, OutputConfig, OutputFormat, SeedConfig};
pub use error::{Error, Result};
pub use reorder::{CameraMove, ReorderOutcome, Slot};
pub use search::LocationMatches;
pub use seed::MockSeeder;
pub use state::{Dashboard, DashboardAction};
pub use types::{Camera, CameraFeature, CameraId, Location, LocationId, User, UserId};
