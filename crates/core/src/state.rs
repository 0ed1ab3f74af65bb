//! Dashboard state and the actions that change it
//!
//! [`Dashboard`] owns every user, location and grant. UI events are expressed
//! as [`DashboardAction`]s and folded into the state one at a time:
//!
//! ```
//! use camgrid_core::{Capability, Dashboard, DashboardAction, Scope};
//!
//! let dashboard = Dashboard::default().reduce(DashboardAction::AddUser {
//!     name: "Grace".into(),
//!     email: "grace@example.com".into(),
//! });
//! let user = dashboard.users()[0].id.clone();
//!
//! let dashboard = dashboard.reduce(DashboardAction::TogglePermission {
//!     user: user.clone(),
//!     capability: Capability::View,
//!     scope: Scope::Global,
//! });
//! assert!(dashboard.grants().global_grant(&user).is_some());
//! ```

use crate::access::{Capability, PermissionOverlay, Scope, ToggleOutcome};
use crate::directory::NewUser;
use crate::reorder::{self, CameraMove, ReorderOutcome, Slot};
use crate::search::{self, LocationMatches};
use crate::types::{Camera, CameraFeature, CameraId, Location, User, UserId};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardAction {
    AddUser {
        name: String,
        email: String,
    },
    TogglePermission {
        user: UserId,
        capability: Capability,
        scope: Scope,
    },
    MoveCamera {
        source: Slot,
        destination: Option<Slot>,
    },
    ToggleCameraFeature {
        camera: CameraId,
        feature: CameraFeature,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    users: Vec<User>,
    locations: Vec<Location>,
    #[serde(default)]
    grants: PermissionOverlay,
}

impl Dashboard {
    pub fn new(users: Vec<User>, locations: Vec<Location>) -> Self {
        Self {
            users,
            locations,
            grants: PermissionOverlay::new(),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub const fn grants(&self) -> &PermissionOverlay {
        &self.grants
    }

    pub fn user(&self, user_id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == user_id)
    }

    pub fn camera(&self, camera_id: &CameraId) -> Option<&Camera> {
        self.cameras().find(|c| &c.id == camera_id)
    }

    pub fn location_of(&self, camera_id: &CameraId) -> Option<&Location> {
        self.locations
            .iter()
            .find(|l| l.position_of(camera_id).is_some())
    }

    pub fn cameras(&self) -> impl Iterator<Item = &Camera> {
        self.locations.iter().flat_map(|l| l.cameras.iter())
    }

    pub fn camera_count(&self) -> usize {
        self.locations.iter().map(|l| l.cameras.len()).sum()
    }

    pub fn search(&self, term: &str) -> Vec<LocationMatches<'_>> {
        search::filter_cameras(&self.locations, term)
    }

    pub fn effective(
        &self,
        user_id: &UserId,
        camera_id: &CameraId,
        capability: Capability,
    ) -> bool {
        self.grants.effective(user_id, camera_id, capability)
    }

    /// Add a user from the admin form. Invalid input is ignored and yields `None`.
    pub fn add_user(&mut self, name: &str, email: &str) -> Option<UserId> {
        let Some(input) = NewUser::parse(name, email) else {
            debug!("Ignoring add-user with missing name or email");
            return None;
        };
        let user = input.into_user();
        let id = user.id.clone();
        debug!(user = %id, "Added user");
        self.users.push(user);
        Some(id)
    }

    pub fn toggle_permission(
        &mut self,
        user_id: &UserId,
        capability: Capability,
        scope: Scope,
    ) -> ToggleOutcome {
        self.grants.toggle(user_id, capability, scope)
    }

    pub fn move_camera(&mut self, mv: &CameraMove) -> ReorderOutcome {
        reorder::move_camera(&mut self.locations, mv)
    }

    /// Flip a camera feature flag. Returns `false` when the camera is unknown.
    pub fn toggle_camera_feature(&mut self, camera_id: &CameraId, feature: CameraFeature) -> bool {
        let camera = self
            .locations
            .iter_mut()
            .flat_map(|l| l.cameras.iter_mut())
            .find(|c| &c.id == camera_id);

        match camera {
            Some(camera) => {
                camera.toggle_feature(feature);
                debug!(
                    camera = %camera_id,
                    ?feature,
                    now = camera.feature(feature),
                    "Toggled camera feature"
                );
                true
            }
            None => {
                debug!(camera = %camera_id, ?feature, "Unknown camera");
                false
            }
        }
    }

    /// Apply one action in place
    pub fn apply(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::AddUser { name, email } => {
                self.add_user(&name, &email);
            }
            DashboardAction::TogglePermission {
                user,
                capability,
                scope,
            } => {
                self.toggle_permission(&user, capability, scope);
            }
            DashboardAction::MoveCamera {
                source,
                destination,
            } => {
                self.move_camera(&CameraMove {
                    source,
                    destination,
                });
            }
            DashboardAction::ToggleCameraFeature { camera, feature } => {
                self.toggle_camera_feature(&camera, feature);
            }
        }
    }

    /// Consume the state, apply `action` and return the next state
    #[must_use]
    pub fn reduce(mut self, action: DashboardAction) -> Self {
        self.apply(action);
        self
    }
}
