//! Effective-permission resolution over global and per-camera grants
//!
//! A user's global grant is the baseline for every camera. A camera-scoped
//! grant, once it exists, replaces that baseline for its camera entirely:
//!
//! ```text
//! effective(user, camera, cap) = camera_grant(user, camera).cap   if a camera grant exists
//!                              = global_grant(user).cap           otherwise
//!                              = false                            if neither exists
//! ```
//!
//! Camera grants are created on the first camera-level toggle holding only the
//! toggled capability. They do not inherit the global baseline, so creating one
//! can hide capabilities the user previously saw through the global grant.
//! This matches the dashboard's observed behaviour.

use super::capability::{Capability, CapabilitySet};
use super::permissions::{PermissionGrant, Scope};
use crate::types::{CameraId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, trace};

/// What a toggle did to the grant set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// A new grant was created holding only the toggled capability
    Created,
    /// An existing grant had the capability flipped to `now`
    Flipped { now: bool },
    /// The scope has no write path
    Ignored,
}

/// A grant list holding two grants for the same user and scope
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Duplicate grant for user {user_id} at {scope}")]
pub struct DuplicateGrant {
    pub user_id: UserId,
    pub scope: Scope,
}

/// The set of permission grants plus the resolution rules over it
///
/// Holds at most one grant per (user, scope); deserialization enforces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PermissionGrant>", into = "Vec<PermissionGrant>")]
pub struct PermissionOverlay {
    grants: Vec<PermissionGrant>,
}

impl TryFrom<Vec<PermissionGrant>> for PermissionOverlay {
    type Error = DuplicateGrant;

    fn try_from(grants: Vec<PermissionGrant>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::new();
        for grant in &grants {
            if !seen.insert((&grant.user_id, &grant.scope)) {
                return Err(DuplicateGrant {
                    user_id: grant.user_id.clone(),
                    scope: grant.scope.clone(),
                });
            }
        }
        Ok(Self { grants })
    }
}

impl From<PermissionOverlay> for Vec<PermissionGrant> {
    fn from(overlay: PermissionOverlay) -> Self {
        overlay.grants
    }
}

impl PermissionOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grants(&self) -> &[PermissionGrant] {
        &self.grants
    }

    pub fn grants_for<'a>(
        &'a self,
        user_id: &'a UserId,
    ) -> impl Iterator<Item = &'a PermissionGrant> + 'a {
        self.grants.iter().filter(move |g| &g.user_id == user_id)
    }

    pub fn global_grant(&self, user_id: &UserId) -> Option<&PermissionGrant> {
        self.find(user_id, &Scope::Global)
    }

    pub fn camera_grant(&self, user_id: &UserId, camera_id: &CameraId) -> Option<&PermissionGrant> {
        self.find(user_id, &Scope::Camera(camera_id.clone()))
    }

    /// Resolve one capability for a (user, camera) pair. Lookup misses read as `false`.
    pub fn effective(
        &self,
        user_id: &UserId,
        camera_id: &CameraId,
        capability: Capability,
    ) -> bool {
        let value = match self.camera_grant(user_id, camera_id) {
            Some(grant) => grant.allows(capability),
            None => self
                .global_grant(user_id)
                .is_some_and(|grant| grant.allows(capability)),
        };
        trace!(user = %user_id, camera = %camera_id, %capability, value, "Resolved capability");
        value
    }

    pub fn effective_set(&self, user_id: &UserId, camera_id: &CameraId) -> CapabilitySet {
        let mut set = CapabilitySet::none();
        for capability in Capability::ALL {
            set.set(capability, self.effective(user_id, camera_id, capability));
        }
        set
    }

    /// Flip `capability` for `user_id` at `scope`, creating the grant on first use.
    pub fn toggle(
        &mut self,
        user_id: &UserId,
        capability: Capability,
        scope: Scope,
    ) -> ToggleOutcome {
        if let Scope::Location(location_id) = &scope {
            debug!(
                user = %user_id,
                location = %location_id,
                %capability,
                "Ignoring location-scoped toggle"
            );
            return ToggleOutcome::Ignored;
        }

        if let Some(grant) = self.grants.iter_mut().find(|g| g.matches(user_id, &scope)) {
            let now = grant.capabilities.toggle(capability);
            debug!(user = %user_id, %scope, %capability, now, "Flipped capability");
            return ToggleOutcome::Flipped { now };
        }

        debug!(user = %user_id, %scope, %capability, "Created grant");
        self.grants
            .push(PermissionGrant::seeded(user_id.clone(), scope, capability));
        ToggleOutcome::Created
    }

    fn find(&self, user_id: &UserId, scope: &Scope) -> Option<&PermissionGrant> {
        self.grants.iter().find(|g| g.matches(user_id, scope))
    }
}
