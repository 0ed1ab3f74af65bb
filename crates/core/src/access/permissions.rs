use super::capability::{Capability, CapabilitySet};
use crate::types::{CameraId, LocationId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Granularity a grant applies at
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Scope {
    Global,
    /// Declared for completeness; no operation writes or reads location grants.
    Location(LocationId),
    Camera(CameraId),
}

impl Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Location(id) => write!(f, "location:{id}"),
            Self::Camera(id) => write!(f, "camera:{id}"),
        }
    }
}

/// Stored capability booleans for one user at one scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionGrant {
    pub user_id: UserId,
    pub scope: Scope,
    pub capabilities: CapabilitySet,
}

impl PermissionGrant {
    /// A fresh grant holding only `capability`, as created on the first toggle at a scope
    pub fn seeded(user_id: UserId, scope: Scope, capability: Capability) -> Self {
        Self {
            user_id,
            scope,
            capabilities: CapabilitySet::only(capability),
        }
    }

    pub fn allows(&self, capability: Capability) -> bool {
        self.capabilities.get(capability)
    }

    pub(crate) fn matches(&self, user_id: &UserId, scope: &Scope) -> bool {
        &self.user_id == user_id && &self.scope == scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_serializes_as_tagged_variant() {
        let global = serde_json::to_value(Scope::Global).unwrap();
        assert_eq!(global, serde_json::json!({ "kind": "global" }));

        let camera = serde_json::to_value(Scope::Camera(CameraId::from("Home-3"))).unwrap();
        assert_eq!(camera, serde_json::json!({ "kind": "camera", "id": "Home-3" }));
    }

    #[test]
    fn seeded_grant_holds_one_capability() {
        let grant = PermissionGrant::seeded(
            UserId::from("user1"),
            Scope::Camera(CameraId::from("Home-3")),
            Capability::ViewRecordings,
        );
        assert!(grant.allows(Capability::ViewRecordings));
        assert!(!grant.allows(Capability::View));
        assert!(!grant.allows(Capability::ViewClips));
        assert!(!grant.allows(Capability::Share));
    }

    #[test]
    fn scope_display() {
        assert_eq!(Scope::Global.to_string(), "global");
        assert_eq!(
            Scope::Location(LocationId::from("loc-1")).to_string(),
            "location:loc-1"
        );
        assert_eq!(
            Scope::Camera(CameraId::from("Home-3")).to_string(),
            "camera:Home-3"
        );
    }
}
