pub mod capability;
pub mod overlay;
pub mod permissions;

pub use capability::{Capability, CapabilitySet, UnknownCapability};
pub use overlay::{DuplicateGrant, PermissionOverlay, ToggleOutcome};
pub use permissions::{PermissionGrant, Scope};
