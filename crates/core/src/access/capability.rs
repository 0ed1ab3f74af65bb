use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Capabilities a user can hold for a camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    View,
    ViewRecordings,
    ViewClips,
    Share,
}

impl Capability {
    pub const ALL: [Self; 4] = [Self::View, Self::ViewRecordings, Self::ViewClips, Self::Share];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::ViewRecordings => "view_recordings",
            Self::ViewClips => "view_clips",
            Self::Share => "share",
        }
    }
}

impl Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown capability: {0}")]
pub struct UnknownCapability(String);

impl FromStr for Capability {
    type Err = UnknownCapability;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "view" => Ok(Self::View),
            "view_recordings" => Ok(Self::ViewRecordings),
            "view_clips" => Ok(Self::ViewClips),
            "share" => Ok(Self::Share),
            _ => Err(UnknownCapability(s.to_string())),
        }
    }
}

/// The four independent capability booleans carried by a grant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct CapabilitySet {
    pub can_view: bool,
    pub can_view_recordings: bool,
    pub can_view_clips: bool,
    pub can_share: bool,
}

impl CapabilitySet {
    /// A set with nothing granted
    pub const fn none() -> Self {
        Self {
            can_view: false,
            can_view_recordings: false,
            can_view_clips: false,
            can_share: false,
        }
    }

    /// A set with exactly one capability granted
    pub fn only(capability: Capability) -> Self {
        let mut set = Self::none();
        set.set(capability, true);
        set
    }

    pub const fn get(&self, capability: Capability) -> bool {
        match capability {
            Capability::View => self.can_view,
            Capability::ViewRecordings => self.can_view_recordings,
            Capability::ViewClips => self.can_view_clips,
            Capability::Share => self.can_share,
        }
    }

    pub fn set(&mut self, capability: Capability, value: bool) {
        *self.slot(capability) = value;
    }

    /// Flip one capability and return its new value
    pub fn toggle(&mut self, capability: Capability) -> bool {
        let slot = self.slot(capability);
        *slot = !*slot;
        *slot
    }

    pub fn granted(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL.into_iter().filter(|c| self.get(*c))
    }

    fn slot(&mut self, capability: Capability) -> &mut bool {
        match capability {
            Capability::View => &mut self.can_view,
            Capability::ViewRecordings => &mut self.can_view_recordings,
            Capability::ViewClips => &mut self.can_view_clips,
            Capability::Share => &mut self.can_share,
        }
    }
}
