use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::ops::Deref;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_id!(
    /// Opaque identifier of a dashboard user
    UserId
);
string_id!(
    /// Opaque identifier of a location
    LocationId
);
string_id!(
    /// Opaque identifier of a camera, unique across every location
    CameraId
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Per-camera feature flag that can be switched from the camera detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraFeature {
    CloudRecording,
    PlateDetection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camera {
    pub id: CameraId,
    pub name: String,
    /// Reference to the (simulated) feed image
    pub feed: String,
    pub cloud_recording: bool,
    pub plate_detection: bool,
}

impl Camera {
    pub fn feature(&self, feature: CameraFeature) -> bool {
        match feature {
            CameraFeature::CloudRecording => self.cloud_recording,
            CameraFeature::PlateDetection => self.plate_detection,
        }
    }

    pub fn toggle_feature(&mut self, feature: CameraFeature) {
        let flag = match feature {
            CameraFeature::CloudRecording => &mut self.cloud_recording,
            CameraFeature::PlateDetection => &mut self.plate_detection,
        };
        *flag = !*flag;
    }
}

/// A named group of cameras. The order of `cameras` is the display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub cameras: Vec<Camera>,
}

impl Location {
    pub fn new(id: impl Into<LocationId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cameras: Vec::new(),
        }
    }

    pub fn with_cameras(mut self, cameras: Vec<Camera>) -> Self {
        self.cameras = cameras;
        self
    }

    pub fn position_of(&self, camera_id: &CameraId) -> Option<usize> {
        self.cameras.iter().position(|c| &c.id == camera_id)
    }
}
