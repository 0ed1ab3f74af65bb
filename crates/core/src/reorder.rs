//! Drag-and-drop reordering of cameras within and across locations

use crate::types::{Camera, Location, LocationId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A position inside a location's camera sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub location: LocationId,
    pub index: usize,
}

impl Slot {
    pub fn new(location: impl Into<LocationId>, index: usize) -> Self {
        Self {
            location: location.into(),
            index,
        }
    }
}

/// A finished drag. `destination` is `None` when the drop was cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraMove {
    pub source: Slot,
    pub destination: Option<Slot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderOutcome {
    Moved,
    Unchanged,
}

/// Move a camera between (or within) location sequences.
///
/// Unknown locations, an out-of-range source index and cancelled drops leave
/// `locations` untouched. The destination index is clamped to the length of
/// the destination sequence. Both affected sequences are rebuilt before either
/// is written back.
pub fn move_camera(locations: &mut [Location], mv: &CameraMove) -> ReorderOutcome {
    let Some(destination) = &mv.destination else {
        debug!(source = %mv.source.location, "Drop cancelled");
        return ReorderOutcome::Unchanged;
    };

    let Some(src_pos) = locations.iter().position(|l| l.id == mv.source.location) else {
        debug!(location = %mv.source.location, "Unknown source location");
        return ReorderOutcome::Unchanged;
    };
    let Some(dst_pos) = locations.iter().position(|l| l.id == destination.location) else {
        debug!(location = %destination.location, "Unknown destination location");
        return ReorderOutcome::Unchanged;
    };

    let mut source: Vec<Camera> = locations[src_pos].cameras.clone();
    if mv.source.index >= source.len() {
        debug!(
            location = %mv.source.location,
            index = mv.source.index,
            len = source.len(),
            "Source index out of range"
        );
        return ReorderOutcome::Unchanged;
    }
    let camera = source.remove(mv.source.index);

    if src_pos == dst_pos {
        let index = destination.index.min(source.len());
        source.insert(index, camera);
        locations[src_pos].cameras = source;
    } else {
        let mut target = locations[dst_pos].cameras.clone();
        let index = destination.index.min(target.len());
        target.insert(index, camera);
        locations[src_pos].cameras = source;
        locations[dst_pos].cameras = target;
    }

    debug!(
        from = %mv.source.location,
        from_index = mv.source.index,
        to = %destination.location,
        to_index = destination.index,
        "Moved camera"
    );
    ReorderOutcome::Moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CameraId;

    fn camera(id: &str) -> Camera {
        Camera {
            id: CameraId::from(id),
            name: id.to_string(),
            feed: format!("/images/{id}.jpg"),
            cloud_recording: false,
            plate_detection: false,
        }
    }

    fn fixture() -> Vec<Location> {
        vec![
            Location::new("home", "Home").with_cameras(
                ["Home-1", "Home-2", "Home-3", "Home-4"]
                    .into_iter()
                    .map(camera)
                    .collect(),
            ),
            Location::new("office", "Office")
                .with_cameras(["Office-1", "Office-2"].into_iter().map(camera).collect()),
        ]
    }

    fn ids(location: &Location) -> Vec<&str> {
        location.cameras.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn move_across_locations() {
        let mut locations = fixture();
        let outcome = move_camera(
            &mut locations,
            &CameraMove {
                source: Slot::new("home", 1),
                destination: Some(Slot::new("office", 1)),
            },
        );

        assert_eq!(outcome, ReorderOutcome::Moved);
        assert_eq!(ids(&locations[0]), vec!["Home-1", "Home-3", "Home-4"]);
        assert_eq!(ids(&locations[1]), vec!["Office-1", "Home-2", "Office-2"]);
    }

    #[test]
    fn move_within_location() {
        let mut locations = fixture();
        move_camera(
            &mut locations,
            &CameraMove {
                source: Slot::new("home", 0),
                destination: Some(Slot::new("home", 2)),
            },
        );
        assert_eq!(ids(&locations[0]), vec!["Home-2", "Home-3", "Home-1", "Home-4"]);
        assert_eq!(ids(&locations[1]), vec!["Office-1", "Office-2"]);
    }

    #[test]
    fn cancelled_drop_leaves_state_unchanged() {
        let mut locations = fixture();
        let before = locations.clone();
        let outcome = move_camera(
            &mut locations,
            &CameraMove {
                source: Slot::new("home", 2),
                destination: None,
            },
        );
        assert_eq!(outcome, ReorderOutcome::Unchanged);
        assert_eq!(locations, before);
    }

    #[test]
    fn unknown_locations_are_noops() {
        let mut locations = fixture();
        let before = locations.clone();

        let unknown_source = CameraMove {
            source: Slot::new("garage", 0),
            destination: Some(Slot::new("home", 0)),
        };
        let unknown_destination = CameraMove {
            source: Slot::new("home", 0),
            destination: Some(Slot::new("garage", 0)),
        };

        assert_eq!(
            move_camera(&mut locations, &unknown_source),
            ReorderOutcome::Unchanged
        );
        assert_eq!(
            move_camera(&mut locations, &unknown_destination),
            ReorderOutcome::Unchanged
        );
        assert_eq!(locations, before);
    }

    #[test]
    fn out_of_range_source_is_noop() {
        let mut locations = fixture();
        let before = locations.clone();
        let outcome = move_camera(
            &mut locations,
            &CameraMove {
                source: Slot::new("office", 2),
                destination: Some(Slot::new("home", 0)),
            },
        );
        assert_eq!(outcome, ReorderOutcome::Unchanged);
        assert_eq!(locations, before);
    }

    #[test]
    fn destination_index_is_clamped() {
        let mut locations = fixture();
        move_camera(
            &mut locations,
            &CameraMove {
                source: Slot::new("home", 0),
                destination: Some(Slot::new("office", 99)),
            },
        );
        assert_eq!(ids(&locations[1]), vec!["Office-1", "Office-2", "Home-1"]);
    }

    #[test]
    fn moving_the_last_camera_empties_the_source() {
        let mut locations = fixture();
        for _ in 0..2 {
            move_camera(
                &mut locations,
                &CameraMove {
                    source: Slot::new("office", 0),
                    destination: Some(Slot::new("home", 0)),
                },
            );
        }
        assert!(locations[1].cameras.is_empty());
        assert_eq!(
            ids(&locations[0]),
            vec!["Office-2", "Office-1", "Home-1", "Home-2", "Home-3", "Home-4"]
        );
    }
}
