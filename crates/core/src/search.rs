use crate::types::{Camera, Location};

/// Cameras of one location that survived a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationMatches<'a> {
    pub location: &'a Location,
    pub cameras: Vec<&'a Camera>,
}

/// Case-insensitive substring match on camera names.
///
/// The term is used as typed, surrounding whitespace included. An empty term
/// matches every camera. Locations left without any matching camera are
/// dropped from the result.
pub fn filter_cameras<'a>(locations: &'a [Location], term: &str) -> Vec<LocationMatches<'a>> {
    let needle = term.to_lowercase();

    locations
        .iter()
        .filter_map(|location| {
            let cameras: Vec<&Camera> = location
                .cameras
                .iter()
                .filter(|c| c.name.to_lowercase().contains(&needle))
                .collect();
            (!cameras.is_empty()).then_some(LocationMatches { location, cameras })
        })
        .collect()
}
