//! Randomized mock data for a dashboard
//!
//! Everything is drawn from a seedable RNG so a given seed always produces
//! the same locations, cameras and users.

use crate::Result;
use crate::config::SeedConfig;
use crate::state::Dashboard;
use crate::types::{Camera, CameraId, Location, LocationId, User, UserId};
use crate::validation::ValidateConfig;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

const LOCATION_NAMES: &[&str] = &[
    "Home",
    "Office",
    "Warehouse",
    "Cabin",
    "Storefront",
    "Workshop",
];

const CAMERA_NAMES: &[&str] = &[
    "Front Door",
    "Living Room",
    "Kitchen",
    "Backyard",
    "Garage",
    "Driveway",
    "Hallway",
    "Master Bedroom",
    "Guest Room",
    "Basement",
];

const FEED_IMAGES: usize = 10;

const USER_NAMES: &[&str] = &[
    "Alice Johnson",
    "Bob Smith",
    "Carol White",
    "Dave Brown",
    "Eve Davis",
    "Frank Miller",
];

pub struct MockSeeder {
    config: SeedConfig,
    rng: StdRng,
    seed: u64,
}

impl MockSeeder {
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] when `config` fails validation, e.g. a
    /// probability outside `[0, 1]` or fewer than one location
    pub fn new(config: SeedConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.rng_seed.unwrap_or_else(rand::random);
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            config,
            seed,
        })
    }

    /// The seed in use, so a run can be reproduced
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    pub fn build(mut self) -> Dashboard {
        let locations = self.locations();
        let users = self.users();
        info!(
            seed = self.seed,
            locations = locations.len(),
            cameras = locations.iter().map(|l| l.cameras.len()).sum::<usize>(),
            users = users.len(),
            "Seeded dashboard"
        );
        Dashboard::new(users, locations)
    }

    fn locations(&mut self) -> Vec<Location> {
        let mut names: Vec<&str> = LOCATION_NAMES.to_vec();
        names.shuffle(&mut self.rng);

        (0..self.config.locations)
            .map(|i| {
                let base = names[i % names.len()];
                let name = match i / names.len() {
                    0 => base.to_string(),
                    round => format!("{base} {}", round + 1),
                };
                let cameras = self.cameras(&name);
                Location::new(LocationId::new(format!("loc-{}", i + 1)), name).with_cameras(cameras)
            })
            .collect()
    }

    fn cameras(&mut self, location_name: &str) -> Vec<Camera> {
        let min = self.config.min_cameras_per_location;
        let count = self
            .rng
            .gen_range(min..=self.config.max_cameras_per_location.max(min));
        let mut names: Vec<&str> = CAMERA_NAMES.to_vec();
        names.shuffle(&mut self.rng);
        let prefix = location_name.replace(' ', "");

        (0..count)
            .map(|i| Camera {
                id: CameraId::new(format!("{prefix}-{}", i + 1)),
                name: names[i % names.len()].to_string(),
                feed: format!("/images/camera{}.jpg", self.rng.gen_range(1..=FEED_IMAGES)),
                cloud_recording: self.rng.gen_bool(self.config.cloud_recording_probability),
                plate_detection: self.rng.gen_bool(self.config.plate_detection_probability),
            })
            .collect()
    }

    fn users(&self) -> Vec<User> {
        let now = Utc::now();
        (0..self.config.users)
            .map(|i| {
                let name = USER_NAMES[i % USER_NAMES.len()];
                let first = name.split_whitespace().next().unwrap_or(name).to_lowercase();
                User {
                    id: UserId::new(format!("user{}", i + 1)),
                    name: name.to_string(),
                    email: format!("{first}{}@example.com", i + 1),
                    created_at: now,
                }
            })
            .collect()
    }
}
