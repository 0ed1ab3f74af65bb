//! End-to-end behaviour of a seeded dashboard driven through actions

use camgrid_core::{
    Capability, CapabilitySet, Dashboard, DashboardAction, MockSeeder, Scope, SeedConfig, Slot,
    UserId,
};

fn seeded() -> Dashboard {
    MockSeeder::new(SeedConfig {
        rng_seed: Some(2024),
        locations: 3,
        min_cameras_per_location: 4,
        max_cameras_per_location: 6,
        users: 2,
        ..SeedConfig::default()
    })
    .unwrap()
    .build()
}

fn first_user(dashboard: &Dashboard) -> UserId {
    dashboard.users()[0].id.clone()
}

#[test]
fn users_without_grants_see_nothing() {
    let dashboard = seeded();
    for user in dashboard.users() {
        for camera in dashboard.cameras() {
            assert_eq!(
                dashboard.grants().effective_set(&user.id, &camera.id),
                CapabilitySet::none()
            );
        }
    }
}

#[test]
fn global_grant_reaches_cameras_without_override() {
    let dashboard = seeded();
    let user = first_user(&dashboard);
    let overridden = dashboard.locations()[0].cameras[0].id.clone();

    let dashboard = dashboard
        .reduce(DashboardAction::TogglePermission {
            user: user.clone(),
            capability: Capability::Share,
            scope: Scope::Global,
        })
        .reduce(DashboardAction::TogglePermission {
            user: user.clone(),
            capability: Capability::View,
            scope: Scope::Camera(overridden.clone()),
        });

    for camera in dashboard.cameras() {
        let share = dashboard.effective(&user, &camera.id, Capability::Share);
        assert_eq!(share, camera.id != overridden, "camera {}", camera.id);
    }
}

#[test]
fn camera_grant_created_by_toggle_ignores_global_state() {
    let mut dashboard = seeded();
    let user = first_user(&dashboard);
    let camera = dashboard.locations()[1].cameras[2].id.clone();

    dashboard.toggle_permission(&user, Capability::View, Scope::Global);
    dashboard.toggle_permission(&user, Capability::ViewClips, Scope::Global);
    assert!(dashboard.effective(&user, &camera, Capability::View));

    dashboard.toggle_permission(&user, Capability::ViewRecordings, Scope::Camera(camera.clone()));

    let grant = dashboard.grants().camera_grant(&user, &camera).unwrap();
    assert_eq!(grant.capabilities, CapabilitySet::only(Capability::ViewRecordings));
    assert!(!dashboard.effective(&user, &camera, Capability::View));
    assert!(!dashboard.effective(&user, &camera, Capability::ViewClips));
    assert!(dashboard.effective(&user, &camera, Capability::ViewRecordings));
}

#[test]
fn cross_location_move_preserves_relative_order() {
    let dashboard = seeded();
    let before_src: Vec<_> = dashboard.locations()[0].cameras.clone();
    let before_dst: Vec<_> = dashboard.locations()[2].cameras.clone();
    let src_id = dashboard.locations()[0].id.clone();
    let dst_id = dashboard.locations()[2].id.clone();

    let dashboard = dashboard.reduce(DashboardAction::MoveCamera {
        source: Slot::new(src_id, 1),
        destination: Some(Slot::new(dst_id, 2)),
    });

    let after_src = &dashboard.locations()[0].cameras;
    let after_dst = &dashboard.locations()[2].cameras;

    let mut expected_src = before_src.clone();
    let moved = expected_src.remove(1);
    let mut expected_dst = before_dst;
    expected_dst.insert(2, moved.clone());

    assert_eq!(after_src, &expected_src);
    assert_eq!(after_dst, &expected_dst);
    assert_eq!(after_dst[2], moved);
    assert_eq!(after_src.len() + 1, before_src.len());
}

#[test]
fn cancelled_drag_is_a_noop() {
    let dashboard = seeded();
    let before = dashboard.clone();
    let source = Slot::new(dashboard.locations()[0].id.clone(), 0);

    let after = dashboard.reduce(DashboardAction::MoveCamera {
        source,
        destination: None,
    });
    assert_eq!(after, before);
    assert_eq!(
        serde_json::to_string(after.locations()).unwrap(),
        serde_json::to_string(before.locations()).unwrap()
    );
}

#[test]
fn search_follows_moved_cameras() {
    let dashboard = seeded();
    let name = dashboard.locations()[0].cameras[0].name.clone();
    let src_id = dashboard.locations()[0].id.clone();
    let dst_id = dashboard.locations()[1].id.clone();

    let dashboard = dashboard.reduce(DashboardAction::MoveCamera {
        source: Slot::new(src_id, 0),
        destination: Some(Slot::new(dst_id.clone(), 0)),
    });

    let hits = dashboard.search(&name.to_uppercase());
    assert!(
        hits.iter()
            .any(|m| m.location.id == dst_id && m.cameras.iter().any(|c| c.name == name))
    );
}

#[test]
fn dashboard_survives_json_round_trip() {
    let mut dashboard = seeded();
    let user = first_user(&dashboard);
    dashboard.toggle_permission(&user, Capability::View, Scope::Global);

    let json = serde_json::to_string(&dashboard).unwrap();
    let restored: Dashboard = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, dashboard);
}

#[test]
fn dashboard_with_duplicate_grants_is_rejected() {
    let mut dashboard = seeded();
    let user = first_user(&dashboard);
    dashboard.toggle_permission(&user, Capability::View, Scope::Global);

    let mut value = serde_json::to_value(&dashboard).unwrap();
    let grants = value["grants"].as_array_mut().unwrap();
    let duplicate = grants[0].clone();
    grants.push(duplicate);

    let err = serde_json::from_value::<Dashboard>(value).unwrap_err();
    assert!(err.to_string().contains("Duplicate grant"), "got: {err}");
}
