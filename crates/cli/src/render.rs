//! Plain-text and JSON rendering of dashboard views

use anyhow::Result;
use camgrid_core::{
    Capability, Dashboard, LocationMatches, OutputConfig, OutputFormat, Scope, ToggleOutcome,
    UserId,
};
use std::fmt::Write as _;

const YES: &str = "x";
const NO: &str = "-";

pub fn dashboard(dashboard: &Dashboard, output: &OutputConfig) -> Result<String> {
    match output.format {
        OutputFormat::Json if output.pretty => Ok(serde_json::to_string_pretty(dashboard)?),
        OutputFormat::Json => Ok(serde_json::to_string(dashboard)?),
        OutputFormat::Table => Ok(dashboard_table(dashboard)),
    }
}

fn dashboard_table(dashboard: &Dashboard) -> String {
    let mut out = String::new();

    for location in dashboard.locations() {
        let _ = writeln!(
            out,
            "{} ({}) - {} cameras",
            location.name,
            location.id,
            location.cameras.len()
        );
        for camera in &location.cameras {
            let _ = writeln!(
                out,
                "  {:<14} {:<16} cloud:{} lpr:{}  {}",
                camera.id.as_str(),
                camera.name,
                flag(camera.cloud_recording),
                flag(camera.plate_detection),
                camera.feed
            );
        }
    }

    let _ = writeln!(out, "\nUsers");
    for user in dashboard.users() {
        let grants = dashboard.grants().grants_for(&user.id).count();
        let _ = writeln!(
            out,
            "  {:<38} {:<16} {:<28} grants:{}",
            user.id.as_str(),
            user.name,
            user.email,
            grants
        );
    }

    out
}

pub fn search(matches: &[LocationMatches<'_>]) -> String {
    if matches.is_empty() {
        return "No cameras found".to_string();
    }

    let mut out = String::new();
    for m in matches {
        let _ = writeln!(out, "{}", m.location.name);
        for camera in &m.cameras {
            let _ = writeln!(out, "  {:<14} {}", camera.id.as_str(), camera.name);
        }
    }
    out
}

pub fn permissions(dashboard: &Dashboard, user: &UserId) -> String {
    let grants = dashboard.grants();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<14} {:<16} {:^4} {:^4} {:^4} {:^4}  source",
        "camera", "name", "view", "rec", "clip", "share"
    );
    for location in dashboard.locations() {
        for camera in &location.cameras {
            let set = grants.effective_set(user, &camera.id);
            let source = if grants.camera_grant(user, &camera.id).is_some() {
                "camera"
            } else if grants.global_grant(user).is_some() {
                "global"
            } else {
                NO
            };
            let _ = writeln!(
                out,
                "{:<14} {:<16} {:^4} {:^4} {:^4} {:^4}  {}",
                camera.id.as_str(),
                camera.name,
                flag(set.get(Capability::View)),
                flag(set.get(Capability::ViewRecordings)),
                flag(set.get(Capability::ViewClips)),
                flag(set.get(Capability::Share)),
                source
            );
        }
    }
    out
}

/// One-line summary of a toggle and the grant it left behind
pub fn toggle(
    dashboard: &Dashboard,
    user: &UserId,
    capability: Capability,
    scope: &Scope,
    outcome: ToggleOutcome,
) -> String {
    let action = match outcome {
        ToggleOutcome::Created => format!("created grant with {capability}"),
        ToggleOutcome::Flipped { now: true } => format!("granted {capability}"),
        ToggleOutcome::Flipped { now: false } => format!("revoked {capability}"),
        ToggleOutcome::Ignored => return format!("{user} {scope}: not writable"),
    };
    let held = dashboard
        .grants()
        .grants_for(user)
        .find(|g| &g.scope == scope)
        .map(|g| {
            g.capabilities
                .granted()
                .map(Capability::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();
    format!("{user} {scope}: {action}; holds [{held}]")
}

const fn flag(value: bool) -> &'static str {
    if value { YES } else { NO }
}
