//! CLI configuration utilities

use anyhow::{Context as _, Result};
use camgrid_core::{CamgridConfig, DashboardAction};
use std::path::{Path, PathBuf};

const STATE_DIR_ENV: &str = "CAMGRID_STATE_DIR";

/// Pick the data directory: explicit flag, then `CAMGRID_STATE_DIR`, then the system data dir
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> PathBuf {
    data_dir.unwrap_or_else(|| {
        std::env::var(STATE_DIR_ENV).map_or_else(
            |_| {
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("camgrid")
            },
            PathBuf::from,
        )
    })
}

/// Default location of the config file inside the data directory
pub fn default_config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("camgrid.json")
}

/// Load configuration, falling back to the data directory's config file when it exists
pub fn load_config(
    explicit: Option<&Path>,
    data_dir: &Path,
    seed: Option<u64>,
) -> Result<CamgridConfig> {
    let fallback = default_config_path(data_dir);
    let path = explicit.or_else(|| fallback.exists().then_some(fallback.as_path()));

    let mut config = CamgridConfig::load(path).with_context(|| match path {
        Some(p) => format!("Failed to load configuration from {}", p.display()),
        None => "Failed to load configuration".to_string(),
    })?;

    if seed.is_some() {
        config.seed.rng_seed = seed;
    }
    Ok(config)
}

/// Generate a default configuration file
pub fn generate_default_config(path: &Path) -> Result<()> {
    CamgridConfig::default()
        .save(path)
        .with_context(|| format!("Failed to write configuration to {}", path.display()))
}

/// Read a JSON list of dashboard actions
pub fn load_script(path: &Path) -> Result<Vec<DashboardAction>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let actions = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse script {}", path.display()))?;
    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_data_dir_wins() {
        let dir = resolve_data_dir(Some(PathBuf::from("/srv/camgrid")));
        assert_eq!(dir, PathBuf::from("/srv/camgrid"));
    }

    #[test]
    fn seed_flag_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(None, dir.path(), Some(99)).unwrap();
        assert_eq!(config.seed.rng_seed, Some(99));
    }

    #[test]
    fn generated_config_is_picked_up_from_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        generate_default_config(&default_config_path(dir.path())).unwrap();

        let config = load_config(None, dir.path(), None).unwrap();
        assert_eq!(config, CamgridConfig::default());
    }

    #[test]
    fn script_parses_actions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.json");
        std::fs::write(
            &path,
            r#"[{"type": "add_user", "name": "Grace", "email": "grace@example.com"}]"#,
        )
        .unwrap();

        let actions = load_script(&path).unwrap();
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn missing_script_reports_path() {
        let err = load_script(Path::new("/nonexistent/script.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/script.json"));
    }
}
