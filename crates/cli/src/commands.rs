//! CLI commands

use anyhow::{Result, bail};
use camgrid_core::{
    CameraId, CamgridConfig, Capability, Dashboard, MockSeeder, OutputConfig, OutputFormat, Scope,
    UserId,
};
use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;

use crate::{config, render};

/// Settings shared by every command
pub struct Context {
    pub data_dir: PathBuf,
    pub config_path: Option<PathBuf>,
    pub seed: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the seeded camera grid
    Show {
        /// Output format (defaults to the configured one)
        #[arg(short, long)]
        format: Option<Format>,
    },

    /// Filter cameras by name
    Search {
        /// Case-insensitive name fragment
        term: String,
    },

    /// Show a user's effective capabilities at every camera
    Permissions {
        /// User id, e.g. user1
        user: String,
    },

    /// Toggle one capability for a user and show the resulting permissions
    Toggle {
        /// User id, e.g. user1
        user: String,

        /// view, view_recordings, view_clips or share
        capability: Capability,

        /// Toggle the grant of this camera instead of the global one
        #[arg(long)]
        camera: Option<String>,
    },

    /// Apply a JSON list of dashboard actions to the seeded grid
    Run {
        /// Script file
        script: PathBuf,

        /// Output format (defaults to the configured one)
        #[arg(short, long)]
        format: Option<Format>,
    },

    /// Configuration file operations
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a default configuration file
    Init {
        /// Output file path (defaults to CAMGRID_STATE_DIR/camgrid.json)
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Format {
    Json,
    Table,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => Self::Json,
            Format::Table => Self::Table,
        }
    }
}

impl Commands {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        match self {
            Self::Show { format } => {
                let (config, dashboard) = prepare(ctx)?;
                let output = output_config(&config, format);
                println!("{}", render::dashboard(&dashboard, &output)?);
            }
            Self::Search { term } => {
                let (_, dashboard) = prepare(ctx)?;
                println!("{}", render::search(&dashboard.search(&term)));
            }
            Self::Permissions { user } => {
                let (_, dashboard) = prepare(ctx)?;
                let user = known_user(&dashboard, user)?;
                println!("{}", render::permissions(&dashboard, &user));
            }
            Self::Toggle {
                user,
                capability,
                camera,
            } => {
                let (_, mut dashboard) = prepare(ctx)?;
                let user = known_user(&dashboard, user)?;
                let scope = match camera {
                    Some(camera) => {
                        let camera = CameraId::from(camera);
                        if dashboard.camera(&camera).is_none() {
                            bail!("Unknown camera: {camera}");
                        }
                        Scope::Camera(camera)
                    }
                    None => Scope::Global,
                };
                let outcome = dashboard.toggle_permission(&user, capability, scope.clone());
                println!(
                    "{}",
                    render::toggle(&dashboard, &user, capability, &scope, outcome)
                );
                println!("{}", render::permissions(&dashboard, &user));
            }
            Self::Run { script, format } => {
                let (config, dashboard) = prepare(ctx)?;
                let actions = config::load_script(&script)?;
                info!(actions = actions.len(), script = %script.display(), "Applying script");
                let dashboard = actions.into_iter().fold(dashboard, Dashboard::reduce);
                let output = output_config(&config, format);
                println!("{}", render::dashboard(&dashboard, &output)?);
            }
            Self::Config { command } => command.execute(ctx)?,
        }

        Ok(())
    }
}

impl ConfigCommands {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        match self {
            Self::Init { output } => {
                let config_path =
                    output.unwrap_or_else(|| config::default_config_path(&ctx.data_dir));
                config::generate_default_config(&config_path)?;
                println!("Generated configuration at: {}", config_path.display());
                Ok(())
            }
        }
    }
}

/// Load configuration and seed a fresh dashboard from it
fn prepare(ctx: &Context) -> Result<(CamgridConfig, Dashboard)> {
    let config = config::load_config(ctx.config_path.as_deref(), &ctx.data_dir, ctx.seed)?;
    let seeder = MockSeeder::new(config.seed.clone())?;
    info!(seed = seeder.seed(), "Seeding dashboard");
    let dashboard = seeder.build();
    Ok((config, dashboard))
}

fn known_user(dashboard: &Dashboard, user: String) -> Result<UserId> {
    let user = UserId::from(user);
    if dashboard.user(&user).is_none() {
        bail!("Unknown user: {user}");
    }
    Ok(user)
}

fn output_config(config: &CamgridConfig, format: Option<Format>) -> OutputConfig {
    let mut output = config.output.clone();
    if let Some(format) = format {
        output.format = format.into();
    }
    output
}
