use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use staytics_widget::PlacedWidget;

const APP_DIR: &str = "staytics";
const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 900;
const DEFAULT_STATE_POLL_INTERVAL_SECS: u64 = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// JSON file the tracking app writes its widget state to.
    pub snapshot_path: PathBuf,
    /// Seconds between periodic refreshes.
    pub refresh_interval_secs: u64,
    /// Seconds between checks of the snapshot file for changes.
    pub state_poll_interval_secs: u64,
    #[serde(default = "default_widgets")]
    pub widgets: Vec<PlacedWidget>,
}

fn default_widgets() -> Vec<PlacedWidget> {
    vec![PlacedWidget::new(1, "small"), PlacedWidget::new(2, "medium")]
}

impl Settings {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs.max(1))
    }

    pub fn state_poll_interval(&self) -> Duration {
        Duration::from_secs(self.state_poll_interval_secs.max(1))
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Cannot determine config directory")?
        .join(APP_DIR)
        .join("config.toml"))
}

fn default_snapshot_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_default()
        .join("widget_state.json")
}

/// Load settings from defaults, then the config file, then `STAYTICS_*`
/// environment variables. A missing config file is not an error.
pub fn read_config(path: Option<&Path>) -> Result<Settings> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => config_path()?,
    };
    load(&path, environment())
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("STAYTICS")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn load(path: &Path, env: config::Environment) -> Result<Settings> {
    let settings = config::Config::builder()
        .set_default(
            "snapshot_path",
            default_snapshot_path().to_string_lossy().into_owned(),
        )?
        .set_default("refresh_interval_secs", DEFAULT_REFRESH_INTERVAL_SECS)?
        .set_default("state_poll_interval_secs", DEFAULT_STATE_POLL_INTERVAL_SECS)?
        .add_source(config::File::from(path).required(false))
        .add_source(env)
        .build()
        .with_context(|| format!("Failed to read config at {}", path.display()))?;

    settings
        .try_deserialize::<Settings>()
        .with_context(|| format!("Failed to parse config at {}", path.display()))
}
