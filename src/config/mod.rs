use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::logging;
use crate::schedule::BlindSchedule;
use crate::settings::GameSettings;

pub const APP_DIR: &str = "blind-timer";
pub const CONFIG_FILE: &str = "timer.toml";

fn config_paths(filename: &str) -> Vec<PathBuf> {
	let mut paths = Vec::new();

	if let Some(config_dir) = dirs::config_dir() {
		paths.push(config_dir.join(APP_DIR).join(filename));
	}

	paths.push(PathBuf::from("config").join(filename));

	paths
}

fn find_config(filename: &str) -> Option<PathBuf> {
	config_paths(filename).into_iter().find(|p| p.exists())
}

pub fn resolve_config(filename: &str) -> Result<PathBuf, String> {
	find_config(filename).ok_or_else(|| {
		let searched: Vec<_> = config_paths(filename)
			.iter()
			.map(|p| p.display().to_string())
			.collect();
		format!("Config file '{}' not found. Searched: {}", filename, searched.join(", "))
	})
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
	pub show_progress: bool,
	pub fullscreen: bool,
}

impl Default for DisplayConfig {
	fn default() -> Self {
		Self {
			show_progress: true,
			fullscreen: false,
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimerConfig {
	#[serde(default)]
	pub theme: Option<String>,
	#[serde(default)]
	pub display: DisplayConfig,
	#[serde(default)]
	pub game: GameSettings,
	#[serde(default)]
	pub levels: BlindSchedule,
}

impl TimerConfig {
	pub fn parse(content: &str) -> Result<Self, String> {
		let mut config: TimerConfig = toml::from_str(content)
			.map_err(|e| format!("Failed to parse timer config: {}", e))?;
		config.game = config.game.sanitized();
		Ok(config)
	}
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TimerConfig, String> {
	let content = fs::read_to_string(&path)
		.map_err(|e| format!("Failed to read {}: {}", path.as_ref().display(), e))?;

	let config = TimerConfig::parse(&content)?;
	logging::config::loaded(&path.as_ref().display().to_string());
	Ok(config)
}

/// Loads `timer.toml` from the usual places, or the built-in defaults when
/// none exists.
pub fn load_config_auto() -> Result<TimerConfig, String> {
	match find_config(CONFIG_FILE) {
		Some(path) => load_config(&path),
		None => {
			logging::config::fallback("no timer.toml found, using built-in defaults");
			Ok(TimerConfig::default())
		}
	}
}
