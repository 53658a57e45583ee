use std::fs;

use ratatui::style::Color;
use ratatui::widgets::BorderType;
use serde::{Deserialize, Serialize};

use crate::config::resolve_config;
use crate::defaults;

pub const DEFAULT_THEME: &str = "default";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
	pub background_color: String,
	pub border_style: String,
	pub border_color: String,
	pub title_color: String,

	pub clock_color: String,
	pub clock_paused_color: String,
	pub clock_complete_color: String,

	pub blinds_color: String,
	pub next_blinds_color: String,

	pub progress_color: String,
	pub progress_track_color: String,

	pub stat_label_color: String,
	pub stat_value_color: String,

	pub editor_border_color: String,
	pub editor_highlight_color: String,

	pub status_running_color: String,
	pub status_paused_color: String,
	pub status_complete_color: String,
	pub help_color: String,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			background_color: "reset".to_string(),
			border_style: "rounded".to_string(),
			border_color: "dark_gray".to_string(),
			title_color: "white".to_string(),

			clock_color: "#f97316".to_string(),
			clock_paused_color: "gray".to_string(),
			clock_complete_color: "red".to_string(),

			blinds_color: "white".to_string(),
			next_blinds_color: "dark_gray".to_string(),

			progress_color: "blue".to_string(),
			progress_track_color: "dark_gray".to_string(),

			stat_label_color: "gray".to_string(),
			stat_value_color: "white".to_string(),

			editor_border_color: "blue".to_string(),
			editor_highlight_color: "yellow".to_string(),

			status_running_color: "green".to_string(),
			status_paused_color: "yellow".to_string(),
			status_complete_color: "red".to_string(),
			help_color: "dark_gray".to_string(),
		}
	}
}

impl Theme {
	/// Named theme, falling back to the built-in colours.
	pub fn load(name: Option<&str>) -> Self {
		Self::load_named(name.unwrap_or(DEFAULT_THEME)).unwrap_or_default()
	}

	/// Looks in the user config directory first, then the bundled themes.
	pub fn load_named(name: &str) -> Result<Self, String> {
		let filename = format!("themes/{}.toml", name);
		let contents = match resolve_config(&filename) {
			Ok(path) => fs::read_to_string(&path)
				.map_err(|e| format!("Failed to read {}: {}", path.display(), e))?,
			Err(not_found) => defaults::embedded_theme(name)
				.map(str::to_string)
				.ok_or_else(|| format!("Unknown theme '{}': {}", name, not_found))?,
		};

		toml::from_str(&contents).map_err(|e| format!("Failed to parse theme '{}': {}", name, e))
	}

	pub fn list_available() -> Vec<String> {
		defaults::list_themes()
	}

	pub fn border_type(&self) -> BorderType {
		parse_border_type(&self.border_style)
	}

	pub fn background(&self) -> Color {
		parse_color(&self.background_color)
	}

	pub fn border(&self) -> Color {
		parse_color(&self.border_color)
	}

	pub fn title(&self) -> Color {
		parse_color(&self.title_color)
	}

	pub fn clock(&self) -> Color {
		parse_color(&self.clock_color)
	}

	pub fn clock_paused(&self) -> Color {
		parse_color(&self.clock_paused_color)
	}

	pub fn clock_complete(&self) -> Color {
		parse_color(&self.clock_complete_color)
	}

	pub fn blinds(&self) -> Color {
		parse_color(&self.blinds_color)
	}

	pub fn next_blinds(&self) -> Color {
		parse_color(&self.next_blinds_color)
	}

	pub fn progress(&self) -> Color {
		parse_color(&self.progress_color)
	}

	pub fn progress_track(&self) -> Color {
		parse_color(&self.progress_track_color)
	}

	pub fn stat_label(&self) -> Color {
		parse_color(&self.stat_label_color)
	}

	pub fn stat_value(&self) -> Color {
		parse_color(&self.stat_value_color)
	}

	pub fn editor_border(&self) -> Color {
		parse_color(&self.editor_border_color)
	}

	pub fn editor_highlight(&self) -> Color {
		parse_color(&self.editor_highlight_color)
	}

	pub fn status_running(&self) -> Color {
		parse_color(&self.status_running_color)
	}

	pub fn status_paused(&self) -> Color {
		parse_color(&self.status_paused_color)
	}

	pub fn status_complete(&self) -> Color {
		parse_color(&self.status_complete_color)
	}

	pub fn help(&self) -> Color {
		parse_color(&self.help_color)
	}
}

fn parse_color(s: &str) -> Color {
	match s.to_lowercase().as_str() {
		"reset" | "default" => Color::Reset,
		"black" => Color::Black,
		"red" => Color::Red,
		"green" => Color::Green,
		"yellow" => Color::Yellow,
		"blue" => Color::Blue,
		"magenta" => Color::Magenta,
		"cyan" => Color::Cyan,
		"gray" | "grey" => Color::Gray,
		"dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Color::DarkGray,
		"light_red" | "lightred" => Color::LightRed,
		"light_green" | "lightgreen" => Color::LightGreen,
		"light_yellow" | "lightyellow" => Color::LightYellow,
		"light_blue" | "lightblue" => Color::LightBlue,
		"light_magenta" | "lightmagenta" => Color::LightMagenta,
		"light_cyan" | "lightcyan" => Color::LightCyan,
		"white" => Color::White,
		_ => {
			if let Some(hex) = s.strip_prefix('#') {
				if let Ok(rgb) = u32::from_str_radix(hex, 16) {
					let r = ((rgb >> 16) & 0xFF) as u8;
					let g = ((rgb >> 8) & 0xFF) as u8;
					let b = (rgb & 0xFF) as u8;
					return Color::Rgb(r, g, b);
				}
			}
			if let Some(inner) = s.strip_prefix("rgb(").and_then(|rest| rest.strip_suffix(')')) {
				let parts: Vec<&str> = inner.split(',').collect();
				if parts.len() == 3 {
					if let (Ok(r), Ok(g), Ok(b)) = (
						parts[0].trim().parse::<u8>(),
						parts[1].trim().parse::<u8>(),
						parts[2].trim().parse::<u8>(),
					) {
						return Color::Rgb(r, g, b);
					}
				}
			}
			Color::White
		}
	}
}

fn parse_border_type(s: &str) -> BorderType {
	match s.to_lowercase().as_str() {
		"double" => BorderType::Double,
		"thick" => BorderType::Thick,
		"rounded" => BorderType::Rounded,
		_ => BorderType::Plain,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_color_names() {
		assert_eq!(parse_color("red"), Color::Red);
		assert_eq!(parse_color("GREEN"), Color::Green);
		assert_eq!(parse_color("dark_gray"), Color::DarkGray);
		assert_eq!(parse_color("reset"), Color::Reset);
	}

	#[test]
	fn test_parse_color_hex() {
		assert_eq!(parse_color("#f97316"), Color::Rgb(0xf9, 0x73, 0x16));
		assert_eq!(parse_color("#00ff00"), Color::Rgb(0, 255, 0));
	}

	#[test]
	fn test_parse_color_rgb() {
		assert_eq!(parse_color("rgb(8, 48, 24)"), Color::Rgb(8, 48, 24));
		assert_eq!(parse_color("rgb(8, 48)"), Color::White);
	}

	#[test]
	fn test_parse_border_type() {
		assert_eq!(parse_border_type("double"), BorderType::Double);
		assert_eq!(parse_border_type("THICK"), BorderType::Thick);
		assert_eq!(parse_border_type("unknown"), BorderType::Plain);
	}

	#[test]
	fn test_partial_theme_keeps_defaults() {
		let theme: Theme = toml::from_str("clock_color = \"cyan\"\n").unwrap();
		assert_eq!(theme.clock(), Color::Cyan);
		assert_eq!(theme.progress(), Color::Blue);
	}

	#[test]
	fn test_bundled_theme_loads() {
		let theme = Theme::load_named("midnight").unwrap();
		assert_eq!(theme.border_type(), BorderType::Double);
	}

	#[test]
	fn test_unknown_theme_falls_back() {
		assert!(Theme::load_named("no-such-theme").is_err());
		let theme = Theme::load(Some("no-such-theme"));
		assert_eq!(theme.clock(), Theme::default().clock());
	}
}
