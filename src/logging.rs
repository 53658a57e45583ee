use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Local;

struct LogState {
	file: Option<std::fs::File>,
	current_date: String,
	dir: Option<PathBuf>,
}

static LOG_STATE: Mutex<LogState> = Mutex::new(LogState {
	file: None,
	current_date: String::new(),
	dir: None,
});

const DEFAULT_LOG_DIR: &str = "logs";

fn today() -> String {
	Local::now().format("%Y-%m-%d").to_string()
}

fn timestamp() -> String {
	Local::now().format("%H:%M:%S%.3f").to_string()
}

fn ensure_log_file(state: &mut LogState) {
	let date = today();
	if state.current_date != date || state.file.is_none() {
		let dir = state.dir.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR));
		let _ = fs::create_dir_all(&dir);
		let path = dir.join(format!("blind-timer-{}.log", date));
		if let Ok(file) = OpenOptions::new()
			.create(true)
			.append(true)
			.open(&path)
		{
			state.file = Some(file);
			state.current_date = date;
		}
	}
}

/// Redirects subsequent log lines into `dir`.
pub fn set_log_dir(dir: PathBuf) {
	if let Ok(mut state) = LOG_STATE.lock() {
		state.dir = Some(dir);
		state.file = None;
	}
}

pub fn log(area: &str, log_type: &str, message: &str) {
	if let Ok(mut state) = LOG_STATE.lock() {
		ensure_log_file(&mut state);

		let line = format!("[{}][{}:{}] {}\n", timestamp(), area, log_type, message);

		if let Some(ref mut file) = state.file {
			let _ = file.write_all(line.as_bytes());
			let _ = file.flush();
		}
	}
}

pub mod engine {
	use super::log;
	use crate::format::format_time;

	pub fn started(level: usize, remaining: u32) {
		log("Engine", "START", &format!("level {} at {}", level, format_time(remaining)));
	}

	pub fn paused(level: usize, remaining: u32) {
		log("Engine", "PAUSE", &format!("level {} at {}", level, format_time(remaining)));
	}

	pub fn level(level: usize, small: u32, big: u32) {
		log("Engine", "LEVEL", &format!("level {}: {}/{}", level, small, big));
	}

	pub fn reset(levels: usize) {
		log("Engine", "RESET", &format!("back to level 1 of {}", levels));
	}

	pub fn schedule(levels: usize, total_seconds: u32) {
		log("Engine", "SCHEDULE", &format!("{} levels, {}s total", levels, total_seconds));
	}

	pub fn complete(level: usize) {
		log("Engine", "COMPLETE", &format!("final level {} finished", level));
	}
}

pub mod session {
	use super::log;

	pub fn settings(players: u32, entry_fee: u32, starting_stack: u32) {
		log(
			"Session",
			"SETTINGS",
			&format!("players={} entry_fee={} starting_stack={}", players, entry_fee, starting_stack),
		);
	}

	pub fn eliminated(active: u32, total: u32) {
		log("Session", "ELIMINATED", &format!("{}/{} remaining", active, total));
	}

	pub fn restored(active: u32, total: u32) {
		log("Session", "RESTORED", &format!("{}/{} remaining", active, total));
	}
}

pub mod config {
	use super::log;

	pub fn loaded(path: &str) {
		log("Config", "LOADED", path);
	}

	pub fn fallback(reason: &str) {
		log("Config", "FALLBACK", reason);
	}
}

pub mod tui {
	use super::log;

	pub fn input(key: &str) {
		log("TUI", "INPUT", key);
	}

	pub fn event(msg: &str) {
		log("TUI", "EVENT", msg);
	}
}
