use crate::engine::TimerEngine;
use crate::format::format_time;
use crate::schedule::BlindLevel;
use crate::settings::GameSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStatus {
	Paused,
	Running,
	Complete,
}

impl ClockStatus {
	pub fn label(&self) -> &'static str {
		match self {
			ClockStatus::Paused => "PAUSED",
			ClockStatus::Running => "RUNNING",
			ClockStatus::Complete => "FINAL LEVEL OVER",
		}
	}
}

/// Everything the screen shows, derived from the engine and session at
/// render time.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerView {
	pub clock: String,
	pub level_number: usize,
	pub level_count: usize,
	pub blinds: BlindLevel,
	pub next_blinds: Option<BlindLevel>,
	pub progress: f64,
	pub status: ClockStatus,
	pub players: u32,
	pub active_players: u32,
	pub prize_pool: u64,
	pub starting_stack: u32,
	pub average_stack: u64,
}

impl TimerView {
	pub fn capture(engine: &TimerEngine, session: &GameSession) -> Self {
		let status = if engine.is_complete() {
			ClockStatus::Complete
		} else if engine.is_running() {
			ClockStatus::Running
		} else {
			ClockStatus::Paused
		};

		Self {
			clock: format_time(engine.remaining_seconds()),
			level_number: engine.current_level_index() + 1,
			level_count: engine.schedule().len(),
			blinds: *engine.current_level(),
			next_blinds: engine.next_level().copied(),
			progress: engine.progress_fraction().clamp(0.0, 1.0),
			status,
			players: session.settings().number_of_players,
			active_players: session.active_players(),
			prize_pool: session.total_prize_pool(),
			starting_stack: session.settings().starting_stack,
			average_stack: session.average_stack(),
		}
	}

	pub fn level_label(&self) -> String {
		format!("Level {} of {}", self.level_number, self.level_count)
	}

	pub fn blinds_label(&self) -> String {
		format!("Blinds: {}", self.blinds.blinds_label())
	}

	pub fn next_blinds_label(&self) -> Option<String> {
		self.next_blinds.map(|l| format!("Next: {}", l.blinds_label()))
	}

	pub fn players_label(&self) -> String {
		if self.active_players == self.players {
			self.players.to_string()
		} else {
			format!("{} / {}", self.active_players, self.players)
		}
	}
}
