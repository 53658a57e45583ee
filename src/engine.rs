use crate::logging;
use crate::schedule::{BlindLevel, BlindSchedule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
	pub is_running: bool,
	pub current_level_index: usize,
	pub remaining_seconds: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
	Ticked { remaining: u32 },
	LevelAdvanced { index: usize, level: BlindLevel },
	ScheduleComplete,
}

/// Countdown over a blind schedule.
///
/// The engine is the only thing that mutates timer state. A periodic driver
/// calls [`TimerEngine::tick`] once per second; user commands call the other
/// methods. When a non-final level runs out, the engine moves to the next
/// level inside the same tick, so the clock never rests at zero while
/// levels remain.
#[derive(Debug, Clone)]
pub struct TimerEngine {
	schedule: BlindSchedule,
	state: TimerState,
}

impl TimerEngine {
	pub fn new(schedule: BlindSchedule) -> Self {
		let state = TimerState {
			is_running: false,
			current_level_index: 0,
			remaining_seconds: schedule.first().duration,
		};
		Self { schedule, state }
	}

	pub fn state(&self) -> TimerState {
		self.state
	}

	pub fn schedule(&self) -> &BlindSchedule {
		&self.schedule
	}

	pub fn is_running(&self) -> bool {
		self.state.is_running
	}

	pub fn current_level_index(&self) -> usize {
		self.state.current_level_index
	}

	pub fn remaining_seconds(&self) -> u32 {
		self.state.remaining_seconds
	}

	pub fn current_level(&self) -> &BlindLevel {
		self.schedule
			.level(self.state.current_level_index)
			.unwrap_or_else(|| self.schedule.first())
	}

	pub fn next_level(&self) -> Option<&BlindLevel> {
		self.schedule.next_level(self.state.current_level_index)
	}

	pub fn is_final_level(&self) -> bool {
		self.schedule.is_last(self.state.current_level_index)
	}

	/// Final level with no time left.
	pub fn is_complete(&self) -> bool {
		self.is_final_level() && self.state.remaining_seconds == 0
	}

	pub fn tick(&mut self) -> Option<TimerEvent> {
		if !self.state.is_running || self.state.remaining_seconds == 0 {
			return None;
		}

		self.state.remaining_seconds -= 1;
		if self.state.remaining_seconds > 0 {
			return Some(TimerEvent::Ticked { remaining: self.state.remaining_seconds });
		}

		if self.is_final_level() {
			logging::engine::complete(self.state.current_level_index + 1);
			return Some(TimerEvent::ScheduleComplete);
		}

		self.enter_level(self.state.current_level_index + 1);
		Some(TimerEvent::LevelAdvanced {
			index: self.state.current_level_index,
			level: *self.current_level(),
		})
	}

	pub fn start(&mut self) {
		if !self.state.is_running {
			self.state.is_running = true;
			logging::engine::started(self.state.current_level_index + 1, self.state.remaining_seconds);
		}
	}

	pub fn pause(&mut self) {
		if self.state.is_running {
			self.state.is_running = false;
			logging::engine::paused(self.state.current_level_index + 1, self.state.remaining_seconds);
		}
	}

	/// Returns the new running flag.
	pub fn toggle_running(&mut self) -> bool {
		if self.state.is_running {
			self.pause();
		} else {
			self.start();
		}
		self.state.is_running
	}

	/// Skips to the next level whether or not the clock is running.
	/// Returns false on the final level.
	pub fn advance_level(&mut self) -> bool {
		if self.is_final_level() {
			return false;
		}
		self.enter_level(self.state.current_level_index + 1);
		true
	}

	pub fn reset(&mut self) {
		self.state = TimerState {
			is_running: false,
			current_level_index: 0,
			remaining_seconds: self.schedule.first().duration,
		};
		logging::engine::reset(self.schedule.len());
	}

	pub fn replace_schedule(&mut self, schedule: BlindSchedule) {
		self.schedule = schedule;
		logging::engine::schedule(self.schedule.len(), self.schedule.total_duration());
		self.reset();
	}

	/// Share of the current level already elapsed, in `[0, 1]`.
	pub fn progress_fraction(&self) -> f64 {
		let duration = self.current_level().duration;
		if duration == 0 {
			return 0.0;
		}
		let elapsed = duration.saturating_sub(self.state.remaining_seconds);
		f64::from(elapsed) / f64::from(duration)
	}

	fn enter_level(&mut self, index: usize) {
		self.state.current_level_index = index;
		self.state.remaining_seconds = self.current_level().duration;
		let level = *self.current_level();
		logging::engine::level(index + 1, level.small_blind, level.big_blind);
	}
}
