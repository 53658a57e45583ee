use serde::{Deserialize, Serialize};

pub const DEFAULT_LEVEL_SECONDS: u32 = 900;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlindLevel {
	pub small_blind: u32,
	pub big_blind: u32,
	/// Seconds.
	pub duration: u32,
}

impl BlindLevel {
	pub fn new(small_blind: u32, big_blind: u32, duration: u32) -> Self {
		Self { small_blind, big_blind, duration }
	}

	/// The level appended after this one by the editor.
	pub fn doubled(&self) -> Self {
		Self {
			small_blind: self.small_blind.saturating_mul(2),
			big_blind: self.big_blind.saturating_mul(2),
			duration: self.duration,
		}
	}

	pub fn duration_minutes(&self) -> u32 {
		self.duration / 60
	}

	pub fn blinds_label(&self) -> String {
		format!("{}/{}", self.small_blind, self.big_blind)
	}

	fn check(&self) -> Result<(), &'static str> {
		if self.small_blind == 0 {
			return Err("small blind must be at least 1");
		}
		if self.big_blind < self.small_blind {
			return Err("big blind must not be below the small blind");
		}
		if self.duration == 0 {
			return Err("duration must be at least one second");
		}
		Ok(())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
	Empty,
	InvalidLevel { index: usize, reason: &'static str },
}

impl std::fmt::Display for ScheduleError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ScheduleError::Empty => write!(f, "blind schedule needs at least one level"),
			ScheduleError::InvalidLevel { index, reason } => {
				write!(f, "level {}: {}", index + 1, reason)
			}
		}
	}
}

impl std::error::Error for ScheduleError {}

/// Blind levels in play order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<BlindLevel>", into = "Vec<BlindLevel>")]
pub struct BlindSchedule {
	levels: Vec<BlindLevel>,
}

impl BlindSchedule {
	pub fn new(levels: Vec<BlindLevel>) -> Result<Self, ScheduleError> {
		if levels.is_empty() {
			return Err(ScheduleError::Empty);
		}
		for (index, level) in levels.iter().enumerate() {
			level.check().map_err(|reason| ScheduleError::InvalidLevel { index, reason })?;
		}
		Ok(Self { levels })
	}

	pub fn len(&self) -> usize {
		self.levels.len()
	}

	pub fn levels(&self) -> &[BlindLevel] {
		&self.levels
	}

	pub fn level(&self, index: usize) -> Option<&BlindLevel> {
		self.levels.get(index)
	}

	pub fn first(&self) -> &BlindLevel {
		&self.levels[0]
	}

	pub fn last_index(&self) -> usize {
		self.levels.len() - 1
	}

	pub fn is_last(&self, index: usize) -> bool {
		index >= self.last_index()
	}

	pub fn next_level(&self, index: usize) -> Option<&BlindLevel> {
		self.levels.get(index + 1)
	}

	pub fn total_duration(&self) -> u32 {
		self.levels.iter().map(|l| l.duration).fold(0u32, u32::saturating_add)
	}

	/// Second at which each level begins, counted from the start of level 1.
	pub fn start_offsets(&self) -> Vec<u32> {
		let mut elapsed = 0u32;
		self.levels
			.iter()
			.map(|l| {
				let start = elapsed;
				elapsed = elapsed.saturating_add(l.duration);
				start
			})
			.collect()
	}
}

impl Default for BlindSchedule {
	fn default() -> Self {
		Self {
			levels: vec![
				BlindLevel::new(10, 20, DEFAULT_LEVEL_SECONDS),
				BlindLevel::new(20, 40, DEFAULT_LEVEL_SECONDS),
				BlindLevel::new(50, 100, DEFAULT_LEVEL_SECONDS),
				BlindLevel::new(100, 200, DEFAULT_LEVEL_SECONDS),
				BlindLevel::new(200, 400, DEFAULT_LEVEL_SECONDS),
				BlindLevel::new(500, 1000, DEFAULT_LEVEL_SECONDS),
			],
		}
	}
}

impl TryFrom<Vec<BlindLevel>> for BlindSchedule {
	type Error = ScheduleError;

	fn try_from(levels: Vec<BlindLevel>) -> Result<Self, Self::Error> {
		Self::new(levels)
	}
}

impl From<BlindSchedule> for Vec<BlindLevel> {
	fn from(schedule: BlindSchedule) -> Self {
		schedule.levels
	}
}
