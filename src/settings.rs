use serde::{Deserialize, Serialize};

use crate::logging;

pub const MIN_PLAYERS: u32 = 2;
pub const MIN_STARTING_STACK: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
	pub number_of_players: u32,
	pub entry_fee: u32,
	pub starting_stack: u32,
}

impl Default for GameSettings {
	fn default() -> Self {
		Self {
			number_of_players: 6,
			entry_fee: 50,
			starting_stack: 10000,
		}
	}
}

impl GameSettings {
	/// Clamps every field to its minimum.
	pub fn sanitized(self) -> Self {
		Self {
			number_of_players: self.number_of_players.max(MIN_PLAYERS),
			entry_fee: self.entry_fee,
			starting_stack: self.starting_stack.max(MIN_STARTING_STACK),
		}
	}

	pub fn total_prize_pool(&self) -> u64 {
		u64::from(self.number_of_players) * u64::from(self.entry_fee)
	}

	pub fn total_chips(&self) -> u64 {
		u64::from(self.number_of_players) * u64::from(self.starting_stack)
	}
}

/// Settings plus the count of players still in the tournament.
///
/// `active_players` stays within `1..=number_of_players`, so the average
/// stack is always defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
	settings: GameSettings,
	active_players: u32,
}

impl GameSession {
	pub fn new(settings: GameSettings) -> Self {
		let settings = settings.sanitized();
		Self {
			settings,
			active_players: settings.number_of_players,
		}
	}

	pub fn settings(&self) -> &GameSettings {
		&self.settings
	}

	pub fn active_players(&self) -> u32 {
		self.active_players
	}

	pub fn replace_settings(&mut self, settings: GameSettings) {
		self.settings = settings.sanitized();
		self.active_players = self.settings.number_of_players;
		logging::session::settings(
			self.settings.number_of_players,
			self.settings.entry_fee,
			self.settings.starting_stack,
		);
	}

	pub fn eliminate_player(&mut self) -> bool {
		if self.active_players <= 1 {
			return false;
		}
		self.active_players -= 1;
		logging::session::eliminated(self.active_players, self.settings.number_of_players);
		true
	}

	pub fn restore_player(&mut self) -> bool {
		if self.active_players >= self.settings.number_of_players {
			return false;
		}
		self.active_players += 1;
		logging::session::restored(self.active_players, self.settings.number_of_players);
		true
	}

	pub fn total_prize_pool(&self) -> u64 {
		self.settings.total_prize_pool()
	}

	/// Chips in play divided by surviving players, rounded half up.
	pub fn average_stack(&self) -> u64 {
		let active = u64::from(self.active_players.max(1));
		(self.settings.total_chips() + active / 2) / active
	}
}

impl Default for GameSession {
	fn default() -> Self {
		Self::new(GameSettings::default())
	}
}
