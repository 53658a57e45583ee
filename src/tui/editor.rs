use crate::schedule::{BlindLevel, BlindSchedule, ScheduleError};
use crate::settings::GameSettings;

const MAX_VALUE: u32 = 999_999_999;
const MAX_MINUTES: u32 = 9_999;

fn push_digit(value: u32, digit: u32, max: u32) -> u32 {
	value
		.checked_mul(10)
		.and_then(|v| v.checked_add(digit))
		.filter(|v| *v <= max)
		.unwrap_or(value)
}

fn pop_digit(value: u32) -> u32 {
	value / 10
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelField {
	SmallBlind,
	BigBlind,
	Minutes,
}

impl LevelField {
	pub fn next(self) -> Self {
		match self {
			LevelField::SmallBlind => LevelField::BigBlind,
			LevelField::BigBlind => LevelField::Minutes,
			LevelField::Minutes => LevelField::SmallBlind,
		}
	}

	pub fn prev(self) -> Self {
		match self {
			LevelField::SmallBlind => LevelField::Minutes,
			LevelField::BigBlind => LevelField::SmallBlind,
			LevelField::Minutes => LevelField::BigBlind,
		}
	}
}

/// Working copy of a blind schedule. Values may sit below their minimums
/// while being typed; [`LevelEditor::build`] clamps them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelEditor {
	rows: Vec<BlindLevel>,
	row: usize,
	field: LevelField,
}

impl LevelEditor {
	pub fn from_schedule(schedule: &BlindSchedule) -> Self {
		Self {
			rows: schedule.levels().to_vec(),
			row: 0,
			field: LevelField::SmallBlind,
		}
	}

	pub fn rows(&self) -> &[BlindLevel] {
		&self.rows
	}

	pub fn selected_row(&self) -> usize {
		self.row
	}

	pub fn selected_field(&self) -> LevelField {
		self.field
	}

	pub fn move_up(&mut self) {
		self.row = self.row.saturating_sub(1);
	}

	pub fn move_down(&mut self) {
		if self.row + 1 < self.rows.len() {
			self.row += 1;
		}
	}

	pub fn next_field(&mut self) {
		self.field = self.field.next();
	}

	pub fn prev_field(&mut self) {
		self.field = self.field.prev();
	}

	pub fn push_digit(&mut self, digit: u32) {
		let field = self.field;
		if let Some(level) = self.rows.get_mut(self.row) {
			match field {
				LevelField::SmallBlind => level.small_blind = push_digit(level.small_blind, digit, MAX_VALUE),
				LevelField::BigBlind => level.big_blind = push_digit(level.big_blind, digit, MAX_VALUE),
				LevelField::Minutes => {
					level.duration = push_digit(level.duration_minutes(), digit, MAX_MINUTES) * 60;
				}
			}
		}
	}

	pub fn pop_digit(&mut self) {
		let field = self.field;
		if let Some(level) = self.rows.get_mut(self.row) {
			match field {
				LevelField::SmallBlind => level.small_blind = pop_digit(level.small_blind),
				LevelField::BigBlind => level.big_blind = pop_digit(level.big_blind),
				LevelField::Minutes => level.duration = pop_digit(level.duration_minutes()) * 60,
			}
		}
	}

	/// Appends a level with the last level's blinds doubled and selects it.
	pub fn add_level(&mut self) {
		if let Some(last) = self.rows.last().copied() {
			self.rows.push(last.doubled());
			self.row = self.rows.len() - 1;
		}
	}

	/// Removes the selected level unless it is the only one.
	pub fn remove_selected(&mut self) -> bool {
		if self.rows.len() <= 1 {
			return false;
		}
		self.rows.remove(self.row);
		if self.row >= self.rows.len() {
			self.row = self.rows.len() - 1;
		}
		true
	}

	/// Clamps each row (small ≥ 1, big ≥ max(2, small), at least a minute
	/// when the duration was cleared) and builds the replacement schedule.
	pub fn build(&self) -> Result<BlindSchedule, ScheduleError> {
		let levels = self
			.rows
			.iter()
			.map(|row| {
				let small_blind = row.small_blind.max(1);
				let big_blind = row.big_blind.max(2).max(small_blind);
				let duration = if row.duration == 0 { 60 } else { row.duration };
				BlindLevel::new(small_blind, big_blind, duration)
			})
			.collect();
		BlindSchedule::new(levels)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
	Players,
	EntryFee,
	StartingStack,
}

impl SettingsField {
	pub const ALL: [SettingsField; 3] = [
		SettingsField::Players,
		SettingsField::EntryFee,
		SettingsField::StartingStack,
	];

	pub fn label(&self) -> &'static str {
		match self {
			SettingsField::Players => "Number of Players",
			SettingsField::EntryFee => "Entry Fee ($)",
			SettingsField::StartingStack => "Starting Stack",
		}
	}

	pub fn next(self) -> Self {
		match self {
			SettingsField::Players => SettingsField::EntryFee,
			SettingsField::EntryFee => SettingsField::StartingStack,
			SettingsField::StartingStack => SettingsField::Players,
		}
	}

	pub fn prev(self) -> Self {
		match self {
			SettingsField::Players => SettingsField::StartingStack,
			SettingsField::EntryFee => SettingsField::Players,
			SettingsField::StartingStack => SettingsField::EntryFee,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsEditor {
	draft: GameSettings,
	field: SettingsField,
}

impl SettingsEditor {
	pub fn from_settings(settings: &GameSettings) -> Self {
		Self {
			draft: *settings,
			field: SettingsField::Players,
		}
	}

	pub fn draft(&self) -> &GameSettings {
		&self.draft
	}

	pub fn selected_field(&self) -> SettingsField {
		self.field
	}

	pub fn value(&self, field: SettingsField) -> u32 {
		match field {
			SettingsField::Players => self.draft.number_of_players,
			SettingsField::EntryFee => self.draft.entry_fee,
			SettingsField::StartingStack => self.draft.starting_stack,
		}
	}

	fn value_mut(&mut self) -> &mut u32 {
		match self.field {
			SettingsField::Players => &mut self.draft.number_of_players,
			SettingsField::EntryFee => &mut self.draft.entry_fee,
			SettingsField::StartingStack => &mut self.draft.starting_stack,
		}
	}

	pub fn next_field(&mut self) {
		self.field = self.field.next();
	}

	pub fn prev_field(&mut self) {
		self.field = self.field.prev();
	}

	pub fn push_digit(&mut self, digit: u32) {
		let value = self.value_mut();
		*value = push_digit(*value, digit, MAX_VALUE);
	}

	pub fn pop_digit(&mut self) {
		let value = self.value_mut();
		*value = pop_digit(*value);
	}

	pub fn build(&self) -> GameSettings {
		self.draft.sanitized()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn two_levels() -> BlindSchedule {
		BlindSchedule::new(vec![BlindLevel::new(10, 20, 900), BlindLevel::new(20, 40, 900)]).unwrap()
	}

	#[test]
	fn test_digit_entry() {
		let mut editor = LevelEditor::from_schedule(&two_levels());
		editor.push_digit(5);
		assert_eq!(editor.rows()[0].small_blind, 105);
		editor.pop_digit();
		editor.pop_digit();
		assert_eq!(editor.rows()[0].small_blind, 1);
	}

	#[test]
	fn test_digit_entry_caps_value() {
		assert_eq!(push_digit(999_999_999, 9, MAX_VALUE), 999_999_999);
		assert_eq!(push_digit(0, 7, MAX_VALUE), 7);
	}

	#[test]
	fn test_minutes_field_edits_duration() {
		let mut editor = LevelEditor::from_schedule(&two_levels());
		editor.next_field();
		editor.next_field();
		assert_eq!(editor.selected_field(), LevelField::Minutes);
		editor.pop_digit();
		editor.pop_digit();
		assert_eq!(editor.rows()[0].duration, 0);
		editor.push_digit(2);
		editor.push_digit(0);
		assert_eq!(editor.rows()[0].duration, 1200);
	}

	#[test]
	fn test_add_level_doubles_last() {
		let mut editor = LevelEditor::from_schedule(&two_levels());
		editor.add_level();
		assert_eq!(editor.rows().len(), 3);
		assert_eq!(editor.rows()[2], BlindLevel::new(40, 80, 900));
		assert_eq!(editor.selected_row(), 2);
	}

	#[test]
	fn test_cannot_remove_only_level() {
		let schedule = BlindSchedule::new(vec![BlindLevel::new(10, 20, 900)]).unwrap();
		let mut editor = LevelEditor::from_schedule(&schedule);
		assert!(!editor.remove_selected());
		assert_eq!(editor.rows().len(), 1);
	}

	#[test]
	fn test_remove_last_row_moves_selection() {
		let mut editor = LevelEditor::from_schedule(&two_levels());
		editor.move_down();
		assert!(editor.remove_selected());
		assert_eq!(editor.selected_row(), 0);
		assert_eq!(editor.rows(), &[BlindLevel::new(10, 20, 900)]);
	}

	#[test]
	fn test_build_clamps_fields() {
		let mut editor = LevelEditor::from_schedule(&two_levels());
		editor.pop_digit();
		editor.pop_digit();
		editor.next_field();
		editor.pop_digit();
		editor.pop_digit();
		editor.next_field();
		for _ in 0..3 {
			editor.pop_digit();
		}
		let schedule = editor.build().unwrap();
		assert_eq!(*schedule.first(), BlindLevel::new(1, 2, 60));
	}

	#[test]
	fn test_build_raises_big_blind_to_small() {
		let mut editor = LevelEditor::from_schedule(&two_levels());
		editor.push_digit(0);
		let schedule = editor.build().unwrap();
		assert_eq!(*schedule.first(), BlindLevel::new(100, 100, 900));
	}

	#[test]
	fn test_build_keeps_sub_minute_durations() {
		let schedule = BlindSchedule::new(vec![BlindLevel::new(10, 20, 30)]).unwrap();
		let editor = LevelEditor::from_schedule(&schedule);
		assert_eq!(editor.build().unwrap(), schedule);
	}

	#[test]
	fn test_row_navigation_bounds() {
		let mut editor = LevelEditor::from_schedule(&two_levels());
		editor.move_up();
		assert_eq!(editor.selected_row(), 0);
		editor.move_down();
		editor.move_down();
		assert_eq!(editor.selected_row(), 1);
	}

	#[test]
	fn test_settings_editor_clamps_on_build() {
		let mut editor = SettingsEditor::from_settings(&GameSettings::default());
		editor.pop_digit();
		assert_eq!(editor.value(SettingsField::Players), 0);
		editor.next_field();
		editor.pop_digit();
		editor.pop_digit();
		editor.push_digit(7);
		editor.push_digit(5);
		let settings = editor.build();
		assert_eq!(settings.number_of_players, 2);
		assert_eq!(settings.entry_fee, 75);
		assert_eq!(settings.starting_stack, 10000);
	}

	#[test]
	fn test_settings_field_cycle() {
		let mut editor = SettingsEditor::from_settings(&GameSettings::default());
		editor.prev_field();
		assert_eq!(editor.selected_field(), SettingsField::StartingStack);
		editor.next_field();
		assert_eq!(editor.selected_field(), SettingsField::Players);
	}
}
