use crossterm::event::KeyCode;

use crate::schedule::BlindSchedule;
use crate::settings::GameSettings;
use crate::tui::editor::{LevelEditor, SettingsEditor};

pub const CLOCK_HELP: &str =
	"[Space] start/pause  [n] next  [r] reset  [l] levels  [g] game  [e/u] out/in  [f] full  [t] theme  [q] quit";
const LEVEL_HELP: &str =
	"[↑/↓] level  [←/→] field  [0-9] type  [⌫] erase  [a] add  [d] delete  [Enter] save  [Esc] cancel";
const SETTINGS_HELP: &str = "[↑/↓] field  [0-9] type  [⌫] erase  [Enter] save  [Esc] cancel";

#[derive(Debug, Clone, Default)]
pub enum InputState {
	#[default]
	Clock,
	EditingLevels(LevelEditor),
	EditingSettings(SettingsEditor),
}

#[derive(Debug)]
pub enum InputEffect {
	None,
	ToggleRunning,
	NextLevel,
	Reset,
	OpenLevelEditor,
	OpenSettingsEditor,
	EliminatePlayer,
	RestorePlayer,
	ToggleFullscreen,
	CycleTheme,
	SaveSchedule(BlindSchedule),
	SaveSettings(GameSettings),
	SetPrompt(String),
	ClearPrompt,
	Quit,
}

impl InputState {
	pub fn is_editing(&self) -> bool {
		matches!(self, Self::EditingLevels(_) | Self::EditingSettings(_))
	}

	pub fn enter_level_editor(schedule: &BlindSchedule) -> (Self, InputEffect) {
		(
			Self::EditingLevels(LevelEditor::from_schedule(schedule)),
			InputEffect::SetPrompt(LEVEL_HELP.into()),
		)
	}

	pub fn enter_settings_editor(settings: &GameSettings) -> (Self, InputEffect) {
		(
			Self::EditingSettings(SettingsEditor::from_settings(settings)),
			InputEffect::SetPrompt(SETTINGS_HELP.into()),
		)
	}

	pub fn handle_key(self, key: KeyCode) -> (Self, InputEffect) {
		match self {
			Self::Clock => handle_clock(key),
			Self::EditingLevels(editor) => handle_level_editor(editor, key),
			Self::EditingSettings(editor) => handle_settings_editor(editor, key),
		}
	}
}

fn handle_clock(key: KeyCode) -> (InputState, InputEffect) {
	let effect = match key {
		KeyCode::Char(' ') | KeyCode::Char('p') => InputEffect::ToggleRunning,
		KeyCode::Char('n') | KeyCode::Right => InputEffect::NextLevel,
		KeyCode::Char('r') => InputEffect::Reset,
		KeyCode::Char('l') => InputEffect::OpenLevelEditor,
		KeyCode::Char('g') => InputEffect::OpenSettingsEditor,
		KeyCode::Char('e') => InputEffect::EliminatePlayer,
		KeyCode::Char('u') => InputEffect::RestorePlayer,
		KeyCode::Char('f') => InputEffect::ToggleFullscreen,
		KeyCode::Char('t') => InputEffect::CycleTheme,
		KeyCode::Char('q') | KeyCode::Esc => InputEffect::Quit,
		_ => InputEffect::None,
	};
	(InputState::Clock, effect)
}

fn handle_level_editor(mut editor: LevelEditor, key: KeyCode) -> (InputState, InputEffect) {
	match key {
		KeyCode::Up => editor.move_up(),
		KeyCode::Down => editor.move_down(),
		KeyCode::Right | KeyCode::Tab => editor.next_field(),
		KeyCode::Left | KeyCode::BackTab => editor.prev_field(),
		KeyCode::Backspace => editor.pop_digit(),
		KeyCode::Char(c) if c.is_ascii_digit() => {
			if let Some(digit) = c.to_digit(10) {
				editor.push_digit(digit);
			}
		}
		KeyCode::Char('a') => editor.add_level(),
		KeyCode::Char('d') | KeyCode::Delete => {
			if !editor.remove_selected() {
				return (
					InputState::EditingLevels(editor),
					InputEffect::SetPrompt("A schedule needs at least one level.".into()),
				);
			}
		}
		KeyCode::Enter => {
			return match editor.build() {
				Ok(schedule) => (InputState::Clock, InputEffect::SaveSchedule(schedule)),
				Err(e) => (InputState::EditingLevels(editor), InputEffect::SetPrompt(e.to_string())),
			};
		}
		KeyCode::Esc => return (InputState::Clock, InputEffect::ClearPrompt),
		_ => return (InputState::EditingLevels(editor), InputEffect::None),
	}
	(InputState::EditingLevels(editor), InputEffect::SetPrompt(LEVEL_HELP.into()))
}

fn handle_settings_editor(mut editor: SettingsEditor, key: KeyCode) -> (InputState, InputEffect) {
	match key {
		KeyCode::Up | KeyCode::BackTab => editor.prev_field(),
		KeyCode::Down | KeyCode::Tab => editor.next_field(),
		KeyCode::Backspace => editor.pop_digit(),
		KeyCode::Char(c) if c.is_ascii_digit() => {
			if let Some(digit) = c.to_digit(10) {
				editor.push_digit(digit);
			}
		}
		KeyCode::Enter => return (InputState::Clock, InputEffect::SaveSettings(editor.build())),
		KeyCode::Esc => return (InputState::Clock, InputEffect::ClearPrompt),
		_ => return (InputState::EditingSettings(editor), InputEffect::None),
	}
	(InputState::EditingSettings(editor), InputEffect::None)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::schedule::BlindLevel;
	use crate::tui::editor::SettingsField;

	#[test]
	fn clock_space_toggles() {
		let (state, effect) = InputState::Clock.handle_key(KeyCode::Char(' '));
		assert!(matches!(state, InputState::Clock));
		assert!(matches!(effect, InputEffect::ToggleRunning));
	}

	#[test]
	fn clock_q_quits() {
		let (_, effect) = InputState::Clock.handle_key(KeyCode::Char('q'));
		assert!(matches!(effect, InputEffect::Quit));
	}

	#[test]
	fn clock_other_key_does_nothing() {
		let (state, effect) = InputState::Clock.handle_key(KeyCode::Char('x'));
		assert!(matches!(state, InputState::Clock));
		assert!(matches!(effect, InputEffect::None));
	}

	#[test]
	fn clock_keys_map_to_commands() {
		let cases = [
			('n', "NextLevel"),
			('r', "Reset"),
			('l', "OpenLevelEditor"),
			('g', "OpenSettingsEditor"),
			('e', "EliminatePlayer"),
			('u', "RestorePlayer"),
			('f', "ToggleFullscreen"),
			('t', "CycleTheme"),
		];
		for (key, expected) in cases {
			let (_, effect) = InputState::Clock.handle_key(KeyCode::Char(key));
			assert_eq!(format!("{:?}", effect), expected, "key {}", key);
		}
	}

	#[test]
	fn level_editor_enter_saves_schedule() {
		let (state, effect) = InputState::enter_level_editor(&BlindSchedule::default());
		assert!(state.is_editing());
		assert!(matches!(effect, InputEffect::SetPrompt(_)));

		let (state, _) = state.handle_key(KeyCode::Char('a'));
		let (state, effect) = state.handle_key(KeyCode::Enter);
		assert!(matches!(state, InputState::Clock));
		match effect {
			InputEffect::SaveSchedule(schedule) => {
				assert_eq!(schedule.len(), 7);
				assert_eq!(schedule.levels()[6], BlindLevel::new(1000, 2000, 900));
			}
			other => panic!("Expected SaveSchedule, got {:?}", other),
		}
	}

	#[test]
	fn level_editor_esc_discards() {
		let (state, _) = InputState::enter_level_editor(&BlindSchedule::default());
		let (state, _) = state.handle_key(KeyCode::Char('d'));
		let (state, effect) = state.handle_key(KeyCode::Esc);
		assert!(matches!(state, InputState::Clock));
		assert!(matches!(effect, InputEffect::ClearPrompt));
	}

	#[test]
	fn level_editor_refuses_to_delete_last_level() {
		let schedule = BlindSchedule::new(vec![BlindLevel::new(5, 10, 300)]).unwrap();
		let (state, _) = InputState::enter_level_editor(&schedule);
		let (state, effect) = state.handle_key(KeyCode::Char('d'));
		assert!(matches!(state, InputState::EditingLevels(_)));
		assert!(matches!(effect, InputEffect::SetPrompt(ref p) if p.contains("at least one")));
	}

	#[test]
	fn level_editor_digits_edit_selected_field() {
		let (state, _) = InputState::enter_level_editor(&BlindSchedule::default());
		let (state, _) = state.handle_key(KeyCode::Right);
		let (state, _) = state.handle_key(KeyCode::Char('0'));
		if let InputState::EditingLevels(editor) = &state {
			assert_eq!(editor.rows()[0].big_blind, 200);
		} else {
			panic!("Expected EditingLevels state");
		}
	}

	#[test]
	fn settings_editor_round_trip() {
		let (state, _) = InputState::enter_settings_editor(&GameSettings::default());
		let (state, _) = state.handle_key(KeyCode::Char('0'));
		if let InputState::EditingSettings(editor) = &state {
			assert_eq!(editor.value(SettingsField::Players), 60);
		} else {
			panic!("Expected EditingSettings state");
		}
		let (state, effect) = state.handle_key(KeyCode::Enter);
		assert!(matches!(state, InputState::Clock));
		match effect {
			InputEffect::SaveSettings(settings) => assert_eq!(settings.number_of_players, 60),
			other => panic!("Expected SaveSettings, got {:?}", other),
		}
	}

	#[test]
	fn settings_editor_q_is_ignored() {
		let (state, _) = InputState::enter_settings_editor(&GameSettings::default());
		let (state, effect) = state.handle_key(KeyCode::Char('q'));
		assert!(matches!(state, InputState::EditingSettings(_)));
		assert!(matches!(effect, InputEffect::None));
	}
}
