use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, Terminal};

use blind_timer::config::TimerConfig;
use blind_timer::engine::{TimerEngine, TimerEvent};
use blind_timer::schedule::{BlindLevel, BlindSchedule};
use blind_timer::settings::GameSettings;
use blind_timer::theme::Theme;
use blind_timer::tui::TimerUI;
use blind_timer::view::ClockStatus;

fn default_ui() -> TimerUI {
	TimerUI::new(
		BlindSchedule::default(),
		GameSettings::default(),
		Theme::default(),
		"default".to_string(),
	)
}

fn screen(ui: &TimerUI, width: u16, height: u16) -> String {
	let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
	terminal.draw(|f| ui.render(f, f.area())).unwrap();
	let buf = terminal.backend().buffer().clone();
	buf.content()
		.chunks(width as usize)
		.map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
		.collect::<Vec<_>>()
		.join("\n")
}

#[test]
fn test_two_level_countdown() {
	let schedule = BlindSchedule::new(vec![
		BlindLevel::new(10, 20, 900),
		BlindLevel::new(20, 40, 900),
	])
	.unwrap();
	let mut engine = TimerEngine::new(schedule);
	engine.start();

	for _ in 0..899 {
		assert!(matches!(engine.tick(), Some(TimerEvent::Ticked { .. })));
	}
	assert_eq!(engine.remaining_seconds(), 1);

	match engine.tick() {
		Some(TimerEvent::LevelAdvanced { index, level }) => {
			assert_eq!(index, 1);
			assert_eq!(level, BlindLevel::new(20, 40, 900));
		}
		other => panic!("Expected LevelAdvanced, got {:?}", other),
	}
	assert_eq!(engine.remaining_seconds(), 900);
	assert!(engine.is_running());

	for _ in 0..899 {
		engine.tick();
	}
	assert_eq!(engine.tick(), Some(TimerEvent::ScheduleComplete));
	assert!(engine.is_complete());
	assert_eq!(engine.tick(), None);
	assert_eq!(engine.remaining_seconds(), 0);
}

#[test]
fn test_config_file_drives_ui() {
	let config = TimerConfig::parse(
		r#"
theme = "midnight"

[game]
number_of_players = 9
entry_fee = 20
starting_stack = 5000

[[levels]]
small_blind = 25
big_blind = 50
duration = 600

[[levels]]
small_blind = 50
big_blind = 100
duration = 600
"#,
	)
	.unwrap();

	let ui = TimerUI::new(config.levels, config.game, Theme::default(), "default".to_string());
	let view = ui.view();
	assert_eq!(view.clock, "10:00");
	assert_eq!(view.level_label(), "Level 1 of 2");
	assert_eq!(view.blinds_label(), "Blinds: 25/50");
	assert_eq!(view.prize_pool, 180);
	assert_eq!(view.average_stack, 5000);
}

#[test]
fn test_renders_clock_screen() {
	let ui = default_ui();
	let text = screen(&ui, 100, 40);
	assert!(text.contains("Level 1 of 6"));
	assert!(text.contains("PAUSED"));
	assert!(text.contains("Blinds: 10/20"));
	assert!(text.contains("Next: 20/40"));
	assert!(text.contains("Prize Pool"));
	assert!(text.contains("$300"));
	assert!(text.contains("10000"));
}

#[test]
fn test_fullscreen_hides_stats() {
	let ui = default_ui().with_display(true, true);
	let text = screen(&ui, 100, 40);
	assert!(text.contains("Blinds: 10/20"));
	assert!(!text.contains("Prize Pool"));
	assert!(!text.contains("Level 1 of 6"));
}

#[test]
fn test_level_editor_renders_over_clock() {
	let mut ui = default_ui();
	ui.handle_key(KeyCode::Char('l'), Instant::now());
	let text = screen(&ui, 100, 40);
	assert!(text.contains("Blind Levels"));
	assert!(text.contains("Small Blind"));
}

#[test]
fn test_edit_levels_resets_running_clock() {
	let mut ui = default_ui();
	let t0 = Instant::now();
	ui.handle_key(KeyCode::Char(' '), t0);
	ui.pump(t0 + Duration::from_secs(30));
	assert_eq!(ui.engine().remaining_seconds(), 870);

	ui.handle_key(KeyCode::Char('l'), t0 + Duration::from_secs(30));
	// small blind 10 -> 15
	ui.handle_key(KeyCode::Backspace, t0 + Duration::from_secs(31));
	ui.handle_key(KeyCode::Char('5'), t0 + Duration::from_secs(31));
	ui.handle_key(KeyCode::Enter, t0 + Duration::from_secs(32));

	let view = ui.view();
	assert_eq!(view.status, ClockStatus::Paused);
	assert_eq!(view.clock, "15:00");
	assert_eq!(view.blinds, BlindLevel::new(15, 20, 900));
	assert!(ui.pump(t0 + Duration::from_secs(60)).is_empty());
}

#[test]
fn test_edit_settings_updates_derived_values() {
	let mut ui = default_ui();
	let t0 = Instant::now();
	ui.handle_key(KeyCode::Char('e'), t0);
	assert_eq!(ui.view().players_label(), "5 / 6");

	ui.handle_key(KeyCode::Char('g'), t0);
	ui.handle_key(KeyCode::Down, t0);
	ui.handle_key(KeyCode::Char('0'), t0);
	ui.handle_key(KeyCode::Enter, t0);

	let view = ui.view();
	assert_eq!(view.prize_pool, 3000);
	assert_eq!(view.players_label(), "6");
	assert_eq!(view.average_stack, 10000);
}

#[test]
fn test_elimination_raises_average_stack() {
	let mut ui = default_ui();
	let t0 = Instant::now();
	for _ in 0..3 {
		ui.handle_key(KeyCode::Char('e'), t0);
	}
	let view = ui.view();
	assert_eq!(view.active_players, 3);
	assert_eq!(view.average_stack, 20000);
	assert_eq!(view.prize_pool, 300);
}

#[test]
fn test_final_level_stops_at_zero() {
	let mut ui = TimerUI::new(
		BlindSchedule::new(vec![BlindLevel::new(100, 200, 5)]).unwrap(),
		GameSettings::default(),
		Theme::default(),
		"default".to_string(),
	);
	let t0 = Instant::now();
	ui.start(t0);

	let events = ui.pump(t0 + Duration::from_secs(20));
	assert_eq!(events.len(), 5);
	assert_eq!(events.last(), Some(&TimerEvent::ScheduleComplete));

	let view = ui.view();
	assert_eq!(view.clock, "0:00");
	assert_eq!(view.status, ClockStatus::Complete);
	assert_eq!(view.progress, 1.0);

	ui.handle_key(KeyCode::Char('n'), t0 + Duration::from_secs(21));
	assert_eq!(ui.engine().current_level_index(), 0);
	assert_eq!(ui.status_message.as_deref(), Some("Already on the final level."));

	ui.handle_key(KeyCode::Char('r'), t0 + Duration::from_secs(22));
	assert_eq!(ui.view().clock, "0:05");
	assert_eq!(ui.view().status, ClockStatus::Paused);
}

#[test]
fn test_manual_skip_while_paused() {
	let mut ui = default_ui();
	let t0 = Instant::now();
	ui.handle_key(KeyCode::Char('n'), t0);
	ui.handle_key(KeyCode::Right, t0);
	let view = ui.view();
	assert_eq!(view.level_number, 3);
	assert_eq!(view.clock, "15:00");
	assert_eq!(view.status, ClockStatus::Paused);
	assert!(ui.pump(t0 + Duration::from_secs(5)).is_empty());
}
