use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use ratatui::{
	layout::{Alignment, Rect},
	style::{Modifier, Style},
	text::{Line, Span},
	widgets::{Block, Gauge, Paragraph},
	Frame,
};

use crate::engine::{TimerEngine, TimerEvent};
use crate::logging::tui as log;
use crate::schedule::BlindSchedule;
use crate::settings::{GameSession, GameSettings};
use crate::theme::Theme;
use crate::ticker::Ticker;
use crate::tui::input::{InputEffect, InputState, CLOCK_HELP};
use crate::tui::layout::TimerLayout;
use crate::tui::widgets::{panel, ClockWidget, LevelEditorWidget, SettingsEditorWidget, StatsWidget};
use crate::view::{ClockStatus, TimerView};

const IDLE_POLL: Duration = Duration::from_millis(250);

pub enum TimerUIAction {
	None,
	Quit,
}

/// Owns the engine, the game session and the tick driver, and turns key
/// presses into engine commands.
pub struct TimerUI {
	engine: TimerEngine,
	session: GameSession,
	ticker: Ticker,
	pub input_state: InputState,
	pub status_message: Option<String>,
	pub theme: Theme,
	theme_name: String,
	pub fullscreen: bool,
	pub show_progress: bool,
}

impl TimerUI {
	pub fn new(schedule: BlindSchedule, settings: GameSettings, theme: Theme, theme_name: String) -> Self {
		Self {
			engine: TimerEngine::new(schedule),
			session: GameSession::new(settings),
			ticker: Ticker::every_second(),
			input_state: InputState::default(),
			status_message: None,
			theme,
			theme_name,
			fullscreen: false,
			show_progress: true,
		}
	}

	pub fn with_display(mut self, show_progress: bool, fullscreen: bool) -> Self {
		self.show_progress = show_progress;
		self.fullscreen = fullscreen;
		self
	}

	pub fn engine(&self) -> &TimerEngine {
		&self.engine
	}

	pub fn session(&self) -> &GameSession {
		&self.session
	}

	pub fn theme_name(&self) -> &str {
		&self.theme_name
	}

	pub fn view(&self) -> TimerView {
		TimerView::capture(&self.engine, &self.session)
	}

	pub fn start(&mut self, now: Instant) {
		self.engine.start();
		self.sync_ticker(now);
	}

	/// Runs every tick that has come due and returns what happened.
	pub fn pump(&mut self, now: Instant) -> Vec<TimerEvent> {
		let due = self.ticker.due(now);
		let mut events = Vec::new();

		for _ in 0..due {
			let Some(event) = self.engine.tick() else {
				continue;
			};
			match event {
				TimerEvent::LevelAdvanced { index, level } => {
					self.status_message = Some(format!("Level {}: blinds {}", index + 1, level.blinds_label()));
				}
				TimerEvent::ScheduleComplete => {
					self.ticker.stop();
					self.status_message = Some("Final level finished.".to_string());
				}
				TimerEvent::Ticked { .. } => {}
			}
			events.push(event);
		}

		events
	}

	/// How long the event loop may block before the next tick is due.
	pub fn poll_timeout(&self, now: Instant) -> Duration {
		self.ticker
			.time_until_next(now)
			.map(|d| d.min(IDLE_POLL))
			.unwrap_or(IDLE_POLL)
	}

	pub fn handle_key(&mut self, key: KeyCode, now: Instant) -> TimerUIAction {
		log::input(&format!("{:?}", key));
		let old_state = std::mem::take(&mut self.input_state);
		let (new_state, effect) = old_state.handle_key(key);
		self.input_state = new_state;
		self.process_effect(effect, now)
	}

	fn process_effect(&mut self, effect: InputEffect, now: Instant) -> TimerUIAction {
		match effect {
			InputEffect::None => {}
			InputEffect::ToggleRunning => {
				self.engine.toggle_running();
				self.sync_ticker(now);
				self.status_message = None;
			}
			InputEffect::NextLevel => {
				if self.engine.advance_level() {
					if self.engine.is_running() {
						self.ticker.start(now);
					}
					let view = self.view();
					self.status_message = Some(format!("Skipped to {}", view.level_label()));
				} else {
					self.status_message = Some("Already on the final level.".to_string());
				}
			}
			InputEffect::Reset => {
				self.engine.reset();
				self.sync_ticker(now);
				self.status_message = Some("Clock reset.".to_string());
			}
			InputEffect::OpenLevelEditor => {
				let (state, effect) = InputState::enter_level_editor(self.engine.schedule());
				self.input_state = state;
				return self.process_effect(effect, now);
			}
			InputEffect::OpenSettingsEditor => {
				let (state, effect) = InputState::enter_settings_editor(self.session.settings());
				self.input_state = state;
				return self.process_effect(effect, now);
			}
			InputEffect::EliminatePlayer => {
				if !self.session.eliminate_player() {
					self.status_message = Some("Only one player left.".to_string());
				}
			}
			InputEffect::RestorePlayer => {
				if !self.session.restore_player() {
					self.status_message = Some("All players are still in.".to_string());
				}
			}
			InputEffect::ToggleFullscreen => {
				self.fullscreen = !self.fullscreen;
			}
			InputEffect::CycleTheme => self.cycle_theme(),
			InputEffect::SaveSchedule(schedule) => {
				self.engine.replace_schedule(schedule);
				self.sync_ticker(now);
				log::event("blind schedule replaced");
				self.status_message = Some("Blind levels saved. Clock reset.".to_string());
			}
			InputEffect::SaveSettings(settings) => {
				self.session.replace_settings(settings);
				log::event("game settings replaced");
				self.status_message = Some("Game settings saved.".to_string());
			}
			InputEffect::SetPrompt(prompt) => {
				self.status_message = Some(prompt);
			}
			InputEffect::ClearPrompt => {
				self.status_message = None;
			}
			InputEffect::Quit => return TimerUIAction::Quit,
		}
		TimerUIAction::None
	}

	fn sync_ticker(&mut self, now: Instant) {
		if self.engine.is_running() {
			if !self.ticker.is_armed() {
				self.ticker.start(now);
			}
		} else {
			self.ticker.stop();
		}
	}

	pub fn cycle_theme(&mut self) {
		let available = Theme::list_available();
		if available.is_empty() {
			return;
		}

		let current_idx = available
			.iter()
			.position(|name| name == &self.theme_name)
			.unwrap_or(0);

		let next_idx = (current_idx + 1) % available.len();
		let next_name = &available[next_idx];

		match Theme::load_named(next_name) {
			Ok(new_theme) => {
				self.theme = new_theme;
				self.theme_name = next_name.clone();
				self.status_message = Some(format!("Theme: {}", next_name));
			}
			Err(e) => {
				self.status_message = Some(e);
			}
		}
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		let bg = Block::default().style(Style::default().bg(self.theme.background()));
		frame.render_widget(bg, area);

		let view = self.view();
		let layout = TimerLayout::compute(area, self.fullscreen, self.show_progress);

		if let Some(header_area) = layout.header {
			let status_color = match view.status {
				ClockStatus::Running => self.theme.status_running(),
				ClockStatus::Paused => self.theme.status_paused(),
				ClockStatus::Complete => self.theme.status_complete(),
			};
			let header = Paragraph::new(Line::from(vec![
				Span::styled(
					"Poker Timer  ",
					Style::default().fg(self.theme.title()).add_modifier(Modifier::BOLD),
				),
				Span::styled(view.level_label(), Style::default().fg(self.theme.stat_label())),
				Span::raw("  "),
				Span::styled(
					view.status.label(),
					Style::default().fg(status_color).add_modifier(Modifier::BOLD),
				),
			]))
			.alignment(Alignment::Center)
			.block(panel(&self.theme, ""));
			frame.render_widget(header, header_area);
		}

		if let Some(progress_area) = layout.progress {
			let gauge = Gauge::default()
				.block(panel(&self.theme, " Level progress "))
				.gauge_style(
					Style::default()
						.fg(self.theme.progress())
						.bg(self.theme.progress_track()),
				)
				.ratio(view.progress.clamp(0.0, 1.0))
				.label(format!("{:.0}%", view.progress * 100.0));
			frame.render_widget(gauge, progress_area);
		}

		let clock_color = match view.status {
			ClockStatus::Running => self.theme.clock(),
			ClockStatus::Paused => self.theme.clock_paused(),
			ClockStatus::Complete => self.theme.clock_complete(),
		};
		let clock = ClockWidget::new(&view.clock).style(Style::default().fg(clock_color));
		frame.render_widget(clock, layout.clock);

		let mut blind_lines = vec![Line::styled(
			view.blinds_label(),
			Style::default().fg(self.theme.blinds()).add_modifier(Modifier::BOLD),
		)];
		if let Some(next) = view.next_blinds_label() {
			blind_lines.push(Line::styled(next, Style::default().fg(self.theme.next_blinds())));
		} else {
			blind_lines.push(Line::styled("Final level", Style::default().fg(self.theme.next_blinds())));
		}
		frame.render_widget(
			Paragraph::new(blind_lines).alignment(Alignment::Center),
			layout.blinds,
		);

		if let Some(stats_area) = layout.stats {
			frame.render_widget(StatsWidget::new(&view, &self.theme), stats_area);
		}

		if let Some(status_area) = layout.status {
			let text = self.status_message.clone().unwrap_or_else(|| CLOCK_HELP.to_string());
			let status = Paragraph::new(text)
				.style(Style::default().fg(self.theme.help()))
				.block(panel(&self.theme, " Controls "));
			frame.render_widget(status, status_area);
		}

		match &self.input_state {
			InputState::EditingLevels(editor) => {
				frame.render_widget(LevelEditorWidget::new(editor, &self.theme), area);
			}
			InputState::EditingSettings(editor) => {
				frame.render_widget(SettingsEditorWidget::new(editor, &self.theme), area);
			}
			InputState::Clock => {}
		}
	}
}
