use ratatui::{
	buffer::Buffer,
	layout::{Alignment, Constraint, Direction, Layout, Rect},
	style::{Modifier, Style},
	text::{Line, Span},
	widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::format::format_time;
use crate::theme::Theme;
use crate::tui::editor::{LevelEditor, LevelField, SettingsEditor, SettingsField};
use crate::tui::layout::centered_rect;
use crate::view::TimerView;

const GLYPH_HEIGHT: usize = 5;

fn glyph(c: char) -> [&'static str; GLYPH_HEIGHT] {
	match c {
		'0' => ["###", "#.#", "#.#", "#.#", "###"],
		'1' => [".#.", "##.", ".#.", ".#.", "###"],
		'2' => ["###", "..#", "###", "#..", "###"],
		'3' => ["###", "..#", "###", "..#", "###"],
		'4' => ["#.#", "#.#", "###", "..#", "..#"],
		'5' => ["###", "#..", "###", "..#", "###"],
		'6' => ["###", "#..", "###", "#.#", "###"],
		'7' => ["###", "..#", "..#", "..#", "..#"],
		'8' => ["###", "#.#", "###", "#.#", "###"],
		'9' => ["###", "#.#", "###", "..#", "###"],
		':' => [".", "#", ".", "#", "."],
		_ => ["...", "...", "...", "...", "..."],
	}
}

/// Block-letter rendering of `text`, one string per row.
pub fn big_text_lines(text: &str) -> Vec<String> {
	(0..GLYPH_HEIGHT)
		.map(|row| {
			text.chars()
				.map(|c| {
					glyph(c)[row]
						.chars()
						.map(|p| if p == '#' { "██" } else { "  " })
						.collect::<String>()
				})
				.collect::<Vec<_>>()
				.join(" ")
		})
		.collect()
}

pub fn panel<'a>(theme: &Theme, title: &'a str) -> Block<'a> {
	Block::default()
		.borders(Borders::ALL)
		.border_type(theme.border_type())
		.border_style(Style::default().fg(theme.border()))
		.title(Span::styled(title, Style::default().fg(theme.title())))
}

/// The remaining time, in block digits when there is room.
pub struct ClockWidget<'a> {
	text: &'a str,
	style: Style,
}

impl<'a> ClockWidget<'a> {
	pub fn new(text: &'a str) -> Self {
		Self { text, style: Style::default() }
	}

	pub fn style(mut self, style: Style) -> Self {
		self.style = style;
		self
	}
}

impl Widget for ClockWidget<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if area.width == 0 || area.height == 0 {
			return;
		}

		let lines = big_text_lines(self.text);
		let width = lines.first().map(|l| l.chars().count()).unwrap_or(0) as u16;

		if area.height < GLYPH_HEIGHT as u16 || area.width < width {
			let y = area.y + area.height / 2;
			let text_width = self.text.chars().count() as u16;
			let x = area.x + area.width.saturating_sub(text_width) / 2;
			buf.set_string(x, y, self.text, self.style.add_modifier(Modifier::BOLD));
			return;
		}

		let x = area.x + (area.width - width) / 2;
		let top = area.y + (area.height - GLYPH_HEIGHT as u16) / 2;
		for (i, line) in lines.iter().enumerate() {
			buf.set_string(x, top + i as u16, line, self.style);
		}
	}
}

pub struct StatsWidget<'a> {
	view: &'a TimerView,
	theme: &'a Theme,
}

impl<'a> StatsWidget<'a> {
	pub fn new(view: &'a TimerView, theme: &'a Theme) -> Self {
		Self { view, theme }
	}
}

impl Widget for StatsWidget<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		let columns = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Ratio(1, 4); 4])
			.split(area);

		let stats = [
			("Players", self.view.players_label()),
			("Prize Pool", format!("${}", self.view.prize_pool)),
			("Starting Stack", self.view.starting_stack.to_string()),
			("Average Stack", self.view.average_stack.to_string()),
		];

		for ((label, value), column) in stats.into_iter().zip(columns.iter()) {
			let block = Block::default()
				.borders(Borders::ALL)
				.border_type(self.theme.border_type())
				.border_style(Style::default().fg(self.theme.border()))
				.title(Span::styled(label, Style::default().fg(self.theme.stat_label())));
			Paragraph::new(Line::styled(
				value,
				Style::default().fg(self.theme.stat_value()).add_modifier(Modifier::BOLD),
			))
			.alignment(Alignment::Center)
			.block(block)
			.render(*column, buf);
		}
	}
}

pub struct LevelEditorWidget<'a> {
	editor: &'a LevelEditor,
	theme: &'a Theme,
}

impl<'a> LevelEditorWidget<'a> {
	pub fn new(editor: &'a LevelEditor, theme: &'a Theme) -> Self {
		Self { editor, theme }
	}

	fn cell(&self, text: String, selected: bool) -> Span<'static> {
		if selected {
			Span::styled(
				text,
				Style::default()
					.fg(self.theme.editor_highlight())
					.add_modifier(Modifier::BOLD | Modifier::REVERSED),
			)
		} else {
			Span::styled(text, Style::default().fg(self.theme.stat_value()))
		}
	}
}

impl Widget for LevelEditorWidget<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		let rows = self.editor.rows();
		let popup = centered_rect(area, 52, rows.len() as u16 + 4);
		Clear.render(popup, buf);

		let block = Block::default()
			.borders(Borders::ALL)
			.border_type(self.theme.border_type())
			.border_style(Style::default().fg(self.theme.editor_border()))
			.title(" Blind Levels ");
		let inner = block.inner(popup);
		block.render(popup, buf);

		let header = Line::styled(
			"  #    Small Blind   Big Blind   Duration (min)",
			Style::default().fg(self.theme.stat_label()),
		);

		let visible = inner.height.saturating_sub(1) as usize;
		let selected = self.editor.selected_row();
		let start = (selected + 1).saturating_sub(visible);

		let mut lines = vec![header];
		for (i, level) in rows.iter().enumerate().skip(start).take(visible) {
			let on_row = i == selected;
			let field = self.editor.selected_field();
			let marker = if on_row { "> " } else { "  " };
			lines.push(Line::from(vec![
				Span::raw(format!("{}{:<3}  ", marker, i + 1)),
				self.cell(format!("{:>11}", level.small_blind), on_row && field == LevelField::SmallBlind),
				Span::raw("   "),
				self.cell(format!("{:>9}", level.big_blind), on_row && field == LevelField::BigBlind),
				Span::raw("   "),
				self.cell(format!("{:>8}", level.duration_minutes()), on_row && field == LevelField::Minutes),
				Span::styled(
					format!(" {}", format_time(level.duration)),
					Style::default().fg(self.theme.help()),
				),
			]));
		}

		Paragraph::new(lines).render(inner, buf);
	}
}

pub struct SettingsEditorWidget<'a> {
	editor: &'a SettingsEditor,
	theme: &'a Theme,
}

impl<'a> SettingsEditorWidget<'a> {
	pub fn new(editor: &'a SettingsEditor, theme: &'a Theme) -> Self {
		Self { editor, theme }
	}
}

impl Widget for SettingsEditorWidget<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		let popup = centered_rect(area, 44, SettingsField::ALL.len() as u16 + 4);
		Clear.render(popup, buf);

		let block = Block::default()
			.borders(Borders::ALL)
			.border_type(self.theme.border_type())
			.border_style(Style::default().fg(self.theme.editor_border()))
			.title(" Game Settings ");
		let inner = block.inner(popup);
		block.render(popup, buf);

		let mut lines = vec![Line::raw("")];
		for field in SettingsField::ALL {
			let selected = field == self.editor.selected_field();
			let value_style = if selected {
				Style::default()
					.fg(self.theme.editor_highlight())
					.add_modifier(Modifier::BOLD | Modifier::REVERSED)
			} else {
				Style::default().fg(self.theme.stat_value())
			};
			lines.push(Line::from(vec![
				Span::raw(if selected { "> " } else { "  " }),
				Span::styled(format!("{:<20}", field.label()), Style::default().fg(self.theme.stat_label())),
				Span::styled(format!("{:>12}", self.editor.value(field)), value_style),
			]));
		}

		Paragraph::new(lines).render(inner, buf);
	}
}
