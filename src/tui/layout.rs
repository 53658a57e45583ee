use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct TimerLayout {
	pub header: Option<Rect>,
	pub progress: Option<Rect>,
	pub clock: Rect,
	pub blinds: Rect,
	pub stats: Option<Rect>,
	pub status: Option<Rect>,
}

impl TimerLayout {
	pub fn compute(area: Rect, fullscreen: bool, show_progress: bool) -> Self {
		let progress_height = if show_progress { 3 } else { 0 };

		if fullscreen {
			let rows = Layout::default()
				.direction(Direction::Vertical)
				.constraints([
					Constraint::Length(progress_height),
					Constraint::Min(5),
					Constraint::Length(4),
				])
				.split(area);

			return Self {
				header: None,
				progress: show_progress.then_some(rows[0]),
				clock: rows[1],
				blinds: rows[2],
				stats: None,
				status: None,
			};
		}

		let rows = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(3),
				Constraint::Length(progress_height),
				Constraint::Min(7),
				Constraint::Length(4),
				Constraint::Length(4),
				Constraint::Length(3),
			])
			.split(area);

		Self {
			header: Some(rows[0]),
			progress: show_progress.then_some(rows[1]),
			clock: rows[2],
			blinds: rows[3],
			stats: Some(rows[4]),
			status: Some(rows[5]),
		}
	}
}

/// A `width` x `height` rectangle centred in `area`, shrunk to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
	let width = width.min(area.width);
	let height = height.min(area.height);
	Rect::new(
		area.x + (area.width - width) / 2,
		area.y + (area.height - height) / 2,
		width,
		height,
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_normal_layout_has_all_panels() {
		let layout = TimerLayout::compute(Rect::new(0, 0, 100, 40), false, true);
		assert!(layout.header.is_some());
		assert!(layout.progress.is_some());
		assert!(layout.stats.is_some());
		assert!(layout.status.is_some());
		assert!(layout.clock.height >= 7);
	}

	#[test]
	fn test_fullscreen_layout_drops_chrome() {
		let layout = TimerLayout::compute(Rect::new(0, 0, 100, 40), true, false);
		assert!(layout.header.is_none());
		assert!(layout.progress.is_none());
		assert!(layout.stats.is_none());
		assert!(layout.status.is_none());
		assert!(layout.clock.height >= 30);
	}

	#[test]
	fn test_centered_rect() {
		let rect = centered_rect(Rect::new(0, 0, 100, 40), 40, 10);
		assert_eq!(rect, Rect::new(30, 15, 40, 10));
		let clipped = centered_rect(Rect::new(5, 5, 20, 8), 40, 10);
		assert_eq!(clipped, Rect::new(5, 5, 20, 8));
	}
}
