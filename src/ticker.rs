use std::time::{Duration, Instant};

/// Deadline-based periodic driver for the timer engine.
///
/// A stopped ticker yields nothing; stopping it is how a pending tick is
/// torn down when the clock is paused, reset or given a new schedule.
#[derive(Debug, Clone)]
pub struct Ticker {
	period: Duration,
	next: Option<Instant>,
}

impl Ticker {
	pub fn new(period: Duration) -> Self {
		Self { period, next: None }
	}

	pub fn every_second() -> Self {
		Self::new(Duration::from_secs(1))
	}

	pub fn period(&self) -> Duration {
		self.period
	}

	pub fn is_armed(&self) -> bool {
		self.next.is_some()
	}

	pub fn start(&mut self, now: Instant) {
		self.next = Some(now + self.period);
	}

	pub fn stop(&mut self) {
		self.next = None;
	}

	/// Whole periods elapsed up to `now`. Advances the deadline past them so
	/// a slow frame catches up without drifting.
	pub fn due(&mut self, now: Instant) -> u32 {
		let Some(mut next) = self.next else {
			return 0;
		};
		if self.period.is_zero() {
			return 0;
		}

		let mut count = 0u32;
		while next <= now {
			count = count.saturating_add(1);
			next += self.period;
		}
		self.next = Some(next);
		count
	}

	pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
		self.next.map(|next| next.saturating_duration_since(now))
	}
}

impl Default for Ticker {
	fn default() -> Self {
		Self::every_second()
	}
}
