use std::fmt;

// How long until the wedding, broken into display units. Already-elapsed
// targets clamp to zero rather than counting back up.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeLeft {
	pub days: u64,
	pub hours: u8,
	pub minutes: u8,
	pub seconds: u8,
}

impl TimeLeft {
	#[must_use]
	pub fn from_millis(millis: i64) -> Self {
		let total_seconds = millis.max(0) as u64 / 1000;
		Self {
			days: total_seconds / 86_400,
			hours: ((total_seconds / 3_600) % 24) as u8,
			minutes: ((total_seconds / 60) % 60) as u8,
			seconds: (total_seconds % 60) as u8,
		}
	}

	// Both stamps are millisecond unix times, the shape js hands us.
	#[must_use]
	pub fn until(target_ms: f64, now_ms: f64) -> Self {
		Self::from_millis((target_ms - now_ms) as i64)
	}
}

impl fmt::Display for TimeLeft {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}:{:02}:{:02}:{:02}",
			self.days, self.hours, self.minutes, self.seconds
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn check(millis: i64, expected: (u64, u8, u8, u8)) {
		let left = TimeLeft::from_millis(millis);
		assert_eq!(
			(left.days, left.hours, left.minutes, left.seconds),
			expected,
			"{millis}ms"
		);
	}

	#[test]
	fn millis_split_into_display_units() {
		check(0, (0, 0, 0, 0));
		check(999, (0, 0, 0, 0));
		check(1_000, (0, 0, 0, 1));
		check(90_061_000, (1, 1, 1, 1));
		check(86_399_999, (0, 23, 59, 59));
		check(86_400_000, (1, 0, 0, 0));
		check(3_000_000_000, (34, 17, 20, 0));
	}

	#[test]
	fn elapsed_targets_clamp_to_zero() {
		check(-1, (0, 0, 0, 0));
		check(-86_400_000, (0, 0, 0, 0));
		assert_eq!(TimeLeft::until(500.0, 2_000.0), TimeLeft::default());
	}

	#[test]
	fn until_subtracts_now_from_target() {
		assert_eq!(
			TimeLeft::until(2_000.0, 500.0),
			TimeLeft { seconds: 1, ..TimeLeft::default() }
		);
	}

	#[test]
	fn display_pads_everything_but_days() {
		assert_eq!(TimeLeft::from_millis(90_061_000).to_string(), "1:01:01:01");
		assert_eq!(TimeLeft::from_millis(0).to_string(), "0:00:00:00");
		assert_eq!(
			TimeLeft { days: 294, hours: 3, minutes: 12, seconds: 9, }.to_string(),
			"294:03:12:09"
		);
	}
}
