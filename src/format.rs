/// Formats a second count as `M:SS`, minutes unpadded.
pub fn format_time(seconds: u32) -> String {
	format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Formats a second count as `H:MM:SS`, for offsets into a long schedule.
pub fn format_offset(seconds: u32) -> String {
	let hours = seconds / 3600;
	let mins = (seconds / 60) % 60;
	let secs = seconds % 60;
	format!("{}:{:02}:{:02}", hours, mins, secs)
}
