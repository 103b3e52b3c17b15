//! Helpers for debugging keys. Used in logs only, never for key handling in implementation code.

use std::ops::Range;

/// `sprint` converts a key to an escaped string.
/// This is used for logging and debugging tests and should not be used in implementation code.
pub fn sprint<T>(key: &T) -> String
where
	T: AsRef<[u8]>,
{
	key.as_ref()
		.iter()
		.flat_map(|&byte| std::ascii::escape_default(byte))
		.map(|byte| byte as char)
		.collect::<String>()
}

/// Implemented by anything that can render itself for a trace-level log line.
pub trait Sprintable {
	fn sprint(&self) -> String;
}

impl Sprintable for Vec<u8> {
	fn sprint(&self) -> String {
		sprint(self)
	}
}

impl Sprintable for Range<Vec<u8>> {
	fn sprint(&self) -> String {
		format!("{}..{}", sprint(&self.start), sprint(&self.end))
	}
}
