use std::time::SystemTime;


/// The tag that marks a comment for replacement with a tracking block.
pub const TRACK_TAG: &str = "#trackme";


/// Reconstruction options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
	/// Comments starting with this tag are replaced with a block describing where the
	/// closure came from.
	pub track_tag: Box<str>,
	/// The time written in tracking blocks. Uses the current time if not set.
	pub timestamp: Option<SystemTime>,
}


impl Default for Options {
	fn default() -> Self {
		Self {
			track_tag: TRACK_TAG.into(),
			timestamp: None,
		}
	}
}


impl Options {
	pub fn with_timestamp(mut self, timestamp: SystemTime) -> Self {
		self.timestamp = Some(timestamp);
		self
	}


	pub fn with_track_tag(mut self, tag: &str) -> Self {
		self.track_tag = tag.into();
		self
	}
}
