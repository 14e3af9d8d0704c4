//! Request sequencing for out-of-order responses

use serde::{Deserialize, Serialize};
use std::fmt;

/// Monotonically increasing identifier of an issued data request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestSeq(u64);

impl RequestSeq {
	/// Raw sequence number
	pub fn get(self) -> u64 {
		self.0
	}
}

impl fmt::Display for RequestSeq {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Issues sequence numbers and remembers the latest one
///
/// Only a response carrying the latest issued number may be applied.
///
/// ```
/// use reportgrid_query::RequestSequencer;
///
/// let mut sequencer = RequestSequencer::new();
/// let first = sequencer.next();
/// let second = sequencer.next();
///
/// assert!(!sequencer.is_current(first));
/// assert!(sequencer.is_current(second));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
	latest: Option<RequestSeq>,
}

impl RequestSequencer {
	/// Creates a sequencer that has issued nothing
	pub fn new() -> Self {
		Self::default()
	}

	/// Issues the next sequence number
	pub fn next(&mut self) -> RequestSeq {
		let seq = RequestSeq(self.latest.map_or(1, |s| s.0 + 1));
		self.latest = Some(seq);
		seq
	}

	/// The most recently issued number
	pub fn latest(&self) -> Option<RequestSeq> {
		self.latest
	}

	/// Returns true if `seq` is the most recently issued number
	pub fn is_current(&self, seq: RequestSeq) -> bool {
		self.latest == Some(seq)
	}
}
