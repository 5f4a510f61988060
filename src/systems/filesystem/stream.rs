use std::sync::mpsc::Sender;

use crate::streams::{DataStream, StreamEnvelope};

/// Messages a scanner emits for its generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
	/// Root-relative path of a matching entry.
	Match(String),
	/// The walk could not start; the scan ends after this message.
	Failed(String),
	/// The walk ended normally after reporting `matched` entries.
	Finished { matched: usize },
}

pub type ScanEnvelope = StreamEnvelope<ScanEvent>;

/// Handle a scanner uses to report into the shared result stream.
pub struct ScanStream<'a> {
	inner: DataStream<'a, ScanEvent>,
}

impl<'a> ScanStream<'a> {
	#[must_use]
	pub fn new(tx: &'a Sender<ScanEnvelope>, generation: u64) -> Self {
		Self {
			inner: DataStream::new(tx, generation),
		}
	}

	/// Report one match. Returns `false` once nobody is listening.
	pub fn send_match(&self, path: String) -> bool {
		self.inner.send(ScanEvent::Match(path), false)
	}

	pub fn send_failure(&self, reason: String) -> bool {
		self.inner.send(ScanEvent::Failed(reason), true)
	}

	pub fn finish(&self, matched: usize) -> bool {
		self.inner.send(ScanEvent::Finished { matched }, true)
	}
}
