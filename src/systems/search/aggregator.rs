use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use super::session::{self, SharedSession};
use super::view::{PaneEnvelope, PaneStream};
use crate::systems::filesystem::{ScanEnvelope, ScanEvent};

/// Start the single consumer of the scan stream.
///
/// The thread exits once every sender of the scan stream has been dropped.
pub fn spawn_aggregator(
	session: SharedSession,
	scan_rx: Receiver<ScanEnvelope>,
	pane_tx: Sender<PaneEnvelope>,
) -> JoinHandle<()> {
	thread::spawn(move || run_aggregator(&session, &scan_rx, &pane_tx))
}

/// Consume scan messages until the stream closes.
pub fn run_aggregator(
	session: &SharedSession,
	scan_rx: &Receiver<ScanEnvelope>,
	pane_tx: &Sender<PaneEnvelope>,
) {
	while let Ok(envelope) = scan_rx.recv() {
		apply_envelope(session, envelope, pane_tx);
	}
	log::debug!("scan stream closed, aggregator exiting");
}

/// Fold one scan message into the session and forward the visible change.
///
/// Messages from a generation other than the current one are dropped. The
/// pane update is sent while the session lock is held, so it is ordered
/// after any reset that preceded it.
pub(crate) fn apply_envelope(
	session: &SharedSession,
	envelope: ScanEnvelope,
	pane_tx: &Sender<PaneEnvelope>,
) {
	let mut state = session::lock(session);
	if !state.is_current(envelope.id) {
		log::trace!(
			"dropping message from stale scan {} (current {})",
			envelope.id,
			state.generation()
		);
		return;
	}

	let pane = PaneStream::new(pane_tx, envelope.id);
	match envelope.payload {
		ScanEvent::Match(path) => {
			if state.accept(path.clone()) {
				pane.append(path);
			}
		}
		ScanEvent::Failed(reason) => {
			pane.error(reason);
			pane.finished();
		}
		ScanEvent::Finished { matched } => {
			log::debug!(
				"scan {} complete: {matched} reported, {} distinct",
				envelope.id,
				state.results().len()
			);
			pane.finished();
		}
	}
}
