use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::JoinHandle;

use super::aggregator::spawn_aggregator;
use super::navigator;
use super::session::{self, SessionSnapshot, SessionState, SharedSession};
use super::view::{LineStyle, PaneEnvelope, ResultView, StyledLine, render_lines};
use crate::launcher::Launcher;
use crate::systems::filesystem::{ScanEnvelope, ScanOptions, ScanRequest, ScansInFlight, spawn_scan};

/// Result of pressing confirm.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfirmOutcome {
	/// Nothing valid was selected.
	Ignored,
	/// The launcher accepted the file.
	Opened(PathBuf),
	/// The launcher failed; the reason is already shown in the view.
	Failed(String),
}

/// Owns the query lifecycle: resets, scan launches, selection and confirm.
///
/// All methods run on the UI thread and return without waiting for scans.
pub struct SessionController {
	root: PathBuf,
	options: ScanOptions,
	session: SharedSession,
	latest_generation: Arc<AtomicU64>,
	scans: ScansInFlight,
	scan_tx: Option<Sender<ScanEnvelope>>,
	pane_rx: Receiver<PaneEnvelope>,
	aggregator: Option<JoinHandle<()>>,
	generation: u64,
	scan_complete: bool,
}

impl SessionController {
	/// Create the shared stream and start the aggregator for scans under `root`.
	pub fn start(root: PathBuf, options: ScanOptions) -> Self {
		let session = session::shared();
		let (scan_tx, scan_rx) = mpsc::channel();
		let (pane_tx, pane_rx) = mpsc::channel();
		let aggregator = spawn_aggregator(Arc::clone(&session), scan_rx, pane_tx);

		Self {
			root,
			options,
			session,
			latest_generation: Arc::new(AtomicU64::new(0)),
			scans: ScansInFlight::new(),
			scan_tx: Some(scan_tx),
			pane_rx,
			aggregator: Some(aggregator),
			generation: 0,
			scan_complete: true,
		}
	}

	#[must_use]
	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Handle an edit of the query: reset everything and launch a fresh scan.
	pub fn on_query_changed(&mut self, query: &str, view: &mut dyn ResultView) -> u64 {
		let generation = self.begin_query(view);
		self.launch_scan(query, generation);
		generation
	}

	/// Clear the view and start a new generation without scanning yet.
	pub fn begin_query(&mut self, view: &mut dyn ResultView) -> u64 {
		view.clear();
		let generation = session::lock(&self.session).reset();
		self.latest_generation.store(generation, Ordering::Release);
		self.generation = generation;
		self.scan_complete = false;
		generation
	}

	/// Launch the scan for `generation`. Ignored if a newer query already began.
	pub fn launch_scan(&mut self, query: &str, generation: u64) -> bool {
		if generation != self.generation {
			return false;
		}
		let Some(tx) = self.scan_tx.as_ref() else {
			return false;
		};

		log::info!("launching scan {generation} for {query:?}");
		let request = ScanRequest {
			root: self.root.clone(),
			query: query.to_string(),
			generation,
		};
		let ticket = self.scans.register();
		// Detached: completion is observed through the ticket and the stream.
		let _ = spawn_scan(
			request,
			self.options.clone(),
			tx.clone(),
			Arc::clone(&self.latest_generation),
			ticket,
		);
		true
	}

	/// Apply queued view updates for the current generation. Returns how many were applied.
	pub fn pump(&mut self, view: &mut dyn ResultView) -> usize {
		let mut applied = 0;
		loop {
			match self.pane_rx.try_recv() {
				Ok(envelope) => {
					if envelope.id != self.generation {
						continue;
					}
					if envelope.complete {
						self.scan_complete = true;
					}
					envelope.dispatch(&mut *view);
					applied += 1;
				}
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
			}
		}
		applied
	}

	pub fn move_up(&mut self, view: &mut dyn ResultView) -> bool {
		self.navigate(view, SessionState::select_previous)
	}

	pub fn move_down(&mut self, view: &mut dyn ResultView) -> bool {
		self.navigate(view, SessionState::select_next)
	}

	fn navigate(
		&mut self,
		view: &mut dyn ResultView,
		step: impl FnOnce(&mut SessionState) -> bool,
	) -> bool {
		let snapshot = {
			let mut state = session::lock(&self.session);
			if !step(&mut *state) {
				return false;
			}
			// Appends queued so far are already part of the snapshot.
			for envelope in self.pane_rx.try_iter() {
				if envelope.id == self.generation && envelope.complete {
					self.scan_complete = true;
				}
			}
			state.snapshot()
		};

		view.set_full_text(render_lines(&snapshot.results, snapshot.selected));
		view.scroll_to(navigator::compute_scroll_offset(
			snapshot.selected,
			view.viewport_height(),
		));
		true
	}

	/// Open the selected result, if the selection points inside the result set.
	pub fn confirm(&mut self, launcher: &dyn Launcher, view: &mut dyn ResultView) -> ConfirmOutcome {
		let selected = {
			let state = session::lock(&self.session);
			match state.selected_path() {
				Some(path) => path.to_string(),
				None => return ConfirmOutcome::Ignored,
			}
		};

		let path = self.root.join(&selected);
		match launcher.open(&path) {
			Ok(()) => {
				log::info!("opened {}", path.display());
				ConfirmOutcome::Opened(path)
			}
			Err(err) => {
				log::warn!("failed to open {}: {err}", path.display());
				let message = format!("Error opening file: {err}");
				view.set_full_text(vec![StyledLine::new(message.clone(), LineStyle::Error)]);
				ConfirmOutcome::Failed(message)
			}
		}
	}

	#[must_use]
	pub fn snapshot(&self) -> SessionSnapshot {
		session::lock(&self.session).snapshot()
	}

	#[must_use]
	pub fn result_count(&self) -> usize {
		session::lock(&self.session).results().len()
	}

	#[must_use]
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Whether the current generation's scan is still reporting.
	#[must_use]
	pub fn is_scanning(&self) -> bool {
		!self.scan_complete
	}

	#[must_use]
	pub fn scans_in_flight(&self) -> usize {
		self.scans.count()
	}

	/// Cancel running scans, wait for them, close the stream and join the aggregator.
	pub fn shutdown(&mut self) {
		let Some(tx) = self.scan_tx.take() else {
			return;
		};
		self.latest_generation
			.store(self.generation.wrapping_add(1), Ordering::Release);
		self.scans.wait();
		drop(tx);
		if let Some(handle) = self.aggregator.take()
			&& handle.join().is_err()
		{
			log::error!("aggregator thread panicked");
		}
		log::debug!("search session shut down");
	}
}

impl Drop for SessionController {
	fn drop(&mut self) {
		self.shutdown();
	}
}
