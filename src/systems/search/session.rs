use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::navigator;
use super::results::ResultSet;

/// Mutable search state shared by the controller and the aggregator.
///
/// The generation, results and selection change together under one lock so
/// a reset is never observed half-applied.
#[derive(Debug, Default)]
pub struct SessionState {
	generation: u64,
	results: ResultSet,
	selected: Option<usize>,
}

/// Handle to the session state guarded by its single mutex.
pub type SharedSession = Arc<Mutex<SessionState>>;

/// Lock the session, recovering the data if a previous holder panicked.
pub fn lock(session: &SharedSession) -> MutexGuard<'_, SessionState> {
	session.lock().unwrap_or_else(PoisonError::into_inner)
}

#[must_use]
pub fn shared() -> SharedSession {
	Arc::new(Mutex::new(SessionState::default()))
}

impl SessionState {
	/// Start a new generation: drop all results and the selection.
	pub fn reset(&mut self) -> u64 {
		self.generation = self.generation.wrapping_add(1);
		self.results.clear();
		self.selected = None;
		self.generation
	}

	#[must_use]
	pub fn generation(&self) -> u64 {
		self.generation
	}

	#[must_use]
	pub fn is_current(&self, generation: u64) -> bool {
		self.generation == generation
	}

	/// Record a match for the current generation. Returns whether it was new.
	pub fn accept(&mut self, path: String) -> bool {
		self.results.insert(path)
	}

	#[must_use]
	pub fn results(&self) -> &ResultSet {
		&self.results
	}

	#[must_use]
	pub fn selected(&self) -> Option<usize> {
		self.selected
	}

	/// Path under the selection, if the selection is inside the result set.
	#[must_use]
	pub fn selected_path(&self) -> Option<&str> {
		self.selected.and_then(|index| self.results.get(index))
	}

	pub fn select_previous(&mut self) -> bool {
		let next = navigator::step_up(self.selected);
		let changed = next != self.selected;
		self.selected = next;
		changed
	}

	pub fn select_next(&mut self) -> bool {
		let next = navigator::step_down(self.selected, self.results.len());
		let changed = next != self.selected;
		self.selected = next;
		changed
	}

	/// Copy of the visible state, safe to render without holding the lock.
	#[must_use]
	pub fn snapshot(&self) -> SessionSnapshot {
		SessionSnapshot {
			generation: self.generation,
			results: self.results.as_slice().to_vec(),
			selected: self.selected,
		}
	}
}

/// Immutable view of the session taken under the lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
	pub generation: u64,
	pub results: Vec<String>,
	pub selected: Option<usize>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reset_clears_results_and_selection_and_bumps_generation() {
		let session = shared();
		let mut state = lock(&session);
		let first = state.reset();
		state.accept("a".into());
		state.accept("b".into());
		state.select_next();
		assert_eq!(state.selected_path(), Some("a"));

		let second = state.reset();
		assert_eq!(second, first + 1);
		assert!(state.results().is_empty());
		assert_eq!(state.selected(), None);
		assert!(state.is_current(second));
		assert!(!state.is_current(first));
	}

	#[test]
	fn selection_is_clamped_to_results() {
		let mut state = SessionState::default();
		assert!(!state.select_next());
		state.accept("only".into());
		assert!(state.select_next());
		assert!(!state.select_next());
		assert!(!state.select_previous());
		assert_eq!(state.selected(), Some(0));
	}

	#[test]
	fn snapshot_detaches_from_later_mutation() {
		let mut state = SessionState::default();
		state.accept("a".into());
		let snapshot = state.snapshot();
		state.accept("b".into());
		assert_eq!(snapshot.results, vec!["a".to_string()]);
		assert_eq!(state.results().len(), 2);
	}
}
