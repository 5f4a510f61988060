use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Counts scans that have been launched but not yet finished.
///
/// Each launch holds a [`ScanTicket`]; dropping the ticket marks the scan
/// done and wakes anyone waiting for the count to reach zero.
#[derive(Debug, Clone, Default)]
pub struct ScansInFlight {
	inner: Arc<(Mutex<usize>, Condvar)>,
}

impl ScansInFlight {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	fn count_guard(&self) -> MutexGuard<'_, usize> {
		self.inner.0.lock().unwrap_or_else(PoisonError::into_inner)
	}

	/// Register one more pending scan.
	#[must_use = "the scan counts as in flight until the ticket is dropped"]
	pub fn register(&self) -> ScanTicket {
		*self.count_guard() += 1;
		ScanTicket {
			inner: Arc::clone(&self.inner),
		}
	}

	#[must_use]
	pub fn count(&self) -> usize {
		*self.count_guard()
	}

	/// Block until every registered scan has finished.
	pub fn wait(&self) {
		let (_, condvar) = &*self.inner;
		let mut count = self.count_guard();
		while *count > 0 {
			count = condvar.wait(count).unwrap_or_else(PoisonError::into_inner);
		}
	}

	/// Like [`ScansInFlight::wait`] but gives up after `timeout`. Returns whether all scans finished.
	pub fn wait_timeout(&self, timeout: Duration) -> bool {
		let (_, condvar) = &*self.inner;
		let deadline = Instant::now() + timeout;
		let mut count = self.count_guard();
		while *count > 0 {
			let now = Instant::now();
			if now >= deadline {
				return false;
			}
			count = condvar
				.wait_timeout(count, deadline - now)
				.unwrap_or_else(PoisonError::into_inner)
				.0;
		}
		true
	}
}

/// Proof that a scan is in flight.
#[derive(Debug)]
pub struct ScanTicket {
	inner: Arc<(Mutex<usize>, Condvar)>,
}

impl Drop for ScanTicket {
	fn drop(&mut self) {
		let (lock, condvar) = &*self.inner;
		let mut count = lock.lock().unwrap_or_else(PoisonError::into_inner);
		*count = count.saturating_sub(1);
		condvar.notify_all();
	}
}

#[cfg(test)]
mod tests {
	use std::thread;

	use super::*;

	#[test]
	fn tickets_count_until_dropped() {
		let scans = ScansInFlight::new();
		let first = scans.register();
		let second = scans.register();
		assert_eq!(scans.count(), 2);
		drop(first);
		assert_eq!(scans.count(), 1);
		drop(second);
		assert_eq!(scans.count(), 0);
		assert!(scans.wait_timeout(Duration::ZERO));
	}

	#[test]
	fn wait_returns_once_worker_threads_finish() {
		let scans = ScansInFlight::new();
		let handles: Vec<_> = (0..4)
			.map(|_| {
				let ticket = scans.register();
				thread::spawn(move || {
					thread::sleep(Duration::from_millis(20));
					drop(ticket);
				})
			})
			.collect();

		scans.wait();
		assert_eq!(scans.count(), 0);
		for handle in handles {
			handle.join().unwrap();
		}
	}

	#[test]
	fn wait_timeout_gives_up_while_a_ticket_is_held() {
		let scans = ScansInFlight::new();
		let _ticket = scans.register();
		assert!(!scans.wait_timeout(Duration::from_millis(10)));
	}
}
