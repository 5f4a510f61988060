use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use ignore::{DirEntry, Error as IgnoreError, WalkBuilder, WalkState};

use super::options::ScanOptions;
use super::stream::{ScanEnvelope, ScanStream};
use super::tracker::ScanTicket;

/// One query's scan: what to look for, where, and for which generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
	pub root: PathBuf,
	pub query: String,
	pub generation: u64,
}

/// How a scan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
	Completed { matched: usize },
	/// A newer generation superseded the scan, or the consumer hung up.
	Abandoned { matched: usize },
	/// The root could not be read; a failure message was emitted.
	Failed,
}

/// Run [`scan`] on a dedicated thread. `ticket` is released when the thread ends.
pub fn spawn_scan(
	request: ScanRequest,
	options: ScanOptions,
	tx: Sender<ScanEnvelope>,
	latest_generation: Arc<AtomicU64>,
	ticket: ScanTicket,
) -> JoinHandle<ScanOutcome> {
	thread::spawn(move || {
		let _ticket = ticket;
		scan(&request, &options, &tx, &latest_generation)
	})
}

/// Walk `request.root` and stream every non-directory entry whose base name
/// contains the query.
///
/// Entries that fail to load are skipped. The walk stops early once
/// `latest_generation` moves past the request's generation.
pub fn scan(
	request: &ScanRequest,
	options: &ScanOptions,
	tx: &Sender<ScanEnvelope>,
	latest_generation: &AtomicU64,
) -> ScanOutcome {
	let generation = request.generation;
	let stream = ScanStream::new(tx, generation);

	if let Err(err) = fs::read_dir(&request.root) {
		let reason = format!("{}: {err}", request.root.display());
		log::error!("scan {generation} cannot read root {reason}");
		stream.send_failure(reason);
		return ScanOutcome::Failed;
	}

	log::debug!(
		"scan {generation} started for {:?} under {}",
		request.query,
		request.root.display()
	);

	let matcher = options.match_mode();
	let global_ignores = Arc::new(options.global_ignore_set());
	let matched = AtomicUsize::new(0);
	let abandoned = AtomicUsize::new(0);
	let root = request.root.as_path();
	let query = request.query.as_str();

	WalkBuilder::new(root)
		.standard_filters(false)
		.hidden(!options.include_hidden)
		.follow_links(options.follow_symlinks)
		.ignore(options.respect_ignore_files)
		.git_ignore(options.git_ignore)
		.git_global(options.git_global)
		.git_exclude(options.git_exclude)
		.parents(options.respect_ignore_files || options.git_ignore)
		.threads(options.thread_count())
		.max_depth(options.max_depth)
		.build_parallel()
		.run(|| {
			let sender = tx.clone();
			let global_ignores = Arc::clone(&global_ignores);
			let matched = &matched;
			let abandoned = &abandoned;
			Box::new(move |entry: Result<DirEntry, IgnoreError>| {
				if latest_generation.load(Ordering::Acquire) != generation {
					abandoned.fetch_add(1, Ordering::Relaxed);
					return WalkState::Quit;
				}

				let entry = match entry {
					Ok(entry) => entry,
					Err(err) => {
						log::debug!("scan {generation} skipped entry: {err}");
						return WalkState::Continue;
					}
				};
				if entry.depth() == 0 {
					return WalkState::Continue;
				}

				let is_dir = entry.file_type().is_some_and(|kind| kind.is_dir());
				if global_ignores.contains(entry.file_name()) {
					return if is_dir {
						WalkState::Skip
					} else {
						WalkState::Continue
					};
				}
				if is_dir {
					return WalkState::Continue;
				}

				let name = entry.file_name().to_string_lossy();
				if !matcher.matches(&name, query) {
					return WalkState::Continue;
				}

				let path = relative_display(root, entry.path());
				if !ScanStream::new(&sender, generation).send_match(path) {
					abandoned.fetch_add(1, Ordering::Relaxed);
					return WalkState::Quit;
				}
				matched.fetch_add(1, Ordering::Relaxed);
				WalkState::Continue
			})
		});

	let matched = matched.into_inner();
	if abandoned.into_inner() > 0 {
		log::debug!("scan {generation} abandoned after {matched} matches");
		return ScanOutcome::Abandoned { matched };
	}

	stream.finish(matched);
	log::debug!("scan {generation} finished with {matched} matches");
	ScanOutcome::Completed { matched }
}

/// Path relative to `root`, with `/` separators on every platform.
fn relative_display(root: &Path, path: &Path) -> String {
	let relative = path.strip_prefix(root).unwrap_or(path);
	relative.to_string_lossy().replace('\\', "/")
}
