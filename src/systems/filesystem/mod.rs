//! Directory walking for a single query.

mod options;
mod scanner;
mod stream;
mod tracker;

pub use options::ScanOptions;
pub use scanner::{ScanOutcome, ScanRequest, scan, spawn_scan};
pub use stream::{ScanEnvelope, ScanEvent, ScanStream};
pub use tracker::{ScanTicket, ScansInFlight};
