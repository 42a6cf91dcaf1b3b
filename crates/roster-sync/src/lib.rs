//! Remote synchronization for the roster schedule.
//!
//! Provides the sheet web-app HTTP client and the session-local entry cache.

pub mod cache;
pub mod client;
pub mod error;
pub mod types;

pub use cache::EntryCache;
pub use client::SheetClient;
pub use error::SyncError;
pub use types::{SaveOutcome, ScheduleEntry};
