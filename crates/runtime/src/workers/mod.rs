//! Worker tasks that back the runtime orchestration.
//!
//! The session worker is the single writer for all session state. Provider
//! calls and timers run as short-lived tasks that report back to it.

mod session;

pub use session::{Command, SessionWorker, WorkerTiming};
