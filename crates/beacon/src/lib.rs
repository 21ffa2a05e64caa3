//! A privacy-friendly page-view beacon.
//!
//! The beacon reports page views with a best-effort JSON `POST`, keyed by
//! a random session identifier that lives exactly as long as its
//! [`SessionStore`] (the analogue of a browser tab). It is telemetry
//! sugar, not a critical path: network failures are logged at debug level
//! and swallowed, and no call ever blocks or surfaces an error to the
//! host.
pub mod session;

mod client;

pub use client::{Client, DEBOUNCE, Error, PageView, TRACK_PATH};
pub use session::{MemoryStore, SessionId, SessionStore};
