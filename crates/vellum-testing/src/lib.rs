//! Testing infrastructure for vellum integration tests.
//!
//! - `fixtures`: canned JSON documents exercising every node kind
//! - `backend`: a `RenderBackend` that records what it was asked to build
//! - `callback`: a `UiCallback` that captures terminal deliveries
//! - `fetch`: scriptable fetch collaborators

pub mod backend;
pub mod callback;
pub mod fetch;
pub mod fixtures;

pub use backend::{RecordingBackend, RecordingScreenRequests, ViewNode};
pub use callback::{Delivery, RecordingCallback};
pub use fetch::StubFetcher;
