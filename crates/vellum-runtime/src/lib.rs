//! Load pipeline: fetch a document, decode it, deliver exactly one terminal
//! callback to the host. Fetching is the only suspension point; decoding and
//! screen resolution are synchronous, pure-CPU steps.

pub mod config;
pub mod error;
pub mod fetch;
pub mod loader;

pub use config::load_config;
pub use error::{Error, FetchError, Result};
pub use fetch::{DocumentFetcher, FsFetcher};
pub use loader::{Loader, UiCallback};
