pub mod config;
pub mod error;
pub mod modifier;
pub mod node;

pub use config::{LoadSource, RemoteComposeConfig};
pub use error::{Error, Result};
pub use modifier::ModifierSpec;
pub use node::*;
