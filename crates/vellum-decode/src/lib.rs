//! JSON wire format for vellum component documents.
//!
//! Decoding is an explicit recursive descent keyed on the mandatory `"type"`
//! discriminator, not a reflection/derive dispatch: every decode path is a
//! plain function that can be tested on its own. Decoding is pure and total
//! given a parsed JSON tree — no I/O, and the first field or child error
//! aborts the whole subtree so a partially-built node never escapes.

pub mod decoder;
pub mod encoder;
pub mod error;

pub use decoder::{decode_component, decode_document, decode_modifier};
pub use encoder::encode_component;
pub use error::{Error, Result};
