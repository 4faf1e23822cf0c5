//! Rendering module for serializing profile records.

mod json;

pub use json::{to_json, JsonFormat};
