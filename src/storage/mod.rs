//! Serialized snapshots of the address book

pub mod document;
pub mod snapshots;

pub use document::*;
pub use snapshots::*;
