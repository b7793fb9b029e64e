//! Error handling

pub mod book_error;

pub use book_error::*;
