//! Validation functions for address shapes and table invariants

pub mod addresses;
pub mod table;

pub use addresses::*;
pub use table::*;
