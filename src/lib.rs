//! Aave V3 Address Book - static contract addresses for Fantom and Harmony
//!
//! The tables in the `book` module are generated from the upstream deployment
//! registry and never edited by hand. Lookups are pure reads over `static`
//! data and are safe to share across threads.

pub mod config;
pub mod types;
pub mod errors;
pub mod book;
pub mod validation;
pub mod utils;
pub mod storage;

// Re-export commonly used items
pub use book::{
    book, explorer_url, find_by_address, get_asset, get_role_address, get_role_address_by_name,
    list_assets, roles,
};
pub use config::{Config, CONFIG};
pub use errors::{BookError, BookResult};
pub use types::*;
