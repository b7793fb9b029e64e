//! Core data types and structures

pub mod addresses;
pub mod assets;
pub mod network;
pub mod report;
pub mod roles;

pub use addresses::*;
pub use assets::*;
pub use network::*;
pub use report::*;
pub use roles::*;
