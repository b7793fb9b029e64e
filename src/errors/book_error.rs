//! Custom error types for address book lookups

use thiserror::Error;
use crate::types::Network;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Unknown network: {name}")]
    UnknownNetwork { name: String },

    #[error("Unknown chain id: {chain_id}")]
    UnknownChainId { chain_id: u64 },

    #[error("Unknown role on {network}: {role}")]
    UnknownRole { network: Network, role: String },

    #[error("Unknown role: {name}")]
    UnknownRoleName { name: String },

    #[error("Unknown asset on {network}: {symbol}")]
    UnknownAsset { network: Network, symbol: String },

    #[error("Invalid address for {label}: {value}")]
    InvalidAddress { label: String, value: String },

    #[error("Invalid address table for {network}: {details}")]
    InvalidTable { network: Network, details: String },

    #[error("Export failed: {context}")]
    Export {
        context: String,
        #[source]
        source: anyhow::Error,
    },
}

impl BookError {
    /// True for the lookup-miss family of errors.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            BookError::UnknownNetwork { .. }
                | BookError::UnknownChainId { .. }
                | BookError::UnknownRole { .. }
                | BookError::UnknownRoleName { .. }
                | BookError::UnknownAsset { .. }
        )
    }
}

pub type BookResult<T> = Result<T, BookError>;
