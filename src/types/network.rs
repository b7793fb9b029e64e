//! Supported networks and their chain metadata

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::BookError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Network {
    Fantom,
    Harmony,
}

impl Network {
    pub const ALL: [Network; 2] = [Network::Fantom, Network::Harmony];

    pub const fn chain_id(self) -> u64 {
        match self {
            Network::Fantom => 250,
            Network::Harmony => 1_666_600_000,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Network::Fantom => "Fantom",
            Network::Harmony => "Harmony",
        }
    }

    /// Block explorer root used in the generated address links.
    pub const fn explorer_base_url(self) -> &'static str {
        match self {
            Network::Fantom => "https://ftmscan.com",
            Network::Harmony => "https://explorer.harmony.one",
        }
    }

    pub fn explorer_address_url(self, address: &str) -> String {
        format!("{}/address/{}", self.explorer_base_url(), address)
    }

    pub fn from_chain_id(chain_id: u64) -> Result<Self, BookError> {
        Self::ALL
            .into_iter()
            .find(|network| network.chain_id() == chain_id)
            .ok_or(BookError::UnknownChainId { chain_id })
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = BookError;

    // Names match case-insensitively so "fantom" and "FANTOM" both work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|network| network.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| BookError::UnknownNetwork {
                name: trimmed.to_string(),
            })
    }
}
