//! Per-asset reserve entries

use alloy::primitives::Address;
use serde::Serialize;
use std::fmt;
use crate::errors::{BookError, BookResult};

/// One listed reserve. Address strings are kept exactly as generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssetEntry {
    pub decimals: u8,
    pub id: u16,
    #[serde(rename = "UNDERLYING")]
    pub underlying: &'static str,
    #[serde(rename = "A_TOKEN")]
    pub a_token: &'static str,
    #[serde(rename = "V_TOKEN")]
    pub v_token: &'static str,
    #[serde(rename = "INTEREST_RATE_STRATEGY")]
    pub interest_rate_strategy: &'static str,
    #[serde(rename = "ORACLE")]
    pub oracle: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetField {
    Underlying,
    AToken,
    VToken,
    InterestRateStrategy,
    Oracle,
}

impl AssetField {
    pub const ALL: [AssetField; 5] = [
        AssetField::Underlying,
        AssetField::AToken,
        AssetField::VToken,
        AssetField::InterestRateStrategy,
        AssetField::Oracle,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            AssetField::Underlying => "UNDERLYING",
            AssetField::AToken => "A_TOKEN",
            AssetField::VToken => "V_TOKEN",
            AssetField::InterestRateStrategy => "INTEREST_RATE_STRATEGY",
            AssetField::Oracle => "ORACLE",
        }
    }
}

impl fmt::Display for AssetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl AssetEntry {
    pub const fn field(&self, field: AssetField) -> &'static str {
        match field {
            AssetField::Underlying => self.underlying,
            AssetField::AToken => self.a_token,
            AssetField::VToken => self.v_token,
            AssetField::InterestRateStrategy => self.interest_rate_strategy,
            AssetField::Oracle => self.oracle,
        }
    }

    /// Address fields in generator order.
    pub fn fields(&self) -> impl Iterator<Item = (AssetField, &'static str)> + Clone + '_ {
        AssetField::ALL.into_iter().map(move |field| (field, self.field(field)))
    }

    pub fn underlying_address(&self) -> BookResult<Address> {
        parse_address(AssetField::Underlying.key(), self.underlying)
    }

    pub fn a_token_address(&self) -> BookResult<Address> {
        parse_address(AssetField::AToken.key(), self.a_token)
    }

    pub fn v_token_address(&self) -> BookResult<Address> {
        parse_address(AssetField::VToken.key(), self.v_token)
    }

    pub fn interest_rate_strategy_address(&self) -> BookResult<Address> {
        parse_address(AssetField::InterestRateStrategy.key(), self.interest_rate_strategy)
    }

    pub fn oracle_address(&self) -> BookResult<Address> {
        parse_address(AssetField::Oracle.key(), self.oracle)
    }
}

/// Parses a hex address without enforcing its checksum casing.
pub fn parse_address(label: &str, value: &str) -> BookResult<Address> {
    value.parse::<Address>().map_err(|_| BookError::InvalidAddress {
        label: label.to_string(),
        value: value.to_string(),
    })
}
