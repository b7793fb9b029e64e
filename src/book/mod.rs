//! Address table lookups across every supported network

pub mod fantom;
pub mod harmony;

use alloy::primitives::Address;
use lazy_static::lazy_static;
use std::collections::HashMap;
use tracing::debug;
use crate::errors::{BookError, BookResult};
use crate::types::{AssetEntry, Network, NetworkAddressBook, Role, parse_address};

lazy_static! {
    static ref SYMBOL_INDEX: HashMap<Network, HashMap<&'static str, usize>> = Network::ALL
        .into_iter()
        .map(|network| {
            let positions = book(network)
                .symbols()
                .enumerate()
                .map(|(position, symbol)| (symbol, position))
                .collect();
            (network, positions)
        })
        .collect();
}

pub fn book(network: Network) -> &'static NetworkAddressBook {
    match network {
        Network::Fantom => &fantom::BOOK,
        Network::Harmony => &harmony::BOOK,
    }
}

pub fn get_role_address(network: Network, role: Role) -> BookResult<&'static str> {
    book(network).role(role).ok_or_else(|| BookError::UnknownRole {
        network,
        role: role.constant_name().to_string(),
    })
}

/// Role lookup by generator constant name, e.g. `"POOL"`.
pub fn get_role_address_by_name(network: Network, name: &str) -> BookResult<&'static str> {
    let role = name.parse::<Role>().map_err(|_| BookError::UnknownRole {
        network,
        role: name.to_string(),
    })?;
    get_role_address(network, role)
}

/// Symbols match exactly: `fUSDT` exists on Fantom, `FUSDT` does not.
pub fn get_asset(network: Network, symbol: &str) -> BookResult<&'static AssetEntry> {
    match SYMBOL_INDEX.get(&network).and_then(|positions| positions.get(symbol)) {
        Some(position) => Ok(&book(network).assets[*position].1),
        None => {
            debug!(%network, symbol, "Asset lookup miss");
            Err(BookError::UnknownAsset {
                network,
                symbol: symbol.to_string(),
            })
        }
    }
}

pub fn list_assets(
    network: Network,
) -> impl ExactSizeIterator<Item = (&'static str, &'static AssetEntry)> + Clone {
    book(network).assets.iter().map(|(symbol, entry)| (*symbol, entry))
}

pub fn roles(network: Network) -> impl ExactSizeIterator<Item = (Role, &'static str)> + Clone {
    book(network).roles.iter().copied()
}

/// Every label on `network` whose address equals `address`, ignoring case.
pub fn find_by_address(network: Network, address: &str) -> BookResult<Vec<String>> {
    let wanted = parse_address("query", address)?;
    Ok(book(network)
        .labelled_addresses()
        .filter(|(_, candidate)| candidate.parse::<Address>().ok() == Some(wanted))
        .map(|(label, _)| label)
        .collect())
}

pub fn explorer_url(network: Network, address: &str) -> String {
    network.explorer_address_url(address)
}
