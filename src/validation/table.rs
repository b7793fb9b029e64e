//! Address table invariant checks

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use tracing::{debug, warn};
use crate::{
    errors::{BookError, BookResult},
    types::{Network, NetworkAddressBook, Role, ValidationReport},
    validation::{has_valid_checksum, is_address_shaped},
};

/// Ids must be unique and cover `0..n` with no gaps.
pub fn check_dense_ids(ids: impl IntoIterator<Item = u16>) -> Result<(), String> {
    let mut ids: Vec<u16> = ids.into_iter().collect();
    ids.sort_unstable();
    for (expected, id) in ids.iter().enumerate() {
        if usize::from(*id) != expected {
            return Err(format!("expected id {expected}, found {id}"));
        }
    }
    Ok(())
}

/// Borrowed view of a table, shared by the static books and parsed documents.
#[derive(Debug)]
pub struct TableView<'a> {
    pub network: Network,
    pub chain_id: u64,
    /// Roles in listing order.
    pub roles: Vec<Role>,
    /// Every address labelled `ROLE` or `SYMBOL.FIELD`.
    pub addresses: Vec<(String, &'a str)>,
    /// `(symbol, id)` in listing order.
    pub assets: Vec<(&'a str, u16)>,
}

impl<'a> From<&'a NetworkAddressBook> for TableView<'a> {
    fn from(book: &'a NetworkAddressBook) -> Self {
        Self {
            network: book.network,
            chain_id: book.chain_id,
            roles: book.roles.iter().map(|(role, _)| *role).collect(),
            addresses: book.labelled_addresses().collect(),
            assets: book.assets.iter().map(|(symbol, entry)| (*symbol, entry.id)).collect(),
        }
    }
}

fn check_addresses(report: &mut ValidationReport, addresses: &[(String, &str)]) {
    for (label, address) in addresses {
        report.addresses_checked += 1;
        if !is_address_shaped(address) {
            report.shape_ok = false;
            report.errors.push(format!("{label}: malformed address {address:?}"));
        } else if !has_valid_checksum(address) {
            report.warnings.push(format!("{label}: {address} is not EIP-55 checksummed"));
        }
    }
}

fn check_duplicates<T: Eq + Hash + Display>(
    report: &mut ValidationReport,
    kind: &str,
    items: impl IntoIterator<Item = T>,
) -> bool {
    let mut seen = HashSet::new();
    let mut unique = true;
    for item in items {
        if !seen.contains(&item) {
            seen.insert(item);
            continue;
        }
        unique = false;
        report.errors.push(format!("duplicate {kind} {item}"));
    }
    unique
}

/// Runs every table invariant over `view`.
pub fn check_table(view: &TableView<'_>) -> ValidationReport {
    let mut report = ValidationReport::new(view.network);

    check_addresses(&mut report, &view.addresses);
    report.roles_unique = check_duplicates(&mut report, "role", view.roles.iter().copied());
    report.symbols_unique =
        check_duplicates(&mut report, "asset symbol", view.assets.iter().map(|(symbol, _)| *symbol));

    if let Err(details) = check_dense_ids(view.assets.iter().map(|(_, id)| *id)) {
        report.ids_dense = false;
        report.errors.push(details);
    }

    // Listing order must already be the on-chain reserve order.
    if !view.assets.windows(2).all(|pair| pair[0].1 < pair[1].1) {
        report.ordered = false;
        report.errors.push("assets are not listed in ascending id order".to_string());
    }

    if view.chain_id != view.network.chain_id() {
        report.chain_id_ok = false;
        report.errors.push(format!(
            "chain id {} does not belong to {}",
            view.chain_id, view.network
        ));
    }

    report.all_passed = report.shape_ok
        && report.ids_dense
        && report.ordered
        && report.symbols_unique
        && report.roles_unique
        && report.chain_id_ok;
    for warning in &report.warnings {
        debug!(network = %report.network, "{}", warning);
    }
    if !report.all_passed {
        warn!(
            network = %report.network,
            errors = report.errors.len(),
            "Address table failed validation"
        );
    }
    report
}

pub fn validate_book(book: &NetworkAddressBook) -> ValidationReport {
    check_table(&TableView::from(book))
}

pub fn ensure_valid(book: &NetworkAddressBook) -> BookResult<ValidationReport> {
    let report = validate_book(book);
    if report.all_passed {
        Ok(report)
    } else {
        Err(invalid_table(book.network, &report))
    }
}

pub fn invalid_table(network: Network, report: &ValidationReport) -> BookError {
    BookError::InvalidTable {
        network,
        details: report.errors.join("; "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book;
    use crate::types::AssetEntry;

    const ADDR: &str = "0x794a61358D6845594F94dc1DB02A252b5b4814aD";

    const fn entry(id: u16) -> AssetEntry {
        AssetEntry {
            decimals: 18,
            id,
            underlying: ADDR,
            a_token: ADDR,
            v_token: ADDR,
            interest_rate_strategy: ADDR,
            oracle: ADDR,
        }
    }

    #[test]
    fn shipped_books_pass() {
        for network in Network::ALL {
            let report = ensure_valid(book::book(network)).unwrap();
            assert!(report.all_passed);
            assert!(report.errors.is_empty());
        }
    }

    #[test]
    fn counts_every_address() {
        let report = validate_book(book::book(Network::Fantom));
        assert_eq!(report.addresses_checked, 21 + 10 * 5);
        let report = validate_book(book::book(Network::Harmony));
        assert_eq!(report.addresses_checked, 19 + 8 * 5);
    }

    #[test]
    fn dense_ids_rule() {
        assert!(check_dense_ids([2, 0, 1]).is_ok());
        assert!(check_dense_ids(Vec::new()).is_ok());
        assert!(check_dense_ids([0, 2]).is_err());
        assert!(check_dense_ids([0, 0, 1]).is_err());
        assert!(check_dense_ids([1, 2]).is_err());
    }

    #[test]
    fn flags_gapped_and_malformed_tables() {
        static ROLES: [(Role, &str); 1] = [(Role::Pool, "0x794a61358D6845594F94dc1DB02A252b5b4814")];
        static ASSETS: [(&str, AssetEntry); 2] = [
            ("AAA", entry(0)),
            ("AAA", entry(2)),
        ];
        let broken = NetworkAddressBook {
            network: Network::Fantom,
            chain_id: 250,
            roles: &ROLES,
            assets: &ASSETS,
        };

        let report = validate_book(&broken);
        assert!(!report.all_passed);
        assert!(!report.shape_ok);
        assert!(!report.ids_dense);
        assert!(!report.symbols_unique);
        assert!(report.ordered);
        assert!(report.chain_id_ok);
        assert!(matches!(
            ensure_valid(&broken),
            Err(BookError::InvalidTable { network: Network::Fantom, .. })
        ));
    }

    #[test]
    fn ordering_and_chain_id_have_their_own_flags() {
        static ROLES: [(Role, &str); 2] = [(Role::Pool, ADDR), (Role::Oracle, ADDR)];
        static ASSETS: [(&str, AssetEntry); 2] = [("BBB", entry(1)), ("AAA", entry(0))];
        let shuffled = NetworkAddressBook {
            network: Network::Harmony,
            chain_id: 250,
            roles: &ROLES,
            assets: &ASSETS,
        };

        let report = validate_book(&shuffled);
        assert!(!report.all_passed);
        assert!(!report.ordered);
        assert!(!report.chain_id_ok);
        assert!(report.ids_dense);
        assert!(report.shape_ok);
        assert!(report.roles_unique);
    }

    #[test]
    fn duplicate_roles_fail() {
        static ROLES: [(Role, &str); 2] = [(Role::Pool, ADDR), (Role::Pool, ADDR)];
        static ASSETS: [(&str, AssetEntry); 1] = [("AAA", entry(0))];
        let doubled = NetworkAddressBook {
            network: Network::Fantom,
            chain_id: 250,
            roles: &ROLES,
            assets: &ASSETS,
        };

        let report = validate_book(&doubled);
        assert!(!report.roles_unique);
        assert!(!report.all_passed);
        assert!(report.errors.iter().any(|e| e == "duplicate role POOL"));
    }
}
