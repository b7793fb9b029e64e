//! Owned JSON form of one network's address book

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::{
    book,
    errors::{BookError, BookResult},
    types::{AssetEntry, Network, NetworkAddressBook, Role, ValidationReport},
    validation::{TableView, check_table, invalid_table},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressBookDocument {
    pub network: Network,
    pub chain_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
    pub roles: Vec<RoleDocument>,
    pub assets: Vec<AssetDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDocument {
    pub name: Role,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDocument {
    pub symbol: String,
    pub decimals: u8,
    pub id: u16,
    #[serde(rename = "UNDERLYING")]
    pub underlying: String,
    #[serde(rename = "A_TOKEN")]
    pub a_token: String,
    #[serde(rename = "V_TOKEN")]
    pub v_token: String,
    #[serde(rename = "INTEREST_RATE_STRATEGY")]
    pub interest_rate_strategy: String,
    #[serde(rename = "ORACLE")]
    pub oracle: String,
}

impl AssetDocument {
    fn from_entry(symbol: &str, entry: &AssetEntry) -> Self {
        Self {
            symbol: symbol.to_string(),
            decimals: entry.decimals,
            id: entry.id,
            underlying: entry.underlying.to_string(),
            a_token: entry.a_token.to_string(),
            v_token: entry.v_token.to_string(),
            interest_rate_strategy: entry.interest_rate_strategy.to_string(),
            oracle: entry.oracle.to_string(),
        }
    }

    fn addresses(&self) -> [(&'static str, &str); 5] {
        [
            ("UNDERLYING", self.underlying.as_str()),
            ("A_TOKEN", self.a_token.as_str()),
            ("V_TOKEN", self.v_token.as_str()),
            ("INTEREST_RATE_STRATEGY", self.interest_rate_strategy.as_str()),
            ("ORACLE", self.oracle.as_str()),
        ]
    }
}

impl From<&NetworkAddressBook> for AddressBookDocument {
    fn from(book: &NetworkAddressBook) -> Self {
        Self {
            network: book.network,
            chain_id: book.chain_id,
            generated_at: None,
            roles: book
                .roles
                .iter()
                .map(|(role, address)| RoleDocument {
                    name: *role,
                    address: address.to_string(),
                })
                .collect(),
            assets: book
                .assets
                .iter()
                .map(|(symbol, entry)| AssetDocument::from_entry(symbol, entry))
                .collect(),
        }
    }
}

impl AddressBookDocument {
    pub fn for_network(network: Network) -> Self {
        Self::from(book::book(network))
    }

    pub fn stamped(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = Some(generated_at);
        self
    }

    pub fn validate(&self) -> ValidationReport {
        let roles = self
            .roles
            .iter()
            .map(|role| (role.name.constant_name().to_string(), role.address.as_str()));
        let assets = self.assets.iter().flat_map(|asset| {
            asset
                .addresses()
                .map(|(field, address)| (format!("{}.{field}", asset.symbol), address))
        });

        check_table(&TableView {
            network: self.network,
            chain_id: self.chain_id,
            roles: self.roles.iter().map(|role| role.name).collect(),
            addresses: roles.chain(assets).collect(),
            assets: self.assets.iter().map(|asset| (asset.symbol.as_str(), asset.id)).collect(),
        })
    }

    /// Byte-exact differences against a static book, one line per mismatch.
    pub fn mismatches(&self, book: &NetworkAddressBook) -> Vec<String> {
        let mut diffs = Vec::new();
        if self.network != book.network || self.chain_id != book.chain_id {
            diffs.push(format!(
                "network {}/{} vs {}/{}",
                self.network, self.chain_id, book.network, book.chain_id
            ));
        }
        if self.roles.len() != book.roles.len() {
            diffs.push(format!("{} roles vs {}", self.roles.len(), book.roles.len()));
        }
        for (doc, (role, address)) in self.roles.iter().zip(book.roles) {
            if doc.name != *role || doc.address != *address {
                diffs.push(format!("{}={} vs {role}={address}", doc.name, doc.address));
            }
        }
        if self.assets.len() != book.assets.len() {
            diffs.push(format!("{} assets vs {}", self.assets.len(), book.assets.len()));
        }
        for (doc, (symbol, entry)) in self.assets.iter().zip(book.assets) {
            if *doc != AssetDocument::from_entry(symbol, entry) {
                diffs.push(format!("asset {} vs {symbol}", doc.symbol));
            }
        }
        diffs
    }

    pub fn matches(&self, book: &NetworkAddressBook) -> bool {
        self.mismatches(book).is_empty()
    }
}

pub fn to_json(network: Network) -> BookResult<String> {
    serde_json::to_string_pretty(&AddressBookDocument::for_network(network)).map_err(|e| {
        BookError::Export {
            context: format!("serializing {network} address book"),
            source: e.into(),
        }
    })
}

/// Parses a document and rejects tables that break the address book invariants.
pub fn from_json(json: &str) -> BookResult<AddressBookDocument> {
    let document: AddressBookDocument =
        serde_json::from_str(json).map_err(|e| BookError::Export {
            context: "parsing address book document".to_string(),
            source: e.into(),
        })?;

    let report = document.validate();
    if !report.all_passed {
        return Err(invalid_table(document.network, &report));
    }
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_address_bytes() {
        for network in Network::ALL {
            let json = to_json(network).unwrap();
            let parsed = from_json(&json).unwrap();
            assert!(parsed.matches(book::book(network)), "{:?}", parsed.mismatches(book::book(network)));
            assert_eq!(to_json(network).unwrap(), json);
        }
    }

    #[test]
    fn json_keeps_mixed_case_literally() {
        let json = to_json(Network::Fantom).unwrap();
        assert!(json.contains("\"0x04068DA6C83AFCFA0e13ba15A6696662335D5B75\""));
        assert!(json.contains("\"INTEREST_RATE_STRATEGY\""));
        assert!(json.contains("\"chainId\": 250"));
        assert!(!json.contains("generatedAt"));
    }

    #[test]
    fn lowercasing_an_address_is_a_mismatch() {
        let mut document = AddressBookDocument::for_network(Network::Harmony);
        document.roles[1].address = document.roles[1].address.to_lowercase();
        let diffs = document.mismatches(book::book(Network::Harmony));
        assert_eq!(diffs.len(), 1);
        assert!(diffs[0].starts_with("POOL="));
    }

    #[test]
    fn rejects_documents_with_gapped_ids() {
        let mut document = AddressBookDocument::for_network(Network::Fantom);
        document.assets.remove(3);
        let json = serde_json::to_string(&document).unwrap();
        assert!(matches!(from_json(&json), Err(BookError::InvalidTable { .. })));
    }

    #[test]
    fn rejects_unparseable_documents() {
        assert!(matches!(from_json("{\"network\":"), Err(BookError::Export { .. })));
        assert!(matches!(
            from_json("{\"network\":\"Ethereum\",\"chainId\":1,\"roles\":[],\"assets\":[]}"),
            Err(BookError::Export { .. })
        ));
    }

    #[test]
    fn rejects_foreign_chain_id() {
        let mut document = AddressBookDocument::for_network(Network::Harmony);
        document.chain_id = 250;
        let json = serde_json::to_string(&document).unwrap();
        assert!(from_json(&json).is_err());
    }

    #[test]
    fn rejects_documents_out_of_reserve_order() {
        let mut document = AddressBookDocument::for_network(Network::Fantom);
        document.assets.swap(0, 9);
        let json = serde_json::to_string(&document).unwrap();
        assert!(!document.validate().ordered);
        assert!(matches!(from_json(&json), Err(BookError::InvalidTable { .. })));
    }

    #[test]
    fn rejects_documents_with_duplicate_roles() {
        let mut document = AddressBookDocument::for_network(Network::Harmony);
        let pool = document.roles[1].clone();
        document.roles.push(pool);
        let json = serde_json::to_string(&document).unwrap();
        assert!(!document.validate().roles_unique);
        match from_json(&json) {
            Err(BookError::InvalidTable { details, .. }) => {
                assert!(details.contains("duplicate role POOL"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn document_and_book_reports_agree() {
        for network in Network::ALL {
            let from_book = crate::validation::validate_book(book::book(network));
            let from_document = AddressBookDocument::for_network(network).validate();
            assert_eq!(from_document.addresses_checked, from_book.addresses_checked);
            assert_eq!(from_document.warnings, from_book.warnings);
            assert!(from_document.all_passed);
        }
    }
}
