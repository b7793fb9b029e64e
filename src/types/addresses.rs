//! Address book layout shared by every network

use super::{AssetEntry, Network, Role};

/// Static address book of one deployment.
#[derive(Debug)]
pub struct NetworkAddressBook {
    pub network: Network,
    pub chain_id: u64,
    /// Role constants in generator order. Not every network exposes every role.
    pub roles: &'static [(Role, &'static str)],
    /// Asset symbol table in ascending reserve id order.
    pub assets: &'static [(&'static str, AssetEntry)],
}

impl NetworkAddressBook {
    pub fn role(&self, role: Role) -> Option<&'static str> {
        self.roles
            .iter()
            .find(|(candidate, _)| *candidate == role)
            .map(|(_, address)| *address)
    }

    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + Clone {
        self.assets.iter().map(|(symbol, _)| *symbol)
    }

    /// Every address in the book, labelled `ROLE` or `SYMBOL.FIELD`.
    pub fn labelled_addresses(&self) -> impl Iterator<Item = (String, &'static str)> + Clone {
        let roles = self
            .roles
            .iter()
            .map(|(role, address)| (role.constant_name().to_string(), *address));
        let assets = self.assets.iter().flat_map(|(symbol, entry)| {
            let symbol = *symbol;
            entry
                .fields()
                .map(move |(field, address)| (format!("{symbol}.{field}"), address))
        });
        roles.chain(assets)
    }
}

#[cfg(test)]
mod tests {
    use crate::book;
    use crate::types::Network;

    #[test]
    fn labelled_addresses_restart_in_book_order() {
        let addresses = book::book(Network::Harmony).labelled_addresses();
        let first: Vec<_> = addresses.clone().collect();
        assert_eq!(first.len(), 19 + 8 * 5);
        assert_eq!(first, addresses.collect::<Vec<_>>());
        assert_eq!(first[0].0, "POOL_ADDRESSES_PROVIDER");
        assert_eq!(first[19].0, "ONE_DAI.UNDERLYING");
        assert_eq!(first[23].0, "ONE_DAI.ORACLE");
    }
}
