//! Validation report types

use super::Network;

#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub network: Network,
    pub addresses_checked: usize,
    pub shape_ok: bool,
    pub ids_dense: bool,
    pub ordered: bool,
    pub symbols_unique: bool,
    pub roles_unique: bool,
    pub chain_id_ok: bool,
    pub all_passed: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            addresses_checked: 0,
            shape_ok: true,
            ids_dense: true,
            ordered: true,
            symbols_unique: true,
            roles_unique: true,
            chain_id_ok: true,
            all_passed: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }
}
