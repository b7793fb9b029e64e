//! Address book snapshot files

use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use crate::{
    book,
    storage::{AddressBookDocument, from_json},
    types::Network,
};

pub fn snapshot_path(dir: &Path, network: Network) -> PathBuf {
    dir.join(format!(
        "address_book_{}_{}.json",
        network.name().to_lowercase(),
        Utc::now().format("%Y-%m-%d")
    ))
}

pub fn save_snapshot(network: Network, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create snapshot directory {}", dir.display()))?;

    let document = AddressBookDocument::for_network(network).stamped(Utc::now());
    let filename = snapshot_path(dir, network);
    fs::write(&filename, serde_json::to_string_pretty(&document)?)
        .with_context(|| format!("Failed to write {}", filename.display()))?;

    info!(
        network = %network,
        chain_id = network.chain_id(),
        roles = document.roles.len(),
        assets = document.assets.len(),
        path = %filename.display(),
        "Saved address book snapshot"
    );

    Ok(filename)
}

/// Reloads a snapshot and checks it against the compiled-in table.
pub fn verify_snapshot(path: &Path) -> Result<AddressBookDocument> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let document = from_json(&json)?;

    let diffs = document.mismatches(book::book(document.network));
    if !diffs.is_empty() {
        anyhow::bail!(
            "Snapshot {} differs from the {} table: {}",
            path.display(),
            document.network,
            diffs.join("; ")
        );
    }
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("aave-v3-address-book-{}-{name}", std::process::id()))
    }

    #[test]
    fn saved_snapshot_verifies() {
        let dir = scratch_dir("roundtrip");
        let path = save_snapshot(Network::Harmony, &dir).unwrap();
        assert!(path.file_name().unwrap().to_string_lossy().starts_with("address_book_harmony_"));

        let document = verify_snapshot(&path).unwrap();
        assert_eq!(document.network, Network::Harmony);
        assert!(document.generated_at.is_some());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn edited_snapshot_is_rejected() {
        let dir = scratch_dir("edited");
        let path = save_snapshot(Network::Fantom, &dir).unwrap();
        let json = fs::read_to_string(&path).unwrap().replace(
            "0x794a61358D6845594F94dc1DB02A252b5b4814aD",
            "0x794A61358D6845594F94dc1DB02A252b5b4814aD",
        );
        fs::write(&path, json).unwrap();

        let err = verify_snapshot(&path).unwrap_err();
        assert!(err.to_string().contains("differs"));

        fs::remove_dir_all(&dir).ok();
    }
}
