//! Aave V3 Address Book - Inspection Entry Point
//!
//! Prints the configured networks, validates their tables and optionally
//! writes JSON snapshots.

use aave_v3_address_book::*;
use anyhow::Result;
use tracing::{error, info};

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = CONFIG.clone();

    // Initialize logging
    let _logging_guard = utils::setup_logging(config.json_logs)?;
    utils::setup_output_directories(&config.export_dir)?;

    info!("📒 Aave V3 Address Book v{}", env!("CARGO_PKG_VERSION"));
    info!("📋 Configuration:");
    info!(
        "   Networks: {}",
        config.networks.iter().map(|n| n.name()).collect::<Vec<_>>().join(", ")
    );
    info!("   Validation: {}", config.enable_validation);
    info!("   Export: {}", config.enable_export);
    if config.enable_export {
        info!("   Export Dir: {}", config.export_dir.display());
    }

    let mut failed = Vec::new();

    for network in &config.networks {
        let table = book(*network);

        utils::print_network_summary(table);
        utils::print_roles(table, config.show_explorer_links);
        utils::print_assets(table, config.show_explorer_links);

        if config.enable_validation {
            let report = validation::validate_book(table);
            utils::print_validation_report(&report);
            if !report.all_passed {
                failed.push(*network);
                continue;
            }
        }

        if config.enable_export {
            match storage::save_snapshot(*network, &config.export_dir)
                .and_then(|path| storage::verify_snapshot(&path).map(|_| path))
            {
                Ok(path) => info!("💾 Snapshot written to {}", path.display()),
                Err(e) => {
                    error!("Failed to export {} snapshot: {:#}", network, e);
                    failed.push(*network);
                }
            }
        }
    }

    if !failed.is_empty() {
        return Err(anyhow::anyhow!("Address book checks failed for: {:?}", failed));
    }

    info!("\n🛑 Done");
    Ok(())
}
