//! Display and printing utilities

use tracing::{info, warn};
use crate::types::{NetworkAddressBook, ValidationReport};

pub fn print_network_summary(book: &NetworkAddressBook) {
    info!("\n🌐 {} (chain id {})", book.network, book.chain_id);
    info!("   Roles: {}", book.roles.len());
    info!("   Assets: {}", book.asset_count());
}

pub fn print_roles(book: &NetworkAddressBook, show_links: bool) {
    info!("📋 Roles:");
    for (role, address) in book.roles {
        match role.interface_name() {
            Some(interface) => info!("   {:<40} {} ({})", role.constant_name(), address, interface),
            None => info!("   {:<40} {}", role.constant_name(), address),
        }
        if show_links {
            info!("      {}", book.network.explorer_address_url(address));
        }
    }
}

pub fn print_assets(book: &NetworkAddressBook, show_links: bool) {
    info!("💰 Assets:");
    for (symbol, entry) in book.assets {
        info!("   #{} {} ({} decimals)", entry.id, symbol, entry.decimals);
        for (field, address) in entry.fields() {
            info!("      {:<24} {}", field.key(), address);
            if show_links {
                info!("         {}", book.network.explorer_address_url(address));
            }
        }
    }
}

pub fn print_validation_report(report: &ValidationReport) {
    if report.all_passed {
        info!(
            "✅ {}: {} addresses checked, all validation checks passed",
            report.network, report.addresses_checked
        );
    } else {
        warn!("❌ {}: validation failed", report.network);
        warn!("   Address shapes: {}", if report.shape_ok { "OK" } else { "FAIL" });
        warn!("   Dense ids:      {}", if report.ids_dense { "OK" } else { "FAIL" });
        warn!("   Id ordering:    {}", if report.ordered { "OK" } else { "FAIL" });
        warn!("   Unique symbols: {}", if report.symbols_unique { "OK" } else { "FAIL" });
        warn!("   Unique roles:   {}", if report.roles_unique { "OK" } else { "FAIL" });
        warn!("   Chain id:       {}", if report.chain_id_ok { "OK" } else { "FAIL" });
        for error in &report.errors {
            warn!("   {}", error);
        }
    }
    if !report.warnings.is_empty() {
        info!("   ⚠️  {} checksum warnings", report.warnings.len());
    }
}
