use colored::Colorize;

use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::{HostkeepError, Result};
use crate::core::models::audit_entry::AuditAction;
use crate::core::models::known_host_entry::KnownHostEntry;
use crate::core::models::store_outcome::StoreOutcome;
use crate::core::traits::known_hosts_provider::KnownHostsProvider;

/// Execute `hostkeep add`: record a host key.
pub fn execute_add(ctx: &Context, host: &str, key_type: &str, key: &str) -> Result<()> {
    let entry = KnownHostEntry::new(host, key_type, key);
    // Reject garbage before it lands in the file.
    let fingerprint = entry.fingerprint()?;

    let mut provider = ctx.open_provider()?;
    match provider.add_known_host(&entry)? {
        StoreOutcome::Written => {
            output::success(&format!("Added {host} ({key_type}) {fingerprint}"));
            super::audit_helpers::log_audit(
                ctx,
                AuditAction::HostAdd,
                Some(format!("added {host} {key_type}")),
                provider.contents(),
            );
        }
        StoreOutcome::Unchanged => {
            output::info(&format!("{host} ({key_type}) is already known"));
        }
    }

    Ok(())
}

/// Execute `hostkeep remove`: drop every key recorded for a host.
pub fn execute_remove(ctx: &Context, host: &str) -> Result<()> {
    let mut provider = ctx.open_provider()?;
    let removed = provider.remove_host(host)?;

    output::success(&format!("Removed {removed} key(s) for {host}"));
    super::audit_helpers::log_audit(
        ctx,
        AuditAction::HostRemove,
        Some(format!("removed {host}")),
        provider.contents(),
    );

    Ok(())
}

/// Execute `hostkeep fingerprint`: show fingerprints recorded for a host.
pub fn execute_fingerprint(ctx: &Context, host: &str) -> Result<()> {
    let provider = ctx.open_provider()?;
    let entries: Vec<_> = provider.known_hosts().for_host(host).collect();

    if entries.is_empty() {
        return Err(HostkeepError::HostNotFound {
            host: host.to_string(),
        });
    }

    output::header(&format!("Fingerprints for {host}"));
    for entry in entries {
        match entry.fingerprint() {
            Ok(fp) => println!("  {} {:<20} {fp}", "•".dimmed(), entry.key_type),
            Err(e) => output::warning(&format!("{}: {e}", entry.key_type)),
        }
    }

    Ok(())
}
