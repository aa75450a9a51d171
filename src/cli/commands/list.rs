use colored::Colorize;

use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::traits::known_hosts_provider::KnownHostsProvider;

/// Execute the `hostkeep list` command.
pub fn execute(ctx: &Context) -> Result<()> {
    let provider = ctx.open_provider()?;
    let known_hosts = provider.known_hosts();

    if known_hosts.is_empty() {
        output::warning(&format!(
            "No known hosts in {}",
            ctx.known_hosts_path.display()
        ));
        return Ok(());
    }

    output::header(&format!("Known hosts ({})", known_hosts.len()));
    for entry in known_hosts.entries() {
        let fingerprint = entry
            .fingerprint()
            .unwrap_or_else(|_| "(invalid key)".to_string());
        println!(
            "  {} {:<30} {:<20} {}",
            "•".dimmed(),
            entry.host_name,
            entry.key_type,
            fingerprint.dimmed()
        );
    }

    Ok(())
}
