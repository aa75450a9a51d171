use std::fs;
use std::io;

use crate::adapters::known_hosts::stream_provider::StreamKnownHostsProvider;
use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::{HostkeepError, Result};
use crate::core::models::audit_entry::AuditAction;
use crate::core::models::store_outcome::StoreOutcome;
use crate::core::traits::known_hosts_provider::KnownHostsProvider;

/// Execute the `hostkeep store` command.
///
/// Replaces the known hosts content with `source` (a file, or `-` for
/// stdin). The file is only rewritten when the set of entries differs.
pub fn execute(ctx: &Context, source: &str) -> Result<()> {
    let contents = if source == "-" {
        StreamKnownHostsProvider::from_reader(io::stdin().lock())?
            .contents()
            .to_string()
    } else {
        fs::read_to_string(source).map_err(|e| HostkeepError::file_access(source, e))?
    };

    let mut provider = ctx.open_provider()?;
    let outcome = provider.store(&contents)?;
    let count = provider.known_hosts().len();
    let path = provider.path().display();

    match outcome {
        StoreOutcome::Written => {
            output::success(&format!(
                "Known hosts written: {path} ({count} entries)"
            ));
            super::audit_helpers::log_audit(
                ctx,
                AuditAction::Store,
                Some(format!("{count} entries from {source}")),
                &contents,
            );
        }
        StoreOutcome::Unchanged => {
            output::info(&format!(
                "Known hosts unchanged: {path} ({count} entries)"
            ));
        }
    }

    Ok(())
}
