use chrono::{NaiveDate, TimeZone, Utc};
use colored::Colorize;

use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::{HostkeepError, Result};
use crate::core::models::audit_entry::{AuditAction, AuditEntry};
use crate::core::traits::audit::AuditLogger;

/// Execute the `hostkeep log` command.
///
/// Displays the audit log with optional filters for date and entry count.
pub fn execute(ctx: &Context, since: Option<&str>, last: Option<usize>) -> Result<()> {
    let Some(logger) = ctx.audit_logger() else {
        output::warning("Audit is disabled in the config");
        return Ok(());
    };

    let since_dt = since.map(parse_since).transpose()?;
    let entries = logger.query(since_dt)?;

    if entries.is_empty() {
        output::header("hostkeep log");
        output::warning("No audit entries found");
        if since.is_some() {
            println!("  Try removing filters to see all entries.");
        }
        return Ok(());
    }

    // --last N keeps the newest N, still printed oldest first
    let skip = last.map_or(0, |n| entries.len().saturating_sub(n));
    let display = &entries[skip..];

    output::header(&format!("hostkeep log ({} entries)", display.len()));
    println!();

    for entry in display {
        print_entry(entry);
    }

    Ok(())
}

/// Parse a date string (ISO 8601: `YYYY-MM-DD`) into a UTC DateTime.
fn parse_since(s: &str) -> Result<chrono::DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        HostkeepError::InvalidConfig {
            detail: format!(
                "Invalid date format: '{s}'. Expected ISO 8601 (YYYY-MM-DD), e.g. 2026-01-15"
            ),
        }
    })?;
    Ok(Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN)))
}

/// Print a single audit entry as a formatted row.
fn print_entry(entry: &AuditEntry) {
    let date = entry.timestamp.format("%Y-%m-%d %H:%M:%S");
    let detail = entry.detail.as_deref().unwrap_or("").dimmed().to_string();

    println!(
        "  {} {} {:<10} {} {}",
        date.to_string().dimmed(),
        "│".dimmed(),
        format_action(&entry.action),
        entry.author,
        detail,
    );
}

/// Format an AuditAction as a colored string.
fn format_action(action: &AuditAction) -> String {
    match action {
        AuditAction::Store => "store".cyan().to_string(),
        AuditAction::HostAdd => "add".green().to_string(),
        AuditAction::HostRemove => "remove".red().to_string(),
        AuditAction::Verify => "verify".yellow().to_string(),
    }
}
