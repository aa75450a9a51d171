use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::cli::context::Context;
use crate::cli::output;
use crate::core::models::audit_entry::{AuditAction, AuditEntry};
use crate::core::traits::audit::AuditLogger;

/// Name of the local user, from `$USER` / `$USERNAME`.
/// Returns `"unknown"` if neither is set.
pub fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .ok()
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Hex SHA-256 of known hosts content, recorded as the state after a change.
pub fn state_hash(contents: &str) -> String {
    format!("{:x}", Sha256::digest(contents.as_bytes()))
}

/// Record an audit event. Warns on failure instead of propagating
/// the error, since audit should not block the main operation.
pub fn log_audit(ctx: &Context, action: AuditAction, detail: Option<String>, contents: &str) {
    let Some(logger) = ctx.audit_logger() else {
        return;
    };

    let entry = AuditEntry {
        timestamp: Utc::now(),
        author: current_user(),
        action,
        file: ctx.known_hosts_path.display().to_string(),
        detail,
        state_hash: Some(state_hash(contents)),
    };

    if let Err(e) = logger.log_event(&entry) {
        output::warning(&format!("Could not write audit log: {e}"));
    }
}
