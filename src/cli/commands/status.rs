use colored::Colorize;

use crate::adapters::interactive::console_user_info::ConsoleUserInfo;
use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::credentials::AuthenticationInfo;
use crate::core::services::credentials_service::complete_credentials;
use crate::core::traits::known_hosts_provider::KnownHostsProvider;

/// Execute the `hostkeep status` command.
///
/// Displays which known hosts file and config are in use, the host key
/// checking policy, the configured credentials and the audit state.
/// With `prompt`, missing secrets are asked for on the terminal first.
pub fn execute(ctx: &Context, prompt: bool) -> Result<()> {
    let mut credentials = ctx.credentials.clone();
    if prompt {
        complete_credentials(&mut credentials, &mut ConsoleUserInfo::stdio());
    }

    output::header(&format!("hostkeep v{}", env!("CARGO_PKG_VERSION")));

    if ctx.config_path.exists() {
        println!("  Config: {}", ctx.config_path.display());
    } else {
        println!(
            "  Config: {} {}",
            ctx.config_path.display(),
            "(not found, using defaults)".dimmed()
        );
    }

    print_known_hosts(ctx)?;
    print_credentials(&credentials);
    print_audit_status(ctx);

    Ok(())
}

/// Print the known hosts section.
fn print_known_hosts(ctx: &Context) -> Result<()> {
    println!("\n{}", "  Known hosts".bold());

    let provider = ctx.open_provider()?;
    let path = provider.path().display();
    if provider.path().exists() {
        output::success(&format!(
            "{path} ({} entries)",
            provider.known_hosts().len()
        ));
    } else {
        output::warning(&format!("{path} does not exist yet"));
    }
    println!(
        "  Host key checking: {}",
        provider.host_key_checking().to_string().cyan()
    );

    Ok(())
}

/// Print the credentials section. Secrets are only reported as set.
fn print_credentials(info: &AuthenticationInfo) {
    println!("\n{}", "  Credentials".bold());

    let unset = || "(not set)".dimmed().to_string();
    let secret = |v: Option<&str>| v.map(|_| "set".green().to_string()).unwrap_or_else(unset);

    println!(
        "  Username:    {}",
        info.username().map(str::to_string).unwrap_or_else(unset)
    );
    println!(
        "  Private key: {}",
        info.private_key().map(str::to_string).unwrap_or_else(unset)
    );
    println!("  Password:    {}", secret(info.password()));
    println!("  Passphrase:  {}", secret(info.passphrase()));
}

/// Print audit log status.
fn print_audit_status(ctx: &Context) {
    let Some(logger) = ctx.audit_logger() else {
        println!("\n{}", "  Audit: disabled".dimmed());
        return;
    };

    let log_path = logger.path();
    if log_path.exists() {
        let content = std::fs::read_to_string(log_path).unwrap_or_default();
        let entry_count = content.lines().filter(|l| !l.trim().is_empty()).count();
        println!(
            "\n  {} Audit: {} entries in {}",
            "✓".green(),
            entry_count,
            log_path.display(),
        );
    } else {
        println!(
            "\n  {} Audit: no entries yet ({})",
            "—".dimmed(),
            log_path.display()
        );
    }
}
