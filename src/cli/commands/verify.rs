use std::fs::File;

use crate::adapters::interactive::console_user_info::ConsoleUserInfo;
use crate::adapters::interactive::null_user_info::NullUserInfo;
use crate::adapters::known_hosts::null_provider::NullKnownHostProvider;
use crate::adapters::known_hosts::single_provider::SingleKnownHostProvider;
use crate::adapters::known_hosts::stream_provider::StreamKnownHostsProvider;
use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::{HostkeepError, Result};
use crate::core::models::audit_entry::AuditAction;
use crate::core::models::host_key_checking::HostKeyChecking;
use crate::core::services::host_key_service::{HostKeyService, HostKeyStatus};
use crate::core::traits::interactive::InteractiveUserInfo;
use crate::core::traits::known_hosts_provider::KnownHostsProvider;

/// Options for `hostkeep verify`.
pub struct VerifyArgs<'a> {
    pub host: &'a str,
    pub key_type: &'a str,
    pub key: &'a str,
    pub checking: Option<HostKeyChecking>,
    pub pin: Option<&'a str>,
    pub batch: bool,
    pub dry_run: bool,
}

/// Execute the `hostkeep verify` command.
pub fn execute(ctx: &Context, args: &VerifyArgs<'_>) -> Result<()> {
    let checking = args
        .checking
        .unwrap_or(ctx.config.known_hosts.host_key_checking);

    if let Some(pin) = args.pin {
        // Pinned key only: known hosts is neither consulted nor written.
        let provider = SingleKnownHostProvider::new(args.host, args.key_type, pin);
        let (status, _) = run(provider, args)?;
        report(args, &status, true);
        return Ok(());
    }

    if args.dry_run {
        // Read the file but keep any additions in memory.
        let status = match File::open(&ctx.known_hosts_path) {
            Ok(file) => {
                let mut provider = StreamKnownHostsProvider::from_reader(file)?;
                provider.set_host_key_checking(checking);
                run(provider, args)?.0
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let mut provider = NullKnownHostProvider::default();
                provider.set_host_key_checking(checking);
                run(provider, args)?.0
            }
            Err(e) => return Err(HostkeepError::file_access(&ctx.known_hosts_path, e)),
        };
        report(args, &status, true);
        return Ok(());
    }

    let mut provider = ctx.open_provider()?;
    provider.set_host_key_checking(checking);
    let (status, contents) = run(provider, args)?;
    report(args, &status, false);

    if status == HostKeyStatus::Added {
        super::audit_helpers::log_audit(
            ctx,
            AuditAction::Verify,
            Some(format!("accepted new host {} {}", args.host, args.key_type)),
            &contents,
        );
    }

    Ok(())
}

/// Verify and hand back the provider's content afterwards.
fn run<P: KnownHostsProvider>(
    provider: P,
    args: &VerifyArgs<'_>,
) -> Result<(HostKeyStatus, String)> {
    if args.batch {
        verify_with(provider, NullUserInfo, args)
    } else {
        verify_with(provider, ConsoleUserInfo::stdio(), args)
    }
}

fn verify_with<P: KnownHostsProvider, U: InteractiveUserInfo>(
    provider: P,
    user_info: U,
    args: &VerifyArgs<'_>,
) -> Result<(HostKeyStatus, String)> {
    let mut service = HostKeyService {
        provider,
        user_info,
    };
    let status = service.verify(args.host, args.key_type, args.key)?;
    Ok((status, service.provider.contents().to_string()))
}

fn report(args: &VerifyArgs<'_>, status: &HostKeyStatus, dry_run: bool) {
    match status {
        HostKeyStatus::Trusted => {
            output::success(&format!("{} ({}) matches known hosts", args.host, args.key_type));
        }
        HostKeyStatus::Added if dry_run => {
            output::info(&format!(
                "{} ({}) would be added to known hosts (not recorded)",
                args.host, args.key_type
            ));
        }
        HostKeyStatus::Added => {
            output::success(&format!("{} ({}) added to known hosts", args.host, args.key_type));
        }
    }
}
