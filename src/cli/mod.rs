pub mod commands;
pub mod context;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::models::host_key_checking::HostKeyChecking;

/// Keep your SSH known_hosts tidy. Write only when something changed.
#[derive(Parser, Debug)]
#[command(name = "hostkeep", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Known hosts file to manage (default: config, then ~/.ssh/known_hosts)
    #[arg(long, global = true, env = "HOSTKEEP_KNOWN_HOSTS")]
    pub known_hosts: Option<PathBuf>,

    /// Path to alternative config file
    #[arg(long, global = true, env = "HOSTKEEP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Password for the configured user
    #[arg(long, global = true, env = "HOSTKEEP_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Passphrase for the configured private key
    #[arg(long, global = true, env = "HOSTKEEP_PASSPHRASE", hide_env_values = true)]
    pub passphrase: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List known hosts with their fingerprints
    List,

    /// Replace the known hosts content, writing only if entries changed
    Store {
        /// File with the new content, or '-' for stdin
        source: String,
    },

    /// Record a host key
    Add {
        host: String,
        key_type: String,
        key: String,
    },

    /// Remove every key recorded for a host
    Remove { host: String },

    /// Check a presented host key against known hosts
    Verify {
        host: String,
        key_type: String,
        key: String,
        /// Policy for unknown hosts (default: from config)
        #[arg(long)]
        checking: Option<HostKeyChecking>,
        /// Trust only this key for the host, ignoring known hosts
        #[arg(long, conflicts_with = "dry_run")]
        pin: Option<String>,
        /// Never prompt; unknown hosts are declined under 'ask'
        #[arg(long)]
        batch: bool,
        /// Check only; never record a new host
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the fingerprints recorded for a host
    Fingerprint { host: String },

    /// Show which file, policy and credentials are in use
    Status {
        /// Ask for a missing password or key passphrase first
        #[arg(long)]
        prompt: bool,
    },

    /// Show the history of changes
    Log {
        /// Filter entries since this date (ISO 8601)
        #[arg(long)]
        since: Option<String>,
        /// Show last N entries
        #[arg(long)]
        last: Option<usize>,
    },
}
