mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::commands::verify::VerifyArgs;
use cli::context::Context;
use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();

    let default_level = match (args.verbose, args.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "warn",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
    cli::output::set_quiet(args.quiet);

    let result = Context::from_cli(&args).and_then(|ctx| match &args.command {
        Commands::List => cli::commands::list::execute(&ctx),
        Commands::Store { source } => cli::commands::store::execute(&ctx, source),
        Commands::Add {
            host,
            key_type,
            key,
        } => cli::commands::hosts::execute_add(&ctx, host, key_type, key),
        Commands::Remove { host } => cli::commands::hosts::execute_remove(&ctx, host),
        Commands::Verify {
            host,
            key_type,
            key,
            checking,
            pin,
            batch,
            dry_run,
        } => cli::commands::verify::execute(
            &ctx,
            &VerifyArgs {
                host,
                key_type,
                key,
                checking: *checking,
                pin: pin.as_deref(),
                batch: *batch,
                dry_run: *dry_run,
            },
        ),
        Commands::Fingerprint { host } => cli::commands::hosts::execute_fingerprint(&ctx, host),
        Commands::Status { prompt } => cli::commands::status::execute(&ctx, *prompt),
        Commands::Log { since, last } => {
            cli::commands::log::execute(&ctx, since.as_deref(), *last)
        }
    });

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
