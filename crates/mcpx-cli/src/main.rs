//! mcpx CLI
//!
//! Keeps the MCP server configuration of several AI coding tools in sync
//! with one `.mcpx.json` per project.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;
mod logging;
mod shell;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use context::Context;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let Some(cmd) = cli.command else {
        println!("{} - MCP server config sync", "mcpx".green().bold());
        println!();
        println!("Run {} for available commands.", "mcpx --help".cyan());
        return Ok(());
    };

    // Completions need neither a project nor a home directory
    if let Commands::Completions { shell } = cmd {
        commands::run_completions(shell);
        return Ok(());
    }

    let ctx = Context::resolve(cli.dir)?;
    tracing::debug!(root = %ctx.root, home = %ctx.home, "resolved context");
    execute_command(&ctx, cmd)
}

fn execute_command(ctx: &Context, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Init {
            providers,
            import,
            force,
        } => commands::run_init(ctx, providers, import, force),
        Commands::Add(args) => commands::run_add(ctx, args),
        Commands::Remove { name, yes } => commands::run_remove(ctx, &name, yes),
        Commands::List => commands::run_list(ctx),
        Commands::Sync { no_shell_alias } => commands::run_sync(ctx, no_shell_alias),
        Commands::Import {
            provider,
            servers,
            sync,
        } => commands::run_import(ctx, provider, servers, sync),
        Commands::Status => commands::run_status(ctx),
        Commands::Providers { ids } => commands::run_providers(ctx, ids),
        Commands::Completions { shell } => {
            commands::run_completions(shell);
            Ok(())
        }
    }
}
