//! Add command implementation

use colored::Colorize;

use mcpx_meta::{McpServer, Transport, validate_server_name};

use super::sync::sync_config;
use crate::cli::AddArgs;
use crate::context::Context;
use crate::error::{CliError, Result};

/// Run the add command
///
/// Refuses a name that is already configured; `mcpx remove` it first.
pub fn run_add(ctx: &Context, args: AddArgs) -> Result<()> {
    validate_server_name(&args.name)?;

    let store = ctx.store();
    let config = ctx.load_config()?;
    if config.servers.contains_key(&args.name) {
        return Err(CliError::user(format!(
            "Server '{}' already exists. Remove it first with `mcpx remove {}`.",
            args.name, args.name
        )));
    }

    let name = args.name.clone();
    let server = build_server(args)?;
    let kind = server.kind();
    let config = store.add_server(&name, server)?;

    println!(
        "{} Added server {} ({})",
        "OK".green().bold(),
        name.cyan(),
        kind
    );
    sync_config(ctx, &config, true)
}

fn build_server(args: AddArgs) -> Result<McpServer> {
    let transport = match (args.command, args.url) {
        (Some(command), None) if !command.trim().is_empty() => Transport::Stdio {
            command,
            args: args.args,
            env: args.env.into_iter().collect(),
            cwd: args.cwd,
        },
        (None, Some(url)) if !url.trim().is_empty() => Transport::Http {
            url,
            headers: args.headers.into_iter().collect(),
        },
        _ => return Err(CliError::user("Pass a non-empty --command or --url")),
    };

    let mut server = McpServer::new(transport);
    if let Some(description) = args.description {
        server = server.with_description(description);
    }
    if args.disabled {
        server = server.with_enabled(false);
    }
    Ok(server)
}
