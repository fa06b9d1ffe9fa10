//! List command implementation

use colored::Colorize;

use crate::context::Context;
use crate::error::Result;

/// Run the list command
pub fn run_list(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;

    if config.servers.is_empty() {
        println!(
            "No servers configured. Add one with {}.",
            "mcpx add <name> --command <cmd>".cyan()
        );
    } else {
        println!("{} MCP servers:", "=>".blue().bold());
        for (name, server) in &config.servers {
            let disabled = if server.is_enabled() {
                String::new()
            } else {
                format!(" {}", "[disabled]".dimmed())
            };
            println!(
                "   {} {}{}",
                name.bold(),
                format!("({})", server.kind()).dimmed(),
                disabled
            );
            println!("     {}", server.target().cyan());
            if let Some(description) = &server.description {
                println!("     {}", description.dimmed());
            }
        }
    }

    let providers: Vec<&str> = ctx
        .registry
        .by_ids(&config.providers)
        .into_iter()
        .map(|p| p.display_name())
        .collect();
    println!();
    if providers.is_empty() {
        println!("Providers: {}", "none".dimmed());
    } else {
        println!("Providers: {}", providers.join(", "));
    }
    Ok(())
}
