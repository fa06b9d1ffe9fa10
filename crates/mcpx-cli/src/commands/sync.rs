//! Sync command and the sync step shared by the mutating commands.

use colored::Colorize;
use tracing::warn;

use mcpx_core::{SyncResult, SyncStatus, Synchronizer};
use mcpx_meta::{McpxConfig, ProviderId};

use crate::context::Context;
use crate::error::{CliError, Result};
use crate::shell;

/// Run the sync command
pub fn run_sync(ctx: &Context, no_shell_alias: bool) -> Result<()> {
    let config = ctx.load_config()?;
    sync_config(ctx, &config, !no_shell_alias)
}

/// Write the files of every selected provider and report the outcome.
///
/// Fails after printing when any provider could not be written.
pub fn sync_config(ctx: &Context, config: &McpxConfig, shell_alias: bool) -> Result<()> {
    let providers = ctx.registry.by_ids(&config.providers);
    if providers.is_empty() {
        println!(
            "{} No providers selected. Run {} to choose some.",
            "!".yellow().bold(),
            "mcpx providers <id>...".cyan()
        );
        return Ok(());
    }

    println!(
        "{} Syncing {} server(s) to {} provider(s)...",
        "=>".blue().bold(),
        config.servers.len(),
        providers.len()
    );
    let results = Synchronizer::new(&ctx.fs).sync_all(&providers, &ctx.root, &config.servers);
    print_results(ctx, &results);
    print_summary(&results);

    if shell_alias && config.providers.contains(&ProviderId::CopilotCli) {
        apply_copilot_alias(ctx);
    }

    let failed = results.iter().filter(|r| r.status.is_error()).count();
    if failed > 0 {
        return Err(CliError::user(format!(
            "{failed} provider file(s) could not be synced"
        )));
    }
    Ok(())
}

/// One line per file.
pub fn print_results(ctx: &Context, results: &[SyncResult]) {
    for result in results {
        let path = ctx.display_path(&result.path);
        match &result.status {
            SyncStatus::Created => println!("   {} {} (created)", "+".green(), path.cyan()),
            SyncStatus::Updated => println!("   {} {} (updated)", "~".green(), path.cyan()),
            SyncStatus::Unchanged => {
                println!("   {} {} (unchanged)", "=".dimmed(), path.dimmed())
            }
            SyncStatus::Deleted => println!("   {} {} (deleted)", "-".yellow(), path.cyan()),
            SyncStatus::Error(message) => {
                println!("   {} {}: {}", "!".red(), path.cyan(), message.red())
            }
        }
    }
}

/// Count of each outcome, in a fixed order, skipping zero counts.
pub fn summary_line(results: &[SyncResult]) -> String {
    let parts: Vec<String> = ["created", "updated", "deleted", "unchanged", "error"]
        .into_iter()
        .filter_map(|label| {
            let count = results.iter().filter(|r| r.status.label() == label).count();
            (count > 0).then(|| format!("{count} {label}"))
        })
        .collect();
    format!("{} file(s) processed ({})", results.len(), parts.join(", "))
}

fn print_summary(results: &[SyncResult]) {
    let line = summary_line(results);
    if results.iter().any(|r| r.status.is_error()) {
        println!("{} {}", "FAILED".red().bold(), line);
    } else {
        println!("{} {}", "OK".green().bold(), line);
    }
}

fn apply_copilot_alias(ctx: &Context) {
    let shell = std::env::var("SHELL").unwrap_or_default();
    match shell::ensure_copilot_alias(&ctx.home, &shell) {
        Ok(Some(rc)) => println!(
            "{} Added the {} alias to {} (open a new shell to use it)",
            "OK".green().bold(),
            shell::COPILOT_ALIAS.cyan(),
            rc
        ),
        Ok(None) => {}
        Err(e) => warn!(error = %e, "could not update shell alias"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcpx_fs::NormalizedPath;

    fn result(status: SyncStatus) -> SyncResult {
        SyncResult::new(ProviderId::Vscode, NormalizedPath::new("/p/.vscode/mcp.json"), status)
    }

    #[test]
    fn test_summary_line_skips_zero_counts() {
        let results = vec![
            result(SyncStatus::Created),
            result(SyncStatus::Unchanged),
            result(SyncStatus::Created),
            result(SyncStatus::Error("boom".into())),
        ];
        assert_eq!(
            summary_line(&results),
            "4 file(s) processed (2 created, 1 unchanged, 1 error)"
        );
    }
}
