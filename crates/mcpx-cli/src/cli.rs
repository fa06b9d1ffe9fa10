//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use mcpx_meta::ProviderId;

/// mcpx - One MCP server list, synced to every AI coding tool
#[derive(Parser, Debug)]
#[command(name = "mcpx")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project directory (defaults to the current directory)
    #[arg(long, global = true, env = "MCPX_DIR", value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create .mcpx.json in the project
    ///
    /// Examples:
    ///   mcpx init -p claude-code -p vscode
    ///   mcpx init -p openai-codex --import vscode
    Init {
        /// Providers to keep in sync (prompted when omitted)
        #[arg(short, long = "provider", value_name = "ID")]
        providers: Vec<ProviderId>,

        /// Import every server from this provider's existing file
        #[arg(long, value_name = "ID")]
        import: Option<ProviderId>,

        /// Overwrite an existing .mcpx.json
        #[arg(long)]
        force: bool,
    },

    /// Add a server and sync
    ///
    /// Examples:
    ///   mcpx add jira --command uvx --arg mcp-atlassian --env JIRA_URL=https://jira.example.com
    ///   mcpx add docs --url https://docs.example.com/mcp --header "Authorization=Bearer x"
    Add(AddArgs),

    /// Remove a server and sync
    Remove {
        /// Server name
        name: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List configured servers and providers
    List,

    /// Write every selected provider's config file
    Sync {
        /// Do not touch the shell rc file when copilot-cli is selected
        #[arg(long)]
        no_shell_alias: bool,
    },

    /// Import servers from an existing provider file
    Import {
        /// Provider to import from (detected when omitted)
        #[arg(value_name = "ID")]
        provider: Option<ProviderId>,

        /// Import only these servers
        #[arg(long = "server", value_name = "NAME")]
        servers: Vec<String>,

        /// Sync the selected providers afterwards
        #[arg(long)]
        sync: bool,
    },

    /// Show whether each provider file is in sync
    Status,

    /// List providers, or replace the selection
    ///
    /// Examples:
    ///   mcpx providers
    ///   mcpx providers claude-code openai-codex
    Providers {
        /// New selection; deselected providers lose their file
        #[arg(value_name = "ID")]
        ids: Vec<ProviderId>,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   mcpx completions bash > ~/.local/share/bash-completion/completions/mcpx
    ///   mcpx completions zsh > ~/.zfunc/_mcpx
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments of `mcpx add`.
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct AddArgs {
    /// Server name (letters, digits, '.', '_' and '-')
    pub name: String,

    /// Program to launch (stdio transport)
    #[arg(long, required_unless_present = "url", conflicts_with = "url")]
    pub command: Option<String>,

    /// Program argument, repeatable
    #[arg(long = "arg", value_name = "ARG", allow_hyphen_values = true, requires = "command")]
    pub args: Vec<String>,

    /// Environment variable, repeatable
    #[arg(long = "env", value_name = "KEY=VALUE", value_parser = parse_key_value, requires = "command")]
    pub env: Vec<(String, String)>,

    /// Working directory of the process
    #[arg(long, requires = "command")]
    pub cwd: Option<String>,

    /// Endpoint URL (http transport)
    #[arg(long)]
    pub url: Option<String>,

    /// HTTP header, repeatable
    #[arg(long = "header", value_name = "KEY=VALUE", value_parser = parse_key_value, requires = "url")]
    pub headers: Vec<(String, String)>,

    /// Free-text description shown by `mcpx list`
    #[arg(long)]
    pub description: Option<String>,

    /// Keep the entry but leave it out of provider files
    #[arg(long)]
    pub disabled: bool,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_init_with_providers() {
        let cli = Cli::parse_from([
            "mcpx",
            "init",
            "-p",
            "claude-code",
            "--provider",
            "vscode",
            "--import",
            "intellij",
        ]);
        assert_eq!(
            cli.command,
            Some(Commands::Init {
                providers: vec![ProviderId::ClaudeCode, ProviderId::Vscode],
                import: Some(ProviderId::Intellij),
                force: false,
            })
        );
    }

    #[test]
    fn parse_rejects_unknown_provider() {
        assert!(Cli::try_parse_from(["mcpx", "providers", "cursor"]).is_err());
    }

    #[test]
    fn parse_add_stdio() {
        let cli = Cli::parse_from([
            "mcpx",
            "add",
            "fs",
            "--command",
            "npx",
            "--arg",
            "-y",
            "--arg",
            "@modelcontextprotocol/server-filesystem",
            "--env",
            "ROOT=/tmp=x",
        ]);
        let Some(Commands::Add(args)) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.command.as_deref(), Some("npx"));
        assert_eq!(args.args, vec!["-y", "@modelcontextprotocol/server-filesystem"]);
        assert_eq!(args.env, vec![("ROOT".to_string(), "/tmp=x".to_string())]);
        assert!(args.url.is_none());
    }

    #[test]
    fn parse_add_requires_exactly_one_endpoint() {
        assert!(Cli::try_parse_from(["mcpx", "add", "x"]).is_err());
        assert!(
            Cli::try_parse_from(["mcpx", "add", "x", "--command", "a", "--url", "http://b"])
                .is_err()
        );
        assert!(
            Cli::try_parse_from(["mcpx", "add", "x", "--url", "http://b", "--arg", "c"]).is_err()
        );
    }

    #[test]
    fn parse_key_value_needs_equals() {
        assert!(parse_key_value("KEY").is_err());
        assert!(parse_key_value("=value").is_err());
        assert_eq!(
            parse_key_value("KEY=").unwrap(),
            ("KEY".to_string(), String::new())
        );
    }

    #[test]
    fn parse_global_dir_after_subcommand() {
        let cli = Cli::parse_from(["mcpx", "status", "--dir", "/tmp/project", "-v"]);
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/project")));
        assert!(cli.verbose);
        assert_eq!(cli.command, Some(Commands::Status));
    }

    #[test]
    fn parse_completions_command() {
        let cli = Cli::parse_from(["mcpx", "completions", "bash"]);
        assert!(matches!(cli.command, Some(Commands::Completions { .. })));
    }
}
