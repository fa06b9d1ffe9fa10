//! Shell alias that points Copilot CLI at the project's MCP file.
//!
//! Copilot CLI only reads `.copilot/mcp-config.json` when it is passed on the
//! command line, so `mcpx sync` adds a `copilot` alias to the user's shell rc
//! file. Shells other than zsh, bash and fish are left alone, as are rc files
//! that do not exist yet.

use std::fs::OpenOptions;
use std::io::Write;

use tracing::debug;

use mcpx_fs::{Error, NormalizedPath, Result};

pub const COPILOT_ALIAS: &str = "copilot";
pub const COPILOT_COMMAND: &str = "copilot --additional-mcp-config @.copilot/mcp-config.json";
const LEGACY_COPILOT_COMMAND: &str = "copilot --config-dir ./.copilot";
const MARKER: &str = "# mcpx: copilot with project MCP config";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Syntax {
    Posix,
    Fish,
}

fn alias_line(syntax: Syntax, alias: &str, command: &str) -> String {
    match syntax {
        Syntax::Posix => format!("alias {alias}='{command}'"),
        Syntax::Fish => format!("alias {alias} '{command}'"),
    }
}

/// The rc file for `shell` (the value of `$SHELL`).
fn rc_file(home: &NormalizedPath, shell: &str) -> Option<(NormalizedPath, Syntax)> {
    if shell.contains("zsh") {
        Some((home.join(".zshrc"), Syntax::Posix))
    } else if shell.contains("bash") {
        let bashrc = home.join(".bashrc");
        let rc = if bashrc.is_file() {
            bashrc
        } else {
            home.join(".bash_profile")
        };
        Some((rc, Syntax::Posix))
    } else if shell.contains("fish") {
        Some((home.join(".config/fish/config.fish"), Syntax::Fish))
    } else {
        None
    }
}

/// Make sure the rc file defines the `copilot` alias.
///
/// Returns the rc file when it was changed: either the alias was appended
/// or the old `--config-dir` form was rewritten in place. An existing
/// `copilot` alias of any other form is kept.
pub fn ensure_copilot_alias(home: &NormalizedPath, shell: &str) -> Result<Option<NormalizedPath>> {
    let Some((rc, syntax)) = rc_file(home, shell) else {
        debug!(shell, "no rc file for shell");
        return Ok(None);
    };
    if !rc.is_file() {
        debug!(path = %rc, "rc file does not exist");
        return Ok(None);
    }

    let native = rc.to_native();
    let content = std::fs::read_to_string(&native).map_err(|e| Error::io(&native, e))?;
    let wanted = alias_line(syntax, COPILOT_ALIAS, COPILOT_COMMAND);

    let defined = content.contains(&format!("alias {COPILOT_ALIAS}="))
        || content.contains(&format!("alias {COPILOT_ALIAS} "));
    if defined {
        let legacy = alias_line(syntax, COPILOT_ALIAS, LEGACY_COPILOT_COMMAND);
        if content.contains(&legacy) && !content.contains("--additional-mcp-config") {
            // rc files are often symlinks into a dotfiles repo; write in place
            std::fs::write(&native, content.replace(&legacy, &wanted))
                .map_err(|e| Error::io(&native, e))?;
            return Ok(Some(rc));
        }
        return Ok(None);
    }

    let mut file = OpenOptions::new()
        .append(true)
        .open(&native)
        .map_err(|e| Error::io(&native, e))?;
    write!(file, "\n{MARKER}\n{wanted}\n").map_err(|e| Error::io(&native, e))?;
    Ok(Some(rc))
}
