//! Utilities for spawning external commands.

use std::process::{Command, Stdio};

use tracing::instrument;

use crate::{Result, TatamiError};

/// Spawns an external program as a detached child process.
///
/// The child's stdio is discarded; tatami never blocks on it.
#[instrument(level = "trace", skip_all)]
pub fn run_external(cmd: &str, args: &[&str]) -> Result<()> {
    let _child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| TatamiError::SpawnProc(format!("{}: {}", cmd, e)))?;

    Ok(())
}

/// Splits a command line on whitespace and spawns it.
///
/// Used for the autostart table, where commands are written as single
/// strings.
pub fn run_command_line(line: &str) -> Result<()> {
    let mut tokens = line.split_whitespace();
    let Some(cmd) = tokens.next() else {
        return Err(TatamiError::SpawnProc("empty command line".into()));
    };
    run_external(cmd, &tokens.collect::<Vec<_>>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_command_line_is_an_error() {
        assert!(run_command_line("   ").is_err());
    }

    #[test]
    fn missing_program_is_an_error() {
        assert!(run_external("no-such-program-tatami", &[]).is_err());
    }
}
