//! Process execution seam.
//!
//! All external tool invocations go through [`CommandRunner`], so callers can
//! be exercised in tests against canned output without spawning anything.

use std::process::Command;
use tracing::debug;

use crate::error::{AuditError, Result};

/// Runs an external command and returns its standard output as text.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String>;
}

/// Blocking runner backed by `std::process::Command`.
///
/// Waits for the command to complete and consumes its full output; a nonzero
/// exit status surfaces as [`AuditError::CommandFailed`] with the captured
/// stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let rendered = render_command(program, args);
        debug!("Running command: $ {}", rendered);

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| AuditError::Spawn {
                command: rendered.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AuditError::CommandFailed {
                command: rendered,
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

fn render_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
