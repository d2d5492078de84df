//! Shared test doubles for integration tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use ipa_cert_health::{AuditError, CommandRunner, Result};

/// Command runner that replays canned output and records every invocation.
///
/// Commands are keyed by their rendered form, e.g.
/// `certutil -d /etc/pki/nssdb -L`. Running an unscripted command fails the
/// way a broken external tool would.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRunner {
    outputs: HashMap<String, String>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, command: &str, output: &str) -> Self {
        self.outputs.insert(command.to_string(), output.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, command: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.as_str() == command)
            .count()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let rendered = if args.is_empty() {
            program.to_string()
        } else {
            format!("{} {}", program, args.join(" "))
        };
        self.calls.borrow_mut().push(rendered.clone());

        self.outputs
            .get(&rendered)
            .cloned()
            .ok_or(AuditError::CommandFailed {
                command: rendered,
                stderr: "command not scripted".to_string(),
            })
    }
}
