//! Run/debug command-line construction.
//!
//! A built command is a single shell line of `&&`-joined steps:
//!
//! ```text
//! run:   cd <dir> && clear && python3 -m pytest <target>
//! debug: cd <dir> && clear && { grep -qxF 'break <path>:<line>' .pdbrc 2>/dev/null
//!            || printf '%s\n' 'break <path>:<line>' >> .pdbrc; } && python3 -m pdb <path>
//! ```
//!
//! The breakpoint lands in the debugger's rc file so it is still set after
//! the debugger restarts; the grep guard keeps repeated debug runs from
//! piling up duplicate entries. Runs can optionally start with
//! `unset PYTHONBREAKPOINT`. Paths and breakpoint entries are
//! shell-quoted, tool names from the config are emitted as written.

use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::config::CommandsConfig;
use crate::error::CommandError;
use crate::scope::TestScope;
use crate::shell::shell_quote;

/// Python's `breakpoint()` hook variable.
const BREAKPOINT_HOOK_ENV: &str = "PYTHONBREAKPOINT";

/// What the user asked the adjacent pane to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Run,
    Debug,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Run => f.write_str("run"),
            Self::Debug => f.write_str("debug"),
        }
    }
}

/// How a file is executed, judged from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// `*.py` whose stem starts or ends with `test`.
    Test,
    /// Any other `*.py`.
    Script,
    /// Not a Python file; handed to the test runner as-is.
    Other,
}

impl FileKind {
    pub fn detect(path: &str) -> Self {
        let name = Path::new(path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        match name.strip_suffix(".py") {
            Some(stem) if stem.starts_with("test") || stem.ends_with("test") => Self::Test,
            Some(_) => Self::Script,
            None => Self::Other,
        }
    }
}

/// A complete shell line, ready to be typed into a pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Command(String);

impl Command {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds run/debug command lines from the `[commands]` config.
#[derive(Debug, Clone, Default)]
pub struct CommandBuilder {
    commands: CommandsConfig,
}

impl CommandBuilder {
    pub fn new(commands: CommandsConfig) -> Self {
        Self { commands }
    }

    /// Build the command for `path` at `line`, covering the whole file.
    pub fn build(&self, mode: Mode, path: &str, line: i64) -> Result<Command, CommandError> {
        self.build_scoped(mode, path, line, None)
    }

    /// Build the command, narrowing test runs to `scope` when given.
    ///
    /// The output depends only on the arguments and the config.
    pub fn build_scoped(
        &self,
        mode: Mode,
        path: &str,
        line: i64,
        scope: Option<&TestScope>,
    ) -> Result<Command, CommandError> {
        if path.is_empty() {
            return Err(CommandError::InvalidPath);
        }
        if line <= 0 {
            return Err(CommandError::InvalidLine(line));
        }

        let kind = FileKind::detect(path);
        let target = match (kind, scope) {
            (FileKind::Test, Some(scope)) => scope.node_id(path),
            _ => path.to_string(),
        };

        let mut steps = self.preamble(mode, path);
        match mode {
            Mode::Run => steps.push(self.run_invocation(kind, &target)),
            Mode::Debug => {
                steps.push(self.persist_breakpoint(path, line));
                steps.push(self.debug_invocation(kind, path, &target));
            }
        }
        Ok(Command(steps.join(" && ")))
    }

    fn preamble(&self, mode: Mode, path: &str) -> Vec<String> {
        let mut steps = Vec::new();
        if self.commands.change_directory {
            let dir = Path::new(path)
                .parent()
                .and_then(|dir| dir.to_str())
                .filter(|dir| !dir.is_empty());
            if let Some(dir) = dir {
                steps.push(format!("cd {}", shell_quote(dir)));
            }
        }
        if mode == Mode::Run && self.commands.reset_breakpoint_hook {
            steps.push(format!("unset {BREAKPOINT_HOOK_ENV}"));
        }
        if self.commands.clear_screen {
            steps.push("clear".to_string());
        }
        steps
    }

    fn run_invocation(&self, kind: FileKind, target: &str) -> String {
        let interpreter = &self.commands.interpreter;
        match kind {
            FileKind::Script => format!("{interpreter} {}", shell_quote(target)),
            FileKind::Test | FileKind::Other => format!(
                "{interpreter} -m {} {}",
                self.commands.test_module,
                shell_quote(target)
            ),
        }
    }

    fn debug_invocation(&self, kind: FileKind, path: &str, target: &str) -> String {
        let interpreter = &self.commands.interpreter;
        let debugger = &self.commands.debugger_module;
        match kind {
            // `-s` keeps the test runner from capturing the debugger's stdin.
            FileKind::Test => format!(
                "{interpreter} -m {debugger} -m {} -s {}",
                self.commands.test_module,
                shell_quote(target)
            ),
            FileKind::Script | FileKind::Other => {
                format!("{interpreter} -m {debugger} {}", shell_quote(path))
            }
        }
    }

    fn persist_breakpoint(&self, path: &str, line: i64) -> String {
        let entry = shell_quote(&breakpoint_entry(path, line));
        let rc = shell_quote(&self.commands.breakpoint_file);
        format!("{{ grep -qxF {entry} {rc} 2>/dev/null || printf '%s\\n' {entry} >> {rc}; }}")
    }
}

/// Debugger directive setting a breakpoint at `path:line`.
pub fn breakpoint_entry(path: &str, line: i64) -> String {
    format!("break {path}:{line}")
}
