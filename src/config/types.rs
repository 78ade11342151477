//! Configuration data model.
//!
//! `FileConfig` mirrors the TOML schema; `Config` is the validated form the
//! rest of the crate consumes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use super::defaults::{
    DEFAULT_BREAKPOINT_FILE, DEFAULT_DEBUGGER_MODULE, DEFAULT_INTERPRETER, DEFAULT_TEST_MODULE,
};

/// One `[local_prefix, remote_prefix]` substitution rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootMapping {
    pub local_prefix: String,
    pub remote_prefix: String,
}

impl RootMapping {
    pub fn new(local_prefix: impl Into<String>, remote_prefix: impl Into<String>) -> Self {
        Self {
            local_prefix: local_prefix.into(),
            remote_prefix: remote_prefix.into(),
        }
    }
}

/// Rule for picking the target pane when the window has more than two panes.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PaneSelection {
    /// The most recently active pane other than the editor's own.
    #[default]
    MostRecent,
    /// Never guess: more than two panes is an error.
    Strict,
}

/// `[pane]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct PaneConfig {
    pub selection: PaneSelection,
}

/// `[commands]` section: the tools the built command lines invoke.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct CommandsConfig {
    /// Python executable on the execution host.
    pub interpreter: String,
    /// Module run with `-m` for test files.
    pub test_module: String,
    /// Module run with `-m` when debugging.
    pub debugger_module: String,
    /// Debugger rc file that receives persisted breakpoints.
    pub breakpoint_file: String,
    /// Prefix commands with `cd <dir of file>`.
    pub change_directory: bool,
    /// Prefix commands with `clear`.
    pub clear_screen: bool,
    /// Prefix runs with `unset PYTHONBREAKPOINT`, dropping a debugger hook
    /// the pane's shell may still export.
    pub reset_breakpoint_hook: bool,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            interpreter: DEFAULT_INTERPRETER.into(),
            test_module: DEFAULT_TEST_MODULE.into(),
            debugger_module: DEFAULT_DEBUGGER_MODULE.into(),
            breakpoint_file: DEFAULT_BREAKPOINT_FILE.into(),
            change_directory: true,
            clear_screen: true,
            reset_breakpoint_hook: false,
        }
    }
}

/// Validated runtime configuration.
///
/// Loaded once per process and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Tried in order; the first matching prefix wins.
    pub root_mappings: Vec<RootMapping>,
    pub pane: PaneConfig,
    pub commands: CommandsConfig,
}

/// Raw on-disk schema.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub(super) struct FileConfig {
    pub root_mappings: Vec<Vec<String>>,
    pub pane: PaneConfig,
    pub commands: CommandsConfig,
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` flag.
    Explicit(PathBuf),
    /// `$VIMDEMUX_CONFIG`.
    Env(PathBuf),
    /// Per-user file under the config root.
    Global(PathBuf),
    /// No file found; built-in defaults with no mappings.
    BuiltInDefaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(path) | Self::Env(path) | Self::Global(path) => {
                write!(f, "{}", path.display())
            }
            Self::BuiltInDefaults => write!(f, "built-in defaults"),
        }
    }
}

/// Loaded config plus its provenance, for logging.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

/// Result of `vimdemux init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigInitResult {
    Created { path: PathBuf },
    AlreadyInitialized { path: PathBuf },
}
