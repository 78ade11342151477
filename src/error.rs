//! Error taxonomy for the run/debug pipeline.
//!
//! Every stage has its own error type; `DemuxError` wraps them so the
//! orchestrator can surface whichever stage failed without losing detail.

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// CommandError
// ---------------------------------------------------------------------------

/// Bad cursor context handed over by the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The file path was empty.
    InvalidPath,
    /// Line numbers are 1-based; zero and negatives are rejected.
    InvalidLine(i64),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPath => write!(f, "invalid path: file path is empty"),
            Self::InvalidLine(line) => {
                write!(f, "invalid line {line}: line numbers start at 1")
            }
        }
    }
}

impl std::error::Error for CommandError {}

// ---------------------------------------------------------------------------
// MuxError
// ---------------------------------------------------------------------------

/// The multiplexer process could not be run or reported failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuxError(pub String);

impl fmt::Display for MuxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "multiplexer: {}", self.0)
    }
}

impl std::error::Error for MuxError {}

// ---------------------------------------------------------------------------
// PaneError
// ---------------------------------------------------------------------------

/// The current window doesn't satisfy the two-pane assumption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneError {
    /// Fewer than two panes; there is nowhere to send the command.
    NoPane { count: usize },
    /// More than two panes and the selection policy couldn't pick one.
    AmbiguousPane { count: usize },
    /// Listing or identifying panes failed.
    Query(MuxError),
}

impl fmt::Display for PaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPane { count } => write!(
                f,
                "no adjacent pane: window has {count} pane(s), split it to get a target"
            ),
            Self::AmbiguousPane { count } => write!(
                f,
                "ambiguous target: window has {count} panes and no single adjacent pane"
            ),
            Self::Query(e) => write!(f, "pane lookup failed: {e}"),
        }
    }
}

impl std::error::Error for PaneError {}

impl From<MuxError> for PaneError {
    fn from(e: MuxError) -> Self {
        Self::Query(e)
    }
}

// ---------------------------------------------------------------------------
// DispatchError
// ---------------------------------------------------------------------------

/// Which half of the two-step send failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchStep {
    Text,
    Enter,
}

/// The multiplexer rejected a send-keys call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchError {
    pub pane: String,
    pub step: DispatchStep,
    pub source: MuxError,
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.step {
            DispatchStep::Text => "command text",
            DispatchStep::Enter => "Enter",
        };
        write!(
            f,
            "failed to send {what} to pane {}: {}",
            self.pane, self.source
        )
    }
}

impl std::error::Error for DispatchError {}

// ---------------------------------------------------------------------------
// DemuxError — top-level
// ---------------------------------------------------------------------------

/// Top-level error for one run/debug invocation.
#[derive(Debug)]
pub enum DemuxError {
    Config(ConfigError),
    Command(CommandError),
    Pane(PaneError),
    Dispatch(DispatchError),
}

impl fmt::Display for DemuxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Command(e) => write!(f, "{e}"),
            Self::Pane(e) => write!(f, "{e}"),
            Self::Dispatch(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DemuxError {}

impl From<ConfigError> for DemuxError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<CommandError> for DemuxError {
    fn from(e: CommandError) -> Self {
        Self::Command(e)
    }
}

impl From<PaneError> for DemuxError {
    fn from(e: PaneError) -> Self {
        Self::Pane(e)
    }
}

impl From<DispatchError> for DemuxError {
    fn from(e: DispatchError) -> Self {
        Self::Dispatch(e)
    }
}
