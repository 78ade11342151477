//! Terminal multiplexer seam.
//!
//! The pipeline only needs four things from the multiplexer: who am I, which
//! panes share my window, type this text, press Enter. [`Tmux`] provides
//! them by shelling out to the `tmux` binary; tests substitute fakes.

pub(crate) mod process;
mod tmux;

use crate::error::MuxError;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

pub use tmux::{parse_pane_listing, Tmux, PANE_LIST_FORMAT};

/// Multiplexer-owned pane identifier (tmux `%N`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PaneId(String);

impl PaneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One pane of the current window, with the recency flags tmux tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneInfo {
    pub id: PaneId,
    /// The window's currently selected pane.
    pub active: bool,
    /// The pane that was selected before the active one.
    pub last: bool,
}

/// The multiplexer operations the pipeline consumes.
#[async_trait]
pub trait Multiplexer: Send + Sync {
    /// Pane the editor runs in.
    async fn current_pane(&self) -> Result<PaneId, MuxError>;

    /// All panes in the window containing `current`, in multiplexer order.
    async fn list_panes(&self, current: &PaneId) -> Result<Vec<PaneInfo>, MuxError>;

    /// Type `text` into `pane` without interpreting key names.
    async fn send_literal(&self, pane: &PaneId, text: &str) -> Result<(), MuxError>;

    /// Press Enter in `pane`.
    async fn send_enter(&self, pane: &PaneId) -> Result<(), MuxError>;
}
