//! `tmux` implementation of [`Multiplexer`].

use async_trait::async_trait;

use crate::error::MuxError;

use super::process::{ensure_success, run_process};
use super::{Multiplexer, PaneId, PaneInfo};

/// `list-panes` format: id, active flag, last-active flag, tab separated.
pub const PANE_LIST_FORMAT: &str = "#{pane_id}\t#{pane_active}\t#{pane_last}";

/// Environment variable tmux sets to the pane a process was started in.
const TMUX_PANE_ENV: &str = "TMUX_PANE";

/// Drives the `tmux` client binary.
#[derive(Debug, Clone)]
pub struct Tmux {
    program: String,
    current: Option<PaneId>,
}

impl Default for Tmux {
    fn default() -> Self {
        Self::new()
    }
}

impl Tmux {
    /// Use `tmux` from `PATH`, taking the current pane from `$TMUX_PANE`.
    pub fn new() -> Self {
        let current = std::env::var(TMUX_PANE_ENV)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PaneId::new);
        Self {
            program: "tmux".into(),
            current,
        }
    }

    /// Pin the editor's pane instead of asking tmux.
    pub fn with_current_pane(mut self, pane: Option<String>) -> Self {
        if let Some(pane) = pane.filter(|value| !value.trim().is_empty()) {
            self.current = Some(PaneId::new(pane.trim()));
        }
        self
    }

    /// Use a different tmux client binary.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    async fn tmux(&self, args: &[&str], context: &str) -> Result<String, MuxError> {
        let output = run_process(&self.program, args).await?;
        Ok(ensure_success(output, context)?.stdout)
    }
}

#[async_trait]
impl Multiplexer for Tmux {
    async fn current_pane(&self) -> Result<PaneId, MuxError> {
        if let Some(pane) = &self.current {
            return Ok(pane.clone());
        }
        // Outside a tmux-spawned process, fall back to the client's active pane.
        let stdout = self
            .tmux(
                &["display-message", "-p", "#{pane_id}"],
                "failed to identify current tmux pane",
            )
            .await?;
        let id = stdout.trim();
        if id.is_empty() {
            return Err(MuxError("tmux reported no current pane".into()));
        }
        Ok(PaneId::new(id))
    }

    async fn list_panes(&self, current: &PaneId) -> Result<Vec<PaneInfo>, MuxError> {
        let stdout = self
            .tmux(
                &["list-panes", "-t", current.as_str(), "-F", PANE_LIST_FORMAT],
                "failed to list tmux panes",
            )
            .await?;
        Ok(parse_pane_listing(&stdout))
    }

    async fn send_literal(&self, pane: &PaneId, text: &str) -> Result<(), MuxError> {
        self.tmux(
            &["send-keys", "-l", "-t", pane.as_str(), text],
            "failed to send keys to tmux pane",
        )
        .await?;
        Ok(())
    }

    async fn send_enter(&self, pane: &PaneId) -> Result<(), MuxError> {
        self.tmux(
            &["send-keys", "-t", pane.as_str(), "Enter"],
            "failed to send Enter to tmux pane",
        )
        .await?;
        Ok(())
    }
}

/// Parse `list-panes -F` output in [`PANE_LIST_FORMAT`].
///
/// Lines that don't carry a pane id are skipped.
pub fn parse_pane_listing(output: &str) -> Vec<PaneInfo> {
    output
        .lines()
        .filter_map(|line| {
            let mut parts = line.split('\t');
            let id = parts.next()?.trim();
            if id.is_empty() {
                return None;
            }
            let active = parts.next().map(str::trim) == Some("1");
            let last = parts.next().map(str::trim) == Some("1");
            Some(PaneInfo {
                id: PaneId::new(id),
                active,
                last,
            })
        })
        .collect()
}
