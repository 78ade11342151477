//! Typing a built command into a pane.
//!
//! The text goes in as literal keystrokes and Enter follows as a separate
//! send; tmux only executes on a distinct Enter key, not on an embedded
//! newline.

use crate::command::Command;
use crate::error::{DispatchError, DispatchStep};
use crate::mux::{Multiplexer, PaneId};

/// Sends commands to panes through a [`Multiplexer`].
pub struct PaneDispatcher<'a, M: ?Sized> {
    mux: &'a M,
}

impl<'a, M: Multiplexer + ?Sized> PaneDispatcher<'a, M> {
    pub fn new(mux: &'a M) -> Self {
        Self { mux }
    }

    /// Type `command` into `pane`, then press Enter.
    ///
    /// Enter is not sent when the text could not be delivered.
    pub async fn send(&self, pane: &PaneId, command: &Command) -> Result<(), DispatchError> {
        self.mux
            .send_literal(pane, command.as_str())
            .await
            .map_err(|source| DispatchError {
                pane: pane.to_string(),
                step: DispatchStep::Text,
                source,
            })?;
        self.mux
            .send_enter(pane)
            .await
            .map_err(|source| DispatchError {
                pane: pane.to_string(),
                step: DispatchStep::Enter,
                source,
            })?;
        tracing::info!(pane = %pane, command = %command, "command dispatched");
        Ok(())
    }
}
