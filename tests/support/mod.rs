//! Scripted multiplexer shared by the pipeline integration tests.

use async_trait::async_trait;
use std::sync::Mutex;
use vimdemux::error::MuxError;
use vimdemux::mux::{parse_pane_listing, Multiplexer, PaneId, PaneInfo};

/// One observed multiplexer call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CurrentPane,
    ListPanes(String),
    SendLiteral(String, String),
    SendEnter(String),
}

/// Serves a canned `list-panes` listing and records sends.
#[derive(Debug)]
pub struct ScriptedMux {
    current: String,
    listing: String,
    calls: Mutex<Vec<Call>>,
    reject_sends: bool,
}

impl ScriptedMux {
    /// `listing` uses tmux's `list-panes -F` output format.
    pub fn new(current: &str, listing: &str) -> Self {
        Self {
            current: current.to_string(),
            listing: listing.to_string(),
            calls: Mutex::new(Vec::new()),
            reject_sends: false,
        }
    }

    /// Make every send fail the way tmux does for a vanished pane.
    pub fn rejecting_sends(mut self) -> Self {
        self.reject_sends = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }

    /// Text typed into panes, in order.
    pub fn sent_text(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::SendLiteral(_, text) => Some(text),
                _ => None,
            })
            .collect()
    }

    fn push(&self, call: Call) {
        self.calls.lock().expect("calls lock").push(call);
    }

    fn send_result(&self, pane: &PaneId) -> Result<(), MuxError> {
        if self.reject_sends {
            Err(MuxError(format!("can't find pane: {pane}")))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Multiplexer for ScriptedMux {
    async fn current_pane(&self) -> Result<PaneId, MuxError> {
        self.push(Call::CurrentPane);
        Ok(PaneId::new(self.current.clone()))
    }

    async fn list_panes(&self, current: &PaneId) -> Result<Vec<PaneInfo>, MuxError> {
        self.push(Call::ListPanes(current.to_string()));
        Ok(parse_pane_listing(&self.listing))
    }

    async fn send_literal(&self, pane: &PaneId, text: &str) -> Result<(), MuxError> {
        self.push(Call::SendLiteral(pane.to_string(), text.to_string()));
        self.send_result(pane)
    }

    async fn send_enter(&self, pane: &PaneId) -> Result<(), MuxError> {
        self.push(Call::SendEnter(pane.to_string()));
        self.send_result(pane)
    }
}
