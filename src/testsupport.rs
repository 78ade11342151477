//! Shared test fixtures: a scripted multiplexer and a temp directory.

use async_trait::async_trait;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::MuxError;
use crate::mux::{Multiplexer, PaneId, PaneInfo};

/// In-memory multiplexer that records every call as a short string.
///
/// Calls are logged as `current-pane`, `list-panes <pane>`,
/// `send-literal <pane> <text>` and `send-enter <pane>`.
#[derive(Debug)]
pub struct FakeMux {
    current: PaneId,
    panes: Vec<PaneInfo>,
    calls: Mutex<Vec<String>>,
    current_error: Option<String>,
    list_error: Option<String>,
    literal_error: Option<String>,
    enter_error: Option<String>,
}

impl FakeMux {
    /// Window of `ids`; `current` is the active pane, nothing is flagged last.
    pub fn with_panes(current: &str, ids: &[&str]) -> Self {
        let panes = ids
            .iter()
            .map(|id| PaneInfo {
                id: PaneId::new(*id),
                active: *id == current,
                last: false,
            })
            .collect();
        Self::with_listing(current, panes)
    }

    pub fn with_listing(current: &str, panes: Vec<PaneInfo>) -> Self {
        Self {
            current: PaneId::new(current),
            panes,
            calls: Mutex::new(Vec::new()),
            current_error: None,
            list_error: None,
            literal_error: None,
            enter_error: None,
        }
    }

    pub fn failing_current(mut self, message: &str) -> Self {
        self.current_error = Some(message.to_string());
        self
    }

    pub fn failing_list(mut self, message: &str) -> Self {
        self.list_error = Some(message.to_string());
        self
    }

    pub fn failing_literal(mut self, message: &str) -> Self {
        self.literal_error = Some(message.to_string());
        self
    }

    pub fn failing_enter(mut self, message: &str) -> Self {
        self.enter_error = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("fake mux lock").clone()
    }

    fn record(&self, call: String, error: &Option<String>) -> Result<(), MuxError> {
        self.calls.lock().expect("fake mux lock").push(call);
        match error {
            Some(message) => Err(MuxError(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Multiplexer for FakeMux {
    async fn current_pane(&self) -> Result<PaneId, MuxError> {
        self.record("current-pane".into(), &self.current_error)?;
        Ok(self.current.clone())
    }

    async fn list_panes(&self, current: &PaneId) -> Result<Vec<PaneInfo>, MuxError> {
        self.record(format!("list-panes {current}"), &self.list_error)?;
        Ok(self.panes.clone())
    }

    async fn send_literal(&self, pane: &PaneId, text: &str) -> Result<(), MuxError> {
        self.record(format!("send-literal {pane} {text}"), &self.literal_error)
    }

    async fn send_enter(&self, pane: &PaneId) -> Result<(), MuxError> {
        self.record(format!("send-enter {pane}"), &self.enter_error)
    }
}

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!(
            "vimdemux-{prefix}-{}-{millis}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
