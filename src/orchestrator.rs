//! The run/debug pipeline.
//!
//! ```text
//! Idle -> ConfigLoaded -> PathResolved -> PaneResolved -> Dispatched
//! ```
//!
//! Each invocation walks the stages once, in order. The first failing stage
//! aborts the invocation with its own error; nothing is retried and nothing
//! is typed into a pane unless every earlier stage succeeded.

use serde::Serialize;
use std::fmt;

use crate::command::{Command, CommandBuilder, FileKind, Mode};
use crate::config::Config;
use crate::dispatch::PaneDispatcher;
use crate::error::{DemuxError, PaneError};
use crate::mux::{Multiplexer, PaneId};
use crate::pane::PaneLocator;
use crate::scope::{enclosing_test, TestScope};
use crate::translate::translate;

/// The editor's cursor: file and 1-based line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLocation {
    pub path: String,
    pub line: i64,
}

impl TargetLocation {
    pub fn new(path: impl Into<String>, line: i64) -> Self {
        Self {
            path: path.into(),
            line,
        }
    }
}

/// Pipeline progress, for tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    ConfigLoaded,
    PathResolved,
    PaneResolved,
    Dispatched,
}

/// A built command and the path resolution behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prepared {
    pub mode: Mode,
    pub local_path: String,
    pub remote_path: String,
    pub line: i64,
    pub scope: Option<TestScope>,
    pub command: Command,
}

impl fmt::Display for Prepared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command.as_str())
    }
}

/// What was sent where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dispatch {
    pub pane: PaneId,
    #[serde(flatten)]
    pub prepared: Prepared,
}

impl fmt::Display for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prepared = &self.prepared;
        write!(
            f,
            "{} sent to pane {}: {}",
            prepared.mode, self.pane, prepared.remote_path
        )?;
        if let Some(scope) = &prepared.scope {
            let node = scope.node_id("");
            write!(f, " ({})", node.trim_start_matches("::"))?;
        }
        Ok(())
    }
}

/// Owns the loaded config and the multiplexer for the process lifetime.
pub struct Orchestrator<M> {
    config: Config,
    builder: CommandBuilder,
    mux: M,
}

impl<M: Multiplexer> Orchestrator<M> {
    /// `config` is loaded once by the caller and never reloaded.
    pub fn new(config: Config, mux: M) -> Self {
        let builder = CommandBuilder::new(config.commands.clone());
        Self {
            config,
            builder,
            mux,
        }
    }

    pub fn multiplexer(&self) -> &M {
        &self.mux
    }

    /// Run the file at `loc` in the adjacent pane.
    pub async fn run(&self, loc: &TargetLocation) -> Result<Dispatch, DemuxError> {
        self.execute(Mode::Run, loc).await
    }

    /// Debug the file at `loc` in the adjacent pane, breaking at its line.
    pub async fn debug(&self, loc: &TargetLocation) -> Result<Dispatch, DemuxError> {
        self.execute(Mode::Debug, loc).await
    }

    /// Resolve the path and build the command without touching any pane.
    pub async fn prepare(&self, mode: Mode, loc: &TargetLocation) -> Result<Prepared, DemuxError> {
        let remote_path = translate(&loc.path, &self.config.root_mappings);
        let scope = self.test_scope(loc).await;
        let command = self
            .builder
            .build_scoped(mode, &remote_path, loc.line, scope.as_ref())?;
        Ok(Prepared {
            mode,
            local_path: loc.path.clone(),
            remote_path,
            line: loc.line,
            scope,
            command,
        })
    }

    /// The shared pipeline behind [`run`](Self::run) and [`debug`](Self::debug).
    pub async fn execute(&self, mode: Mode, loc: &TargetLocation) -> Result<Dispatch, DemuxError> {
        let mut stage = Stage::Idle;
        advance(&mut stage, Stage::ConfigLoaded, mode);

        let prepared = self.prepare(mode, loc).await?;
        advance(&mut stage, Stage::PathResolved, mode);

        let current = self.mux.current_pane().await.map_err(PaneError::from)?;
        let pane = PaneLocator::new(&self.mux, self.config.pane.selection)
            .find_adjacent_pane(&current)
            .await?;
        advance(&mut stage, Stage::PaneResolved, mode);

        PaneDispatcher::new(&self.mux)
            .send(&pane, &prepared.command)
            .await?;
        advance(&mut stage, Stage::Dispatched, mode);

        Ok(Dispatch { pane, prepared })
    }

    /// Look up the test under the cursor in the local copy of a test file.
    ///
    /// An unreadable file just means the whole file runs.
    async fn test_scope(&self, loc: &TargetLocation) -> Option<TestScope> {
        if loc.path.is_empty() || loc.line <= 0 || FileKind::detect(&loc.path) != FileKind::Test {
            return None;
        }
        let source = match tokio::fs::read_to_string(&loc.path).await {
            Ok(source) => source,
            Err(e) => {
                tracing::debug!(path = %loc.path, error = %e, "test source unreadable, running whole file");
                return None;
            }
        };
        let line = usize::try_from(loc.line).ok()?;
        enclosing_test(&source, line)
    }
}

fn advance(stage: &mut Stage, next: Stage, mode: Mode) {
    tracing::debug!(%mode, from = ?*stage, to = ?next, "pipeline stage");
    *stage = next;
}
