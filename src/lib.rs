//! vimdemux — run or debug the file under the editor's cursor in the
//! neighbouring tmux pane.
//!
//! One invocation resolves the file's path on the execution host through the
//! configured root mappings, builds a run or debug command line, finds the
//! pane next to the editor and types the command into it.
//!
//! # Quick start
//!
//! ```no_run
//! use vimdemux::config::load_config;
//! use vimdemux::mux::Tmux;
//! use vimdemux::orchestrator::{Orchestrator, TargetLocation};
//!
//! # async fn example() {
//! let loaded = load_config(None).unwrap();
//! let orchestrator = Orchestrator::new(loaded.config, Tmux::new());
//! let sent = orchestrator
//!     .debug(&TargetLocation::new("/home/dev/proj/test_api.py", 42))
//!     .await
//!     .unwrap();
//! println!("{sent}");
//! # }
//! ```

pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod mux;
pub mod orchestrator;
pub mod pane;
pub mod render;
pub mod scope;
pub mod shell;
#[cfg(test)]
pub mod testsupport;
pub mod translate;

pub use command::{Command, CommandBuilder, Mode};
pub use orchestrator::{Dispatch, Orchestrator, Prepared, TargetLocation};
