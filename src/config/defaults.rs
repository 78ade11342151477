//! Default configuration constants and the `vimdemux init` template.

/// Embedded default `vimdemux.toml` template written by `vimdemux init`.
pub(super) const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../templates/vimdemux.toml");
/// Directory under the config root holding our files.
pub(super) const CONFIG_DIR_NAME: &str = "vimdemux";
/// Config file name inside [`CONFIG_DIR_NAME`].
pub(super) const CONFIG_FILE_NAME: &str = "vimdemux.toml";
/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "VIMDEMUX_CONFIG";

pub(super) const DEFAULT_INTERPRETER: &str = "python3";
pub(super) const DEFAULT_TEST_MODULE: &str = "pytest";
pub(super) const DEFAULT_DEBUGGER_MODULE: &str = "pdb";
/// pdb executes this file from the working directory on startup.
pub(super) const DEFAULT_BREAKPOINT_FILE: &str = ".pdbrc";
