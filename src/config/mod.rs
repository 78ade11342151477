//! Configuration loading from TOML files.
//!
//! Config is looked up in this order (first hit wins):
//! 1. TOML file given via the `--config` CLI flag
//! 2. TOML file named by `$VIMDEMUX_CONFIG`
//! 3. $XDG_CONFIG_HOME/vimdemux/vimdemux.toml (or ~/.config/vimdemux/vimdemux.toml)
//! 4. Built-in defaults (no root mappings, identity path translation)
//!
//! A file that exists but doesn't parse, or whose `root-mappings` entries
//! aren't `[local, remote]` string pairs, is an error rather than a silent
//! fallback.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

mod defaults;
mod init;
mod sources;
mod types;

pub use defaults::CONFIG_PATH_ENV;
pub use init::{config_root_dir, default_global_config_path, initialize_default_global_config};
pub use types::{
    CommandsConfig, Config, ConfigInitResult, ConfigSource, LoadedConfig, PaneConfig,
    PaneSelection, RootMapping,
};
use sources::read_config_text_with_sources;
use types::FileConfig;

/// Load configuration from disk.
///
/// `path_override` is an explicit config file path (from `--config`).
pub fn load_config(path_override: Option<&str>) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

pub(crate) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (text, source) =
        read_config_text_with_sources(path_override, &read_file, &env_lookup, &config_root)?;
    let config = parse_config(&text)?;
    tracing::debug!(
        %source,
        mappings = config.root_mappings.len(),
        "configuration loaded"
    );
    Ok(LoadedConfig { config, source })
}

/// Parse and validate config text.
pub fn parse_config(text: &str) -> Result<Config, ConfigError> {
    let parsed: FileConfig = toml::from_str(text)?;
    resolve_file_config(parsed)
}

fn resolve_file_config(file: FileConfig) -> Result<Config, ConfigError> {
    let mut root_mappings = Vec::with_capacity(file.root_mappings.len());
    for (index, entry) in file.root_mappings.into_iter().enumerate() {
        root_mappings.push(root_mapping_from_entry(index, entry)?);
    }
    validate_commands(&file.commands)?;
    Ok(Config {
        root_mappings,
        pane: file.pane,
        commands: file.commands,
    })
}

fn root_mapping_from_entry(index: usize, entry: Vec<String>) -> Result<RootMapping, ConfigError> {
    let [local, remote]: [String; 2] = entry.try_into().map_err(|entry: Vec<String>| {
        ConfigError::Invalid(format!(
            "root-mappings[{index}] must be a [local, remote] pair, got {} element(s)",
            entry.len()
        ))
    })?;
    if local.is_empty() {
        return Err(ConfigError::Invalid(format!(
            "root-mappings[{index}]: local prefix cannot be empty"
        )));
    }
    if !local.starts_with('/') {
        return Err(ConfigError::Invalid(format!(
            "root-mappings[{index}]: local prefix `{local}` must be an absolute path"
        )));
    }
    Ok(RootMapping::new(local, remote))
}

fn validate_commands(commands: &CommandsConfig) -> Result<(), ConfigError> {
    let required = [
        ("interpreter", &commands.interpreter),
        ("test-module", &commands.test_module),
        ("debugger-module", &commands.debugger_module),
        ("breakpoint-file", &commands.breakpoint_file),
    ];
    for (key, value) in required {
        if value.trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "commands.{key} cannot be empty"
            )));
        }
    }
    Ok(())
}
