//! Config-file source discovery.
//!
//! Precedence: `--config` path > `$VIMDEMUX_CONFIG` > per-user file >
//! built-in defaults. Only the per-user file may be absent; a path the user
//! named explicitly has to exist.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV};
use super::ConfigSource;

/// Read config text from the highest-precedence available source.
pub(super) fn read_config_text_with_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    env_lookup: &FEnv,
    config_root: &FRoot,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path)?;
        return Ok((text, ConfigSource::Explicit(path)));
    }

    if let Some(p) = env_lookup(CONFIG_PATH_ENV).filter(|value| !value.trim().is_empty()) {
        let path = PathBuf::from(p.trim());
        let text = read_file(&path)?;
        return Ok((text, ConfigSource::Env(path)));
    }

    if let Some(dir) = config_root() {
        let path = dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        match read_file(&path) {
            Ok(text) => return Ok((text, ConfigSource::Global(path))),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(ConfigError::Io(e)),
        }
    }

    Ok((String::new(), ConfigSource::BuiltInDefaults))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> std::io::Error {
        std::io::Error::new(ErrorKind::NotFound, "missing")
    }

    #[test]
    fn explicit_path_wins_over_env_and_global() {
        let (text, source) = read_config_text_with_sources(
            Some("/tmp/explicit.toml"),
            &|path: &Path| Ok(format!("# {}", path.display())),
            &|_: &str| Some("/tmp/env.toml".to_string()),
            &|| Some(PathBuf::from("/home/dev/.config")),
        )
        .expect("explicit source");
        assert_eq!(text, "# /tmp/explicit.toml");
        assert_eq!(
            source,
            ConfigSource::Explicit(PathBuf::from("/tmp/explicit.toml"))
        );
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let err = read_config_text_with_sources(
            Some("/tmp/nope.toml"),
            &|_: &Path| Err(not_found()),
            &|_: &str| None,
            &|| None,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)), "got: {err}");
    }

    #[test]
    fn env_path_is_used_when_no_flag() {
        let (_, source) = read_config_text_with_sources(
            None,
            &|_: &Path| Ok(String::new()),
            &|name: &str| (name == CONFIG_PATH_ENV).then(|| "/tmp/env.toml".to_string()),
            &|| None,
        )
        .expect("env source");
        assert_eq!(source, ConfigSource::Env(PathBuf::from("/tmp/env.toml")));
    }

    #[test]
    fn global_file_lives_under_config_root() {
        let (_, source) = read_config_text_with_sources(
            None,
            &|_: &Path| Ok("root-mappings = []".to_string()),
            &|_: &str| None,
            &|| Some(PathBuf::from("/home/dev/.config")),
        )
        .expect("global source");
        assert_eq!(
            source,
            ConfigSource::Global(PathBuf::from("/home/dev/.config/vimdemux/vimdemux.toml"))
        );
    }

    #[test]
    fn absent_global_file_falls_back_to_defaults() {
        let (text, source) = read_config_text_with_sources(
            None,
            &|_: &Path| Err(not_found()),
            &|_: &str| None,
            &|| Some(PathBuf::from("/home/dev/.config")),
        )
        .expect("defaults");
        assert!(text.is_empty());
        assert_eq!(source, ConfigSource::BuiltInDefaults);
    }

    #[test]
    fn unreadable_global_file_is_surfaced() {
        let err = read_config_text_with_sources(
            None,
            &|_: &Path| Err(std::io::Error::new(ErrorKind::PermissionDenied, "denied")),
            &|_: &str| None,
            &|| Some(PathBuf::from("/home/dev/.config")),
        )
        .unwrap_err();
        assert!(err.to_string().contains("denied"), "got: {err}");
    }
}
