// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` and the log file live.
//!
//! Each directory comes from the first source that names one: the command
//! line (`--config-dir`, `--data-dir`), then `IMAGE_FINDER_CONFIG_DIR` or
//! `IMAGE_FINDER_DATA_DIR`, then an `ImageFinder` folder under the platform
//! directory reported by `dirs`. Blank values count as unset.

use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "ImageFinder";

pub const ENV_DATA_DIR: &str = "IMAGE_FINDER_DATA_DIR";
pub const ENV_CONFIG_DIR: &str = "IMAGE_FINDER_CONFIG_DIR";

#[derive(Debug, Default)]
struct CliDirs {
    data: Option<PathBuf>,
    config: Option<PathBuf>,
}

static CLI_DIRS: OnceLock<CliDirs> = OnceLock::new();

/// Records the directories given on the command line. Only the first call
/// counts.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let given = CliDirs {
        data: non_blank(data_dir),
        config: non_blank(config_dir),
    };
    if CLI_DIRS.set(given).is_err() {
        tracing::warn!("directory overrides already set; ignoring the new ones");
    }
}

/// Directory holding the log file.
#[must_use]
pub fn get_app_data_dir() -> Option<PathBuf> {
    let cli = CLI_DIRS.get().and_then(|cli| cli.data.clone());
    resolve(cli, env::var(ENV_DATA_DIR).ok(), dirs::data_dir)
}

/// Directory holding `settings.toml`.
#[must_use]
pub fn get_app_config_dir() -> Option<PathBuf> {
    let cli = CLI_DIRS.get().and_then(|cli| cli.config.clone());
    resolve(cli, env::var(ENV_CONFIG_DIR).ok(), dirs::config_dir)
}

fn resolve(
    cli: Option<PathBuf>,
    env_value: Option<String>,
    platform_dir: impl FnOnce() -> Option<PathBuf>,
) -> Option<PathBuf> {
    cli.or_else(|| non_blank(env_value))
        .or_else(|| platform_dir().map(|base| base.join(APP_NAME)))
}

fn non_blank(value: Option<String>) -> Option<PathBuf> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> Option<PathBuf> {
        Some(PathBuf::from("/home/u/.config"))
    }

    #[test]
    fn command_line_wins_over_environment() {
        let dir = resolve(
            Some(PathBuf::from("/cli")),
            Some("/env".to_string()),
            platform,
        );
        assert_eq!(dir, Some(PathBuf::from("/cli")));
    }

    #[test]
    fn environment_wins_over_platform() {
        let dir = resolve(None, Some("/env".to_string()), platform);
        assert_eq!(dir, Some(PathBuf::from("/env")));
    }

    #[test]
    fn platform_dir_gets_app_folder() {
        let dir = resolve(None, None, platform);
        assert_eq!(dir, Some(PathBuf::from("/home/u/.config/ImageFinder")));
    }

    #[test]
    fn blank_environment_value_is_ignored() {
        let dir = resolve(None, Some("  ".to_string()), platform);
        assert_eq!(dir, Some(PathBuf::from("/home/u/.config/ImageFinder")));
    }

    #[test]
    fn nothing_known_gives_none() {
        assert_eq!(resolve(None, None, || None), None);
    }

    #[test]
    fn blank_command_line_value_is_unset() {
        assert_eq!(non_blank(Some(String::new())), None);
        assert_eq!(non_blank(Some("/x".to_string())), Some(PathBuf::from("/x")));
    }
}
