// SPDX-License-Identifier: MPL-2.0
//! Where settings are read from and diagnostics reports are written to.
//!
//! Both directories resolve the same way, first match wins:
//! explicit override (tests), `--config-dir`/`--data-dir`,
//! `ICED_QR_CONFIG_DIR`/`ICED_QR_DATA_DIR`, then the platform directory
//! with `IcedQr` appended.

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "IcedQr";

pub const ENV_DATA_DIR: &str = "ICED_QR_DATA_DIR";
pub const ENV_CONFIG_DIR: &str = "ICED_QR_CONFIG_DIR";

#[derive(Debug, Default)]
struct CliOverrides {
    data_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
}

static CLI_OVERRIDES: OnceLock<CliOverrides> = OnceLock::new();

/// Records the `--data-dir` and `--config-dir` arguments.
///
/// Only the first call has an effect; returns whether it was that call.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) -> bool {
    CLI_OVERRIDES
        .set(CliOverrides {
            data_dir: data_dir.map(PathBuf::from),
            config_dir: config_dir.map(PathBuf::from),
        })
        .is_ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppDir {
    Data,
    Config,
}

impl AppDir {
    fn env_var(self) -> &'static str {
        match self {
            AppDir::Data => ENV_DATA_DIR,
            AppDir::Config => ENV_CONFIG_DIR,
        }
    }

    fn cli_override(self) -> Option<PathBuf> {
        let overrides = CLI_OVERRIDES.get()?;
        match self {
            AppDir::Data => overrides.data_dir.clone(),
            AppDir::Config => overrides.config_dir.clone(),
        }
    }

    fn platform_base(self) -> Option<PathBuf> {
        match self {
            AppDir::Data => dirs::data_dir(),
            AppDir::Config => dirs::config_dir(),
        }
    }

    fn locate(self, explicit: Option<PathBuf>) -> Option<PathBuf> {
        resolve(
            explicit,
            self.cli_override(),
            std::env::var(self.env_var()).ok(),
            self.platform_base(),
        )
    }
}

/// Picks the first available source; empty environment values are ignored.
fn resolve(
    explicit: Option<PathBuf>,
    cli: Option<PathBuf>,
    env: Option<String>,
    platform_base: Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .or(cli)
        .or_else(|| env.filter(|value| !value.is_empty()).map(PathBuf::from))
        .or_else(|| platform_base.map(|base| base.join(APP_NAME)))
}

/// Directory receiving exported diagnostics reports.
pub fn get_app_data_dir() -> Option<PathBuf> {
    AppDir::Data.locate(None)
}

/// Directory holding `settings.toml`; `override_path` wins over everything.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    AppDir::Config.locate(override_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(path: &str) -> Option<PathBuf> {
        Some(PathBuf::from(path))
    }

    #[test]
    fn explicit_override_wins() {
        let resolved = resolve(
            p("/explicit"),
            p("/cli"),
            Some("/env".into()),
            p("/home/u/.config"),
        );
        assert_eq!(resolved, p("/explicit"));
    }

    #[test]
    fn cli_beats_environment() {
        let resolved = resolve(None, p("/cli"), Some("/env".into()), p("/base"));
        assert_eq!(resolved, p("/cli"));
    }

    #[test]
    fn environment_beats_platform() {
        let resolved = resolve(None, None, Some("/env".into()), p("/base"));
        assert_eq!(resolved, p("/env"));
    }

    #[test]
    fn empty_environment_falls_back_to_platform_with_app_name() {
        let resolved = resolve(None, None, Some(String::new()), p("/base"));
        assert_eq!(resolved, Some(PathBuf::from("/base").join(APP_NAME)));
    }

    #[test]
    fn nothing_available_resolves_to_none() {
        assert_eq!(resolve(None, None, None, None), None);
    }

    #[test]
    fn each_directory_reads_its_own_variable() {
        assert_eq!(AppDir::Data.env_var(), "ICED_QR_DATA_DIR");
        assert_eq!(AppDir::Config.env_var(), "ICED_QR_CONFIG_DIR");
    }

    #[test]
    fn config_override_is_returned_verbatim() {
        let dir = PathBuf::from("/tmp/iced-qr-settings");
        assert_eq!(get_app_config_dir_with_override(Some(dir.clone())), Some(dir));
    }
}
