//! Runtime settings: built-in defaults, then the TOML file, then the
//! environment. Command-line flags are applied on top by `main`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use orgdesk_console::ConsoleConfig;
use orgdesk_core::models::organization::Tier;
use orgdesk_core::models::tab::OrgTab;
use orgdesk_store::StoreConfig;
use serde::Deserialize;

pub const DEFAULT_SETTINGS_FILE: &str = "orgdesk.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub seed_path: Option<PathBuf>,
    pub default_max_users: u32,
    pub logo_len: usize,
    pub initial_tab: OrgTab,
    pub default_tier: Tier,
    pub log_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let store = StoreConfig::default();
        let console = ConsoleConfig::default();
        Self {
            seed_path: store.seed_path,
            default_max_users: store.default_max_users,
            logo_len: store.logo_len,
            initial_tab: console.initial_tab,
            default_tier: console.default_tier,
            log_json: false,
        }
    }
}

/// Settings file layout. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    seed_path: Option<PathBuf>,
    default_max_users: Option<u32>,
    logo_len: Option<usize>,
    initial_tab: Option<String>,
    default_tier: Option<String>,
    log_json: Option<bool>,
}

impl Settings {
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            seed_path: self.seed_path.clone(),
            default_max_users: self.default_max_users,
            logo_len: self.logo_len,
        }
    }

    pub fn console_config(&self) -> ConsoleConfig {
        ConsoleConfig {
            initial_tab: self.initial_tab,
            default_tier: self.default_tier,
        }
    }

    /// Overlay the keys present in a TOML document.
    pub fn apply_toml(&mut self, raw: &str) -> anyhow::Result<()> {
        let file: FileSettings = toml::from_str(raw)?;

        if let Some(v) = file.seed_path {
            self.seed_path = Some(v);
        }
        if let Some(v) = file.default_max_users {
            self.default_max_users = v;
        }
        if let Some(v) = file.logo_len {
            self.logo_len = v;
        }
        if let Some(v) = file.initial_tab {
            self.initial_tab = v.parse().context("initial_tab")?;
        }
        if let Some(v) = file.default_tier {
            self.default_tier = v.parse().context("default_tier")?;
        }
        if let Some(v) = file.log_json {
            self.log_json = v;
        }
        Ok(())
    }

    /// Overlay `ORGDESK_*` variables looked up through `var`.
    pub fn apply_env<F>(&mut self, var: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = var("ORGDESK_SEED_PATH") {
            self.seed_path = Some(PathBuf::from(v));
        }
        if let Some(v) = var("ORGDESK_DEFAULT_MAX_USERS") {
            self.default_max_users = v
                .trim()
                .parse()
                .with_context(|| format!("ORGDESK_DEFAULT_MAX_USERS={v:?}"))?;
        }
        if let Some(v) = var("ORGDESK_INITIAL_TAB") {
            self.initial_tab = v.parse().context("ORGDESK_INITIAL_TAB")?;
        }
        if let Some(v) = var("ORGDESK_DEFAULT_TIER") {
            self.default_tier = v.parse().context("ORGDESK_DEFAULT_TIER")?;
        }
        Ok(())
    }
}

/// Load settings from `path` (or [`DEFAULT_SETTINGS_FILE`] when absent)
/// and the process environment.
///
/// A missing default file is fine; a missing explicit file is an error.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();
    let file = path.unwrap_or_else(|| Path::new(DEFAULT_SETTINGS_FILE));

    match fs::read_to_string(file) {
        Ok(raw) => settings
            .apply_toml(&raw)
            .with_context(|| format!("invalid settings file {}", file.display()))?,
        Err(err) if path.is_none() && err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file {}", file.display()));
        }
    }

    settings.apply_env(|key| std::env::var(key).ok())?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_component_configs() {
        let settings = Settings::default();
        assert_eq!(settings.default_max_users, 10);
        assert_eq!(settings.logo_len, 2);
        assert_eq!(settings.initial_tab, OrgTab::Profile);
        assert_eq!(settings.seed_path, None);
    }

    #[test]
    fn toml_overrides_present_keys_only() {
        let mut settings = Settings::default();
        settings
            .apply_toml("default_max_users = 25\ninitial_tab = \"usage\"\n")
            .unwrap();
        assert_eq!(settings.default_max_users, 25);
        assert_eq!(settings.initial_tab, OrgTab::Usage);
        assert_eq!(settings.logo_len, 2);
        assert_eq!(settings.default_tier, Tier::Starter);
    }

    #[test]
    fn toml_rejects_unknown_keys_and_values() {
        let mut settings = Settings::default();
        assert!(settings.apply_toml("max_users = 3").is_err());
        assert!(settings.apply_toml("default_tier = \"Gold\"").is_err());
    }

    #[test]
    fn env_wins_over_file() {
        let mut settings = Settings::default();
        settings.apply_toml("default_max_users = 25").unwrap();
        settings
            .apply_env(env(&[
                ("ORGDESK_DEFAULT_MAX_USERS", "40"),
                ("ORGDESK_DEFAULT_TIER", "enterprise"),
                ("ORGDESK_SEED_PATH", "/tmp/seed.json"),
            ]))
            .unwrap();
        assert_eq!(settings.default_max_users, 40);
        assert_eq!(settings.default_tier, Tier::Enterprise);
        assert_eq!(settings.store_config().seed_path, Some(PathBuf::from("/tmp/seed.json")));
    }

    #[test]
    fn bad_env_number_is_an_error() {
        let mut settings = Settings::default();
        let err = settings
            .apply_env(env(&[("ORGDESK_DEFAULT_MAX_USERS", "many")]))
            .unwrap_err();
        assert!(err.to_string().contains("ORGDESK_DEFAULT_MAX_USERS"));
    }

    #[test]
    fn explicit_file_is_loaded_and_must_exist() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "logo_len = 3\nlog_json = true").unwrap();

        let settings = load_settings(Some(file.path())).unwrap();
        assert_eq!(settings.logo_len, 3);
        assert!(settings.log_json);
        assert_eq!(settings.store_config().logo_len, 3);

        let dir = tempfile::tempdir().unwrap();
        assert!(load_settings(Some(&dir.path().join("missing.toml"))).is_err());
    }
}
