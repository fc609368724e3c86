//! Read-only TOML configuration for the TUI.
//!
//! Tool state is never written back; the config file only seeds defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use toolbelt_core::password::PasswordSpec;

/// TUI configuration. Every field has a default, so a missing or partial
/// file is fine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event poll timeout in milliseconds.
    pub tick_ms: u64,
    /// Draw the light margin around QR codes.
    pub qr_quiet_zone: bool,
    pub password: PasswordDefaults,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PasswordDefaults {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            qr_quiet_zone: true,
            password: PasswordDefaults::default(),
        }
    }
}

impl Default for PasswordDefaults {
    fn default() -> Self {
        let spec = PasswordSpec::default();
        Self {
            length: spec.length,
            uppercase: spec.uppercase,
            lowercase: spec.lowercase,
            digits: spec.digits,
            symbols: spec.symbols,
        }
    }
}

impl Config {
    pub fn password_spec(&self) -> PasswordSpec {
        PasswordSpec {
            length: self.password.length,
            uppercase: self.password.uppercase,
            lowercase: self.password.lowercase,
            digits: self.password.digits,
            symbols: self.password.symbols,
        }
    }
}

/// Default config file location: `<config dir>/toolbelt/config.toml`.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolbelt")
        .join("config.toml")
}

/// Load config from disk. Returns defaults if the file is missing or corrupt.
pub fn load(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_password_spec_defaults() {
        let config = Config::default();
        assert_eq!(config.password_spec(), PasswordSpec::default());
        assert_eq!(config.tick_ms, 50);
        assert!(config.qr_quiet_zone);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config = toml::from_str("tick_ms = 100").unwrap();
        assert_eq!(config.tick_ms, 100);
        assert!(config.qr_quiet_zone);
        assert_eq!(config.password.length, 16);
    }

    #[test]
    fn password_section_overrides() {
        let config: Config = toml::from_str(
            "[password]\nlength = 24\nsymbols = false\n",
        )
        .unwrap();
        let spec = config.password_spec();
        assert_eq!(spec.length, 24);
        assert!(!spec.symbols);
        assert!(spec.uppercase);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = load(Path::new("/nonexistent/toolbelt/config.toml"));
        assert_eq!(config.tick_ms, 50);
    }
}
