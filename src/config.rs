use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use ratatui::style::Color;

use crate::error::ConfigError;
use crate::game::Dimensions;
use crate::ui::Palette;

/// Where a loaded configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Defaults,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

/// Board size.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub columns: usize,
    pub rows: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            columns: Dimensions::STANDARD.columns(),
            rows: Dimensions::STANDARD.rows(),
        }
    }
}

/// Terminal front-end settings. Colours accept anything ratatui parses
/// ("magenta", "lightred", "#ff8800", ...).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub player_a_color: String,
    pub player_b_color: String,
    pub empty_color: String,
    pub player_a_name: String,
    pub player_b_name: String,
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            player_a_color: "magenta".into(),
            player_b_color: "lightred".into(),
            empty_color: "white".into(),
            player_a_name: "purple".into(),
            player_b_name: "orange".into(),
            tick_rate_ms: 100,
        }
    }
}

impl UiConfig {
    /// Resolve the configured colours and names.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            player_a: parse_color("ui.player_a_color", &self.player_a_color)?,
            player_b: parse_color("ui.player_b_color", &self.player_b_color)?,
            empty: parse_color("ui.empty_color", &self.empty_color)?,
            player_a_name: self.player_a_name.to_uppercase(),
            player_b_name: self.player_b_name.to_uppercase(),
        })
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::Validation(format!("{key} is not a colour: '{value}'")))
}

/// Log file settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub file: PathBuf,
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            file: PathBuf::from("connect_four.log"),
            level: "info".into(),
        }
    }
}

impl LogConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.level).map_err(|_| {
            ConfigError::Validation(format!("log.level is not a log level: '{}'", self.level))
        })
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist. The source tells the caller which one happened, so it
    /// can report it once logging is up.
    pub fn load_or_default(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if path.exists() {
            Ok((Self::load(path)?, ConfigSource::File))
        } else {
            Ok((Self::default(), ConfigSource::Defaults))
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dimensions()?;
        self.ui.palette()?;
        self.log.level_filter()?;

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.tick_rate_ms must be > 0".into(),
            ));
        }
        if self.ui.player_a_name.trim().is_empty() || self.ui.player_b_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "ui player names must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Board size, failing on a zero or oversized dimension.
    pub fn dimensions(&self) -> Result<Dimensions, ConfigError> {
        Dimensions::new(self.board.columns, self.board.rows)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.dimensions().unwrap(), Dimensions::STANDARD);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
columns = 9
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.columns, 9);
        // Other fields should be defaults
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.board.columns, default.board.columns);
        assert_eq!(config.log.level, default.log.level);
    }

    #[test]
    fn test_validation_rejects_zero_columns() {
        let mut config = AppConfig::default();
        config.board.columns = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_rows() {
        let mut config = AppConfig::default();
        config.board.rows = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_board() {
        let mut config = AppConfig::default();
        config.board.rows = 65532;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_negative_rows_fail_to_parse() {
        let result: Result<AppConfig, _> = toml::from_str("[board]\nrows = -1\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_bad_colour() {
        let mut config = AppConfig::default();
        config.ui.player_a_color = "not-a-colour".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_log_level() {
        let mut config = AppConfig::default();
        config.log.level = "loud".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_tick_rate() {
        let mut config = AppConfig::default();
        config.ui.tick_rate_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_palette_upper_cases_names() {
        let palette = UiConfig::default().palette().unwrap();
        assert_eq!(palette.player_a_name, "PURPLE");
        assert_eq!(palette.player_b_name, "ORANGE");
        assert_eq!(palette.player_a, Color::Magenta);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let (config, source) =
            AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(config.board.columns, 7);
    }

    #[test]
    fn test_load_or_default_reports_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("present.toml");
        std::fs::write(&path, "[board]\ncolumns = 5\n").unwrap();

        let (config, source) = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(source, ConfigSource::File);
        assert_eq!(config.board.columns, 5);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
rows = 8

[ui]
player_a_color = "blue"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.rows, 8);
        assert_eq!(config.ui.palette().unwrap().player_a, Color::Blue);
        // Others are defaults
        assert_eq!(config.board.columns, 7);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\ncolumns = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
