//! Log setup. The game owns the terminal, so records go to a file only.

use std::fs::File;

use crate::config::LogConfig;
use crate::error::ConfigError;

/// Install a file logger for the `log` facade.
pub fn init(config: &LogConfig) -> Result<(), ConfigError> {
    let level = config.level_filter()?;
    if let Some(dir) = config.file.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::LogInit {
            path: config.file.clone(),
            source: e,
        })?;
    }
    let file = File::create(&config.file).map_err(|e| ConfigError::LogInit {
        path: config.file.clone(),
        source: e,
    })?;
    let settings = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    // A second init (tests, embedding hosts) keeps the first logger.
    if simplelog::WriteLogger::init(level, settings, file).is_err() {
        log::debug!("logger already installed");
    }
    Ok(())
}
