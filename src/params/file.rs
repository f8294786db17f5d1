//! TOML configuration file.
//!
//! All keys are optional; missing keys fall back to the defaults of
//! [`DriverConfig`], [`SpectrumConfig`] and [`OutputConfig`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::driver::DriverConfig;
use super::inputs::InputSet;
use super::output::OutputConfig;
use super::spectrum::SpectrumConfig;
use crate::room::RoomDimensions;

/// Errors that can occur while loading a config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// On-disk layout of the config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub root_dir: Option<PathBuf>,
    pub inputs: Option<Vec<InputSet>>,
    pub max_frequency: Option<f64>,
    pub room_dim: Option<RoomDimensions>,
    pub spectrum: SpectrumConfig,
    pub output: OutputConfig,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Fill missing keys from defaults
    pub fn into_run_config(self) -> RunConfig {
        let defaults = DriverConfig::default();
        RunConfig {
            driver: DriverConfig {
                root_dir: self.root_dir.unwrap_or(defaults.root_dir),
                inputs: self.inputs.unwrap_or(defaults.inputs),
                max_frequency_hz: self.max_frequency.unwrap_or(defaults.max_frequency_hz),
                room_dim: self.room_dim.unwrap_or(defaults.room_dim),
            },
            spectrum: self.spectrum,
            output: self.output,
        }
    }
}

/// Fully resolved configuration for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunConfig {
    pub driver: DriverConfig,
    pub spectrum: SpectrumConfig,
    pub output: OutputConfig,
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        FileConfig::load(path).map(FileConfig::into_run_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Window;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = FileConfig::parse("").unwrap().into_run_config();
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn test_full_file() {
        let text = r#"
            root_dir = "renders"
            inputs = ["no_processing"]
            max_frequency = 200.0
            room_dim = [4.0, 3.0, 2.5]

            [spectrum]
            speed_of_sound = 343.0
            window = "hann"

            [output]
            plot = "modes.png"
        "#;

        let config = FileConfig::parse(text).unwrap().into_run_config();

        assert_eq!(config.driver.root_dir, PathBuf::from("renders"));
        assert_eq!(config.driver.inputs, vec![InputSet::NoProcessing]);
        assert_eq!(config.driver.max_frequency_hz, 200.0);
        assert_eq!(config.driver.room_dim.as_array(), [4.0, 3.0, 2.5]);
        assert_eq!(config.spectrum.speed_of_sound, 343.0);
        assert_eq!(config.spectrum.window, Window::Hann);
        // Unset spectrum keys keep their defaults
        assert_eq!(config.spectrum.min_fft_size, 65536);
        assert_eq!(config.output.plot, Some(PathBuf::from("modes.png")));
        assert_eq!(config.output.report, None);
    }

    #[test]
    fn test_room_dim_must_have_three_values() {
        assert!(FileConfig::parse("room_dim = [4.0, 3.0]").is_err());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = FileConfig::parse("max_freq = 90.0").unwrap_err();
        assert!(err.to_string().contains("max_freq"));

        assert!(FileConfig::parse("[spectrum]\nspeed = 343.0").is_err());
        assert!(FileConfig::parse("[output]\nplot_path = \"a.png\"").is_err());
    }

    #[test]
    fn test_typo_in_file_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max_freq = 90.0\n").unwrap();

        let err = RunConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RunConfig::load(Path::new("/nonexistent/room-modal.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/room-modal.toml"));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max_frequency = 90.0\n").unwrap();

        let config = RunConfig::load(&path).unwrap();
        assert_eq!(config.driver.max_frequency_hz, 90.0);
        assert_eq!(config.driver.inputs, vec![InputSet::Omnidirectional]);
    }
}
