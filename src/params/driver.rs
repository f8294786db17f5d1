//! Driver configuration: which recordings to analyse and against which room.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::inputs::InputSet;
use crate::room::RoomDimensions;

/// Configuration consumed by [`crate::driver::Driver`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Directory holding the rendered recordings
    /// Default: build output of the siltanen2013 test program
    pub root_dir: PathBuf,

    /// Input sets to analyse, in order
    pub inputs: Vec<InputSet>,

    /// Upper bound of the analysed band (Hz)
    pub max_frequency_hz: f64,

    /// Room length, width, height (meters)
    pub room_dim: RoomDimensions,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("build/utils/siltanen2013"),
            inputs: vec![InputSet::Omnidirectional],
            max_frequency_hz: 120.0,
            room_dim: RoomDimensions::new(5.56, 3.97, 2.81),
        }
    }
}

impl DriverConfig {
    /// Recording paths: `root_dir` joined with every file name of every selected set
    pub fn fnames(&self) -> Vec<PathBuf> {
        self.inputs
            .iter()
            .flat_map(|set| set.file_names())
            .map(|name| self.root_dir.join(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_siltanen_run() {
        let config = DriverConfig::default();

        assert_eq!(config.max_frequency_hz, 120.0);
        assert_eq!(config.room_dim.as_array(), [5.56, 3.97, 2.81]);
        assert_eq!(
            config.fnames(),
            vec![
                config.root_dir.join("omnidirectional.exact_img_src.wav"),
                config.root_dir.join("omnidirectional.waveguide.wav"),
            ]
        );
    }

    #[test]
    fn test_no_processing_appended_after_omnidirectional() {
        let config = DriverConfig {
            root_dir: PathBuf::from("renders"),
            inputs: vec![InputSet::Omnidirectional, InputSet::NoProcessing],
            ..DriverConfig::default()
        };

        let names: Vec<_> = config
            .fnames()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(
            names,
            vec![
                "omnidirectional.exact_img_src.wav",
                "omnidirectional.waveguide.wav",
                "no_processing.exact_img_src.wav",
                "no_processing.waveguide.wav",
            ]
        );
        assert!(config.fnames().iter().all(|p| p.starts_with("renders")));
    }

    #[test]
    fn test_empty_input_selection_yields_no_paths() {
        let config = DriverConfig {
            inputs: Vec::new(),
            ..DriverConfig::default()
        };
        assert!(config.fnames().is_empty());
    }
}
