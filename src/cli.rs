//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::params::{ConfigError, InputSet, RunConfig, Window};
use crate::room::RoomDimensions;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "room-modal")]
#[command(
    about = "Compare room modes of exact image-source and waveguide renders",
    long_about = None
)]
pub struct Args {
    /// TOML config file; flags given here override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the rendered recordings
    #[arg(long, value_name = "DIR")]
    pub root_dir: Option<PathBuf>,

    /// Input sets to analyse (comma separated)
    #[arg(long, value_enum, value_delimiter = ',', value_name = "SET")]
    pub inputs: Vec<InputSet>,

    /// Upper bound of the analysed band (Hz)
    #[arg(long, value_name = "HZ")]
    pub max_frequency: Option<f64>,

    /// Room length, width and height (meters)
    #[arg(
        long,
        num_args = 3,
        action = ArgAction::Set,
        value_names = ["LENGTH", "WIDTH", "HEIGHT"]
    )]
    pub room_dim: Option<Vec<f64>>,

    /// Speed of sound for theoretical modes (m/s)
    #[arg(long, value_name = "M/S")]
    pub speed_of_sound: Option<f64>,

    /// Window applied before the FFT
    #[arg(long, value_enum)]
    pub window: Option<Window>,

    /// Write a spectrum plot (PNG)
    #[arg(long, value_name = "FILE")]
    pub plot: Option<PathBuf>,

    /// Write the report as JSON
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Resolve the run configuration: flags > config file > defaults
    pub fn run_config(&self) -> Result<RunConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut RunConfig) {
        if let Some(root_dir) = &self.root_dir {
            config.driver.root_dir = root_dir.clone();
        }
        if !self.inputs.is_empty() {
            config.driver.inputs = self.inputs.clone();
        }
        if let Some(max_frequency) = self.max_frequency {
            config.driver.max_frequency_hz = max_frequency;
        }
        if let Some(&[length, width, height]) = self.room_dim.as_deref() {
            config.driver.room_dim = RoomDimensions::new(length, width, height);
        }
        if let Some(speed_of_sound) = self.speed_of_sound {
            config.spectrum.speed_of_sound = speed_of_sound;
        }
        if let Some(window) = self.window {
            config.spectrum.window = window;
        }
        if let Some(plot) = &self.plot {
            config.output.plot = Some(plot.clone());
        }
        if let Some(report) = &self.report {
            config.output.report = Some(report.clone());
        }
    }

    /// Default tracing filter for the verbosity level
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "room_modal=info",
            1 => "room_modal=debug",
            _ => "room_modal=trace",
        }
    }
}
