//! Spectral analysis configuration.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::room::DEFAULT_SPEED_OF_SOUND_M_PER_S;

/// Window applied to a recording before the FFT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Window {
    /// No tapering; suited to impulse responses that decay inside the file
    #[default]
    Rectangular,

    /// Hann taper (zero at both ends)
    Hann,
}

/// FFT and peak-picking configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpectrumConfig {
    /// Speed of sound used for theoretical modes (m/s)
    pub speed_of_sound: f64,

    /// Minimum FFT length (must be power of 2); shorter recordings are zero padded
    /// 65536 @ 44.1kHz ≈ 0.67 Hz per bin
    pub min_fft_size: usize,

    pub window: Window,

    /// Peaks below this level (dB relative to the band maximum) are ignored
    pub peak_floor_db: f64,

    /// Lowest level kept in the normalized spectrum (dB)
    pub floor_db: f64,
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            speed_of_sound: DEFAULT_SPEED_OF_SOUND_M_PER_S,
            min_fft_size: 65536,
            window: Window::Rectangular,
            peak_floor_db: -40.0,
            floor_db: -120.0,
        }
    }
}

impl SpectrumConfig {
    /// FFT length for a recording of `len` samples
    pub fn fft_size_for(&self, len: usize) -> usize {
        len.next_power_of_two().max(self.min_fft_size)
    }

    /// Validate configuration (FFT size must be power of 2, etc.)
    pub fn validate(&self) -> Result<(), String> {
        if !self.min_fft_size.is_power_of_two() {
            return Err(format!(
                "FFT size must be power of 2, got {}",
                self.min_fft_size
            ));
        }
        if !(self.speed_of_sound.is_finite() && self.speed_of_sound > 0.0) {
            return Err(format!(
                "Speed of sound must be > 0, got {}",
                self.speed_of_sound
            ));
        }
        if !(self.floor_db < self.peak_floor_db && self.peak_floor_db <= 0.0) {
            return Err(format!(
                "Expected floor_db < peak_floor_db <= 0, got {} and {}",
                self.floor_db, self.peak_floor_db
            ));
        }
        Ok(())
    }
}
