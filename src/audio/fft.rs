//! Magnitude spectra and their normalized, band-limited dB view.

use rustfft::{num_complex::Complex, FftPlanner};
use std::f64::consts::PI;

use crate::params::{SpectrumConfig, Window};

/// One-sided linear magnitude spectrum (bins 0..=N/2)
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// Frequency spacing between bins (Hz)
    pub bin_hz: f64,
    pub magnitudes: Vec<f64>,
}

/// Spectrum restricted to [0, max_frequency] in dB relative to its own maximum
#[derive(Debug, Clone)]
pub struct DbSpectrum {
    pub bin_hz: f64,
    pub levels_db: Vec<f64>,
}

/// FFT of a whole recording, zero padded to the configured size
pub fn magnitude_spectrum(samples: &[f64], sample_rate: u32, config: &SpectrumConfig) -> Spectrum {
    let fft_size = config.fft_size_for(samples.len());

    let mut buffer: Vec<Complex<f64>> = samples
        .iter()
        .enumerate()
        .map(|(i, &s)| {
            let window = match config.window {
                Window::Rectangular => 1.0,
                Window::Hann => hann_window(i, samples.len()),
            };
            Complex::new(s * window, 0.0)
        })
        .collect();
    buffer.resize(fft_size, Complex::new(0.0, 0.0));

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(fft_size);
    fft.process(&mut buffer);

    Spectrum {
        bin_hz: sample_rate as f64 / fft_size as f64,
        magnitudes: buffer[..=fft_size / 2].iter().map(|c| c.norm()).collect(),
    }
}

/// Hann window function for FFT analysis
pub fn hann_window(index: usize, size: usize) -> f64 {
    if size < 2 {
        return 1.0;
    }
    0.5 * (1.0 - ((2.0 * PI * index as f64) / (size as f64 - 1.0)).cos())
}

impl Spectrum {
    pub fn frequency(&self, bin: usize) -> f64 {
        bin as f64 * self.bin_hz
    }

    /// Number of bins with frequency <= max_frequency_hz
    pub fn bins_below(&self, max_frequency_hz: f64) -> usize {
        let Some(last_bin) = self.magnitudes.len().checked_sub(1) else {
            return 0;
        };
        let last = (max_frequency_hz / self.bin_hz)
            .floor()
            .clamp(0.0, last_bin as f64) as usize;
        last + 1
    }

    /// Band-limit and normalize to the band maximum, clamping at floor_db
    pub fn to_db(&self, max_frequency_hz: f64, floor_db: f64) -> DbSpectrum {
        let band = &self.magnitudes[..self.bins_below(max_frequency_hz)];
        let peak = band.iter().copied().fold(0.0, f64::max);

        let levels_db = band
            .iter()
            .map(|&m| {
                if peak > 0.0 && m > 0.0 {
                    (20.0 * (m / peak).log10()).max(floor_db)
                } else {
                    floor_db
                }
            })
            .collect();

        DbSpectrum {
            bin_hz: self.bin_hz,
            levels_db,
        }
    }
}

impl DbSpectrum {
    pub fn frequency(&self, bin: usize) -> f64 {
        bin as f64 * self.bin_hz
    }

    pub fn max_frequency(&self) -> f64 {
        self.frequency(self.levels_db.len().saturating_sub(1))
    }

    /// Linearly interpolated level at an arbitrary frequency, clamped to the band edges
    pub fn level_at(&self, frequency_hz: f64) -> Option<f64> {
        let last = self.levels_db.len().checked_sub(1)?;
        let position = (frequency_hz / self.bin_hz).clamp(0.0, last as f64);
        let lower = position.floor() as usize;
        let upper = (lower + 1).min(last);
        let t = position - lower as f64;
        Some(self.levels_db[lower] * (1.0 - t) + self.levels_db[upper] * t)
    }

    /// (frequency, level) pairs in ascending frequency
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.levels_db
            .iter()
            .enumerate()
            .map(|(bin, &level)| (self.frequency(bin), level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(frequency_hz: f64, sample_rate: u32, len: usize) -> Vec<f64> {
        (0..len)
            .map(|i| (2.0 * PI * frequency_hz * i as f64 / sample_rate as f64).sin())
            .collect()
    }

    #[test]
    fn test_hann_window() {
        let size = 1024;

        // Hann window should be 0 at edges, 1 at center
        assert!((hann_window(0, size) - 0.0).abs() < 0.01);
        assert!((hann_window(size - 1, size) - 0.0).abs() < 0.01);
        assert!((hann_window(size / 2, size) - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_spectrum_peak_at_sine_frequency() {
        let config = SpectrumConfig {
            min_fft_size: 8192,
            ..SpectrumConfig::default()
        };
        // 100 Hz lands exactly on bin 100 with 8192 samples @ 8192 Hz
        let spectrum = magnitude_spectrum(&sine(100.0, 8192, 8192), 8192, &config);

        assert_eq!(spectrum.bin_hz, 1.0);
        assert_eq!(spectrum.magnitudes.len(), 4097);

        let peak_bin = spectrum
            .magnitudes
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(peak_bin, 100);
    }

    #[test]
    fn test_hann_spectrum_peak_at_sine_frequency() {
        let config = SpectrumConfig {
            min_fft_size: 8192,
            window: Window::Hann,
            ..SpectrumConfig::default()
        };
        let spectrum = magnitude_spectrum(&sine(100.0, 8192, 8192), 8192, &config);

        let peak_bin = spectrum
            .magnitudes
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(peak_bin, 100);

        // Tapering spreads energy to the neighbors but keeps far bins quiet
        assert!(spectrum.magnitudes[99] > spectrum.magnitudes[90]);
        assert!(spectrum.magnitudes[150] < spectrum.magnitudes[100] * 1e-3);
    }

    #[test]
    fn test_bins_below_huge_frequency_is_whole_spectrum() {
        let spectrum = Spectrum {
            bin_hz: 1.0,
            magnitudes: vec![1.0; 8],
        };
        assert_eq!(spectrum.bins_below(1e20), 8);
        assert_eq!(spectrum.bins_below(f64::MAX), 8);
        assert_eq!(spectrum.bins_below(3.5), 4);

        let empty = Spectrum {
            bin_hz: 1.0,
            magnitudes: Vec::new(),
        };
        assert_eq!(empty.bins_below(100.0), 0);
        assert!(empty.to_db(100.0, -60.0).levels_db.is_empty());
    }

    #[test]
    fn test_to_db_band_limits_and_normalizes() {
        let spectrum = Spectrum {
            bin_hz: 10.0,
            magnitudes: vec![0.0, 1.0, 0.1, 0.5, 100.0],
        };

        let db = spectrum.to_db(25.0, -60.0);

        // Bins at 0, 10, 20 Hz
        assert_eq!(db.levels_db.len(), 3);
        assert_eq!(db.levels_db[0], -60.0);
        assert_eq!(db.levels_db[1], 0.0);
        assert!((db.levels_db[2] + 20.0).abs() < 1e-9);
        assert_eq!(db.max_frequency(), 20.0);
    }

    #[test]
    fn test_silent_band_sits_on_floor() {
        let spectrum = Spectrum {
            bin_hz: 1.0,
            magnitudes: vec![0.0; 8],
        };
        let db = spectrum.to_db(100.0, -90.0);
        assert_eq!(db.levels_db.len(), 8);
        assert!(db.levels_db.iter().all(|&l| l == -90.0));
    }

    #[test]
    fn test_level_at_interpolates() {
        let db = DbSpectrum {
            bin_hz: 2.0,
            levels_db: vec![0.0, -10.0, -30.0],
        };

        assert_eq!(db.level_at(0.0), Some(0.0));
        assert_eq!(db.level_at(1.0), Some(-5.0));
        assert_eq!(db.level_at(3.0), Some(-20.0));
        // Clamped beyond the band edge
        assert_eq!(db.level_at(50.0), Some(-30.0));

        let empty = DbSpectrum {
            bin_hz: 1.0,
            levels_db: Vec::new(),
        };
        assert_eq!(empty.level_at(1.0), None);
    }
}
