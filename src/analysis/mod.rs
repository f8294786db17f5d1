//! Modal analysis of simulated room impulse responses.
//!
//! For every recording: FFT, band-limit to the maximum frequency, pick
//! resonance peaks and pair each theoretical room mode with the nearest
//! one. Waveguide recordings are then compared level-wise with the
//! exact image-source recording of the same input set.

mod compare;
mod peaks;
mod report;

use std::fs;
use std::path::{Path, PathBuf};

use crate::audio::{load_recording, magnitude_spectrum};
use crate::driver::ModalAnalysis;
use crate::error::{AnalysisError, AnalysisResult};
use crate::params::{input_prefix, OutputConfig, Simulation, SpectrumConfig};
use crate::plot;
use crate::room::{room_modes, RoomDimensions, RoomMode};

pub use compare::{compare_spectra, LevelDifference};
pub use peaks::{nearest_peak, pick_peaks, Peak};
pub use report::{ModalReport, ModeMatch, RecordingAnalysis, SpectrumComparison};

/// Concrete [`ModalAnalysis`] over WAV recordings
#[derive(Debug, Clone, Default)]
pub struct ModalAnalyzer {
    spectrum: SpectrumConfig,
    output: OutputConfig,
}

impl ModalAnalyzer {
    pub fn new(spectrum: SpectrumConfig, output: OutputConfig) -> Self {
        Self { spectrum, output }
    }

    /// Check the call contract before touching any file
    fn validate(
        &self,
        fnames: &[PathBuf],
        max_frequency: f64,
        room_dim: &RoomDimensions,
    ) -> AnalysisResult<()> {
        if fnames.is_empty() {
            return Err(AnalysisError::InvalidInput(
                "At least one recording is required".to_string(),
            ));
        }
        if !(max_frequency.is_finite() && max_frequency > 0.0) {
            return Err(AnalysisError::InvalidInput(format!(
                "Maximum frequency must be > 0, got {}",
                max_frequency
            )));
        }
        room_dim.validate().map_err(AnalysisError::InvalidInput)?;
        self.spectrum
            .validate()
            .map_err(|e| AnalysisError::InvalidInput(format!("Invalid spectrum config: {}", e)))
    }

    /// Analyse a single recording against the theoretical modes
    pub fn analyse_recording(
        &self,
        path: &Path,
        max_frequency: f64,
        modes: &[RoomMode],
    ) -> AnalysisResult<RecordingAnalysis> {
        let recording = load_recording(path)?;
        if recording.samples.is_empty() {
            return Err(AnalysisError::EmptyRecording(path.to_path_buf()));
        }
        let nyquist_hz = recording.sample_rate as f64 / 2.0;
        if max_frequency > nyquist_hz {
            return Err(AnalysisError::InvalidInput(format!(
                "Maximum frequency {} Hz is above the Nyquist frequency {} Hz of {}",
                max_frequency,
                nyquist_hz,
                path.display()
            )));
        }

        let spectrum = magnitude_spectrum(&recording.samples, recording.sample_rate, &self.spectrum)
            .to_db(max_frequency, self.spectrum.floor_db);
        let peaks = pick_peaks(&spectrum, self.spectrum.peak_floor_db);

        tracing::info!(
            path = %path.display(),
            sample_rate = recording.sample_rate,
            bin_hz = spectrum.bin_hz,
            peaks = peaks.len(),
            "Analysed recording"
        );
        if peaks.is_empty() {
            tracing::warn!(path = %path.display(), "No resonance peaks below {} Hz", max_frequency);
        }

        let mode_matches: Vec<ModeMatch> = modes
            .iter()
            .map(|&mode| {
                let nearest = nearest_peak(&peaks, mode.frequency_hz);
                ModeMatch {
                    mode,
                    nearest_peak: nearest,
                    deviation_hz: nearest.map(|p| p.frequency_hz - mode.frequency_hz),
                }
            })
            .collect();

        let deviations: Vec<f64> = mode_matches
            .iter()
            .filter_map(|m| m.deviation_hz.map(f64::abs))
            .collect();
        let mean_abs_deviation_hz = (!deviations.is_empty())
            .then(|| deviations.iter().sum::<f64>() / deviations.len() as f64);

        Ok(RecordingAnalysis {
            path: path.to_path_buf(),
            simulation: Simulation::from_path(path),
            sample_rate: recording.sample_rate,
            duration_secs: recording.duration_secs(),
            peaks,
            mode_matches,
            mean_abs_deviation_hz,
            spectrum,
        })
    }

    /// Write the optional plot and JSON report
    fn write_outputs(&self, report: &ModalReport) -> AnalysisResult<()> {
        if let Some(path) = &self.output.plot {
            plot::render_report(report, path, self.output.plot_width, self.output.plot_height)?;
            tracing::info!(path = %path.display(), "Wrote spectrum plot");
        }
        if let Some(path) = &self.output.report {
            let json = report.to_json()?;
            fs::write(path, json).map_err(|source| AnalysisError::ReportIo {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), "Wrote JSON report");
        }
        Ok(())
    }
}

impl ModalAnalysis for ModalAnalyzer {
    type Output = ModalReport;
    type Error = AnalysisError;

    fn modal_analysis(
        &mut self,
        fnames: &[PathBuf],
        max_frequency: f64,
        room_dim: RoomDimensions,
    ) -> AnalysisResult<ModalReport> {
        self.validate(fnames, max_frequency, &room_dim)?;

        let modes = room_modes(&room_dim, max_frequency, self.spectrum.speed_of_sound)
            .map_err(AnalysisError::InvalidInput)?;
        tracing::debug!(modes = modes.len(), "Computed theoretical room modes");

        let recordings = fnames
            .iter()
            .map(|path| self.analyse_recording(path, max_frequency, &modes))
            .collect::<AnalysisResult<Vec<_>>>()?;

        let report = ModalReport {
            max_frequency_hz: max_frequency,
            room_dim,
            speed_of_sound: self.spectrum.speed_of_sound,
            modes,
            comparisons: pair_comparisons(&recordings, max_frequency),
            recordings,
        };

        self.write_outputs(&report)?;
        Ok(report)
    }
}

/// Compare every waveguide recording with each exact image-source
/// recording sharing its input-set prefix
fn pair_comparisons(recordings: &[RecordingAnalysis], max_frequency: f64) -> Vec<SpectrumComparison> {
    let of_kind = |kind: Simulation| {
        recordings
            .iter()
            .filter(move |r| r.simulation == Some(kind))
    };

    let mut comparisons = Vec::new();
    for reference in of_kind(Simulation::ExactImageSource) {
        let prefix = input_prefix(&reference.path);
        for candidate in of_kind(Simulation::Waveguide).filter(|c| input_prefix(&c.path) == prefix) {
            let Some(diff) = compare_spectra(&reference.spectrum, &candidate.spectrum, max_frequency)
            else {
                continue;
            };
            comparisons.push(SpectrumComparison {
                reference: reference.path.clone(),
                candidate: candidate.path.clone(),
                mean_abs_difference_db: diff.mean_abs_db,
                max_abs_difference_db: diff.max_abs_db,
            });
        }
    }
    comparisons
}
