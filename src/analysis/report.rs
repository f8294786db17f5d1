//! Analysis results and their text rendering.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::peaks::Peak;
use crate::audio::DbSpectrum;
use crate::params::Simulation;
use crate::room::{ModeKind, RoomDimensions, RoomMode};

/// A theoretical mode paired with the closest measured resonance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModeMatch {
    pub mode: RoomMode,
    pub nearest_peak: Option<Peak>,
    /// Measured minus theoretical frequency (Hz)
    pub deviation_hz: Option<f64>,
}

/// Per-recording results
#[derive(Debug, Clone, Serialize)]
pub struct RecordingAnalysis {
    pub path: PathBuf,
    pub simulation: Option<Simulation>,
    pub sample_rate: u32,
    pub duration_secs: f64,
    pub peaks: Vec<Peak>,
    pub mode_matches: Vec<ModeMatch>,
    pub mean_abs_deviation_hz: Option<f64>,

    /// Normalized band spectrum, kept for plotting and comparison
    #[serde(skip)]
    pub spectrum: DbSpectrum,
}

/// Waveguide recording measured against its exact image-source reference
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpectrumComparison {
    pub reference: PathBuf,
    pub candidate: PathBuf,
    pub mean_abs_difference_db: f64,
    pub max_abs_difference_db: f64,
}

/// Everything one analysis run produced
#[derive(Debug, Clone, Serialize)]
pub struct ModalReport {
    pub max_frequency_hz: f64,
    pub room_dim: RoomDimensions,
    pub speed_of_sound: f64,
    pub modes: Vec<RoomMode>,
    pub recordings: Vec<RecordingAnalysis>,
    pub comparisons: Vec<SpectrumComparison>,
}

impl ModalReport {
    pub fn mode_count(&self, kind: ModeKind) -> usize {
        self.modes.iter().filter(|m| m.kind == kind).count()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ModalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [length, width, height] = self.room_dim.as_array();
        writeln!(
            f,
            "Modal analysis up to {} Hz, room {} x {} x {} m ({:.1} m^3, c = {} m/s)",
            self.max_frequency_hz,
            length,
            width,
            height,
            self.room_dim.volume_m3(),
            self.speed_of_sound
        )?;
        writeln!(
            f,
            "Theoretical modes: {} ({} axial, {} tangential, {} oblique)",
            self.modes.len(),
            self.mode_count(ModeKind::Axial),
            self.mode_count(ModeKind::Tangential),
            self.mode_count(ModeKind::Oblique)
        )?;

        for recording in &self.recordings {
            writeln!(f)?;
            let simulation = recording.simulation.map_or("unknown", |s| s.suffix());
            write!(
                f,
                "{} [{}] {} Hz, {:.2} s, {} peaks",
                recording.path.display(),
                simulation,
                recording.sample_rate,
                recording.duration_secs,
                recording.peaks.len()
            )?;
            match recording.mean_abs_deviation_hz {
                Some(deviation) => writeln!(f, ", mean |df| {:.2} Hz", deviation)?,
                None => writeln!(f)?,
            }

            for m in &recording.mode_matches {
                let [nx, ny, nz] = m.mode.indices;
                write!(
                    f,
                    "  ({},{},{}) {:<10} {:>8.2} Hz",
                    nx,
                    ny,
                    nz,
                    m.mode.kind.label(),
                    m.mode.frequency_hz
                )?;
                match (m.nearest_peak, m.deviation_hz) {
                    (Some(peak), Some(deviation)) => writeln!(
                        f,
                        "  peak {:>8.2} Hz ({:+.2} Hz, {:.1} dB)",
                        peak.frequency_hz, deviation, peak.level_db
                    )?,
                    _ => writeln!(f, "  no peak")?,
                }
            }
        }

        if !self.comparisons.is_empty() {
            writeln!(f)?;
            writeln!(f, "Spectrum differences:")?;
            for c in &self.comparisons {
                writeln!(
                    f,
                    "  {} vs {}: mean {:.2} dB, max {:.2} dB",
                    c.candidate.display(),
                    c.reference.display(),
                    c.mean_abs_difference_db,
                    c.max_abs_difference_db
                )?;
            }
        }

        Ok(())
    }
}
