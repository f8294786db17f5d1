//! Spectral peak picking with sub-bin refinement.
//!
//! Peaks are local maxima of a dB spectrum (higher than the left
//! neighbor, not lower than the right one, so a flat top yields one
//! peak at its first bin); quadratic
//! (parabolic) interpolation through each maximum and its two
//! neighbors recovers the true peak position between bins.

use serde::Serialize;

use crate::audio::DbSpectrum;

/// A resonance measured in a recording
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Peak {
    pub frequency_hz: f64,
    /// Level relative to the band maximum (dB)
    pub level_db: f64,
}

/// All local maxima at or above `floor_db`, in ascending frequency
///
/// Bin `i` is a peak when `level[i - 1] < level[i] >= level[i + 1]`.
///
/// The first and last bins are never peaks since they have only one neighbor.
pub fn pick_peaks(spectrum: &DbSpectrum, floor_db: f64) -> Vec<Peak> {
    let levels = &spectrum.levels_db;
    if levels.len() < 3 {
        return Vec::new();
    }

    (1..levels.len() - 1)
        .filter(|&i| levels[i] >= floor_db && levels[i] > levels[i - 1] && levels[i] >= levels[i + 1])
        .map(|i| {
            let (delta, level_db) = fit_parabola(levels[i - 1], levels[i], levels[i + 1]);
            Peak {
                frequency_hz: (i as f64 + delta) * spectrum.bin_hz,
                level_db,
            }
        })
        .collect()
}

/// Vertex of the parabola through (-1, y0), (0, y1), (1, y2)
///
/// Returns (offset from the center bin, interpolated level).
fn fit_parabola(y0: f64, y1: f64, y2: f64) -> (f64, f64) {
    // y = ax^2 + bx + c with c = y1
    let a = (y0 + y2) / 2.0 - y1;
    let b = (y2 - y0) / 2.0;

    if a.abs() <= 1e-12 {
        return (0.0, y1);
    }

    let delta = (-b / (2.0 * a)).clamp(-0.5, 0.5);
    (delta, y1 - (b * b) / (4.0 * a))
}

/// Nearest peak to a frequency
pub fn nearest_peak(peaks: &[Peak], frequency_hz: f64) -> Option<Peak> {
    peaks
        .iter()
        .copied()
        .min_by(|a, b| {
            (a.frequency_hz - frequency_hz)
                .abs()
                .total_cmp(&(b.frequency_hz - frequency_hz).abs())
        })
}
