//! Level differences between a reference and a candidate spectrum.

use crate::audio::DbSpectrum;

/// Mean and maximum absolute level difference (dB)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelDifference {
    pub mean_abs_db: f64,
    pub max_abs_db: f64,
}

/// Compare two spectra on the reference's bins in (0, max_frequency_hz]
///
/// The candidate is linearly interpolated, so the two recordings may use
/// different sample rates or FFT sizes. Returns `None` when no bin qualifies.
pub fn compare_spectra(
    reference: &DbSpectrum,
    candidate: &DbSpectrum,
    max_frequency_hz: f64,
) -> Option<LevelDifference> {
    let differences: Vec<f64> = reference
        .points()
        .filter(|&(frequency, _)| frequency > 0.0 && frequency <= max_frequency_hz)
        .filter_map(|(frequency, level)| {
            candidate
                .level_at(frequency)
                .map(|other| (level - other).abs())
        })
        .collect();

    if differences.is_empty() {
        return None;
    }

    Some(LevelDifference {
        mean_abs_db: differences.iter().sum::<f64>() / differences.len() as f64,
        max_abs_db: differences.iter().copied().fold(0.0, f64::max),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_spectra() {
        let spectrum = DbSpectrum {
            bin_hz: 1.0,
            levels_db: vec![-40.0, 0.0, -6.0, -12.0],
        };
        let diff = compare_spectra(&spectrum, &spectrum, 10.0).unwrap();
        assert_eq!(diff.mean_abs_db, 0.0);
        assert_eq!(diff.max_abs_db, 0.0);
    }

    #[test]
    fn test_constant_offset_skips_dc() {
        let reference = DbSpectrum {
            bin_hz: 1.0,
            levels_db: vec![-100.0, 0.0, -6.0, -12.0],
        };
        let candidate = DbSpectrum {
            bin_hz: 1.0,
            levels_db: vec![0.0, -3.0, -9.0, -15.0],
        };
        let diff = compare_spectra(&reference, &candidate, 10.0).unwrap();
        assert!((diff.mean_abs_db - 3.0).abs() < 1e-9);
        assert!((diff.max_abs_db - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_different_resolutions() {
        let reference = DbSpectrum {
            bin_hz: 1.0,
            levels_db: vec![0.0, -1.0, -2.0, -3.0, -4.0],
        };
        // Same linear slope sampled every 2 Hz
        let candidate = DbSpectrum {
            bin_hz: 2.0,
            levels_db: vec![0.0, -2.0, -4.0],
        };
        let diff = compare_spectra(&reference, &candidate, 4.0).unwrap();
        assert!(diff.max_abs_db < 1e-9);
    }

    #[test]
    fn test_no_common_bins() {
        let spectrum = DbSpectrum {
            bin_hz: 1.0,
            levels_db: vec![0.0],
        };
        assert!(compare_spectra(&spectrum, &spectrum, 10.0).is_none());
    }
}
