//! WAV loading and mono mixdown.

use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavReader};

use crate::error::AnalysisError;

/// A recording mixed down to mono, samples in [-1, 1]
#[derive(Debug, Clone)]
pub struct Recording {
    pub path: PathBuf,
    pub sample_rate: u32,
    pub samples: Vec<f64>,
}

impl Recording {
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Read a WAV file and average its channels
pub fn load_recording(path: &Path) -> Result<Recording, AnalysisError> {
    let wav_error = |source| AnalysisError::Wav {
        path: path.to_path_buf(),
        source,
    };

    let reader = WavReader::open(path).map_err(wav_error)?;
    let spec = reader.spec();

    let interleaved: Vec<f64> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<Result<_, _>>()
            .map_err(wav_error)?,
        SampleFormat::Int => {
            let scale = 1.0 / (1u64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f64 * scale))
                .collect::<Result<_, _>>()
                .map_err(wav_error)?
        }
    };

    let channels = usize::from(spec.channels.max(1));
    let samples = interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f64>() / channels as f64)
        .collect();

    Ok(Recording {
        path: path.to_path_buf(),
        sample_rate: spec.sample_rate,
        samples,
    })
}
