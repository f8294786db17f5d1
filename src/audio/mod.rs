//! Recording input and spectral analysis.
//!
//! Loads rendered impulse responses from WAV and turns them into
//! band-limited, normalized magnitude spectra.

mod fft;
mod wav;

// Re-export public types
pub use fft::{hann_window, magnitude_spectrum, DbSpectrum, Spectrum};
pub use wav::{load_recording, Recording};
