//! Parameter definitions with physical units and documented semantics.
//!
//! Every literal the analysis run depends on lives here with:
//! - Physical units (meters, Hz, dB, etc.)
//! - Documented ranges and meanings
//! - Defaults that reproduce the siltanen2013 comparison run

mod driver;
mod file;
mod inputs;
mod output;
mod spectrum;

// Re-export all types
pub use driver::DriverConfig;
pub use file::{ConfigError, FileConfig, RunConfig};
pub use inputs::{input_prefix, InputSet, Simulation};
pub use output::OutputConfig;
pub use spectrum::{SpectrumConfig, Window};
