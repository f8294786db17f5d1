//! Plot and report output configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Optional artifacts written after the analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Spectrum plot (PNG, format inferred from extension)
    pub plot: Option<PathBuf>,

    /// JSON report
    pub report: Option<PathBuf>,

    /// Plot width (pixels)
    pub plot_width: u32,

    /// Plot height (pixels)
    pub plot_height: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            plot: None,
            report: None,
            plot_width: 1200,
            plot_height: 600,
        }
    }
}
