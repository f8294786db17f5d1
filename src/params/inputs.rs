//! Named groups of input recordings.

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A named pair of recordings rendered by both simulation methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum InputSet {
    /// Omnidirectional source and receiver (the default comparison)
    Omnidirectional,

    /// Alternate baseline set; unused unless selected explicitly
    NoProcessing,
}

impl InputSet {
    /// File name prefix shared by both recordings of the set
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Omnidirectional => "omnidirectional",
            Self::NoProcessing => "no_processing",
        }
    }

    /// File names in analysis order: exact image-source first, then waveguide
    pub fn file_names(&self) -> [String; 2] {
        Simulation::ALL.map(|simulation| simulation.file_name(self.prefix()))
    }
}

/// Simulation method that produced a recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Simulation {
    /// Exact image-source model (reference)
    ExactImageSource,

    /// Digital waveguide mesh (approximation under test)
    Waveguide,
}

impl Simulation {
    pub const ALL: [Simulation; 2] = [Simulation::ExactImageSource, Simulation::Waveguide];

    /// Token used between the set prefix and the `.wav` extension
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::ExactImageSource => "exact_img_src",
            Self::Waveguide => "waveguide",
        }
    }

    pub fn file_name(&self, prefix: &str) -> String {
        format!("{}.{}.wav", prefix, self.suffix())
    }

    /// Infer the simulation from a `<prefix>.<suffix>.wav` file name
    pub fn from_path(path: &Path) -> Option<Self> {
        let stem = path.file_stem()?.to_str()?;
        let (_, suffix) = stem.rsplit_once('.')?;
        Self::ALL.into_iter().find(|s| s.suffix() == suffix)
    }
}

/// Set prefix of a `<prefix>.<suffix>.wav` file name (text before the first '.')
pub fn input_prefix(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    name.split_once('.').map(|(prefix, _)| prefix)
}
