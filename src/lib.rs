//! room-modal library - modal analysis of simulated room impulse responses

pub mod analysis;
pub mod audio;
pub mod cli;
pub mod driver;
pub mod error;
pub mod params;
pub mod plot;
pub mod room;
