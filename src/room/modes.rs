//! Theoretical modal frequencies of a rigid-walled rectangular room.
//!
//! f(nx, ny, nz) = c/2 · sqrt((nx/L)² + (ny/W)² + (nz/H)²)

use glam::DVec3;
use serde::Serialize;

use super::RoomDimensions;

/// Speed of sound used by the simulations (m/s)
pub const DEFAULT_SPEED_OF_SOUND_M_PER_S: f64 = 340.0;

/// Upper bound on index triples visited by [`room_modes`]
/// 1e6 ≈ a 5.56 x 3.97 x 2.81 m room up to ~4.2 kHz
pub const MAX_MODE_CANDIDATES: u64 = 1_000_000;

/// Mode classification by the number of non-zero indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeKind {
    /// One non-zero index: standing wave between two opposite walls
    Axial,
    /// Two non-zero indices
    Tangential,
    /// All three indices non-zero
    Oblique,
}

impl ModeKind {
    fn from_indices(indices: [u32; 3]) -> Option<Self> {
        match indices.iter().filter(|&&n| n != 0).count() {
            1 => Some(Self::Axial),
            2 => Some(Self::Tangential),
            3 => Some(Self::Oblique),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Axial => "axial",
            Self::Tangential => "tangential",
            Self::Oblique => "oblique",
        }
    }
}

/// One resonant mode of the room
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoomMode {
    /// (nx, ny, nz) along length, width, height
    pub indices: [u32; 3],
    pub frequency_hz: f64,
    pub kind: ModeKind,
}

/// Highest index per axis whose axial mode stays in band
fn axis_index_limits(room: &RoomDimensions, max_frequency_hz: f64, speed_of_sound: f64) -> DVec3 {
    (2.0 * max_frequency_hz * room.extent() / speed_of_sound)
        .floor()
        .max(DVec3::ZERO)
}

/// Number of index triples [`room_modes`] has to visit (saturating)
pub fn mode_candidate_count(room: &RoomDimensions, max_frequency_hz: f64, speed_of_sound: f64) -> u64 {
    let limits = axis_index_limits(room, max_frequency_hz, speed_of_sound) + DVec3::ONE;
    limits.element_product() as u64
}

/// All modes with frequency in (0, max_frequency_hz], ascending
///
/// Ties are ordered by index triple so the result is deterministic.
/// Fails when the band would need more than [`MAX_MODE_CANDIDATES`] triples.
pub fn room_modes(
    room: &RoomDimensions,
    max_frequency_hz: f64,
    speed_of_sound: f64,
) -> Result<Vec<RoomMode>, String> {
    let candidates = mode_candidate_count(room, max_frequency_hz, speed_of_sound);
    if candidates > MAX_MODE_CANDIDATES {
        return Err(format!(
            "{} Hz needs {} mode candidates, limit is {}",
            max_frequency_hz, candidates, MAX_MODE_CANDIDATES
        ));
    }

    let extent = room.extent();
    let half_c = speed_of_sound / 2.0;

    let limits = axis_index_limits(room, max_frequency_hz, speed_of_sound);
    let (nx_max, ny_max, nz_max) = (limits.x as u32, limits.y as u32, limits.z as u32);

    let mut modes = Vec::new();
    for nx in 0..=nx_max {
        for ny in 0..=ny_max {
            for nz in 0..=nz_max {
                let indices = [nx, ny, nz];
                let Some(kind) = ModeKind::from_indices(indices) else {
                    continue; // (0, 0, 0) is not a mode
                };

                let wavenumbers = DVec3::new(nx as f64, ny as f64, nz as f64) / extent;
                let frequency_hz = half_c * wavenumbers.length();

                if frequency_hz <= max_frequency_hz {
                    modes.push(RoomMode {
                        indices,
                        frequency_hz,
                        kind,
                    });
                }
            }
        }
    }

    modes.sort_by(|a, b| {
        a.frequency_hz
            .total_cmp(&b.frequency_hz)
            .then_with(|| a.indices.cmp(&b.indices))
    });
    Ok(modes)
}
