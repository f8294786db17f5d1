//! Rectangular room geometry and its theoretical resonant modes.

mod dimensions;
mod modes;

pub use dimensions::RoomDimensions;
pub use modes::{
    mode_candidate_count, room_modes, ModeKind, RoomMode, DEFAULT_SPEED_OF_SOUND_M_PER_S,
    MAX_MODE_CANDIDATES,
};
