//! Twinfall - a split-layout puzzle platformer core
//!
//! One stream of input drives two avatars at once, each living in its own
//! copy of the level. Steering both onto their exits wins; spikes in either
//! copy restart the pair. This crate is the logic engine only - rendering,
//! audio and input devices belong to whatever shell embeds it.
//!
//! Core modules:
//! - `sim`: Deterministic fixed-tick simulation (geometry, avatar physics,
//!   collision resolution, level state)
//! - `level`: Text-grid level loading
//! - `records`: Per-level best-attempt persistence
//! - `tuning`: Data-driven movement balance

pub mod level;
pub mod records;
pub mod sim;
pub mod tuning;

pub use records::Records;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Grid cell size in world units; tiles and avatars are one cell square
    pub const CELL_SIZE: f32 = 50.0;
    /// Thickness of the boundary line shells draw around the playfield.
    /// Layout bounds are padded by it and the floor clamp sits on it.
    pub const BORDER: f32 = 1.0;

    /// Conventional shell tick interval. The sim itself never reads a
    /// clock; velocities below are all in units per tick.
    pub const TICK_INTERVAL_MS: u64 = 10;

    /// Horizontal run speed
    pub const RUN_SPEED: f32 = 4.0;
    /// Jump impulse (negative is up; y grows downward)
    pub const JUMP_IMPULSE: f32 = -14.0;
    /// Added to vertical velocity each tick while below terminal velocity
    pub const GRAVITY: f32 = 1.0;
    /// Downward speed cap
    pub const TERMINAL_VELOCITY: f32 = 10.0;
}

/// World-space center of grid cell (col, row)
///
/// Fractional coordinates land between cell centers; the spawn line of a
/// level file uses them.
#[inline]
pub fn cell_center(col: f32, row: f32) -> Vec2 {
    let cell = consts::CELL_SIZE;
    Vec2::new(cell * col + cell / 2.0, cell * row + cell / 2.0)
}

/// Convert a bottom-up grid row (0 = bottom row) to a top-down one
#[inline]
pub fn row_from_bottom(height_cells: usize, y: f32) -> f32 {
    height_cells as f32 - y - 1.0
}
