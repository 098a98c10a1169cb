//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only, no clock reads
//! - No I/O and no platform dependencies
//! - Stable iteration order (tiles in authoring order)

pub mod avatar;
pub mod collision;
pub mod entity;
pub mod rect;
pub mod state;
pub mod tick;

pub use avatar::{Avatar, Tint};
pub use collision::{impaled, reached_exit, resolve_obstacle};
pub use entity::{Tile, TileKind};
pub use rect::{Bounds, Rect};
pub use state::{Layout, Level};
pub use tick::{StepOutcome, TickInput, TickReport, step_layout, tick};
