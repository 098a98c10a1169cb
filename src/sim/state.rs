//! Layout and level state
//!
//! Everything a shell needs to draw, persist or inspect lives here. Tiles
//! are fixed once a layout is built; during play only the avatars, the
//! beaten flags and the death counter change.

use serde::{Deserialize, Serialize};

use super::avatar::Avatar;
use super::entity::{Tile, TileKind};
use super::rect::Bounds;

/// One playable copy of a level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub avatar: Avatar,
    /// Set when the avatar reaches an exit; cleared only by a restart.
    /// A beaten layout freezes until then.
    pub beaten: bool,
    pub(crate) obstacles: Vec<Tile>,
    pub(crate) hazards: Vec<Tile>,
    pub(crate) exits: Vec<Tile>,
    bounds: Bounds,
}

impl Layout {
    /// Assemble a layout from its avatar and static tiles.
    ///
    /// Tiles are split by kind but keep their authoring order, which is
    /// the order the resolver walks obstacles in. Panics on degenerate
    /// bounds or when no exit tile exists; a layout without an exit can
    /// never be beaten.
    pub fn new(avatar: Avatar, tiles: Vec<Tile>, bounds: Bounds) -> Self {
        assert!(
            bounds.width > 0.0 && bounds.height > 0.0,
            "layout bounds must be positive"
        );

        let mut obstacles = Vec::new();
        let mut hazards = Vec::new();
        let mut exits = Vec::new();
        for tile in tiles {
            match tile.kind {
                TileKind::Obstacle => obstacles.push(tile),
                TileKind::Hazard => hazards.push(tile),
                TileKind::Exit => exits.push(tile),
            }
        }
        assert!(!exits.is_empty(), "layout has no exit");

        Self {
            avatar,
            beaten: false,
            obstacles,
            hazards,
            exits,
            bounds,
        }
    }

    pub fn obstacles(&self) -> &[Tile] {
        &self.obstacles
    }

    pub fn hazards(&self) -> &[Tile] {
        &self.hazards
    }

    pub fn exits(&self) -> &[Tile] {
        &self.exits
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// The full simulation unit: two layouts driven by one input stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub main: Layout,
    pub alt: Layout,
    /// Deaths since the level was opened
    pub deaths: u32,
}

impl Level {
    pub fn new(main: Layout, alt: Layout) -> Self {
        Self {
            main,
            alt,
            deaths: 0,
        }
    }

    /// Both avatars back to spawn, all progress voided. The death counter
    /// is untouched; it spans restarts.
    pub fn restart(&mut self) {
        self.main.beaten = false;
        self.alt.beaten = false;
        self.main.avatar.respawn();
        self.alt.avatar.respawn();
    }

    /// The level is done when both layouts are beaten
    pub fn completed(&self) -> bool {
        self.main.beaten && self.alt.beaten
    }
}
