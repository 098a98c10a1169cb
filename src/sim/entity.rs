//! Static level tiles: obstacles, hazards, exits
//!
//! Every tile occupies one full grid cell, but what part of the cell
//! actually interacts with the avatar depends on the kind. The shrink
//! rules live in `Tile::collider` so the rest of the sim only ever deals
//! in plain rectangles.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// What a static cell does to the avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    /// Solid wall or platform cell
    Obstacle,
    /// Spikes, lethal in the lower half of the cell
    Hazard,
    /// Level exit, captures the avatar center in an inner window
    Exit,
}

/// One static cell of a layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    /// Full cell footprint
    pub rect: Rect,
}

impl Tile {
    pub fn new(kind: TileKind, rect: Rect) -> Self {
        Self { kind, rect }
    }

    /// Effective interaction region for this tile's kind:
    /// - Obstacle: the whole cell.
    /// - Hazard: the band from the cell midline down to the cell bottom.
    ///   Spike tips reach the midline; grazing the upper half is safe.
    /// - Exit: the half-size window centered in the cell. The avatar's
    ///   center point has to enter it, so merely clipping the cell edge
    ///   does not finish a layout.
    pub fn collider(&self) -> Rect {
        match self.kind {
            TileKind::Obstacle => self.rect,
            TileKind::Hazard => Rect::new(
                Vec2::new(self.rect.center.x, self.rect.center.y + self.rect.half.y / 2.0),
                Vec2::new(self.rect.half.x, self.rect.half.y / 2.0),
            ),
            TileKind::Exit => Rect::new(self.rect.center, self.rect.half / 2.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CELL_SIZE;

    fn cell(kind: TileKind) -> Tile {
        Tile::new(kind, Rect::square(Vec2::new(75.0, 75.0), CELL_SIZE))
    }

    #[test]
    fn test_obstacle_collider_is_full_cell() {
        let tile = cell(TileKind::Obstacle);
        assert_eq!(tile.collider(), tile.rect);
    }

    #[test]
    fn test_hazard_collider_is_lower_half_band() {
        let band = cell(TileKind::Hazard).collider();
        assert_eq!(band.left(), 50.0);
        assert_eq!(band.right(), 100.0);
        // Lethal from the cell midline down to the cell bottom
        assert_eq!(band.top(), 75.0);
        assert_eq!(band.bottom(), 100.0);
    }

    #[test]
    fn test_exit_collider_is_inner_window() {
        let window = cell(TileKind::Exit).collider();
        assert_eq!(window.left(), 62.5);
        assert_eq!(window.right(), 87.5);
        assert_eq!(window.top(), 62.5);
        assert_eq!(window.bottom(), 87.5);
    }
}
