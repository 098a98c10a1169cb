//! Positional collision resolution against solid cells
//!
//! The resolver runs after motion integration, once per obstacle in
//! authoring order. It is axis-separated: each pass temporarily backs the
//! other axis's motion out of the avatar position, so the overlap test
//! sees only the axis under consideration. The pass order and the
//! per-obstacle iteration order are part of the movement feel; a later
//! obstacle may undo an earlier snap. Do not reorder.

use super::avatar::Avatar;
use super::entity::{Tile, TileKind};
use super::rect::Rect;

/// Resolve the avatar against one solid cell.
///
/// The horizontal pass snaps the avatar flush to the side it ran into and
/// zeroes horizontal velocity; the vertical pass does the same for tops
/// and bottoms, and landing on a top re-grounds the avatar. A pass whose
/// velocity component is zero leaves position untouched even when the
/// rectangles overlap.
pub fn resolve_obstacle(avatar: &mut Avatar, obstacle: &Rect) {
    let half = avatar.half();

    // Horizontal pass: test as if only this tick's x motion had happened.
    avatar.pos.y -= avatar.vel.y;
    if avatar.rect().overlaps(obstacle) {
        if avatar.vel.x > 0.0 {
            avatar.pos.x = obstacle.left() - half;
        } else if avatar.vel.x < 0.0 {
            avatar.pos.x = obstacle.right() + half;
        }
        avatar.vel.x = 0.0;
    }
    avatar.pos.y += avatar.vel.y;

    // Vertical pass, same trick on the other axis. Uses the x velocity as
    // it stands now, zeroed or not.
    avatar.pos.x -= avatar.vel.x;
    if avatar.rect().overlaps(obstacle) {
        if avatar.vel.y > 0.0 {
            avatar.pos.y = obstacle.top() - half;
            avatar.in_air = false;
        }
        if avatar.vel.y < 0.0 {
            avatar.pos.y = obstacle.bottom() + half;
        }
        avatar.vel.y = 0.0;
    }
    avatar.pos.x += avatar.vel.x;
}

/// True if the avatar overlaps the lethal band of a spike cell
pub fn impaled(avatar: &Avatar, hazard: &Tile) -> bool {
    debug_assert_eq!(hazard.kind, TileKind::Hazard);
    avatar.rect().overlaps(&hazard.collider())
}

/// True if the avatar's center sits inside an exit's capture window
pub fn reached_exit(avatar: &Avatar, exit: &Tile) -> bool {
    debug_assert_eq!(exit.kind, TileKind::Exit);
    exit.collider().contains(avatar.pos)
}
