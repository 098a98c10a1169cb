//! Avatar physics: gravity, motion integration, edge clamping
//!
//! Velocities are in units per tick and +y points down, so gravity is a
//! positive increment and jumping is a negative impulse. The avatar is a
//! square; only `pos`, `vel` and `in_air` change after construction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::{Bounds, Rect};
use crate::consts::BORDER;
use crate::tuning::Tuning;

/// Cosmetic tag telling shells which layout an avatar belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    /// Main layout
    Light,
    /// Alternate layout
    Dark,
}

/// The player-driven square, one per layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    /// Center position
    pub pos: Vec2,
    /// Velocity in units per tick
    pub vel: Vec2,
    /// Airborne flag; gates jumping
    pub in_air: bool,
    tint: Tint,
    size: f32,
    spawn: Vec2,
    run_speed: f32,
    jump_impulse: f32,
    gravity: f32,
    terminal_velocity: f32,
}

impl Avatar {
    /// Build an avatar at its spawn point, grounded and at rest.
    ///
    /// Movement numbers are copied out of `tuning`, so later edits to a
    /// `Tuning` never affect a live avatar. Panics on a non-finite spawn
    /// or a degenerate size.
    pub fn new(spawn: Vec2, size: f32, tint: Tint, tuning: &Tuning) -> Self {
        assert!(spawn.is_finite(), "avatar spawn must be finite");
        assert!(
            size.is_finite() && size > 0.0,
            "avatar size must be positive"
        );
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            in_air: false,
            tint,
            size,
            spawn,
            run_speed: tuning.run_speed,
            jump_impulse: tuning.jump_impulse,
            gravity: tuning.gravity,
            terminal_velocity: tuning.terminal_velocity,
        }
    }

    /// Footprint at the current position
    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }

    /// Half of the side length
    #[inline]
    pub fn half(&self) -> f32 {
        self.size / 2.0
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn spawn(&self) -> Vec2 {
        self.spawn
    }

    pub fn tint(&self) -> Tint {
        self.tint
    }

    pub fn run_speed(&self) -> f32 {
        self.run_speed
    }

    pub fn jump_impulse(&self) -> f32 {
        self.jump_impulse
    }

    /// Pull downward once per tick, capped at terminal velocity.
    ///
    /// Always marks the avatar airborne; the floor clamp and the landing
    /// branch of the resolver re-ground it later in the same tick. An
    /// avatar that walks off a ledge therefore loses its jump exactly one
    /// tick after its feet leave the ground.
    pub fn apply_gravity(&mut self) {
        if self.vel.y < self.terminal_velocity {
            self.vel.y += self.gravity;
        }
        self.in_air = true;
    }

    /// Advance by one tick of velocity, then clamp against the playfield
    /// edges. Side walls zero horizontal velocity. The floor sits one
    /// boundary-line width above the bounds bottom; hitting it zeroes
    /// vertical velocity and grounds the avatar. There is no ceiling, a
    /// jump may carry the avatar above the top edge.
    pub fn integrate(&mut self, bounds: Bounds) {
        self.pos += self.vel;

        let half = self.half();
        if self.pos.x + half > bounds.width {
            self.pos.x = bounds.width - half;
            self.vel.x = 0.0;
        }
        if self.pos.x - half < 0.0 {
            self.pos.x = half;
            self.vel.x = 0.0;
        }
        if self.pos.y + half + BORDER >= bounds.height {
            self.vel.y = 0.0;
            self.pos.y = bounds.height - half - BORDER;
            self.in_air = false;
        }
    }

    /// Back to spawn with zeroed velocity. `in_air` is left as-is; the
    /// next tick's gravity and landing passes settle it.
    pub fn respawn(&mut self) {
        self.pos = self.spawn;
        self.vel = Vec2::ZERO;
    }
}
