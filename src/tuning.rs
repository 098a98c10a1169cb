//! Data-driven movement balance
//!
//! Defaults mirror the `consts` module, so the stock game needs no file
//! at all; a JSON file can override individual numbers for playtesting.
//! Avatars copy these values at construction, which means edits only
//! apply to levels loaded afterwards.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{GRAVITY, JUMP_IMPULSE, RUN_SPEED, TERMINAL_VELOCITY};

/// Movement numbers, all in units per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Horizontal run speed
    pub run_speed: f32,
    /// Jump impulse (negative is up)
    pub jump_impulse: f32,
    /// Added to vertical velocity each tick
    pub gravity: f32,
    /// Downward speed cap
    pub terminal_velocity: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            run_speed: RUN_SPEED,
            jump_impulse: JUMP_IMPULSE,
            gravity: GRAVITY,
            terminal_velocity: TERMINAL_VELOCITY,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file.
    ///
    /// A missing file is the normal case and falls back to defaults
    /// quietly; an unreadable or malformed file falls back with a warning
    /// so a typo never bricks the game.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("ignoring malformed tuning file {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no tuning file at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                log::warn!("could not read tuning file {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Write the current values as pretty JSON for hand editing
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}
