//! Text-grid level loading
//!
//! A level is a pair of layout files, `level<N>.txt` for the main layout
//! and `level<N>a.txt` for the alternate. Each file is a character grid
//! with the avatar spawn on the last line:
//!
//! ```text
//! ##########
//! #    ^   #
//! #  ###  @#
//! ##########
//! 1, 1
//! ```
//!
//! `#` is a solid cell, `^` spikes, `@` an exit; anything else is empty.
//! One character is one cell. The spawn line is `x, y` in cell
//! coordinates with y counted upward from the bottom grid row, and
//! fractional coordinates are allowed. Rows may be shorter than the first
//! row (the tail is empty cells) but never longer.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::consts::{BORDER, CELL_SIZE};
use crate::sim::{Avatar, Bounds, Layout, Level, Rect, Tile, TileKind, Tint};
use crate::tuning::Tuning;
use crate::{cell_center, row_from_bottom};

/// Why a level failed to load
#[derive(Debug)]
pub enum LevelError {
    /// Reading the layout file failed
    Io { path: PathBuf, source: io::Error },
    /// The first grid row has no cells
    EmptyGrid,
    /// The file needs at least one grid row plus the spawn line
    MissingSpawn,
    /// The spawn line is not two numbers
    InvalidSpawn { line: String },
    /// A grid row is wider than the first row
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// No exit cell anywhere in the grid
    NoExit,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            LevelError::EmptyGrid => write!(f, "level grid has no cells in its first row"),
            LevelError::MissingSpawn => {
                write!(f, "level file needs at least one grid row and a spawn line")
            }
            LevelError::InvalidSpawn { line } => {
                write!(f, "spawn line must be two numbers `x, y`, got {:?}", line)
            }
            LevelError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid row {} is {} cells wide, wider than the first row ({})",
                row, found, expected
            ),
            LevelError::NoExit => write!(f, "level grid has no exit cell"),
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Parse one layout grid. `tint` tags the avatar for shells.
pub fn parse_layout(text: &str, tint: Tint, tuning: &Tuning) -> Result<Layout, LevelError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < 2 {
        return Err(LevelError::MissingSpawn);
    }
    let (grid, spawn_line) = lines.split_at(lines.len() - 1);

    let width_cells = grid[0].trim_end().chars().count();
    if width_cells == 0 {
        return Err(LevelError::EmptyGrid);
    }
    let height_cells = grid.len();

    let mut tiles = Vec::new();
    for (row, line) in grid.iter().enumerate() {
        let line = line.trim_end();
        let found = line.chars().count();
        if found > width_cells {
            return Err(LevelError::RaggedRow {
                row,
                expected: width_cells,
                found,
            });
        }
        for (col, ch) in line.chars().enumerate() {
            let kind = match ch {
                '#' => TileKind::Obstacle,
                '^' => TileKind::Hazard,
                '@' => TileKind::Exit,
                _ => continue,
            };
            let center = cell_center(col as f32, row as f32);
            tiles.push(Tile::new(kind, Rect::square(center, CELL_SIZE)));
        }
    }

    if !tiles.iter().any(|t| t.kind == TileKind::Exit) {
        return Err(LevelError::NoExit);
    }

    let (spawn_x, spawn_y) = parse_spawn(spawn_line[0])?;
    let spawn = cell_center(spawn_x, row_from_bottom(height_cells, spawn_y));

    let bounds = Bounds {
        width: CELL_SIZE * width_cells as f32 + BORDER,
        height: CELL_SIZE * height_cells as f32 + BORDER,
    };

    let avatar = Avatar::new(spawn, CELL_SIZE, tint, tuning);
    Ok(Layout::new(avatar, tiles, bounds))
}

/// Spawn line: exactly two comma-separated finite numbers
fn parse_spawn(line: &str) -> Result<(f32, f32), LevelError> {
    let invalid = || LevelError::InvalidSpawn {
        line: line.to_string(),
    };

    let mut parts = line.split(',');
    let x: f32 = parts
        .next()
        .ok_or_else(invalid)?
        .trim()
        .parse()
        .map_err(|_| invalid())?;
    let y: f32 = parts
        .next()
        .ok_or_else(invalid)?
        .trim()
        .parse()
        .map_err(|_| invalid())?;
    if parts.next().is_some() || !x.is_finite() || !y.is_finite() {
        return Err(invalid());
    }
    Ok((x, y))
}

/// Read and parse one layout file
pub fn load_layout(path: &Path, tint: Tint, tuning: &Tuning) -> Result<Layout, LevelError> {
    let text = fs::read_to_string(path).map_err(|source| LevelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let layout = parse_layout(&text, tint, tuning)?;
    log::info!(
        "loaded {}: {} obstacles, {} hazards, {} exits, {}x{} bounds",
        path.display(),
        layout.obstacles().len(),
        layout.hazards().len(),
        layout.exits().len(),
        layout.bounds().width,
        layout.bounds().height,
    );
    Ok(layout)
}

/// Load a level pair from a directory
pub fn load_level(dir: &Path, number: u32, tuning: &Tuning) -> Result<Level, LevelError> {
    let main = load_layout(
        &dir.join(format!("level{}.txt", number)),
        Tint::Light,
        tuning,
    )?;
    let alt = load_layout(
        &dir.join(format!("level{}a.txt", number)),
        Tint::Dark,
        tuning,
    )?;
    Ok(Level::new(main, alt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn parse(text: &str) -> Result<Layout, LevelError> {
        parse_layout(text, Tint::Light, &Tuning::default())
    }

    #[test]
    fn test_parses_kinds_at_cell_centers() {
        let layout = parse("#^@\n0, 0").unwrap();
        assert_eq!(layout.obstacles().len(), 1);
        assert_eq!(layout.hazards().len(), 1);
        assert_eq!(layout.exits().len(), 1);
        assert_eq!(layout.obstacles()[0].rect.center, Vec2::new(25.0, 25.0));
        assert_eq!(layout.hazards()[0].rect.center, Vec2::new(75.0, 25.0));
        assert_eq!(layout.exits()[0].rect.center, Vec2::new(125.0, 25.0));
    }

    #[test]
    fn test_bounds_padded_by_border() {
        let layout = parse("#@\n0, 0").unwrap();
        assert_eq!(layout.bounds().width, 101.0);
        assert_eq!(layout.bounds().height, 51.0);
    }

    #[test]
    fn test_spawn_counts_rows_from_bottom() {
        let layout = parse("@##\n###\n###\n1, 1").unwrap();
        assert_eq!(layout.avatar.pos, Vec2::new(75.0, 75.0));
    }

    #[test]
    fn test_fractional_spawn_lands_between_cells() {
        let layout = parse("@##\n###\n0.5, 0").unwrap();
        assert_eq!(layout.avatar.pos, Vec2::new(50.0, 75.0));
    }

    #[test]
    fn test_short_rows_read_as_empty_tail() {
        let layout = parse("####@\n##\n\n2, 0").unwrap();
        // Row 1 contributes two cells, row 2 none
        assert_eq!(layout.obstacles().len(), 6);
        assert_eq!(layout.bounds().height, 151.0);
    }

    #[test]
    fn test_trailing_whitespace_is_not_width() {
        let layout = parse("#@   \n##\n0, 0").unwrap();
        assert_eq!(layout.bounds().width, 101.0);
    }

    #[test]
    fn test_overlong_row_is_rejected() {
        let err = parse("###\n####@\n0, 0").unwrap_err();
        assert!(matches!(
            err,
            LevelError::RaggedRow {
                row: 1,
                expected: 3,
                found: 5,
            }
        ));
    }

    #[test]
    fn test_single_line_is_missing_spawn() {
        assert!(matches!(parse("###"), Err(LevelError::MissingSpawn)));
    }

    #[test]
    fn test_blank_first_row_is_empty_grid() {
        assert!(matches!(parse("   \n#@#\n0, 0"), Err(LevelError::EmptyGrid)));
    }

    #[test]
    fn test_bad_spawn_lines_are_rejected() {
        for bad in ["1", "a, b", "1, 2, 3", "nan, 0", " "] {
            let text = format!("#@\n{}", bad);
            assert!(
                matches!(parse(&text), Err(LevelError::InvalidSpawn { .. })),
                "accepted spawn line {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_grid_without_exit_is_rejected() {
        assert!(matches!(parse("##^\n0, 0"), Err(LevelError::NoExit)));
    }
}
