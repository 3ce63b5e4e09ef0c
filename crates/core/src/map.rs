//! Map module - parses ASCII level files into a column-major character grid
//!
//! A map file is plain text, one row per line. After the line terminator is
//! stripped every row must have the same length. Rows are transposed into
//! columns so that the grid is indexed `[x][y]`, matching [`Coord`] semantics.
//!
//! Recognized characters:
//!
//! | Char | Meaning |
//! |------|---------|
//! | ` ` | grass |
//! | `W` | water |
//! | `T` | tree |
//! | `#` | wall |
//! | `-` | void |
//! | `X` | exit |
//! | `S` | player start |
//! | `K` | enemy spawn |

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::types::{Coord, ENEMY_MARKER, EXIT_MARKER, START_MARKER};

/// Every character a map may contain.
pub const MAP_CHARS: [char; 8] = [' ', 'W', 'T', '#', '-', EXIT_MARKER, START_MARKER, ENEMY_MARKER];

/// Errors raised while loading a map.
#[derive(Debug)]
pub enum MapFormatError {
    /// The file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The file has no rows.
    Empty,
    /// A row's length differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside [`MAP_CHARS`].
    UnknownChar { ch: char, at: Coord },
    /// No `S` marker.
    MissingStart,
    /// No `X` marker.
    MissingExit,
    /// More than one `S` or `X` marker while duplicates are rejected.
    DuplicateMarker { marker: char, count: usize },
}

impl fmt::Display for MapFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapFormatError::Io { path, source } => {
                write!(f, "cannot read map {}: {}", path.display(), source)
            }
            MapFormatError::Empty => write!(f, "map is empty"),
            MapFormatError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} cells, expected {} like the first row",
                row, found, expected
            ),
            MapFormatError::UnknownChar { ch, at } => {
                write!(f, "unknown map character {:?} at ({}, {})", ch, at.x, at.y)
            }
            MapFormatError::MissingStart => write!(f, "map has no start marker '{}'", START_MARKER),
            MapFormatError::MissingExit => write!(f, "map has no exit marker '{}'", EXIT_MARKER),
            MapFormatError::DuplicateMarker { marker, count } => {
                write!(f, "map has {} '{}' markers, expected exactly one", count, marker)
            }
        }
    }
}

impl std::error::Error for MapFormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapFormatError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// The parsed character grid, stored as columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMap {
    columns: Vec<Vec<char>>,
}

impl RawMap {
    /// Read and parse a map file.
    pub fn load(path: &Path) -> Result<Self, MapFormatError> {
        let text = std::fs::read_to_string(path).map_err(|source| MapFormatError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse map text.
    ///
    /// Line terminators (`\n` or `\r\n`) are stripped; trailing blank lines are
    /// ignored, any other length mismatch is an error.
    pub fn parse(text: &str) -> Result<Self, MapFormatError> {
        let mut rows: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }

        let Some(first) = rows.first() else {
            return Err(MapFormatError::Empty);
        };
        let width = first.len();
        if width == 0 {
            return Err(MapFormatError::Empty);
        }

        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MapFormatError::RaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            if let Some(x) = row.iter().position(|ch| !MAP_CHARS.contains(ch)) {
                return Err(MapFormatError::UnknownChar {
                    ch: row[x],
                    at: Coord::new(x as i32, y as i32),
                });
            }
        }

        // Transpose rows into columns.
        let columns: Vec<Vec<char>> = (0..width)
            .map(|x| rows.iter().map(|row| row[x]).collect())
            .collect();
        let map = Self { columns };

        if map.find_first(START_MARKER).is_none() {
            return Err(MapFormatError::MissingStart);
        }
        if map.find_first(EXIT_MARKER).is_none() {
            return Err(MapFormatError::MissingExit);
        }
        Ok(map)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn columns(&self) -> &[Vec<char>] {
        &self.columns
    }

    /// Character at `at`, or `None` outside the grid.
    pub fn get(&self, at: Coord) -> Option<char> {
        if at.x < 0 || at.y < 0 {
            return None;
        }
        self.columns
            .get(at.x as usize)
            .and_then(|col| col.get(at.y as usize))
            .copied()
    }

    /// All cells in column-major order (column 0 top to bottom, then column 1, ...).
    pub fn cells(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.columns.iter().enumerate().flat_map(|(x, col)| {
            col.iter()
                .enumerate()
                .map(move |(y, ch)| (Coord::new(x as i32, y as i32), *ch))
        })
    }

    /// First occurrence of `marker` in column-major order.
    pub fn find_first(&self, marker: char) -> Option<Coord> {
        self.cells().find(|(_, ch)| *ch == marker).map(|(at, _)| at)
    }

    /// Every occurrence of `marker` in column-major order.
    pub fn find_all(&self, marker: char) -> Vec<Coord> {
        self.cells()
            .filter(|(_, ch)| *ch == marker)
            .map(|(at, _)| at)
            .collect()
    }
}
