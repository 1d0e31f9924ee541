//! Grid module - the terrain map
//!
//! The grid is a `width x height` rectangle of tiles stored as a flat,
//! row-major vector. Coordinates: `(x, y)` where x is the column (0 = left)
//! and y is the row (0 = top). A grid is created once and never resized.

use std::fmt;

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::types::{Position, Tile, MAX_MAP_CELLS};

/// Errors raised while constructing a map
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// Width or height is zero or negative
    #[error("invalid map dimensions {width}x{height}: width and height must be at least 1")]
    InvalidDimension { width: i64, height: i64 },

    /// Width times height exceeds [`MAX_MAP_CELLS`]
    #[error("map {width}x{height} is too large: at most {max} cells are supported")]
    TooLarge { width: i64, height: i64, max: usize },
}

/// Validate signed dimensions and convert them to cell counts.
pub fn checked_dimensions(width: i64, height: i64) -> Result<(usize, usize), MapError> {
    if width <= 0 || height <= 0 {
        return Err(MapError::InvalidDimension { width, height });
    }
    let too_large = MapError::TooLarge {
        width,
        height,
        max: MAX_MAP_CELLS,
    };
    let (Ok(w), Ok(h)) = (usize::try_from(width), usize::try_from(height)) else {
        return Err(too_large);
    };
    match w.checked_mul(h) {
        Some(cells) if cells <= MAX_MAP_CELLS => Ok((w, h)),
        _ => Err(too_large),
    }
}

/// Rectangular terrain map
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of tiles, row-major order (y * width + x)
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a grid with every cell set to `fill`
    pub fn filled(width: usize, height: usize, fill: Tile) -> Result<Self, MapError> {
        checked_dimensions(
            i64::try_from(width).unwrap_or(i64::MAX),
            i64::try_from(height).unwrap_or(i64::MAX),
        )?;
        Ok(Self {
            width,
            height,
            tiles: vec![fill; width * height],
        })
    }

    /// Build a grid from rows of tiles.
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, MapError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 || rows.iter().any(|row| row.len() != width) {
            return Err(MapError::InvalidDimension {
                width: width as i64,
                height: height as i64,
            });
        }
        Ok(Self {
            width,
            height,
            tiles: rows.into_iter().flatten().collect(),
        })
    }

    /// Wrap a row-major tile buffer whose dimensions were already validated
    pub(crate) fn from_tiles(width: usize, height: usize, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), width * height);
        Self {
            width,
            height,
            tiles,
        }
    }

    /// Parse a grid from tile glyphs, one line per row.
    ///
    /// Unknown glyphs are rejected as `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let rows = text
            .lines()
            .map(|line| line.chars().map(Tile::from_glyph).collect::<Option<Vec<_>>>())
            .collect::<Option<Vec<_>>>()?;
        Self::from_rows(rows).ok()
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at `(x, y)`, or `None` when out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Tile> {
        self.index(x, y).map(|idx| self.tiles[idx])
    }

    /// Set the tile at `(x, y)`. Returns false if out of bounds
    pub fn set(&mut self, x: usize, y: usize, tile: Tile) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.tiles[idx] = tile;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Clamp signed coordinates into the grid
    pub fn clamp(&self, x: i64, y: i64) -> Position {
        Position::new(
            x.clamp(0, self.width as i64 - 1) as usize,
            y.clamp(0, self.height as i64 - 1) as usize,
        )
    }

    /// Geometric center, `(width / 2, height / 2)`
    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    /// Tiles of the up-to-8 in-bounds neighbors of `(x, y)`.
    ///
    /// Edges do not wrap, so corner cells have 3 neighbors and a 1x1 grid
    /// has none.
    pub fn neighbors(&self, x: usize, y: usize) -> ArrayVec<Tile, 8> {
        let mut out = ArrayVec::new();
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if self.contains(nx, ny) {
                    out.push(self.tiles[ny as usize * self.width + nx as usize]);
                }
            }
        }
        out
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.tiles.chunks(self.width)
    }

    /// Iterate all cells in row-major order with their positions
    pub fn cells(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, tile)| (Position::new(i % self.width, i / self.width), *tile))
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Count of cells holding `tile`
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|t| **t == tile).count()
    }
}

/// Terrain glyphs only, one line per row, no trailing newline.
///
/// This is the inverse of [`Grid::parse`].
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for tile in row {
                write!(f, "{}", tile.glyph())?;
            }
        }
        Ok(())
    }
}
