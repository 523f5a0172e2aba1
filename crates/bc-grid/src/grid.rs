//! The immutable tile map.
//!
//! # Data layout
//!
//! Tiles are stored row-major in a single `Vec<Tile>`:
//!
//! ```text
//! tiles[row * cols + col]
//! ```
//!
//! Coordinates are signed ([`Cell`]) so that neighbour lookups at the map edge
//! need no special casing: anything outside `0..rows × 0..cols` is
//! [`Tile::None`].

use std::fmt;

use bc_core::{Cell, CityConfig, DirectionSet};

use crate::{GridError, GridResult};

// ── Tile ──────────────────────────────────────────────────────────────────────

/// Classification of one grid cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// Outside the map.
    #[default]
    None,
    Street,
    House,
}

impl Tile {
    /// Glyph used by [`CityGrid::from_ascii`] and the `Display` impl.
    pub fn glyph(self) -> char {
        match self {
            Tile::None   => ' ',
            Tile::Street => '#',
            Tile::House  => '.',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tile::None   => "none",
            Tile::Street => "street",
            Tile::House  => "house",
        }
    }
}

// ── CityGrid ──────────────────────────────────────────────────────────────────

/// Rectangular tile map.  Built once, never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CityGrid {
    rows:  usize,
    cols:  usize,
    tiles: Vec<Tile>,
}

impl CityGrid {
    /// Generate the block lattice: `num_blocks × num_blocks` blocks of
    /// `block_size × block_size` houses, separated by one-tile streets and
    /// framed by a street on every edge.
    ///
    /// A cell is Street iff its row or column is a multiple of
    /// `block_size + 1`.
    pub fn blocks(num_blocks: usize, block_size: usize) -> Self {
        let period = block_size + 1;
        let size   = num_blocks * period + 1;
        let tiles  = (0..size * size)
            .map(|i| {
                let (row, col) = (i / size, i % size);
                if row % period == 0 || col % period == 0 {
                    Tile::Street
                } else {
                    Tile::House
                }
            })
            .collect();
        Self { rows: size, cols: size, tiles }
    }

    /// Validate `config` and generate its block lattice.
    pub fn from_config(config: &CityConfig) -> GridResult<Self> {
        config.validate()?;
        Ok(Self::blocks(config.num_blocks, config.block_size))
    }

    /// Parse a map drawn with `#` (Street) and `.` (House).
    ///
    /// Leading/trailing whitespace on each line and blank lines are ignored,
    /// so maps can be written as indented string literals.
    pub fn from_ascii(text: &str) -> GridResult<Self> {
        let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let Some(first) = lines.first() else {
            return Err(GridError::Empty);
        };
        let cols = first.chars().count();

        let mut tiles = Vec::with_capacity(lines.len() * cols);
        for (line, text) in lines.iter().enumerate() {
            let got = text.chars().count();
            if got != cols {
                return Err(GridError::RaggedRow { line, expected: cols, got });
            }
            for (column, glyph) in text.chars().enumerate() {
                let tile = match glyph {
                    '#' => Tile::Street,
                    '.' => Tile::House,
                    _   => return Err(GridError::UnknownGlyph { glyph, line, column }),
                };
                tiles.push(tile);
            }
        }

        Ok(Self { rows: lines.len(), cols, tiles })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows
            && (cell.col as usize) < self.cols
    }

    /// Offset that centres the grid on the world origin, `(x, z)`.
    ///
    /// Tile `(row, col)` sits at world `(col, row)`; adding this offset puts
    /// the middle of the map at `(0, 0)`.
    pub fn world_origin(&self) -> (f64, f64) {
        (
            -(self.cols as f64 - 1.0) / 2.0,
            -(self.rows as f64 - 1.0) / 2.0,
        )
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Tile at `(row, col)`; [`Tile::None`] for any out-of-range coordinate.
    #[inline]
    pub fn tile_at(&self, row: i32, col: i32) -> Tile {
        self.tile(Cell::new(row, col))
    }

    #[inline]
    pub fn tile(&self, cell: Cell) -> Tile {
        if !self.contains(cell) {
            return Tile::None;
        }
        self.tiles[cell.row as usize * self.cols + cell.col as usize]
    }

    #[inline]
    pub fn is_street(&self, cell: Cell) -> bool {
        self.tile(cell) == Tile::Street
    }

    /// Headings from `cell` whose neighbour is Street.  The set's bits are the
    /// adjacency mask (N=1, E=2, S=4, W=8).
    pub fn street_neighbors(&self, cell: Cell) -> DirectionSet {
        cell.neighbors()
            .into_iter()
            .filter(|&(_, n)| self.is_street(n))
            .map(|(d, _)| d)
            .collect()
    }

    /// Every in-bounds cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols;
        (0..self.rows * cols).map(move |i| Cell::new((i / cols) as i32, (i % cols) as i32))
    }

    pub fn street_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(|&c| self.is_street(c))
    }

    pub fn street_count(&self) -> usize {
        self.tiles.iter().filter(|&&t| t == Tile::Street).count()
    }
}

impl fmt::Display for CityGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.cols.max(1)) {
            for tile in row {
                write!(f, "{}", tile.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
