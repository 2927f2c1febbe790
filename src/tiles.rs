//! Tile entities and the code-matrix -> tile-matrix transform.
//!
//! The level file is row-major; rendering indexes (x, y). `to_grid_space`
//! transposes once at load time so `tile(x, y)` lines up with the pixel
//! math everywhere else.

use std::fmt;

use raylib::prelude::*;

use crate::codes::TileCodeRegistry;
use crate::direction::Direction;
use crate::error::GameError;
use crate::level::CodeMatrix;
use crate::textures::TextureAtlas;

/// One positioned, renderable cell. Position is fixed at load time; tiles
/// reference their texture by name and never own it.
pub struct Tile {
    pub name: String,
    pub direction: Direction,
    pub x: i32,
    pub y: i32,
}

impl Tile {
    pub fn code(&self) -> String {
        TileCodeRegistry::code_for(&self.name, self.direction)
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, atlas: &TextureAtlas) {
        // Variant presence is validated when the grid is built.
        if let Some(texture) = atlas.variant(&self.name, self.direction) {
            d.draw_texture(
                texture,
                self.x * crate::TILE_SIZE,
                self.y * crate::TILE_SIZE,
                Color::WHITE,
            );
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}@{},{}",
            self.name,
            self.direction.symbol(),
            self.x,
            self.y
        )
    }
}

/// Column-major grid of tiles: first index is the horizontal (column)
/// coordinate, second the vertical (row) coordinate.
pub struct TileGrid {
    tiles: Vec<Vec<Tile>>,
    width: usize,
    height: usize,
}

impl TileGrid {
    /// Transpose the row-major code matrix into grid space, resolving
    /// every code through the registry. Fails on the first unknown code;
    /// no partial grid is produced.
    pub fn to_grid_space(
        matrix: &CodeMatrix,
        registry: &TileCodeRegistry,
    ) -> Result<Self, GameError> {
        let nrows = matrix.len();
        let ncols = matrix.first().map_or(0, Vec::len);

        let mut tiles = Vec::with_capacity(ncols);
        for icol in 0..ncols {
            let mut column = Vec::with_capacity(nrows);
            for irow in 0..nrows {
                let code = registry.resolve(&matrix[irow][icol]);
                let (name, direction) =
                    registry
                        .lookup(code)
                        .ok_or_else(|| GameError::UnknownTileCode {
                            code: code.to_string(),
                            context: format!("row {}, column {} of the level grid", irow + 1, icol + 1),
                        })?;
                column.push(Tile {
                    name: name.to_string(),
                    direction,
                    x: icol as i32,
                    y: irow as i32,
                });
            }
            tiles.push(column);
        }

        Ok(Self {
            tiles,
            width: ncols,
            height: nrows,
        })
    }

    /// Tile at grid-space (x, y), or None outside the grid.
    pub fn tile(&self, x: i32, y: i32) -> Option<&Tile> {
        if x < 0 || y < 0 {
            return None;
        }
        self.tiles.get(x as usize).and_then(|col| col.get(y as usize))
    }

    /// Columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, atlas: &TextureAtlas) {
        for column in &self.tiles {
            for tile in column {
                tile.draw(d, atlas);
            }
        }
    }
}

/// Renders the grid back in file order, one padded code per cell.
impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for irow in 0..self.height {
            for icol in 0..self.width {
                write!(f, "{:>4}", self.tiles[icol][irow].code())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
