//! Surface and tile geometry

use serde::{Deserialize, Serialize};

/// Pixel size of a drawing surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Top-left origin of one tile on the surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TilePosition {
    pub x: f32,
    pub y: f32,
}

impl TilePosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Error deriving a grid layout from a surface
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LayoutError {
    #[error("tile dimensions must be positive, got {width}x{height}")]
    InvalidTileSize { width: f32, height: f32 },
    #[error("surface {surface_width}x{surface_height} yields an empty grid for {tile_width}x{tile_height} tiles")]
    EmptyGrid {
        surface_width: f32,
        surface_height: f32,
        tile_width: f32,
        tile_height: f32,
    },
}

/// Grid decomposition of a surface into equally sized tiles
///
/// Divisions are floored: a partial tile at the right or bottom edge is
/// dropped rather than scheduled, so `total` always matches the number of
/// whole tiles the surface holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    pub cols: u32,
    pub rows: u32,
    pub total: u32,
}

impl GridLayout {
    /// Derive the layout for a surface and tile size.
    pub fn derive(size: SurfaceSize, tile_width: f32, tile_height: f32) -> Result<Self, LayoutError> {
        if tile_width <= 0.0 || tile_height <= 0.0 {
            return Err(LayoutError::InvalidTileSize {
                width: tile_width,
                height: tile_height,
            });
        }

        let cols = (size.width / tile_width).floor() as u32;
        let rows = (size.height / tile_height).floor() as u32;
        if cols == 0 || rows == 0 {
            return Err(LayoutError::EmptyGrid {
                surface_width: size.width,
                surface_height: size.height,
                tile_width,
                tile_height,
            });
        }

        Ok(Self {
            cols,
            rows,
            total: cols * rows,
        })
    }

    /// Tile positions in row-major order, one per grid cell.
    pub fn positions(&self, tile_width: f32, tile_height: f32) -> Vec<TilePosition> {
        let mut out = Vec::with_capacity(self.total as usize);
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.push(TilePosition::new(
                    col as f32 * tile_width,
                    row as f32 * tile_height,
                ));
            }
        }
        out
    }
}
