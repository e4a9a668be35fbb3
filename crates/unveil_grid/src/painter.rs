//! Per-tile paint hook
//!
//! The orchestrator guarantees the painter runs once per tick per tile
//! with that tile's live frame; what actually gets painted is the
//! caller's business. `ShrinkPainter` is the stock implementation.

use unveil_animation::FrameValue;
use unveil_core::geometry::TilePosition;
use unveil_core::surface::{Bitmap, DrawSurface};

use crate::reveal::props;

/// Static facts about the tile being painted
#[derive(Clone, Copy, Debug)]
pub struct TileContext {
    /// Index of the tile in the order it was scheduled
    pub index: usize,
    /// Top-left origin of the tile on the surface
    pub position: TilePosition,
    pub tile_width: f32,
    pub tile_height: f32,
}

/// Paints one tile for one frame
pub trait TilePainter {
    fn paint(
        &mut self,
        surface: &mut dyn DrawSurface,
        image: &dyn Bitmap,
        tile: TileContext,
        frame: &FrameValue,
    );
}

impl<F> TilePainter for F
where
    F: FnMut(&mut dyn DrawSurface, &dyn Bitmap, TileContext, &FrameValue),
{
    fn paint(
        &mut self,
        surface: &mut dyn DrawSurface,
        image: &dyn Bitmap,
        tile: TileContext,
        frame: &FrameValue,
    ) {
        self(surface, image, tile, frame)
    }
}

/// Default painter: uncovers the tile's slice of the image, then repaints
/// the shrinking cover rect on top of it
///
/// The cover rect comes straight from the frame's `left`/`top`/`width`/
/// `height`, so as the tween runs the visible cover collapses toward the
/// tile center until the final frame leaves the image fully exposed.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShrinkPainter;

impl TilePainter for ShrinkPainter {
    fn paint(
        &mut self,
        surface: &mut dyn DrawSurface,
        image: &dyn Bitmap,
        tile: TileContext,
        frame: &FrameValue,
    ) {
        let p = tile.position;
        surface.draw_bitmap_region(
            image,
            p.x,
            p.y,
            tile.tile_width,
            tile.tile_height,
            p.x,
            p.y,
        );

        let cover_w = frame.get(props::WIDTH);
        let cover_h = frame.get(props::HEIGHT);
        if cover_w > 0.0 && cover_h > 0.0 {
            surface.clear_rect(frame.get(props::LEFT), frame.get(props::TOP), cover_w, cover_h);
        }
    }
}
