//! Drawing surface abstraction
//!
//! The animation core only needs a clear-region primitive, bitmap blits,
//! and a size query; everything else about rendering lives behind this
//! trait.

use crate::geometry::SurfaceSize;

/// A decoded bitmap the surface can blit
pub trait Bitmap {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Raw RGBA8 pixels, row-major, 4 bytes per pixel.
    fn pixels(&self) -> &[u8];
}

/// A 2D target the reveal paints onto
pub trait DrawSurface {
    /// Pixel size of the surface, read once when it is attached.
    fn size(&self) -> SurfaceSize;

    /// Clear a rectangle back to the surface background.
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Blit a whole bitmap with its top-left corner at (dx, dy).
    fn draw_bitmap(&mut self, bitmap: &dyn Bitmap, dx: f32, dy: f32);

    /// Blit the (sx, sy, sw, sh) region of a bitmap to (dx, dy).
    fn draw_bitmap_region(
        &mut self,
        bitmap: &dyn Bitmap,
        sx: f32,
        sy: f32,
        sw: f32,
        sh: f32,
        dx: f32,
        dy: f32,
    );
}
