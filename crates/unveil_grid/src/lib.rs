//! Unveil Grid
//!
//! The grid reveal orchestrator: partitions a drawing surface into tiles,
//! runs one staggered shrink tween per tile, and reports aggregate
//! lifecycle through `drawStart` / `drawComplete` events.
//!
//! # Example
//!
//! ```ignore
//! use unveil_grid::{GridReveal, RevealOptions};
//!
//! let mut reveal = GridReveal::new(RevealOptions::default().with_tile_size(100.0, 100.0));
//! reveal.attach_surface(Box::new(surface))?;
//! reveal.attach_image("photo.png")?;
//!
//! let positions = reveal.layout().unwrap().positions(100.0, 100.0);
//! reveal.draw(&positions)?;
//! loop {
//!     reveal.tick(1000.0 / 30.0);
//!     if !reveal.is_drawing() { break; }
//! }
//! ```

mod error;
mod factory;
mod options;
mod painter;
mod reveal;

pub use error::RevealError;
pub use factory::factory;
pub use options::RevealOptions;
pub use painter::{ShrinkPainter, TileContext, TilePainter};
pub use reveal::{props, GridReveal, RevealState};
