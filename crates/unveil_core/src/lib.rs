//! Unveil Core
//!
//! Shared types for the unveil reveal system.
//!
//! # Features
//!
//! - **Geometry**: surface sizes, tile positions, grid layout derivation
//! - **Surfaces**: the drawing-surface trait the animation core paints to
//! - **Events**: a minimal single-payload emitter for lifecycle signals

pub mod events;
pub mod geometry;
pub mod surface;

pub use events::Emitter;
pub use geometry::{GridLayout, LayoutError, SurfaceSize, TilePosition};
pub use surface::{Bitmap, DrawSurface};
