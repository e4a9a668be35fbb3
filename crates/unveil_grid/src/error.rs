//! Orchestrator errors
//!
//! Configuration problems are detected synchronously, before any
//! animation state is mutated; a failed call leaves the run state
//! untouched so the caller can fix the configuration and retry.

use unveil_core::geometry::LayoutError;
use unveil_image::ImageError;

#[derive(Debug, thiserror::Error)]
pub enum RevealError {
    #[error("no drawing surface attached")]
    MissingSurface,

    #[error("no image attached")]
    MissingImage,

    #[error("draw requires at least one tile position")]
    NoTilePositions,

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Image(#[from] ImageError),
}
