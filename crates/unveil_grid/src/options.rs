//! Reveal configuration

use serde::{Deserialize, Serialize};
use unveil_animation::Easing;

/// Options for a grid reveal
///
/// Tile dimensions have no usable default and must be set before a
/// surface is attached; everything else falls back to the reference
/// values (70ms stagger, 30ms base duration, 30fps clock).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealOptions {
    /// Stagger step between successive tiles, in milliseconds
    pub interval: f32,
    /// Base per-tile duration, in milliseconds
    pub duration: f32,
    /// Tile width in pixels
    pub tile_width: f32,
    /// Tile height in pixels
    pub tile_height: f32,
    /// Target tick rate of the driving frame clock
    pub fps: u32,
    /// Transition shape applied to every tile tween
    pub easing: Easing,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            interval: 70.0,
            duration: 30.0,
            tile_width: 0.0,
            tile_height: 0.0,
            fps: 30,
            easing: Easing::default(),
        }
    }
}

impl RevealOptions {
    /// Builder: tile dimensions.
    pub fn with_tile_size(mut self, width: f32, height: f32) -> Self {
        self.tile_width = width;
        self.tile_height = height;
        self
    }

    /// Builder: stagger step between tiles.
    pub fn with_interval(mut self, interval: f32) -> Self {
        self.interval = interval;
        self
    }

    /// Builder: base per-tile duration.
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Builder: frame clock rate.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps.max(1);
        self
    }

    /// Builder: transition shape.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Interval between ticks at the configured rate.
    pub fn frame_interval_ms(&self) -> f32 {
        1000.0 / self.fps as f32
    }
}
