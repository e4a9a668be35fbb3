//! Unveil Animation System
//!
//! Eased multi-property tweens and the cooperative scheduler that ticks
//! them.
//!
//! # Features
//!
//! - **Easing**: transition shapes mapping elapsed fraction to eased fraction
//! - **Property Tweens**: several named numeric properties advanced in
//!   lockstep over one timed run, with per-tick frame values
//! - **Scheduler**: a single frame clock driving every active tween, with
//!   slot-linked preemption for restarted runs

pub mod easing;
pub mod scheduler;
pub mod tween;

pub use easing::Easing;
pub use scheduler::{TweenId, TweenScheduler, TweenUpdate};
pub use tween::{
    FrameValue, PropertyRange, PropertySpec, PropertyTween, TweenError, TweenFrame, TweenProps,
    DEFAULT_FPS,
};
