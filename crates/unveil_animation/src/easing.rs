//! Easing functions
//!
//! A transition shape maps an elapsed-time fraction in [0, 1] to an eased
//! fraction in [0, 1], monotone and exact at both endpoints.

use serde::{Deserialize, Serialize};

/// Transition shape selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    /// Power curve with a caller-chosen exponent (ease-in flavored)
    Pow(f32),
}

impl Easing {
    /// Apply the shape to a progress value in [0, 1].
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInQuad => ease_in(t, 2),
            Easing::EaseOutQuad => ease_out(t, 2),
            Easing::EaseInOutQuad => ease_in_out(t, 2),
            Easing::EaseInCubic => ease_in(t, 3),
            Easing::EaseOutCubic => ease_out(t, 3),
            Easing::EaseInOutCubic => ease_in_out(t, 3),
            Easing::Pow(exp) => t.powf(exp.max(f32::EPSILON)),
        }
    }
}

fn ease_in(t: f32, power: i32) -> f32 {
    t.powi(power)
}

fn ease_out(t: f32, power: i32) -> f32 {
    1.0 - (1.0 - t).powi(power)
}

fn ease_in_out(t: f32, power: i32) -> f32 {
    if t < 0.5 {
        ease_in(t * 2.0, power) / 2.0
    } else {
        0.5 + ease_out(t * 2.0 - 1.0, power) / 2.0
    }
}
