//! Multi-property tweens
//!
//! A `PropertyTween` advances several named numeric properties in lockstep
//! over one timed run. Each tick interpolates every property linearly in
//! the eased-fraction domain and yields the full property map as one
//! frame, so a paint callback sees every animated value for that frame
//! atomically.

use rustc_hash::FxHashMap;

use crate::easing::Easing;

/// Reference tick rate for tween runs
pub const DEFAULT_FPS: u32 = 30;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TweenError {
    /// A property spec was neither a single value nor a `[from, to]` pair.
    #[error("property value must be a single number or a [from, to] pair, got {len} values")]
    InvalidPropertyInput { len: usize },
}

/// Inclusive value range for one animated property
///
/// Both fields are always set: a single-value input produces a degenerate
/// range with `from == to` (a motionless property that still reports a
/// value every frame).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropertyRange {
    pub from: f32,
    pub to: f32,
}

impl PropertyRange {
    pub fn new(from: f32, to: f32) -> Self {
        Self { from, to }
    }

    fn sample(&self, eased: f32) -> f32 {
        self.from + (self.to - self.from) * eased
    }
}

/// Caller-facing property specification: one value or a `[from, to]` pair
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PropertySpec {
    Value(f32),
    Range(f32, f32),
}

impl PropertySpec {
    /// Parse an untyped slice. Anything other than one or two values is
    /// rejected, not coerced.
    pub fn from_slice(values: &[f32]) -> Result<Self, TweenError> {
        match *values {
            [v] => Ok(Self::Value(v)),
            [from, to] => Ok(Self::Range(from, to)),
            _ => Err(TweenError::InvalidPropertyInput { len: values.len() }),
        }
    }

    /// Normalize into a range; a single value becomes `from == to`.
    pub fn resolve(self) -> PropertyRange {
        match self {
            Self::Value(v) => PropertyRange::new(v, v),
            Self::Range(from, to) => PropertyRange::new(from, to),
        }
    }
}

impl From<f32> for PropertySpec {
    fn from(v: f32) -> Self {
        Self::Value(v)
    }
}

impl From<[f32; 2]> for PropertySpec {
    fn from([from, to]: [f32; 2]) -> Self {
        Self::Range(from, to)
    }
}

/// Named property specs handed to [`PropertyTween::start`]
#[derive(Clone, Debug, Default)]
pub struct TweenProps {
    specs: FxHashMap<String, PropertySpec>,
}

impl TweenProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add one property.
    pub fn set(mut self, name: impl Into<String>, spec: impl Into<PropertySpec>) -> Self {
        self.specs.insert(name.into(), spec.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    fn resolve(self) -> FxHashMap<String, PropertyRange> {
        self.specs
            .into_iter()
            .map(|(name, spec)| (name, spec.resolve()))
            .collect()
    }
}

/// Interpolated property values for one frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameValue {
    values: FxHashMap<String, f32>,
}

impl FrameValue {
    /// Value of a property, or `0.0` when nothing has been computed for
    /// it (explicit fallback, not an error).
    pub fn get(&self, name: &str) -> f32 {
        self.values.get(name).copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.values.iter().map(|(name, v)| (name.as_str(), *v))
    }
}

/// One computed frame, flagged when it is the run's final frame
#[derive(Clone, Debug)]
pub struct TweenFrame {
    pub frame: FrameValue,
    pub finished: bool,
}

/// A timed, eased, multi-property interpolation run
///
/// The tween owns its clock state but is advanced externally: a scheduler
/// calls [`tick`](Self::tick) with the frame delta. The start delay is
/// modeled as negative current time, so staggered runs need no separate
/// wait state.
#[derive(Clone, Debug)]
pub struct PropertyTween {
    duration_ms: f32,
    delay_ms: f32,
    fps: u32,
    easing: Easing,
    ranges: FxHashMap<String, PropertyRange>,
    value: FrameValue,
    current_time: f32,
    playing: bool,
    cancelled: bool,
    finished: bool,
}

impl PropertyTween {
    pub fn new(duration_ms: f32, easing: Easing) -> Self {
        Self {
            duration_ms: duration_ms.max(0.0),
            delay_ms: 0.0,
            fps: DEFAULT_FPS,
            easing,
            ranges: FxHashMap::default(),
            value: FrameValue::default(),
            current_time: 0.0,
            playing: false,
            cancelled: false,
            finished: false,
        }
    }

    /// Builder: delay before the run's active window opens.
    pub fn with_delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    /// Builder: target tick rate of the driving clock.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps.max(1);
        self
    }

    /// Begin a run over the given properties.
    ///
    /// A cancelled tween ignores the call entirely: the guard makes
    /// restarting a preempted run a no-op rather than an error.
    pub fn start(&mut self, props: TweenProps) -> &mut Self {
        if self.cancelled {
            tracing::debug!("start ignored: tween already cancelled");
            return self;
        }
        if props.is_empty() {
            tracing::debug!("start ignored: no properties supplied");
            return self;
        }

        self.ranges = props.resolve();
        self.value = FrameValue::default();
        self.current_time = -self.delay_ms;
        self.finished = false;
        self.playing = true;
        self
    }

    /// Advance the clock; returns the frame computed for this tick.
    ///
    /// Returns `None` while the tween is idle, paused, cancelled, or
    /// still inside its start delay. The final frame is computed exactly
    /// at progress 1.0 and flagged `finished`; no frames follow it.
    pub fn tick(&mut self, dt_ms: f32) -> Option<TweenFrame> {
        if !self.playing {
            return None;
        }

        self.current_time += dt_ms;
        if self.current_time < 0.0 {
            return None;
        }

        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            (self.current_time / self.duration_ms).clamp(0.0, 1.0)
        };
        let frame = self.compute(self.easing.apply(progress));

        let finished = self.current_time >= self.duration_ms;
        if finished {
            self.playing = false;
            self.finished = true;
        }

        Some(TweenFrame { frame, finished })
    }

    /// Interpolate every property at the given eased fraction and store
    /// the result as the current frame.
    fn compute(&mut self, eased: f32) -> FrameValue {
        let values = self
            .ranges
            .iter()
            .map(|(name, range)| (name.clone(), range.sample(eased)))
            .collect();
        self.value = FrameValue { values };
        self.value.clone()
    }

    /// Stop future ticks without losing accumulated progress.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Discard the run. Cancelled tweens never tick or start again.
    pub fn cancel(&mut self) {
        self.playing = false;
        self.cancelled = true;
    }

    /// The most recently computed frame (empty before the first tick, so
    /// every property reads as the `0.0` fallback).
    pub fn value(&self) -> &FrameValue {
        &self.value
    }

    /// Elapsed fraction of the active window, ignoring easing.
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return if self.finished { 1.0 } else { 0.0 };
        }
        (self.current_time / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    pub fn delay_ms(&self) -> f32 {
        self.delay_ms
    }

    /// Interval between ticks at the configured rate.
    pub fn frame_interval_ms(&self) -> f32 {
        1000.0 / self.fps as f32
    }
}
