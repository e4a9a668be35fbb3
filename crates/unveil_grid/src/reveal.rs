//! Grid reveal orchestrator
//!
//! Fans a reveal animation out across a set of tiles: one staggered
//! shrink tween per tile, aggregate completion tracked by a counter, and
//! lifecycle reported through `drawStart` / `drawComplete` events. All
//! ticking is cooperative - the embedding frame clock calls
//! [`GridReveal::tick`] once per frame and every callback runs
//! synchronously inside it.

use rustc_hash::FxHashMap;

use unveil_animation::{PropertyTween, TweenId, TweenProps, TweenScheduler};
use unveil_core::events::Emitter;
use unveil_core::geometry::{GridLayout, TilePosition};
use unveil_core::surface::DrawSurface;
use unveil_image::{ImageData, ImageSource};

use crate::error::RevealError;
use crate::options::RevealOptions;
use crate::painter::{ShrinkPainter, TileContext, TilePainter};

/// Property names every tile tween animates
pub mod props {
    pub const WIDTH: &str = "width";
    pub const HEIGHT: &str = "height";
    pub const TOP: &str = "top";
    pub const LEFT: &str = "left";
}

/// Lifecycle state of the orchestrator
///
/// `pause` is one-directional: a paused run can only be left through
/// `cancel` (or `redraw`, which cancels first).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Idle,
    Drawing,
    Paused,
}

/// Orchestrates a tiled reveal of a bitmap onto a drawing surface
pub struct GridReveal {
    options: RevealOptions,
    surface: Option<Box<dyn DrawSurface>>,
    layout: Option<GridLayout>,
    image: Option<ImageData>,
    scheduler: TweenScheduler,
    drawers: Vec<TweenId>,
    tiles: FxHashMap<TweenId, TileContext>,
    counter: u32,
    state: RevealState,
    painter: Box<dyn TilePainter>,
    draw_start: Emitter<()>,
    draw_complete: Emitter<dyn DrawSurface>,
}

impl GridReveal {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            surface: None,
            layout: None,
            image: None,
            scheduler: TweenScheduler::new(),
            drawers: Vec::new(),
            tiles: FxHashMap::default(),
            counter: 0,
            state: RevealState::Idle,
            painter: Box::new(ShrinkPainter),
            draw_start: Emitter::new(),
            draw_complete: Emitter::new(),
        }
    }

    /// Record the rendering target and derive the grid layout from its
    /// size and the configured tile dimensions.
    ///
    /// Fails without mutating any state when tile dimensions are
    /// non-positive or the floored grid would be empty.
    pub fn attach_surface(&mut self, surface: Box<dyn DrawSurface>) -> Result<(), RevealError> {
        let size = surface.size();
        let layout =
            GridLayout::derive(size, self.options.tile_width, self.options.tile_height)?;
        tracing::debug!(
            cols = layout.cols,
            rows = layout.rows,
            total = layout.total,
            "surface attached"
        );
        self.surface = Some(surface);
        self.layout = Some(layout);
        Ok(())
    }

    /// Resolve and store the image to reveal.
    pub fn attach_image(&mut self, source: impl Into<ImageSource>) -> Result<(), RevealError> {
        let image = ImageData::load(source.into())?;
        self.image = Some(image);
        Ok(())
    }

    /// Store an already-decoded bitmap.
    pub fn attach_bitmap(&mut self, image: ImageData) {
        self.image = Some(image);
    }

    /// Replace the per-tile paint hook.
    pub fn set_painter(&mut self, painter: Box<dyn TilePainter>) {
        self.painter = painter;
    }

    /// Subscribe to the start of a draw run.
    pub fn on_draw_start(&mut self, mut handler: impl FnMut() + 'static) {
        self.draw_start.subscribe(move |_| handler());
    }

    /// Subscribe to aggregate completion; the payload is the surface the
    /// reveal painted onto.
    pub fn on_draw_complete(&mut self, handler: impl FnMut(&(dyn DrawSurface + 'static)) + 'static) {
        self.draw_complete.subscribe(handler);
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state == RevealState::Drawing
    }

    /// Layout derived when the surface was attached.
    pub fn layout(&self) -> Option<GridLayout> {
        self.layout
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// Tweens of the current run, in scheduling order.
    pub fn drawers(&self) -> &[TweenId] {
        &self.drawers
    }

    pub fn tween(&self, id: TweenId) -> Option<&PropertyTween> {
        self.scheduler.get(id)
    }

    /// Start the reveal over the supplied tile positions.
    ///
    /// Tile *i* is scheduled in slot *i* with a start delay of
    /// `interval * i` and a duration of `duration + interval * i`: later
    /// tiles start later and run longer, producing the cascading profile.
    /// Re-invoking `draw` while a run is in flight preempts the stale
    /// tweens slot by slot rather than stopping the world.
    ///
    /// All preconditions are checked before any state changes, so a
    /// failed call leaves the run state untouched.
    pub fn draw(&mut self, positions: &[TilePosition]) -> Result<(), RevealError> {
        let layout = self.layout.ok_or(RevealError::MissingSurface)?;
        if self.surface.is_none() {
            return Err(RevealError::MissingSurface);
        }
        if self.image.is_none() {
            return Err(RevealError::MissingImage);
        }
        if positions.is_empty() {
            return Err(RevealError::NoTilePositions);
        }
        if positions.len() as u32 != layout.total {
            tracing::warn!(
                positions = positions.len(),
                total = layout.total,
                "tile position count disagrees with derived layout"
            );
        }

        self.state = RevealState::Drawing;
        self.counter = 0;
        self.drawers.clear();
        self.tiles.clear();
        self.draw_start.emit(&());

        let op = self.options;
        let mut duration = op.duration;
        let mut delay = 0.0;
        for (index, &position) in positions.iter().enumerate() {
            let mut tween = PropertyTween::new(duration, op.easing)
                .with_delay(delay)
                .with_fps(op.fps);
            tween.start(
                TweenProps::new()
                    .set(props::HEIGHT, [op.tile_height, 0.0])
                    .set(props::WIDTH, [op.tile_width, 0.0])
                    .set(props::TOP, [position.y, position.y + op.tile_height / 2.0])
                    .set(props::LEFT, [position.x, position.x + op.tile_width / 2.0]),
            );

            let id = self.scheduler.start_linked(index as u64, tween);
            self.drawers.push(id);
            self.tiles.insert(
                id,
                TileContext {
                    index,
                    position,
                    tile_width: op.tile_width,
                    tile_height: op.tile_height,
                },
            );

            duration += op.interval;
            delay += op.interval;
        }

        tracing::debug!(tiles = self.drawers.len(), "draw started");
        Ok(())
    }

    /// Advance the run by one frame clock delta.
    ///
    /// Paints every tile that produced a frame this tick (in scheduling
    /// order), then folds completions into the counter; when the counter
    /// reaches the number of scheduled tiles the run returns to idle and
    /// `drawComplete` fires exactly once.
    pub fn tick(&mut self, dt_ms: f32) {
        if self.state != RevealState::Drawing {
            return;
        }

        let updates = self.scheduler.advance(dt_ms);
        if updates.is_empty() {
            return;
        }
        let (Some(surface), Some(image)) = (self.surface.as_deref_mut(), self.image.as_ref())
        else {
            return;
        };
        // Completion denominator is the number of tiles actually
        // scheduled, so a run over fewer positions than the derived
        // layout still terminates.
        let total = self.drawers.len() as u32;

        for update in updates {
            let Some(&tile) = self.tiles.get(&update.id) else {
                // A stale tween from a preempted run; nothing to paint
                // and its completion must not advance this run's counter.
                tracing::trace!("dropping update from stale tween");
                continue;
            };

            self.painter.paint(surface, image, tile, &update.frame);

            if update.finished {
                self.counter += 1;
                tracing::trace!(tile = tile.index, counter = self.counter, "tile complete");
                if self.counter >= total {
                    self.counter = 0;
                    self.state = RevealState::Idle;
                    self.drawers.clear();
                    self.tiles.clear();
                    tracing::debug!("draw complete");
                    self.draw_complete.emit(&*surface);
                }
            }
        }
    }

    /// Pause every in-flight tween; progress is retained but there is no
    /// resume - only `cancel` or `redraw` leaves the paused state. A
    /// no-op unless a run is actually drawing.
    pub fn pause(&mut self) {
        if self.state != RevealState::Drawing {
            return;
        }
        self.scheduler.pause_all();
        self.state = RevealState::Paused;
    }

    /// Discard the current run: cancel every tween, reset the counter,
    /// and return to idle. A no-op when already idle.
    pub fn cancel(&mut self) {
        if self.state == RevealState::Idle {
            return;
        }
        self.scheduler.cancel_all();
        self.drawers.clear();
        self.tiles.clear();
        self.counter = 0;
        self.state = RevealState::Idle;
    }

    /// Reset to the fully revealed state: cancel any in-flight run, clear
    /// the whole surface, and paint the bitmap at the origin.
    pub fn redraw(&mut self) -> Result<(), RevealError> {
        if self.surface.is_none() {
            return Err(RevealError::MissingSurface);
        }
        if self.image.is_none() {
            return Err(RevealError::MissingImage);
        }

        self.scheduler.cancel_all();
        self.drawers.clear();
        self.tiles.clear();
        self.counter = 0;
        self.state = RevealState::Idle;

        if let (Some(surface), Some(image)) = (self.surface.as_deref_mut(), self.image.as_ref())
        {
            let size = surface.size();
            surface.clear_rect(0.0, 0.0, size.width, size.height);
            surface.draw_bitmap(image, 0.0, 0.0);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unveil_core::geometry::SurfaceSize;
    use unveil_core::surface::Bitmap;

    struct NullSurface {
        size: SurfaceSize,
    }

    impl DrawSurface for NullSurface {
        fn size(&self) -> SurfaceSize {
            self.size
        }
        fn clear_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {}
        fn draw_bitmap(&mut self, _bitmap: &dyn Bitmap, _dx: f32, _dy: f32) {}
        fn draw_bitmap_region(
            &mut self,
            _bitmap: &dyn Bitmap,
            _sx: f32,
            _sy: f32,
            _sw: f32,
            _sh: f32,
            _dx: f32,
            _dy: f32,
        ) {
        }
    }

    fn reveal_with_surface() -> GridReveal {
        let mut reveal =
            GridReveal::new(RevealOptions::default().with_tile_size(100.0, 100.0));
        reveal
            .attach_surface(Box::new(NullSurface {
                size: SurfaceSize::new(200.0, 100.0),
            }))
            .unwrap();
        reveal
            .attach_bitmap(ImageData::from_rgba(vec![0u8; 200 * 100 * 4], 200, 100).unwrap());
        reveal
    }

    #[test]
    fn attach_surface_rejects_unset_tile_dimensions() {
        let mut reveal = GridReveal::new(RevealOptions::default());
        let err = reveal
            .attach_surface(Box::new(NullSurface {
                size: SurfaceSize::new(200.0, 100.0),
            }))
            .unwrap_err();
        assert!(matches!(err, RevealError::Layout(_)));
        assert!(reveal.layout().is_none());
    }

    #[test]
    fn draw_without_surface_leaves_state_idle() {
        let mut reveal = GridReveal::new(RevealOptions::default().with_tile_size(10.0, 10.0));
        let err = reveal.draw(&[TilePosition::new(0.0, 0.0)]).unwrap_err();
        assert!(matches!(err, RevealError::MissingSurface));
        assert_eq!(reveal.state(), RevealState::Idle);
    }

    #[test]
    fn draw_without_image_leaves_state_idle() {
        let mut reveal =
            GridReveal::new(RevealOptions::default().with_tile_size(100.0, 100.0));
        reveal
            .attach_surface(Box::new(NullSurface {
                size: SurfaceSize::new(200.0, 100.0),
            }))
            .unwrap();
        let err = reveal.draw(&[TilePosition::new(0.0, 0.0)]).unwrap_err();
        assert!(matches!(err, RevealError::MissingImage));
        assert_eq!(reveal.state(), RevealState::Idle);
    }

    #[test]
    fn draw_rejects_an_empty_position_list() {
        let mut reveal = reveal_with_surface();
        let err = reveal.draw(&[]).unwrap_err();
        assert!(matches!(err, RevealError::NoTilePositions));
        assert_eq!(reveal.state(), RevealState::Idle);
    }

    #[test]
    fn stagger_grows_by_exactly_one_interval_per_tile() {
        let mut reveal = reveal_with_surface();
        let positions = [TilePosition::new(0.0, 0.0), TilePosition::new(100.0, 0.0)];
        reveal.draw(&positions).unwrap();

        let delays: Vec<f32> = reveal
            .drawers()
            .iter()
            .map(|&id| reveal.tween(id).unwrap().delay_ms())
            .collect();
        let durations: Vec<f32> = reveal
            .drawers()
            .iter()
            .map(|&id| reveal.tween(id).unwrap().duration_ms())
            .collect();

        assert_eq!(delays, vec![0.0, 70.0]);
        assert_eq!(durations, vec![30.0, 100.0]);
    }

    #[test]
    fn pause_is_one_directional_and_idle_noop() {
        let mut reveal = reveal_with_surface();
        // Terminal state: pause and cancel must not change anything.
        reveal.pause();
        assert_eq!(reveal.state(), RevealState::Idle);
        reveal.cancel();
        assert_eq!(reveal.state(), RevealState::Idle);

        let positions = [TilePosition::new(0.0, 0.0), TilePosition::new(100.0, 0.0)];
        reveal.draw(&positions).unwrap();
        reveal.pause();
        assert_eq!(reveal.state(), RevealState::Paused);

        // Ticking a paused run produces nothing and keeps it paused.
        reveal.tick(100.0);
        assert_eq!(reveal.state(), RevealState::Paused);

        reveal.cancel();
        assert_eq!(reveal.state(), RevealState::Idle);
    }

    #[test]
    fn cancel_mid_flight_resets_and_silences() {
        let mut reveal = reveal_with_surface();
        let positions = [TilePosition::new(0.0, 0.0), TilePosition::new(100.0, 0.0)];
        reveal.draw(&positions).unwrap();
        reveal.tick(35.0); // first tile finishes (duration 30)
        reveal.cancel();

        assert_eq!(reveal.state(), RevealState::Idle);
        assert!(reveal.drawers().is_empty());

        // Nothing fires after cancel.
        reveal.tick(1000.0);
        assert_eq!(reveal.state(), RevealState::Idle);
    }

    #[test]
    fn redraw_requires_surface_and_image() {
        let mut reveal = GridReveal::new(RevealOptions::default().with_tile_size(10.0, 10.0));
        assert!(matches!(reveal.redraw(), Err(RevealError::MissingSurface)));
    }

    #[test]
    fn draw_can_be_retried_after_fixing_configuration() {
        let mut reveal =
            GridReveal::new(RevealOptions::default().with_tile_size(100.0, 100.0));
        reveal
            .attach_surface(Box::new(NullSurface {
                size: SurfaceSize::new(200.0, 100.0),
            }))
            .unwrap();
        assert!(reveal.draw(&[TilePosition::new(0.0, 0.0)]).is_err());

        reveal
            .attach_bitmap(ImageData::from_rgba(vec![0u8; 200 * 100 * 4], 200, 100).unwrap());
        assert!(reveal
            .draw(&[TilePosition::new(0.0, 0.0), TilePosition::new(100.0, 0.0)])
            .is_ok());
        assert!(reveal.is_drawing());
    }
}
