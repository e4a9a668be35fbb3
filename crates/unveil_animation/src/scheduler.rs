//! Tween scheduler
//!
//! Owns every active tween and advances them from one shared frame clock.
//! Scheduling is cooperative and single-threaded: `advance` ticks each
//! playing tween in registration order and hands the resulting frames
//! back to the caller, so no tween callback ever observes a torn frame.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::tween::{FrameValue, PropertyTween};

new_key_type! {
    /// Handle to a scheduled tween
    pub struct TweenId;
}

/// Slot key for linked runs (one per tile in the reveal orchestrator)
pub type SlotKey = u64;

/// Frame produced by one tween during an `advance` pass
#[derive(Clone, Debug)]
pub struct TweenUpdate {
    pub id: TweenId,
    pub frame: FrameValue,
    pub finished: bool,
}

/// The shared frame clock's view of all in-flight tweens
pub struct TweenScheduler {
    tweens: SlotMap<TweenId, PropertyTween>,
    /// Registration order; slotmap iteration order is unspecified, but
    /// motion callbacks must fire in the order their runs were created.
    order: Vec<TweenId>,
    slots: FxHashMap<SlotKey, TweenId>,
}

impl TweenScheduler {
    pub fn new() -> Self {
        Self {
            tweens: SlotMap::with_key(),
            order: Vec::new(),
            slots: FxHashMap::default(),
        }
    }

    /// Register a tween without linking it to a slot.
    pub fn insert(&mut self, tween: PropertyTween) -> TweenId {
        let id = self.tweens.insert(tween);
        self.order.push(id);
        id
    }

    /// Register a tween under a slot key, preempting the slot's previous
    /// occupant: the old tween is cancelled and dropped, never orphaned.
    pub fn start_linked(&mut self, slot: SlotKey, tween: PropertyTween) -> TweenId {
        if let Some(old) = self.slots.remove(&slot) {
            tracing::debug!(slot, "cancelling stale tween in slot");
            self.remove(old);
        }
        let id = self.insert(tween);
        self.slots.insert(slot, id);
        id
    }

    pub fn get(&self, id: TweenId) -> Option<&PropertyTween> {
        self.tweens.get(id)
    }

    pub fn get_mut(&mut self, id: TweenId) -> Option<&mut PropertyTween> {
        self.tweens.get_mut(id)
    }

    /// Advance every playing tween by one clock delta.
    ///
    /// Updates come back in registration order; finished tweens are
    /// retired after their final frame is collected.
    pub fn advance(&mut self, dt_ms: f32) -> Vec<TweenUpdate> {
        let mut updates = Vec::new();
        let mut done: SmallVec<[TweenId; 8]> = SmallVec::new();

        for &id in &self.order {
            let Some(tween) = self.tweens.get_mut(id) else {
                continue;
            };
            if let Some(tick) = tween.tick(dt_ms) {
                if tick.finished {
                    done.push(id);
                }
                updates.push(TweenUpdate {
                    id,
                    frame: tick.frame,
                    finished: tick.finished,
                });
            }
        }

        for id in done {
            self.remove(id);
        }
        updates
    }

    /// Pause every tween; progress is retained.
    pub fn pause_all(&mut self) {
        for (_, tween) in self.tweens.iter_mut() {
            tween.pause();
        }
    }

    /// Cancel one tween and drop it.
    pub fn cancel(&mut self, id: TweenId) {
        if let Some(tween) = self.tweens.get_mut(id) {
            tween.cancel();
        }
        self.remove(id);
    }

    /// Cancel and drop every tween.
    pub fn cancel_all(&mut self) {
        for (_, tween) in self.tweens.iter_mut() {
            tween.cancel();
        }
        self.tweens.clear();
        self.order.clear();
        self.slots.clear();
    }

    fn remove(&mut self, id: TweenId) {
        self.tweens.remove(id);
        self.order.retain(|&other| other != id);
        self.slots.retain(|_, &mut occupant| occupant != id);
    }

    /// Number of tweens still registered.
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Whether any registered tween is still playing or waiting out its
    /// start delay.
    pub fn has_active(&self) -> bool {
        self.tweens.iter().any(|(_, t)| t.is_playing())
    }
}

impl Default for TweenScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use crate::tween::TweenProps;

    fn started(duration_ms: f32, delay_ms: f32) -> PropertyTween {
        let mut tween = PropertyTween::new(duration_ms, Easing::Linear).with_delay(delay_ms);
        tween.start(TweenProps::new().set("w", [100.0, 0.0]));
        tween
    }

    #[test]
    fn updates_come_back_in_registration_order() {
        let mut scheduler = TweenScheduler::new();
        let first = scheduler.insert(started(100.0, 0.0));
        let second = scheduler.insert(started(100.0, 0.0));

        let updates = scheduler.advance(10.0);
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].id, first);
        assert_eq!(updates[1].id, second);
    }

    #[test]
    fn finished_tweens_are_retired_after_their_final_frame() {
        let mut scheduler = TweenScheduler::new();
        scheduler.insert(started(50.0, 0.0));

        let updates = scheduler.advance(60.0);
        assert!(updates[0].finished);
        assert!(scheduler.is_empty());
        assert!(scheduler.advance(10.0).is_empty());
    }

    #[test]
    fn starting_in_an_occupied_slot_cancels_the_old_tween() {
        let mut scheduler = TweenScheduler::new();
        let old = scheduler.start_linked(3, started(100.0, 0.0));
        let new = scheduler.start_linked(3, started(100.0, 0.0));

        assert!(scheduler.get(old).is_none());
        assert!(scheduler.get(new).is_some());
        assert_eq!(scheduler.len(), 1);

        let updates = scheduler.advance(10.0);
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].id, new);
    }

    #[test]
    fn delayed_tweens_stay_silent_but_active() {
        let mut scheduler = TweenScheduler::new();
        scheduler.insert(started(50.0, 100.0));

        assert!(scheduler.advance(30.0).is_empty());
        assert!(scheduler.has_active());
    }

    #[test]
    fn cancel_all_silences_the_scheduler() {
        let mut scheduler = TweenScheduler::new();
        scheduler.start_linked(0, started(100.0, 0.0));
        scheduler.start_linked(1, started(100.0, 70.0));

        scheduler.cancel_all();
        assert!(scheduler.is_empty());
        assert!(!scheduler.has_active());
        assert!(scheduler.advance(10.0).is_empty());
    }

    #[test]
    fn pause_all_stops_ticks_without_dropping_tweens() {
        let mut scheduler = TweenScheduler::new();
        scheduler.insert(started(100.0, 0.0));

        scheduler.advance(20.0);
        scheduler.pause_all();
        assert!(scheduler.advance(20.0).is_empty());
        assert_eq!(scheduler.len(), 1);
    }
}
