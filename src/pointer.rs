//! Live pointer tracking.
//!
//! The tracker maintains the set of input sources currently able to displace
//! particles: a singleton primary (mouse) pointer on non-touch devices, plus
//! zero or more touch pointers keyed by their platform touch id. Each entry
//! records the current and the previously recorded event coordinate.
//!
//! Coordinates handed to the tracker are window coordinates with Y growing
//! downward; the tracker flips them into the field's Y-up convention using
//! the current window height. No clamping is done, off-window coordinates
//! simply land near no particles.

use std::collections::hash_map;
use std::collections::HashMap;

use glam::Vec2;

/// Identity of an input source.
///
/// `Primary` is the mouse cursor and exists only on devices without touch
/// input; `Touch` ids are transient, created on touch start and removed on
/// touch end or cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerId {
    Primary,
    Touch(u64),
}

/// Current and previously recorded position of one pointer.
///
/// `previous` reflects the last recorded event, not the last frame: it only
/// moves when a new event for this pointer arrives, so a stationary pointer
/// keeps a stale delta indefinitely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub current: Vec2,
    pub previous: Vec2,
}

/// The set of active pointers.
pub struct PointerTracker {
    pointers: HashMap<PointerId, Pointer>,
    window_height: f32,
    touch_capable: bool,
}

impl PointerTracker {
    /// Create a tracker for a device that does or does not deliver touch
    /// input. Non-touch devices get a permanent primary pointer at the
    /// origin; touch-capable devices start with no pointers at all.
    pub fn new(touch_capable: bool) -> Self {
        let mut pointers = HashMap::new();
        if !touch_capable {
            pointers.insert(
                PointerId::Primary,
                Pointer {
                    current: Vec2::ZERO,
                    previous: Vec2::ZERO,
                },
            );
        }
        Self {
            pointers,
            window_height: 0.0,
            touch_capable,
        }
    }

    /// Update the window height used to flip incoming Y coordinates.
    pub fn set_window_height(&mut self, height: f32) {
        self.window_height = height;
    }

    /// Record a primary-pointer move. Ignored on touch-capable devices,
    /// where the cursor events winit synthesizes from touches would
    /// otherwise double up with the touch pointers.
    pub fn move_primary(&mut self, x: f32, y: f32) {
        if self.touch_capable {
            return;
        }
        let flipped = Vec2::new(x, self.window_height - y);
        // The primary entry is inserted at construction and never removed.
        if let Some(pointer) = self.pointers.get_mut(&PointerId::Primary) {
            pointer.previous = pointer.current;
            pointer.current = flipped;
        }
    }

    /// Record a touch start or move. An unseen id creates a fresh entry with
    /// current == previous; a known id shifts previous to the old current.
    pub fn begin_or_update_touch(&mut self, id: u64, x: f32, y: f32) {
        let flipped = Vec2::new(x, self.window_height - y);
        match self.pointers.entry(PointerId::Touch(id)) {
            hash_map::Entry::Occupied(mut entry) => {
                let pointer = entry.get_mut();
                pointer.previous = pointer.current;
                pointer.current = flipped;
            }
            hash_map::Entry::Vacant(entry) => {
                entry.insert(Pointer {
                    current: flipped,
                    previous: flipped,
                });
            }
        }
    }

    /// Remove a touch pointer entirely. Absent ids are a no-op, so end and
    /// cancel events can both funnel here.
    pub fn end_touch(&mut self, id: u64) {
        self.pointers.remove(&PointerId::Touch(id));
    }

    /// Iterate over the active pointers.
    ///
    /// Iteration order is the map's, which is unspecified; when several
    /// pointers claim the same particle in one frame, the last one iterated
    /// wins.
    pub fn iter(&self) -> impl Iterator<Item = (&PointerId, &Pointer)> {
        self.pointers.iter()
    }

    /// Look up a single pointer.
    pub fn get(&self, id: PointerId) -> Option<&Pointer> {
        self.pointers.get(&id)
    }

    /// Number of active pointers.
    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_touch_tracker_starts_with_primary_at_origin() {
        let tracker = PointerTracker::new(false);
        let primary = tracker.get(PointerId::Primary).unwrap();
        assert_eq!(primary.current, Vec2::ZERO);
        assert_eq!(primary.previous, Vec2::ZERO);
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn touch_tracker_starts_empty_and_ignores_primary_moves() {
        let mut tracker = PointerTracker::new(true);
        assert!(tracker.is_empty());
        tracker.move_primary(10.0, 20.0);
        assert!(tracker.is_empty());
    }

    #[test]
    fn primary_move_flips_y_and_shifts_previous() {
        let mut tracker = PointerTracker::new(false);
        tracker.set_window_height(600.0);

        tracker.move_primary(100.0, 50.0);
        let primary = tracker.get(PointerId::Primary).unwrap();
        assert_eq!(primary.current, Vec2::new(100.0, 550.0));
        assert_eq!(primary.previous, Vec2::ZERO);

        tracker.move_primary(120.0, 60.0);
        let primary = tracker.get(PointerId::Primary).unwrap();
        assert_eq!(primary.current, Vec2::new(120.0, 540.0));
        assert_eq!(primary.previous, Vec2::new(100.0, 550.0));
    }

    #[test]
    fn first_touch_has_current_equal_previous() {
        let mut tracker = PointerTracker::new(true);
        tracker.set_window_height(400.0);
        tracker.begin_or_update_touch(3, 30.0, 100.0);

        let touch = tracker.get(PointerId::Touch(3)).unwrap();
        assert_eq!(touch.current, Vec2::new(30.0, 300.0));
        assert_eq!(touch.previous, touch.current);
    }

    #[test]
    fn touch_move_shifts_previous() {
        let mut tracker = PointerTracker::new(true);
        tracker.set_window_height(400.0);
        tracker.begin_or_update_touch(3, 30.0, 100.0);
        tracker.begin_or_update_touch(3, 40.0, 110.0);

        let touch = tracker.get(PointerId::Touch(3)).unwrap();
        assert_eq!(touch.current, Vec2::new(40.0, 290.0));
        assert_eq!(touch.previous, Vec2::new(30.0, 300.0));
    }

    #[test]
    fn end_then_restart_behaves_like_a_fresh_touch() {
        let mut tracker = PointerTracker::new(true);
        tracker.set_window_height(400.0);
        tracker.begin_or_update_touch(7, 10.0, 10.0);
        tracker.begin_or_update_touch(7, 90.0, 90.0);
        tracker.end_touch(7);
        assert!(tracker.get(PointerId::Touch(7)).is_none());

        // No stale state may leak across the end/restart cycle.
        tracker.begin_or_update_touch(7, 50.0, 50.0);
        let touch = tracker.get(PointerId::Touch(7)).unwrap();
        assert_eq!(touch.current, Vec2::new(50.0, 350.0));
        assert_eq!(touch.previous, touch.current);
    }

    #[test]
    fn ending_an_unknown_touch_is_a_no_op() {
        let mut tracker = PointerTracker::new(true);
        tracker.end_touch(42);
        assert!(tracker.is_empty());
    }

    #[test]
    fn multiple_touches_are_tracked_independently() {
        let mut tracker = PointerTracker::new(true);
        tracker.set_window_height(400.0);
        tracker.begin_or_update_touch(1, 10.0, 10.0);
        tracker.begin_or_update_touch(2, 20.0, 20.0);
        assert_eq!(tracker.len(), 2);

        tracker.end_touch(1);
        assert_eq!(tracker.len(), 1);
        assert!(tracker.get(PointerId::Touch(2)).is_some());
    }
}
