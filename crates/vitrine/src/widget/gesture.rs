//! Swipe recognition from touch events.
//!
//! This module provides a recognizer that detects swipes from raw touch
//! events, for flicking between lightbox images on touch screens.
//!
//! # Usage
//!
//! ```
//! use vitrine::widget::{Point, SwipeDirection, SwipeRecognizer, TouchPhase, TouchPoint};
//!
//! let mut recognizer = SwipeRecognizer::new();
//!
//! recognizer.process_touch(&TouchPoint::new(1, Point::new(200.0, 80.0), TouchPhase::Started));
//! let swipe = recognizer.process_touch(&TouchPoint::new(1, Point::new(80.0, 82.0), TouchPhase::Ended));
//!
//! assert_eq!(swipe, Some(SwipeDirection::Left));
//! ```

use super::events::{SwipeDirection, TouchPhase, TouchPoint};
use super::geometry::Point;

/// Default minimum displacement for a swipe in pixels.
///
/// Touches travelling less than this between start and end are ignored.
pub const DEFAULT_SWIPE_MIN_DISTANCE: f32 = 40.0;

/// Recognizes swipes from single-touch start/end pairs.
///
/// The recognizer tracks one touch at a time (the first to start); a second
/// simultaneous touch is ignored until the tracked one ends or is
/// cancelled. When the tracked touch ends, the displacement from its start
/// point determines the outcome: below the minimum distance nothing is
/// recognized, otherwise the dominant axis gives the [`SwipeDirection`].
pub struct SwipeRecognizer {
    /// Minimum displacement for recognition.
    min_distance: f32,
    /// The tracked touch: id and start position, if one is active.
    tracking: Option<(u64, Point)>,
}

impl SwipeRecognizer {
    /// Create a recognizer with the default minimum distance.
    pub fn new() -> Self {
        Self::with_min_distance(DEFAULT_SWIPE_MIN_DISTANCE)
    }

    /// Create a recognizer with a custom minimum distance.
    pub fn with_min_distance(min_distance: f32) -> Self {
        Self {
            min_distance,
            tracking: None,
        }
    }

    /// The configured minimum displacement.
    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    /// Feed one touch point to the recognizer.
    ///
    /// Returns the recognized swipe, if this touch completed one.
    pub fn process_touch(&mut self, point: &TouchPoint) -> Option<SwipeDirection> {
        match point.phase {
            TouchPhase::Started => {
                if self.tracking.is_none() {
                    self.tracking = Some((point.id, point.position));
                }
                None
            }
            TouchPhase::Moved => None,
            TouchPhase::Cancelled => {
                if self.tracking.is_some_and(|(id, _)| id == point.id) {
                    self.tracking = None;
                }
                None
            }
            TouchPhase::Ended => {
                let (id, start) = self.tracking?;
                if id != point.id {
                    return None;
                }
                self.tracking = None;

                let dx = point.position.x - start.x;
                let dy = point.position.y - start.y;
                if dx.abs().max(dy.abs()) < self.min_distance {
                    return None;
                }
                let direction = determine_swipe_direction(dx, dy);
                tracing::trace!(target: "vitrine::gesture", ?direction, dx, dy, "swipe recognized");
                Some(direction)
            }
        }
    }

    /// Resets the recognizer state, discarding any tracked touch.
    pub fn reset(&mut self) {
        self.tracking = None;
    }
}

impl Default for SwipeRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

fn determine_swipe_direction(dx: f32, dy: f32) -> SwipeDirection {
    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        }
    } else if dy > 0.0 {
        SwipeDirection::Down
    } else {
        SwipeDirection::Up
    }
}
