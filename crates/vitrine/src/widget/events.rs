//! Input event types for the gallery widget.
//!
//! The kit is headless: the embedding application translates its windowing
//! toolkit's raw events into these types and feeds them to the widgets. Only
//! the keys and touch phases a gallery consumes are modeled.

use super::geometry::Point;

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Whether any modifier is held.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }
}

/// Keyboard key codes relevant to gallery interaction.
///
/// This enum follows a similar structure to web KeyboardEvent.code values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left arrow: previous item.
    ArrowLeft,
    /// Right arrow: next item.
    ArrowRight,
    /// Escape: close the lightbox.
    Escape,
    /// Enter: activate the focused card.
    Enter,
    /// Space: activate the focused card.
    Space,
    /// Tab: focus traversal (handled by the embedding application).
    Tab,
    /// Any key the gallery does not interpret.
    Other(u16),
}

impl Key {
    /// Check if this is a navigation key.
    pub fn is_navigation(&self) -> bool {
        matches!(self, Key::ArrowLeft | Key::ArrowRight)
    }

    /// Check if this key activates a focused card.
    pub fn is_activation(&self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// A key press delivered to the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPressEvent {
    /// The pressed key.
    pub key: Key,
    /// Modifiers held during the press.
    pub modifiers: KeyboardModifiers,
}

impl KeyPressEvent {
    /// Create a key press event with no modifiers.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: KeyboardModifiers::NONE,
        }
    }

    /// Create a key press event with modifiers.
    pub fn with_modifiers(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self { key, modifiers }
    }
}

/// Phase of a touch point's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// The touch began.
    Started,
    /// The touch moved.
    Moved,
    /// The touch lifted.
    Ended,
    /// The touch was cancelled by the system.
    Cancelled,
}

/// A single touch point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Identifier distinguishing simultaneous touches.
    pub id: u64,
    /// Position in the widget's coordinate space.
    pub position: Point,
    /// Current phase.
    pub phase: TouchPhase,
}

impl TouchPoint {
    /// Create a touch point.
    pub fn new(id: u64, position: Point, phase: TouchPhase) -> Self {
        Self {
            id,
            position,
            phase,
        }
    }
}

/// Direction of a recognized swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Leftward swipe.
    Left,
    /// Rightward swipe.
    Right,
    /// Upward swipe.
    Up,
    /// Downward swipe.
    Down,
}

impl SwipeDirection {
    /// Whether this swipe is along the horizontal axis.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_classification() {
        assert!(Key::ArrowLeft.is_navigation());
        assert!(Key::ArrowRight.is_navigation());
        assert!(!Key::Escape.is_navigation());

        assert!(Key::Enter.is_activation());
        assert!(Key::Space.is_activation());
        assert!(!Key::Tab.is_activation());
    }

    #[test]
    fn test_modifiers_any() {
        assert!(!KeyboardModifiers::NONE.any());
        let shift = KeyboardModifiers {
            shift: true,
            ..KeyboardModifiers::NONE
        };
        assert!(shift.any());
    }

    #[test]
    fn test_swipe_axis() {
        assert!(SwipeDirection::Left.is_horizontal());
        assert!(SwipeDirection::Right.is_horizontal());
        assert!(!SwipeDirection::Up.is_horizontal());
    }
}
