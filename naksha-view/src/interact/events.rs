//! Pointer events consumed by the interaction controller.

use crate::view::ScreenPoint;

/// Pointer button identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Primary (left) button
    Primary,
    /// Secondary (right/context) button
    Secondary,
}

/// A pointer event in view space.
///
/// Within one gesture the controller expects strict arrival order:
/// `Down`, zero or more `Move`, then `Up`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Button pressed at a screen position
    Down {
        /// Position in view space
        pos: ScreenPoint,
        /// Button pressed
        button: PointerButton,
    },
    /// Pointer moved to a screen position
    Move {
        /// Position in view space
        pos: ScreenPoint,
    },
    /// Button released at a screen position
    Up {
        /// Position in view space
        pos: ScreenPoint,
        /// Button released
        button: PointerButton,
    },
}
