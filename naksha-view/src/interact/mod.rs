//! Pointer-interaction state machine.
//!
//! Resolves pointer gestures on the scaled, offset canvas into waypoint
//! store mutations: click-to-add, drag-to-move, context-click-to-remove.

pub mod controller;
pub mod events;
pub mod state;

pub use controller::InteractionController;
pub use events::{PointerButton, PointerEvent};
pub use state::PointerState;
