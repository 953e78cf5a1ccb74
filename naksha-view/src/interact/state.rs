//! Interaction states.

/// Drag-interaction state.
///
/// Every transition goes through
/// [`super::InteractionController::handle_event`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerState {
    /// No gesture in progress
    Idle,

    /// A waypoint is being dragged
    Dragging {
        /// Id of the waypoint following the pointer
        id: u64,
    },
}

impl PointerState {
    /// Whether a drag gesture is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self, PointerState::Dragging { .. })
    }

    /// State name for logging
    pub fn name(&self) -> &'static str {
        match self {
            PointerState::Idle => "Idle",
            PointerState::Dragging { .. } => "Dragging",
        }
    }
}
