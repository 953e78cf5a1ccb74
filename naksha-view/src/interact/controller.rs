//! Interaction controller implementation.

use crate::config::InteractionConfig;
use crate::interact::{PointerButton, PointerEvent, PointerState};
use crate::view::{ScreenPoint, ViewState};
use log::{debug, warn};
use naksha_map::{Error, IdSource, MapTransform, Waypoint, WaypointStore};

/// Pointer-gesture state machine.
///
/// Consumes pointer events and resolves them into store mutations:
///
/// - primary down on a marker starts a drag; moves update that waypoint's
///   world position, up ends the gesture
/// - primary up on empty space creates a waypoint at the clicked world
///   position
/// - secondary down on a marker removes it
///
/// Hit-testing happens in view space, so the hit radius is visually
/// constant regardless of zoom.
pub struct InteractionController {
    state: PointerState,
    hit_radius_px: f64,
    default_color: String,
    ids: Box<dyn IdSource>,
}

impl InteractionController {
    /// Create a controller with the given id source
    pub fn new(
        config: &InteractionConfig,
        default_color: impl Into<String>,
        ids: Box<dyn IdSource>,
    ) -> Self {
        Self {
            state: PointerState::Idle,
            hit_radius_px: config.hit_radius_px,
            default_color: default_color.into(),
            ids,
        }
    }

    /// Current gesture state
    pub fn state(&self) -> &PointerState {
        &self.state
    }

    /// Make sure future ids are strictly greater than `id`
    pub fn reserve_ids_through(&mut self, id: u64) {
        self.ids.reserve_through(id);
    }

    /// Feed one pointer event through the state machine.
    ///
    /// Events within a gesture must arrive in order; no coalescing is
    /// performed here.
    pub fn handle_event(
        &mut self,
        event: PointerEvent,
        transform: &MapTransform,
        view: &ViewState,
        store: &mut WaypointStore,
    ) {
        match (self.state, event) {
            (PointerState::Idle, PointerEvent::Down { pos, button }) => {
                match (self.hit_test(pos, transform, view, store), button) {
                    (Some(id), PointerButton::Primary) => {
                        self.state = PointerState::Dragging { id };
                        debug!("gesture -> {} (waypoint {id})", self.state.name());
                    }
                    (Some(id), PointerButton::Secondary) => {
                        store.remove(id);
                    }
                    (None, _) => {}
                }
            }

            (PointerState::Idle, PointerEvent::Up { pos, button }) => {
                // A primary click on empty space adds a waypoint. An up that
                // ends a drag is consumed by the Dragging arm below, so it
                // can never create one.
                if button == PointerButton::Primary
                    && self.hit_test(pos, transform, view, store).is_none()
                {
                    self.add_waypoint(pos, transform, view, store);
                }
            }

            (PointerState::Dragging { id }, PointerEvent::Move { pos }) => {
                let world = transform.pixel_to_world(view.screen_to_map(pos));
                let Some(mut waypoint) = store.get(id).cloned() else {
                    // Dragged waypoint vanished; abort the gesture
                    warn!("waypoint {id} removed mid-drag, aborting gesture");
                    self.state = PointerState::Idle;
                    return;
                };
                waypoint.x = world.x;
                waypoint.y = world.y;
                if let Err(Error::NotFound(_)) = store.update(waypoint) {
                    warn!("waypoint {id} removed mid-drag, aborting gesture");
                    self.state = PointerState::Idle;
                }
            }

            (PointerState::Dragging { .. }, PointerEvent::Up { .. }) => {
                self.state = PointerState::Idle;
                debug!("gesture -> {}", self.state.name());
            }

            // Moves while idle and repeated downs while dragging do nothing
            (PointerState::Idle, PointerEvent::Move { .. }) => {}
            (PointerState::Dragging { .. }, PointerEvent::Down { .. }) => {}
        }
    }

    /// Find the nearest waypoint within the hit radius of a screen point.
    ///
    /// Distances are compared in view space. Ties on distance break toward
    /// the lowest id for determinism.
    fn hit_test(
        &self,
        pos: ScreenPoint,
        transform: &MapTransform,
        view: &ViewState,
        store: &WaypointStore,
    ) -> Option<u64> {
        let mut best: Option<(u64, f64)> = None;
        for wp in store.iter() {
            let marker = view.map_to_screen(transform.world_to_pixel(wp.position()));
            let distance = marker.distance(&pos);
            if distance > self.hit_radius_px {
                continue;
            }
            let closer = match best {
                None => true,
                Some((best_id, best_distance)) => {
                    distance < best_distance || (distance == best_distance && wp.id < best_id)
                }
            };
            if closer {
                best = Some((wp.id, distance));
            }
        }
        best.map(|(id, _)| id)
    }

    fn add_waypoint(
        &mut self,
        pos: ScreenPoint,
        transform: &MapTransform,
        view: &ViewState,
        store: &mut WaypointStore,
    ) {
        let world = transform.pixel_to_world(view.screen_to_map(pos));
        let id = self.ids.next_id();
        let waypoint = Waypoint {
            id,
            name: format!("Waypoint {}", store.len() + 1),
            x: world.x,
            y: world.y,
            color: self.default_color.clone(),
        };
        debug!(
            "add waypoint {id} at ({:.3}, {:.3})",
            waypoint.x, waypoint.y
        );
        if let Err(e) = store.add(waypoint) {
            // The id source guarantees fresh ids, so this indicates a
            // misconfigured source rather than a user action
            warn!("failed to add waypoint: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use naksha_map::map::metadata::Origin;
    use naksha_map::{MapMetadata, MapModel, OccupancyGrid, SequentialIds};
    use std::collections::BTreeMap;

    fn test_model() -> MapModel {
        let metadata = MapMetadata {
            resolution: 0.05,
            origin: Origin::new(-10.0, -10.0),
            negate: 0,
            occupied_thresh: None,
            free_thresh: None,
            image: None,
            extras: BTreeMap::new(),
        };
        MapModel::new(metadata, OccupancyGrid::placeholder(800, 600))
    }

    fn controller() -> InteractionController {
        InteractionController::new(
            &InteractionConfig::default(),
            "#ff0000",
            Box::new(SequentialIds::new()),
        )
    }

    fn click(
        ctrl: &mut InteractionController,
        pos: ScreenPoint,
        transform: &MapTransform,
        view: &ViewState,
        store: &mut WaypointStore,
    ) {
        ctrl.handle_event(
            PointerEvent::Down {
                pos,
                button: PointerButton::Primary,
            },
            transform,
            view,
            store,
        );
        ctrl.handle_event(
            PointerEvent::Up {
                pos,
                button: PointerButton::Primary,
            },
            transform,
            view,
            store,
        );
    }

    #[test]
    fn test_click_on_empty_space_creates_waypoint() {
        let model = test_model();
        let transform = model.transform();
        let view = ViewState::new();
        let mut store = WaypointStore::new();
        let mut ctrl = controller();

        click(&mut ctrl, ScreenPoint::new(400.0, 300.0), &transform, &view, &mut store);

        assert_eq!(store.len(), 1);
        let wp = &store.waypoints()[0];
        assert_eq!(wp.name, "Waypoint 1");
        assert_eq!(wp.color, "#ff0000");
        let expected = transform.pixel_to_world(view.screen_to_map(ScreenPoint::new(400.0, 300.0)));
        assert!((wp.x - expected.x).abs() < 1e-9);
        assert!((wp.y - expected.y).abs() < 1e-9);
        assert_eq!(*ctrl.state(), PointerState::Idle);

        // Names keep counting from the live collection size
        click(&mut ctrl, ScreenPoint::new(100.0, 100.0), &transform, &view, &mut store);
        assert_eq!(store.waypoints()[1].name, "Waypoint 2");
    }

    #[test]
    fn test_drag_moves_waypoint_without_creating() {
        let model = test_model();
        let transform = model.transform();
        let view = ViewState::new();
        let mut store = WaypointStore::new();
        let mut ctrl = controller();

        // Waypoint at pixel (400, 300)
        let start_world = transform.pixel_to_world(naksha_map::core::PixelPoint::new(400.0, 300.0));
        store
            .add(Waypoint::new(1, "A", start_world.x, start_world.y))
            .unwrap();

        // Down within the hit radius, drag to Q, release
        let q = ScreenPoint::new(250.0, 120.0);
        ctrl.handle_event(
            PointerEvent::Down {
                pos: ScreenPoint::new(405.0, 297.0),
                button: PointerButton::Primary,
            },
            &transform,
            &view,
            &mut store,
        );
        assert_eq!(*ctrl.state(), PointerState::Dragging { id: 1 });

        ctrl.handle_event(PointerEvent::Move { pos: q }, &transform, &view, &mut store);
        ctrl.handle_event(
            PointerEvent::Up {
                pos: q,
                button: PointerButton::Primary,
            },
            &transform,
            &view,
            &mut store,
        );

        assert_eq!(store.len(), 1);
        assert_eq!(*ctrl.state(), PointerState::Idle);
        let expected = transform.pixel_to_world(view.screen_to_map(q));
        let wp = store.get(1).unwrap();
        assert!((wp.x - expected.x).abs() < 1e-9);
        assert!((wp.y - expected.y).abs() < 1e-9);
        // Other fields untouched
        assert_eq!(wp.name, "A");
    }

    #[test]
    fn test_drag_preserves_gesture_order() {
        // Multiple moves apply in order; the final position wins
        let model = test_model();
        let transform = model.transform();
        let view = ViewState::new();
        let mut store = WaypointStore::new();
        let mut ctrl = controller();

        let world = transform.pixel_to_world(naksha_map::core::PixelPoint::new(100.0, 100.0));
        store.add(Waypoint::new(1, "A", world.x, world.y)).unwrap();

        ctrl.handle_event(
            PointerEvent::Down {
                pos: ScreenPoint::new(100.0, 100.0),
                button: PointerButton::Primary,
            },
            &transform,
            &view,
            &mut store,
        );
        for pos in [
            ScreenPoint::new(120.0, 110.0),
            ScreenPoint::new(150.0, 140.0),
            ScreenPoint::new(180.0, 170.0),
        ] {
            ctrl.handle_event(PointerEvent::Move { pos }, &transform, &view, &mut store);
        }
        let expected = transform.pixel_to_world(view.screen_to_map(ScreenPoint::new(180.0, 170.0)));
        assert!((store.get(1).unwrap().x - expected.x).abs() < 1e-9);
    }

    #[test]
    fn test_secondary_click_removes_without_creating() {
        let model = test_model();
        let transform = model.transform();
        let view = ViewState::new();
        let mut store = WaypointStore::new();
        let mut ctrl = controller();

        let world = transform.pixel_to_world(naksha_map::core::PixelPoint::new(200.0, 200.0));
        store.add(Waypoint::new(1, "A", world.x, world.y)).unwrap();

        let pos = ScreenPoint::new(203.0, 198.0);
        ctrl.handle_event(
            PointerEvent::Down {
                pos,
                button: PointerButton::Secondary,
            },
            &transform,
            &view,
            &mut store,
        );
        ctrl.handle_event(
            PointerEvent::Up {
                pos,
                button: PointerButton::Secondary,
            },
            &transform,
            &view,
            &mut store,
        );

        assert!(store.is_empty());
        assert_eq!(*ctrl.state(), PointerState::Idle);
    }

    #[test]
    fn test_hit_test_in_view_space() {
        // At 2x zoom, a pointer 16 screen px from the marker would be only
        // 8 map px away; the hit test must use the screen distance
        let model = test_model();
        let transform = model.transform();
        let mut view = ViewState::new();
        view.zoom_in(2.0);
        let mut store = WaypointStore::new();
        let mut ctrl = controller();

        let world = transform.pixel_to_world(naksha_map::core::PixelPoint::new(100.0, 100.0));
        store.add(Waypoint::new(1, "A", world.x, world.y)).unwrap();

        // Marker sits at screen (200, 200); 16 px away is outside radius 10
        ctrl.handle_event(
            PointerEvent::Down {
                pos: ScreenPoint::new(216.0, 200.0),
                button: PointerButton::Primary,
            },
            &transform,
            &view,
            &mut store,
        );
        assert_eq!(*ctrl.state(), PointerState::Idle);

        // 6 px away is inside
        ctrl.handle_event(
            PointerEvent::Down {
                pos: ScreenPoint::new(206.0, 200.0),
                button: PointerButton::Primary,
            },
            &transform,
            &view,
            &mut store,
        );
        assert_eq!(*ctrl.state(), PointerState::Dragging { id: 1 });
    }

    #[test]
    fn test_hit_test_tie_breaks_to_lowest_id() {
        let model = test_model();
        let transform = model.transform();
        let view = ViewState::new();
        let mut store = WaypointStore::new();
        let mut ctrl = controller();

        // Two waypoints at the same world position, added high id first
        let world = transform.pixel_to_world(naksha_map::core::PixelPoint::new(50.0, 50.0));
        store.add(Waypoint::new(9, "high", world.x, world.y)).unwrap();
        store.add(Waypoint::new(3, "low", world.x, world.y)).unwrap();

        ctrl.handle_event(
            PointerEvent::Down {
                pos: ScreenPoint::new(50.0, 50.0),
                button: PointerButton::Primary,
            },
            &transform,
            &view,
            &mut store,
        );
        assert_eq!(*ctrl.state(), PointerState::Dragging { id: 3 });
    }

    #[test]
    fn test_mid_drag_removal_aborts_gesture() {
        let model = test_model();
        let transform = model.transform();
        let view = ViewState::new();
        let mut store = WaypointStore::new();
        let mut ctrl = controller();

        let world = transform.pixel_to_world(naksha_map::core::PixelPoint::new(300.0, 300.0));
        store.add(Waypoint::new(1, "A", world.x, world.y)).unwrap();

        ctrl.handle_event(
            PointerEvent::Down {
                pos: ScreenPoint::new(300.0, 300.0),
                button: PointerButton::Primary,
            },
            &transform,
            &view,
            &mut store,
        );
        assert!(ctrl.state().is_dragging());

        // Waypoint disappears out from under the gesture (e.g. removed via
        // the list panel)
        store.remove(1);

        ctrl.handle_event(
            PointerEvent::Move {
                pos: ScreenPoint::new(310.0, 310.0),
            },
            &transform,
            &view,
            &mut store,
        );
        assert_eq!(*ctrl.state(), PointerState::Idle);
        assert!(store.is_empty());
    }

    #[test]
    fn test_state_name_tracks_gesture() {
        let model = test_model();
        let transform = model.transform();
        let view = ViewState::new();
        let mut store = WaypointStore::new();
        let mut ctrl = controller();

        let world = transform.pixel_to_world(naksha_map::core::PixelPoint::new(300.0, 300.0));
        store.add(Waypoint::new(1, "A", world.x, world.y)).unwrap();
        assert_eq!(ctrl.state().name(), "Idle");

        let pos = ScreenPoint::new(300.0, 300.0);
        ctrl.handle_event(
            PointerEvent::Down {
                pos,
                button: PointerButton::Primary,
            },
            &transform,
            &view,
            &mut store,
        );
        assert_eq!(ctrl.state().name(), "Dragging");

        ctrl.handle_event(
            PointerEvent::Up {
                pos,
                button: PointerButton::Primary,
            },
            &transform,
            &view,
            &mut store,
        );
        assert_eq!(ctrl.state().name(), "Idle");
    }

    #[test]
    fn test_drag_release_does_not_create() {
        let model = test_model();
        let transform = model.transform();
        let view = ViewState::new();
        let mut store = WaypointStore::new();
        let mut ctrl = controller();

        let world = transform.pixel_to_world(naksha_map::core::PixelPoint::new(300.0, 300.0));
        store.add(Waypoint::new(1, "A", world.x, world.y)).unwrap();

        ctrl.handle_event(
            PointerEvent::Down {
                pos: ScreenPoint::new(300.0, 300.0),
                button: PointerButton::Primary,
            },
            &transform,
            &view,
            &mut store,
        );
        // Drag far away from the marker, then release on empty space
        ctrl.handle_event(
            PointerEvent::Move {
                pos: ScreenPoint::new(500.0, 100.0),
            },
            &transform,
            &view,
            &mut store,
        );
        ctrl.handle_event(
            PointerEvent::Up {
                pos: ScreenPoint::new(500.0, 100.0),
                button: PointerButton::Primary,
            },
            &transform,
            &view,
            &mut store,
        );
        assert_eq!(store.len(), 1);
    }
}
