//! # Naksha-View: Occupancy Map Waypoint Viewer
//!
//! Viewer shell on top of [`naksha_map`]: viewer configuration, zoom/pan
//! view state, the pointer-interaction state machine, the SVG render
//! engine, and the map-loading session with its degrade-gracefully policy.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                   main                      │  ← CLI entry point
//! └─────────────────────────────────────────────┘
//!                       │
//! ┌─────────────────────────────────────────────┐
//! │                   app/                      │  ← Session, load boundary
//! └─────────────────────────────────────────────┘
//!            │                        │
//! ┌───────────────────┐    ┌────────────────────┐
//! │     interact/     │    │      render/       │  ← Gestures / drawing
//! └───────────────────┘    └────────────────────┘
//!            │                        │
//! ┌─────────────────────────────────────────────┐
//! │              view + naksha-map              │  ← View state, map core
//! └─────────────────────────────────────────────┘
//! ```
//!
//! All interaction and rendering is synchronous and single-threaded; the
//! only I/O happens at the load/export boundary in [`app`].

pub mod app;
pub mod config;
pub mod error;
pub mod interact;
pub mod render;
pub mod view;

pub use app::MapSession;
pub use config::ViewerConfig;
pub use error::{Error, Result};
pub use interact::{InteractionController, PointerButton, PointerEvent, PointerState};
pub use render::{DrawSurface, RenderEngine, SvgSurface};
pub use view::{ScreenPoint, ViewState};
