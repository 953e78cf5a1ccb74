//! Viewer session: load boundary and top-level state ownership.

use crate::config::ViewerConfig;
use crate::error::{Error, Result};
use crate::interact::{InteractionController, PointerEvent};
use crate::render::{RenderEngine, SvgSurface};
use crate::view::ViewState;
use log::{debug, info, warn};
use naksha_map::map::grid::{PLACEHOLDER_HEIGHT, PLACEHOLDER_WIDTH};
use naksha_map::{io, MapMetadata, MapModel, OccupancyGrid, SequentialIds, WaypointStore};
use std::fs;
use std::path::Path;

/// Top-level viewer session.
///
/// Owns the currently displayed map (if any), the view state, the waypoint
/// store, and the interaction controller. All mutation happens on the
/// single event thread; loads are last-writer-wins and a failed load never
/// unsets an already displayed model.
pub struct MapSession {
    config: ViewerConfig,
    model: Option<MapModel>,
    view: ViewState,
    store: WaypointStore,
    controller: InteractionController,
    engine: RenderEngine,
}

impl MapSession {
    /// Create a session with no map loaded
    pub fn new(config: ViewerConfig) -> Self {
        let controller = InteractionController::new(
            &config.interaction,
            config.render.default_waypoint_color.clone(),
            Box::new(SequentialIds::new()),
        );
        let engine = RenderEngine::new(config.render.clone());
        Self {
            config,
            model: None,
            view: ViewState::new(),
            store: WaypointStore::new(),
            controller,
            engine,
        }
    }

    /// Currently displayed map, if a load has succeeded
    pub fn model(&self) -> Option<&MapModel> {
        self.model.as_ref()
    }

    /// Current zoom/pan state
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Live waypoint collection
    pub fn store(&self) -> &WaypointStore {
        &self.store
    }

    /// Load a map from its description file.
    ///
    /// The grid image path comes from the description's `image` field,
    /// resolved relative to the description file. A failed grid decode
    /// degrades to the tagged placeholder grid instead of failing the
    /// load; a failed metadata parse returns the error and leaves any
    /// currently displayed model untouched.
    pub fn load_map<P: AsRef<Path>>(&mut self, description_path: P) -> Result<()> {
        let description_path = description_path.as_ref();
        let text = fs::read_to_string(description_path)?;
        let metadata = MapMetadata::parse(&text)?;

        let grid = self.load_grid(description_path, &metadata);
        if grid.is_synthetic() {
            warn!("showing placeholder grid for {}", description_path.display());
        }

        info!(
            "map loaded: {}x{} at {} m/px, origin ({}, {})",
            grid.width(),
            grid.height(),
            metadata.resolution,
            metadata.origin.x,
            metadata.origin.y
        );
        // Replace only on success: a newer load supersedes the displayed
        // model, a failed one never clears it
        self.model = Some(MapModel::new(metadata, grid));
        Ok(())
    }

    fn load_grid(&self, description_path: &Path, metadata: &MapMetadata) -> OccupancyGrid {
        let Some(image) = metadata.image.as_deref() else {
            warn!("map description has no image field");
            return OccupancyGrid::placeholder(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT);
        };
        let image_path = description_path
            .parent()
            .unwrap_or(Path::new("."))
            .join(image);

        let bytes = match fs::read(&image_path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("failed to read {}: {e}", image_path.display());
                return OccupancyGrid::placeholder(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT);
            }
        };
        match OccupancyGrid::decode_pgm(&bytes) {
            Ok(grid) => grid,
            Err(e) => {
                warn!("failed to decode {}: {e}", image_path.display());
                OccupancyGrid::placeholder(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT)
            }
        }
    }

    /// Feed a pointer event into the interaction state machine.
    ///
    /// Events are dropped until a map is loaded; without a model there is
    /// no pixel↔world transform to resolve them against.
    pub fn pointer_event(&mut self, event: PointerEvent) {
        let Some(model) = &self.model else {
            debug!("pointer event ignored: no map loaded");
            return;
        };
        let transform = model.transform();
        self.controller
            .handle_event(event, &transform, &self.view, &mut self.store);
    }

    /// Zoom in by the configured step
    pub fn zoom_in(&mut self) {
        self.view.zoom_in(self.config.interaction.zoom_step);
    }

    /// Zoom out by the configured step
    pub fn zoom_out(&mut self) {
        self.view.zoom_out(self.config.interaction.zoom_step);
    }

    /// Pan the view by a delta in map pixels
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.view.pan(dx, dy);
    }

    /// Restore the identity view
    pub fn reset_view(&mut self) {
        self.view.reset();
    }

    /// Export the waypoint set to a JSON file
    pub fn export_waypoints<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        io::export_file(&path, self.store.waypoints())?;
        info!(
            "exported {} waypoints to {}",
            self.store.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Import a waypoint set from a JSON file, replacing the collection.
    ///
    /// A malformed document or duplicate ids leave the current collection
    /// untouched. On success the id source is bumped past the imported
    /// ids so future allocations never collide.
    pub fn import_waypoints<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let waypoints = io::import_file(&path)?;
        self.store.replace_all(waypoints)?;
        if let Some(max) = self.store.max_id() {
            self.controller.reserve_ids_through(max);
        }
        info!(
            "imported {} waypoints from {}",
            self.store.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Remove all waypoints
    pub fn clear_waypoints(&mut self) {
        self.store.clear();
    }

    /// Render the current frame to an SVG string
    pub fn render_svg(&self) -> Result<String> {
        let model = self.model.as_ref().ok_or(Error::NoMap)?;
        let mut surface = SvgSurface::new();
        self.engine
            .render(model, &self.view, &self.store, &mut surface)?;
        Ok(surface.to_svg_string())
    }
}
