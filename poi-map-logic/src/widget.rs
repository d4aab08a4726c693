use log::{debug, error, info, warn};
use tokio::sync::{RwLock, RwLockWriteGuard};
use tokio_util::sync::CancellationToken;

use crate::{
    directions::{DirectionsService, LineString, NO_ROUTE_MESSAGE, ROUTE_ERROR_MESSAGE},
    location::{Location, LocationService},
    poi::{Poi, PoiFeed},
    prelude::*,
    settings::WidgetSettings,
    surface::{Capabilities, LineLayer, MapSurface, Marker, MarkerId, MountPoint},
    widget_state::{WidgetState, WidgetUiState},
};

/// Message shown when a route is requested before the device reported a position
const NO_VIEWER_MESSAGE: &str = "Your location is not available yet, can't plan a route.";

pub trait UiUpdateSender: Send + Sync {
    /// The widget's state changed, the UI should re-read it
    fn send_update(&self);
    /// Show an error message to the user
    fn show_error(&self, message: &str);
}

/// Struct representing the map feature for a single screen. Draws on a [MapSurface], gets the
/// viewer's position from a [LocationService], POIs from a [PoiFeed], and routes from a
/// [DirectionsService]. Changes are announced through a [UiUpdateSender].
///
/// Every failure degrades the feature instead of being returned, nothing here is fatal to the
/// host.
pub struct MapWidget<M, L, F, D, U>
where
    M: MapSurface,
    L: LocationService,
    F: PoiFeed,
    D: DirectionsService,
    U: UiUpdateSender,
{
    state: RwLock<WidgetState>,
    settings: WidgetSettings,
    capabilities: Capabilities,
    surface: M,
    location: L,
    feed: F,
    directions: D,
    ui: U,
    cancel: CancellationToken,
}

impl<M, L, F, D, U> MapWidget<M, L, F, D, U>
where
    M: MapSurface,
    L: LocationService,
    F: PoiFeed,
    D: DirectionsService,
    U: UiUpdateSender,
{
    pub fn new(
        settings: WidgetSettings,
        capabilities: Capabilities,
        surface: M,
        location: L,
        feed: F,
        directions: D,
        ui: U,
    ) -> Self {
        Self {
            state: RwLock::new(WidgetState::default()),
            settings,
            capabilities,
            surface,
            location,
            feed,
            directions,
            ui,
            cancel: CancellationToken::new(),
        }
    }

    /// Create the map view in `mount`, then locate the viewer and load POIs concurrently.
    /// Returns once both have finished or the widget is unmounted. Does nothing when the host
    /// can't render.
    pub async fn mount(&self, mount: &MountPoint) {
        if !self.capabilities.rendering {
            debug!("Rendering not supported here, skipping map setup");
            return;
        }

        if !self.create_view(mount).await {
            return;
        }

        tokio::select! {
            biased;

            _ = self.cancel.cancelled() => {
                info!("Widget unmounted before setup finished");
            }

            _ = async { futures::join!(self.locate_viewer(), self.load_pois()) } => {
                debug!("Map setup finished");
            }
        }
    }

    async fn create_view(&self, mount: &MountPoint) -> bool {
        let mut state = self.state.write().await;

        if self.cancel.is_cancelled() {
            return false;
        }

        if state.view_created() {
            warn!("Map view already exists, ignoring mount");
            return false;
        }

        match self
            .surface
            .create_view(mount, self.settings.initial_camera)
        {
            Ok(()) => {
                state.mark_view_created();
                info!("Created map view in {:?}", mount.0);
                true
            }
            Err(why) => {
                error!("Failed to create map view: {why:?}");
                false
            }
        }
    }

    /// Release the map view and stop any work still in flight. Safe to call when mounting
    /// failed or never happened.
    pub async fn unmount(&self) {
        self.cancel.cancel();
        let mut state = self.state.write().await;
        if state.release_view() {
            self.surface.remove_view();
            info!("Released map view");
        }
    }

    async fn locate_viewer(&self) {
        if !self.capabilities.geolocation {
            warn!("Geolocation not supported, continuing without the viewer's location");
            return;
        }

        let location = match self.location.current_position().await {
            Ok(location) if location.is_valid() => location,
            Ok(location) => {
                warn!("Device reported an invalid location: {location:?}");
                return;
            }
            Err(why) => {
                warn!("Couldn't get the viewer's location: {why:?}");
                return;
            }
        };

        let mut state = self.state.write().await;
        if !state.view_created() {
            return;
        }

        state.set_viewer(location);

        let marker = Marker {
            location,
            color: self.settings.viewer_color.clone(),
            popup: Some("You are here".to_string()),
            interactive: false,
        };
        if let Err(why) = self.surface.add_marker(marker) {
            warn!("Failed to place viewer marker: {why:?}");
        }
        self.surface
            .set_camera(self.settings.viewer_camera(location));
        drop(state);

        info!("Viewer located at {}, {}", location.lat, location.lng);
        self.ui.send_update();
    }

    async fn load_pois(&self) {
        let raw = match self.feed.fetch_pois().await {
            Ok(raw) => raw,
            Err(why) => {
                error!("Failed to load points of interest: {why:?}");
                return;
            }
        };

        let total = raw.len();
        let pois = Poi::normalize_all(raw);

        let mut state = self.state.write().await;
        if !state.view_created() {
            return;
        }

        for poi in pois {
            let marker = Marker {
                location: poi.location,
                color: self.settings.poi_color.clone(),
                popup: Some(poi.name.clone()),
                interactive: true,
            };
            match self.surface.add_marker(marker) {
                Ok(id) => state.add_poi(id, poi),
                Err(why) => warn!("Failed to place marker for {}: {why:?}", poi.name),
            }
        }

        info!("Placed {} of {total} points of interest", state.poi_count());
        drop(state);

        self.ui.send_update();
    }

    /// Handle a click on a marker. Clicks on POI markers plan a route there, anything else is
    /// ignored.
    pub async fn select_marker(&self, id: MarkerId) {
        let poi = self.state.read().await.poi_for_marker(id).cloned();
        if let Some(poi) = poi {
            self.select_poi(&poi).await;
        } else {
            debug!("Ignoring click on non-POI marker {id:?}");
        }
    }

    /// Plan a route from the viewer to `poi`, the user gets an error if the viewer's location
    /// isn't known.
    pub async fn select_poi(&self, poi: &Poi) {
        let viewer = self.state.read().await.viewer();
        if let Some(viewer) = viewer {
            info!("Planning route to {}", poi.name);
            self.plan_route(viewer, poi.location).await;
        } else {
            warn!("Route to {} requested without a viewer location", poi.name);
            self.ui.show_error(NO_VIEWER_MESSAGE);
        }
    }

    /// Request a driving route, then draw it and show its steps. Empty results and failures
    /// replace the steps with a single message.
    pub async fn plan_route(&self, from: Location, to: Location) {
        let res = tokio::select! {
            biased;

            _ = self.cancel.cancelled() => {
                return;
            }

            res = self.directions.driving_route(from, to) => res,
        };

        let mut state = self.state.write().await;

        match res {
            Ok(resp) => match resp.best_route() {
                Some(route) => {
                    if state.view_created() {
                        if let Err(why) = self.draw_route(&mut state, &route.geometry) {
                            error!("Failed to draw route: {why:?}");
                        }
                    }
                    state.set_route(route.instructions());
                }
                None => {
                    info!("Directions service found no route");
                    state.set_route_message(NO_ROUTE_MESSAGE);
                }
            },
            Err(why) => {
                error!("Directions request failed: {why:?}");
                state.set_route_message(ROUTE_ERROR_MESSAGE);
            }
        }

        drop(state);
        self.ui.send_update();
    }

    fn draw_route(&self, state: &mut WidgetState, geometry: &LineString) -> Result {
        let id = self.settings.route_id.as_str();

        if state.route_drawn() {
            self.surface.remove_layer(id);
            self.surface.remove_source(id);
            state.clear_route();
        }

        self.surface
            .add_source(id, geometry)
            .context("Failed to add route source")?;
        state.mark_route_drawn();

        let layer = LineLayer {
            id: id.to_string(),
            source: id.to_string(),
            color: self.settings.route_color.clone(),
            width: self.settings.route_width,
        };
        self.surface
            .add_layer(&layer)
            .context("Failed to add route layer")
    }

    async fn update_drive(&self, f: impl FnOnce(&mut WidgetState)) {
        let mut state = self.state.write().await;
        f(&mut *state);
        drop(state);
        self.ui.send_update();
    }

    /// Begin turn-by-turn navigation at the first step, only possible with more than one step
    pub async fn start_drive(&self) {
        self.update_drive(WidgetState::start_drive).await;
    }

    /// Go to the next step, stays on the last one
    pub async fn next_step(&self) {
        self.update_drive(WidgetState::next_step).await;
    }

    /// Go to the previous step, stays on the first one
    pub async fn prev_step(&self) {
        self.update_drive(WidgetState::prev_step).await;
    }

    pub async fn get_ui_state(&self) -> WidgetUiState {
        self.state.read().await.as_ui_state()
    }

    /// Look up a placed POI by name, case-insensitive
    pub async fn find_poi(&self, name: &str) -> Option<Poi> {
        self.state.read().await.find_poi(name).cloned()
    }

    pub async fn current_instruction(&self) -> Option<String> {
        self.state
            .read()
            .await
            .current_instruction()
            .map(str::to_string)
    }

    pub async fn lock_state(&self) -> RwLockWriteGuard<'_, WidgetState> {
        self.state.write().await
    }
}
