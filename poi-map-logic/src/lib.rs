mod coords;
mod directions;
mod location;
mod navigation;
mod poi;
mod settings;
mod surface;
mod widget;
mod widget_state;

pub use coords::{Axis, RawCoordinate};
pub use directions::{
    DirectionsLeg, DirectionsResponse, DirectionsRoute, DirectionsService, DirectionsStep,
    LineString, Maneuver, NO_ROUTE_MESSAGE, ROUTE_ERROR_MESSAGE,
};
pub use location::{Location, LocationService};
pub use navigation::DriveState;
pub use poi::{Poi, PoiFeed, RawPoi};
pub use settings::{Camera, WidgetSettings};
pub use surface::{Capabilities, LineLayer, MapSurface, Marker, MarkerId, MountPoint};
pub use widget::{MapWidget, UiUpdateSender};
pub use widget_state::WidgetUiState;

pub mod prelude {
    use anyhow::Error as AnyhowError;
    use std::result::Result as StdResult;
    pub type Result<T = (), E = AnyhowError> = StdResult<T, E>;
    pub use anyhow::Context;
}
