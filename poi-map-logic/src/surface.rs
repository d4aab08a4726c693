use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{directions::LineString, location::Location, prelude::*, settings::Camera};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// What the host environment can do, as detected by the host itself. The widget reads this
/// once when mounting.
pub struct Capabilities {
    /// A map can be drawn (false during server-side rendering and similar)
    pub rendering: bool,
    /// The device can be asked for its position
    pub geolocation: bool,
}

impl Capabilities {
    pub const FULL: Self = Self {
        rendering: true,
        geolocation: true,
    };

    pub const NONE: Self = Self {
        rendering: false,
        geolocation: false,
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Opaque reference to the host element the map draws into
pub struct MountPoint(pub String);

impl MountPoint {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerId(pub Uuid);

impl MarkerId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A pin on the map
pub struct Marker {
    pub location: Location,
    pub color: String,
    /// Text shown in a popup when the marker is opened
    pub popup: Option<String>,
    /// Whether clicks on this marker are reported back to the widget
    pub interactive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A line layer drawing a GeoJSON source
pub struct LineLayer {
    pub id: String,
    pub source: String,
    pub color: String,
    pub width: f64,
}

/// The rendering engine the widget draws on. Implementations own the actual map view,
/// so every method takes `&self`.
pub trait MapSurface: Send + Sync {
    /// Create the map view inside `mount` looking at `camera`
    fn create_view(&self, mount: &MountPoint, camera: Camera) -> Result;
    /// Move the camera
    fn set_camera(&self, camera: Camera);
    /// Add a GeoJSON line source
    fn add_source(&self, id: &str, geometry: &LineString) -> Result;
    /// Add a layer drawing an existing source
    fn add_layer(&self, layer: &LineLayer) -> Result;
    fn remove_layer(&self, id: &str);
    fn remove_source(&self, id: &str);
    /// Place a marker, the returned id is what clicks will be reported with
    fn add_marker(&self, marker: Marker) -> Result<MarkerId>;
    /// Tear down the view and everything attached to it
    fn remove_view(&self);
}
