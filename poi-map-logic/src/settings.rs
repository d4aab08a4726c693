use serde::{Deserialize, Serialize};

use crate::location::Location;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Where the map view is looking
pub struct Camera {
    pub center: Location,
    pub zoom: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Map-level constants for the widget
pub struct WidgetSettings {
    /// Camera the view is created with, before the viewer's location is known
    pub initial_camera: Camera,
    /// Zoom level used when recentering on the viewer
    pub viewer_zoom: f64,
    /// Id shared by the route's source and its line layer
    pub route_id: String,
    /// CSS color of the route line
    pub route_color: String,
    /// Width of the route line in pixels
    pub route_width: f64,
    /// CSS color of the marker showing the viewer
    pub viewer_color: String,
    /// CSS color of POI markers
    pub poi_color: String,
}

impl WidgetSettings {
    pub fn viewer_camera(&self, viewer: Location) -> Camera {
        Camera {
            center: viewer,
            zoom: self.viewer_zoom,
        }
    }
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            // Continental US
            initial_camera: Camera {
                center: Location::new(40.00811, -98.54818),
                zoom: 4.0,
            },
            viewer_zoom: 12.0,
            route_id: "route".to_string(),
            route_color: "#3887be".to_string(),
            route_width: 5.0,
            viewer_color: "#d62828".to_string(),
            poi_color: "#3fb1ce".to_string(),
        }
    }
}
