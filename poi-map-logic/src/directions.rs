use serde::{Deserialize, Serialize};

use crate::{location::Location, prelude::*};

/// Instruction shown in place of steps when the service found no route
pub const NO_ROUTE_MESSAGE: &str = "No route found.";
/// Instruction shown in place of steps when the directions request failed
pub const ROUTE_ERROR_MESSAGE: &str = "Failed to fetch directions.";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
/// GeoJSON LineString, coordinates are `[lng, lat]`
pub struct LineString {
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsRoute {
    pub geometry: LineString,
    #[serde(default)]
    pub legs: Vec<DirectionsLeg>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectionsLeg {
    #[serde(default)]
    pub steps: Vec<DirectionsStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsStep {
    pub maneuver: Maneuver,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maneuver {
    pub instruction: String,
}

impl DirectionsResponse {
    /// The route to draw, the service orders its best route first
    pub fn best_route(&self) -> Option<&DirectionsRoute> {
        self.routes.first()
    }
}

impl DirectionsRoute {
    /// Numbered, human-readable steps of the first leg: `"1. Head north"`, `"2. ..."`
    pub fn instructions(&self) -> Vec<String> {
        self.legs
            .first()
            .map(|leg| {
                leg.steps
                    .iter()
                    .enumerate()
                    .map(|(i, step)| format!("{}. {}", i + 1, step.maneuver.instruction))
                    .collect()
            })
            .unwrap_or_default()
    }
}

pub trait DirectionsService: Send + Sync {
    /// Request a driving route from `from` to `to` with turn-by-turn steps
    fn driving_route(
        &self,
        from: Location,
        to: Location,
    ) -> impl Future<Output = Result<DirectionsResponse>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "code": "Ok",
        "routes": [{
            "geometry": {"type": "LineString", "coordinates": [[-98.5, 40.0], [-98.4, 40.1]]},
            "legs": [{
                "steps": [
                    {"maneuver": {"instruction": "Head north on Main Street", "type": "depart"}},
                    {"maneuver": {"instruction": "Turn right onto 2nd Avenue", "type": "turn"}},
                    {"maneuver": {"instruction": "You have arrived", "type": "arrive"}}
                ]
            }],
            "distance": 1520.4
        }]
    }"#;

    #[test]
    fn test_parse_and_number_steps() {
        let resp: DirectionsResponse = serde_json::from_str(SAMPLE).expect("Failed to parse");
        let route = resp.best_route().expect("No route");

        assert_eq!(route.geometry.coordinates.len(), 2);
        assert_eq!(
            route.instructions(),
            vec![
                "1. Head north on Main Street",
                "2. Turn right onto 2nd Avenue",
                "3. You have arrived",
            ]
        );
    }

    #[test]
    fn test_empty_routes() {
        let resp: DirectionsResponse =
            serde_json::from_str(r#"{"code": "NoRoute", "routes": []}"#).expect("Failed to parse");
        assert!(resp.best_route().is_none());
    }

    #[test]
    fn test_route_without_legs() {
        let route = DirectionsRoute {
            geometry: LineString::default(),
            legs: vec![],
        };
        assert!(route.instructions().is_empty());
    }

    #[test]
    fn test_line_string_keeps_geojson_type() {
        let json = serde_json::to_value(LineString {
            coordinates: vec![[1.0, 2.0]],
        })
        .expect("Failed to serialize");
        assert_eq!(json["type"], "LineString");
    }
}
