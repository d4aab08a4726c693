use serde::{Deserialize, Serialize};

use crate::{
    location::Location,
    navigation::DriveState,
    poi::Poi,
    surface::MarkerId,
};

#[derive(Debug, Clone, Default)]
/// Mutable state shared by the widget's concurrent operations
pub struct WidgetState {
    view_created: bool,
    viewer: Option<Location>,
    /// Placed POIs, in feed order
    pois: Vec<(MarkerId, Poi)>,
    route_drawn: bool,
    instructions: Vec<String>,
    drive: DriveState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Snapshot of the widget for the UI to display
pub struct WidgetUiState {
    /// The viewer's location, if the device reported one
    pub viewer: Option<Location>,
    /// POIs currently placed on the map
    pub pois: Vec<Poi>,
    /// Whether a route line is currently drawn
    pub route_visible: bool,
    /// Numbered route steps, or a single message if routing failed
    pub route_instructions: Vec<String>,
    /// Whether turn-by-turn navigation is in progress
    pub drive_mode: bool,
    /// Index into `route_instructions` of the current step
    pub current_step: usize,
}

impl WidgetState {
    pub fn view_created(&self) -> bool {
        self.view_created
    }

    pub fn mark_view_created(&mut self) {
        self.view_created = true;
    }

    /// Forget the view and everything drawn on it, returns whether a view existed
    pub fn release_view(&mut self) -> bool {
        let existed = self.view_created;
        self.view_created = false;
        self.pois.clear();
        self.route_drawn = false;
        existed
    }

    pub fn viewer(&self) -> Option<Location> {
        self.viewer
    }

    pub fn set_viewer(&mut self, location: Location) {
        self.viewer = Some(location);
    }

    pub fn add_poi(&mut self, id: MarkerId, poi: Poi) {
        self.pois.push((id, poi));
    }

    pub fn poi_for_marker(&self, id: MarkerId) -> Option<&Poi> {
        self.pois
            .iter()
            .find(|(marker, _)| *marker == id)
            .map(|(_, poi)| poi)
    }

    pub fn find_poi(&self, name: &str) -> Option<&Poi> {
        self.pois
            .iter()
            .map(|(_, poi)| poi)
            .find(|poi| poi.name.eq_ignore_ascii_case(name))
    }

    pub fn poi_count(&self) -> usize {
        self.pois.len()
    }

    pub fn route_drawn(&self) -> bool {
        self.route_drawn
    }

    pub fn mark_route_drawn(&mut self) {
        self.route_drawn = true;
    }

    pub fn clear_route(&mut self) {
        self.route_drawn = false;
    }

    /// Show the steps of a new route and reset navigation
    pub fn set_route(&mut self, instructions: Vec<String>) {
        self.instructions = instructions;
        self.drive = DriveState::Inactive;
    }

    /// Routing produced no steps, show `message` alone
    pub fn set_route_message(&mut self, message: &str) {
        self.instructions = vec![message.to_string()];
        self.drive = DriveState::Inactive;
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    pub fn drive(&self) -> DriveState {
        self.drive
    }

    pub fn start_drive(&mut self) {
        self.drive = self.drive.start(self.instructions.len());
    }

    pub fn next_step(&mut self) {
        self.drive = self.drive.next(self.instructions.len());
    }

    pub fn prev_step(&mut self) {
        self.drive = self.drive.prev();
    }

    /// The instruction navigation is currently on, if driving
    pub fn current_instruction(&self) -> Option<&str> {
        match self.drive {
            DriveState::Active(i) => self.instructions.get(i).map(String::as_str),
            DriveState::Inactive => None,
        }
    }

    pub fn as_ui_state(&self) -> WidgetUiState {
        WidgetUiState {
            viewer: self.viewer,
            pois: self.pois.iter().map(|(_, poi)| poi.clone()).collect(),
            route_visible: self.route_drawn,
            route_instructions: self.instructions.clone(),
            drive_mode: self.drive.is_active(),
            current_step: self.drive.current_step(),
        }
    }
}
