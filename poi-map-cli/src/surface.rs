use std::{
    collections::{HashMap, HashSet},
    sync::{Mutex, MutexGuard, PoisonError},
};

use anyhow::bail;
use log::{debug, info};
use poi_map_logic::{
    Camera, LineLayer, LineString, MapSurface, Marker, MarkerId, MountPoint, prelude::*,
};

#[derive(Default)]
struct SurfaceState {
    mount: Option<MountPoint>,
    camera: Option<Camera>,
    sources: HashSet<String>,
    layers: HashSet<String>,
    markers: HashMap<MarkerId, Marker>,
}

/// A [MapSurface] that draws nothing, it keeps track of what would be on the map and logs every
/// change.
#[derive(Default)]
pub struct ConsoleSurface(Mutex<SurfaceState>);

impl ConsoleSurface {
    fn lock(&self) -> MutexGuard<'_, SurfaceState> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_view(&self) -> Result<MutexGuard<'_, SurfaceState>> {
        let state = self.lock();
        if state.mount.is_none() {
            bail!("No map view");
        }
        Ok(state)
    }
}

#[cfg(test)]
impl ConsoleSurface {
    fn marker_count(&self) -> usize {
        self.lock().markers.len()
    }

    fn camera(&self) -> Option<Camera> {
        self.lock().camera
    }
}

impl MapSurface for ConsoleSurface {
    fn create_view(&self, mount: &MountPoint, camera: Camera) -> Result {
        let mut state = self.lock();
        if let Some(existing) = &state.mount {
            bail!("A view already exists in {:?}", existing.0);
        }
        info!(
            "[map] view in {:?} at {}, {} zoom {}",
            mount.0, camera.center.lat, camera.center.lng, camera.zoom
        );
        state.mount = Some(mount.clone());
        state.camera = Some(camera);
        Ok(())
    }

    fn set_camera(&self, camera: Camera) {
        info!(
            "[map] camera to {}, {} zoom {}",
            camera.center.lat, camera.center.lng, camera.zoom
        );
        self.lock().camera = Some(camera);
    }

    fn add_source(&self, id: &str, geometry: &LineString) -> Result {
        let mut state = self.lock_view()?;
        if !state.sources.insert(id.to_string()) {
            bail!("There is already a source with id {id:?}");
        }
        info!(
            "[map] source {id:?} with {} points",
            geometry.coordinates.len()
        );
        Ok(())
    }

    fn add_layer(&self, layer: &LineLayer) -> Result {
        let mut state = self.lock_view()?;
        if !state.sources.contains(&layer.source) {
            bail!("Source {:?} does not exist", layer.source);
        }
        if !state.layers.insert(layer.id.clone()) {
            bail!("There is already a layer with id {:?}", layer.id);
        }
        info!(
            "[map] line layer {:?} ({}, {}px)",
            layer.id, layer.color, layer.width
        );
        Ok(())
    }

    fn remove_layer(&self, id: &str) {
        if self.lock().layers.remove(id) {
            info!("[map] removed layer {id:?}");
        } else {
            debug!("[map] no layer {id:?} to remove");
        }
    }

    fn remove_source(&self, id: &str) {
        if self.lock().sources.remove(id) {
            info!("[map] removed source {id:?}");
        } else {
            debug!("[map] no source {id:?} to remove");
        }
    }

    fn add_marker(&self, marker: Marker) -> Result<MarkerId> {
        let mut state = self.lock_view()?;
        let id = MarkerId::new_v4();
        info!(
            "[map] marker at {}, {}{}",
            marker.location.lat,
            marker.location.lng,
            marker
                .popup
                .as_deref()
                .map(|p| format!(" \"{p}\""))
                .unwrap_or_default()
        );
        state.markers.insert(id, marker);
        Ok(id)
    }

    fn remove_view(&self) {
        let mut state = self.lock();
        if let Some(mount) = state.mount.take() {
            info!("[map] removed view from {:?}", mount.0);
        }
        *state = SurfaceState::default();
    }
}
