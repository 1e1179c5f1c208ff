//! Binding between the candidate set and a map widget.
//!
//! The widget itself is external: anything implementing `MapView` can
//! show markers and move its camera. `MapBinding` owns one, pushes it the
//! current candidates whenever they change, and detaches it when dropped.

pub mod viewport;

use im::Vector;
use tracing::debug;

use crate::core::{Catalog, CityId, Coordinates};

pub use viewport::{camera_for, Bounds, Camera, MapSettings};

/// One city marker.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// City shown.
    pub city: CityId,

    /// Tooltip / label text.
    pub label: String,

    /// Where to draw it.
    pub position: Coordinates,
}

/// A map widget.
///
/// Implementations receive complete marker sets; each call to
/// `render_markers` replaces whatever was shown before.
pub trait MapView {
    /// Replace all markers.
    fn render_markers(&mut self, markers: &[Marker]);

    /// Move the camera.
    fn set_camera(&mut self, camera: Camera);

    /// Release the widget's resources. Called exactly once, on teardown.
    fn detach(&mut self);
}

/// Markers for every candidate that has coordinates, in candidate order.
///
/// Cities without coordinates are skipped.
#[must_use]
pub fn markers_for(catalog: &Catalog, candidates: &Vector<CityId>) -> Vec<Marker> {
    candidates
        .iter()
        .filter_map(|&id| {
            let city = catalog.get(id)?;
            let position = city.coordinates?;
            Some(Marker {
                city: id,
                label: city.name.clone(),
                position,
            })
        })
        .collect()
}

/// Scoped attachment of a `MapView` to the game.
pub struct MapBinding<V: MapView> {
    view: V,
    settings: MapSettings,
    shown: Option<Vector<CityId>>,
}

impl<V: MapView> MapBinding<V> {
    /// Attach a view. Nothing is rendered until the first `sync`.
    pub fn attach(view: V, settings: MapSettings) -> Self {
        Self {
            view,
            settings,
            shown: None,
        }
    }

    /// Push `candidates` to the view if they differ from what it shows.
    ///
    /// Returns true if the view was updated.
    pub fn sync(&mut self, catalog: &Catalog, candidates: &Vector<CityId>) -> bool {
        if self.shown.as_ref() == Some(candidates) {
            return false;
        }

        let markers = markers_for(catalog, candidates);
        self.view.render_markers(&markers);

        let camera = camera_for(
            candidates.len(),
            markers.iter().map(|m| m.position),
            &self.settings,
        );
        if let Some(camera) = camera {
            self.view.set_camera(camera);
        }

        debug!(
            candidates = candidates.len(),
            markers = markers.len(),
            ?camera,
            "Map synced"
        );

        self.shown = Some(candidates.clone());
        true
    }

    /// The attached view.
    pub fn view(&self) -> &V {
        &self.view
    }
}

impl<V: MapView> Drop for MapBinding<V> {
    fn drop(&mut self) {
        self.view.detach();
    }
}
