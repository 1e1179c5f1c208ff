//! Map viewport selection.
//!
//! When few candidates remain the map zooms to fit them. When many remain
//! it shows the whole world.

use serde::{Deserialize, Serialize};

use crate::core::Coordinates;

/// Default candidate count at or above which the map shows the world.
pub const DEFAULT_FIT_THRESHOLD: usize = 100;

/// Viewport tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    /// Fit to candidates only when fewer than this many remain.
    pub fit_threshold: usize,

    /// Degrees added on every side of the fitted box.
    pub padding_degrees: f64,

    /// Smallest fitted box width and height, so one city is not a point.
    pub min_span_degrees: f64,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            fit_threshold: DEFAULT_FIT_THRESHOLD,
            padding_degrees: 2.0,
            min_span_degrees: 6.0,
        }
    }
}

/// A latitude/longitude box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// The whole globe.
    pub const WORLD: Bounds = Bounds {
        south: -90.0,
        west: -180.0,
        north: 90.0,
        east: 180.0,
    };

    /// Smallest box containing every point. `None` for no points.
    #[must_use]
    pub fn enclosing(points: impl IntoIterator<Item = Coordinates>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Bounds {
                    south: p.lat,
                    west: p.lng,
                    north: p.lat,
                    east: p.lng,
                },
                Some(b) => Bounds {
                    south: b.south.min(p.lat),
                    west: b.west.min(p.lng),
                    north: b.north.max(p.lat),
                    east: b.east.max(p.lng),
                },
            })
        })
    }

    /// Grow by `padding` on each side and to at least `min_span` per axis,
    /// then clamp to the globe.
    #[must_use]
    pub fn padded(self, padding: f64, min_span: f64) -> Self {
        let (south, north) = widen(self.south, self.north, padding, min_span);
        let (west, east) = widen(self.west, self.east, padding, min_span);
        Bounds {
            south: south.max(Self::WORLD.south),
            west: west.max(Self::WORLD.west),
            north: north.min(Self::WORLD.north),
            east: east.min(Self::WORLD.east),
        }
    }

    /// Check whether a point lies inside the box.
    #[must_use]
    pub fn contains(&self, point: Coordinates) -> bool {
        (self.south..=self.north).contains(&point.lat) && (self.west..=self.east).contains(&point.lng)
    }
}

fn widen(low: f64, high: f64, padding: f64, min_span: f64) -> (f64, f64) {
    let (low, high) = (low - padding, high + padding);
    let short = min_span - (high - low);
    if short > 0.0 {
        (low - short / 2.0, high + short / 2.0)
    } else {
        (low, high)
    }
}

/// What the map should show.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Camera {
    /// World overview.
    World,
    /// Zoomed to a box.
    Fit(Bounds),
}

impl Camera {
    /// The visible box.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        match self {
            Camera::World => Bounds::WORLD,
            Camera::Fit(bounds) => *bounds,
        }
    }
}

/// Pick a camera for `candidate_count` candidates located at `points`.
///
/// Returns `None` when the camera should stay where it is: no candidates,
/// or none of the few remaining have coordinates.
#[must_use]
pub fn camera_for(
    candidate_count: usize,
    points: impl IntoIterator<Item = Coordinates>,
    settings: &MapSettings,
) -> Option<Camera> {
    if candidate_count == 0 {
        return None;
    }
    if candidate_count >= settings.fit_threshold {
        return Some(Camera::World);
    }
    Bounds::enclosing(points)
        .map(|b| Camera::Fit(b.padded(settings.padding_degrees, settings.min_span_degrees)))
}
