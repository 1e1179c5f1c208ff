//! World map drawn on a ratatui canvas.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{
        canvas::{Canvas, Map, MapResolution, Points},
        Block, Borders, Widget,
    },
};
use tracing::info;

use crate::map::{Camera, MapView, Marker};

/// Labels are only printed when at most this many markers are shown.
const LABEL_LIMIT: usize = 12;

/// Canvas-backed `MapView`.
#[derive(Clone, Debug)]
pub struct TerminalMap {
    markers: Vec<Marker>,
    camera: Camera,
    attached: bool,
}

impl Default for TerminalMap {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalMap {
    /// A world view with no markers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            markers: Vec::new(),
            camera: Camera::World,
            attached: true,
        }
    }

    /// Markers currently shown.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Current camera.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// False once detached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

impl MapView for TerminalMap {
    fn render_markers(&mut self, markers: &[Marker]) {
        self.markers = markers.to_vec();
    }

    fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    fn detach(&mut self) {
        self.markers.clear();
        self.attached = false;
        info!("Map detached");
    }
}

impl Widget for &TerminalMap {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bounds = self.camera.bounds();
        let title = match self.camera {
            Camera::World => " World ".to_string(),
            Camera::Fit(_) => format!(" {} on map ", self.markers.len()),
        };
        let points: Vec<(f64, f64)> = self
            .markers
            .iter()
            .map(|m| (m.position.lng, m.position.lat))
            .collect();
        let labels = self.markers.len() <= LABEL_LIMIT;

        Canvas::default()
            .block(Block::default().title(title).borders(Borders::ALL))
            .marker(symbols::Marker::Braille)
            .x_bounds([bounds.west, bounds.east])
            .y_bounds([bounds.south, bounds.north])
            .paint(|ctx| {
                ctx.draw(&Map {
                    resolution: MapResolution::High,
                    color: Color::DarkGray,
                });
                ctx.layer();
                ctx.draw(&Points {
                    coords: &points,
                    color: Color::Yellow,
                });
                if labels {
                    for marker in &self.markers {
                        ctx.print(
                            marker.position.lng,
                            marker.position.lat,
                            ratatui::text::Span::styled(marker.label.clone(), Style::default().fg(Color::White)),
                        );
                    }
                }
            })
            .render(area, buf);
    }
}
