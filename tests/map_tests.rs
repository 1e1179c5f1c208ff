//! Map binding integration tests.
//!
//! A recording `MapView` follows a real game on the built-in dataset.

use std::cell::RefCell;
use std::rc::Rc;

use city_hunt::core::{CityId, Coordinates};
use city_hunt::dataset;
use city_hunt::game::GameState;
use city_hunt::map::{markers_for, Camera, MapBinding, MapSettings, MapView, Marker};
use city_hunt::tui::TerminalMap;

#[derive(Debug, Default)]
struct Recording {
    markers: Vec<Vec<CityId>>,
    cameras: Vec<Camera>,
    detached: bool,
}

struct RecordingView(Rc<RefCell<Recording>>);

impl MapView for RecordingView {
    fn render_markers(&mut self, markers: &[Marker]) {
        self.0.borrow_mut().markers.push(markers.iter().map(|m| m.city).collect());
    }

    fn set_camera(&mut self, camera: Camera) {
        self.0.borrow_mut().cameras.push(camera);
    }

    fn detach(&mut self) {
        self.0.borrow_mut().detached = true;
    }
}

/// Test the map following a game from world view to a single city.
#[test]
fn test_map_follows_game() {
    let data = dataset::builtin().unwrap();
    let recording = Rc::new(RefCell::new(Recording::default()));
    let settings = MapSettings {
        fit_threshold: 20,
        ..MapSettings::default()
    };

    {
        let mut binding = MapBinding::attach(RecordingView(recording.clone()), settings);

        let start = GameState::new(&data);
        assert!(binding.sync(&data.catalog, start.candidates()));

        // Africa -> Southern -> Yes (coastal) leaves Cape Town
        let mut state = start;
        for choice in [2, 1, 0] {
            state = state.answer(&data, choice).unwrap();
            binding.sync(&data.catalog, state.candidates());
        }
        let cape_town = data.catalog.find_key("cape_town").unwrap();
        assert_eq!(state.candidates(), &im::vector![cape_town]);

        let log = recording.borrow();
        assert_eq!(log.markers.len(), 4);
        assert_eq!(log.markers[0].len(), data.catalog.len());
        assert_eq!(log.cameras[0], Camera::World);

        let position = data.catalog.get(cape_town).unwrap().coordinates.unwrap();
        match log.cameras.last() {
            Some(Camera::Fit(bounds)) => assert!(bounds.contains(position)),
            other => panic!("unexpected camera: {other:?}"),
        }
        assert!(!log.detached);
    }

    assert!(recording.borrow().detached);
}

/// Test that an unchanged candidate set is not pushed again.
#[test]
fn test_redundant_sync_skipped() {
    let data = dataset::builtin().unwrap();
    let recording = Rc::new(RefCell::new(Recording::default()));
    let mut binding = MapBinding::attach(RecordingView(recording.clone()), MapSettings::default());

    let state = GameState::new(&data);
    assert!(binding.sync(&data.catalog, state.candidates()));
    assert!(!binding.sync(&data.catalog, state.reset(&data).candidates()));
    assert_eq!(recording.borrow().markers.len(), 1);
}

/// Test that the terminal map implementation tracks markers and camera.
#[test]
fn test_terminal_map_binding() {
    let data = dataset::builtin().unwrap();
    let mut binding = MapBinding::attach(TerminalMap::new(), MapSettings::default());

    let europe = GameState::new(&data).answer(&data, 0).unwrap();
    binding.sync(&data.catalog, europe.candidates());

    let view = binding.view();
    assert_eq!(view.markers().len(), 13);
    assert_eq!(view.markers(), markers_for(&data.catalog, europe.candidates()).as_slice());

    let bounds = view.camera().bounds();
    assert!(bounds.contains(Coordinates::new(51.51, -0.13))); // London
    assert!(bounds.contains(Coordinates::new(55.76, 37.62))); // Moscow
}
