//! End-to-end elimination tests.
//!
//! These tests drive `GameState` through whole games, both on small
//! hand-built catalogs and on the built-in dataset.

use city_hunt::core::{Catalog, City, Dataset, GameConfig, Question};
use city_hunt::dataset;
use city_hunt::game::{GameError, GameState, PanelView, Summary};
use city_hunt::rules::{apply_answer, Outcome};

// =============================================================================
// Helpers
// =============================================================================

fn three_cities(question_count: usize) -> Dataset {
    let mut catalog = Catalog::new();
    catalog.register(City::new("a", "A", "X").with_attr("region", "EU").with_attr("capital", true));
    catalog.register(City::new("b", "B", "X").with_attr("region", "EU").with_attr("capital", false));
    catalog.register(City::new("c", "C", "Y").with_attr("region", "AS").with_attr("capital", true));

    let questions = vec![
        Question::new("region", "Which region?")
            .with_option("EU", "Europe")
            .with_option("AS", "Asia"),
        Question::new("capital", "Is it a capital?")
            .with_option(true, "Yes")
            .with_option(false, "No"),
    ];
    Dataset::new(catalog, questions.into_iter().take(question_count).collect())
}

/// Answer by option labels, failing the test on unknown labels.
fn play(data: &Dataset, labels: &[&str]) -> GameState {
    labels.iter().fold(GameState::new(data), |state, label| {
        let question = state.current_question(data).expect("game ended early");
        let index = question
            .options
            .iter()
            .position(|o| o.label == *label)
            .unwrap_or_else(|| panic!("no option {label:?} for {:?}", question.text));
        state.answer(data, index).unwrap()
    })
}

// =============================================================================
// Scenarios
// =============================================================================

/// Test the region scenario with a second question still to come.
#[test]
fn test_region_scenario_in_progress() {
    let data = three_cities(2);
    let state = play(&data, &["Europe"]);

    let keys: Vec<_> = data
        .catalog
        .resolve(state.candidates().iter())
        .iter()
        .map(|c| c.key.clone())
        .collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(state.outcome(), Outcome::InProgress);
    assert_eq!(state.question_index(), 1);
}

/// Test the region scenario as the only question.
#[test]
fn test_region_scenario_exhausted() {
    let data = three_cities(1);
    let state = play(&data, &["Europe"]);

    assert_eq!(state.remaining(), 2);
    assert_eq!(state.outcome(), Outcome::Exhausted);
    assert_eq!(state.question_index(), 0);
}

/// Test that a single remaining city is solved regardless of its other attributes.
#[test]
fn test_single_survivor_is_solved_early() {
    let data = three_cities(2);
    let state = play(&data, &["Asia"]);

    let c = data.catalog.find_key("c").unwrap();
    assert_eq!(state.outcome(), Outcome::Solved(c));
    assert_eq!(state.history().len(), 1);
}

/// Test that a catalog of one city ends on the first answer.
#[test]
fn test_single_city_catalog() {
    let mut catalog = Catalog::new();
    let only = catalog.register(City::new("solo", "Solo", "Z").with_attr("region", "EU"));
    let data = Dataset::new(
        catalog,
        vec![
            Question::new("region", "Which region?")
                .with_option("EU", "Europe")
                .with_option("AS", "Asia"),
            Question::new("capital", "Capital?").with_option(true, "Yes"),
        ],
    );

    assert_eq!(play(&data, &["Europe"]).outcome(), Outcome::Solved(only));
    assert_eq!(play(&data, &["Asia"]).outcome(), Outcome::Contradiction);
}

/// Test that zero survivors is a contradiction even with questions left.
#[test]
fn test_contradiction_with_questions_left() {
    let data = three_cities(2);
    let state = play(&data, &["Europe"]);

    // Drive the engine directly with a value no remaining city has
    let t = apply_answer(
        &data.catalog,
        state.candidates(),
        0,
        5,
        &"region".into(),
        &"AF".into(),
    );
    assert!(t.candidates.is_empty());
    assert_eq!(t.outcome, Outcome::Contradiction);
    assert_eq!(t.next_question_index, 0);
}

/// Test that a city missing the tested attribute is silently excluded.
#[test]
fn test_missing_attribute_excluded() {
    let mut catalog = Catalog::new();
    catalog.register(City::new("a", "A", "X").with_attr("region", "EU"));
    catalog.register(City::new("b", "B", "X"));
    catalog.register(City::new("c", "C", "X").with_attr("region", "EU"));
    let data = Dataset::new(
        catalog,
        vec![Question::new("region", "Which region?").with_option("EU", "Europe")],
    );

    let state = play(&data, &["Europe"]);
    assert_eq!(state.remaining(), 2);
    assert!(data.catalog.find_key("b").is_some_and(|b| !state.candidates().contains(&b)));
}

// =============================================================================
// Reset and errors
// =============================================================================

/// Test that reset restores the starting state from any point.
#[test]
fn test_reset_from_anywhere() {
    let data = three_cities(2);
    let fresh = GameState::new(&data);

    for labels in [&[][..], &["Europe"][..], &["Europe", "No"][..], &["Asia"][..]] {
        let state = play(&data, labels);
        let reset = state.reset(&data);
        assert_eq!(reset, fresh);
        assert_eq!(reset.remaining(), 3);
        assert_eq!(reset.question_index(), 0);
        assert!(reset.history().is_empty());
    }
}

/// Test that answering a finished game is rejected without changing it.
#[test]
fn test_answer_after_solution() {
    let data = three_cities(2);
    let done = play(&data, &["Asia"]);

    let err = done.answer(&data, 0).unwrap_err();
    assert!(matches!(err, GameError::Finished(Outcome::Solved(_))));
    assert_eq!(done.history().len(), 1);
}

// =============================================================================
// Built-in dataset
// =============================================================================

/// Test a full game on the built-in dataset that solves on the last question.
#[test]
fn test_builtin_paris() {
    let data = dataset::builtin().unwrap();
    let state = play(
        &data,
        &["Europe", "Northern", "No", "Yes", "Over 10 million", "Mild"],
    );

    let paris = data.catalog.find_key("paris").unwrap();
    assert_eq!(state.outcome(), Outcome::Solved(paris));

    let remaining: Vec<_> = state.history().iter().map(|e| e.remaining).collect();
    assert_eq!(remaining, vec![13, 13, 6, 6, 2, 1]);
}

/// Test that an early single survivor ends the game before the last question.
#[test]
fn test_builtin_early_solution() {
    let data = dataset::builtin().unwrap();
    let state = play(&data, &["Asia", "Southern"]);

    let jakarta = data.catalog.find_key("jakarta").unwrap();
    assert_eq!(state.outcome(), Outcome::Solved(jakarta));
    assert!(state.current_question(&data).is_none());
}

/// Test that identical attribute profiles exhaust the questions.
#[test]
fn test_builtin_indistinguishable_pair() {
    let data = dataset::builtin().unwrap();
    let state = play(
        &data,
        &["Europe", "Northern", "No", "Yes", "5 to 10 million", "Mild"],
    );

    assert_eq!(state.outcome(), Outcome::Exhausted);
    let view = PanelView::build(&state, &data, &GameConfig::default());
    match view.summary {
        Some(Summary::Exhausted(cities)) => {
            let keys: Vec<_> = cities.iter().map(|c| c.key.as_str()).collect();
            assert_eq!(keys, vec!["london", "madrid"]);
        }
        other => panic!("unexpected summary: {other:?}"),
    }
}

/// Test the side panel listing appears only for small candidate sets.
#[test]
fn test_builtin_listing_threshold() {
    let data = dataset::builtin().unwrap();
    let config = GameConfig::default();

    let start = GameState::new(&data);
    assert!(PanelView::build(&start, &data, &config).listing.is_none());

    let europe = play(&data, &["Europe"]);
    let view = PanelView::build(&europe, &data, &config);
    assert_eq!(view.listing.as_ref().map(|l| l.len()), Some(13));
    assert_eq!(view.progress().as_deref(), Some("STEP 2/6"));
}
