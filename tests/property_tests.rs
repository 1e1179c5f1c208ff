//! Property tests for the elimination engine and game state.

use city_hunt::core::{AttributeValue, Catalog, City, CityId, Dataset, Question};
use city_hunt::game::GameState;
use city_hunt::rules::{apply_answer, Outcome};
use im::Vector;
use proptest::prelude::*;

const REGIONS: [&str; 3] = ["EU", "AS", "AF"];

/// A city profile: region index (3 means missing) and optional capital flag.
fn profile() -> impl Strategy<Value = (usize, Option<bool>)> {
    (0usize..4, proptest::option::of(any::<bool>()))
}

fn build(profiles: &[(usize, Option<bool>)]) -> Dataset {
    let mut catalog = Catalog::new();
    for (i, (region, capital)) in profiles.iter().enumerate() {
        let mut city = City::new(format!("c{i}"), format!("City {i}"), "X");
        if let Some(region) = REGIONS.get(*region) {
            city = city.with_attr("region", *region);
        }
        if let Some(capital) = capital {
            city = city.with_attr("capital", *capital);
        }
        catalog.register(city);
    }

    let questions = vec![
        Question::new("region", "Which region?")
            .with_option("EU", "Europe")
            .with_option("AS", "Asia")
            .with_option("AF", "Africa"),
        Question::new("capital", "Capital?")
            .with_option(true, "Yes")
            .with_option(false, "No"),
    ];
    Dataset::new(catalog, questions)
}

/// Check that `sub` is `full` with some entries removed, order kept.
fn is_ordered_subset(sub: &Vector<CityId>, full: &Vector<CityId>) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|id| rest.any(|other| other == id))
}

proptest! {
    /// Test that an answer never grows the candidate set or reorders it.
    #[test]
    fn test_answer_shrinks_monotonically(
        profiles in proptest::collection::vec(profile(), 0..24),
        keep in proptest::collection::vec(any::<bool>(), 24),
        region in 0usize..3,
        index in 0usize..4,
        count in 1usize..4,
    ) {
        let data = build(&profiles);
        let candidates: Vector<CityId> = data
            .catalog
            .all_ids()
            .into_iter()
            .zip(keep.iter())
            .filter(|(_, keep)| **keep)
            .map(|(id, _)| id)
            .collect();
        let value: AttributeValue = REGIONS[region].into();

        let t = apply_answer(&data.catalog, &candidates, index, count, &"region".into(), &value);

        prop_assert!(t.candidates.len() <= candidates.len());
        prop_assert!(is_ordered_subset(&t.candidates, &candidates));
        for id in t.candidates.iter() {
            let city = data.catalog.get(*id).unwrap();
            prop_assert_eq!(city.get_attr("region"), Some(&value));
        }
    }

    /// Test the outcome classification rules for every transition.
    #[test]
    fn test_outcome_rules(
        profiles in proptest::collection::vec(profile(), 0..16),
        region in 0usize..3,
        index in 0usize..4,
        count in 1usize..4,
    ) {
        let data = build(&profiles);
        let value: AttributeValue = REGIONS[region].into();
        let t = apply_answer(&data.catalog, &data.catalog.all_ids(), index, count, &"region".into(), &value);

        match t.candidates.len() {
            0 => {
                prop_assert_eq!(t.outcome, Outcome::Contradiction);
            }
            1 => {
                prop_assert_eq!(t.outcome, Outcome::Solved(t.candidates[0]));
            }
            _ if index + 1 < count => {
                prop_assert_eq!(t.outcome, Outcome::InProgress);
            }
            _ => {
                prop_assert_eq!(t.outcome, Outcome::Exhausted);
            }
        }

        if t.outcome.is_terminal() {
            prop_assert_eq!(t.next_question_index, index);
        } else {
            prop_assert_eq!(t.next_question_index, index + 1);
        }
    }

    /// Test that whole games shrink monotonically and reset cleanly.
    #[test]
    fn test_games_shrink_and_reset(
        profiles in proptest::collection::vec(profile(), 0..20),
        choices in proptest::collection::vec(0usize..3, 0..4),
    ) {
        let data = build(&profiles);
        let start = GameState::new(&data);
        let mut state = start.clone();
        let mut previous = state.remaining();

        for choice in choices {
            if state.is_finished() {
                break;
            }
            let question = state.current_question(&data).unwrap();
            let choice = choice % question.options.len();
            let next = state.answer(&data, choice).unwrap();

            prop_assert!(next.remaining() <= previous);
            prop_assert!(is_ordered_subset(next.candidates(), state.candidates()));
            prop_assert_eq!(next.history().len(), state.history().len() + 1);

            previous = next.remaining();
            state = next;
        }

        prop_assert_eq!(state.reset(&data), start);
    }
}
