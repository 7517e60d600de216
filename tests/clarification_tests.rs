use atelier::kernel::clarify::{ClarificationSelector, EntropyScores};
use atelier::kernel::phrases;
use atelier::kernel::state::{ConversationState, Slots};
use atelier::{Action, Dimension};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

fn state_with(slots: &[(Dimension, &[&str])]) -> ConversationState {
    ConversationState::with_slots(
        slots
            .iter()
            .map(|(d, v)| (*d, v.iter().map(|s| s.to_string()).collect()))
            .collect::<Slots>(),
    )
}

fn scores(pairs: &[(Dimension, f64)]) -> EntropyScores {
    pairs.iter().copied().collect()
}

#[test]
fn test_picks_highest_entropy_unfilled() {
    let state = state_with(&[
        (Dimension::Size, &[]),
        (Dimension::Color, &[]),
        (Dimension::Fabric, &[]),
    ]);
    let entropy = scores(&[(Dimension::Size, 0.4), (Dimension::Color, 2.5), (Dimension::Fabric, 1.0)]);

    assert_eq!(
        ClarificationSelector::most_informative(&state, &entropy),
        Some((Dimension::Color, 2.5))
    );
}

#[test]
fn test_filled_dimensions_never_asked() {
    let state = state_with(&[(Dimension::Color, &["blue"]), (Dimension::Size, &[])]);
    let entropy = scores(&[(Dimension::Color, 9.0), (Dimension::Size, 0.5)]);

    assert_eq!(
        ClarificationSelector::most_informative(&state, &entropy),
        Some((Dimension::Size, 0.5))
    );
}

#[test]
fn test_tie_goes_to_first_introduced() {
    let state = state_with(&[(Dimension::Pattern, &[]), (Dimension::Color, &[])]);
    let entropy = scores(&[(Dimension::Color, 5.0), (Dimension::Pattern, 5.0)]);

    for _ in 0..20 {
        assert_eq!(
            ClarificationSelector::most_informative(&state, &entropy).map(|(d, _)| d),
            Some(Dimension::Pattern)
        );
    }

    // Introduction order, not enum order, decides.
    let reversed = state_with(&[(Dimension::Color, &[]), (Dimension::Pattern, &[])]);
    assert_eq!(
        ClarificationSelector::most_informative(&reversed, &entropy).map(|(d, _)| d),
        Some(Dimension::Color)
    );
}

#[test]
fn test_zero_or_missing_entropy_asks_nothing() {
    let state = state_with(&[(Dimension::Size, &[]), (Dimension::Type, &[])]);
    let mut rng = StdRng::seed_from_u64(1);

    let zeros = scores(&[(Dimension::Size, 0.0), (Dimension::Type, 0.0)]);
    assert_eq!(ClarificationSelector::select(&state, &zeros, &mut rng), None);

    let unrelated = scores(&[(Dimension::Color, 3.0)]);
    assert_eq!(ClarificationSelector::select(&state, &unrelated, &mut rng), None);

    assert_eq!(ClarificationSelector::select(&state, &EntropyScores::new(), &mut rng), None);
}

#[test]
fn test_no_unfilled_dimensions_asks_nothing() {
    let mut rng = StdRng::seed_from_u64(1);
    let entropy = scores(&[(Dimension::Color, 3.0)]);

    assert_eq!(ClarificationSelector::select(&ConversationState::new(), &entropy, &mut rng), None);

    let filled = state_with(&[(Dimension::Color, &["red"])]);
    assert_eq!(ClarificationSelector::select(&filled, &entropy, &mut rng), None);
}

#[test]
fn test_question_names_the_dimension() {
    let state = state_with(&[(Dimension::WithItem, &[]), (Dimension::Fabric, &[])]);
    let entropy = scores(&[(Dimension::Fabric, 1.2)]);
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..30 {
        let Some(Action::Answer { text }) = ClarificationSelector::select(&state, &entropy, &mut rng) else {
            panic!("Expected a clarifying answer");
        };
        let expected: Vec<String> = phrases::CLARIFY_TEMPLATES
            .iter()
            .map(|t| t.replace("{}", "fabric"))
            .collect();
        assert!(expected.contains(&text), "Unexpected question: {text}");
    }
}

#[test]
fn test_raw_scores_drop_unknown_dimensions() {
    let raw: HashMap<String, f64> = [
        ("color".to_string(), 1.5),
        ("with_item".to_string(), 0.3),
        ("price".to_string(), 7.0),
    ]
    .into_iter()
    .collect();
    let entropy = EntropyScores::from_raw(raw);

    assert_eq!(entropy.get(Dimension::Color), 1.5);
    assert_eq!(entropy.get(Dimension::WithItem), 0.3);
    assert_eq!(entropy.get(Dimension::Size), 0.0);
}
