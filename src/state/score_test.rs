use super::*;

#[test]
fn score_starts_at_zero() {
    assert_eq!(ScoreState::default().value(), 0);
}

#[test]
fn increment_returns_new_value() {
    let mut score = ScoreState::default();
    assert_eq!(score.increment(), 1);
    assert_eq!(score.increment(), 2);
    assert_eq!(score.value(), 2);
}

#[test]
fn score_equals_number_of_increments() {
    for n in [0_u64, 1, 3, 17, 250] {
        let mut score = ScoreState::default();
        for _ in 0..n {
            score.increment();
        }
        assert_eq!(score.value(), n);
    }
}

#[test]
fn reading_the_score_does_not_change_it() {
    let mut score = ScoreState::default();
    score.increment();
    let copy = score;
    assert_eq!(copy.value(), score.value());
    assert_eq!(score.value(), 1);
}

#[test]
fn increment_saturates_instead_of_overflowing() {
    let mut score = ScoreState { value: u64::MAX };
    assert_eq!(score.increment(), u64::MAX);
}
