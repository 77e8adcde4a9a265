use gm_core::{Difficulty, GameSession, GuessError, RoundStatus, Verdict};
use strum::IntoEnumIterator;

#[test]
fn test_new_round_for_every_difficulty() {
    let mut session = GameSession::with_seed(2024);
    for difficulty in Difficulty::iter() {
        for _ in 0..200 {
            session.start_new_round(difficulty);
            assert!(session.is_active());
            assert_eq!(session.attempts_remaining(), difficulty.max_attempts());
            assert_eq!(session.range_max(), difficulty.range_max());
        }
    }
}

#[test]
fn test_targets_stay_in_range() {
    let mut session = GameSession::with_seed(11);
    for difficulty in Difficulty::iter() {
        for _ in 0..500 {
            session.start_new_round(difficulty);
            // Guess the top value until the round ends, then look at the target.
            while session.is_active() {
                let _ = session.submit_guess(i64::from(difficulty.range_max()));
            }
            let target = session.revealed_target().unwrap();
            assert!((1..=difficulty.range_max()).contains(&target));
        }
    }
}

#[test]
fn test_easy_scenario() {
    let mut session = GameSession::with_seed(1);
    session.start_rigged_round(Difficulty::Easy, 7).unwrap();

    let first = session.submit_guess(3).unwrap();
    assert_eq!(first.verdict, Verdict::TooLow);
    assert_eq!(first.closeness_percent, 56);
    assert_eq!(first.attempts_remaining, 4);
    assert!(!first.round_over);

    let second = session.submit_guess(7).unwrap();
    assert_eq!(second.verdict, Verdict::Correct);
    assert_eq!(second.closeness_percent, 100);
    assert!(second.round_over);
    assert!(second.won);
    assert!(!session.is_active());
}

#[test]
fn test_hard_zero_is_out_of_range() {
    let mut session = GameSession::with_seed(1);
    session.start_rigged_round(Difficulty::Hard, 50).unwrap();

    assert_eq!(
        session.submit_guess(0),
        Err(GuessError::OutOfRange { range_max: 100 })
    );
    assert_eq!(session.attempts_remaining(), 10);
    assert!(session.is_active());
}

#[test]
fn test_correct_on_last_attempt_wins() {
    let mut session = GameSession::with_seed(1);
    session.start_rigged_round(Difficulty::Easy, 5).unwrap();
    for guess in [1, 2, 3, 4] {
        let outcome = session.submit_guess(guess).unwrap();
        assert!(!outcome.round_over);
    }
    assert_eq!(session.attempts_remaining(), 1);

    let last = session.submit_guess(5).unwrap();
    assert_eq!(last.verdict, Verdict::Correct);
    assert!(last.round_over);
    assert!(last.won);
    assert_eq!(last.attempts_remaining, 0);
    assert_eq!(session.status(), RoundStatus::Won);
}

#[test]
fn test_exhausting_attempts_loses() {
    let mut session = GameSession::with_seed(1);
    session.start_rigged_round(Difficulty::Medium, 25).unwrap();
    let mut last = None;
    for guess in [1, 2, 3, 4, 5, 6, 7] {
        last = Some(session.submit_guess(guess).unwrap());
    }
    let last = last.unwrap();
    assert!(last.round_over);
    assert!(!last.won);
    assert!(last.is_lost());
    assert_eq!(last.attempts_remaining, 0);
    assert!(!session.is_active());
    assert_eq!(session.revealed_target(), Some(25));
    assert_eq!(session.submit_guess(25), Err(GuessError::InactiveSession));
}

#[test]
fn test_rejections_leave_state_alone() {
    let mut session = GameSession::with_seed(1);
    session.start_rigged_round(Difficulty::Easy, 3).unwrap();
    session.submit_guess(9).unwrap();

    for bad in [0, -1, 11, 1_000, i64::MAX, i64::MIN] {
        assert_eq!(
            session.submit_guess(bad),
            Err(GuessError::OutOfRange { range_max: 10 })
        );
        assert_eq!(session.attempts_remaining(), 4);
    }

    // Target unchanged: the next in-range guess is still scored against 3.
    let outcome = session.submit_guess(3).unwrap();
    assert_eq!(outcome.verdict, Verdict::Correct);

    // Inactive rejections don't touch the finished round either.
    assert_eq!(session.submit_guess(3), Err(GuessError::InactiveSession));
    assert_eq!(session.attempts_remaining(), 3);
    assert_eq!(session.revealed_target(), Some(3));
}

#[test]
fn test_inactive_checked_before_range() {
    let mut session = GameSession::with_seed(1);
    assert_eq!(session.submit_guess(0), Err(GuessError::InactiveSession));
}

#[test]
fn test_restart_mid_round_resets() {
    let mut session = GameSession::with_seed(1);
    session.start_rigged_round(Difficulty::Hard, 42).unwrap();
    session.submit_guess(10).unwrap();
    session.submit_guess(20).unwrap();

    session.start_new_round(Difficulty::Easy);
    assert!(session.is_active());
    assert_eq!(session.attempts_remaining(), 5);
    assert_eq!(session.range_max(), 10);
    assert_eq!(session.revealed_target(), None);
    assert_eq!(
        session.submit_guess(42),
        Err(GuessError::OutOfRange { range_max: 10 })
    );
}

#[test]
fn test_target_hidden_mid_round() {
    let mut session = GameSession::with_seed(1);
    session.start_rigged_round(Difficulty::Medium, 30).unwrap();
    session.submit_guess(1).unwrap();
    assert_eq!(session.revealed_target(), None);
}

/// Draw `rounds` targets and return the count per value `1..=range_max`.
fn target_histogram(seed: u64, difficulty: Difficulty, rounds: usize) -> Vec<u64> {
    let mut session = GameSession::with_seed(seed);
    let range_max = difficulty.range_max();
    let mut counts = vec![0u64; range_max as usize];
    for _ in 0..rounds {
        session.start_new_round(difficulty);
        // Binary search always finds the target within the attempt budget
        // for every tier, which reveals it.
        let (mut lo, mut hi) = (1i64, i64::from(range_max));
        while session.is_active() {
            let mid = (lo + hi) / 2;
            let outcome = session.submit_guess(mid).unwrap();
            match outcome.verdict {
                Verdict::TooLow => lo = mid + 1,
                Verdict::TooHigh => hi = mid - 1,
                Verdict::Correct => {}
            }
        }
        let target = session.revealed_target().unwrap();
        counts[(target - 1) as usize] += 1;
    }
    counts
}

fn chi_square(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}

#[test]
fn test_targets_uniform_easy() {
    let counts = target_histogram(0xE45, Difficulty::Easy, 20_000);
    assert!(counts.iter().all(|&c| c > 0));
    // df = 9, p = 0.0001 critical value is about 33.7
    let stat = chi_square(&counts);
    assert!(stat < 35.0, "chi-square too large: {}", stat);
}

#[test]
fn test_targets_uniform_hard() {
    let counts = target_histogram(0x4A2D, Difficulty::Hard, 50_000);
    assert!(counts.iter().all(|&c| c > 0), "every value should be drawn");
    // df = 99, p = 0.0001 critical value is about 163
    let stat = chi_square(&counts);
    assert!(stat < 170.0, "chi-square too large: {}", stat);
}
