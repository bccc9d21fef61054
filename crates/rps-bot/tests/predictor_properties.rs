use rand::SeedableRng;
use rand::rngs::StdRng;
use rps_bot::{OpponentKind, Prediction, Predictor, PredictorConfig, Session};
use rps_core::{Move, RoundOutcome};

fn cold_start_counts(predictor: &Predictor, seed: u64, trials: usize) -> [usize; 3] {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut counts = [0usize; 3];
    for _ in 0..trials {
        counts[predictor.predict_counter(&mut rng).index()] += 1;
    }
    counts
}

#[test]
fn cold_start_is_roughly_uniform() {
    let predictor = Predictor::new(0.97).expect("valid decay");
    let counts = cold_start_counts(&predictor, 20251017, 3000);
    for count in counts {
        assert!((850..=1150).contains(&count), "counts {counts:?}");
    }
}

#[test]
fn reset_reproduces_the_cold_start_distribution() {
    let fresh = Predictor::new(0.8).expect("valid decay");
    let mut used = fresh.clone();
    for mv in [Move::Paper, Move::Paper, Move::Rock, Move::Scissors, Move::Paper] {
        used.update(mv);
    }
    used.reset();

    assert_eq!(used.last_move(), None);
    assert_eq!(used.predict(), Prediction::ColdStart);
    assert_eq!(cold_start_counts(&used, 4, 600), cold_start_counts(&fresh, 4, 600));
}

#[test]
fn post_observation_path_ignores_the_rng() {
    let mut predictor = Predictor::new(0.9).expect("valid decay");
    predictor.update(Move::Scissors);
    predictor.update(Move::Paper);
    let a = predictor.predict_counter(&mut StdRng::seed_from_u64(1));
    let b = predictor.predict_counter(&mut StdRng::seed_from_u64(2));
    assert_eq!(a, b);
}

#[test]
fn adapts_after_the_player_changes_habit() {
    let config = PredictorConfig::new(0.7).expect("valid decay");
    let mut predictor = config.build();
    for _ in 0..30 {
        predictor.update(Move::Rock);
    }
    assert_eq!(
        predictor.predict(),
        Prediction::Expected {
            expected: Move::Rock,
            counter: Move::Paper
        }
    );

    // rock -> scissors -> rock -> scissors ...
    for _ in 0..6 {
        predictor.update(Move::Scissors);
        predictor.update(Move::Rock);
    }
    assert_eq!(
        predictor.predict(),
        Prediction::Expected {
            expected: Move::Scissors,
            counter: Move::Rock
        }
    );
}

#[test]
fn adaptive_opponent_punishes_a_stubborn_player() {
    let policy = OpponentKind::Adaptive.spawn_policy(PredictorConfig::default(), 31);
    let mut session = Session::new(policy);
    let mut late_losses = 0;
    for round in 0..50 {
        let record = session.play(Move::Rock);
        if round >= 2 && record.outcome == RoundOutcome::OpponentWins {
            late_losses += 1;
        }
    }
    assert_eq!(late_losses, 48);
}
