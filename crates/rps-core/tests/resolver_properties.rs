use rps_core::game::record::RoundRecord;
use rps_core::game::transcript::Transcript;
use rps_core::{Move, RoundOutcome, resolve, resolve_labels};

#[test]
fn exactly_one_side_wins_every_distinct_pair() {
    for a in Move::ALL {
        for b in Move::ALL {
            let outcome = resolve(a, b);
            if a == b {
                assert_eq!(outcome, RoundOutcome::Draw);
                continue;
            }
            let player_wins = outcome == RoundOutcome::PlayerWins;
            let reverse_opponent_wins = resolve(b, a) == RoundOutcome::OpponentWins;
            assert_eq!(player_wins, reverse_opponent_wins, "{a} vs {b}");
        }
    }
}

#[test]
fn counter_move_always_wins() {
    for mv in Move::ALL {
        assert_eq!(resolve(mv.counter(), mv), RoundOutcome::PlayerWins);
        assert_eq!(resolve(mv, mv.counter()), RoundOutcome::OpponentWins);
    }
}

#[test]
fn label_resolution_matches_typed_resolution() {
    for a in Move::ALL {
        for b in Move::ALL {
            assert_eq!(resolve_labels(a.as_str(), b.as_str()), Ok(resolve(a, b)));
        }
    }
    assert!(resolve_labels("rock", "lizard").is_err());
}

#[test]
fn transcript_tally_counts_rounds() {
    let mut transcript = Transcript::new();
    for (i, mv) in Move::ALL.iter().enumerate() {
        transcript.push(RoundRecord::new(i as u32 + 1, *mv, mv.counter()));
    }
    let board = transcript.tally();
    assert_eq!(board.rounds(), 3);
    assert_eq!(board.opponent_wins(), 3);
}
