//! Random playouts driven through the public session API.
//!
//! Every seed deals a fresh pair of hands, then both seats are scripted with
//! uniformly chosen legal actions until the session reports a verdict. The
//! point is that no reachable position panics, stalls or breaks the exported
//! bookkeeping.

use rayon::prelude::*;

use pawnball_core::{
    GameConfig, GameSession, GameStatus, HumanPlayer, PlayerConfig, Side, push_moves, sq_to_label,
};

const SEEDS: u64 = 64;
const STEP_CAP: usize = 600;

/// Small deterministic generator so a failing seed replays exactly.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 33) as usize
    }
}

enum Action {
    Push(String),
    Card(usize, usize),
}

fn legal_actions(session: &GameSession) -> Vec<Action> {
    let mut actions = Vec::new();
    for m in push_moves(session.board(), session.side_to_move()) {
        if let pawnball_core::Move::Push { to } = m {
            actions.push(Action::Push(sq_to_label(to)));
        }
    }
    for slot in 0..session.allowed_slots() {
        let moves = session.card_moves(slot).expect("slot within the allowed range");
        for index in 0..moves.len() {
            actions.push(Action::Card(slot, index));
        }
    }
    actions
}

#[test]
fn random_playouts_reach_a_verdict() {
    (0..SEEDS).into_par_iter().for_each(|seed| {
        let config = GameConfig {
            white_player: PlayerConfig::human(),
            black_player: PlayerConfig::human(),
            seed: Some(seed),
            ..GameConfig::default()
        };
        let mut session =
            GameSession::new(&config, Box::new(HumanPlayer), Box::new(HumanPlayer))
                .expect("default card config deals cleanly");

        let mut rng = Lcg(seed.wrapping_mul(0x9E3779B97F4A7C15).wrapping_add(1));
        let mut steps = 0;
        while session.status() == GameStatus::Ongoing {
            assert!(
                steps < STEP_CAP,
                "seed {seed} still running after {STEP_CAP} actions"
            );
            let actions = legal_actions(&session);
            if actions.is_empty() {
                session.pass().unwrap();
            } else {
                match &actions[rng.next() % actions.len()] {
                    Action::Push(label) => session.push(label).unwrap(),
                    Action::Card(slot, index) => session.play_card(*slot, *index).unwrap(),
                }
            }
            steps += 1;
        }

        assert_eq!(session.log().len(), steps, "seed {seed} lost log entries");

        // Spawn is dealt at most once, so neither side can outgrow 6 pawns.
        for side in [Side::White, Side::Black] {
            assert!(
                session.board().pawn_squares(side).len() <= 6,
                "seed {seed} grew too many pawns"
            );
        }

        match session.status() {
            GameStatus::WhiteWin => assert!(session.board().is_win_for(Side::White)),
            GameStatus::BlackWin => assert!(session.board().is_win_for(Side::Black)),
            GameStatus::Ongoing => unreachable!(),
            _ => {}
        }

        let summary = session.summary();
        assert_eq!(summary.white_cards.len(), 3);
        assert_eq!(summary.black_cards.len(), 3);
        assert!(["white", "black", "draw"].contains(&summary.winner.as_str()));
        assert!(["white", "middle", "black"].contains(&summary.final_ball_position.as_str()));

        println!(
            "Seed {seed:02} done: {} in {steps} action(s), ball {}",
            summary.winner, summary.final_ball_position
        );
    });
}
