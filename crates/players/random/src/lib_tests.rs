use super::*;

use pawnball_core::{BallHolder, CardKind, Side};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn turn(side: Side, hand: &Hand) -> TurnContext {
    TurnContext {
        side,
        allowed_slots: hand.len(),
        unused_own: hand.num_unused(),
        unused_opponent: hand.len(),
    }
}

#[test]
fn random_player_returns_legal_move() {
    let board = Board::startpos();
    let hand = Hand::new(&[CardKind::Charge, CardKind::Wall]);
    let ctx = turn(Side::White, &hand);

    let mut player = RandomPlayer::new();
    let chosen = player
        .find_move(&board, &hand, &ctx, &mut StdRng::seed_from_u64(4))
        .unwrap();

    let legal = available_moves(&board, Side::White, &hand, ctx.allowed_slots);
    assert!(legal.contains(&chosen));
}

#[test]
fn random_player_passes_when_stuck() {
    let board = Board::from_lines(
        [
            ".....",
            ".....",
            "#####",
            "WWWWW",
            ".....",
        ],
        BallHolder::Neutral,
    );
    let hand = Hand::new(&[]);
    let ctx = turn(Side::White, &hand);

    let mut player = RandomPlayer::new();
    assert!(
        player
            .find_move(&board, &hand, &ctx, &mut StdRng::seed_from_u64(4))
            .is_none()
    );
}

#[test]
fn random_player_is_seed_deterministic() {
    let board = Board::startpos();
    let hand = Hand::new(&[CardKind::Spawn]);
    let ctx = turn(Side::Black, &hand);

    let mut player = RandomPlayer::new();
    let first = player.find_move(&board, &hand, &ctx, &mut StdRng::seed_from_u64(99));
    let second = player.find_move(&board, &hand, &ctx, &mut StdRng::seed_from_u64(99));
    assert_eq!(first, second);
}
