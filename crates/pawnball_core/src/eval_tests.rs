use super::*;

/// White pawns on A2 and D1, black pawns on B5, D5 and E4, a wall on B1.
/// A2 and E4 run on open files; the others are blocked somewhere on the way,
/// the far-row tile included.
fn lane_board(ball: BallHolder) -> Board {
    Board::from_lines(
        [
            ".B.B.",
            "....B",
            ".....",
            "W....",
            ".#.W.",
        ],
        ball,
    )
}

fn flat_weights() -> ScoreWeights {
    ScoreWeights {
        pawn: 1,
        free_pawn: 10,
        distance: 100,
        ball: 1000,
        used_card_penalty: 0,
        exhausted_penalty: 0,
        random_tie_break: false,
    }
}

#[test]
fn test_startpos_is_balanced() {
    let board = Board::startpos();
    let w = ScoreWeights::default();
    assert_eq!(score(&board, Side::White, 3, 3, 3, &w), 0);
    assert_eq!(score(&board, Side::Black, 3, 3, 3, &w), 0);
}

#[test]
fn test_won_boards_saturate() {
    let board = Board::from_lines(
        [
            "..W..",
            ".....",
            ".....",
            ".....",
            ".....",
        ],
        BallHolder::Neutral,
    );
    let w = ScoreWeights::default();
    assert_eq!(score(&board, Side::White, 3, 3, 3, &w), WIN);
    assert_eq!(score(&board, Side::Black, 3, 3, 3, &w), LOSE);
}

#[test]
fn test_free_pawn_classification() {
    let board = lane_board(BallHolder::Neutral);
    assert_eq!(free_pawns(&board, Side::White), [label_to_sq("A2").unwrap()]);
    assert_eq!(free_pawns(&board, Side::Black), [label_to_sq("E4").unwrap()]);
    assert_eq!(best_free_pawn(&board, Side::White), Some(1));
    assert_eq!(best_free_pawn(&board, Side::Black), Some(1));

    let empty = Board::from_lines(
        [
            ".....",
            ".....",
            ".....",
            ".....",
            ".....",
        ],
        BallHolder::Neutral,
    );
    assert_eq!(best_free_pawn(&empty, Side::White), None);
}

#[test]
fn test_ball_holder_with_leading_free_pawn_wins() {
    // Move the open white pawn a row closer so it outruns E4.
    let board = Board::from_lines(
        [
            ".B.B.",
            "....B",
            "W....",
            ".....",
            ".#.W.",
        ],
        BallHolder::White,
    );
    let w = ScoreWeights::default();
    assert_eq!(score(&board, Side::White, 3, 3, 3, &w), WIN - 2);
    assert_eq!(score(&board, Side::Black, 3, 3, 3, &w), LOSE + 2);
}

#[test]
fn test_trailing_the_ball_holder_is_lost() {
    let board = lane_board(BallHolder::Black);
    let w = ScoreWeights::default();
    // Black holds the ball and its open pawn is level with white's.
    assert_eq!(score(&board, Side::White, 3, 3, 3, &w), LOSE + 3);
    // From black's own seat a level race is not yet provably won.
    assert_eq!(score(&board, Side::Black, 3, 3, 3, &w), 400);
}

#[test]
fn test_material_sub_score() {
    let w = flat_weights();
    let neutral = lane_board(BallHolder::Neutral);
    // White: 2 pawns + 1 free + 1 row traveled. Black: 3 pawns + 1 free + 1 row.
    assert_eq!(score(&neutral, Side::White, 3, 3, 3, &w), -1);
    assert_eq!(score(&neutral, Side::Black, 3, 3, 3, &w), 1);

    let held = lane_board(BallHolder::White);
    assert_eq!(score(&held, Side::White, 3, 3, 3, &w), 1999);
}

#[test]
fn test_card_penalties() {
    let board = Board::startpos();
    let w = ScoreWeights::default();
    assert_eq!(score(&board, Side::White, 1, 3, 3, &w), -100);
    assert_eq!(score(&board, Side::White, 0, 3, 3, &w), -350);
    assert_eq!(score(&board, Side::White, 3, 0, 3, &w), 350);
    // Without card slots there is nothing to penalize.
    assert_eq!(score(&board, Side::White, 0, 0, 0, &w), 0);
}
