use super::*;

use rand::RngCore;

use crate::HumanPlayer;
use crate::cards::CardKind;

fn humans() -> [Box<dyn Player>; 2] {
    [Box::new(HumanPlayer), Box::new(HumanPlayer)]
}

fn human_game(white_cards: &[CardKind], black_cards: &[CardKind]) -> GameSession {
    GameSession::with_position(
        Board::startpos(),
        Side::White,
        [Hand::new(white_cards), Hand::new(black_cards)],
        humans(),
        0,
    )
}

/// Plays the first listed move, passing when nothing is legal.
struct FirstMovePlayer;

impl Player for FirstMovePlayer {
    fn find_move(
        &mut self,
        board: &Board,
        hand: &Hand,
        ctx: &TurnContext,
        _rng: &mut dyn RngCore,
    ) -> Option<Move> {
        available_moves(board, ctx.side, hand, ctx.allowed_slots)
            .into_iter()
            .next()
    }

    fn name(&self) -> &str {
        "First"
    }
}

#[test]
fn pushes_alternate_sides() {
    let mut session = human_game(&[], &[]);
    assert_eq!(session.status(), GameStatus::Ongoing);
    assert_eq!(session.side_to_move(), Side::White);
    assert!(session.log().is_empty());

    session.push("C2").unwrap();
    assert_eq!(session.side_to_move(), Side::Black);
    session.push("C4").unwrap();
    session.push("C3").unwrap();
    assert_eq!(session.log(), ["C2", "C4", "C3"]);
    assert_eq!(
        session.board().tile_at(label_to_sq("C3").unwrap()),
        Tile::Pawn(Side::White)
    );
}

#[test]
fn push_rejections_leave_the_session_alone() {
    let mut session = human_game(&[], &[]);
    assert_eq!(
        session.push("C9"),
        Err(MoveError::BadTileLabel("C9".to_string()))
    );
    assert_eq!(
        session.push("C1"),
        Err(MoveError::IllegalPush("C1".to_string(), "the tile is occupied"))
    );
    assert_eq!(
        session.push("C3"),
        Err(MoveError::IllegalPush("C3".to_string(), "no pawn behind the tile"))
    );
    assert_eq!(session.side_to_move(), Side::White);
    assert!(session.log().is_empty());
}

#[test]
fn scripted_game_ends_in_mutual_block() {
    let mut session = human_game(&[], &[]);
    let script = [
        "B2", "B4", "C2", "C4", "D2", "D4", "B3", "A4", "C3", "A3", "D3", "A2", "E2", "E4", "E3",
    ];
    for target in script {
        session.push(target).unwrap();
    }
    assert_eq!(session.status(), GameStatus::Draw);
    assert_eq!(session.log(), script);
    assert_eq!(session.push("A2"), Err(MoveError::GameOver));
    assert_eq!(session.pass(), Err(MoveError::GameOver));

    let summary = session.summary();
    assert_eq!(summary.winner, "draw");
    assert_eq!(summary.num_white_moves, 8);
    assert_eq!(summary.final_ball_position, "middle");
    assert!(summary.white_cards.is_empty());
}

#[test]
fn card_play_steps_the_ball_and_spends_the_card() {
    let mut session = human_game(&[CardKind::Charge], &[CardKind::Wall]);
    assert_eq!(session.allowed_slots(), 1);
    assert_eq!(
        session.remaining_cards(Side::White),
        [("charge", CardKind::Charge.blurb())]
    );

    session.play_card(0, 0).unwrap();
    assert_eq!(session.log(), ["charge: A1->A3"]);
    assert_eq!(session.board().ball, BallHolder::Black);
    assert!(session.remaining_cards(Side::White).is_empty());
    assert_eq!(session.side_to_move(), Side::Black);
    assert!(session.board().is_vacant(label_to_sq("A1").unwrap()));
    assert_eq!(
        session.board().tile_at(label_to_sq("A3").unwrap()),
        Tile::Pawn(Side::White)
    );
}

#[test]
fn card_slot_and_index_errors() {
    let mut session = human_game(&[CardKind::Knife], &[CardKind::Wall]);
    assert_eq!(
        session.card_moves(1).unwrap_err(),
        MoveError::BadCardSlot { slot: 1, allowed: 1 }
    );
    // A knife with no adjacent enemy has an empty move list.
    assert_eq!(
        session.play_card(0, 0),
        Err(MoveError::BadMoveIndex {
            index: 0,
            available: 0
        })
    );
}

#[test]
fn pass_requires_a_stuck_side() {
    let mut session = human_game(&[], &[]);
    assert_eq!(session.pass(), Err(MoveError::IllegalPass));
}

fn blocked_board() -> Board {
    Board::from_lines(
        [
            ".....",
            ".....",
            "BBBBB",
            "WWWWW",
            "#####",
        ],
        BallHolder::Neutral,
    )
}

fn mirrored_blocked_board() -> Board {
    Board::from_lines(
        [
            "#####",
            "BBBBB",
            "WWWWW",
            ".....",
            ".....",
        ],
        BallHolder::Neutral,
    )
}

fn locked_session(board: Board, white: &[CardKind], black: &[CardKind]) -> GameSession {
    GameSession::with_position(
        board,
        Side::White,
        [Hand::new(white), Hand::new(black)],
        humans(),
        0,
    )
}

#[test]
fn mutual_block_with_empty_hands_is_a_draw() {
    let session = locked_session(blocked_board(), &[], &[]);
    assert_eq!(session.status(), GameStatus::Draw);
}

#[test]
fn hoarded_defensive_cards_lose_the_lock() {
    // Black sits on an unplayable scare: the white start row is walled off.
    let session = locked_session(blocked_board(), &[CardKind::Bishop], &[CardKind::Scare]);
    assert_eq!(session.status(), GameStatus::WhiteDefensiveWin);

    // Same lock the other way round.
    let session = locked_session(
        mirrored_blocked_board(),
        &[CardKind::Scare],
        &[CardKind::Bishop],
    );
    assert_eq!(session.status(), GameStatus::BlackDefensiveWin);
}

#[test]
fn gated_pull_counts_as_hoarding() {
    let mut board = blocked_board();
    board.ball = BallHolder::Black;
    let session = locked_session(board, &[CardKind::Bishop], &[CardKind::Pull]);
    assert_eq!(session.status(), GameStatus::WhiteDefensiveWin);
}

#[test]
fn playable_pull_keeps_the_lock_alive() {
    let mut session = locked_session(blocked_board(), &[CardKind::Bishop], &[CardKind::Pull]);
    assert_eq!(session.status(), GameStatus::Ongoing);

    // White has nothing; black recovers the ball and the lock closes for good.
    session.pass().unwrap();
    session.play_card(0, 0).unwrap();
    assert_eq!(session.log(), ["pass", "pull ball"]);
    assert_eq!(session.board().ball, BallHolder::Black);
    assert_eq!(session.status(), GameStatus::Draw);
}

#[test]
fn automated_seats_play_to_completion() {
    let config = GameConfig {
        seed: Some(11),
        ..GameConfig::default()
    };
    let session = GameSession::new(
        &config,
        Box::new(FirstMovePlayer),
        Box::new(FirstMovePlayer),
    )
    .unwrap();
    assert!(session.status().is_over());
    assert!(!session.log().is_empty());

    let summary = session.summary();
    assert!(["white", "black", "draw"].contains(&summary.winner.as_str()));

    // The seed pins the deal and the strategies are deterministic.
    let replay = GameSession::new(
        &config,
        Box::new(FirstMovePlayer),
        Box::new(FirstMovePlayer),
    )
    .unwrap();
    assert_eq!(replay.log(), session.log());
}

#[test]
fn summary_reflects_the_deal() {
    let session = human_game(&[CardKind::Scare], &[CardKind::Knife]);
    let summary = session.summary();
    assert_eq!(summary.white_cards, ["scare"]);
    assert_eq!(summary.black_cards, ["knife"]);
    assert!(summary.is_white_defensive);
    assert!(!summary.is_black_defensive);
    assert_eq!(summary.winner, "draw");
    assert_eq!(summary.num_white_moves, 0);
}
