use crate::board::Board;
use crate::cards::{Card, CardKind, Hand};
use crate::types::*;

const ORTHO: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAG: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// All legal moves for `side`: pawn pushes first, then card moves for each
/// playable slot in order.
pub fn available_moves(board: &Board, side: Side, hand: &Hand, allowed_slots: usize) -> Vec<Move> {
    let mut out = push_moves(board, side);
    for slot in 0..allowed_slots.min(hand.len()) {
        card_moves_into(board, side, hand.card(slot), slot, &mut out);
    }
    out
}

/// Pawn pushes: one row forward onto a vacant tile.
pub fn push_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut out = Vec::new();
    for from in board.pawn_squares(side) {
        if let Some(to) = sq(col_of(from), row_of(from) + side.forward())
            && board.is_vacant(to)
        {
            out.push(Move::Push { to });
        }
    }
    out
}

/// The board after `side` pushes onto `to`. The push must be legal.
pub fn apply_push(board: &Board, side: Side, to: u8) -> Board {
    let from = sq(col_of(to), row_of(to) - side.forward()).expect("push source off the board");
    let mut b = board.clone();
    b.move_tile(from, to);
    b
}

/// Candidate moves for one card slot, returning a fresh vector.
pub fn card_moves(board: &Board, side: Side, card: &Card, slot: usize) -> Vec<Move> {
    let mut out = Vec::new();
    card_moves_into(board, side, card, slot, &mut out);
    out
}

/// Candidate moves for one card slot, appended to `out`.
///
/// Applies the rules shared by every card: a spent or ball-gated card yields
/// nothing, candidates with a duplicate description are dropped (first one
/// wins), and no card may produce a winning board for either side. Only an
/// ordinary push wins a game.
pub fn card_moves_into(board: &Board, side: Side, card: &Card, slot: usize, out: &mut Vec<Move>) {
    if card.used {
        return;
    }
    let gated = match card.kind {
        // Pull inverts the gate: it is dead while the ball is already home.
        CardKind::Pull => board.ball == BallHolder::held_by(side),
        _ => board.ball == BallHolder::held_by(side.other()),
    };
    if gated {
        return;
    }

    let mut cands: Vec<(Board, String)> = Vec::new();
    gen_card(board, side, card.kind, &mut cands);

    let mut seen: Vec<&str> = Vec::new();
    for (b, desc) in &cands {
        if seen.contains(&desc.as_str()) {
            continue;
        }
        if b.is_win_for(side) || b.is_win_for(side.other()) {
            continue;
        }
        seen.push(desc);
        out.push(Move::CardMove {
            slot,
            board: b.clone(),
            description: desc.clone(),
        });
    }
}

/// A card play pushes the ball one step away from its caster.
pub fn ball_after_card(ball: BallHolder, caster: Side) -> BallHolder {
    match (ball, caster) {
        (BallHolder::Neutral, Side::White) => BallHolder::Black,
        (BallHolder::Neutral, Side::Black) => BallHolder::White,
        (BallHolder::White, Side::White) => BallHolder::Neutral,
        (BallHolder::Black, Side::Black) => BallHolder::Neutral,
        _ => panic!("card played while the ball is with the opponent"),
    }
}

/// Pull is the one card that moves the ball toward its caster.
pub fn ball_after_pull(ball: BallHolder, caster: Side) -> BallHolder {
    match (ball, caster) {
        (BallHolder::Neutral, Side::White) => BallHolder::White,
        (BallHolder::Neutral, Side::Black) => BallHolder::Black,
        (BallHolder::Black, Side::White) => BallHolder::Neutral,
        (BallHolder::White, Side::Black) => BallHolder::Neutral,
        _ => panic!("pull played while the ball is already home"),
    }
}

fn gen_card(board: &Board, side: Side, kind: CardKind, out: &mut Vec<(Board, String)>) {
    match kind {
        CardKind::Bishop => gen_bishop(board, side, out),
        CardKind::Charge => gen_charge(board, side, out),
        CardKind::SideStep => gen_sidestep(board, side, out),
        CardKind::Jump => gen_jump(board, side, out),
        CardKind::Knight => gen_knight(board, side, out),
        CardKind::Knife => gen_stab(board, side, CardKind::Knife, &ORTHO, out),
        CardKind::Dagger => gen_stab(board, side, CardKind::Dagger, &DIAG, out),
        CardKind::Kamikaze => gen_kamikaze(board, side, out),
        CardKind::Fire => gen_fire(board, side, out),
        CardKind::Wall => gen_wall(board, side, out),
        CardKind::Spawn => gen_spawn(board, side, out),
        CardKind::Scare => gen_scare(board, side, out),
        CardKind::Tank => gen_tank(board, side, out),
        CardKind::Peace => gen_peace(board, side, out),
        CardKind::Pull => gen_pull(board, side, out),
    }
}

/// Clone the board with the ball already stepped for a card play.
fn card_board(board: &Board, side: Side) -> Board {
    let mut b = board.clone();
    b.ball = ball_after_card(board.ball, side);
    b
}

/// Relocate one pawn as a card effect. Works for the caster's pawns and,
/// for scare, the opponent's.
fn pawn_move(
    board: &Board,
    side: Side,
    kind: CardKind,
    from: u8,
    to: u8,
    out: &mut Vec<(Board, String)>,
) {
    let mut b = card_board(board, side);
    b.move_tile(from, to);
    let desc = format!("{}: {}->{}", kind.name(), sq_to_label(from), sq_to_label(to));
    out.push((b, desc));
}

/// The three rows of a side's half, own start row and the shared middle
/// row included.
fn half_rows(side: Side) -> [i8; 3] {
    match side {
        Side::White => [0, 1, 2],
        Side::Black => [2, 3, 4],
    }
}

fn gen_bishop(board: &Board, side: Side, out: &mut Vec<(Board, String)>) {
    for from in board.pawn_squares(side) {
        let c0 = col_of(from);
        let r0 = row_of(from);
        for (dc, dr) in DIAG {
            let mut c = c0 + dc;
            let mut r = r0 + dr;
            while let Some(to) = sq(c, r) {
                if r == side.win_row() || !board.is_vacant(to) {
                    break;
                }
                pawn_move(board, side, CardKind::Bishop, from, to, out);
                c += dc;
                r += dr;
            }
        }
    }
}

fn gen_charge(board: &Board, side: Side, out: &mut Vec<(Board, String)>) {
    let dir = side.forward();
    for from in board.pawn_squares(side) {
        let c = col_of(from);
        // The adjacent row is skipped outright, occupied or not.
        let mut r = row_of(from) + 2 * dir;
        while let Some(to) = sq(c, r) {
            if r == side.win_row() || !board.is_vacant(to) {
                break;
            }
            pawn_move(board, side, CardKind::Charge, from, to, out);
            r += dir;
        }
    }
}

fn gen_sidestep(board: &Board, side: Side, out: &mut Vec<(Board, String)>) {
    for from in board.pawn_squares(side) {
        let r = row_of(from);
        for dc in [-1, 1] {
            let mut c = col_of(from) + dc;
            while let Some(to) = sq(c, r) {
                if !board.is_vacant(to) {
                    break;
                }
                pawn_move(board, side, CardKind::SideStep, from, to, out);
                c += dc;
            }
        }
    }
}

fn gen_jump(board: &Board, side: Side, out: &mut Vec<(Board, String)>) {
    for from in board.pawn_squares(side) {
        // Two rows forward; the square leapt over is not checked.
        if let Some(to) = sq(col_of(from), row_of(from) + 2 * side.forward())
            && board.is_vacant(to)
        {
            pawn_move(board, side, CardKind::Jump, from, to, out);
        }
    }
}

fn gen_knight(board: &Board, side: Side, out: &mut Vec<(Board, String)>) {
    let deltas = [
        (1, 2),
        (2, 1),
        (-1, 2),
        (-2, 1),
        (1, -2),
        (2, -1),
        (-1, -2),
        (-2, -1),
    ];
    for from in board.pawn_squares(side) {
        let c = col_of(from);
        let r = row_of(from);
        for (dc, dr) in deltas {
            if let Some(to) = sq(c + dc, r + dr)
                && board.is_vacant(to)
            {
                pawn_move(board, side, CardKind::Knight, from, to, out);
            }
        }
    }
}

fn gen_stab(
    board: &Board,
    side: Side,
    kind: CardKind,
    dirs: &[(i8, i8)],
    out: &mut Vec<(Board, String)>,
) {
    for from in board.pawn_squares(side) {
        let c = col_of(from);
        let r = row_of(from);
        for &(dc, dr) in dirs {
            if let Some(target) = sq(c + dc, r + dr)
                && board.tile_at(target) == Tile::Pawn(side.other())
            {
                let mut b = card_board(board, side);
                b.eliminate_pawn(target);
                out.push((b, format!("{} pawn: {}", kind.name(), sq_to_label(target))));
            }
        }
    }
}

fn gen_kamikaze(board: &Board, side: Side, out: &mut Vec<(Board, String)>) {
    for from in board.pawn_squares(side) {
        let c0 = col_of(from);
        let r0 = row_of(from);
        for &(dc, dr) in ORTHO.iter().chain(DIAG.iter()) {
            let mut c = c0 + dc;
            let mut r = r0 + dr;
            while let Some(target) = sq(c, r) {
                match board.tile_at(target) {
                    Tile::Empty => {
                        c += dc;
                        r += dr;
                    }
                    Tile::Pawn(owner) if owner == side.other() => {
                        let mut b = card_board(board, side);
                        b.eliminate_pawn(target);
                        b.eliminate_pawn(from);
                        let desc = format!(
                            "kamikaze: eliminate pawns {} (opponent) and {} (player)",
                            sq_to_label(target),
                            sq_to_label(from)
                        );
                        out.push((b, desc));
                        break;
                    }
                    // Own pawns and walls stop the ray with nothing to show.
                    _ => break,
                }
            }
        }
    }
}

fn gen_fire(board: &Board, side: Side, out: &mut Vec<(Board, String)>) {
    for r in half_rows(side) {
        let base = (r as u8) * 5;
        let has_enemy =
            (base..base + 5).any(|s| board.tile_at(s) == Tile::Pawn(side.other()));
        if !has_enemy {
            continue;
        }
        let mut b = card_board(board, side);
        for s in base..base + 5 {
            if matches!(b.tile_at(s), Tile::Pawn(_)) {
                b.eliminate_pawn(s);
            }
        }
        out.push((b, format!("fire in row: {}", r + 1)));
    }
}

fn gen_wall(board: &Board, side: Side, out: &mut Vec<(Board, String)>) {
    for from in board.pawn_squares(side) {
        let c = col_of(from);
        let r = row_of(from);
        for (dc, dr) in ORTHO {
            if let Some(target) = sq(c + dc, r + dr)
                && board.is_vacant(target)
            {
                let mut b = card_board(board, side);
                b.place_wall(target);
                out.push((b, format!("wall: {}", sq_to_label(target))));
            }
        }
    }
}

fn gen_spawn(board: &Board, side: Side, out: &mut Vec<(Board, String)>) {
    for r in half_rows(side) {
        let base = (r as u8) * 5;
        for s in base..base + 5 {
            if board.is_vacant(s) {
                let mut b = card_board(board, side);
                b.place_pawn(s, side);
                out.push((b, format!("spawn a pawn tile at: {}", sq_to_label(s))));
            }
        }
    }
}

fn gen_scare(board: &Board, side: Side, out: &mut Vec<(Board, String)>) {
    let enemy = side.other();
    let back = enemy.start_row();
    for from in board.pawn_squares(enemy) {
        if let Some(to) = sq(col_of(from), back)
            && board.is_vacant(to)
        {
            pawn_move(board, side, CardKind::Scare, from, to, out);
        }
    }
}

fn gen_tank(board: &Board, side: Side, out: &mut Vec<(Board, String)>) {
    for from in board.pawn_squares(side) {
        let c = col_of(from);
        let r = row_of(from);
        for (dc, dr) in ORTHO {
            let neighbor = sq(c + dc, r + dr);
            let beyond = sq(c + 2 * dc, r + 2 * dr);
            if let (Some(nb), Some(bd)) = (neighbor, beyond) {
                if !board.is_vacant(nb) && board.is_vacant(bd) {
                    let mut b = card_board(board, side);
                    b.move_tile(nb, bd);
                    b.move_tile(from, nb);
                    let desc = format!("tank: {}->{}", sq_to_label(from), sq_to_label(nb));
                    out.push((b, desc));
                }
            }
        }
    }
}

fn gen_peace(board: &Board, side: Side, out: &mut Vec<(Board, String)>) {
    let own_front = farthest_pawns(board, side);
    let enemy_front = farthest_pawns(board, side.other());
    for &own in &own_front {
        for &enemy in &enemy_front {
            let mut b = card_board(board, side);
            b.eliminate_pawn(enemy);
            b.eliminate_pawn(own);
            let desc = format!(
                "peace: eliminate pawns {} (opponent) and {} (player)",
                sq_to_label(enemy),
                sq_to_label(own)
            );
            out.push((b, desc));
        }
    }
}

fn gen_pull(board: &Board, side: Side, out: &mut Vec<(Board, String)>) {
    let mut b = board.clone();
    b.ball = ball_after_pull(board.ball, side);
    out.push((b, "pull ball".to_string()));
}

/// Pawns standing on the side's farthest occupied row.
fn farthest_pawns(board: &Board, side: Side) -> Vec<u8> {
    let pawns = board.pawn_squares(side);
    match pawns.iter().map(|&s| traveled(side, row_of(s))).max() {
        Some(best) => pawns
            .into_iter()
            .filter(|&s| traveled(side, row_of(s)) == best)
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
