use crate::atoms::Delta;
use crate::board::{BoardQuery, SquareState};
use crate::notation::MoveAtom;

use super::traits::GenerateAtomMoves;
use super::{can_land, Coord};

#[derive(Clone, Copy)]
pub struct LeapingMoveGen;

impl GenerateAtomMoves for LeapingMoveGen {
    fn gen_moves(
        &self,
        atom: &MoveAtom,
        origin: Coord,
        board: &dyn BoardQuery,
        out: &mut Vec<Coord>,
    ) {
        let modifiers = &atom.modifiers;

        for &delta in &atom.deltas {
            let Some(target) = origin.offset(delta) else {
                continue;
            };
            let Some(state) = target.probe(board) else {
                continue;
            };

            if modifiers.requires_clear_path && !is_path_clear(origin, delta, board) {
                continue;
            }

            if modifiers.capture_then_leap {
                if let Some(landing) = capture_then_leap(target, state, delta, board) {
                    out.push(landing);
                }
                continue;
            }

            if can_land(modifiers, state) {
                out.push(target);
            }
        }
    }
}

/// Second stage of a capture-then-leap: `captured` must hold an enemy, and the
/// same delta applied again from there must reach an empty square.
pub(super) fn capture_then_leap(
    captured: Coord,
    state: SquareState,
    delta: Delta,
    board: &dyn BoardQuery,
) -> Option<Coord> {
    if state != SquareState::Enemy {
        return None;
    }

    let landing = captured.offset(delta)?;
    (landing.probe(board)? == SquareState::Empty).then_some(landing)
}

/// Every square strictly between `origin` and `origin + delta` on the
/// straight line joining them is on the board and empty.
fn is_path_clear(origin: Coord, delta: Delta, board: &dyn BoardQuery) -> bool {
    let steps = gcd(delta.dx.unsigned_abs(), delta.dy.unsigned_abs()) as i32;
    if steps <= 1 {
        return true;
    }

    let unit = Delta::new(delta.dx / steps, delta.dy / steps);
    (1..steps).all(|i| {
        unit.scaled(i)
            .and_then(|step| origin.offset(step))
            .and_then(|square| square.probe(board))
            == Some(SquareState::Empty)
    })
}

const fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}

pub(crate) static LEAPING_MOVE_GEN: LeapingMoveGen = LeapingMoveGen {};
