use crate::atoms::Delta;
use crate::board::{BoardQuery, SquareState};
use crate::modifiers::ModifierSet;
use crate::notation::MoveAtom;

use super::traits::GenerateAtomMoves;
use super::{can_land, Coord};

#[derive(Clone, Copy)]
pub struct SlidingMoveGen;

impl GenerateAtomMoves for SlidingMoveGen {
    fn gen_moves(
        &self,
        atom: &MoveAtom,
        origin: Coord,
        board: &dyn BoardQuery,
        out: &mut Vec<Coord>,
    ) {
        match zigzag_pair(atom) {
            Some(pair) => walk(atom, board, out, |step| {
                reach(origin, zigzag_delta(pair, step), step)
            }),
            None => {
                for &delta in &atom.deltas {
                    walk(atom, board, out, |step| reach(origin, delta, step));
                }
            }
        }
    }
}

/// The two deltas a zigzag slide alternates between, if it has them.
fn zigzag_pair(atom: &MoveAtom) -> Option<(Delta, Delta)> {
    match atom.deltas.as_slice() {
        [first, second, ..] if atom.modifiers.zigzag => Some((*first, *second)),
        _ => None,
    }
}

/// `origin + step * delta`, `None` once that leaves the `i32` range.
fn reach(origin: Coord, delta: Delta, step: u32) -> Option<Coord> {
    let factor = i32::try_from(step).ok()?;
    origin.offset(delta.scaled(factor)?)
}

/// Active zigzag delta on `step`: odd steps use the first, even the second.
pub fn zigzag_delta(pair: (Delta, Delta), step: u32) -> Delta {
    if step % 2 == 1 {
        pair.0
    } else {
        pair.1
    }
}

/// Walks steps 1, 2, ... until the step limit, the board edge or a blocking
/// square. `square_at` maps a step number to the square it reaches.
fn walk(
    atom: &MoveAtom,
    board: &dyn BoardQuery,
    out: &mut Vec<Coord>,
    square_at: impl Fn(u32) -> Option<Coord>,
) {
    let mut step = 1;

    while atom.max_steps.allows(step) {
        let Some(target) = square_at(step) else {
            break;
        };
        let Some(state) = target.probe(board) else {
            break;
        };

        let (emit, stop) = visit(&atom.modifiers, state);
        if emit {
            out.push(target);
        }
        if stop {
            break;
        }
        step += 1;
    }
}

/// Decides for one square of a slide whether it is a destination and whether
/// the slide ends there.
fn visit(modifiers: &ModifierSet, state: SquareState) -> (bool, bool) {
    if modifiers.take_and_continue {
        return match state {
            SquareState::Friendly => (false, !modifiers.unblockable),
            SquareState::Empty | SquareState::Enemy => (true, false),
        };
    }

    let stop = !modifiers.unblockable && state != SquareState::Empty;
    (can_land(modifiers, state), stop)
}

pub(crate) static SLIDING_MOVE_GEN: SlidingMoveGen = SlidingMoveGen {};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GridBoard;
    use crate::move_gen::generate;
    use crate::notation::compile;
    use test_case::test_case;
    use testresult::TestResult;

    fn sorted(mut moves: Vec<Coord>) -> Vec<Coord> {
        moves.sort();
        moves
    }

    fn coords(pairs: &[(i32, i32)]) -> Vec<Coord> {
        sorted(pairs.iter().copied().map(Coord::from).collect())
    }

    #[test]
    fn test_rook_small_board() -> TestResult {
        let board = GridBoard::from_rows(&["...", ".F.", "..."])?;
        assert_eq!(generate(&compile("R")?, 1, 1, &board).len(), 4);
        Ok(())
    }

    #[test]
    fn test_rook_stops_at_pieces() -> TestResult {
        let board = GridBoard::from_rows(&[
            "..E..",
            ".....",
            "F.F..",
            ".....",
            "..F..",
        ])?;
        let got = sorted(generate(&compile("R")?, 2, 2, &board));
        assert_eq!(got, coords(&[(1, 2), (3, 2), (4, 2), (2, 1), (2, 0), (2, 3)]));
        Ok(())
    }

    #[test]
    fn test_nightrider_slides() -> TestResult {
        let board = GridBoard::empty(7, 7);
        let got = sorted(generate(&compile("H")?, 0, 0, &board));
        assert_eq!(got, coords(&[(1, 2), (2, 4), (3, 6), (2, 1), (4, 2), (6, 3)]));
        Ok(())
    }

    #[test]
    fn test_again_rider_matches_rook() -> TestResult {
        let board = GridBoard::from_rows(&["..E..", ".....", "F.F..", ".....", "..F.."])?;
        assert_eq!(
            sorted(generate(&compile("aW")?, 2, 2, &board)),
            sorted(generate(&compile("R")?, 2, 2, &board))
        );
        Ok(())
    }

    #[test_case("mR", &[(1, 1), (1, 2)] ; "move only")]
    #[test_case("cR", &[(1, 0)] ; "capture only")]
    #[test_case("oR", &[(1, 0)] ; "must capture first")]
    #[test_case("xR", &[(1, 1), (1, 2)] ; "must not capture first")]
    fn test_slide_capture_gates(notation: &str, want: &[(i32, i32)]) -> TestResult {
        let board = GridBoard::from_rows(&[".E.", "...", "...", "FFF"])?;
        let got = sorted(generate(&compile(notation)?, 1, 3, &board));
        assert_eq!(got, coords(want));
        Ok(())
    }

    #[test]
    fn test_unblockable_passes_through() -> TestResult {
        let board = GridBoard::from_rows(&[".E.", ".F.", ".E."])?;
        let got = generate(&compile("uR")?, 1, 1, &board);
        assert!(got.contains(&Coord::new(1, 0)));
        assert!(got.contains(&Coord::new(1, 2)));

        let board = GridBoard::from_rows(&[".....", "..F..", "..E..", ".....", "..F.."])?;
        let got = sorted(generate(&compile("ufR")?, 2, 1, &board));
        assert_eq!(got, coords(&[(2, 2), (2, 3)]));
        Ok(())
    }

    #[test]
    fn test_take_and_continue() -> TestResult {
        let board = GridBoard::from_rows(&["...", ".F.", ".E.", "..."])?;
        let got = generate(&compile("tR")?, 1, 1, &board);
        assert!(got.contains(&Coord::new(1, 2)));
        assert!(got.contains(&Coord::new(1, 3)));
        Ok(())
    }

    #[test]
    fn test_take_and_continue_stops_at_friendly() -> TestResult {
        let board = GridBoard::from_rows(&["F", "E", ".", "F", "E", "."])?;
        let got = sorted(generate(&compile("tfR")?, 0, 0, &board));
        assert_eq!(got, coords(&[(0, 1), (0, 2)]));
        Ok(())
    }

    #[test]
    fn test_zigzag_alternates() -> TestResult {
        let board = GridBoard::empty(9, 9);
        let atoms = compile("zB")?;
        let pair = (atoms[0].deltas[0], atoms[0].deltas[1]);
        assert_eq!(pair, (Delta::new(1, 1), Delta::new(-1, 1)));

        let got = generate(&atoms, 4, 0, &board);
        assert_eq!(
            got,
            vec![
                Coord::new(5, 1),
                Coord::new(2, 2),
                Coord::new(7, 3),
                Coord::new(0, 4)
            ]
        );
        Ok(())
    }

    #[test]
    fn test_zigzag_falls_back_to_single_delta() -> TestResult {
        let board = GridBoard::empty(1, 4);
        let got = generate(&compile("zfR")?, 0, 0, &board);
        assert_eq!(got, coords(&[(0, 1), (0, 2), (0, 3)]));
        Ok(())
    }

    #[test]
    fn test_reach_stops_at_coordinate_limit() {
        let origin = Coord::new(i32::MAX - 2, 0);
        let east = Delta::new(1, 0);
        assert_eq!(reach(origin, east, 2), Some(Coord::new(i32::MAX, 0)));
        assert_eq!(reach(origin, east, 3), None);
        assert_eq!(reach(origin, Delta::new(2, 0), u32::MAX), None);
    }

    #[test_case(1, Delta::new(1, 1))]
    #[test_case(2, Delta::new(-1, 1))]
    #[test_case(7, Delta::new(1, 1))]
    fn test_zigzag_delta(step: u32, want: Delta) {
        assert_eq!(zigzag_delta((Delta::new(1, 1), Delta::new(-1, 1)), step), want);
    }
}
