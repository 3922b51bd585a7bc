use crate::atoms::Delta;
use crate::board::{BoardQuery, SquareState};
use crate::notation::MoveAtom;

use super::leaping::capture_then_leap;
use super::traits::GenerateAtomMoves;
use super::{can_land, Coord};

#[derive(Clone, Copy)]
pub struct HoppingMoveGen;

impl GenerateAtomMoves for HoppingMoveGen {
    fn gen_moves(
        &self,
        atom: &MoveAtom,
        origin: Coord,
        board: &dyn BoardQuery,
        out: &mut Vec<Coord>,
    ) {
        let modifiers = &atom.modifiers;

        for &delta in &atom.deltas {
            let Some((landing, state)) = find_landing(origin, delta, modifiers.hop_count, board)
            else {
                continue;
            };

            if modifiers.capture_then_leap {
                if let Some(beyond) = capture_then_leap(landing, state, delta, board) {
                    out.push(beyond);
                }
                continue;
            }

            if can_land(modifiers, state) {
                out.push(landing);
            }
        }
    }
}

/// Steps along `delta` until `hop_count` occupied squares have been passed and
/// returns the square right after the last of them. `None` if the board ends
/// first.
fn find_landing(
    origin: Coord,
    delta: Delta,
    hop_count: u32,
    board: &dyn BoardQuery,
) -> Option<(Coord, SquareState)> {
    let mut current = origin;
    let mut hops = 0;

    while hops < hop_count {
        current = current.offset(delta)?;
        if current.probe(board)? != SquareState::Empty {
            hops += 1;
        }
    }

    let landing = current.offset(delta)?;
    landing.probe(board).map(|state| (landing, state))
}

pub(crate) static HOPPING_MOVE_GEN: HoppingMoveGen = HoppingMoveGen {};

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
    fn test_grasshopper_lands_beyond_first_obstacle() -> TestResult {
        let board = GridBoard::from_rows(&["...", ".F.", ".E.", "..."])?;
        let got = generate(&compile("gW")?, 1, 1, &board);
        assert_eq!(got, coords(&[(1, 3)]));
        Ok(())
    }

    #[test]
    fn test_grasshopper_skips_empty_run() -> TestResult {
        let board = GridBoard::from_rows(&["F....F."])?;
        let got = generate(&compile("gR")?, 0, 0, &board);
        assert_eq!(got, coords(&[(6, 0)]));
        Ok(())
    }

    #[test]
    fn test_grasshopper_off_board_beyond_obstacle() -> TestResult {
        let board = GridBoard::from_rows(&["F.E"])?;
        assert!(generate(&compile("gR")?, 0, 0, &board).is_empty());
        Ok(())
    }

    #[test_case("gR", &["F.E.E."], &[(3, 0)] ; "one hop")]
    #[test_case("ggR", &["F.E.E."], &[(5, 0)] ; "two hops")]
    #[test_case("gggR", &["F.E.E."], &[] ; "not enough obstacles")]
    #[test_case("jR", &["F.EE.."], &[(3, 0)] ; "cannon captures beyond screen")]
    #[test_case("mjR", &["F.EE.."], &[] ; "move only cannot capture")]
    #[test_case("cgR", &["F.E..."], &[] ; "capture only needs enemy")]
    #[test_case("gR", &["F.EF.."], &[] ; "friendly landing")]
    fn test_hop_variants(notation: &str, rows: &[&str], want: &[(i32, i32)]) -> TestResult {
        let board = GridBoard::from_rows(rows)?;
        let got = sorted(generate(&compile(notation)?, 0, 0, &board));
        assert_eq!(got, coords(want));
        Ok(())
    }

    #[test_case(&["F.EE.."], &[(4, 0)] ; "captures then leaps")]
    #[test_case(&["F.E..."], &[] ; "landing not enemy")]
    #[test_case(&["F.EEE."], &[] ; "beyond occupied")]
    #[test_case(&["F.EE"], &[] ; "beyond off board")]
    fn test_hop_capture_then_leap(rows: &[&str], want: &[(i32, i32)]) -> TestResult {
        let board = GridBoard::from_rows(rows)?;
        let got = generate(&compile("ygR")?, 0, 0, &board);
        assert_eq!(got, coords(want));
        Ok(())
    }

    #[test]
    fn test_find_landing() -> TestResult {
        let board = GridBoard::from_rows(&["F..E.."])?;
        let got = find_landing(Coord::new(0, 0), Delta::new(1, 0), 1, &board);
        assert_eq!(got, Some((Coord::new(4, 0), SquareState::Empty)));
        Ok(())
    }

    #[test]
    fn test_find_landing_at_coordinate_limit() {
        let board = GridBoard::empty(4, 4);
        let got = find_landing(Coord::new(i32::MAX, 0), Delta::new(1, 0), 1, &board);
        assert_eq!(got, None);
    }
}
