use crate::board::BoardQuery;
use crate::notation::MoveAtom;

use super::Coord;

pub trait GenerateAtomMoves {
    /// Pushes every destination `atom` reaches from `origin` onto `out`.
    fn gen_moves(
        &self,
        atom: &MoveAtom,
        origin: Coord,
        board: &dyn BoardQuery,
        out: &mut Vec<Coord>,
    );
}
