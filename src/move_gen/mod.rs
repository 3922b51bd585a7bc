pub mod hopping;
pub mod leaping;
pub mod sliding;
mod traits;

use std::fmt;

use tracing::trace;

use crate::atoms::{Delta, MoveKind};
use crate::board::{BoardQuery, SquareState};
use crate::modifiers::ModifierSet;
use crate::notation::MoveAtom;

use self::hopping::HOPPING_MOVE_GEN;
use self::leaping::LEAPING_MOVE_GEN;
use self::sliding::SLIDING_MOVE_GEN;
pub use self::traits::GenerateAtomMoves;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `None` if the sum leaves the `i32` range, which is off any board.
    pub const fn offset(self, delta: Delta) -> Option<Self> {
        match (self.x.checked_add(delta.dx), self.y.checked_add(delta.dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }

    pub(crate) fn probe(self, board: &dyn BoardQuery) -> Option<SquareState> {
        board.get(self.x, self.y)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Coord::new(x, y)
    }
}

/// Destinations reachable from (x, y) by any of `atoms`. Atoms are generated
/// independently, so the same square may appear more than once.
pub fn generate(atoms: &[MoveAtom], x: i32, y: i32, board: &impl BoardQuery) -> Vec<Coord> {
    let origin = Coord::new(x, y);
    let mut moves = Vec::new();

    for atom in atoms {
        let before = moves.len();
        gen_atom_moves(atom, origin, board, &mut moves);
        trace!(
            "{} {} from {:?}: {} moves",
            atom.kind,
            atom.atom,
            origin,
            moves.len() - before
        );
    }

    moves
}

/// Destinations reachable by a single atom.
pub fn generate_atom(atom: &MoveAtom, x: i32, y: i32, board: &impl BoardQuery) -> Vec<Coord> {
    let mut moves = Vec::new();
    gen_atom_moves(atom, Coord::new(x, y), board, &mut moves);
    moves
}

fn gen_atom_moves(atom: &MoveAtom, origin: Coord, board: &dyn BoardQuery, out: &mut Vec<Coord>) {
    match atom.kind {
        MoveKind::Leap => LEAPING_MOVE_GEN.gen_moves(atom, origin, board, out),
        MoveKind::Slide => SLIDING_MOVE_GEN.gen_moves(atom, origin, board, out),
        MoveKind::Hop => HOPPING_MOVE_GEN.gen_moves(atom, origin, board, out),
    }
}

/// Whether an atom may finish its move on a square in `state`.
pub(crate) fn can_land(modifiers: &ModifierSet, state: SquareState) -> bool {
    match state {
        SquareState::Empty => !modifiers.capture_only && !modifiers.must_capture_first,
        SquareState::Enemy => !modifiers.move_only && !modifiers.must_not_capture_first,
        SquareState::Friendly => false,
    }
}
