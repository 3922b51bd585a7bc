//! XBetza piece notation: compile a movement string into move atoms and
//! enumerate the squares those atoms reach on a board.

pub mod atoms;
pub mod board;
pub mod geometry;
pub mod modifiers;
pub mod move_gen;
pub mod notation;

pub use atoms::{BaseAtom, Delta, MoveKind};
pub use board::{BoardQuery, GridBoard, GridParseError, SquareState};
pub use geometry::{FlippedSquareGeometry, Geometry, GeometryContext, Piece, SquareGeometry};
pub use modifiers::{Direction, Directions, HopStyle, Modifier, ModifierSet};
pub use move_gen::{generate, generate_atom, Coord, GenerateAtomMoves};
pub use notation::{compile, MoveAtom, Notation, Range, UnknownAtomError};
