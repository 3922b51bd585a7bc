use crate::board::BoardQuery;
use crate::move_gen::{self, Coord};
use crate::notation::{compile, MoveAtom, UnknownAtomError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryContext {
    pub board_width: u32,
    pub board_height: u32,
}

impl Default for GeometryContext {
    fn default() -> Self {
        Self {
            board_width: 8,
            board_height: 8,
        }
    }
}

/// Maps abstract deltas onto the coordinates of a concrete board shape.
pub trait Geometry {
    fn apply(&self, atom: MoveAtom, ctx: &GeometryContext) -> MoveAtom;
}

/// Plain rectangular board of squares: deltas are already board deltas.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquareGeometry;

impl Geometry for SquareGeometry {
    fn apply(&self, atom: MoveAtom, _ctx: &GeometryContext) -> MoveAtom {
        atom
    }
}

/// Square board seen from the other side: forward is -y.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlippedSquareGeometry;

impl Geometry for FlippedSquareGeometry {
    fn apply(&self, atom: MoveAtom, _ctx: &GeometryContext) -> MoveAtom {
        let flipped: Vec<_> = atom.deltas.iter().map(|d| d.mirrored_y()).collect();
        atom.with_deltas(flipped)
    }
}

/// A notation compiled once against a geometry.
#[derive(Debug, Clone)]
pub struct Piece {
    id: String,
    notation: String,
    atoms: Vec<MoveAtom>,
}

impl Piece {
    pub fn new(
        id: &str,
        notation: &str,
        ctx: &GeometryContext,
        geometry: &impl Geometry,
    ) -> Result<Self, UnknownAtomError> {
        let atoms = compile(notation)?
            .into_iter()
            .map(|atom| geometry.apply(atom, ctx))
            .collect();

        Ok(Self {
            id: id.to_string(),
            notation: notation.to_string(),
            atoms,
        })
    }

    pub fn square(id: &str, notation: &str) -> Result<Self, UnknownAtomError> {
        Self::new(id, notation, &GeometryContext::default(), &SquareGeometry)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn notation(&self) -> &str {
        &self.notation
    }

    pub fn atoms(&self) -> &[MoveAtom] {
        &self.atoms
    }

    pub fn moves(&self, x: i32, y: i32, board: &impl BoardQuery) -> Vec<Coord> {
        move_gen::generate(&self.atoms, x, y, board)
    }
}
