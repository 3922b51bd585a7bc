use std::fmt;

use strum_macros::{Display, EnumIter};

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Delta {
    pub dx: i32,
    pub dy: i32,
}

impl Delta {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub const fn mirrored_y(self) -> Self {
        Self {
            dx: self.dx,
            dy: -self.dy,
        }
    }

    /// `None` if either component overflows.
    pub const fn scaled(self, factor: i32) -> Option<Self> {
        match (self.dx.checked_mul(factor), self.dy.checked_mul(factor)) {
            (Some(dx), Some(dy)) => Some(Self { dx, dy }),
            _ => None,
        }
    }
}

impl fmt::Debug for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.dx, self.dy)
    }
}

impl From<(i32, i32)> for Delta {
    fn from((dx, dy): (i32, i32)) -> Self {
        Delta::new(dx, dy)
    }
}

/// How a move atom walks the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum MoveKind {
    Leap,
    Slide,
    Hop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum BaseAtom {
    Wazir,
    Ferz,
    Knight,
    Dabbaba,
    Alfil,
    Elephant,
    Camel,
    Zebra,
    Nightrider,
    Giraffe,
    Squirrel,
    Pawn,
    Rook,
    Bishop,
    Queen,
    King,
}

impl BaseAtom {
    pub const fn letter(self) -> char {
        match self {
            BaseAtom::Wazir => 'W',
            BaseAtom::Ferz => 'F',
            BaseAtom::Knight => 'N',
            BaseAtom::Dabbaba => 'D',
            BaseAtom::Alfil => 'A',
            BaseAtom::Elephant => 'E',
            BaseAtom::Camel => 'C',
            BaseAtom::Zebra => 'Z',
            BaseAtom::Nightrider => 'H',
            BaseAtom::Giraffe => 'G',
            BaseAtom::Squirrel => 'S',
            BaseAtom::Pawn => 'P',
            BaseAtom::Rook => 'R',
            BaseAtom::Bishop => 'B',
            BaseAtom::Queen => 'Q',
            BaseAtom::King => 'K',
        }
    }

    pub const fn from_letter(letter: char) -> Option<Self> {
        let atom = match letter {
            'W' => BaseAtom::Wazir,
            'F' => BaseAtom::Ferz,
            'N' => BaseAtom::Knight,
            'D' => BaseAtom::Dabbaba,
            'A' => BaseAtom::Alfil,
            'E' => BaseAtom::Elephant,
            'C' => BaseAtom::Camel,
            'Z' => BaseAtom::Zebra,
            'H' => BaseAtom::Nightrider,
            'G' => BaseAtom::Giraffe,
            'S' => BaseAtom::Squirrel,
            'P' => BaseAtom::Pawn,
            'R' => BaseAtom::Rook,
            'B' => BaseAtom::Bishop,
            'Q' => BaseAtom::Queen,
            'K' => BaseAtom::King,
            _ => return None,
        };
        Some(atom)
    }

    pub const fn deltas(self) -> &'static [Delta] {
        match self {
            BaseAtom::Wazir | BaseAtom::Rook => &ORTHO,
            BaseAtom::Ferz | BaseAtom::Bishop => &DIAG,
            BaseAtom::Knight | BaseAtom::Nightrider => &KNIGHT,
            BaseAtom::Dabbaba => &DABBABA,
            BaseAtom::Alfil => &ALFIL,
            BaseAtom::Elephant => &ELEPHANT,
            BaseAtom::Camel => &CAMEL,
            BaseAtom::Zebra => &ZEBRA,
            BaseAtom::Giraffe => &GIRAFFE,
            BaseAtom::Squirrel => &SQUIRREL,
            BaseAtom::Pawn => &PAWN,
            BaseAtom::Queen | BaseAtom::King => &ROYAL,
        }
    }

    /// Traversal used when no modifier overrides it. Riders slide without a
    /// step limit, everything else leaps once.
    pub const fn default_kind(self) -> MoveKind {
        match self {
            BaseAtom::Nightrider | BaseAtom::Rook | BaseAtom::Bishop | BaseAtom::Queen => {
                MoveKind::Slide
            }
            _ => MoveKind::Leap,
        }
    }
}

/// Expands an (m, n) leaper into its eight symmetric offsets, starting at
/// (m, n) and going clockwise.
const fn leaper(m: i32, n: i32) -> [Delta; 8] {
    [
        Delta::new(m, n),
        Delta::new(n, m),
        Delta::new(n, -m),
        Delta::new(m, -n),
        Delta::new(-m, -n),
        Delta::new(-n, -m),
        Delta::new(-n, m),
        Delta::new(-m, n),
    ]
}

pub const ORTHO: [Delta; 4] = [
    Delta::new(1, 0),
    Delta::new(0, 1),
    Delta::new(-1, 0),
    Delta::new(0, -1),
];

pub const DIAG: [Delta; 4] = [
    Delta::new(1, 1),
    Delta::new(-1, 1),
    Delta::new(-1, -1),
    Delta::new(1, -1),
];

pub const DABBABA: [Delta; 4] = [
    Delta::new(2, 0),
    Delta::new(0, 2),
    Delta::new(-2, 0),
    Delta::new(0, -2),
];

pub const ALFIL: [Delta; 4] = [
    Delta::new(2, 2),
    Delta::new(-2, 2),
    Delta::new(-2, -2),
    Delta::new(2, -2),
];

pub const KNIGHT: [Delta; 8] = leaper(1, 2);
pub const CAMEL: [Delta; 8] = leaper(1, 3);
pub const ZEBRA: [Delta; 8] = leaper(2, 3);
pub const GIRAFFE: [Delta; 8] = leaper(1, 4);

pub const PAWN: [Delta; 1] = [Delta::new(0, 1)];

#[rustfmt::skip]
pub const ELEPHANT: [Delta; 8] = [
    DIAG[0], DIAG[1], DIAG[2], DIAG[3],
    ALFIL[0], ALFIL[1], ALFIL[2], ALFIL[3],
];

#[rustfmt::skip]
pub const ROYAL: [Delta; 8] = [
    ORTHO[0], ORTHO[1], ORTHO[2], ORTHO[3],
    DIAG[0], DIAG[1], DIAG[2], DIAG[3],
];

#[rustfmt::skip]
pub const SQUIRREL: [Delta; 16] = [
    KNIGHT[0], KNIGHT[1], KNIGHT[2], KNIGHT[3],
    KNIGHT[4], KNIGHT[5], KNIGHT[6], KNIGHT[7],
    ALFIL[0], ALFIL[1], ALFIL[2], ALFIL[3],
    DABBABA[0], DABBABA[1], DABBABA[2], DABBABA[3],
];

/// Largest delta set of any base atom.
pub const MAX_DELTAS: usize = SQUIRREL.len();
