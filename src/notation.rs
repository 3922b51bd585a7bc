use std::fmt;
use std::str::FromStr;

use arrayvec::ArrayVec;
use tracing::{debug, trace};

use crate::atoms::{BaseAtom, Delta, MoveKind, MAX_DELTAS};
use crate::modifiers::{HopStyle, Modifier, ModifierSet};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UnknownAtomError {
    #[error("unknown atom: got {0:?}, err at idx {1}")]
    Unrecognized(char, usize),

    #[error("modifiers without atom: got {0:?}, err at idx {1}")]
    Dangling(char, usize),
}

impl UnknownAtomError {
    pub fn ch(&self) -> char {
        match *self {
            UnknownAtomError::Unrecognized(ch, _) | UnknownAtomError::Dangling(ch, _) => ch,
        }
    }

    pub fn idx(&self) -> usize {
        match *self {
            UnknownAtomError::Unrecognized(_, idx) | UnknownAtomError::Dangling(_, idx) => idx,
        }
    }
}

/// Maximum number of steps a slide may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Range {
    Bounded(u32),
    Unbounded,
}

impl Range {
    pub const fn allows(self, step: u32) -> bool {
        match self {
            Range::Bounded(max) => step <= max,
            Range::Unbounded => true,
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Range::Bounded(max) => write!(f, "{}", max),
            Range::Unbounded => write!(f, "inf"),
        }
    }
}

/// One compiled atom, ready for move generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveAtom {
    pub atom: BaseAtom,
    pub kind: MoveKind,
    pub deltas: ArrayVec<Delta, MAX_DELTAS>,
    pub max_steps: Range,
    pub modifiers: ModifierSet,
}

impl MoveAtom {
    /// Builds the descriptor for `atom` prefixed by `modifiers`. The modifiers
    /// are normalized here, after accumulation, so letter order never matters.
    pub fn new(atom: BaseAtom, modifiers: ModifierSet) -> Self {
        let modifiers = modifiers.normalized();

        let (kind, max_steps) = if modifiers.hop_count > 0 {
            (MoveKind::Hop, Range::Unbounded)
        } else if modifiers.again_rider || atom.default_kind() == MoveKind::Slide {
            (MoveKind::Slide, Range::Unbounded)
        } else {
            (MoveKind::Leap, Range::Bounded(1))
        };

        let deltas = atom
            .deltas()
            .iter()
            .copied()
            .filter(|&d| modifiers.allows(d))
            .collect();

        Self {
            atom,
            kind,
            deltas,
            max_steps,
            modifiers,
        }
    }

    pub fn hop_count(&self) -> u32 {
        self.modifiers.hop_count
    }

    pub fn hop_style(&self) -> Option<HopStyle> {
        self.modifiers.hop_style
    }

    pub fn with_deltas(self, deltas: impl IntoIterator<Item = Delta>) -> Self {
        Self {
            deltas: deltas.into_iter().take(MAX_DELTAS).collect(),
            ..self
        }
    }
}

/// Compiles XBetza notation into move atoms, one per base-atom letter, in
/// source order.
pub fn compile(notation: &str) -> Result<Vec<MoveAtom>, UnknownAtomError> {
    let mut atoms = Vec::with_capacity(notation.len());
    let mut pending = ModifierSet::default();
    let mut last_modifier: Option<(char, usize)> = None;

    for (idx, ch) in notation.char_indices() {
        if let Some(modifier) = Modifier::from_letter(ch) {
            pending = pending.with(modifier);
            last_modifier = Some((ch, idx));
        } else if let Some(atom) = BaseAtom::from_letter(ch) {
            let move_atom = MoveAtom::new(atom, pending);
            trace!(
                "{} -> {} {:?} over {} deltas",
                ch,
                move_atom.kind,
                move_atom.max_steps,
                move_atom.deltas.len()
            );
            atoms.push(move_atom);
            pending = ModifierSet::default();
            last_modifier = None;
        } else {
            return Err(UnknownAtomError::Unrecognized(ch, idx));
        }
    }

    if let Some((ch, idx)) = last_modifier {
        return Err(UnknownAtomError::Dangling(ch, idx));
    }

    debug!("compiled {:?} into {} atoms", notation, atoms.len());
    Ok(atoms)
}

/// A compiled notation string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Notation {
    source: String,
    atoms: Vec<MoveAtom>,
}

impl Notation {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn atoms(&self) -> &[MoveAtom] {
        &self.atoms
    }

    pub fn into_atoms(self) -> Vec<MoveAtom> {
        self.atoms
    }
}

impl FromStr for Notation {
    type Err = UnknownAtomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Notation {
            source: s.to_string(),
            atoms: compile(s)?,
        })
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}
