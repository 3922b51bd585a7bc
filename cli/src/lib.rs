use std::collections::HashSet;

use strum::IntoEnumIterator;
use tabled::{Table, Tabled};
use xbetza::{
    BaseAtom, BoardQuery, Coord, GridBoard, Modifier, ModifierSet, MoveAtom, SquareState,
};

#[derive(Tabled)]
struct BaseAtomRow {
    letter: char,
    name: String,
    kind: String,
    deltas: String,
}

#[derive(Tabled)]
struct MoveAtomRow {
    #[tabled(rename = "#")]
    idx: usize,
    atom: String,
    kind: String,
    steps: String,
    hops: String,
    modifiers: String,
    deltas: String,
}

/// Table of every base-atom letter.
pub fn base_atoms_table() -> String {
    let rows = BaseAtom::iter().map(|atom| BaseAtomRow {
        letter: atom.letter(),
        name: atom.to_string(),
        kind: atom.default_kind().to_string(),
        deltas: format!("{:?}", atom.deltas()),
    });
    Table::new(rows).to_string()
}

/// Table of compiled move atoms, in notation order.
pub fn move_atoms_table(atoms: &[MoveAtom]) -> String {
    let rows = atoms.iter().enumerate().map(|(idx, atom)| MoveAtomRow {
        idx,
        atom: atom.atom.to_string(),
        kind: atom.kind.to_string(),
        steps: atom.max_steps.to_string(),
        hops: match atom.hop_style() {
            Some(style) => format!("{} x{}", style, atom.hop_count()),
            None => "-".to_string(),
        },
        modifiers: modifier_letters(&atom.modifiers),
        deltas: format!("{:?}", atom.deltas.as_slice()),
    });
    Table::new(rows).to_string()
}

/// Letters of the flags set in `modifiers`, hop and direction letters
/// excluded.
pub fn modifier_letters(modifiers: &ModifierSet) -> String {
    let flags = [
        (modifiers.move_only, Modifier::MoveOnly),
        (modifiers.capture_only, Modifier::CaptureOnly),
        (modifiers.must_capture_first, Modifier::MustCaptureFirst),
        (modifiers.must_not_capture_first, Modifier::MustNotCaptureFirst),
        (modifiers.capture_then_leap, Modifier::CaptureThenLeap),
        (modifiers.zigzag, Modifier::Zigzag),
        (modifiers.take_and_continue, Modifier::TakeAndContinue),
        (modifiers.unblockable, Modifier::Unblockable),
        (modifiers.requires_clear_path, Modifier::RequiresClearPath),
        (modifiers.again_rider, Modifier::AgainRider),
    ];

    let letters: String = flags
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, modifier)| modifier.letter())
        .collect();

    if letters.is_empty() {
        "-".to_string()
    } else {
        letters
    }
}

/// Draws `board` with the origin as `O`, quiet destinations as `*` and
/// captures as `x`.
pub fn render_moves(board: &GridBoard, origin: Coord, moves: &[Coord]) -> String {
    let moves: HashSet<Coord> = moves.iter().copied().collect();
    let mut out = String::with_capacity((board.width() + 1) * board.height());

    // Squares past i32::MAX are not addressable through BoardQuery.
    let width = i32::try_from(board.width()).unwrap_or(i32::MAX);
    let height = i32::try_from(board.height()).unwrap_or(i32::MAX);

    for y in 0..height {
        for x in 0..width {
            let coord = Coord::new(x, y);
            let state = board.get(x, y).unwrap_or(SquareState::Empty);
            let ch = if coord == origin {
                'O'
            } else if moves.contains(&coord) {
                if state == SquareState::Enemy {
                    'x'
                } else {
                    '*'
                }
            } else {
                char::from(state)
            };
            out.push(ch);
        }
        out.push('\n');
    }

    out
}
