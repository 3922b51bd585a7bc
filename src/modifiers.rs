use std::fmt;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::atoms::Delta;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum HopStyle {
    Grasshopper,
    Cannon,
}

/// Board-relative direction used to restrict a delta set. Forward is +y.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Direction {
    Forward = 0b0001,
    Backward = 0b0010,
    Left = 0b0100,
    Right = 0b1000,
}

impl Direction {
    pub const fn matches(self, delta: Delta) -> bool {
        match self {
            Direction::Forward => delta.dy > 0,
            Direction::Backward => delta.dy < 0,
            Direction::Left => delta.dx < 0,
            Direction::Right => delta.dx > 0,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Directions(u8);

impl Directions {
    pub const fn empty() -> Self {
        Directions(0)
    }

    pub const fn with(self, dir: Direction) -> Self {
        Directions(self.0 | dir as u8)
    }

    pub const fn contains(self, dir: Direction) -> bool {
        self.0 & dir as u8 != 0
    }

    pub fn allows(self, delta: Delta) -> bool {
        Direction::iter().any(|dir| self.contains(dir) && dir.matches(delta))
    }
}

impl fmt::Debug for Directions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(Direction::iter().filter(|&dir| self.contains(dir)))
            .finish()
    }
}

impl FromIterator<Direction> for Directions {
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        iter.into_iter().fold(Directions::empty(), Directions::with)
    }
}

/// A single modifier letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Modifier {
    MoveOnly,
    CaptureOnly,
    MustCaptureFirst,
    MustNotCaptureFirst,
    CaptureThenLeap,
    Zigzag,
    TakeAndContinue,
    Unblockable,
    RequiresClearPath,
    AgainRider,
    Grasshopper,
    Cannon,
    Forward,
    Backward,
    Left,
    Right,
    Vertical,
    Sideways,
}

impl Modifier {
    pub const fn letter(self) -> char {
        match self {
            Modifier::MoveOnly => 'm',
            Modifier::CaptureOnly => 'c',
            Modifier::MustCaptureFirst => 'o',
            Modifier::MustNotCaptureFirst => 'x',
            Modifier::CaptureThenLeap => 'y',
            Modifier::Zigzag => 'z',
            Modifier::TakeAndContinue => 't',
            Modifier::Unblockable => 'u',
            Modifier::RequiresClearPath => 'p',
            Modifier::AgainRider => 'a',
            Modifier::Grasshopper => 'g',
            Modifier::Cannon => 'j',
            Modifier::Forward => 'f',
            Modifier::Backward => 'b',
            Modifier::Left => 'l',
            Modifier::Right => 'r',
            Modifier::Vertical => 'v',
            Modifier::Sideways => 's',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        Modifier::iter().find(|m| m.letter() == letter)
    }
}

/// Flags gathered from the modifier letters in front of one base atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModifierSet {
    pub move_only: bool,
    pub capture_only: bool,
    pub must_capture_first: bool,
    pub must_not_capture_first: bool,
    pub capture_then_leap: bool,
    pub zigzag: bool,
    pub take_and_continue: bool,
    pub unblockable: bool,
    pub requires_clear_path: bool,
    pub again_rider: bool,
    pub hop_count: u32,
    pub hop_style: Option<HopStyle>,
    pub allowed_directions: Option<Directions>,
}

impl ModifierSet {
    /// Returns a copy with `modifier` applied. Boolean letters are
    /// idempotent, hop letters add one hop each and the last style wins.
    pub fn with(self, modifier: Modifier) -> Self {
        let directions = |dirs: &[Direction]| {
            let current = self.allowed_directions.unwrap_or_default();
            Some(dirs.iter().fold(current, |acc, &dir| acc.with(dir)))
        };

        match modifier {
            Modifier::MoveOnly => Self { move_only: true, ..self },
            Modifier::CaptureOnly => Self { capture_only: true, ..self },
            Modifier::MustCaptureFirst => Self { must_capture_first: true, ..self },
            Modifier::MustNotCaptureFirst => Self { must_not_capture_first: true, ..self },
            Modifier::CaptureThenLeap => Self { capture_then_leap: true, ..self },
            Modifier::Zigzag => Self { zigzag: true, ..self },
            Modifier::TakeAndContinue => Self { take_and_continue: true, ..self },
            Modifier::Unblockable => Self { unblockable: true, ..self },
            Modifier::RequiresClearPath => Self { requires_clear_path: true, ..self },
            Modifier::AgainRider => Self { again_rider: true, ..self },
            Modifier::Grasshopper => Self {
                hop_count: self.hop_count + 1,
                hop_style: Some(HopStyle::Grasshopper),
                ..self
            },
            Modifier::Cannon => Self {
                hop_count: self.hop_count + 1,
                hop_style: Some(HopStyle::Cannon),
                ..self
            },
            Modifier::Forward => Self {
                allowed_directions: directions(&[Direction::Forward]),
                ..self
            },
            Modifier::Backward => Self {
                allowed_directions: directions(&[Direction::Backward]),
                ..self
            },
            Modifier::Left => Self {
                allowed_directions: directions(&[Direction::Left]),
                ..self
            },
            Modifier::Right => Self {
                allowed_directions: directions(&[Direction::Right]),
                ..self
            },
            Modifier::Vertical => Self {
                allowed_directions: directions(&[Direction::Forward, Direction::Backward]),
                ..self
            },
            Modifier::Sideways => Self {
                allowed_directions: directions(&[Direction::Left, Direction::Right]),
                ..self
            },
        }
    }

    /// Resolves conflicts once every letter for an atom has been seen:
    /// capture-then-leap replaces both first-capture gates.
    pub fn normalized(self) -> Self {
        if self.capture_then_leap {
            Self {
                must_capture_first: false,
                must_not_capture_first: false,
                ..self
            }
        } else {
            self
        }
    }

    pub fn directions_restricted(&self) -> bool {
        self.allowed_directions.is_some()
    }

    pub fn allows(&self, delta: Delta) -> bool {
        self.allowed_directions.map_or(true, |dirs| dirs.allows(delta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_letters_round_trip() {
        for modifier in Modifier::iter() {
            assert_eq!(Modifier::from_letter(modifier.letter()), Some(modifier));
        }
    }

    #[test]
    fn test_letters_unique() {
        let mut letters: Vec<char> = Modifier::iter().map(Modifier::letter).collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), Modifier::iter().count());
    }

    #[test]
    fn test_hop_letters_accumulate() {
        let set = ModifierSet::default()
            .with(Modifier::Grasshopper)
            .with(Modifier::Cannon);
        assert_eq!(set.hop_count, 2);
        assert_eq!(set.hop_style, Some(HopStyle::Cannon));
    }

    #[test_case(&[Modifier::CaptureThenLeap, Modifier::MustCaptureFirst] ; "gate after")]
    #[test_case(&[Modifier::MustNotCaptureFirst, Modifier::CaptureThenLeap] ; "gate before")]
    #[test_case(
        &[Modifier::MustCaptureFirst, Modifier::CaptureThenLeap, Modifier::MustNotCaptureFirst]
        ; "both gates"
    )]
    fn test_capture_then_leap_clears_gates(letters: &[Modifier]) {
        let set = letters
            .iter()
            .fold(ModifierSet::default(), |acc, &m| acc.with(m))
            .normalized();
        assert!(set.capture_then_leap);
        assert!(!set.must_capture_first);
        assert!(!set.must_not_capture_first);
    }

    #[test]
    fn test_normalized_keeps_gates_without_capture_then_leap() {
        let set = ModifierSet::default()
            .with(Modifier::MustCaptureFirst)
            .normalized();
        assert!(set.must_capture_first);
    }

    #[test_case(Modifier::Forward, Delta::new(1, 2), true)]
    #[test_case(Modifier::Forward, Delta::new(1, -2), false)]
    #[test_case(Modifier::Sideways, Delta::new(0, 1), false)]
    #[test_case(Modifier::Sideways, Delta::new(-2, 1), true)]
    #[test_case(Modifier::Vertical, Delta::new(1, 0), false)]
    fn test_direction_filter(modifier: Modifier, delta: Delta, want: bool) {
        let set = ModifierSet::default().with(modifier);
        assert!(set.directions_restricted());
        assert_eq!(set.allows(delta), want);
    }

    #[test]
    fn test_unrestricted_allows_everything() {
        let set = ModifierSet::default();
        assert!(!set.directions_restricted());
        assert!(set.allows(Delta::new(0, -1)));
    }
}
