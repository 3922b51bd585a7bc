use std::fmt;
use std::str::FromStr;

use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum SquareState {
    Empty,
    Friendly,
    Enemy,
}

impl From<SquareState> for char {
    fn from(state: SquareState) -> char {
        match state {
            SquareState::Empty => '.',
            SquareState::Friendly => 'F',
            SquareState::Enemy => 'E',
        }
    }
}

impl TryFrom<char> for SquareState {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '.' => Ok(SquareState::Empty),
            'F' => Ok(SquareState::Friendly),
            'E' => Ok(SquareState::Enemy),
            _ => Err(value),
        }
    }
}

/// Read-only view of a board, as seen by the side to move.
pub trait BoardQuery {
    /// `None` when (x, y) is off the board.
    fn get(&self, x: i32, y: i32) -> Option<SquareState>;
}

impl<T: BoardQuery + ?Sized> BoardQuery for &T {
    fn get(&self, x: i32, y: i32) -> Option<SquareState> {
        (**self).get(x, y)
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GridParseError {
    #[error("grid has no rows")]
    Empty,

    #[error("row length: want {0} got {1}, err at row {2}")]
    RaggedRow(usize, usize, usize),

    #[error("square: want '.'|'F'|'E' got {0:?}, err at row {1} col {2}")]
    Square(char, usize, usize),
}

/// Rectangular board backed by a row-major grid. Row index is y.
#[derive(Clone, PartialEq, Eq)]
pub struct GridBoard {
    width: usize,
    height: usize,
    squares: Vec<SquareState>,
}

impl GridBoard {
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            squares: vec![SquareState::Empty; width * height],
        }
    }

    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridParseError> {
        let width = rows
            .first()
            .map(|row| row.as_ref().chars().count())
            .ok_or(GridParseError::Empty)?;
        if width == 0 {
            return Err(GridParseError::Empty);
        }

        let mut squares = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let row_len = row.chars().count();
            if row_len != width {
                return Err(GridParseError::RaggedRow(width, row_len, y));
            }
            for (x, ch) in row.chars().enumerate() {
                let state =
                    SquareState::try_from(ch).map_err(|ch| GridParseError::Square(ch, y, x))?;
                squares.push(state);
            }
        }

        Ok(Self {
            width,
            height: rows.len(),
            squares,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set(&mut self, x: usize, y: usize, state: SquareState) {
        if x < self.width && y < self.height {
            self.squares[y * self.width + x] = state;
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}

impl BoardQuery for GridBoard {
    fn get(&self, x: i32, y: i32) -> Option<SquareState> {
        self.index(x, y).map(|idx| self.squares[idx])
    }
}

impl FromStr for GridBoard {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        GridBoard::from_rows(&rows)
    }
}

impl fmt::Debug for GridBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut board_str = String::with_capacity((self.width + 1) * self.height);

        for (idx, row) in self.squares.chunks(self.width.max(1)).enumerate() {
            board_str.extend(row.iter().map(|&sq| char::from(sq)));
            if idx + 1 != self.height {
                board_str.push('\n');
            }
        }

        write!(f, "{}", board_str)
    }
}
