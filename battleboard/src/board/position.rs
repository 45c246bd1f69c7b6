// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Position and direction notation: `B7`, `J10`, `across`, `down`.
use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::board::{BoardError, CannotPlaceReason, SIZE};

/// Row labels, top to bottom.
pub const ROW_LABELS: [char; SIZE] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];

/// Map a row letter (either case) to its 0-based row index.
pub fn row_index(letter: char) -> Option<usize> {
    let letter = letter.to_ascii_uppercase();
    ROW_LABELS.iter().position(|&label| label == letter)
}

/// A cell on the 10x10 board. Always in bounds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// 0-based row, `A` is 0.
    row: usize,
    /// 0-based column, `1` is 0.
    col: usize,
}

impl Position {
    /// Construct a position from 0-based row and column indices. Returns `None` if either
    /// is off the board.
    pub fn from_indices(row: usize, col: usize) -> Option<Self> {
        if row < SIZE && col < SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// 0-based row index.
    pub fn row_index(&self) -> usize {
        self.row
    }

    /// 0-based column index.
    pub fn col_index(&self) -> usize {
        self.col
    }

    /// Row letter, `A` through `J`.
    pub fn row_letter(&self) -> char {
        ROW_LABELS[self.row]
    }

    /// Column number, 1 through 10.
    pub fn column(&self) -> usize {
        self.col + 1
    }

    /// Every position on the board, row by row.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Position { row, col }))
    }

    /// Linear index of this position in row-major order.
    pub(crate) fn linearize(&self) -> usize {
        self.row * SIZE + self.col
    }
}

impl FromStr for Position {
    type Err = BoardError;

    /// Parse a row letter followed by a 1 or 2 digit column, e.g. `b7` or `J10`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static POSITION: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(?P<row>[A-Za-z])(?P<col>[0-9]{1,2})$").unwrap());

        let invalid = || BoardError::InvalidPosition(s.to_owned());
        let captures = POSITION.captures(s).ok_or_else(invalid)?;
        let row = captures["row"].chars().next().and_then(row_index);
        let col = captures["col"]
            .parse::<usize>()
            .ok()
            .and_then(|col| col.checked_sub(1));
        match (row, col) {
            (Some(row), Some(col)) => Position::from_indices(row, col).ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.column())
    }
}

/// Direction a ship extends from its starting position.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Increasing column number along the same row.
    Across,
    /// Increasing row letter along the same column.
    Down,
}

impl Direction {
    /// Both directions.
    pub const ALL: &'static [Direction] = &[Direction::Across, Direction::Down];

    /// The position `steps` cells from `start` in this direction, if still on the board.
    pub fn offset(self, start: Position, steps: usize) -> Option<Position> {
        match self {
            Direction::Across => Position::from_indices(start.row, start.col + steps),
            Direction::Down => Position::from_indices(start.row + steps, start.col),
        }
    }
}

impl FromStr for Direction {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("across") {
            Ok(Direction::Across)
        } else if s.eq_ignore_ascii_case("down") {
            Ok(Direction::Down)
        } else {
            Err(CannotPlaceReason::UnknownDirection(s.to_owned()).into())
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Direction::Across => "across",
            Direction::Down => "down",
        })
    }
}

#[cfg(feature = "rng_gen")]
mod rng_gen {
    use rand::{
        distributions::{Distribution, Standard},
        Rng,
    };

    use super::{Direction, Position};
    use crate::board::SIZE;

    impl Distribution<Position> for Standard {
        /// Uniformly choose any cell on the board.
        fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
            Position {
                row: rng.gen_range(0, SIZE),
                col: rng.gen_range(0, SIZE),
            }
        }
    }

    impl Distribution<Direction> for Standard {
        fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
            if rng.gen() {
                Direction::Across
            } else {
                Direction::Down
            }
        }
    }
}
