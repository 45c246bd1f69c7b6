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

//! Text rendering of the whole board.
use std::fmt;

use crate::board::{Board, View, ROW_LABELS};

/// Column header line shared by both views.
const HEADER: &str = "  1 2 3 4 5 6 7 8 9 10";

/// Write the header followed by one line per row: the row letter, then each cell
/// separated by a space.
fn write_board(f: &mut fmt::Formatter, board: &Board, view: View) -> fmt::Result {
    writeln!(f, "{}", HEADER)?;
    for (label, row) in ROW_LABELS.iter().zip(board.grid.rows()) {
        write!(f, "{}", label)?;
        for cell in row {
            write!(f, " {}", cell.render(&board.ships, view))?;
        }
        writeln!(f)?;
    }
    Ok(())
}

impl fmt::Display for Board {
    /// Play view: unshot ships stay hidden.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_board(f, self, View::Play)
    }
}

/// Display helper that prints the board with every ship revealed.
#[derive(Debug, Copy, Clone)]
pub struct SetupView<'a>(pub(super) &'a Board);

impl fmt::Display for SetupView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_board(f, self.0, View::Setup)
    }
}
