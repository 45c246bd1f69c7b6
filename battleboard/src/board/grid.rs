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

//! Defines the cells that make up the board and how a single cell resolves an attack.

use std::ops::{Index, IndexMut};

use crate::{
    board::{Outcome, Position, SIZE},
    ships::{Ship, ShipHandle},
};

/// Which rendering of a cell to produce.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum View {
    /// What the attacker may see: `.` unshot, `O` miss, `X` hit, glyph once sunk.
    Play,
    /// Full reveal of ship placement, ignoring hits: glyph if occupied, else `.`.
    Setup,
}

/// Non-owning reference from a cell to the segment placed on it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SegmentRef {
    /// Ship that owns the segment.
    pub ship: ShipHandle,
    /// 1-indexed segment number within that ship.
    pub number: usize,
}

/// A single cell in the grid.
#[derive(Debug, Default, Clone)]
pub(super) struct Cell {
    /// The segment occupying this cell, if any. Bound at most once.
    segment: Option<SegmentRef>,

    /// Whether this cell has been attacked.
    hit: bool,
}

impl Cell {
    pub(super) fn hit(&self) -> bool {
        self.hit
    }

    pub(super) fn segment(&self) -> Option<SegmentRef> {
        self.segment
    }

    pub(super) fn occupied(&self) -> bool {
        self.segment.is_some()
    }

    /// Bind a segment to this cell. Ignored if the cell is already occupied; the board
    /// validates spans before placing anything.
    pub(super) fn place_segment(&mut self, segment: SegmentRef) {
        if self.segment.is_none() {
            self.segment = Some(segment);
        }
    }

    /// Mark this cell hit and strike its segment, if any. Re-attacking reapplies the
    /// same logic and so yields the same outcome class.
    pub(super) fn attack(&mut self, ships: &mut [Ship]) -> Outcome {
        self.hit = true;
        match self.segment {
            None => Outcome::Miss,
            Some(SegmentRef { ship, number }) => {
                // Handles only come from the board that owns both the cell and ships.
                let ship = &mut ships[ship.index()];
                if let Some(segment) = ship.segment_mut(number) {
                    segment.strike();
                }
                if ship.sunk() {
                    Outcome::Sunk(ship.kind())
                } else {
                    Outcome::Hit
                }
            }
        }
    }

    /// Single character for this cell in the given view.
    pub(super) fn render(&self, ships: &[Ship], view: View) -> char {
        let ship = self.segment.map(|segment| &ships[segment.ship.index()]);
        match (view, ship) {
            (View::Setup, Some(ship)) => ship.glyph(),
            (View::Setup, None) => '.',
            (View::Play, _) if !self.hit => '.',
            (View::Play, None) => Outcome::Miss.glyph(),
            (View::Play, Some(ship)) if ship.sunk() => ship.glyph(),
            (View::Play, Some(_)) => Outcome::Hit.glyph(),
        }
    }
}

/// The 10x10 grid of cells, stored row-major.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    cells: Box<[Cell]>,
}

impl Grid {
    pub(super) fn new() -> Self {
        let cells = (0..SIZE * SIZE).map(|_| Cell::default()).collect();
        Self { cells }
    }

    pub(super) fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Iterate rows, each as a slice of cells in column order.
    pub(super) fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(SIZE)
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.linearize()]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.linearize()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ships::ShipKind;

    fn segment(ship: usize, number: usize) -> SegmentRef {
        SegmentRef {
            ship: ShipHandle(ship),
            number,
        }
    }

    #[test]
    fn second_segment_is_ignored() {
        let mut cell = Cell::default();
        cell.place_segment(segment(0, 1));
        cell.place_segment(segment(1, 2));
        assert_eq!(cell.segment(), Some(segment(0, 1)));
    }

    #[test]
    fn attack_reports_hit_then_sunk() {
        let mut ships = vec![Ship::new(ShipKind::PatrolBoat)];
        let mut bow = Cell::default();
        let mut stern = Cell::default();
        bow.place_segment(segment(0, 1));
        stern.place_segment(segment(0, 2));

        assert_eq!(bow.attack(&mut ships), Outcome::Hit);
        assert_eq!(bow.render(&ships, View::Play), 'X');
        assert_eq!(stern.attack(&mut ships), Outcome::Sunk(ShipKind::PatrolBoat));
        assert_eq!(bow.render(&ships, View::Play), 'P');
        assert_eq!(bow.attack(&mut ships), Outcome::Sunk(ShipKind::PatrolBoat));
    }

    #[test]
    fn views_of_empty_cell() {
        let mut ships: Vec<Ship> = Vec::new();
        let mut cell = Cell::default();
        assert_eq!(cell.render(&ships, View::Play), '.');
        assert_eq!(cell.attack(&mut ships), Outcome::Miss);
        assert_eq!(cell.render(&ships, View::Play), 'O');
        assert_eq!(cell.render(&ships, View::Setup), '.');
    }

    #[test]
    fn setup_view_ignores_hits() {
        let mut ships = vec![Ship::new(ShipKind::Carrier)];
        let mut cell = Cell::default();
        cell.place_segment(segment(0, 3));
        assert_eq!(cell.render(&ships, View::Setup), 'C');
        cell.attack(&mut ships);
        assert_eq!(cell.render(&ships, View::Setup), 'C');
    }
}
