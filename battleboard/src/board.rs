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

//! Types that make up the game board.

use std::fmt;

use log::debug;

use crate::ships::{Ship, ShipHandle, ShipKind};

use self::grid::{Cell, Grid};
pub use self::{
    errors::{BoardError, CannotPlaceReason, PlaceError},
    grid::{SegmentRef, View},
    position::{row_index, Direction, Position, ROW_LABELS},
    render::SetupView,
};

mod errors;
mod grid;
mod position;
mod render;

/// Width and height of the board.
pub const SIZE: usize = 10;

/// Play view of every cell, rows `A` to `J`, columns `1` to `10`.
pub type Snapshot = [[char; SIZE]; SIZE];

/// Result of an attack on a single cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    /// The cell was empty.
    Miss,
    /// A ship was hit but is still afloat.
    Hit,
    /// The ship of the given kind was hit and every one of its segments is now hit.
    Sunk(ShipKind),
}

impl Outcome {
    /// The single character reported for this outcome: `O`, `X`, or the ship's glyph.
    pub fn glyph(self) -> char {
        match self {
            Outcome::Miss => 'O',
            Outcome::Hit => 'X',
            Outcome::Sunk(kind) => kind.glyph(),
        }
    }

    /// True if a ship occupied the attacked cell.
    pub fn is_hit(self) -> bool {
        self != Outcome::Miss
    }

    /// The kind of ship sunk, if this outcome sank one.
    pub fn sunk_ship(self) -> Option<ShipKind> {
        match self {
            Outcome::Sunk(kind) => Some(kind),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Reference to a particular cell in the grid.
#[derive(Debug, Copy, Clone)]
pub struct CellRef<'a> {
    position: Position,
    cell: &'a Cell,
    ships: &'a [Ship],
}

impl<'a> CellRef<'a> {
    /// The position of this cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether this cell has been attacked.
    pub fn hit(&self) -> bool {
        self.cell.hit()
    }

    /// The segment occupying this cell, if any.
    pub fn segment(&self) -> Option<SegmentRef> {
        self.cell.segment()
    }

    /// The ship occupying this cell, if any.
    pub fn ship(&self) -> Option<&'a Ship> {
        let ships = self.ships;
        self.cell.segment().map(|segment| &ships[segment.ship.index()])
    }

    /// How this cell is drawn in the given view.
    pub fn glyph(&self, view: View) -> char {
        self.cell.render(self.ships, view)
    }
}

/// A single player's 10x10 ocean and the ships placed on it.
#[derive(Debug, Clone)]
pub struct Board {
    /// Cells, each holding at most one segment.
    grid: Grid,

    /// Placed ships, indexed by [`ShipHandle`].
    ships: Vec<Ship>,
}

impl Board {
    /// Construct an empty board.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            ships: Vec::new(),
        }
    }

    /// Place a ship with its first segment at `position` (e.g. `"B7"`) extending
    /// `direction` (`"across"` or `"down"`). Nothing is modified unless the whole span
    /// is on the board and unoccupied. On failure the ship is returned in the error.
    pub fn place_ship(
        &mut self,
        ship: Ship,
        position: &str,
        direction: &str,
    ) -> Result<ShipHandle, PlaceError> {
        let parsed = position
            .parse::<Position>()
            .and_then(|start| Ok((start, direction.parse::<Direction>()?)));
        match parsed {
            Ok((start, direction)) => self.place_ship_at(ship, start, direction),
            Err(reason) => Err(PlaceError::new(reason, ship)),
        }
    }

    /// Create a ship of the named kind and place it. An unknown name fails with
    /// [`BoardError::InvalidShipKind`].
    pub fn place_named(
        &mut self,
        kind: &str,
        position: &str,
        direction: &str,
    ) -> Result<ShipHandle, BoardError> {
        let ship = Ship::create(kind)?;
        Ok(self.place_ship(ship, position, direction)?)
    }

    /// Typed form of [`place_ship`][Board::place_ship].
    pub fn place_ship_at(
        &mut self,
        ship: Ship,
        start: Position,
        direction: Direction,
    ) -> Result<ShipHandle, PlaceError> {
        let span = match self.check_placement(ship.len(), start, direction) {
            Ok(span) => span,
            Err(reason) => return Err(PlaceError::new(reason, ship)),
        };
        let handle = ShipHandle(self.ships.len());
        for (number, &pos) in (1..).zip(span.iter()) {
            self.grid[pos].place_segment(SegmentRef {
                ship: handle,
                number,
            });
        }
        debug!("placed {} at {} {}", ship.name(), start, direction);
        self.ships.push(ship);
        Ok(handle)
    }

    /// Compute the span a ship of length `len` would occupy, without placing it. Fails
    /// with [`BoardError::InvalidPlacement`] if any cell of the span is off the board or
    /// already occupied.
    pub fn check_placement(
        &self,
        len: usize,
        start: Position,
        direction: Direction,
    ) -> Result<Vec<Position>, BoardError> {
        let mut span = Vec::with_capacity(len);
        for steps in 0..len {
            let pos = direction
                .offset(start, steps)
                .ok_or(CannotPlaceReason::InsufficientSpace)?;
            if self.grid[pos].occupied() {
                return Err(CannotPlaceReason::AlreadyOccupied.into());
            }
            span.push(pos);
        }
        Ok(span)
    }

    /// Attack the cell at `position`, returning `O` for a miss, `X` for a hit, or the
    /// glyph of the ship this attack sank.
    pub fn attack(&mut self, position: &str) -> Result<Outcome, BoardError> {
        let pos = position.parse()?;
        Ok(self.attack_at(pos))
    }

    /// Typed form of [`attack`][Board::attack]. Attacking a cell again is permitted and
    /// reports the same class of outcome.
    pub fn attack_at(&mut self, pos: Position) -> Outcome {
        if self.grid[pos].hit() {
            debug!("{} attacked again", pos);
        }
        let outcome = self.grid[pos].attack(&mut self.ships);
        debug!("attack at {}: {}", pos, outcome);
        outcome
    }

    /// Whether the cell at `position` has been attacked.
    pub fn has_been_hit(&self, position: &str) -> Result<bool, BoardError> {
        let pos = position.parse()?;
        Ok(self.has_been_hit_at(pos))
    }

    /// Typed form of [`has_been_hit`][Board::has_been_hit].
    pub fn has_been_hit_at(&self, pos: Position) -> bool {
        self.grid[pos].hit()
    }

    /// Play view of every cell.
    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = [['.'; SIZE]; SIZE];
        for pos in Position::all() {
            snapshot[pos.row_index()][pos.col_index()] =
                self.grid[pos].render(&self.ships, View::Play);
        }
        snapshot
    }

    /// Text of the board in the play view. Same as `to_string()`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Text of the board in the setup view.
    pub fn render_setup(&self) -> String {
        self.setup_view().to_string()
    }

    /// Display adapter for the setup view.
    pub fn setup_view(&self) -> SetupView {
        SetupView(self)
    }

    /// Get a reference to the cell at the given position.
    pub fn cell(&self, position: Position) -> CellRef {
        CellRef {
            position,
            cell: &self.grid[position],
            ships: &self.ships,
        }
    }

    /// Placed ships, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Get the placed ship with the given handle.
    pub fn ship(&self, handle: ShipHandle) -> Option<&Ship> {
        self.ships.get(handle.index())
    }

    /// Returns true if every placed ship has been sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::sunk)
    }

    /// Number of cells holding a segment.
    pub fn occupied_cells(&self) -> usize {
        self.grid.iter().filter(|cell| cell.occupied()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
