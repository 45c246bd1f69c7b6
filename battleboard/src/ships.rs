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

//! Types used for defining ships: the fixed catalog of kinds and the per-game ship
//! instances with their individually hittable segments.
use std::{fmt, str::FromStr};

use crate::board::BoardError;

pub use self::ship::{Segment, Ship};

mod ship;

/// The kinds of ship available in the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShipKind {
    /// Battleship: length 4.
    Battleship,
    /// Carrier: length 5.
    Carrier,
    /// Destroyer: length 3.
    Destroyer,
    /// Submarine: length 3.
    Submarine,
    /// Patrol Boat: length 2.
    PatrolBoat,
}

impl ShipKind {
    /// Every kind, in the order the fleet is placed.
    pub const ALL: &'static [ShipKind] = &[
        ShipKind::Battleship,
        ShipKind::Carrier,
        ShipKind::Destroyer,
        ShipKind::Submarine,
        ShipKind::PatrolBoat,
    ];

    /// Get the length of this ship kind.
    pub fn len(self) -> usize {
        match self {
            ShipKind::Battleship => 4,
            ShipKind::Carrier => 5,
            ShipKind::Destroyer => 3,
            ShipKind::Submarine => 3,
            ShipKind::PatrolBoat => 2,
        }
    }

    /// Single character used for this kind on the board once it is sunk, and in the
    /// setup view.
    pub fn glyph(self) -> char {
        match self {
            ShipKind::Battleship => 'B',
            ShipKind::Carrier => 'C',
            ShipKind::Destroyer => 'D',
            ShipKind::Submarine => 'S',
            ShipKind::PatrolBoat => 'P',
        }
    }

    /// Display name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            ShipKind::Battleship => "Battleship",
            ShipKind::Carrier => "Carrier",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Submarine => "Submarine",
            ShipKind::PatrolBoat => "Patrol Boat",
        }
    }
}

impl FromStr for ShipKind {
    type Err = BoardError;

    /// Look up a kind by its display name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShipKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| BoardError::InvalidShipKind(s.to_owned()))
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Handle to a ship placed on a [`Board`][crate::board::Board]. Only meaningful for the
/// board that returned it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShipHandle(pub(crate) usize);

impl ShipHandle {
    /// Position of the ship in the board's placement order.
    pub fn index(self) -> usize {
        self.0
    }
}
