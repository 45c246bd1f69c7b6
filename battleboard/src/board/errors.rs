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

//! Errors used by the `Board` and the ship catalog.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::ships::Ship;

/// Reason why a ship could not be placed with a given start and direction.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The direction was neither "across" nor "down".
    #[error("unknown direction {0:?}, expected \"across\" or \"down\"")]
    UnknownDirection(String),
    /// The ship would run off the edge of the board.
    #[error("insufficient space for the ship at the specified position")]
    InsufficientSpace,
    /// One or more of the cells in the span was already occupied.
    #[error("the requested position was already occupied")]
    AlreadyOccupied,
}

/// Errors that abort a single board operation. The board is never left partially
/// modified when one of these is returned.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum BoardError {
    /// The ship kind name was not in the catalog.
    #[error("invalid ship kind {0:?}")]
    InvalidShipKind(String),
    /// The position was malformed or outside `A1..=J10`.
    #[error("invalid position {0:?}")]
    InvalidPosition(String),
    /// The direction was unknown, or the span left the board or overlapped a ship.
    #[error("invalid placement: {0}")]
    InvalidPlacement(#[from] CannotPlaceReason),
}

/// Error caused when attempting to place a ship in an invalid position. Hands the ship
/// back so the caller can try again.
#[derive(Error)]
#[error("could not place {}: {reason}", .ship.name())]
pub struct PlaceError {
    #[source]
    reason: BoardError,
    ship: Ship,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    pub(super) fn new(reason: BoardError, ship: Ship) -> Self {
        Self { reason, ship }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> &BoardError {
        &self.reason
    }

    /// Get a reference to the ship that was not placed.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Extract the ship from this error.
    pub fn into_ship(self) -> Ship {
        self.ship
    }

    /// Split into the reason and the ship.
    pub fn into_inner(self) -> (BoardError, Ship) {
        (self.reason, self.ship)
    }
}

impl From<PlaceError> for BoardError {
    fn from(err: PlaceError) -> Self {
        err.reason
    }
}
