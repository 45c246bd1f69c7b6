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

//! The opponent interface: whoever decides where ships go and where to fire.

use std::fmt;

use thiserror::Error;

use crate::{
    board::{Direction, Outcome, Position, Snapshot},
    ships::ShipKind,
};

#[cfg(feature = "rng_gen")]
pub use self::random::{RandomStrategy, DEFAULT_MAX_ATTEMPTS};

#[cfg(feature = "rng_gen")]
mod random;

/// Where and which way a single ship goes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Placement {
    /// Cell of the ship's first segment.
    pub position: Position,
    /// Direction the rest of the ship extends.
    pub direction: Direction,
}

impl Placement {
    pub fn new(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.position, self.direction)
    }
}

/// Errors a strategy may surface instead of a result.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum StrategyError {
    /// No valid placement was found for the ship within the retry cap.
    #[error("could not place {kind} after {attempts} attempts")]
    PlacementExhausted { kind: ShipKind, attempts: usize },
}

/// Source of ship placements and attack coordinates.
pub trait Strategy {
    /// Produce one placement per entry of `fleet`, in the same order. Every placement
    /// must be valid on an empty board given the ones before it.
    fn generate_placements(&mut self, fleet: &[ShipKind]) -> Result<Vec<Placement>, StrategyError>;

    /// Choose the next cell to attack, or `None` when out of moves. Must never return
    /// the same position twice in one game; the board does not deduplicate.
    fn next_attack(&mut self) -> Option<Position>;

    /// Told the outcome of the last attack and the resulting play view.
    fn report_result(&mut self, _outcome: Outcome, _snapshot: &Snapshot) {}
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn generate_placements(&mut self, fleet: &[ShipKind]) -> Result<Vec<Placement>, StrategyError> {
        (**self).generate_placements(fleet)
    }

    fn next_attack(&mut self) -> Option<Position> {
        (**self).next_attack()
    }

    fn report_result(&mut self, outcome: Outcome, snapshot: &Snapshot) {
        (**self).report_result(outcome, snapshot)
    }
}

impl<S: Strategy + ?Sized> Strategy for &mut S {
    fn generate_placements(&mut self, fleet: &[ShipKind]) -> Result<Vec<Placement>, StrategyError> {
        (**self).generate_placements(fleet)
    }

    fn next_attack(&mut self) -> Option<Position> {
        (**self).next_attack()
    }

    fn report_result(&mut self, outcome: Outcome, snapshot: &Snapshot) {
        (**self).report_result(outcome, snapshot)
    }
}
