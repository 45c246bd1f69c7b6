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

//! The robot: uniform-random placements and uniform-random, never repeated attacks.
use log::{trace, warn};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{
    board::{Board, Direction, Outcome, Position, Snapshot},
    ships::{Ship, ShipKind},
    strategy::{Placement, Strategy, StrategyError},
};

/// Placement attempts per ship before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Strategy that samples placements until the board accepts them and fires at every
/// cell exactly once in random order. Attack results are not used.
#[derive(Debug)]
pub struct RandomStrategy<R> {
    rng: R,

    /// Cells not yet fired at. Shuffled once, fired from the back.
    remaining: Vec<Position>,

    /// Cap on placement attempts for a single ship.
    max_attempts: usize,
}

impl<R: Rng> RandomStrategy<R> {
    /// Construct a robot drawing from `rng`.
    pub fn new(mut rng: R) -> Self {
        let mut remaining: Vec<Position> = Position::all().collect();
        remaining.shuffle(&mut rng);
        Self {
            rng,
            remaining,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Set the number of placement attempts per ship before
    /// [`StrategyError::PlacementExhausted`] is returned.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Number of attacks left before the robot runs out of moves.
    pub fn remaining_attacks(&self) -> usize {
        self.remaining.len()
    }

    /// Sample placements for one ship against the scratch board until one is accepted.
    fn place_one(&mut self, board: &mut Board, kind: ShipKind) -> Result<Placement, StrategyError> {
        let mut ship = Ship::new(kind);
        for attempt in 1..=self.max_attempts {
            let position: Position = self.rng.gen();
            let direction: Direction = self.rng.gen();
            match board.place_ship_at(ship, position, direction) {
                Ok(_) => return Ok(Placement::new(position, direction)),
                Err(err) => {
                    trace!(
                        "attempt {} for {} at {} {} rejected: {}",
                        attempt,
                        kind,
                        position,
                        direction,
                        err.reason()
                    );
                    ship = err.into_ship();
                }
            }
        }
        warn!("gave up placing {} after {} attempts", kind, self.max_attempts);
        Err(StrategyError::PlacementExhausted {
            kind,
            attempts: self.max_attempts,
        })
    }
}

impl RandomStrategy<StdRng> {
    /// Robot with a fixed seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Robot seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    fn generate_placements(&mut self, fleet: &[ShipKind]) -> Result<Vec<Placement>, StrategyError> {
        let mut board = Board::new();
        fleet
            .iter()
            .map(|&kind| self.place_one(&mut board, kind))
            .collect()
    }

    fn next_attack(&mut self) -> Option<Position> {
        self.remaining.pop()
    }

    fn report_result(&mut self, outcome: Outcome, _snapshot: &Snapshot) {
        trace!(
            "robot ignores outcome {}, {} attacks left",
            outcome,
            self.remaining.len()
        );
    }
}
