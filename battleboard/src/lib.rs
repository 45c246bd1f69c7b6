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

//! Single-player Battleship against a robot that places its ships at random and fires
//! at random.
//!
//! [`board`] holds the model with real rules: ship placement validation, attack
//! resolution, and the two text views of the board. [`ships`] is the fixed catalog of
//! ship kinds and the per-game ships built from it. [`strategy`] defines what an
//! opponent must supply, and with the `rng_gen` feature provides the random robot.
//! [`game`] wires a strategy and a board into the move loop.

pub mod board;
pub mod game;
pub mod ships;
pub mod strategy;

pub use crate::{
    board::{Board, BoardError, Direction, Outcome, PlaceError, Position, Snapshot},
    game::{Game, GameConfig, GameError, Summary},
    ships::{Segment, Ship, ShipHandle, ShipKind},
    strategy::{Placement, Strategy, StrategyError},
};

#[cfg(feature = "rng_gen")]
pub use crate::strategy::RandomStrategy;
