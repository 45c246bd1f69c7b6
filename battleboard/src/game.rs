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

//! The game loop: set up a fresh board from a strategy's placements, then let the
//! strategy fire until every ship is sunk, the move cap is reached, or it runs out of
//! moves.

use log::{debug, info};
use thiserror::Error;

use crate::{
    board::{Board, Outcome, PlaceError, Position},
    ships::{Ship, ShipKind},
    strategy::{Strategy, StrategyError},
};

/// Moves allowed before the game is stopped.
pub const DEFAULT_MAX_MOVES: usize = 100;

/// Settings for a single game.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameConfig {
    /// Upper bound on attacks.
    pub max_moves: usize,
    /// Ships to create and place, in order.
    pub fleet: Vec<ShipKind>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_moves: DEFAULT_MAX_MOVES,
            fleet: ShipKind::ALL.to_vec(),
        }
    }
}

/// Errors that stop a game from being set up.
#[derive(Debug, Error)]
pub enum GameError {
    /// The strategy produced fewer placements than there are ships.
    #[error("no placement given for the {0}")]
    MissingPlacement(ShipKind),
    /// The board rejected one of the strategy's placements.
    #[error(transparent)]
    Placement(#[from] PlaceError),
    /// The strategy could not produce placements.
    #[error(transparent)]
    Strategy(#[from] StrategyError),
}

/// How a game ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Finish {
    /// Every ship was sunk.
    AllSunk,
    /// The move cap was reached first.
    MoveCap,
    /// The strategy had no more moves.
    OutOfMoves,
}

/// A single resolved attack.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Turn {
    /// 0-based move number.
    pub number: usize,
    pub position: Position,
    pub outcome: Outcome,
}

/// Final tally of a game.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Summary {
    pub moves: usize,
    /// `None` while the game is still in progress.
    pub finish: Option<Finish>,
    pub sunk: Vec<ShipKind>,
    pub afloat: Vec<ShipKind>,
}

/// A game in progress. Owns its board and strategy exclusively.
pub struct Game<S> {
    board: Board,
    strategy: S,
    max_moves: usize,
    moves: usize,
    out_of_moves: bool,
}

impl<S: Strategy> Game<S> {
    /// Create the fleet, ask the strategy where it goes, and place it on a new board.
    pub fn setup(mut strategy: S, config: GameConfig) -> Result<Self, GameError> {
        let placements = strategy.generate_placements(&config.fleet)?;
        let mut board = Board::new();
        let mut placements = placements.into_iter();
        for &kind in config.fleet.iter() {
            let placement = placements
                .next()
                .ok_or(GameError::MissingPlacement(kind))?;
            board.place_ship_at(Ship::new(kind), placement.position, placement.direction)?;
        }
        info!(
            "game set up with {} ships, {} move cap",
            config.fleet.len(),
            config.max_moves
        );
        Ok(Self {
            board,
            strategy,
            max_moves: config.max_moves,
            moves: 0,
            out_of_moves: false,
        })
    }

    /// The board being attacked.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The strategy playing this game.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Attacks made so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// `Some` once no further moves will be made.
    pub fn finished(&self) -> Option<Finish> {
        if self.board.all_sunk() {
            Some(Finish::AllSunk)
        } else if self.moves >= self.max_moves {
            Some(Finish::MoveCap)
        } else if self.out_of_moves {
            Some(Finish::OutOfMoves)
        } else {
            None
        }
    }

    /// Make one move: get an attack, resolve it, and report the result back. Returns
    /// `None` if the game is already over or the strategy has no more moves.
    pub fn step(&mut self) -> Option<Turn> {
        if self.finished().is_some() {
            return None;
        }
        let position = match self.strategy.next_attack() {
            Some(position) => position,
            None => {
                debug!("strategy out of moves after {}", self.moves);
                self.out_of_moves = true;
                return None;
            }
        };
        let outcome = self.board.attack_at(position);
        self.strategy.report_result(outcome, &self.board.snapshot());
        let turn = Turn {
            number: self.moves,
            position,
            outcome,
        };
        self.moves += 1;
        Some(turn)
    }

    /// Play to the end, calling `on_turn` after every move.
    pub fn play<F>(&mut self, mut on_turn: F) -> Summary
    where
        F: FnMut(&Turn, &Board),
    {
        while let Some(turn) = self.step() {
            on_turn(&turn, &self.board);
        }
        let summary = self.summary();
        info!("game finished in {} moves: {:?}", summary.moves, summary.finish);
        summary
    }

    /// Tally of the game so far.
    pub fn summary(&self) -> Summary {
        let (sunk, afloat): (Vec<&Ship>, Vec<&Ship>) =
            self.board.ships().iter().partition(|ship| ship.sunk());
        Summary {
            moves: self.moves,
            finish: self.finished(),
            sunk: sunk.into_iter().map(Ship::kind).collect(),
            afloat: afloat.into_iter().map(Ship::kind).collect(),
        }
    }
}
