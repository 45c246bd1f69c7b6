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

use std::collections::HashSet;

use battleboard::{
    game::{Finish, DEFAULT_MAX_MOVES},
    strategy::DEFAULT_MAX_ATTEMPTS,
    Direction, Game, GameConfig, GameError, Outcome, Placement, Position, RandomStrategy,
    ShipKind, Snapshot, Strategy, StrategyError,
};

fn pos(s: &str) -> Position {
    s.parse().unwrap()
}

/// Fixed placements and attacks, recording what it is told.
struct Scripted {
    placements: Vec<Placement>,
    attacks: Vec<Position>,
    reports: Vec<(Outcome, Snapshot)>,
}

impl Scripted {
    fn new(placements: &[(&str, Direction)], attacks: &[&str]) -> Self {
        Self {
            placements: placements
                .iter()
                .map(|&(p, d)| Placement::new(pos(p), d))
                .collect(),
            attacks: attacks.iter().rev().map(|p| pos(p)).collect(),
            reports: Vec::new(),
        }
    }
}

impl Strategy for Scripted {
    fn generate_placements(&mut self, _fleet: &[ShipKind]) -> Result<Vec<Placement>, StrategyError> {
        Ok(self.placements.clone())
    }

    fn next_attack(&mut self) -> Option<Position> {
        self.attacks.pop()
    }

    fn report_result(&mut self, outcome: Outcome, snapshot: &Snapshot) {
        self.reports.push((outcome, *snapshot));
    }
}

fn two_ship_config() -> GameConfig {
    GameConfig {
        fleet: vec![ShipKind::Destroyer, ShipKind::PatrolBoat],
        ..GameConfig::default()
    }
}

#[test]
fn default_config_matches_reference_driver() {
    let config = GameConfig::default();
    assert_eq!(config.max_moves, DEFAULT_MAX_MOVES);
    assert_eq!(config.max_moves, 100);
    assert_eq!(
        config.fleet,
        vec![
            ShipKind::Battleship,
            ShipKind::Carrier,
            ShipKind::Destroyer,
            ShipKind::Submarine,
            ShipKind::PatrolBoat,
        ]
    );
}

#[test]
fn scripted_game_ends_when_all_sunk() {
    let strategy = Scripted::new(
        &[("A1", Direction::Across), ("C3", Direction::Down)],
        &["A1", "B1", "A2", "A3", "C3", "D3", "J10"],
    );
    let mut game = Game::setup(strategy, two_ship_config()).unwrap();
    assert_eq!(game.board().occupied_cells(), 5);

    let mut turns = Vec::new();
    let summary = game.play(|turn, _| turns.push(turn.outcome));
    assert_eq!(
        turns,
        vec![
            Outcome::Hit,
            Outcome::Miss,
            Outcome::Hit,
            Outcome::Sunk(ShipKind::Destroyer),
            Outcome::Hit,
            Outcome::Sunk(ShipKind::PatrolBoat),
        ]
    );
    assert_eq!(summary.moves, 6);
    assert_eq!(summary.finish, Some(Finish::AllSunk));
    assert_eq!(summary.sunk, vec![ShipKind::Destroyer, ShipKind::PatrolBoat]);
    assert!(summary.afloat.is_empty());

    let reports = &game.strategy().reports;
    assert_eq!(reports.len(), 6);
    assert_eq!(reports[0].1[0][0], 'X');
    assert_eq!(reports[1].1[1][0], 'O');
    assert_eq!(reports[5].1[3][2], 'P');
}

#[test]
fn game_stops_at_move_cap() {
    let strategy = Scripted::new(
        &[("A1", Direction::Across), ("C3", Direction::Down)],
        &["J1", "J2", "J3", "J4"],
    );
    let config = GameConfig {
        max_moves: 2,
        ..two_ship_config()
    };
    let mut game = Game::setup(strategy, config).unwrap();
    assert!(game.step().is_some());
    assert!(game.step().is_some());
    assert!(game.step().is_none());
    assert_eq!(game.finished(), Some(Finish::MoveCap));
    assert_eq!(game.strategy().attacks.len(), 2);
}

#[test]
fn game_stops_when_strategy_runs_dry() {
    let strategy = Scripted::new(&[("A1", Direction::Across), ("C3", Direction::Down)], &["E5"]);
    let mut game = Game::setup(strategy, two_ship_config()).unwrap();
    assert_eq!(game.finished(), None);
    let summary = game.play(|_, _| {});
    assert_eq!(summary.moves, 1);
    assert_eq!(summary.finish, Some(Finish::OutOfMoves));
    assert_eq!(summary.afloat, vec![ShipKind::Destroyer, ShipKind::PatrolBoat]);
}

#[test]
fn setup_requires_a_placement_per_ship() {
    let strategy = Scripted::new(&[("A1", Direction::Across)], &[]);
    match Game::setup(strategy, two_ship_config()) {
        Err(GameError::MissingPlacement(kind)) => assert_eq!(kind, ShipKind::PatrolBoat),
        Err(other) => panic!("unexpected error {}", other),
        Ok(_) => panic!("setup should fail"),
    }
}

#[test]
fn setup_rejects_overlapping_placements() {
    let strategy = Scripted::new(&[("A1", Direction::Across), ("A2", Direction::Down)], &[]);
    match Game::setup(strategy, two_ship_config()) {
        Err(GameError::Placement(err)) => assert_eq!(err.ship().kind(), ShipKind::PatrolBoat),
        Err(other) => panic!("unexpected error {}", other),
        Ok(_) => panic!("setup should fail"),
    }
}

#[test]
fn robot_places_whole_fleet_without_overlap() {
    for seed in 0..20 {
        let mut robot = RandomStrategy::seeded(seed);
        let game = Game::setup(&mut robot, GameConfig::default()).unwrap();
        let expected: usize = ShipKind::ALL.iter().map(|k| k.len()).sum();
        assert_eq!(game.board().occupied_cells(), expected);
        assert_eq!(game.board().ships().len(), ShipKind::ALL.len());
    }
}

#[test]
fn robot_fires_at_every_cell_once() {
    let mut robot = RandomStrategy::seeded(42);
    assert_eq!(robot.remaining_attacks(), 100);
    let mut seen = HashSet::new();
    while let Some(target) = robot.next_attack() {
        assert!(seen.insert(target), "{} fired twice", target);
    }
    assert_eq!(seen.len(), 100);
    assert_eq!(robot.next_attack(), None);
}

#[test]
fn robot_gives_up_after_max_attempts() {
    let mut robot = RandomStrategy::seeded(3).with_max_attempts(0);
    assert_eq!(
        robot.generate_placements(&[ShipKind::Carrier]),
        Err(StrategyError::PlacementExhausted {
            kind: ShipKind::Carrier,
            attempts: 0,
        })
    );
    assert!(DEFAULT_MAX_ATTEMPTS > 0);
}

#[test]
fn seeded_games_are_reproducible() {
    let play = |seed| {
        let mut game = Game::setup(RandomStrategy::seeded(seed), GameConfig::default()).unwrap();
        let setup = game.board().render_setup();
        let mut targets = Vec::new();
        let summary = game.play(|turn, _| targets.push(turn.position));
        (setup, targets, summary)
    };
    assert_eq!(play(9), play(9));
}

#[test]
fn full_random_game_sinks_everything_by_move_cap() {
    // 100 distinct attacks on a 100-cell board must find every ship.
    let mut game = Game::setup(RandomStrategy::seeded(2024), GameConfig::default()).unwrap();
    let summary = game.play(|_, _| {});
    assert_eq!(summary.finish, Some(Finish::AllSunk));
    assert!(summary.moves <= 100);
    assert!(game.board().all_sunk());
    assert_eq!(summary.sunk.len(), 5);
}
