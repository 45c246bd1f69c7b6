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

use battleboard::{board::SIZE, Board, Direction, Position, Ship, ShipKind};
use proptest::prelude::*;

fn position() -> impl Strategy<Value = Position> {
    (0..SIZE, 0..SIZE).prop_map(|(row, col)| Position::from_indices(row, col).unwrap())
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Across), Just(Direction::Down)]
}

fn kind() -> impl Strategy<Value = ShipKind> {
    prop::sample::select(ShipKind::ALL.to_vec())
}

fn placement() -> impl Strategy<Value = (ShipKind, Position, Direction)> {
    (kind(), position(), direction())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn failed_placement_changes_nothing(placements in prop::collection::vec(placement(), 1..12)) {
        let mut board = Board::new();
        let mut expected_cells = 0;
        for (kind, start, direction) in placements {
            let before = board.render_setup();
            let placed = board.ships().len();
            match board.place_ship_at(Ship::new(kind), start, direction) {
                Ok(_) => expected_cells += kind.len(),
                Err(err) => {
                    prop_assert_eq!(board.render_setup(), before);
                    prop_assert_eq!(board.ships().len(), placed);
                    prop_assert_eq!(err.into_ship().kind(), kind);
                }
            }
            prop_assert_eq!(board.occupied_cells(), expected_cells);
        }
    }

    #[test]
    fn sunk_iff_every_segment_hit(
        (kind, start, direction) in placement(),
        attacks in prop::collection::vec(position(), 0..60),
    ) {
        let mut board = Board::new();
        prop_assume!(board.place_ship_at(Ship::new(kind), start, direction).is_ok());
        let mut was_sunk = false;
        for target in attacks {
            let outcome = board.attack_at(target);
            let ship = &board.ships()[0];
            prop_assert_eq!(ship.sunk(), ship.segments().all(|s| s.hit()));
            prop_assert!(!was_sunk || ship.sunk());
            prop_assert_eq!(outcome.sunk_ship().is_some(), outcome.is_hit() && ship.sunk());
            was_sunk = ship.sunk();
        }
    }

    #[test]
    fn play_view_only_reveals_attacked_cells(
        (kind, start, direction) in placement(),
        attacks in prop::collection::vec(position(), 0..30),
    ) {
        let mut board = Board::new();
        prop_assume!(board.place_ship_at(Ship::new(kind), start, direction).is_ok());
        for &target in &attacks {
            board.attack_at(target);
        }
        let snapshot = board.snapshot();
        for cell in Position::all() {
            let glyph = snapshot[cell.row_index()][cell.col_index()];
            prop_assert_eq!(glyph != '.', attacks.contains(&cell));
        }
    }
}
