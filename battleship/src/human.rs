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

//! Lets a person take the attacker's seat while the robot hides the fleet.
use std::{
    collections::HashSet,
    io::{self, BufRead, Write},
};

use log::error;
use rand::Rng;

use battleboard::{
    strategy::{Placement, RandomStrategy, Strategy, StrategyError},
    Outcome, Position, ShipKind, Snapshot,
};

/// Strategy that places ships like the robot but reads attacks from the player.
pub struct HumanAttacker<R, B> {
    robot: RandomStrategy<R>,
    input: InputReader<B>,
    fired: HashSet<Position>,
}

impl<R, B> HumanAttacker<R, B> {
    pub fn new(robot: RandomStrategy<R>, input: InputReader<B>) -> Self {
        Self {
            robot,
            input,
            fired: HashSet::new(),
        }
    }
}

impl<R: Rng, B: BufRead> Strategy for HumanAttacker<R, B> {
    fn generate_placements(&mut self, fleet: &[ShipKind]) -> Result<Vec<Placement>, StrategyError> {
        self.robot.generate_placements(fleet)
    }

    fn next_attack(&mut self) -> Option<Position> {
        let fired = &self.fired;
        let choice = self.input.read_input("Fire at (e.g. B7, or quit):", |input| {
            if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                return Some(None);
            }
            match input.parse::<Position>() {
                Ok(pos) if fired.contains(&pos) => {
                    println!("Already fired at {}.", pos);
                    None
                }
                Ok(pos) => Some(Some(pos)),
                Err(err) => {
                    println!("{}, use a row A-J and a column 1-10.", err);
                    None
                }
            }
        });
        match choice {
            Ok(Some(Some(pos))) => {
                self.fired.insert(pos);
                Some(pos)
            }
            Ok(_) => None,
            Err(err) => {
                error!("could not read input: {}", err);
                None
            }
        }
    }

    fn report_result(&mut self, outcome: Outcome, _snapshot: &Snapshot) {
        if let Some(kind) = outcome.sunk_ship() {
            println!("You sank the {}!", kind);
        }
    }
}

/// Helper to read input from the player.
pub struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    pub fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Returns
    /// `Ok(None)` once input is exhausted.
    pub fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Option<T>,
    {
        while self.read_line(prompt)? {
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(Some(val));
            }
        }
        Ok(None)
    }

    /// Print the prompt, clear the buffer and read a line. False at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<bool> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        Ok(self.read.read_line(&mut self.buf)? != 0)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn attacker(input: &str) -> HumanAttacker<rand::rngs::StdRng, Cursor<Vec<u8>>> {
        HumanAttacker::new(
            RandomStrategy::seeded(7),
            InputReader::new(Cursor::new(input.as_bytes().to_vec())),
        )
    }

    #[test]
    fn skips_bad_and_repeated_positions() {
        let mut human = attacker("z9\nb7\nK1\nB7\nj10\n");
        assert_eq!(human.next_attack(), "B7".parse::<Position>().ok());
        assert_eq!(human.next_attack(), "J10".parse::<Position>().ok());
        assert_eq!(human.next_attack(), None);
    }

    #[test]
    fn quit_ends_attacks() {
        let mut human = attacker("QUIT\nA1\n");
        assert_eq!(human.next_attack(), None);
    }

    #[test]
    fn placements_come_from_the_robot() {
        let mut human = attacker("");
        let placements = human.generate_placements(ShipKind::ALL).unwrap();
        assert_eq!(placements.len(), ShipKind::ALL.len());
    }
}
