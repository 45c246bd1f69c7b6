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

use std::{
    io::{self, BufReader},
    process,
};

use clap::{App, Arg, ArgMatches};
use log::error;

use battleboard::{
    game::{Finish, Game, GameConfig, Summary, DEFAULT_MAX_MOVES},
    strategy::{RandomStrategy, Strategy},
    ShipKind,
};

use crate::human::{HumanAttacker, InputReader};

mod human;
mod logging;

/// Who fires at the robot's fleet.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Attacker {
    Robot,
    Human,
}

fn main() -> io::Result<()> {
    logging::init();
    let default_moves = DEFAULT_MAX_MOVES.to_string();
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Battleship against a robot that places and fires at random.")
        .arg(
            Arg::with_name("player")
                .short("p")
                .long("player")
                .value_name("PLAYER")
                .help("who attacks the robot's fleet")
                .takes_value(true)
                .possible_values(&["robot", "bot", "human", "me"])
                .case_insensitive(true)
                .default_value("robot"),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed the robot for a reproducible game")
                .takes_value(true)
                .validator(|v| v.parse::<u64>().map(|_| ()).map_err(|e| e.to_string())),
        )
        .arg(
            Arg::with_name("max_moves")
                .short("m")
                .long("max-moves")
                .value_name("MOVES")
                .help("stop after this many attacks")
                .takes_value(true)
                .default_value(&default_moves)
                .validator(|v| v.parse::<usize>().map(|_| ()).map_err(|e| e.to_string())),
        )
        .arg(
            Arg::with_name("show_setup")
                .long("show-setup")
                .help("print the fleet placement before play"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("only print the final board and summary"),
        )
        .get_matches();

    let attacker = choose_attacker(&matches);
    let robot = match parse_arg::<u64>(&matches, "seed") {
        Some(seed) => RandomStrategy::seeded(seed),
        None => RandomStrategy::from_entropy(),
    };
    let config = GameConfig {
        max_moves: parse_arg(&matches, "max_moves").unwrap_or(DEFAULT_MAX_MOVES),
        ..GameConfig::default()
    };
    let quiet = matches.is_present("quiet");

    let strategy: Box<dyn Strategy> = match attacker {
        Attacker::Robot => Box::new(robot),
        Attacker::Human => Box::new(HumanAttacker::new(
            robot,
            InputReader::new(BufReader::new(io::stdin())),
        )),
    };

    let mut game = match Game::setup(strategy, config) {
        Ok(game) => game,
        Err(err) => {
            error!("setup failed: {}", err);
            eprintln!("Could not set up the game: {}", err);
            process::exit(1);
        }
    };

    if matches.is_present("show_setup") {
        println!("Fleet placement:");
        println!("{}", game.board().setup_view());
    }
    if attacker == Attacker::Human && !quiet {
        println!("{}", game.board());
    }

    let summary = game.play(|turn, board| {
        if quiet {
            return;
        }
        println!("Move {}", turn.number);
        println!("Attacking {}", turn.position);
        println!("Result {}", turn.outcome);
        println!("{}", board);
    });
    if quiet {
        println!("{}", game.board());
    }
    println!("Finished in {} moves.", summary.moves);
    show_summary(&summary);
    Ok(())
}

/// Choose the attacker from the command line.
fn choose_attacker(matches: &ArgMatches) -> Attacker {
    match matches.value_of("player").map(str::to_ascii_lowercase).as_deref() {
        Some("human") | Some("me") => Attacker::Human,
        _ => Attacker::Robot,
    }
}

/// Parse an already-validated argument.
fn parse_arg<T: std::str::FromStr>(matches: &ArgMatches, name: &str) -> Option<T> {
    matches.value_of(name).and_then(|v| v.parse().ok())
}

/// Print how the game ended and the state of each ship.
fn show_summary(summary: &Summary) {
    match summary.finish {
        Some(Finish::AllSunk) => println!("All ships sunk."),
        Some(Finish::MoveCap) => println!("Move limit reached."),
        Some(Finish::OutOfMoves) => println!("No more moves."),
        None => println!("Game stopped."),
    }
    println!("Sunk: {}", ship_list(&summary.sunk));
    println!("Afloat: {}", ship_list(&summary.afloat));
}

/// Comma separated ship names, or "none".
fn ship_list(ships: &[ShipKind]) -> String {
    if ships.is_empty() {
        "none".to_owned()
    } else {
        ships
            .iter()
            .map(|kind| kind.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
