// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Blitz, a Texas Hold'em showdown trainer.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};
use log::error;
use std::io::{self, IsTerminal};

use blitz_eval::{Card, Deal, Hand};

pub mod quiz;
pub mod terminal;

use terminal::Painter;

#[derive(Debug, Parser)]
#[clap(version, about = "Texas Hold'em showdown trainer.")]
struct Cli {
    /// Logging verbosity, repeat for more details.
    #[clap(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Guess the winner of randomly dealt hands (default).
    Play(PlayArgs),
    /// Evaluate one or two hands on a board.
    Eval(EvalArgs),
}

#[derive(Debug, Default, Args)]
struct PlayArgs {
    /// Seed for reproducible deals.
    #[clap(long)]
    seed: Option<u64>,
    /// Stop after this number of games.
    #[clap(long, value_parser = clap::value_parser!(u32).range(1..))]
    games: Option<u32>,
    /// Print cards without colors.
    #[clap(long)]
    no_color: bool,
}

#[derive(Debug, Args)]
struct EvalArgs {
    /// The five board cards, e.g. "QS JS TS 2H 3D".
    #[clap(long, short)]
    board: String,
    /// A player two hole cards, e.g. "AS KS", repeat for a second player.
    #[clap(long = "player", short, required = true)]
    players: Vec<String>,
    /// Print the result as JSON.
    #[clap(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let res = match cli.command.unwrap_or(Command::Play(PlayArgs::default())) {
        Command::Play(args) => play(args),
        Command::Eval(args) => {
            let painter = Painter::new(io::stdout().is_terminal());
            eval(&args, painter).map(|out| println!("{out}"))
        }
    };

    if let Err(e) = res {
        error!("{e}");
        std::process::exit(1);
    }
}

fn play(args: PlayArgs) -> Result<()> {
    let config = quiz::Config {
        seed: args.seed,
        max_games: args.games.map(|n| n as usize),
        color: !args.no_color,
    };

    quiz::Quiz::new(io::stdin().lock(), io::stdout().lock(), config).run()?;
    Ok(())
}

/// Evaluates the command line hands and returns the text to print.
fn eval(args: &EvalArgs, painter: Painter) -> Result<String> {
    let board = parse_cards::<5>(&args.board, "board")?;
    let holes = args
        .players
        .iter()
        .map(|p| parse_cards::<2>(p, "player"))
        .collect::<Result<Vec<_>>>()?;

    match holes.as_slice() {
        [hole] => {
            let value = Hand::new(*hole, board)?.eval();
            if args.json {
                Ok(serde_json::to_string_pretty(&value)?)
            } else {
                Ok(format!("Player 1's hand is: {}", painter.hand(&value)))
            }
        }
        [hole1, hole2] => {
            let showdown = Deal::new(*hole1, *hole2, board)?.showdown();
            if args.json {
                Ok(serde_json::to_string_pretty(&showdown)?)
            } else {
                Ok(format!(
                    "Player 1's hand is: {}\nPlayer 2's hand is: {}\n{}",
                    painter.hand(&showdown.player1),
                    painter.hand(&showdown.player2),
                    showdown.winner
                ))
            }
        }
        _ => Err(anyhow!("expected one or two players, got {}", holes.len())),
    }
}

/// Parses exactly N cards.
fn parse_cards<const N: usize>(s: &str, what: &str) -> Result<[Card; N]> {
    let cards = Card::parse_list(s)?;
    let len = cards.len();
    cards
        .try_into()
        .map_err(|_| anyhow!("{what} needs {N} cards, got {len}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(board: &str, players: &[&str], json: bool) -> EvalArgs {
        EvalArgs {
            board: board.to_string(),
            players: players.iter().map(|p| p.to_string()).collect(),
            json,
        }
    }

    fn eval_text(board: &str, players: &[&str]) -> Result<String> {
        eval(&args(board, players, false), Painter::new(false))
    }

    #[test]
    fn eval_single_hand() {
        let out = eval_text("QS JS TS 2H 3D", &["AS KS"]).unwrap();
        assert_eq!(out, "Player 1's hand is: royal-flush A♠ K♠ Q♠ J♠ 10♠");
    }

    #[test]
    fn eval_two_hands() {
        let out = eval_text("8S 8D 5H 2C 3S", &["8C 5D", "AS AH"]).unwrap();
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "Player 1's hand is: full-house 8♣ 8♠ 8♦ 5♦ 5♥");
        assert!(lines[1].starts_with("Player 2's hand is: two-pair"));
        assert_eq!(lines[2], "Player 1 wins");
    }

    #[test]
    fn eval_json() {
        let out = eval(
            &args("KS KD 8C 8H 2D", &["QC 3S", "QD 3H"], true),
            Painter::new(false),
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["winner"], "tie");
        assert_eq!(value["player1"]["category"], "two-pair");
        assert_eq!(value["player2"]["tie_break"], json!(["King", "Eight", "Queen"]));
    }

    #[test]
    fn eval_errors() {
        let err = eval_text("QS JS TS 2H", &["AS KS"]).unwrap_err();
        assert_eq!(err.to_string(), "board needs 5 cards, got 4");

        let err = eval_text("QS JS TS 2H 3D", &["AS"]).unwrap_err();
        assert_eq!(err.to_string(), "player needs 2 cards, got 1");

        let err = eval_text("QS JS TS 2H 3D", &["AS QS"]).unwrap_err();
        assert_eq!(err.to_string(), "duplicate card Q♠");

        let err = eval_text("QS JS TS 2H 3D", &["AS KS", "KS 2C"]).unwrap_err();
        assert_eq!(err.to_string(), "duplicate card K♠");

        assert!(eval_text("QS JS TS 2H 3D", &["AS KS", "2C 3C", "4C 5C"]).is_err());
        assert!(eval_text("QS JS TS 2H XD", &["AS KS"]).is_err());
    }

    #[test]
    fn cli_arguments() {
        let cli =
            Cli::try_parse_from(["blitz", "-vv", "play", "--seed", "7", "--games", "3"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Play(args)) => {
                assert_eq!(args.seed, Some(7));
                assert_eq!(args.games, Some(3));
                assert!(!args.no_color);
            }
            _ => panic!("expected play command"),
        }

        assert!(Cli::try_parse_from(["blitz", "play", "--games", "0"]).is_err());

        let cli = Cli::try_parse_from([
            "blitz",
            "eval",
            "-b",
            "QS JS TS 2H 3D",
            "-p",
            "AS KS",
            "-p",
            "2C 3C",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Eval(args)) => assert_eq!(args.players.len(), 2),
            _ => panic!("expected eval command"),
        }

        let cli = Cli::try_parse_from(["blitz"]).unwrap();
        assert!(cli.command.is_none());
    }
}
