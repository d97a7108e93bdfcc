// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The showdown quiz.
//!
//! Each round deals two hands on a shared board, asks who wins, and then
//! shows both evaluated hands. The session keeps the answers statistics and
//! prints them when the user stops playing.
use anyhow::Result;
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use std::{
    io::{BufRead, Write},
    time::{Duration, Instant},
};

use blitz_eval::{Deal, Deck, Winner};

use crate::terminal::Painter;

const GUESS_PROMPT: &str = "Who wins? Enter '1' for Player 1, '2' for Player 2, 't' for tie: ";
const AGAIN_PROMPT: &str = "Play again? (y/n): ";

/// The quiz configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Seed for reproducible shuffles, shuffles use OS entropy if not set.
    pub seed: Option<u64>,
    /// Stops after this number of games.
    pub max_games: Option<usize>,
    /// Prints cards and verdicts with colors.
    pub color: bool,
}

/// Answers statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stats {
    games: usize,
    correct: usize,
    answer_time: Duration,
}

impl Stats {
    /// Records an answer.
    pub fn record(&mut self, correct: bool, elapsed: Duration) {
        self.games += 1;
        self.answer_time += elapsed;
        if correct {
            self.correct += 1;
        }
    }

    /// Number of games played.
    pub fn games(&self) -> usize {
        self.games
    }

    /// Number of correct answers.
    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Number of wrong answers.
    pub fn wrong(&self) -> usize {
        self.games - self.correct
    }

    /// Percentage of correct answers, `None` if no games were played.
    pub fn accuracy(&self) -> Option<f64> {
        (self.games > 0).then(|| self.correct as f64 * 100.0 / self.games as f64)
    }

    /// Average time to answer, `None` if no games were played.
    pub fn average_time(&self) -> Option<Duration> {
        (self.games > 0).then(|| self.answer_time.div_f64(self.games as f64))
    }
}

/// Parses a winner guess.
pub fn parse_guess(answer: &str) -> Option<Winner> {
    match answer.trim() {
        "1" => Some(Winner::Player1),
        "2" => Some(Winner::Player2),
        "t" | "T" => Some(Winner::Tie),
        _ => None,
    }
}

/// A quiz session reading answers from `input` and writing to `output`.
pub struct Quiz<R, W> {
    input: R,
    output: W,
    config: Config,
    painter: Painter,
    stats: Stats,
}

impl<R: BufRead, W: Write> Quiz<R, W> {
    /// Creates a new session.
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            painter: Painter::new(config.color),
            config,
            stats: Stats::default(),
        }
    }

    /// Plays until the user stops and returns the session statistics.
    pub fn run(mut self) -> Result<Stats> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        info!("Quiz started seed={:?}", self.config.seed);

        loop {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let deal = Deal::from_deck(&mut deck)?;
            if !self.play(&deal)? {
                break;
            }

            if let Some(max_games) = self.config.max_games {
                if self.stats.games() >= max_games {
                    break;
                }
            }

            match self.prompt(AGAIN_PROMPT)? {
                Some(answer) if !answer.eq_ignore_ascii_case("n") => {}
                _ => break,
            }
        }

        self.print_metrics()?;

        info!(
            "Quiz ended games={} correct={}",
            self.stats.games(),
            self.stats.correct()
        );

        Ok(self.stats)
    }

    /// Plays a round, returns false if the input was closed before an answer.
    fn play(&mut self, deal: &Deal) -> Result<bool> {
        let p = self.painter;
        writeln!(self.output, "Community Cards: {}", p.cards(deal.board()))?;
        writeln!(self.output, "\nPlayer 1's Hand: {}", p.cards(deal.player1()))?;
        writeln!(self.output, "Player 2's Hand: {}", p.cards(deal.player2()))?;

        let start = Instant::now();
        let guess = loop {
            let Some(answer) = self.prompt(GUESS_PROMPT)? else {
                return Ok(false);
            };

            match parse_guess(&answer) {
                Some(guess) => break guess,
                None => writeln!(self.output, "Please answer '1', '2' or 't'.")?,
            }
        };
        let elapsed = start.elapsed();

        let showdown = deal.showdown();
        debug!(
            "p1 eval: {} [{}] p2 eval: {} [{}] winner: {:?}",
            showdown.player1,
            showdown.player1.tie_break(),
            showdown.player2,
            showdown.player2.tie_break(),
            showdown.winner
        );

        let correct = guess == showdown.winner;
        self.stats.record(correct, elapsed);

        writeln!(self.output, "{}", p.verdict(correct))?;
        writeln!(self.output, "Time taken: {:.2} seconds", elapsed.as_secs_f64())?;
        writeln!(self.output, "Player 1's hand is: {}", p.hand(&showdown.player1))?;
        writeln!(self.output, "Player 2's hand is: {}", p.hand(&showdown.player2))?;
        writeln!(self.output, "{}\n", showdown.winner)?;

        Ok(true)
    }

    /// Prints a prompt and reads a line, returns `None` on end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    fn print_metrics(&mut self) -> Result<()> {
        let stats = self.stats;
        let (Some(accuracy), Some(average)) = (stats.accuracy(), stats.average_time()) else {
            writeln!(self.output, "\nNo games played.")?;
            return Ok(());
        };

        writeln!(self.output, "\nGame Metrics:")?;
        writeln!(self.output, "Total Games Played: {}", stats.games())?;
        writeln!(self.output, "Total Correct Answers: {}", stats.correct())?;
        writeln!(self.output, "Total Wrong Answers: {}", stats.wrong())?;
        writeln!(self.output, "Accuracy Rate: {accuracy:.2}%")?;
        writeln!(
            self.output,
            "Average Time Taken: {:.2} seconds",
            average.as_secs_f64()
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seed: u64) -> Config {
        Config {
            seed: Some(seed),
            max_games: None,
            color: false,
        }
    }

    /// The winner of the first round for a seed.
    fn first_winner(seed: u64) -> Winner {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut deck = Deck::new_and_shuffled(&mut rng);
        Deal::from_deck(&mut deck).unwrap().showdown().winner
    }

    fn answer(winner: Winner) -> &'static str {
        match winner {
            Winner::Player1 => "1",
            Winner::Player2 => "2",
            Winner::Tie => "t",
        }
    }

    fn run(input: &str, config: Config) -> (Stats, String) {
        let mut output = Vec::new();
        let stats = Quiz::new(input.as_bytes(), &mut output, config)
            .run()
            .unwrap();
        (stats, String::from_utf8(output).unwrap())
    }

    #[test]
    fn correct_answer() {
        let input = format!("{}\nn\n", answer(first_winner(9)));
        let (stats, output) = run(&input, config(9));

        assert_eq!(stats.games(), 1);
        assert_eq!(stats.correct(), 1);
        assert!(output.contains("Community Cards: "));
        assert!(output.contains("Player 2's Hand: "));
        assert!(output.contains("Correct!"));
        assert!(output.contains("Player 1's hand is: "));
        assert!(output.contains("Accuracy Rate: 100.00%"));
    }

    #[test]
    fn wrong_answer() {
        let wrong = match first_winner(21) {
            Winner::Player1 => Winner::Player2,
            _ => Winner::Player1,
        };

        let input = format!("{}\nn\n", answer(wrong));
        let (stats, output) = run(&input, config(21));

        assert_eq!(stats.games(), 1);
        assert_eq!(stats.wrong(), 1);
        assert!(output.contains("Wrong!"));
        assert!(output.contains("Total Wrong Answers: 1"));
        assert!(output.contains("Accuracy Rate: 0.00%"));
    }

    #[test]
    fn invalid_answer_asks_again() {
        let (stats, output) = run("x\n\n1\nn\n", config(1));
        assert_eq!(stats.games(), 1);
        assert_eq!(output.matches("Please answer").count(), 2);
        assert_eq!(output.matches(GUESS_PROMPT).count(), 3);
    }

    #[test]
    fn end_of_input() {
        let (stats, output) = run("", config(1));
        assert_eq!(stats.games(), 0);
        assert!(output.contains("No games played."));

        // Closing the input at the play again prompt keeps the played game.
        let (stats, _) = run("t\n", config(1));
        assert_eq!(stats.games(), 1);
    }

    #[test]
    fn play_again() {
        let (stats, output) = run("1\ny\n2\nY\nt\nn\n", config(3));
        assert_eq!(stats.games(), 3);
        assert_eq!(output.matches(AGAIN_PROMPT).count(), 3);
        assert!(output.contains("Total Games Played: 3"));
    }

    #[test]
    fn max_games() {
        let config = Config {
            max_games: Some(2),
            ..config(4)
        };

        let (stats, output) = run("1\ny\n2\ny\n1\n", config);
        assert_eq!(stats.games(), 2);
        assert_eq!(output.matches(AGAIN_PROMPT).count(), 1);
    }

    #[test]
    fn seeded_sessions_deal_the_same_cards() {
        let (_, out1) = run("1\nn\n", config(77));
        let (_, out2) = run("1\nn\n", config(77));
        let deal = |s: &str| s.lines().take(4).collect::<Vec<_>>().join("\n");
        assert_eq!(deal(&out1), deal(&out2));
    }

    #[test]
    fn stats() {
        let mut stats = Stats::default();
        assert_eq!(stats.accuracy(), None);
        assert_eq!(stats.average_time(), None);

        stats.record(true, Duration::from_secs(2));
        stats.record(false, Duration::from_secs(4));
        assert_eq!(stats.games(), 2);
        assert_eq!(stats.correct(), 1);
        assert_eq!(stats.wrong(), 1);
        assert_eq!(stats.accuracy(), Some(50.0));
        assert_eq!(stats.average_time(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn guesses() {
        assert_eq!(parse_guess("1"), Some(Winner::Player1));
        assert_eq!(parse_guess(" 2 "), Some(Winner::Player2));
        assert_eq!(parse_guess("T"), Some(Winner::Tie));
        assert_eq!(parse_guess("3"), None);
        assert_eq!(parse_guess(""), None);
    }
}
