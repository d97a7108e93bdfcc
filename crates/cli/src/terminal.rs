// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering.
use crossterm::style::Stylize;

use blitz_eval::{Card, HandValue};

/// Renders cards and results as text, optionally with colors.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
}

impl Painter {
    /// Creates a painter, `color` enables ANSI colors.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// A single card, diamonds and hearts are red.
    pub fn card(&self, card: Card) -> String {
        let text = card.to_string();
        if self.color && card.is_red() {
            text.as_str().red().to_string()
        } else {
            text
        }
    }

    /// Cards separated by a space.
    pub fn cards(&self, cards: &[Card]) -> String {
        cards
            .iter()
            .map(|c| self.card(*c))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// A hand category followed by its best five cards.
    pub fn hand(&self, value: &HandValue) -> String {
        format!("{} {}", value.category(), self.cards(value.cards()))
    }

    /// The answer verdict.
    pub fn verdict(&self, correct: bool) -> String {
        match (correct, self.color) {
            (true, true) => "Correct!".green().to_string(),
            (true, false) => "Correct!".to_string(),
            (false, true) => "Wrong!".red().to_string(),
            (false, false) => "Wrong!".to_string(),
        }
    }
}
