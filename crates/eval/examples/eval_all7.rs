// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release -p blitz-eval --example eval_all7
// ```
//
// Prints the number of 7 cards hands for each category, aces play high only
// so the A-2-3-4-5 hands are counted in the lower categories.

use std::time::Instant;

use blitz_eval::*;

fn main() {
    // Evaluate all 133M hands.
    let now = Instant::now();
    let mut counts = [0usize; Category::COUNT];

    Deck::default().for_each(7, |hand| {
        let category = HandValue::eval(hand).category();
        counts[category as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in Category::categories() {
        let label = format!("{category}:");
        println!("{label:<17}{}", counts[category as usize]);
    }
}
