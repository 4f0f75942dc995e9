// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example categories
// [2025-01-01T10:00:00.000Z INFO ] Total hands 2598960 elapsed 1.204s (2158605 hands/sec)
// [2025-01-01T10:00:00.000Z INFO ] High Card:       1302540
// [2025-01-01T10:00:00.000Z INFO ] One Pair:        1098240
// [2025-01-01T10:00:00.000Z INFO ] Two Pair:        123552
// [2025-01-01T10:00:00.000Z INFO ] Three of a Kind: 54912
// [2025-01-01T10:00:00.000Z INFO ] Straight:        10200
// [2025-01-01T10:00:00.000Z INFO ] Flush:           5108
// [2025-01-01T10:00:00.000Z INFO ] Full House:      3744
// [2025-01-01T10:00:00.000Z INFO ] Four of a Kind:  624
// [2025-01-01T10:00:00.000Z INFO ] Straight Flush:  36
// [2025-01-01T10:00:00.000Z INFO ] Royal Flush:     4
// ```
use clap::Parser;
use log::info;
use std::time::Instant;

use showdown_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of cards in each hand.
    #[clap(long, short, default_value_t = 5, value_parser = clap::value_parser!(u8).range(5..=7))]
    cards: u8,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let registry = Registry::standard();

    let now = Instant::now();
    let mut counts = [0usize; 10];

    Deck::default().for_each(cli.cards as usize, |hand| {
        let rank = registry.evaluate(hand).rank();
        counts[rank as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    info!(
        "Total hands {total} elapsed {elapsed:.3}s ({:.0} hands/sec)",
        total as f64 / elapsed
    );

    for rank in HandRank::ranks() {
        let label = format!("{rank}:");
        info!("{label:<17}{}", counts[rank as usize]);
    }
}
