// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --example outs -- -a "9h 8h" -b "As Ad" --board "2h 3h Kc"
// [2025-01-01T10:00:00.000Z INFO ] Board: 2h 3h Kc
// [2025-01-01T10:00:00.000Z INFO ] Player A: High Card: Kc 9h 8h 3h 2h
// [2025-01-01T10:00:00.000Z INFO ] Player B: One Pair: As Ad Kc 3h 2h
// [2025-01-01T10:00:00.000Z INFO ] 9 outs: 4h 5h 6h 7h Th Jh Qh Kh Ah
// [2025-01-01T10:00:00.000Z INFO ] Probability: 0.400
// ```
//
// Missing cards are dealt from a deck shuffled with the given seed.
use anyhow::{Result, ensure};
use clap::Parser;
use log::{error, info};
use rand::{SeedableRng, rngs::StdRng};

use showdown_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Player A hole cards, dealt if missing.
    #[clap(long, short = 'a')]
    hand_a: Option<String>,
    /// Player B hole cards, dealt if missing.
    #[clap(long, short = 'b')]
    hand_b: Option<String>,
    /// The community cards, a flop is dealt if missing.
    #[clap(long)]
    board: Option<String>,
    /// The seed for the deck shuffle.
    #[clap(long, short, default_value_t = 101)]
    seed: u64,
}

/// Hole cards for each player.
const HOLE_CARDS: usize = 2;

/// Cards on the flop.
const FLOP_CARDS: usize = 3;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
    }
}

fn run(cli: Cli) -> Result<()> {
    let hand_a = cli.hand_a.as_deref().map(parse_cards).transpose()?;
    let hand_b = cli.hand_b.as_deref().map(parse_cards).transpose()?;
    let board = cli.board.as_deref().map(parse_cards).transpose()?;

    let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(cli.seed));

    // Known cards are not in the deck anymore.
    let known = hand_a.iter().chain(&hand_b).chain(&board).flatten();
    for (idx, card) in known.clone().enumerate() {
        ensure!(
            known.clone().skip(idx + 1).all(|c| c != card),
            "card {card} used more than once"
        );
        deck.remove(*card);
    }

    let mut deal = |cards: Option<Vec<Card>>, count: usize| -> Result<Vec<Card>> {
        match cards {
            Some(cards) => Ok(cards),
            None => (0..count)
                .map(|_| deck.deal().ok_or_else(|| anyhow::anyhow!("deck is empty")))
                .collect(),
        }
    };

    let hand_a = deal(hand_a, HOLE_CARDS)?;
    let hand_b = deal(hand_b, HOLE_CARDS)?;
    let board = deal(board, FLOP_CARDS)?;

    ensure!(hand_a.len() == HOLE_CARDS, "player A needs {HOLE_CARDS} cards");
    ensure!(hand_b.len() == HOLE_CARDS, "player B needs {HOLE_CARDS} cards");
    ensure!(board.len() <= 5, "too many community cards");

    let calc = OutsCalculator::default();
    let registry = calc.registry();
    let best_a = registry.evaluate(&[hand_a.as_slice(), board.as_slice()].concat());
    let best_b = registry.evaluate(&[hand_b.as_slice(), board.as_slice()].concat());

    info!("Board: {}", to_string(&board));
    info!("Player A: {best_a}");
    info!("Player B: {best_b}");

    let outs = calc.calculate(&hand_a, &hand_b, &board, &deck);
    info!("{} outs: {}", outs.cards.len(), to_string(&outs.cards));
    info!("Probability: {:.3}", outs.probability);

    Ok(())
}

fn to_string(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
