//! Draws a few cards from a shuffled deck and prints them.
//!
//! Usage: `cargo run --example render_hand -- [cards] [seed]`
//! Set `RUST_LOG=deckrs=trace` to see the construction stages.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{Card, DeckOptions, render_hand};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let count = args
        .next()
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(5);
    let seed = args
        .next()
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });

    let cards = DeckOptions::default()
        .with_jokers(2)
        .with_shuffle(true)
        .with_seed(seed)
        .build();

    let mut hand: Vec<Card> = cards.into_iter().take(count).collect();
    // The dealer keeps the first card face down.
    if let Some(first) = hand.first_mut() {
        first.hidden = true;
    }

    let names: Vec<String> = hand.iter().skip(1).map(ToString::to_string).collect();
    tracing::info!(seed, shown = ?names, "dealt hand");

    let mut stdout = io::stdout().lock();
    if writeln!(stdout, "{}", render_hand(&hand)).is_err() {
        std::process::exit(1);
    }
}
