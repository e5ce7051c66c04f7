//! Deck dump example.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{Card, Deck, DeckOptions, DumpOptions, Shuffler};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    println!("Deck dump example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let shuffler = Shuffler::new(seed);
    let mut input = io::stdin().lock();

    loop {
        let Some(choice) =
            prompt_line(&mut input, "Deck (all, banner, common, noble, jokers, knights): ")
        else {
            break;
        };
        let deck = match choice.as_str() {
            "all" | "" => Deck::new(|_| true),
            "banner" => Deck::new(Card::is_banner),
            "common" => Deck::new(Card::is_common),
            "noble" => Deck::new(Card::is_noble),
            "jokers" => Deck::new(Card::is_joker),
            "knights" => Deck::with_options(&DeckOptions::default().with_knights(true), |_| true),
            "q" | "quit" => break,
            _ => {
                println!("Unknown deck.");
                continue;
            }
        };

        let Some(cards_per_row) = prompt_usize(&mut input, "Cards per row: ") else {
            break;
        };
        let options = DumpOptions::default().with_cards_per_row(cards_per_row);

        println!("\nIn order ({} cards):", deck.len());
        if let Err(err) = deck.dump_io(&mut io::stdout(), &options) {
            println!("Dump error: {err}");
            continue;
        }

        let deck = shuffler.shuffled(deck);
        println!("\nShuffled:");
        if let Err(err) = deck.dump_io(&mut io::stdout(), &options) {
            println!("Dump error: {err}");
        }
        println!();
    }
}

/// Reads one trimmed, lowercased line. Returns `None` at end of input.
fn prompt_line<R: BufRead>(input: &mut R, prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_lowercase()),
    }
}

fn prompt_usize<R: BufRead>(input: &mut R, prompt: &str) -> Option<usize> {
    loop {
        let line = prompt_line(input, prompt)?;
        if line == "q" || line == "quit" {
            return None;
        }
        match line.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}
