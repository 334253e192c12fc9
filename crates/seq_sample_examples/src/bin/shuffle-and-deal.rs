use rand::rngs::StdRng;
use rand::SeedableRng;
use seq_sample::prelude::*;
use seq_sample_examples::init_tracing;
use tracing::info;

/// Shuffles a deck, then deals three hands by popping random cards.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let ranks = ["A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K"];
    let suits = ["♠", "♥", "♦", "♣"];
    let deck: Vec<String> = suits
        .iter()
        .flat_map(|s| ranks.iter().map(move |r| format!("{r}{s}")))
        .collect();

    let mut rng = StdRng::seed_from_u64(7);
    let mut pile = shuffled(&deck, &mut rng);
    info!(cards = pile.len(), "deck shuffled");

    for player in 1..=3 {
        let hand = pop_random_n(&mut pile, 5, &mut rng)?;
        let cards: Vec<String> = hand.into_iter().map(|sel| sel.element).collect();
        println!("player {player}: {}", as_string(&cards));
    }

    println!("cards left in pile: {}", pile.len());
    Ok(())
}
