use rand::rngs::StdRng;
use rand::SeedableRng;
use seq_sample::prelude::*;
use seq_sample_examples::init_tracing;
use tracing::info;

/// Draws repeatedly from a rarity table and prints how often each tier came up.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let tiers = ["common", "uncommon", "rare", "legendary"];
    let weights = [60.0f32, 25.0, 12.0, 3.0];
    let draws = 10_000usize;

    let mut rng = StdRng::seed_from_u64(2025);
    let mut counts = [0usize; 4];

    for _ in 0..draws {
        let sel = select_weighted(&tiers, &weights, &mut rng)?;
        counts[sel.index] += 1;
    }

    info!(draws, "finished drawing");
    for (tier, count) in tiers.iter().zip(counts) {
        let share = 100.0 * count as f64 / draws as f64;
        println!("{tier:>10}: {count:>5} ({share:.1}%)");
    }

    Ok(())
}
