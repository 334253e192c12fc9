use rand::rngs::StdRng;
use rand::SeedableRng;
use seq_sample::prelude::*;
use seq_sample_examples::init_tracing;
use tracing::info;

/// Empties a loot pool with weighted pops, re-deriving weights from the
/// remaining items on every draw.
fn main() -> anyhow::Result<()> {
    init_tracing();

    // (name, drop weight)
    let mut pool: Vec<(&str, f32)> = vec![
        ("rusty sword", 50.0),
        ("health potion", 30.0),
        ("chain mail", 15.0),
        ("fire staff", 4.0),
        ("dragon egg", 1.0),
    ];

    let mut rng = StdRng::seed_from_u64(42);

    let mut order = Vec::new();
    while !pool.is_empty() {
        let sel = pop_weighted_by(&mut pool, |item| item.1, &mut rng)?;
        info!(item = sel.element.0, index = sel.index, "dropped");
        order.push(sel.element.0);
    }

    println!("drop order: {}", as_string(&order));
    Ok(())
}
