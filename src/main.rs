//! lexorank - Demo binary
//!
//! Builds a small ranked list, squeezes entries into a tight gap until the
//! keys run out of precision, and prints the keys after each step.
//!
//! Set `RUST_LOG=lexorank=debug` to watch rebalancing decisions.

use lexorank::{Config, Key, RankResult, RankedItem, Reorderable, ReorderableList};

fn print_list(title: &str, items: &[RankedItem<String>]) {
    println!("{title}:");
    for item in items {
        println!("  {:<12} {}", item.value, item.key());
    }
    println!();
}

fn main() -> RankResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lexorank=info")),
        )
        .init();

    println!("===========================================");
    println!("  lexorank - sortable rank keys");
    println!("===========================================");
    println!();

    let config = Config::default();
    let mut items: Vec<RankedItem<String>> = Vec::new();

    for name in ["alpha", "bravo", "charlie"] {
        let key = ReorderableList::new(&mut items).append(&config)?;
        items.push(RankedItem::new(name.to_owned(), key));
    }
    print_list("Appended", &items);

    // Keep inserting right after the first entry: the gap halves each time
    for round in 1..=40 {
        let key: Key = ReorderableList::new(&mut items).insert(1, &config)?;
        items.insert(1, RankedItem::new(format!("insert-{round}"), key));
    }
    print_list("After 40 inserts at position 1", &items);

    let sorted = ReorderableList::new(&mut items).is_sorted();
    println!("Sorted: {sorted}");

    let production = Config::production();
    let key = ReorderableList::new(&mut items).append(&production)?;
    println!("Step append ({} steps): {key}", production.step_size);

    Ok(())
}
