//! Example demonstrating the move-to-front (MTF) lookup table.
//!
//! Every successful lookup moves the matching entry to the front, so keys
//! that are asked for often end up near the front and are found quickly.
//!
//! Run with: cargo run --example basic_mtf

use std::cell::RefCell;
use std::rc::Rc;

use mtftable::{AllocError, MtfTable};

fn order(table: &MtfTable<&'static str, u32>) -> Vec<&'static str> {
    table.keys().copied().collect()
}

fn main() -> Result<(), AllocError> {
    println!("=== MTF Table Example ===\n");

    let mut table: MtfTable<&'static str, u32> = MtfTable::default();

    // New entries always go to the front
    for (name, qty) in [("apple", 3), ("banana", 5), ("cherry", 7), ("damson", 9)] {
        table.insert(name, qty)?;
    }
    println!("Inserted apple, banana, cherry, damson");
    println!("  order: {:?}", order(&table));

    // A hit moves the entry to the front; nothing else changes order
    let qty = table.lookup(&"banana").copied();
    println!("\nLooked up banana -> {:?}", qty);
    println!("  order: {:?}", order(&table));

    // A miss leaves the order alone
    let qty = table.lookup(&"elder").copied();
    println!("\nLooked up elder -> {:?}", qty);
    println!("  order: {:?}", order(&table));

    // peek reads without reordering
    let qty = table.peek(&"apple").copied();
    println!("\nPeeked apple -> {:?}", qty);
    println!("  order: {:?}", order(&table));

    // Duplicates are allowed; lookup returns the newest, remove takes all
    table.insert("cherry", 70)?;
    println!("\nInserted a second cherry");
    println!("  cherry matches: {}", table.count_matches(&"cherry"));
    println!("  lookup cherry -> {:?}", table.lookup(&"cherry").copied());
    println!("  removed {} cherry entries", table.remove(&"cherry"));
    println!("  order: {:?}", order(&table));

    println!("\n=== Owned Values ===\n");

    let released = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&released);
    let mut owned = MtfTable::builder(mtftable::OrdComparator)
        .capacity(4)
        .value_destructor(move |v: String| log.borrow_mut().push(v))
        .try_build()?;

    owned.insert(1u32, "one".to_string())?;
    owned.insert(2u32, "two".to_string())?;
    owned.insert(3u32, "three".to_string())?;
    println!("Inserted 1, 2, 3 with a value destructor");

    owned.remove(&2);
    println!("Removed key 2");
    println!("  released so far: {:?}", released.borrow());

    owned.destroy();
    println!("Destroyed the table");
    println!("  released: {:?}", released.borrow());

    Ok(())
}

// Expected output:
// === MTF Table Example ===
//
// Inserted apple, banana, cherry, damson
//   order: ["damson", "cherry", "banana", "apple"]
//
// Looked up banana -> Some(5)
//   order: ["banana", "damson", "cherry", "apple"]
//
// Looked up elder -> None
//   order: ["banana", "damson", "cherry", "apple"]
//
// Peeked apple -> Some(3)
//   order: ["banana", "damson", "cherry", "apple"]
//
// Inserted a second cherry
//   cherry matches: 2
//   lookup cherry -> Some(70)
//   removed 2 cherry entries
//   order: ["banana", "damson", "apple"]
//
// === Owned Values ===
//
// Inserted 1, 2, 3 with a value destructor
// Removed key 2
//   released so far: ["two"]
// Destroyed the table
//   released: ["two", "three", "one"]
