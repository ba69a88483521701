//! Market Basket Analysis example - Apriori
//!
//! Demonstrates frequent itemset mining over a small set of baskets.

use minar::prelude::*;

fn main() {
    println!("Market Basket Analysis - Apriori Example");
    println!("========================================\n");

    // Four baskets over four products
    let baskets = vec![
        vec!["A", "B"],
        vec!["B", "C"],
        vec!["A", "B", "C"],
        vec!["C", "D"],
    ];

    println!("Transactions:");
    for (i, basket) in baskets.iter().enumerate() {
        println!("  {} {:?}", i + 1, basket);
    }

    let store = TransactionSet::new(baskets).expect("Example data should be valid");

    // Keep itemsets present in at least half the baskets
    let min_support = 0.5;
    println!("\nMining with min_support = {min_support}...");

    let mut miner = Apriori::new().with_min_support(min_support);
    miner.fit(&store).expect("Failed to fit Apriori");

    println!("\nFrequent itemsets (discovery order):");
    println!("{}", "-".repeat(40));
    for record in miner.frequent_itemsets() {
        println!("  {record}");
    }

    println!("{}", "-".repeat(40));
    println!(
        "{} itemsets across {} transactions",
        miner.frequent_itemsets().len(),
        store.num_transactions()
    );
}
