//! Apriori level-wise search for frequent itemsets.
//!
//! The search explores itemsets in increasing-size generations: all
//! candidates of size k are scored against the transaction store, the
//! survivors seed the size-(k+1) candidates, and the loop ends when a
//! generation comes up empty.
//!
//! # Example
//!
//! ```
//! use minar::prelude::*;
//!
//! // Market basket transactions (each transaction is a set of item IDs)
//! let transactions = vec![
//!     vec![1, 2, 3],
//!     vec![1, 2],
//!     vec![1, 3],
//!     vec![2, 3],
//! ];
//!
//! let store = TransactionSet::new(transactions).unwrap();
//! let mut miner = Apriori::new().with_min_support(0.5);
//! miner.fit(&store).unwrap();
//!
//! for record in miner.frequent_itemsets() {
//!     println!("{record}");
//! }
//! ```

use std::collections::BTreeSet;

use crate::error::{MinarError, Result};
use crate::itemset::{Item, Itemset};
use crate::record::SupportRecord;
use crate::traits::ItemsetMiner;
use crate::transaction::TransactionSet;

/// Apriori frequent-itemset miner.
///
/// Explores itemsets level-wise: every generation holds candidates of one
/// fixed size, only candidates meeting the minimum support threshold
/// survive, and the next generation is derived from the survivors alone.
/// The search stops when a generation produces zero candidates.
///
/// # Algorithm
///
/// 1. Seed generation 1 with a singleton candidate per distinct item
/// 2. Score every candidate against the transaction store
/// 3. Record candidates with support >= `min_support` in discovery order;
///    they become the generation's survivors
/// 4. Build size-(k+1) candidates from the survivors via
///    [`generate_candidates`]
/// 5. Repeat from step 2 until a generation is empty
///
/// Candidate generation recombines the flattened item universe of the
/// survivors, so a candidate can be emitted even when some of its subsets
/// never met the threshold. Every candidate is still scored against the
/// full store, so the final records are unaffected; the cost is extra
/// support computations per generation.
///
/// # Parameters
///
/// - `min_support`: minimum support threshold in [0, 1] (default 0.1),
///   validated when [`fit`](ItemsetMiner::fit) runs
///
/// # Examples
///
/// ```
/// use minar::prelude::*;
///
/// let transactions = vec![
///     vec![1, 2, 3],
///     vec![1, 2],
///     vec![1, 3],
///     vec![2, 3],
/// ];
/// let store = TransactionSet::new(transactions).unwrap();
///
/// let mut miner = Apriori::new().with_min_support(0.5);
/// miner.fit(&store).unwrap();
///
/// // Three frequent singletons and three frequent pairs.
/// assert_eq!(miner.frequent_itemsets().len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct Apriori<I: Item> {
    min_support: f64,
    frequent_itemsets: Vec<SupportRecord<I>>,
}

impl<I: Item> Apriori<I> {
    /// Creates a miner with the default minimum support of 0.1 (10%).
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_support: 0.1,
            frequent_itemsets: Vec::new(),
        }
    }

    /// Sets the minimum support threshold.
    ///
    /// The value must lie in [0, 1]; it is validated when
    /// [`fit`](ItemsetMiner::fit) runs, before any candidate is scored.
    #[must_use]
    pub fn with_min_support(mut self, min_support: f64) -> Self {
        self.min_support = min_support;
        self
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_support) {
            return Err(MinarError::InvalidHyperparameter {
                param: "min_support".to_string(),
                value: self.min_support.to_string(),
                constraint: "in [0, 1]".to_string(),
            });
        }
        Ok(())
    }
}

impl<I: Item> Default for Apriori<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Item> ItemsetMiner<I> for Apriori<I> {
    fn fit(&mut self, transactions: &TransactionSet<I>) -> Result<()> {
        self.validate()?;

        let mut accumulated = Vec::new();
        let mut candidates: Vec<Itemset<I>> = transactions
            .distinct_items()
            .into_iter()
            .map(Itemset::singleton)
            .collect();
        let mut k = 2;

        while !candidates.is_empty() {
            let mut survivors = Vec::new();
            for candidate in candidates {
                let support = transactions.calc_support(&candidate);
                if support >= self.min_support {
                    accumulated.push(SupportRecord::new(candidate.clone(), support));
                    survivors.push(candidate);
                }
            }
            candidates = generate_candidates(&survivors, k);
            k += 1;
        }

        self.frequent_itemsets = accumulated;
        Ok(())
    }

    fn frequent_itemsets(&self) -> &[SupportRecord<I>] {
        &self.frequent_itemsets
    }
}

/// Generates the next generation of candidate itemsets.
///
/// Flattens the items of every surviving itemset into one sorted,
/// deduplicated universe and returns every size-`k` combination of that
/// universe, in lexicographic order. The policy is permissive on purpose:
/// a returned candidate may contain (k-1)-subsets that never passed a
/// threshold, and the caller is expected to score every candidate anyway.
/// `k = 0` yields no candidates, since itemsets hold at least one item.
///
/// # Examples
///
/// ```
/// use minar::{generate_candidates, Itemset};
///
/// let survivors = vec![
///     Itemset::new(["a", "b"]),
///     Itemset::new(["b", "c"]),
/// ];
/// let next = generate_candidates(&survivors, 3);
/// assert_eq!(next, vec![Itemset::new(["a", "b", "c"])]);
/// ```
#[must_use]
pub fn generate_candidates<I: Item>(survivors: &[Itemset<I>], k: usize) -> Vec<Itemset<I>> {
    let universe: BTreeSet<I> = survivors
        .iter()
        .flat_map(|itemset| itemset.iter().cloned())
        .collect();
    let items: Vec<I> = universe.into_iter().collect();
    combinations(&items, k)
}

/// Every size-`k` combination of `items`, in lexicographic index order.
/// `items` must already be sorted and deduplicated.
fn combinations<I: Item>(items: &[I], k: usize) -> Vec<Itemset<I>> {
    let n = items.len();
    if k == 0 || k > n {
        return Vec::new();
    }

    let mut combos = Vec::new();
    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        combos.push(indices.iter().map(|&i| items[i].clone()).collect());

        // Rightmost index that can still advance, or done.
        let pos = match (0..k).rev().find(|&i| indices[i] != i + n - k) {
            Some(pos) => pos,
            None => return combos,
        };
        indices[pos] += 1;
        for i in pos + 1..k {
            indices[i] = indices[i - 1] + 1;
        }
    }
}


#[cfg(test)]
#[path = "tests_apriori_contract.rs"]
mod tests_apriori_contract;
