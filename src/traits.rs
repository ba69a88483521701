//! Core trait for itemset mining algorithms.
//!
//! The trait defines the API contract every level-wise miner exposes.

use crate::error::Result;
use crate::itemset::Item;
use crate::record::SupportRecord;
use crate::transaction::TransactionSet;

/// Contract for frequent-itemset miners.
///
/// A miner is configured up front, runs one complete pass over a
/// [`TransactionSet`] when fitted, and afterwards exposes every frequent
/// itemset it found, in discovery order.
///
/// # Examples
///
/// ```
/// use minar::prelude::*;
///
/// fn count_frequent<M: ItemsetMiner<&'static str>>(
///     miner: &mut M,
///     store: &TransactionSet<&'static str>,
/// ) -> usize {
///     miner.fit(store).expect("valid configuration");
///     miner.frequent_itemsets().len()
/// }
///
/// let store = TransactionSet::new(vec![vec!["a", "b"], vec!["a"]]).unwrap();
/// let mut miner = Apriori::new().with_min_support(0.5);
/// assert_eq!(count_frequent(&mut miner, &store), 3);
/// ```
pub trait ItemsetMiner<I: Item> {
    /// Runs the mining pass against `transactions`.
    ///
    /// Refitting replaces the results of any previous pass.
    ///
    /// # Errors
    ///
    /// Returns an error when the miner's configuration is invalid; nothing
    /// is computed in that case.
    fn fit(&mut self, transactions: &TransactionSet<I>) -> Result<()>;

    /// Frequent itemsets discovered by the most recent [`fit`](Self::fit),
    /// in discovery order. Empty before the first fit.
    fn frequent_itemsets(&self) -> &[SupportRecord<I>];
}
