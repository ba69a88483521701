//! Transaction snapshot and support queries.
//!
//! A [`TransactionSet`] owns an immutable copy of the transaction data and
//! answers support queries for arbitrary itemsets. It is the only component
//! that ever touches the raw transactions; the search driver sees nothing
//! but support values.

use std::collections::BTreeSet;

use crate::error::{MinarError, Result};
use crate::itemset::{Item, Itemset};

/// An immutable collection of transactions that answers support queries.
///
/// Each transaction is stored as a set, so duplicate items inside one
/// transaction collapse at ingestion. The snapshot is fixed for the
/// lifetime of the store: every query is read-only and the store can be
/// shared freely across threads.
///
/// Support is recomputed from the full snapshot on every call — there is
/// no per-item index. That scan is O(transactions × itemset size) and is
/// the dominant cost of a mining run.
///
/// # Examples
///
/// ```
/// use minar::prelude::*;
///
/// let store = TransactionSet::new(vec![
///     vec!["milk", "bread"],
///     vec!["bread"],
/// ]).unwrap();
///
/// assert_eq!(store.num_transactions(), 2);
/// let bread = Itemset::singleton("bread");
/// assert!((store.calc_support(&bread) - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct TransactionSet<I: Item> {
    transactions: Vec<BTreeSet<I>>,
}

impl<I: Item> TransactionSet<I> {
    /// Ingests a finite sequence of transactions.
    ///
    /// # Errors
    ///
    /// Returns [`MinarError::EmptyTransactionSet`] when the sequence holds
    /// zero transactions, since support would be undefined:
    ///
    /// ```
    /// use minar::TransactionSet;
    ///
    /// let empty: Vec<Vec<u32>> = Vec::new();
    /// assert!(TransactionSet::new(empty).is_err());
    /// ```
    pub fn new<T, U>(transactions: T) -> Result<Self>
    where
        T: IntoIterator<Item = U>,
        U: IntoIterator<Item = I>,
    {
        let transactions: Vec<BTreeSet<I>> = transactions
            .into_iter()
            .map(|transaction| transaction.into_iter().collect())
            .collect();
        if transactions.is_empty() {
            return Err(MinarError::EmptyTransactionSet);
        }
        Ok(Self { transactions })
    }

    /// Total number of transactions in the snapshot (always > 0).
    #[must_use]
    pub fn num_transactions(&self) -> usize {
        self.transactions.len()
    }

    /// Fraction of transactions that contain every item of `itemset`.
    ///
    /// Always in [0, 1]. The empty itemset is vacuously contained in every
    /// transaction and reports a support of 1.0; the miner itself only ever
    /// queries itemsets of size ≥ 1.
    #[must_use]
    pub fn calc_support(&self, itemset: &Itemset<I>) -> f64 {
        let count = self
            .transactions
            .iter()
            .filter(|transaction| itemset.iter().all(|item| transaction.contains(item)))
            .count();
        count as f64 / self.transactions.len() as f64
    }

    /// The sorted, deduplicated universe of items observed across all
    /// transactions. Seeds the first generation of singleton candidates.
    #[must_use]
    pub fn distinct_items(&self) -> Vec<I> {
        let universe: BTreeSet<I> = self
            .transactions
            .iter()
            .flat_map(|transaction| transaction.iter().cloned())
            .collect();
        universe.into_iter().collect()
    }
}
