//! Result record shapes produced by mining passes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::itemset::{Item, Itemset};

/// A frequent itemset together with its support.
///
/// One record is emitted per itemset that meets the minimum support
/// threshold, in the order the search discovered it.
///
/// # Examples
///
/// ```
/// use minar::{Itemset, SupportRecord};
///
/// let record = SupportRecord::new(Itemset::new(["beer", "chips"]), 0.4);
/// assert_eq!(record.to_string(), "{beer, chips}: 0.40");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportRecord<I: Item> {
    /// The itemset found frequent.
    pub items: Itemset<I>,
    /// Fraction of transactions containing every member, in [0, 1].
    pub support: f64,
}

impl<I: Item> SupportRecord<I> {
    /// Pairs an itemset with its computed support.
    #[must_use]
    pub fn new(items: Itemset<I>, support: f64) -> Self {
        Self { items, support }
    }
}

impl<I: Item + fmt::Display> fmt::Display for SupportRecord<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}", self.items, self.support)
    }
}

/// One direction of an association rule drawn from a frequent itemset:
/// `items_base => items_add` with its confidence and lift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedStatistic<I: Item> {
    /// Antecedent items (left side of the rule).
    pub items_base: Itemset<I>,
    /// Consequent items (right side of the rule).
    pub items_add: Itemset<I>,
    /// P(items_add | items_base).
    pub confidence: f64,
    /// Confidence normalized by the consequent's support.
    pub lift: f64,
}

/// A frequent itemset with the ordered statistics a rule layer attaches.
///
/// No algorithm in this crate populates `ordered_statistics`; the shape is
/// the output contract for association-rule derivation built on top of the
/// miner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationRecord<I: Item> {
    /// The itemset found frequent.
    pub items: Itemset<I>,
    /// Fraction of transactions containing every member, in [0, 1].
    pub support: f64,
    /// Rule statistics derived from this itemset, if any layer computed them.
    pub ordered_statistics: Vec<OrderedStatistic<I>>,
}

impl<I: Item> From<SupportRecord<I>> for RelationRecord<I> {
    /// Lifts a support record into the relation shape with no statistics
    /// attached yet.
    fn from(record: SupportRecord<I>) -> Self {
        Self {
            items: record.items,
            support: record.support,
            ordered_statistics: Vec::new(),
        }
    }
}
