//! Itemset value type and the item identifier contract.
//!
//! An [`Itemset`] is an immutable set of unique item identifiers. Equality
//! and hashing are order-independent, and iteration always yields members
//! in ascending order, which is what makes candidate generation
//! reproducible across runs.

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker trait for item identifiers.
///
/// Items are deduplicated and sorted throughout the search, so the only
/// requirement is a total order plus cheap duplication. Blanket-implemented
/// for every `Clone + Ord` type: integers, `char`, `&str`, and `String`
/// all qualify out of the box.
pub trait Item: Clone + Ord {}

impl<T: Clone + Ord> Item for T {}

/// An immutable set of unique item identifiers.
///
/// Two itemsets with the same members are equal regardless of the order
/// the members were supplied in; duplicates collapse at construction.
/// There are no mutating methods — once built, an itemset never changes.
///
/// # Examples
///
/// ```
/// use minar::Itemset;
///
/// let a: Itemset<&str> = ["beer", "chips"].into_iter().collect();
/// let b: Itemset<&str> = ["chips", "beer", "chips"].into_iter().collect();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Itemset<I: Item> {
    items: BTreeSet<I>,
}

impl<I: Item> Itemset<I> {
    /// Builds an itemset from any iterable of items; duplicates collapse.
    pub fn new(items: impl IntoIterator<Item = I>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Builds a one-item itemset.
    #[must_use]
    pub fn singleton(item: I) -> Self {
        Self {
            items: BTreeSet::from([item]),
        }
    }

    /// Number of distinct items in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the set holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` when `item` is a member.
    #[must_use]
    pub fn contains(&self, item: &I) -> bool {
        self.items.contains(item)
    }

    /// Returns `true` when every member of `self` is also in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Itemset<I>) -> bool {
        self.items.is_subset(&other.items)
    }

    /// Iterates the members in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, I> {
        self.items.iter()
    }
}

impl<I: Item> FromIterator<I> for Itemset<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a, I: Item> IntoIterator for &'a Itemset<I> {
    type Item = &'a I;
    type IntoIter = btree_set::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<I: Item + fmt::Display> fmt::Display for Itemset<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}
