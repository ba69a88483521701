//! Minar: Frequent itemset mining in pure Rust.
//!
//! Minar finds the itemsets that recur across a collection of
//! transactions: feed it baskets of items, pick a minimum support
//! threshold, and it returns every itemset meeting that threshold. The
//! search is Apriori-style, growing itemsets one generation at a time
//! from the survivors of the previous one.
//!
//! # Quick Start
//!
//! ```
//! use minar::prelude::*;
//!
//! // One transaction per basket
//! let store = TransactionSet::new(vec![
//!     vec!["bread", "milk"],
//!     vec!["milk", "eggs"],
//!     vec!["bread", "milk", "eggs"],
//!     vec!["eggs", "jam"],
//! ]).unwrap();
//!
//! // Keep itemsets present in at least half the baskets
//! let mut miner = Apriori::new().with_min_support(0.5);
//! miner.fit(&store).unwrap();
//!
//! for record in miner.frequent_itemsets() {
//!     println!("{record}");
//! }
//! assert_eq!(miner.frequent_itemsets().len(), 5);
//! ```
//!
//! # Modules
//!
//! - [`apriori`]: Level-wise frequent-itemset search
//! - [`error`]: Error and result types
//! - [`itemset`]: Ordered, duplicate-free item collections
//! - [`record`]: Mining output records (support, association statistics)
//! - [`traits`]: Core miner abstractions
//! - [`transaction`]: Transaction storage and support queries

pub mod apriori;
pub mod error;
pub mod itemset;
pub mod prelude;
pub mod record;
pub mod traits;
pub mod transaction;

pub use apriori::{generate_candidates, Apriori};
pub use error::{MinarError, Result};
pub use itemset::{Item, Itemset};
pub use record::{OrderedStatistic, RelationRecord, SupportRecord};
pub use traits::ItemsetMiner;
pub use transaction::TransactionSet;
