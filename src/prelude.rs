//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use minar::prelude::*;
//! ```

pub use crate::apriori::Apriori;
pub use crate::error::{MinarError, Result};
pub use crate::itemset::{Item, Itemset};
pub use crate::record::{OrderedStatistic, RelationRecord, SupportRecord};
pub use crate::traits::ItemsetMiner;
pub use crate::transaction::TransactionSet;
