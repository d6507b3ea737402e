//! Level-wise Apriori search for frequent itemsets.
//!
//! ```
//! use apriori::{mine, Item, Support};
//!
//! let transactions = vec![
//!     vec![Item::from("bread"), Item::from("milk")],
//!     vec![Item::from("bread"), Item::from("eggs")],
//! ];
//! let frequent = mine(&transactions, 2.0, false).unwrap();
//! assert_eq!(frequent.len(), 1);
//! assert!(frequent.values().all(|support| *support == Support::Count(2)));
//! ```

pub mod combi;
pub mod config;
pub mod error;
pub mod item;
pub mod itemset;
pub mod itemsets;
pub mod load;
pub mod report;
pub mod types;
#[cfg(feature = "python")]
mod wrapper;

pub use config::MiningConfig;
pub use error::{AprioriError, Result};
pub use item::{Item, ItemKind};
pub use itemsets::filter::Support;
pub use types::{FrequentItemsets, NamedItemset, RawTransaction};

/// Mine every frequent itemset of `transactions`.
///
/// `min_support` is a transaction count, or a fraction of all transactions
/// when `percentage` is set.
///
/// # Errors
///
/// See [`AprioriError`]; no partial result is returned.
pub fn mine(
    transactions: &[RawTransaction],
    min_support: f64,
    percentage: bool,
) -> Result<FrequentItemsets> {
    mine_with(transactions, &MiningConfig::new(min_support, percentage))
}

/// Same as [`mine`] with the full set of parameters.
pub fn mine_with(
    transactions: &[RawTransaction],
    config: &MiningConfig,
) -> Result<FrequentItemsets> {
    itemset::generate_frequent_itemsets(transactions, config)
}
