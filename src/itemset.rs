use tracing::{debug, info};

use std::collections::BTreeSet;

use crate::{
    combi::join_step,
    config::MiningConfig,
    error::{AprioriError, Result},
    item::ItemKind,
    itemsets::{
        count::{count_1_itemsets, count_candidates},
        filter::Threshold,
    },
    types::{FrequentItemsets, Inventory, ItemsetLength, ItemsetSupports, RawTransaction},
};

/// Generate frequent itemsets of every length from a list of transactions.
///
/// Level 1 is counted straight from the transactions. Each further level
/// joins the previous one with itself, counts the candidates and keeps the
/// ones meeting the minimum support. The first empty level ends the search.
///
/// # Errors
///
/// `InvalidSupport` for an unusable config, `TypeMismatch` when numeric and
/// string items are mixed, `EmptyInput` for percentages over no transactions.
pub fn generate_frequent_itemsets(
    raw_transactions: &[RawTransaction],
    config: &MiningConfig,
) -> Result<FrequentItemsets> {
    config.validate()?;
    check_item_kinds(raw_transactions)?;
    let threshold = Threshold::new(config, raw_transactions.len())?;

    debug!("Counting itemsets of length 1.");
    let (item_counts, inventory, transactions) = count_1_itemsets(raw_transactions);
    let mut frequent: ItemsetSupports = threshold.apply(item_counts);
    debug!(size = 1, frequent = frequent.len(), "level done");

    let mut all_frequent_itemsets = FrequentItemsets::new();
    let mut size: ItemsetLength = 1;

    while !frequent.is_empty() {
        merge_level(&mut all_frequent_itemsets, &frequent, &inventory);

        if config.max_len.map_or(false, |max_len| size >= max_len) {
            debug!(size, "reached maximum itemset length");
            break;
        }

        size += 1;
        debug!("Counting itemsets of length {}.", size);
        let candidates = join_step(frequent.keys(), size);
        let counts = count_candidates(&candidates, &transactions, config.parallel);
        frequent = threshold.apply(counts);
        debug!(
            size,
            candidates = candidates.len(),
            frequent = frequent.len(),
            "level done"
        );
    }

    info!(
        transactions = raw_transactions.len(),
        items = inventory.len(),
        frequent = all_frequent_itemsets.len(),
        "mining finished"
    );

    Ok(all_frequent_itemsets)
}

fn merge_level(
    all_frequent_itemsets: &mut FrequentItemsets,
    frequent: &ItemsetSupports,
    inventory: &Inventory<'_>,
) {
    all_frequent_itemsets.extend(frequent.iter().map(|(itemset, &support)| {
        let named: BTreeSet<_> = itemset.iter().map(|&id| inventory[id].clone()).collect();
        (named, support)
    }));
}

/// All items of a run must be of the kind of the first item seen.
fn check_item_kinds(raw_transactions: &[RawTransaction]) -> Result<()> {
    let mut expected: Option<ItemKind> = None;

    for (transaction, raw_transaction) in raw_transactions.iter().enumerate() {
        for item in raw_transaction {
            let found = item.kind();
            match expected {
                None => expected = Some(found),
                Some(kind) if kind != found => {
                    return Err(AprioriError::TypeMismatch {
                        transaction,
                        item: item.to_string(),
                        expected: kind,
                        found,
                    })
                }
                Some(_) => {}
            }
        }
    }

    Ok(())
}
