use rayon::prelude::*;

use std::collections::{HashMap, HashSet};

use crate::types::{
    Inventory, ItemId, Itemset, ItemsetCounts, RawTransaction, ReverseLookup, Transaction,
};

const APPROX_NUM_UNIQUE_ITEMS: usize = 1024; // arbitrary

/// Count of an itemset, zero when it was never seen.
pub fn get_or_zero(counts: &ItemsetCounts, itemset: &[ItemId]) -> u32 {
    counts.get(itemset).copied().unwrap_or(0)
}

/// 1-itemset
///
/// Interns every item, turns each transaction into its sorted, deduplicated
/// item ids and counts the distinct items of each transaction.
pub fn count_1_itemsets<'items>(
    raw_transactions: &'items [RawTransaction],
) -> (ItemsetCounts, Inventory<'items>, Vec<Transaction>) {
    let mut reverse_lookup: ReverseLookup = HashMap::with_capacity(APPROX_NUM_UNIQUE_ITEMS);
    let mut inventory: Inventory = Vec::with_capacity(APPROX_NUM_UNIQUE_ITEMS);
    let mut item_counts: ItemsetCounts = HashMap::with_capacity(APPROX_NUM_UNIQUE_ITEMS);

    let transactions: Vec<Transaction> = raw_transactions
        .iter()
        .map(|raw_transaction| {
            let mut items: Transaction = raw_transaction
                .iter()
                .map(|item| {
                    *reverse_lookup.entry(item).or_insert_with(|| {
                        inventory.push(item);
                        inventory.len() - 1
                    })
                })
                .collect();
            items.sort_unstable();
            // dedup before counting so a repeated item is counted once
            items.dedup();

            for &id in &items {
                *item_counts.entry(vec![id]).or_insert(0) += 1;
            }
            items
        })
        .collect();

    (item_counts, inventory, transactions)
}

/// k-itemset, k >= 2
///
/// Every transaction is checked against every candidate. Candidates that
/// occur nowhere are absent from the result.
pub fn count_candidates(
    candidates: &HashSet<Itemset>,
    transactions: &[Transaction],
    parallel: bool,
) -> ItemsetCounts {
    let size = match candidates.iter().next() {
        Some(candidate) => candidate.len(),
        None => return HashMap::new(),
    };

    if parallel {
        transactions
            .par_iter()
            .filter(|transaction| transaction.len() >= size)
            .fold(HashMap::new, |mut counts, transaction| {
                count_transaction(&mut counts, candidates, transaction);
                counts
            })
            .reduce(HashMap::new, merge_counts)
    } else {
        let mut counts = HashMap::with_capacity(candidates.len());
        transactions
            .iter()
            .filter(|transaction| transaction.len() >= size)
            .for_each(|transaction| count_transaction(&mut counts, candidates, transaction));
        counts
    }
}

fn count_transaction(
    counts: &mut ItemsetCounts,
    candidates: &HashSet<Itemset>,
    transaction: &Transaction,
) {
    for candidate in candidates {
        if candidate
            .iter()
            .all(|item| transaction.binary_search(item).is_ok())
        {
            *counts.entry(candidate.to_owned()).or_insert(0) += 1;
        }
    }
}

fn merge_counts(mut left: ItemsetCounts, right: ItemsetCounts) -> ItemsetCounts {
    for (itemset, count) in right {
        *left.entry(itemset).or_insert(0) += count;
    }
    left
}
