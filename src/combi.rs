use itertools::Itertools;

use std::collections::HashSet;

use crate::types::{Itemset, ItemsetLength};

/// Self-join of one level: the union of every pair of `itemsets` that has
/// exactly `size` items.
///
/// All pairs are tried, there is no prefix grouping and no check that every
/// subset of a candidate is frequent. Input itemsets must be sorted.
pub fn join_step<'a, I>(itemsets: I, size: ItemsetLength) -> HashSet<Itemset>
where
    I: IntoIterator<Item = &'a Itemset>,
{
    let itemsets: Vec<&Itemset> = itemsets.into_iter().collect();

    itemsets
        .iter()
        .tuple_combinations::<(_, _)>()
        .filter_map(|(a, b)| {
            let union: Itemset = a.iter().merge(b.iter()).dedup().copied().collect();
            if union.len() == size {
                Some(union)
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use maplit::hashset;

    #[test]
    fn test_join_step() {
        let itemsets: Vec<Itemset> = vec![
            vec![1, 2, 3],
            vec![1, 2, 4],
            vec![1, 3, 4],
            vec![1, 3, 5],
            vec![2, 3, 4],
        ];
        let y = join_step(&itemsets, 4);
        assert!(y.contains(&vec![1, 2, 3, 4]));
        assert!(y.contains(&vec![1, 3, 4, 5]));
        assert!(y.iter().all(|candidate| candidate.len() == 4));
    }

    #[test]
    fn test_join_step_keeps_unpruned_candidates() {
        // {1, 2, 3, 5} has the infrequent subset {2, 3, 5}, it is still a candidate
        let itemsets: Vec<Itemset> = vec![vec![1, 2, 3], vec![1, 3, 5]];
        let y = join_step(&itemsets, 4);
        assert_eq!(y, hashset! { vec![1, 2, 3, 5] });
    }

    #[test]
    fn test_join_step_singletons() {
        let itemsets: Vec<Itemset> = vec![vec![10], vec![13], vec![14]];
        let y = join_step(&itemsets, 2);
        assert_eq!(y, hashset! { vec![10, 13], vec![10, 14], vec![13, 14] });
    }

    #[test]
    fn test_join_step_disjoint_pairs() {
        let itemsets: Vec<Itemset> = vec![vec![10, 11], vec![13, 14]];
        assert!(join_step(&itemsets, 3).is_empty());
    }

    #[test]
    fn test_join_step_dedups() {
        let itemsets: Vec<Itemset> = vec![vec![1, 2], vec![2, 3], vec![1, 3]];
        let y = join_step(&itemsets, 3);
        assert_eq!(y, hashset! { vec![1, 2, 3] });
    }

    #[test]
    fn test_join_step_empty_and_single() {
        let empty: Vec<Itemset> = vec![];
        assert!(join_step(&empty, 2).is_empty());
        assert!(join_step(&vec![vec![1]], 2).is_empty());
    }
}
