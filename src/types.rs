use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::item::Item;
use crate::itemsets::filter::Support;

pub type ItemId = usize;
pub type Itemset = Vec<ItemId>;
pub type NamedItemset = BTreeSet<Item>;

pub type ReverseLookup<'l> = HashMap<&'l Item, ItemId>;
pub type Inventory<'l> = Vec<&'l Item>;

pub type RawTransaction = Vec<Item>;
pub type Transaction = Vec<ItemId>;

pub type ItemsetCounts = HashMap<Itemset, u32>;
pub type ItemsetSupports = HashMap<Itemset, Support>;

pub type ItemsetLength = usize;
pub type FrequentItemsets = BTreeMap<NamedItemset, Support>;
