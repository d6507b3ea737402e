//! Plain-text rendering of mined itemsets

use itertools::Itertools;

use std::io::Write;

use crate::error::Result;
use crate::types::{FrequentItemsets, NamedItemset};

/// Write one `{a, b} : support` line per itemset, shortest itemsets first.
pub fn write_report<W: Write>(mut writer: W, frequent_itemsets: &FrequentItemsets) -> Result<()> {
    for (itemset, support) in frequent_itemsets
        .iter()
        .sorted_by(|(a, _), (b, _)| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
    {
        writeln!(writer, "{} : {}", format_itemset(itemset), support)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn format_itemset(itemset: &NamedItemset) -> String {
    format!("{{{}}}", itemset.iter().join(", "))
}
