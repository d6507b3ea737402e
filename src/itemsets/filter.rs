use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::config::MiningConfig;
use crate::error::{AprioriError, Result};
use crate::types::{ItemsetCounts, ItemsetSupports};

/// Support of an itemset, as a raw count or as a share of all transactions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Support {
    Count(u32),
    Fraction(f64),
}

impl Support {
    pub fn value(&self) -> f64 {
        match *self {
            Support::Count(count) => f64::from(count),
            Support::Fraction(fraction) => fraction,
        }
    }
}

impl Display for Support {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Support::Count(count) => write!(f, "{}", count),
            Support::Fraction(fraction) => write!(f, "{}", fraction),
        }
    }
}

/// Turns raw counts into supports and drops the ones below the minimum.
#[derive(Debug, Clone, Copy)]
pub struct Threshold {
    min_support: f64,
    percentage: bool,
    num_transactions: usize,
}

impl Threshold {
    /// # Errors
    ///
    /// `EmptyInput` when percentages are requested over zero transactions.
    pub fn new(config: &MiningConfig, num_transactions: usize) -> Result<Self> {
        if config.percentage && num_transactions == 0 {
            return Err(AprioriError::EmptyInput);
        }
        Ok(Self {
            min_support: config.min_support,
            percentage: config.percentage,
            num_transactions,
        })
    }

    pub fn support(&self, count: u32) -> Support {
        if self.percentage {
            Support::Fraction(f64::from(count) / self.num_transactions as f64)
        } else {
            Support::Count(count)
        }
    }

    /// Inclusive: a support equal to the minimum is kept.
    pub fn admits(&self, support: Support) -> bool {
        support.value() >= self.min_support
    }

    pub fn apply(&self, counts: ItemsetCounts) -> ItemsetSupports {
        counts
            .into_iter()
            .filter_map(|(itemset, count)| {
                let support = self.support(count);
                if self.admits(support) {
                    Some((itemset, support))
                } else {
                    None
                }
            })
            .collect()
    }
}
