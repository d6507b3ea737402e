//! Mining parameters and their defaults

use crate::error::{AprioriError, Result};
use crate::types::ItemsetLength;

/// Minimum support used when none is given
pub const DEFAULT_MIN_SUPPORT: f64 = 1.0;

/// Upper bound of a support given as a fraction of transactions
pub const MAX_FRACTIONAL_SUPPORT: f64 = 1.0;

/// Parameters of one mining run.
#[derive(Debug, Clone, PartialEq)]
pub struct MiningConfig {
    /// Itemsets with a support below this value are discarded
    pub min_support: f64,
    /// Interpret `min_support` as a fraction of transactions instead of a count
    pub percentage: bool,
    /// Stop after itemsets of this length, `None` runs until a level is empty
    pub max_len: Option<ItemsetLength>,
    /// Count candidates on the rayon thread pool
    pub parallel: bool,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            percentage: false,
            max_len: None,
            parallel: false,
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: f64, percentage: bool) -> Self {
        Self {
            min_support,
            percentage,
            ..Default::default()
        }
    }

    pub fn max_len(mut self, max_len: ItemsetLength) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Reject supports that cannot select anything meaningful.
    ///
    /// # Errors
    ///
    /// `InvalidSupport` when the support is not a positive finite number or
    /// exceeds 1.0 in percentage mode, `InvalidMaxLen` when `max_len` is zero.
    pub fn validate(&self) -> Result<()> {
        let value = self.min_support;
        if !value.is_finite() {
            return Err(AprioriError::InvalidSupport {
                value,
                reason: "must be a finite number",
            });
        }
        if value <= 0.0 {
            return Err(AprioriError::InvalidSupport {
                value,
                reason: "must be positive",
            });
        }
        if self.percentage && value > MAX_FRACTIONAL_SUPPORT {
            return Err(AprioriError::InvalidSupport {
                value,
                reason: "a percentage support cannot exceed 1.0",
            });
        }
        if self.max_len == Some(0) {
            return Err(AprioriError::InvalidMaxLen);
        }
        Ok(())
    }
}
