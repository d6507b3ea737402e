use thiserror::Error;

use crate::item::ItemKind;

#[derive(Error, Debug)]
pub enum AprioriError {
    #[error("invalid minimum support {value}: {reason}")]
    InvalidSupport { value: f64, reason: &'static str },
    #[error("maximum itemset length must be at least 1")]
    InvalidMaxLen,
    #[error("no transactions to compute percentage support over")]
    EmptyInput,
    #[error("item '{item}' in transaction {transaction} is a {found}, expected a {expected}")]
    TypeMismatch {
        transaction: usize,
        item: String,
        expected: ItemKind,
        found: ItemKind,
    },
    #[error("line {line}: '{token}' is not an integer")]
    Parse { line: usize, token: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AprioriError>;
