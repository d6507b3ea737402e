use std::fmt::{Display, Formatter, Result};

/// A single item of a transaction.
///
/// The miner only relies on equality, ordering and hashing. All items of one
/// run must be of the same kind, see [`Item::kind`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Item {
    Number(i64),
    Token(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Number,
    Token,
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Number(_) => ItemKind::Number,
            Item::Token(_) => ItemKind::Token,
        }
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Item::Number(n) => write!(f, "{}", n),
            Item::Token(s) => write!(f, "{}", s),
        }
    }
}

impl Display for ItemKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ItemKind::Number => write!(f, "number"),
            ItemKind::Token => write!(f, "token"),
        }
    }
}

impl From<i64> for Item {
    fn from(n: i64) -> Self {
        Item::Number(n)
    }
}

impl From<&str> for Item {
    fn from(s: &str) -> Self {
        Item::Token(s.to_owned())
    }
}

impl From<String> for Item {
    fn from(s: String) -> Self {
        Item::Token(s)
    }
}
