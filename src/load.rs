//! Reading transactions from text, one transaction per line

use lazy_static::lazy_static;
use regex::Regex;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{AprioriError, Result};
use crate::item::Item;
use crate::types::RawTransaction;

lazy_static! {
    static ref TOKEN: Regex = Regex::new(r"[\w'&]+").expect("token pattern is valid");
}

/// Split every line into items.
///
/// Tokens are runs of word characters, `'` and `&`; anything else separates
/// them. A token repeated on a line is kept once. Blank lines give empty
/// transactions.
///
/// # Errors
///
/// `Parse` when `numeric` is set and a token is not an integer, `Io` when
/// reading fails.
pub fn parse_transactions<R: BufRead>(reader: R, numeric: bool) -> Result<Vec<RawTransaction>> {
    reader
        .lines()
        .enumerate()
        .map(|(index, line)| parse_line(&line?, index + 1, numeric))
        .collect()
}

/// [`parse_transactions`] over the file at `path`.
pub fn read_transactions<P: AsRef<Path>>(path: P, numeric: bool) -> Result<Vec<RawTransaction>> {
    let file = File::open(path)?;
    parse_transactions(BufReader::new(file), numeric)
}

fn parse_line(line: &str, line_number: usize, numeric: bool) -> Result<RawTransaction> {
    let mut transaction: RawTransaction = Vec::new();

    for token in TOKEN.find_iter(line).map(|m| m.as_str()) {
        let item = if numeric {
            token
                .parse::<i64>()
                .map(Item::Number)
                .map_err(|_| AprioriError::Parse {
                    line: line_number,
                    token: token.to_owned(),
                })?
        } else {
            Item::from(token)
        };
        if !transaction.contains(&item) {
            transaction.push(item);
        }
    }

    Ok(transaction)
}
