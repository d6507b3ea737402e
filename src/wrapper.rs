use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyFrozenSet};

use crate::item::Item;
use crate::itemsets::filter::Support;
use crate::types::{FrequentItemsets, RawTransaction};

impl ToPyObject for Item {
    fn to_object(&self, py: Python) -> PyObject {
        match self {
            Item::Number(n) => n.to_object(py),
            Item::Token(s) => s.to_object(py),
        }
    }
}

impl ToPyObject for Support {
    fn to_object(&self, py: Python) -> PyObject {
        match *self {
            Support::Count(count) => count.to_object(py),
            Support::Fraction(fraction) => fraction.to_object(py),
        }
    }
}

fn convert_frequent_itemsets(
    py: Python,
    frequent_itemsets: FrequentItemsets,
) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);
    for (itemset, support) in frequent_itemsets {
        let items: Vec<Item> = itemset.into_iter().collect();
        dict.set_item(PyFrozenSet::new(py, &items)?, support)?;
    }
    Ok(dict.into())
}

fn mine_py(
    py: Python,
    transactions: Vec<RawTransaction>,
    min_support: f64,
    percentage: bool,
) -> PyResult<Py<PyDict>> {
    let frequent_itemsets = crate::mine(&transactions, min_support, percentage)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    convert_frequent_itemsets(py, frequent_itemsets)
}

/// Apriori frequent itemsets over string items.
#[pyfunction]
#[pyo3(text_signature = "(transactions, min_support, percentage)")]
fn frequent_itemsets(
    py: Python,
    transactions: Vec<Vec<String>>,
    min_support: f64,
    percentage: bool,
) -> PyResult<Py<PyDict>> {
    let transactions = transactions
        .into_iter()
        .map(|transaction| transaction.into_iter().map(Item::Token).collect())
        .collect();
    mine_py(py, transactions, min_support, percentage)
}

/// Apriori frequent itemsets over integer items.
#[pyfunction]
#[pyo3(text_signature = "(transactions, min_support, percentage)")]
fn frequent_itemsets_id(
    py: Python,
    transactions: Vec<Vec<i64>>,
    min_support: f64,
    percentage: bool,
) -> PyResult<Py<PyDict>> {
    let transactions = transactions
        .into_iter()
        .map(|transaction| transaction.into_iter().map(Item::Number).collect())
        .collect();
    mine_py(py, transactions, min_support, percentage)
}

#[pymodule]
fn apriori(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(frequent_itemsets, m)?)?;
    m.add_function(wrap_pyfunction!(frequent_itemsets_id, m)?)?;
    Ok(())
}
