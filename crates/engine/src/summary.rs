//! Category-grouped spend aggregation.

use std::collections::HashMap;

use crate::Expense;

/// Total spend plus per-category subtotals.
///
/// Categories with no records are absent from the map rather than present
/// with a zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    pub total: f64,
    pub by_category: HashMap<String, f64>,
}

/// Sums amounts over an arbitrary record set.
///
/// Takes any slice so it composes with the filter engine, even though the
/// server currently feeds it the full store.
pub fn summarize(records: &[Expense]) -> Summary {
    let mut summary = Summary::default();
    for expense in records {
        summary.total += expense.amount;
        *summary
            .by_category
            .entry(expense.category.clone())
            .or_insert(0.0) += expense.amount;
    }
    summary
}
