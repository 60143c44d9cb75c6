//! Filtered listing over a snapshot of expense records.
//!
//! All predicates are optional and combine with AND. The free-text `query`
//! predicate is itself an OR across `category` and `note`. The result is
//! always ordered by `(date DESC, id DESC)`, a strict total order since ids
//! are unique.

use chrono::NaiveDate;

use crate::{DATE_FORMAT, Expense};

/// Typed filter criteria for listing expenses.
///
/// Each field is independently optional; `None` means "no constraint from
/// that predicate".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseFilter {
    /// Exact, case-sensitive category match.
    pub category: Option<String>,
    /// Case-insensitive substring match against category OR note.
    pub query: Option<String>,
    /// Inclusive lower date bound.
    pub from: Option<NaiveDate>,
    /// Inclusive upper date bound.
    pub to: Option<NaiveDate>,
}

impl ExpenseFilter {
    /// Builds a filter from raw query-string values.
    ///
    /// Empty strings count as absent. A date bound that fails to parse is
    /// dropped instead of failing the whole request, so callers get a result
    /// unfiltered on that axis.
    pub fn from_params(
        category: Option<&str>,
        query: Option<&str>,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Self {
        Self {
            category: non_empty(category),
            query: non_empty(query),
            from: parse_bound(from),
            to: parse_bound(to),
        }
    }

    /// Returns true when the record satisfies every supplied predicate.
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(category) = &self.category
            && expense.category != *category
        {
            return false;
        }
        if let Some(query) = &self.query {
            let needle = query.to_lowercase();
            let in_category = expense.category.to_lowercase().contains(&needle);
            let in_note = expense.note.to_lowercase().contains(&needle);
            if !in_category && !in_note {
                return false;
            }
        }
        if let Some(from) = self.from
            && expense.date < from
        {
            return false;
        }
        if let Some(to) = self.to
            && expense.date > to
        {
            return false;
        }
        true
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(ToString::to_string)
}

fn parse_bound(value: Option<&str>) -> Option<NaiveDate> {
    let raw = value.filter(|s| !s.is_empty())?;
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            tracing::debug!("ignoring malformed date bound: {raw}");
            None
        }
    }
}

/// Applies the filter and orders the survivors by `(date DESC, id DESC)`.
pub fn filter_expenses(records: Vec<Expense>, filter: &ExpenseFilter) -> Vec<Expense> {
    let mut out: Vec<Expense> = records
        .into_iter()
        .filter(|expense| filter.matches(expense))
        .collect();
    out.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    out
}
