//! Wire types shared by the HTTP server and its clients.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod expense {
    use super::*;

    /// Request body for creating a record.
    ///
    /// `date` stays a raw string here: the engine parses it so that the
    /// "invalid date is a 400" rule lives in one place.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub category: String,
        pub amount: f64,
        pub date: Option<String>,
        pub note: Option<String>,
    }

    /// Partial update body; absent fields keep their stored value.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ExpenseUpdate {
        pub category: Option<String>,
        pub amount: Option<f64>,
        pub date: Option<String>,
        pub note: Option<String>,
    }

    /// Query-string parameters of the listing endpoint.
    #[derive(Debug, Default, Deserialize)]
    pub struct ExpenseListQuery {
        pub category: Option<String>,
        pub q: Option<String>,
        pub from: Option<String>,
        pub to: Option<String>,
    }

    /// One record as serialized to clients.
    ///
    /// `date` serializes as `YYYY-MM-DD`; `note` is an empty string when
    /// absent, never null.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: i64,
        pub category: String,
        pub amount: f64,
        pub date: NaiveDate,
        pub note: String,
    }

    /// Response body of a successful delete.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseDeleted {
        pub status: String,
        pub id: i64,
    }
}

pub mod summary {
    use super::*;

    /// Total spend plus per-category subtotals over the whole store.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct SummaryView {
        pub total: f64,
        #[serde(rename = "byCategory")]
        pub by_category: HashMap<String, f64>,
    }
}
