//! The module contains the `Expense` type, the sole entity of the tracker.

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One expense record.
///
/// `note` is always a concrete string; a missing note is stored as NULL but
/// surfaces as `""`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub note: String,
}

/// Command to create a record. `date` and `note` are raw optional inputs:
/// an absent or empty date defaults to today, a malformed one is rejected.
#[derive(Clone, Debug, Default)]
pub struct NewExpense {
    pub category: String,
    pub amount: f64,
    pub date: Option<String>,
    pub note: Option<String>,
}

/// Partial update command. Only supplied fields change; an empty category or
/// date string leaves the stored value untouched.
#[derive(Clone, Debug, Default)]
pub struct ExpenseChanges {
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
    pub note: Option<String>,
}

impl From<Model> for Expense {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            category: model.category,
            amount: model.amount,
            date: model.date,
            note: model.note.unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub category: String,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub date: Date,
    pub note: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
