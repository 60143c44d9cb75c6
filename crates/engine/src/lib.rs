//! Domain core for the expense tracker.
//!
//! The engine owns the `expenses` table and exposes record CRUD plus the two
//! read paths with actual logic: filtered listing ([`ExpenseFilter`]) and
//! category-totaled summaries ([`summarize`]). Both are pure functions over a
//! snapshot of the record set; the database is only touched to materialize
//! that snapshot.

pub use error::EngineError;
pub use expense::{Expense, ExpenseChanges, NewExpense};
pub use filter::{ExpenseFilter, filter_expenses};
pub use ops::{Engine, EngineBuilder};
pub use summary::{Summary, summarize};

mod error;
mod expense;
mod filter;
mod ops;
mod summary;

type ResultEngine<T> = Result<T, EngineError>;

/// Calendar-date wire format used everywhere dates cross a boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
