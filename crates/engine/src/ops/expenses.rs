//! Expense record CRUD and the two read paths built on the pure core.

use chrono::{Local, NaiveDate};
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, TransactionTrait};

use crate::{
    DATE_FORMAT, EngineError, Expense, ExpenseChanges, ExpenseFilter, NewExpense, ResultEngine,
    Summary, expense, filter_expenses, summarize,
};

use super::{Engine, normalize_category, validate_amount, with_tx};

fn parse_date(raw: &str) -> ResultEngine<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| EngineError::InvalidDate(raw.to_string()))
}

fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

impl Engine {
    /// Creates a record, returning it with its store-assigned id.
    ///
    /// The date defaults to today when absent; a supplied but malformed date
    /// is an error here, unlike list bounds which are ignored.
    pub async fn add_expense(&self, cmd: NewExpense) -> ResultEngine<Expense> {
        let category = normalize_category(&cmd.category)?;
        let amount = validate_amount(cmd.amount)?;
        let date = match trimmed(cmd.date.as_deref()) {
            Some(raw) => parse_date(raw)?,
            None => Local::now().date_naive(),
        };
        let note = cmd.note.as_deref().map(str::trim).unwrap_or_default();

        let active = expense::ActiveModel {
            id: ActiveValue::NotSet,
            category: ActiveValue::Set(category),
            amount: ActiveValue::Set(amount),
            date: ActiveValue::Set(date),
            note: ActiveValue::Set(Some(note.to_string())),
        };
        let model = active.insert(&self.database).await?;

        tracing::debug!(id = model.id, "expense created");
        Ok(model.into())
    }

    /// Fetches a single record by id.
    pub async fn expense(&self, id: i64) -> ResultEngine<Expense> {
        let model = expense::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(format!("expense {id}")))?;
        Ok(model.into())
    }

    /// Lists records matching `filter`, ordered by `(date DESC, id DESC)`.
    ///
    /// The whole snapshot is materialized and filtered in memory; the
    /// working set of a single-user tracker stays small.
    pub async fn list_expenses(&self, filter: &ExpenseFilter) -> ResultEngine<Vec<Expense>> {
        let records = self.snapshot().await?;
        Ok(filter_expenses(records, filter))
    }

    /// Applies a partial update. Only supplied fields change.
    pub async fn update_expense(
        &self,
        id: i64,
        changes: ExpenseChanges,
    ) -> ResultEngine<Expense> {
        with_tx!(self, |db_tx| {
            let model = expense::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound(format!("expense {id}")))?;

            let mut active: expense::ActiveModel = model.clone().into();
            let mut dirty = false;

            // An empty category or date string leaves the stored value alone.
            if let Some(category) = trimmed(changes.category.as_deref()) {
                active.category = ActiveValue::Set(category.to_string());
                dirty = true;
            }
            if let Some(amount) = changes.amount {
                active.amount = ActiveValue::Set(validate_amount(amount)?);
                dirty = true;
            }
            if let Some(raw) = trimmed(changes.date.as_deref()) {
                active.date = ActiveValue::Set(parse_date(raw)?);
                dirty = true;
            }
            if let Some(note) = changes.note.as_deref() {
                active.note = ActiveValue::Set(Some(note.trim().to_string()));
                dirty = true;
            }

            let model = if dirty {
                active.update(&db_tx).await?
            } else {
                model
            };
            tracing::debug!(id = model.id, "expense updated");
            Ok(Expense::from(model))
        })
    }

    /// Removes a record permanently.
    pub async fn delete_expense(&self, id: i64) -> ResultEngine<()> {
        let result = expense::Entity::delete_by_id(id)
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngineError::KeyNotFound(format!("expense {id}")));
        }
        tracing::debug!(id, "expense deleted");
        Ok(())
    }

    /// Total spend and per-category subtotals over the full store.
    pub async fn summary(&self) -> ResultEngine<Summary> {
        let records = self.snapshot().await?;
        Ok(summarize(&records))
    }

    async fn snapshot(&self) -> ResultEngine<Vec<Expense>> {
        let rows = expense::Entity::find().all(&self.database).await?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }
}
