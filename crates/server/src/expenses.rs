//! Expenses API endpoints.

use api_types::expense::{ExpenseDeleted, ExpenseListQuery, ExpenseNew, ExpenseUpdate, ExpenseView};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

fn map_expense(expense: engine::Expense) -> ExpenseView {
    ExpenseView {
        id: expense.id,
        category: expense.category,
        amount: expense.amount,
        date: expense.date,
        note: expense.note,
    }
}

pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ExpenseListQuery>,
) -> Result<Json<Vec<ExpenseView>>, ServerError> {
    let filter = engine::ExpenseFilter::from_params(
        params.category.as_deref(),
        params.q.as_deref(),
        params.from.as_deref(),
        params.to.as_deref(),
    );

    let expenses = state.engine.list_expenses(&filter).await?;
    Ok(Json(expenses.into_iter().map(map_expense).collect()))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseNew>,
) -> Result<(StatusCode, Json<ExpenseView>), ServerError> {
    let expense = state
        .engine
        .add_expense(engine::NewExpense {
            category: payload.category,
            amount: payload.amount,
            date: payload.date,
            note: payload.note,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(map_expense(expense))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ExpenseUpdate>,
) -> Result<Json<ExpenseView>, ServerError> {
    let expense = state
        .engine
        .update_expense(
            id,
            engine::ExpenseChanges {
                category: payload.category,
                amount: payload.amount,
                date: payload.date,
                note: payload.note,
            },
        )
        .await?;

    Ok(Json(map_expense(expense)))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<ExpenseDeleted>, ServerError> {
    state.engine.delete_expense(id).await?;

    Ok(Json(ExpenseDeleted {
        status: "deleted".to_string(),
        id,
    }))
}
