use chrono::{Local, NaiveDate};
use sea_orm::Database;

use engine::{Engine, EngineError, ExpenseChanges, ExpenseFilter, NewExpense};
use migration::MigratorTrait;

async fn engine_with_db() -> Engine {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Engine::builder().database(db).build()
}

fn new_expense(category: &str, amount: f64, date: &str, note: &str) -> NewExpense {
    NewExpense {
        category: category.to_string(),
        amount,
        date: Some(date.to_string()),
        note: Some(note.to_string()),
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[tokio::test]
async fn add_assigns_increasing_ids_and_round_trips() {
    let engine = engine_with_db().await;

    let first = engine
        .add_expense(new_expense("Food", 10.0, "2024-01-05", ""))
        .await
        .unwrap();
    let second = engine
        .add_expense(new_expense("Transit", 20.0, "2024-01-10", "monthly pass"))
        .await
        .unwrap();
    assert!(second.id > first.id);

    let fetched = engine.expense(first.id).await.unwrap();
    assert_eq!(fetched, first);
    assert_eq!(fetched.category, "Food");
    assert_eq!(fetched.amount, 10.0);
    assert_eq!(fetched.date, date("2024-01-05"));
    assert_eq!(fetched.note, "");
}

#[tokio::test]
async fn add_trims_category_and_note() {
    let engine = engine_with_db().await;

    let expense = engine
        .add_expense(new_expense("  Food ", 4.0, "2024-02-01", "  lunch "))
        .await
        .unwrap();
    assert_eq!(expense.category, "Food");
    assert_eq!(expense.note, "lunch");
}

#[tokio::test]
async fn add_defaults_date_to_today() {
    let engine = engine_with_db().await;

    let expense = engine
        .add_expense(NewExpense {
            category: "Food".to_string(),
            amount: 3.0,
            date: None,
            note: None,
        })
        .await
        .unwrap();
    assert_eq!(expense.date, Local::now().date_naive());
    assert_eq!(expense.note, "");

    // An empty date string behaves the same as an absent one.
    let expense = engine
        .add_expense(new_expense("Food", 3.0, "", ""))
        .await
        .unwrap();
    assert_eq!(expense.date, Local::now().date_naive());
}

#[tokio::test]
async fn add_rejects_invalid_input() {
    let engine = engine_with_db().await;

    let err = engine
        .add_expense(new_expense("   ", 5.0, "2024-01-01", ""))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::CategoryRequired);

    let err = engine
        .add_expense(new_expense("Food", 0.0, "2024-01-01", ""))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::InvalidAmount);

    let err = engine
        .add_expense(new_expense("Food", 5.0, "01/02/2024", ""))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::InvalidDate("01/02/2024".to_string()));
}

#[tokio::test]
async fn list_orders_newest_first_with_id_tiebreak() {
    let engine = engine_with_db().await;
    engine
        .add_expense(new_expense("Food", 10.0, "2024-01-05", ""))
        .await
        .unwrap();
    engine
        .add_expense(new_expense("Food", 5.0, "2024-01-10", ""))
        .await
        .unwrap();
    engine
        .add_expense(new_expense("Transit", 20.0, "2024-01-10", ""))
        .await
        .unwrap();

    let all = engine
        .list_expenses(&ExpenseFilter::default())
        .await
        .unwrap();
    let dates: Vec<NaiveDate> = all.iter().map(|e| e.date).collect();
    assert_eq!(
        dates,
        vec![date("2024-01-10"), date("2024-01-10"), date("2024-01-05")]
    );
    // Same-date records come back most recently created first.
    assert!(all[0].id > all[1].id);
}

#[tokio::test]
async fn list_applies_combined_filters() {
    let engine = engine_with_db().await;
    engine
        .add_expense(new_expense("Food", 10.0, "2024-01-05", "market"))
        .await
        .unwrap();
    engine
        .add_expense(new_expense("Food", 5.0, "2024-01-10", ""))
        .await
        .unwrap();
    engine
        .add_expense(new_expense("Transit", 20.0, "2024-01-10", "monthly pass"))
        .await
        .unwrap();

    let filter = ExpenseFilter::from_params(Some("Food"), None, None, Some("2024-01-09"));
    let out = engine.list_expenses(&filter).await.unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].note, "market");

    let filter = ExpenseFilter::from_params(None, Some("PASS"), None, None);
    let out = engine.list_expenses(&filter).await.unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].category, "Transit");
}

#[tokio::test]
async fn update_changes_only_supplied_fields() {
    let engine = engine_with_db().await;
    let created = engine
        .add_expense(new_expense("Food", 10.0, "2024-01-05", "market"))
        .await
        .unwrap();

    let updated = engine
        .update_expense(
            created.id,
            ExpenseChanges {
                amount: Some(12.5),
                note: Some("supermarket".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.category, "Food");
    assert_eq!(updated.amount, 12.5);
    assert_eq!(updated.date, created.date);
    assert_eq!(updated.note, "supermarket");
}

#[tokio::test]
async fn update_ignores_empty_category_and_date() {
    let engine = engine_with_db().await;
    let created = engine
        .add_expense(new_expense("Food", 10.0, "2024-01-05", ""))
        .await
        .unwrap();

    let updated = engine
        .update_expense(
            created.id,
            ExpenseChanges {
                category: Some("   ".to_string()),
                date: Some(String::new()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated, created);
}

#[tokio::test]
async fn update_validates_amount_and_date() {
    let engine = engine_with_db().await;
    let created = engine
        .add_expense(new_expense("Food", 10.0, "2024-01-05", ""))
        .await
        .unwrap();

    let err = engine
        .update_expense(
            created.id,
            ExpenseChanges {
                amount: Some(-1.0),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::InvalidAmount);

    let err = engine
        .update_expense(
            created.id,
            ExpenseChanges {
                date: Some("yesterday".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::InvalidDate("yesterday".to_string()));

    // Failed updates leave the record untouched.
    assert_eq!(engine.expense(created.id).await.unwrap(), created);
}

#[tokio::test]
async fn update_missing_record_is_not_found() {
    let engine = engine_with_db().await;
    let err = engine
        .update_expense(999, ExpenseChanges::default())
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound("expense 999".to_string()));
}

#[tokio::test]
async fn delete_removes_record_and_does_not_reuse_ids() {
    let engine = engine_with_db().await;
    let first = engine
        .add_expense(new_expense("Food", 10.0, "2024-01-05", ""))
        .await
        .unwrap();

    engine.delete_expense(first.id).await.unwrap();
    let err = engine.expense(first.id).await.unwrap_err();
    assert_eq!(
        err,
        EngineError::KeyNotFound(format!("expense {}", first.id))
    );

    let err = engine.delete_expense(first.id).await.unwrap_err();
    assert_eq!(
        err,
        EngineError::KeyNotFound(format!("expense {}", first.id))
    );

    let second = engine
        .add_expense(new_expense("Food", 2.0, "2024-01-06", ""))
        .await
        .unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn summary_totals_full_store() {
    let engine = engine_with_db().await;

    let empty = engine.summary().await.unwrap();
    assert_eq!(empty.total, 0.0);
    assert!(empty.by_category.is_empty());

    engine
        .add_expense(new_expense("Food", 10.0, "2024-01-05", ""))
        .await
        .unwrap();
    engine
        .add_expense(new_expense("Food", 5.0, "2024-01-10", ""))
        .await
        .unwrap();
    engine
        .add_expense(new_expense("Transit", 20.0, "2024-01-10", ""))
        .await
        .unwrap();

    let summary = engine.summary().await.unwrap();
    assert_eq!(summary.total, 35.0);
    assert_eq!(summary.by_category["Food"], 15.0);
    assert_eq!(summary.by_category["Transit"], 20.0);
}
