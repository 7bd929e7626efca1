use chrono::{Datelike, Utc};
use sea_orm::Database;

use engine::{Engine, MoneyCents};
use migration::MigratorTrait;

async fn engine_with_db() -> Engine {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Engine::builder().database(db).build().await.unwrap()
}

#[tokio::test]
async fn empty_month_gives_empty_collections_and_zero_summary() {
    let engine = engine_with_db().await;

    let dashboard = engine.dashboard(Some(4)).await.unwrap();

    assert!(dashboard.income_entries.is_empty());
    assert!(dashboard.expense_entries.is_empty());
    assert!(dashboard.notes.is_empty());
    assert_eq!(dashboard.summary.month_id, 4);
    assert!(dashboard.summary.total_income.is_zero());
    assert!(dashboard.summary.total_expenses.is_zero());
    assert!(dashboard.summary.net.is_zero());
}

#[tokio::test]
async fn months_are_seeded_in_storage_order() {
    let engine = engine_with_db().await;

    let months = engine.months().await.unwrap();

    assert_eq!(months.len(), 12);
    assert_eq!(months[0].id, 1);
    assert_eq!(months[0].short_name, "Jan");
    assert_eq!(months[0].full_name, "January");
    assert_eq!(months[11].id, 12);
    assert_eq!(months[11].full_name, "December");
}

#[tokio::test]
async fn summary_is_exact_sum_of_entries() {
    let engine = engine_with_db().await;

    engine
        .create_income(3, Some("salary"), MoneyCents::new(10000))
        .await
        .unwrap();
    engine
        .create_income(3, Some("freelance"), MoneyCents::new(25050))
        .await
        .unwrap();
    engine
        .create_expense(3, Some("groceries"), MoneyCents::new(7525))
        .await
        .unwrap();

    let dashboard = engine.dashboard(Some(3)).await.unwrap();

    assert_eq!(dashboard.summary.total_income, MoneyCents::new(35050));
    assert_eq!(dashboard.summary.total_expenses, MoneyCents::new(7525));
    assert_eq!(dashboard.summary.net, MoneyCents::new(27525));
}

#[tokio::test]
async fn summary_ignores_other_months() {
    let engine = engine_with_db().await;

    engine
        .create_income(3, None, MoneyCents::new(10000))
        .await
        .unwrap();
    engine
        .create_income(4, None, MoneyCents::new(999))
        .await
        .unwrap();

    let dashboard = engine.dashboard(Some(3)).await.unwrap();

    assert_eq!(dashboard.summary.total_income, MoneyCents::new(10000));
    assert_eq!(dashboard.income_entries.len(), 1);
}

#[tokio::test]
async fn created_income_appears_with_server_assigned_date() {
    let engine = engine_with_db().await;

    engine
        .create_income(7, Some("bonus"), MoneyCents::new(5000))
        .await
        .unwrap();

    let dashboard = engine.dashboard(Some(7)).await.unwrap();
    let entry = &dashboard.income_entries[0];

    assert_eq!(entry.month_id, 7);
    assert_eq!(entry.description.as_deref(), Some("bonus"));
    assert_eq!(entry.amount, MoneyCents::new(5000));
    let age = Utc::now() - entry.entry_date;
    assert!(age.num_seconds().abs() < 5);
}

#[tokio::test]
async fn absent_description_is_stored_as_null() {
    let engine = engine_with_db().await;

    engine
        .create_expense(2, None, MoneyCents::new(150))
        .await
        .unwrap();

    let dashboard = engine.dashboard(Some(2)).await.unwrap();
    assert_eq!(dashboard.expense_entries[0].description, None);
}

#[tokio::test]
async fn delete_income_removes_only_the_target_row() {
    let engine = engine_with_db().await;

    engine
        .create_income(5, Some("keep"), MoneyCents::new(100))
        .await
        .unwrap();
    engine
        .create_income(5, Some("drop"), MoneyCents::new(200))
        .await
        .unwrap();

    let dashboard = engine.dashboard(Some(5)).await.unwrap();
    let target = dashboard
        .income_entries
        .iter()
        .find(|e| e.description.as_deref() == Some("drop"))
        .unwrap()
        .id;

    engine.delete_income(target).await.unwrap();

    let dashboard = engine.dashboard(Some(5)).await.unwrap();
    assert_eq!(dashboard.income_entries.len(), 1);
    assert_eq!(
        dashboard.income_entries[0].description.as_deref(),
        Some("keep")
    );
}

#[tokio::test]
async fn deleting_a_nonexistent_id_is_a_noop() {
    let engine = engine_with_db().await;

    engine
        .create_expense(5, Some("rent"), MoneyCents::new(80000))
        .await
        .unwrap();

    engine.delete_income(9999).await.unwrap();
    engine.delete_expense(9999).await.unwrap();

    let dashboard = engine.dashboard(Some(5)).await.unwrap();
    assert_eq!(dashboard.expense_entries.len(), 1);
}

#[tokio::test]
async fn update_notes_rewrites_every_note_of_the_month() {
    let engine = engine_with_db().await;

    engine.create_note(9, "first").await.unwrap();
    engine.create_note(9, "second").await.unwrap();
    engine.create_note(10, "other month").await.unwrap();

    engine.update_notes(9, "rewritten").await.unwrap();

    let dashboard = engine.dashboard(Some(9)).await.unwrap();
    assert_eq!(dashboard.notes.len(), 2);
    assert!(dashboard.notes.iter().all(|n| n.text == "rewritten"));

    let other = engine.dashboard(Some(10)).await.unwrap();
    assert_eq!(other.notes[0].text, "other month");
}

#[tokio::test]
async fn update_notes_on_a_month_without_notes_is_a_noop() {
    let engine = engine_with_db().await;

    engine.update_notes(11, "nothing to rewrite").await.unwrap();

    let dashboard = engine.dashboard(Some(11)).await.unwrap();
    assert!(dashboard.notes.is_empty());
}

#[tokio::test]
async fn dashboard_defaults_to_the_current_calendar_month() {
    let engine = engine_with_db().await;

    let current = Utc::now().month() as i32;
    engine
        .create_income(current, Some("this month"), MoneyCents::new(4200))
        .await
        .unwrap();

    let dashboard = engine.dashboard(None).await.unwrap();

    assert_eq!(dashboard.summary.month_id, current);
    assert_eq!(dashboard.summary.total_income, MoneyCents::new(4200));
}
