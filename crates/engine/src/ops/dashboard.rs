use chrono::{Datelike, Utc};
use sea_orm::{
    ConnectionTrait, DatabaseTransaction, DbErr, QueryFilter, Statement, TransactionTrait,
    prelude::*,
};

use crate::{
    ExpenseEntry, IncomeEntry, Month, MoneyCents, Note, ResultEngine, Summary, expense, income,
    month, note,
};

use super::{Engine, with_tx};

/// Everything needed to render a month's financial dashboard.
///
/// Always fully populated: collections are empty and the summary is zero when
/// the month has no rows. Never partial.
#[derive(Clone, Debug)]
pub struct Dashboard {
    pub income_entries: Vec<IncomeEntry>,
    pub expense_entries: Vec<ExpenseEntry>,
    pub notes: Vec<Note>,
    pub summary: Summary,
    pub months: Vec<Month>,
}

impl Engine {
    /// Compose the dashboard for `month_id`, defaulting to the current
    /// calendar month.
    ///
    /// The whole read runs inside one transaction, so the income and expense
    /// sums come from a single snapshot.
    pub async fn dashboard(&self, month_id: Option<i32>) -> ResultEngine<Dashboard> {
        let month_id = month_id.unwrap_or_else(|| Utc::now().month() as i32);
        with_tx!(self, |db_tx| {
            let income_entries = income::Entity::find()
                .filter(income::Column::MonthId.eq(month_id))
                .all(&db_tx)
                .await?
                .into_iter()
                .map(IncomeEntry::from)
                .collect();

            let expense_entries = expense::Entity::find()
                .filter(expense::Column::MonthId.eq(month_id))
                .all(&db_tx)
                .await?
                .into_iter()
                .map(ExpenseEntry::from)
                .collect();

            let notes = note::Entity::find()
                .filter(note::Column::MonthId.eq(month_id))
                .all(&db_tx)
                .await?
                .into_iter()
                .map(Note::from)
                .collect();

            let months = month::Entity::find()
                .all(&db_tx)
                .await?
                .into_iter()
                .map(Month::from)
                .collect();

            let total_income = sum_for_month(&db_tx, "income_entries", month_id).await?;
            let total_expenses = sum_for_month(&db_tx, "expense_entries", month_id).await?;
            let summary = Summary::new(month_id, total_income, total_expenses);

            Ok(Dashboard {
                income_entries,
                expense_entries,
                notes,
                summary,
                months,
            })
        })
    }

    /// All month rows, unfiltered, in storage order.
    pub async fn months(&self) -> ResultEngine<Vec<Month>> {
        with_tx!(self, |db_tx| {
            let months = month::Entity::find()
                .all(&db_tx)
                .await?
                .into_iter()
                .map(Month::from)
                .collect();
            Ok(months)
        })
    }
}

/// Sum of `amount_minor` for one month in one entry table. A month with no
/// rows sums to zero.
async fn sum_for_month(
    db_tx: &DatabaseTransaction,
    table: &str,
    month_id: i32,
) -> Result<MoneyCents, DbErr> {
    let stmt = Statement::from_sql_and_values(
        db_tx.get_database_backend(),
        format!("SELECT COALESCE(SUM(amount_minor), 0) AS total FROM {table} WHERE month_id = ?"),
        vec![month_id.into()],
    );
    let row = db_tx.query_one(stmt).await?;
    let total: i64 = row.and_then(|r| r.try_get("", "total").ok()).unwrap_or(0);
    Ok(MoneyCents::new(total))
}
