use chrono::Utc;
use sea_orm::{ActiveValue, TransactionTrait, prelude::*};

use crate::{MoneyCents, ResultEngine, expense, income};

use super::{Engine, with_tx};

impl Engine {
    /// Insert an income entry for a month.
    ///
    /// The entry date is server-assigned (`Utc::now()`); an absent
    /// description is stored as NULL. The caller re-fetches the dashboard to
    /// see the new row.
    pub async fn create_income(
        &self,
        month_id: i32,
        description: Option<&str>,
        amount: MoneyCents,
    ) -> ResultEngine<()> {
        let entry_date = Utc::now();
        with_tx!(self, |db_tx| {
            let entry = income::ActiveModel {
                id: ActiveValue::NotSet,
                month_id: ActiveValue::Set(month_id),
                entry_date: ActiveValue::Set(entry_date),
                description: ActiveValue::Set(description.map(ToString::to_string)),
                amount_minor: ActiveValue::Set(amount.cents()),
            };
            entry.insert(&db_tx).await?;
            Ok(())
        })
    }

    /// Insert an expense entry for a month. Symmetric to [`create_income`].
    ///
    /// [`create_income`]: Engine::create_income
    pub async fn create_expense(
        &self,
        month_id: i32,
        description: Option<&str>,
        amount: MoneyCents,
    ) -> ResultEngine<()> {
        let entry_date = Utc::now();
        with_tx!(self, |db_tx| {
            let entry = expense::ActiveModel {
                id: ActiveValue::NotSet,
                month_id: ActiveValue::Set(month_id),
                entry_date: ActiveValue::Set(entry_date),
                description: ActiveValue::Set(description.map(ToString::to_string)),
                amount_minor: ActiveValue::Set(amount.cents()),
            };
            entry.insert(&db_tx).await?;
            Ok(())
        })
    }

    /// Delete an income entry by id.
    ///
    /// Deleting an id that does not exist is a silent no-op; zero rows
    /// affected is not distinguished from one.
    pub async fn delete_income(&self, entry_id: i32) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            income::Entity::delete_by_id(entry_id).exec(&db_tx).await?;
            Ok(())
        })
    }

    /// Delete an expense entry by id. Same no-op semantics as
    /// [`delete_income`].
    ///
    /// [`delete_income`]: Engine::delete_income
    pub async fn delete_expense(&self, entry_id: i32) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            expense::Entity::delete_by_id(entry_id).exec(&db_tx).await?;
            Ok(())
        })
    }
}
