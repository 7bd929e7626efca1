use sea_orm::{ActiveValue, QueryFilter, TransactionTrait, prelude::*, sea_query::Expr};

use crate::{ResultEngine, note};

use super::{Engine, with_tx};

impl Engine {
    /// Insert a new note for a month. Notes accumulate; there is no
    /// uniqueness constraint.
    pub async fn create_note(&self, month_id: i32, text: &str) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let entry = note::ActiveModel {
                id: ActiveValue::NotSet,
                month_id: ActiveValue::Set(month_id),
                text: ActiveValue::Set(text.to_string()),
            };
            entry.insert(&db_tx).await?;
            Ok(())
        })
    }

    /// Set the text of **every** note belonging to `month_id`.
    ///
    /// The update is keyed by month, not by note id, so all of the month's
    /// notes receive the same text. A month with no notes is a no-op.
    pub async fn update_notes(&self, month_id: i32, text: &str) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            note::Entity::update_many()
                .col_expr(note::Column::Text, Expr::value(text))
                .filter(note::Column::MonthId.eq(month_id))
                .exec(&db_tx)
                .await?;
            Ok(())
        })
    }
}
