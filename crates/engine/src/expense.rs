//! Expense entries table and its domain view.
//!
//! Same lifecycle shape as income entries; kept as a separate table because
//! the two are queried and summed independently.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::MoneyCents;

/// A dated, described expense attributed to a month.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub id: i32,
    pub month_id: i32,
    pub entry_date: DateTime<Utc>,
    pub description: Option<String>,
    pub amount: MoneyCents,
}

impl From<Model> for ExpenseEntry {
    fn from(entry: Model) -> Self {
        Self {
            id: entry.id,
            month_id: entry.month_id,
            entry_date: entry.entry_date,
            description: entry.description,
            amount: MoneyCents::new(entry.amount_minor),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expense_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub month_id: i32,
    pub entry_date: DateTimeUtc,
    pub description: Option<String>,
    pub amount_minor: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::month::Entity",
        from = "Column::MonthId",
        to = "super::month::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Months,
}

impl Related<super::month::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Months.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
