//! Months reference table.
//!
//! Month rows are seed data created by the migration; the engine only ever
//! reads them.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A calendar month, the partition key for all financial records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Month {
    pub id: i32,
    pub short_name: String,
    pub full_name: String,
}

impl From<Model> for Month {
    fn from(month: Model) -> Self {
        Self {
            id: month.id,
            short_name: month.short_name,
            full_name: month.full_name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "months")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub short_name: String,
    pub full_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::income::Entity")]
    IncomeEntries,
    #[sea_orm(has_many = "super::expense::Entity")]
    ExpenseEntries,
    #[sea_orm(has_many = "super::note::Entity")]
    Notes,
}

impl Related<super::income::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IncomeEntries.def()
    }
}

impl Related<super::expense::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExpenseEntries.def()
    }
}

impl Related<super::note::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
