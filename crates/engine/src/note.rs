//! Notes table and its domain view.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A free-text annotation attributed to a month. Notes accumulate; there is
/// no uniqueness per month.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i32,
    pub month_id: i32,
    pub text: String,
}

impl From<Model> for Note {
    fn from(note: Model) -> Self {
        Self {
            id: note.id,
            month_id: note.month_id,
            text: note.text,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub month_id: i32,
    pub text: String,
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
