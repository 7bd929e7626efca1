//! Initial schema migration - creates all tables from scratch.
//!
//! - `months`: calendar month reference data, seeded with 12 rows
//! - `income_entries`: dated income records per month
//! - `expense_entries`: dated expense records per month
//! - `notes`: free-text annotations per month
//!
//! Amounts are stored as integer minor units (`amount_minor`).

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Months {
    Table,
    Id,
    ShortName,
    FullName,
}

#[derive(Iden)]
enum IncomeEntries {
    Table,
    Id,
    MonthId,
    EntryDate,
    Description,
    AmountMinor,
}

#[derive(Iden)]
enum ExpenseEntries {
    Table,
    Id,
    MonthId,
    EntryDate,
    Description,
    AmountMinor,
}

#[derive(Iden)]
enum Notes {
    Table,
    Id,
    MonthId,
    Text,
}

const MONTHS: [(&str, &str); 12] = [
    ("Jan", "January"),
    ("Feb", "February"),
    ("Mar", "March"),
    ("Apr", "April"),
    ("May", "May"),
    ("Jun", "June"),
    ("Jul", "July"),
    ("Aug", "August"),
    ("Sep", "September"),
    ("Oct", "October"),
    ("Nov", "November"),
    ("Dec", "December"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Months::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Months::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Months::ShortName).string().not_null())
                    .col(ColumnDef::new(Months::FullName).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(IncomeEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(IncomeEntries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(IncomeEntries::MonthId).integer().not_null())
                    .col(
                        ColumnDef::new(IncomeEntries::EntryDate)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(IncomeEntries::Description).string())
                    .col(
                        ColumnDef::new(IncomeEntries::AmountMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-income_entries-month_id")
                            .from(IncomeEntries::Table, IncomeEntries::MonthId)
                            .to(Months::Table, Months::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-income_entries-month_id")
                    .table(IncomeEntries::Table)
                    .col(IncomeEntries::MonthId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ExpenseEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExpenseEntries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ExpenseEntries::MonthId).integer().not_null())
                    .col(
                        ColumnDef::new(ExpenseEntries::EntryDate)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ExpenseEntries::Description).string())
                    .col(
                        ColumnDef::new(ExpenseEntries::AmountMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-expense_entries-month_id")
                            .from(ExpenseEntries::Table, ExpenseEntries::MonthId)
                            .to(Months::Table, Months::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-expense_entries-month_id")
                    .table(ExpenseEntries::Table)
                    .col(ExpenseEntries::MonthId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Notes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notes::MonthId).integer().not_null())
                    .col(ColumnDef::new(Notes::Text).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-notes-month_id")
                            .from(Notes::Table, Notes::MonthId)
                            .to(Months::Table, Months::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-notes-month_id")
                    .table(Notes::Table)
                    .col(Notes::MonthId)
                    .to_owned(),
            )
            .await?;

        // Seed the reference data: one row per calendar month.
        let mut seed = Query::insert()
            .into_table(Months::Table)
            .columns([Months::Id, Months::ShortName, Months::FullName])
            .to_owned();
        for (id, (short_name, full_name)) in MONTHS.iter().enumerate() {
            seed.values_panic([
                (id as i32 + 1).into(),
                (*short_name).into(),
                (*full_name).into(),
            ]);
        }
        manager.exec_stmt(seed).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ExpenseEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(IncomeEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Months::Table).to_owned())
            .await?;
        Ok(())
    }
}
