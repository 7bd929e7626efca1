//! Dashboard API endpoints.

use api_types::dashboard::{
    DashboardQuery, DashboardResponse, ExpenseEntryView, IncomeEntryView, NoteView, SummaryView,
};
use api_types::month::{MonthView, MonthsResponse};
use axum::{
    Json,
    extract::{Query, State},
};

use crate::{ServerError, server::ServerState};

fn map_month(month: engine::Month) -> MonthView {
    MonthView {
        id: month.id,
        short_name: month.short_name,
        full_name: month.full_name,
    }
}

fn map_income(entry: engine::IncomeEntry) -> IncomeEntryView {
    IncomeEntryView {
        id: entry.id,
        month_id: entry.month_id,
        entry_date: entry.entry_date,
        description: entry.description,
        amount_minor: entry.amount.cents(),
    }
}

fn map_expense(entry: engine::ExpenseEntry) -> ExpenseEntryView {
    ExpenseEntryView {
        id: entry.id,
        month_id: entry.month_id,
        entry_date: entry.entry_date,
        description: entry.description,
        amount_minor: entry.amount.cents(),
    }
}

fn map_note(note: engine::Note) -> NoteView {
    NoteView {
        id: note.id,
        month_id: note.month_id,
        text: note.text,
    }
}

/// Handle the dashboard fetch: the composed view model for one month.
pub async fn show(
    State(state): State<ServerState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>, ServerError> {
    let dashboard = state.engine.dashboard(query.month).await?;

    Ok(Json(DashboardResponse {
        income_entries: dashboard.income_entries.into_iter().map(map_income).collect(),
        expense_entries: dashboard
            .expense_entries
            .into_iter()
            .map(map_expense)
            .collect(),
        notes: dashboard.notes.into_iter().map(map_note).collect(),
        summary: SummaryView {
            month_id: dashboard.summary.month_id,
            total_income_minor: dashboard.summary.total_income.cents(),
            total_expenses_minor: dashboard.summary.total_expenses.cents(),
            net_minor: dashboard.summary.net.cents(),
        },
        months: dashboard.months.into_iter().map(map_month).collect(),
    }))
}

/// Handle the month selector fetch: all month rows, unfiltered.
pub async fn list_months(
    State(state): State<ServerState>,
) -> Result<Json<MonthsResponse>, ServerError> {
    let months = state
        .engine
        .months()
        .await?
        .into_iter()
        .map(map_month)
        .collect();

    Ok(Json(MonthsResponse { months }))
}
