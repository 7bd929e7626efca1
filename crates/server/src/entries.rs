//! Income and expense entry endpoints.
//!
//! These mirror the dashboard's form posts: each mutation answers with a
//! redirect back to the dashboard of the affected month.

use api_types::entry::{EntryDelete, EntryNew};
use axum::{
    extract::{Form, State},
    response::Redirect,
};
use engine::MoneyCents;

use crate::{
    ServerError,
    server::{ServerState, dashboard_redirect},
};

pub async fn income_new(
    State(state): State<ServerState>,
    Form(payload): Form<EntryNew>,
) -> Result<Redirect, ServerError> {
    state
        .engine
        .create_income(
            payload.month_id,
            payload.description.as_deref(),
            MoneyCents::new(payload.amount_minor),
        )
        .await?;

    Ok(dashboard_redirect(payload.month_id))
}

pub async fn expense_new(
    State(state): State<ServerState>,
    Form(payload): Form<EntryNew>,
) -> Result<Redirect, ServerError> {
    state
        .engine
        .create_expense(
            payload.month_id,
            payload.description.as_deref(),
            MoneyCents::new(payload.amount_minor),
        )
        .await?;

    Ok(dashboard_redirect(payload.month_id))
}

pub async fn income_delete(
    State(state): State<ServerState>,
    Form(payload): Form<EntryDelete>,
) -> Result<Redirect, ServerError> {
    state.engine.delete_income(payload.id).await?;

    Ok(dashboard_redirect(payload.month_id))
}

pub async fn expense_delete(
    State(state): State<ServerState>,
    Form(payload): Form<EntryDelete>,
) -> Result<Redirect, ServerError> {
    state.engine.delete_expense(payload.id).await?;

    Ok(dashboard_redirect(payload.month_id))
}
