//! Note endpoints.

use api_types::note::{NoteNew, NoteUpdate};
use axum::{
    extract::{Form, State},
    response::Redirect,
};

use crate::{
    ServerError,
    server::{ServerState, dashboard_redirect},
};

pub async fn note_new(
    State(state): State<ServerState>,
    Form(payload): Form<NoteNew>,
) -> Result<Redirect, ServerError> {
    state
        .engine
        .create_note(payload.month_id, &payload.text)
        .await?;

    Ok(dashboard_redirect(payload.month_id))
}

/// The update form carries no note id: every note of the month is rewritten
/// with the submitted text.
pub async fn note_update(
    State(state): State<ServerState>,
    Form(payload): Form<NoteUpdate>,
) -> Result<Redirect, ServerError> {
    state
        .engine
        .update_notes(payload.month_id, &payload.text)
        .await?;

    Ok(dashboard_redirect(payload.month_id))
}
