//! The module contains the error the engine can throw.
//!
//! The engine deliberately has a narrow failure surface: connectivity
//! problems and constraint violations bubble up from the database layer
//! unchanged. Not-found conditions are not errors; queries for an empty
//! month return empty collections and deleting a missing id is a no-op.
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Database(#[from] DbErr),
}
