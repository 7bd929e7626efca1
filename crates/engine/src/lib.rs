//! Core of the monthly finance records service.
//!
//! The [`Engine`] owns a database connection and exposes the operations the
//! presentation layer needs: composing a month's dashboard, creating and
//! deleting income/expense entries, and managing free-text notes.
//!
//! Monetary values are integer cents ([`MoneyCents`]) end to end, so summary
//! arithmetic is exact.

pub use error::EngineError;
pub use expense::ExpenseEntry;
pub use income::IncomeEntry;
pub use money::MoneyCents;
pub use month::Month;
pub use note::Note;
pub use ops::{Dashboard, Engine, EngineBuilder};
pub use summary::Summary;

mod error;
mod expense;
mod income;
mod money;
mod month;
mod note;
mod ops;
mod summary;

type ResultEngine<T> = Result<T, EngineError>;
