//! Request and response types shared between the server and its clients.
//!
//! Amounts travel as integer minor units (`*_minor` fields) so the wire
//! format carries no floating point.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod month {
    use super::*;

    /// A calendar month as rendered in the month selector.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct MonthView {
        pub id: i32,
        pub short_name: String,
        pub full_name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MonthsResponse {
        pub months: Vec<MonthView>,
    }
}

pub mod dashboard {
    use super::*;

    /// Query string for the dashboard. A missing `month` defaults
    /// server-side to the current calendar month.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct DashboardQuery {
        pub month: Option<i32>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct IncomeEntryView {
        pub id: i32,
        pub month_id: i32,
        pub entry_date: DateTime<Utc>,
        pub description: Option<String>,
        pub amount_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseEntryView {
        pub id: i32,
        pub month_id: i32,
        pub entry_date: DateTime<Utc>,
        pub description: Option<String>,
        pub amount_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct NoteView {
        pub id: i32,
        pub month_id: i32,
        pub text: String,
    }

    /// Derived totals for the selected month. `net_minor` is always
    /// `total_income_minor - total_expenses_minor`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct SummaryView {
        pub month_id: i32,
        pub total_income_minor: i64,
        pub total_expenses_minor: i64,
        pub net_minor: i64,
    }

    /// The composed view model for one month's dashboard.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct DashboardResponse {
        pub income_entries: Vec<IncomeEntryView>,
        pub expense_entries: Vec<ExpenseEntryView>,
        pub notes: Vec<NoteView>,
        pub summary: SummaryView,
        pub months: Vec<super::month::MonthView>,
    }
}

pub mod entry {
    use super::*;

    /// Form body for creating an income or expense entry.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct EntryNew {
        pub month_id: i32,
        pub description: Option<String>,
        pub amount_minor: i64,
    }

    /// Form body for deleting an entry. `month_id` is only used to redirect
    /// back to the right dashboard.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct EntryDelete {
        pub id: i32,
        pub month_id: i32,
    }
}

pub mod note {
    use super::*;

    /// Form body for creating a note.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct NoteNew {
        pub month_id: i32,
        pub text: String,
    }

    /// Form body for the note update. Carries no note id: the update applies
    /// to every note of the month.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct NoteUpdate {
        pub month_id: i32,
        pub text: String,
    }
}
