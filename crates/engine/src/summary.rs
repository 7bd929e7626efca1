//! Derived per-month totals.
//!
//! A `Summary` is never persisted; it is recomputed from the entry tables on
//! every dashboard read.

use serde::{Deserialize, Serialize};

use crate::MoneyCents;

/// Totals for one month: income, expenses, and net savings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub month_id: i32,
    pub total_income: MoneyCents,
    pub total_expenses: MoneyCents,
    pub net: MoneyCents,
}

impl Summary {
    /// `net` is always `total_income - total_expenses`; there is no way to
    /// construct a summary that breaks the invariant.
    #[must_use]
    pub fn new(month_id: i32, total_income: MoneyCents, total_expenses: MoneyCents) -> Self {
        Self {
            month_id,
            total_income,
            total_expenses,
            net: total_income - total_expenses,
        }
    }
}
