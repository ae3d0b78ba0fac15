//! Checkout outcome value object
//!
//! Checkout adjustments never fail. They may however be reduced by the
//! floor or capacity clamp, and callers that want to tell the user about it
//! can ask for a `CheckoutOutcome` alongside the new project collection.

use serde::Serialize;
use std::fmt;

/// What happened to a requested checkout delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckoutOutcome {
    /// The full delta was applied
    Applied { delta: i64 },
    /// Only part of the delta was applied
    Clamped { requested: i64, applied: i64 },
    /// Nothing was requested, or no project matched
    Unchanged,
}

impl CheckoutOutcome {
    /// Classify a requested delta against the delta actually applied.
    pub fn classify(requested: i64, applied: i64) -> Self {
        if requested == 0 && applied == 0 {
            CheckoutOutcome::Unchanged
        } else if applied == requested {
            CheckoutOutcome::Applied { delta: applied }
        } else {
            CheckoutOutcome::Clamped { requested, applied }
        }
    }

    /// Net change in the project's quantity
    pub fn applied(&self) -> i64 {
        match self {
            CheckoutOutcome::Applied { delta } => *delta,
            CheckoutOutcome::Clamped { applied, .. } => *applied,
            CheckoutOutcome::Unchanged => 0,
        }
    }

    pub fn is_clamped(&self) -> bool {
        matches!(self, CheckoutOutcome::Clamped { .. })
    }
}

impl fmt::Display for CheckoutOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckoutOutcome::Applied { delta } => write!(f, "applied {:+}", delta),
            CheckoutOutcome::Clamped { requested, applied } => {
                write!(f, "clamped {:+} to {:+}", requested, applied)
            }
            CheckoutOutcome::Unchanged => write!(f, "unchanged"),
        }
    }
}
