//! Results of applying session actions

use std::fmt;

use serde::Serialize;

use super::action::Action;
use crate::domain::value_objects::CheckoutOutcome;

/// Why the session refused to pass an action to the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockReason {
    UnknownProject,
    UnknownHardwareSet,
    /// Only members may check hardware in or out
    NotMember,
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockReason::UnknownProject => write!(f, "unknown project"),
            BlockReason::UnknownHardwareSet => write!(f, "unknown hardware set"),
            BlockReason::NotMember => write!(f, "join the project first"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionStatus {
    /// Membership changed
    MembershipChanged { is_member: bool },
    /// Checkout changed (fully or partly)
    Checkout(CheckoutOutcome),
    /// Valid action that left the ledger as it was
    NoChange,
    Blocked { reason: BlockReason },
}

impl ActionStatus {
    pub fn is_blocked(&self) -> bool {
        matches!(self, ActionStatus::Blocked { .. })
    }

    pub fn is_clamped(&self) -> bool {
        matches!(self, ActionStatus::Checkout(outcome) if outcome.is_clamped())
    }
}

/// One applied action and its effect
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionReport {
    /// Position in the session log (1-based)
    pub seq: usize,
    pub action: Action,
    pub status: ActionStatus,
    /// Project's quantity of the affected set afterwards (checkout actions)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<u32>,
    /// Units of the affected set still available afterwards (checkout actions)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<u32>,
}

impl ActionReport {
    pub fn summary(&self) -> String {
        let status = match &self.status {
            ActionStatus::MembershipChanged { is_member: true } => "joined".to_string(),
            ActionStatus::MembershipChanged { is_member: false } => "left".to_string(),
            ActionStatus::Checkout(outcome) => outcome.to_string(),
            ActionStatus::NoChange => "no change".to_string(),
            ActionStatus::Blocked { reason } => format!("blocked: {}", reason),
        };

        match (self.qty, self.available) {
            (Some(qty), Some(available)) => {
                format!("{} ({}, now {}, {} available)", self.action, status, qty, available)
            }
            _ => format!("{} ({})", self.action, status),
        }
    }
}
