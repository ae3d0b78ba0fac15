//! Session actions
//!
//! One action per user interaction. Actions have a small text form so they
//! can be scripted:
//!
//! ```text
//! # comments and blank lines are ignored
//! join p2
//! checkout p2 hs1 3
//! checkin p1 hs2 1
//! adjust p1 hs1 -2
//! toggle p3
//! leave p2
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::value_objects::{HardwareSetId, ProjectId};
use crate::error::{HwError, HwResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Flip membership
    Toggle { project: ProjectId },
    /// Become a member (no change if already one)
    Join { project: ProjectId },
    /// Stop being a member (no change if not one)
    Leave { project: ProjectId },
    /// Check `qty` more units out
    CheckOut {
        project: ProjectId,
        set: HardwareSetId,
        qty: u32,
    },
    /// Return `qty` units
    CheckIn {
        project: ProjectId,
        set: HardwareSetId,
        qty: u32,
    },
    /// Signed adjustment
    Adjust {
        project: ProjectId,
        set: HardwareSetId,
        delta: i64,
    },
}

impl Action {
    pub fn project(&self) -> &ProjectId {
        match self {
            Action::Toggle { project }
            | Action::Join { project }
            | Action::Leave { project }
            | Action::CheckOut { project, .. }
            | Action::CheckIn { project, .. }
            | Action::Adjust { project, .. } => project,
        }
    }

    /// Hardware set and signed delta for checkout-style actions
    pub fn checkout_delta(&self) -> Option<(&HardwareSetId, i64)> {
        match self {
            Action::CheckOut { set, qty, .. } => Some((set, i64::from(*qty))),
            Action::CheckIn { set, qty, .. } => Some((set, -i64::from(*qty))),
            Action::Adjust { set, delta, .. } => Some((set, *delta)),
            Action::Toggle { .. } | Action::Join { .. } | Action::Leave { .. } => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Toggle { project } => write!(f, "toggle {}", project),
            Action::Join { project } => write!(f, "join {}", project),
            Action::Leave { project } => write!(f, "leave {}", project),
            Action::CheckOut { project, set, qty } => {
                write!(f, "checkout {} {} {}", project, set, qty)
            }
            Action::CheckIn { project, set, qty } => write!(f, "checkin {} {} {}", project, set, qty),
            Action::Adjust {
                project,
                set,
                delta,
            } => write!(f, "adjust {} {} {:+}", project, set, delta),
        }
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        let Some((&verb, args)) = words.split_first() else {
            return Err("empty action".to_string());
        };

        let verb = verb.to_lowercase();
        match (verb.as_str(), args) {
            ("toggle", [project]) => Ok(Action::Toggle {
                project: (*project).into(),
            }),
            ("join", [project]) => Ok(Action::Join {
                project: (*project).into(),
            }),
            ("leave", [project]) => Ok(Action::Leave {
                project: (*project).into(),
            }),
            ("checkout", [project, set, qty]) => Ok(Action::CheckOut {
                project: (*project).into(),
                set: (*set).into(),
                qty: parse_qty(qty)?,
            }),
            ("checkin", [project, set, qty]) => Ok(Action::CheckIn {
                project: (*project).into(),
                set: (*set).into(),
                qty: parse_qty(qty)?,
            }),
            ("adjust", [project, set, delta]) => Ok(Action::Adjust {
                project: (*project).into(),
                set: (*set).into(),
                delta: delta
                    .parse()
                    .map_err(|_| format!("'{}' is not a signed integer", delta))?,
            }),
            ("toggle" | "join" | "leave", _) => Err(format!("usage: {} <project>", verb)),
            ("checkout" | "checkin", _) => Err(format!("usage: {} <project> <set> <qty>", verb)),
            ("adjust", _) => Err("usage: adjust <project> <set> <delta>".to_string()),
            _ => Err(format!("unknown command '{}'", verb)),
        }
    }
}

fn parse_qty(raw: &str) -> Result<u32, String> {
    raw.parse()
        .map_err(|_| format!("'{}' is not a non-negative quantity", raw))
}

/// Parse a script of actions, one per line.
///
/// Blank lines and lines starting with `#` are skipped. Errors carry the
/// 1-based line number.
pub fn parse_script(script: &str) -> HwResult<Vec<Action>> {
    script
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                None
            } else {
                Some((i + 1, line))
            }
        })
        .map(|(line_no, line)| {
            line.parse::<Action>()
                .map_err(|message| HwError::InvalidAction {
                    line: line_no,
                    message,
                })
        })
        .collect()
}
