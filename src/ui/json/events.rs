//! Typed JSON events shared by all commands.

use serde::Serialize;

use hwmgr::application::{ActionReport, LedgerView};

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Non-fatal problem with the dataset or configuration.
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent<'a> {
    pub event: &'static str,
    pub source: &'a str,
    pub message: String,
}

impl<'a> WarningEvent<'a> {
    pub fn new(source: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "warning",
            source,
            message: message.into(),
        }
    }
}

/// One applied action.
#[derive(Debug, Clone, Serialize)]
pub struct ActionEvent<'a> {
    pub event: &'static str,
    #[serde(flatten)]
    pub report: &'a ActionReport,
}

impl<'a> ActionEvent<'a> {
    pub fn new(report: &'a ActionReport) -> Self {
        Self {
            event: "action",
            report,
        }
    }
}

/// Full ledger snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct LedgerEvent<'a> {
    pub event: &'static str,
    pub source: &'a str,
    #[serde(flatten)]
    pub view: &'a LedgerView,
}

impl<'a> LedgerEvent<'a> {
    pub fn new(source: &'a str, view: &'a LedgerView) -> Self {
        Self {
            event: "ledger",
            source,
            view,
        }
    }
}

/// Event emitted when a command completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
        }
    }

    pub fn failure(command: &'a str) -> Self {
        Self {
            success: false,
            ..Self::success(command)
        }
    }
}
