//! Terminal UI for the hwmgr binary.
//!
//! - `theme`: design tokens (colors, icons, borders)
//! - `primitives` / `widgets` / `blocks`: building blocks, smallest first
//! - `views`: whole screens
//! - `json`: NDJSON events for `--json`

pub mod blocks;
pub mod context;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
