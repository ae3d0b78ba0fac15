use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Member,
    Guest,
    Ledger,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        use theme::{icons as u, icons_ascii as a};

        let (unicode, ascii) = match self {
            Icon::Success => (u::SUCCESS, a::SUCCESS),
            Icon::Error => (u::ERROR, a::ERROR),
            Icon::Warning => (u::WARNING, a::WARNING),
            Icon::Arrow => (u::ARROW, a::ARROW),
            Icon::Member => (u::MEMBER, a::MEMBER),
            Icon::Guest => (u::GUEST, a::GUEST),
            Icon::Ledger => (u::LEDGER, a::LEDGER),
        };
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Member => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Arrow | Icon::Guest => theme::colors::DIM,
            Icon::Ledger => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
