use crossterm::style::Stylize;

use crate::ui::primitives::text::visible_width;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStyle {
    #[default]
    Info,
    Success,
    Warning,
    Dim,
}

#[derive(Debug, Default, Clone)]
pub struct Box {
    title: Option<String>,
    content: Vec<String>,
    min_width: usize,
    style: BoxStyle,
}

impl Box {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    /// Pad the inner area to at least this many columns
    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        for part in line.lines() {
            self.content.push(part.to_string());
        }
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let b = theme::borders::for_terminal(supports_unicode);
        let title_rows = self.title.iter().map(String::as_str);
        let rows: Vec<&str> = title_rows
            .chain(self.content.iter().map(String::as_str))
            .collect();

        let inner_width = rows
            .iter()
            .map(|l| visible_width(l))
            .max()
            .unwrap_or(0)
            .saturating_add(2)
            .max(self.min_width)
            .max(2);

        let edge = |s: &str| self.color_border(s, supports_color);
        let mut out = String::new();
        out.push_str(&edge(&format!(
            "{}{}{}",
            b.top_left,
            b.horizontal.repeat(inner_width),
            b.top_right
        )));
        out.push('\n');

        for row in rows {
            let pad = inner_width.saturating_sub(1 + visible_width(row));
            out.push_str(&edge(b.vertical));
            out.push(' ');
            out.push_str(row);
            out.push_str(&" ".repeat(pad));
            out.push_str(&edge(b.vertical));
            out.push('\n');
        }

        out.push_str(&edge(&format!(
            "{}{}{}",
            b.bottom_left,
            b.horizontal.repeat(inner_width),
            b.bottom_right
        )));
        out.push('\n');
        out
    }

    fn color_border(&self, s: &str, supports_color: bool) -> String {
        if !supports_color {
            return s.to_string();
        }

        let color = match self.style {
            BoxStyle::Info => theme::colors::INFO,
            BoxStyle::Success => theme::colors::SUCCESS,
            BoxStyle::Warning => theme::colors::WARNING,
            BoxStyle::Dim => theme::colors::DIM,
        };
        format!("{}", s.with(color))
    }
}
