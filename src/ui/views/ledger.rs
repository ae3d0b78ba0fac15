//! Ledger screen: header summary plus one card per project

use hwmgr::application::{HardwareRow, LedgerView, ProjectCard};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::meter::UsageMeter;
use crate::ui::widgets::r#box::{Box, BoxStyle};

const CARD_WIDTH: usize = 58;
const METER_WIDTH: usize = 20;

pub struct LedgerScreen<'a> {
    view: &'a LedgerView,
    source: &'a str,
}

impl<'a> LedgerScreen<'a> {
    pub fn new(view: &'a LedgerView, source: &'a str) -> Self {
        Self { view, source }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = render_header(self.view, self.source, supports_color, supports_unicode);

        if self.view.projects.is_empty() {
            out.push('\n');
            out.push_str(&ColoredText::dim("No projects in this dataset.").render(supports_color));
            out.push('\n');
            return out;
        }

        for card in &self.view.projects {
            out.push('\n');
            out.push_str(&render_card(card, supports_color, supports_unicode));
        }
        out
    }
}

pub fn render_header(
    view: &LedgerView,
    source: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Ledger, "hwmgr");
    header.add("Dataset", source);
    for set in &view.sets {
        header.add_chip(format!(
            "{}: {}/{} available",
            set.name, set.available, set.capacity
        ));
    }
    header.add_chip(format!(
        "{}/{} joined",
        view.summary.joined, view.summary.total
    ));
    header.render(supports_color, supports_unicode)
}

pub fn render_card(card: &ProjectCard, supports_color: bool, supports_unicode: bool) -> String {
    let (badge, style, status) = if card.is_member {
        (Icon::Member, BoxStyle::Success, ColoredText::success("Member"))
    } else {
        (Icon::Guest, BoxStyle::Dim, ColoredText::dim("Not a member"))
    };

    let title = format!(
        "{} {} {}  {}",
        badge.colored(supports_color, supports_unicode),
        ColoredText::plain(card.name.as_str())
            .bold()
            .render(supports_color),
        ColoredText::dim(format!("({})", card.id)).render(supports_color),
        status.render(supports_color)
    );

    let mut b = Box::with_title(title).style(style).min_width(CARD_WIDTH);
    if !card.description.is_empty() {
        b.add_line(card.description.as_str());
    }

    let mut meta = Vec::new();
    if !card.tags.is_empty() {
        meta.push(card.tags.join(", "));
    }
    meta.push(format!(
        "{} member{}",
        card.members,
        if card.members == 1 { "" } else { "s" }
    ));
    b.add_line(ColoredText::dim(meta.join(" | ")).render(supports_color));

    for row in &card.rows {
        b.add_empty();
        for line in row_lines(row, card.is_member, supports_color, supports_unicode) {
            b.add_line(line);
        }
    }

    b.render(supports_color, supports_unicode)
}

fn row_lines(
    row: &HardwareRow,
    is_member: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> Vec<String> {
    let name = ColoredText::plain(row.name.as_str())
        .bold()
        .render(supports_color);
    let usage = format!("In use: {}/{}", row.in_use, row.capacity);
    let usage = if row.high_usage {
        ColoredText::warning(usage)
    } else {
        ColoredText::plain(usage)
    };
    let meter = UsageMeter::new(row.utilization_percent, row.high_usage).width(METER_WIDTH);

    let available = format!("{} available", row.available);
    let available = if row.available == 0 {
        ColoredText::error(available)
    } else {
        ColoredText::plain(available)
    };

    vec![
        name,
        format!(
            "  {}  {}",
            usage.render(supports_color),
            meter.render(supports_color, supports_unicode)
        ),
        format!(
            "  Checked out: {}  |  {}  {}",
            row.qty,
            available.render(supports_color),
            controls(row, is_member, supports_color)
        ),
    ]
}

/// `[+] [-]`, with disabled buttons dimmed; guests only see a hint.
fn controls(row: &HardwareRow, is_member: bool, supports_color: bool) -> String {
    if !is_member {
        return ColoredText::dim("join to check out").render(supports_color);
    }

    let button = |label: &str, enabled: bool| {
        if enabled {
            ColoredText::info(label).render(supports_color)
        } else {
            ColoredText::dim(label).render(supports_color)
        }
    };
    format!(
        "{} {}",
        button("[+]", row.can_increase),
        button("[-]", row.can_decrease)
    )
}
