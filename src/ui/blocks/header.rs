use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone)]
pub struct CommandHeader {
    icon: Icon,
    title: String,
    items: Vec<(String, String)>,
    chips: Vec<String>,
}

impl CommandHeader {
    pub fn new(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            items: Vec::new(),
            chips: Vec::new(),
        }
    }

    pub fn add(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.items.push((label.into(), value.into()));
    }

    /// Short status shown on a single line under the items
    pub fn add_chip(&mut self, chip: impl Into<String>) {
        self.chips.push(chip.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();
        let title = ColoredText::info(self.title.as_str())
            .bold()
            .render(supports_color);
        out.push_str(&format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            title
        ));
        for (label, value) in &self.items {
            out.push_str(&format!(
                "{} {}\n",
                ColoredText::dim(format!("{}:", label)).render(supports_color),
                value
            ));
        }
        if !self.chips.is_empty() {
            let sep = if supports_unicode { "  ·  " } else { "  |  " };
            out.push_str(&self.chips.join(sep));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_ascii_icon_when_unicode_unsupported() {
        let mut header = CommandHeader::new(Icon::Ledger, "hwmgr");
        header.add("Dataset", "built-in reference dataset");

        let rendered = header.render(false, false);
        assert!(rendered.contains("[LEDGER] hwmgr"));
        assert!(rendered.contains("Dataset: built-in reference dataset"));
    }

    #[test]
    fn chips_share_one_line() {
        let mut header = CommandHeader::new(Icon::Ledger, "hwmgr");
        header.add_chip("HW Set A: 12/20 available");
        header.add_chip("1/3 joined");

        let rendered = header.render(false, false);
        assert!(rendered.contains("HW Set A: 12/20 available  |  1/3 joined\n"));
    }
}
