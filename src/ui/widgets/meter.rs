//! Usage meter for one hardware set

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageMeter {
    percent: u8,
    high: bool,
    width: usize,
}

impl UsageMeter {
    pub fn new(percent: u8, high: bool) -> Self {
        Self {
            percent: percent.min(100),
            high,
            width: 20,
        }
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    fn segments(&self) -> (usize, usize) {
        let filled = (self.width * self.percent as usize + 50) / 100;
        let filled = filled.min(self.width);
        (filled, self.width - filled)
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (full, empty) = if supports_unicode {
            theme::meter::UNICODE
        } else {
            theme::meter::ASCII
        };
        let (filled, rest) = self.segments();

        let bar = full.repeat(filled);
        let bar = if self.high {
            ColoredText::warning(bar)
        } else {
            ColoredText::info(bar)
        };

        format!(
            "{}{} {:>3}%",
            bar.render(supports_color),
            ColoredText::dim(empty.repeat(rest)).render(supports_color),
            self.percent
        )
    }
}
