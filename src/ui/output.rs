use hwmgr::config::ConfigWarning;
use hwmgr::domain::entities::DatasetWarning;

use crate::ui::blocks::warning::WarningBlock;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::WarningEvent;

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        let mut message = format!("Unknown config key '{}' in {}", w.key, location);
        if let Some(suggestion) = &w.suggestion {
            message.push_str(&format!(" (did you mean '{}'?)", suggestion));
        }

        if ui.json {
            let _ = emit_event(&WarningEvent::new("config", message));
        } else {
            eprintln!("{}", message);
        }
    }
}

pub fn print_dataset_warnings(warnings: &[DatasetWarning], ui: &UiContext) {
    if ui.json {
        for w in warnings {
            let _ = emit_event(&WarningEvent::new("dataset", w.to_string()));
        }
        return;
    }

    let mut block = WarningBlock::new("Dataset warnings");
    for w in warnings {
        block.add_line(w.to_string());
    }
    if !block.is_empty() {
        eprint!("{}", block.render(ui.color, ui.unicode));
    }
}
