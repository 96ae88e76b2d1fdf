use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::source::Source;
use crate::state::AppState;

/// What the user asked for in the top bar this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopBarAction {
    Fetch(Source),
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the source toggle, the reset icon and the status line.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) -> Option<TopBarAction> {
    let mut action = None;

    ui.horizontal(|ui: &mut Ui| {
        for source in Source::ALL {
            let label = RichText::new(source.label()).strong();
            if ui.selectable_label(state.active == source, label).clicked() {
                action = Some(TopBarAction::Fetch(source));
            }
        }

        ui.separator();

        if ui
            .button("🔄")
            .on_hover_text("Reset (not available yet)")
            .clicked()
        {
            state.reset();
        }

        if state.loading() {
            ui.spinner();
        }

        ui.separator();

        let ds = state.table.dataset();
        if !ds.is_empty() {
            ui.label(format!(
                "{} {} records, {} matching",
                ds.len(),
                state.active,
                state.table.match_count()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });

    action
}

/// Keyword box above the table; the grid resets to page one on change.
pub fn search_bar(ui: &mut Ui, state: &mut AppState) {
    let mut keyword = state.table.keyword().to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut keyword)
            .hint_text("Type a keyword...")
            .desired_width(240.0),
    );
    if response.changed() {
        state.table.set_search(&keyword);
    }
}
