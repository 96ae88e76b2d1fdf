use eframe::egui::{self, Align, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::grid::{PageButton, TableView};

const ROW_HEIGHT: f32 = 20.0;
const HEADER_HEIGHT: f32 = 24.0;

// ---------------------------------------------------------------------------
// Record table
// ---------------------------------------------------------------------------

/// Render the current page of the bound dataset.
pub fn record_table(ui: &mut Ui, view: &TableView) {
    if view.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(RichText::new("No matching records found").italics());
        });
        return;
    }

    let dataset = view.dataset();
    let columns = &dataset.column_names;

    TableBuilder::new(ui)
        .id_salt("records")
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::auto().at_least(60.0).clip(true), columns.len())
        .header(HEADER_HEIGHT, |mut header| {
            for name in columns {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|mut body| {
            for &row in view.page_rows() {
                body.row(ROW_HEIGHT, |mut table_row| {
                    for name in columns {
                        table_row.col(|ui| {
                            ui.label(dataset.cell(row, name));
                        });
                    }
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Pagination footer
// ---------------------------------------------------------------------------

/// Summary, page-size picker and page buttons.
pub fn pagination_footer(ui: &mut Ui, view: &mut TableView, page_sizes: &[usize]) {
    ui.horizontal(|ui: &mut Ui| {
        if let Some(summary) = view.summary() {
            ui.label(summary);
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui: &mut Ui| {
            // right_to_left: add in reverse visual order.
            if ui
                .add_enabled(view.has_next(), egui::Button::new("Next"))
                .clicked()
            {
                view.set_page(view.page() + 1);
            }

            for button in view.page_buttons().into_iter().rev() {
                match button {
                    PageButton::Page(page) => {
                        let current = page == view.page();
                        if ui
                            .selectable_label(current, (page + 1).to_string())
                            .on_hover_text(format!("Page {}", page + 1))
                            .clicked()
                        {
                            view.set_page(page);
                        }
                    }
                    PageButton::Gap => {
                        ui.label("...");
                    }
                }
            }

            if ui
                .add_enabled(view.has_previous(), egui::Button::new("Previous"))
                .clicked()
            {
                view.set_page(view.page().saturating_sub(1));
            }

            ui.separator();

            let mut page_size = view.page_size();
            egui::ComboBox::from_id_salt("page_size")
                .selected_text(format!("{page_size} / page"))
                .show_ui(ui, |ui: &mut Ui| {
                    for &size in page_sizes {
                        ui.selectable_value(&mut page_size, size, size.to_string());
                    }
                });
            if page_size != view.page_size() {
                view.set_page_size(page_size);
            }
        });
    });
}
