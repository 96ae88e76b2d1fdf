use std::sync::Arc;

use eframe::egui;

use crate::config::DashConfig;
use crate::data::fetch::Fetcher;
use crate::state::AppState;
use crate::ui::panels::{self, TopBarAction};
use crate::ui::table;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct MoneyDashApp {
    pub state: AppState,
    fetcher: Arc<Fetcher>,
    page_sizes: Vec<usize>,
}

impl MoneyDashApp {
    pub fn new(config: &DashConfig, fetcher: Fetcher) -> Self {
        Self {
            state: AppState::new(config.page_size),
            fetcher: Arc::new(fetcher),
            page_sizes: config.page_size_choices.clone(),
        }
    }
}

impl eframe::App for MoneyDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_fetches();

        // ---- Top panel: source toggle ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            if let Some(TopBarAction::Fetch(source)) = panels::top_bar(ui, &mut self.state) {
                let repaint = ctx.clone();
                self.state
                    .request_fetch(&self.fetcher, source, move || repaint.request_repaint());
            }
        });

        // ---- Bottom panel: pagination ----
        egui::TopBottomPanel::bottom("pagination").show(ctx, |ui| {
            table::pagination_footer(ui, &mut self.state.table, &self.page_sizes);
        });

        // ---- Central panel: search + table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::search_bar(ui, &mut self.state);
            ui.separator();
            egui::ScrollArea::horizontal().show(ui, |ui| {
                table::record_table(ui, &self.state.table);
            });
        });
    }
}
