use std::sync::Arc;

use crate::data::fetch::{spawn_fetch, FetchError, Fetcher, PendingFetch};
use crate::data::model::Dataset;
use crate::data::source::Source;
use crate::grid::TableView;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Source whose data is on screen. Changes only when a fetch lands.
    pub active: Source,

    /// Bound dataset with its search and paging state.
    pub table: TableView,

    /// Error message shown in the top bar.
    pub status_message: Option<String>,

    /// Fetches still running, oldest first.
    pending: Vec<PendingFetch>,
}

impl AppState {
    pub fn new(page_size: usize) -> Self {
        Self {
            active: Source::default(),
            table: TableView::new(page_size),
            status_message: None,
            pending: Vec::new(),
        }
    }

    /// Whether any fetch is in flight.
    pub fn loading(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Start fetching `source` in the background.
    ///
    /// Earlier fetches are not cancelled; whichever finishes last wins.
    pub fn request_fetch<F>(&mut self, fetcher: &Arc<Fetcher>, source: Source, on_done: F)
    where
        F: FnOnce() + Send + 'static,
    {
        log::debug!("Requesting {source} data");
        self.pending
            .push(spawn_fetch(Arc::clone(fetcher), source, on_done));
    }

    /// Apply every fetch that has finished since the last frame.
    ///
    /// Returns true if anything changed.
    pub fn poll_fetches(&mut self) -> bool {
        let mut finished = Vec::new();
        self.pending.retain(|pending| match pending.poll() {
            Some(result) => {
                finished.push((pending.source(), result));
                false
            }
            None => true,
        });

        let changed = !finished.is_empty();
        for (source, result) in finished {
            self.apply_fetch(source, result);
        }
        changed
    }

    /// Transition after a fetch completes.
    ///
    /// Success replaces the dataset and makes `source` active. Failure keeps
    /// what is on screen and reports the error.
    pub fn apply_fetch(&mut self, source: Source, result: Result<Dataset, FetchError>) {
        match result {
            Ok(dataset) => {
                log::debug!("{} -> {source} ({} records)", self.active, dataset.len());
                self.table.bind(dataset);
                self.active = source;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to fetch {source} data: {e}");
                self.status_message = Some(format!("Could not load {source}: {e}"));
            }
        }
    }

    /// Reset control. Deliberately inert until its behaviour is decided.
    pub fn reset(&mut self) {
        log::debug!("Reset clicked; no action is bound to it");
    }
}
