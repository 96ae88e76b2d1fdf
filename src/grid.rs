use crate::data::filter::matching_indices;
use crate::data::model::Dataset;

/// How many numbered page buttons the footer shows at once.
const PAGE_BUTTONS: usize = 3;

/// One slot in the pagination footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    /// Zero-based page index.
    Page(usize),
    /// "..." between the first/last shortcut and the numbered window.
    Gap,
}

// ---------------------------------------------------------------------------
// TableView – search + pagination over the bound dataset
// ---------------------------------------------------------------------------

/// The table's view state: bound dataset, keyword, and current page.
#[derive(Debug, Clone)]
pub struct TableView {
    dataset: Dataset,
    keyword: String,
    /// Indices of records matching `keyword` (cached).
    visible: Vec<usize>,
    page: usize,
    page_size: usize,
}

impl TableView {
    pub fn new(page_size: usize) -> Self {
        Self {
            dataset: Dataset::default(),
            keyword: String::new(),
            visible: Vec::new(),
            page: 0,
            page_size: page_size.max(1),
        }
    }

    /// Replace the dataset wholesale and go back to the first page.
    ///
    /// The current keyword stays and is applied to the new rows.
    pub fn bind(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        self.page = 0;
        self.refilter();
    }

    pub fn set_search(&mut self, keyword: &str) {
        if self.keyword == keyword {
            return;
        }
        self.keyword = keyword.to_string();
        self.page = 0;
        self.refilter();
    }

    /// Jump to `page`, clamped to the last page.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.page_count().saturating_sub(1));
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    fn refilter(&mut self) {
        self.visible = matching_indices(&self.dataset, &self.keyword);
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of records passing the search.
    pub fn match_count(&self) -> usize {
        self.visible.len()
    }

    /// True when the footer should say "No matching records found".
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn page_count(&self) -> usize {
        self.visible.len().div_ceil(self.page_size)
    }

    /// Record indices shown on the current page.
    pub fn page_rows(&self) -> &[usize] {
        let start = (self.page * self.page_size).min(self.visible.len());
        let end = (start + self.page_size).min(self.visible.len());
        &self.visible[start..end]
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    /// "Showing 4 to 6 of 10 results", or `None` with nothing to show.
    pub fn summary(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let from = self.page * self.page_size + 1;
        let to = ((self.page + 1) * self.page_size).min(self.visible.len());
        Some(format!(
            "Showing {from} to {to} of {} results",
            self.visible.len()
        ))
    }

    /// Footer buttons: a small window of pages around the current one,
    /// with first/last shortcuts when the window does not reach them.
    pub fn page_buttons(&self) -> Vec<PageButton> {
        let pages = self.page_count();
        let current = self.page;
        let window = pages.min(PAGE_BUTTONS);
        if window == 0 {
            return Vec::new();
        }

        let half = window / 2;
        let mut pivot = current.min(half);
        if current + half >= pages {
            pivot = window - (pages - current);
        }

        let mut buttons = Vec::with_capacity(window + 4);
        if pages > window && current > pivot {
            buttons.push(PageButton::Page(0));
            buttons.push(PageButton::Gap);
        }
        buttons.extend((0..window).map(|i| PageButton::Page(current + i - pivot)));
        if pages > window && pages > current + pivot + 1 {
            buttons.push(PageButton::Gap);
            buttons.push(PageButton::Page(pages - 1));
        }
        buttons
    }
}
