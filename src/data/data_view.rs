use std::ops::Range;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::data::datatable::{DataRow, DataTable};

/// A paged view over a DataTable. The view never copies or modifies the
/// underlying rows; it only tracks which page slice is visible.
#[derive(Debug, Clone)]
pub struct DataView {
    /// The underlying immutable data source
    source: Arc<DataTable>,

    /// Rows per page, always at least 1
    page_size: usize,

    /// 1-based page number
    current_page: usize,
}

impl DataView {
    /// Create a view positioned on the first page
    pub fn new(source: Arc<DataTable>, page_size: usize) -> Self {
        let page_size = if page_size == 0 {
            warn!(target: "pagination", "Page size 0 requested, using 1");
            1
        } else {
            page_size
        };

        Self {
            source,
            page_size,
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// ceil(rows / page_size); 0 for an empty dataset
    pub fn total_pages(&self) -> usize {
        self.source.row_count().div_ceil(self.page_size)
    }

    /// Move to page `page`. Out-of-range requests are ignored and leave the
    /// current page unchanged.
    pub fn set_page(&mut self, page: usize) -> bool {
        let total = self.total_pages();
        if page < 1 || page > total {
            debug!(
                target: "pagination",
                "Ignoring page {} (valid range 1..={})", page, total
            );
            return false;
        }

        if page != self.current_page {
            debug!(target: "pagination", "Page {} -> {}", self.current_page, page);
        }
        self.current_page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.set_page(self.current_page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        // page 0 is rejected by set_page
        self.set_page(self.current_page.saturating_sub(1))
    }

    /// Global index range of the current page, clipped to the dataset
    pub fn page_range(&self) -> Range<usize> {
        let len = self.source.row_count();
        let start = ((self.current_page - 1) * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }

    /// Records of the current page
    pub fn visible_slice(&self) -> &[DataRow] {
        self.source
            .rows
            .get(self.page_range())
            .unwrap_or_default()
    }

    pub fn page_row_count(&self) -> usize {
        self.page_range().len()
    }

    /// Translate a page-local row index into a global dataset index. `None`
    /// when the result does not fit in `usize`.
    pub fn to_global_index(&self, page_local_index: usize) -> Option<usize> {
        (self.current_page - 1)
            .checked_mul(self.page_size)?
            .checked_add(page_local_index)
    }

    /// Translate a global index into its position on the current page, if
    /// the row is on this page
    pub fn to_local_index(&self, global_index: usize) -> Option<usize> {
        let range = self.page_range();
        if range.contains(&global_index) {
            Some(global_index - range.start)
        } else {
            None
        }
    }

    /// Look up a record by global index, independent of the current page
    pub fn get_record(&self, global_index: usize) -> Option<&DataRow> {
        self.source.get_row(global_index)
    }

    /// Get the source DataTable
    pub fn source(&self) -> &DataTable {
        &self.source
    }
}
