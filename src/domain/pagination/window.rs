//! Page window arithmetic
//!
//! Everything the engine derives from `(total_count, request)` before it
//! touches the fetch query: the clamped page, its navigation block and the
//! `LIMIT` offset.

use crate::shared::{PageLink, PageRequest};

/// The page a request resolves to, and the block of page links around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub total_count: u64,
    pub page_size: u64,
    pub block_size: u64,
    /// `ceil(total_count / page_size)`, but never below 1
    pub total_pages: u64,
    /// Requested page clamped into `[1, total_pages]`
    pub current_page: u64,
    pub current_block: u64,
    pub start_page: u64,
    /// Last page of the block; may exceed `total_pages` in the final block
    pub end_page: u64,
    pub total_blocks: u64,
    pub offset: u64,
}

impl PageWindow {
    pub fn compute(total_count: u64, request: &PageRequest) -> Self {
        let page_size = request.page_size.max(1);
        let block_size = request.block_size.max(1);

        // An empty result is still one (empty) page.
        let total_pages = total_count.div_ceil(page_size).max(1);

        let current_page = if request.current_page < 1 {
            1
        } else {
            (request.current_page as u64).min(total_pages)
        };

        let current_block = current_page.div_ceil(block_size);
        let start_page = (current_block - 1) * block_size + 1;
        let end_page = current_block.saturating_mul(block_size);
        let total_blocks = total_pages.div_ceil(block_size);
        let offset = (current_page - 1) * page_size;

        Self {
            total_count,
            page_size,
            block_size,
            total_pages,
            current_page,
            current_block,
            start_page,
            end_page,
            total_blocks,
            offset,
        }
    }

    /// Number of rows the fetch for this page should return.
    pub fn expected_rows(&self) -> u64 {
        self.total_count.saturating_sub(self.offset).min(self.page_size)
    }

    pub fn has_previous_block(&self) -> bool {
        self.start_page > 1
    }

    pub fn has_next_block(&self) -> bool {
        self.current_block < self.total_blocks
    }

    /// Navigation for this window: optional «, the block's page numbers,
    /// optional ». A single page gets no navigation at all.
    pub fn links(&self) -> Vec<PageLink> {
        if self.total_pages == 1 {
            return Vec::new();
        }

        let last = self.end_page.min(self.total_pages);
        let mut links = Vec::with_capacity((last - self.start_page + 3) as usize);

        if self.has_previous_block() {
            links.push(PageLink::previous(self.start_page - 1));
        }

        links.extend(
            (self.start_page..=last).map(|idx| PageLink::page(idx, idx == self.current_page)),
        );

        if self.has_next_block() {
            links.push(PageLink::next(self.end_page + 1));
        }

        links
    }
}
