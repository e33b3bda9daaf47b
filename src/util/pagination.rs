//! Client-side pagination over an in-memory list.
//!
//! The page number is 1-based and always kept within `[1, total_pages]`, where an empty list
//! still has one (empty) page.

/// Page state for a list of `total_items` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    total_items: usize,
    items_per_page: usize,
    current_page: usize,
}

impl Paginator {
    /// Create a paginator on page 1. An `items_per_page` of zero is treated as one.
    pub fn new(total_items: usize, items_per_page: usize) -> Self {
        Self {
            total_items,
            items_per_page: items_per_page.max(1),
            current_page: 1,
        }
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page).max(1)
    }

    /// Jump to `page`, clamped to `[1, total_pages]`
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1));
    }

    /// Change the page size and return to page 1
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = items_per_page.max(1);
        self.current_page = 1;
    }

    /// Track a change in the underlying list, keeping the current page if it still exists
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.go_to_page(self.current_page);
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    /// Index of the first item on the current page
    pub fn start_index(&self) -> usize {
        ((self.current_page - 1) * self.items_per_page).min(self.total_items)
    }

    /// Index one past the last item on the current page
    pub fn end_index(&self) -> usize {
        (self.start_index() + self.items_per_page).min(self.total_items)
    }

    /// The items of the current page
    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.start_index().min(items.len());
        let end = self.end_index().min(items.len());

        &items[start..end]
    }

    /// Page numbers to render in a pagination bar, `None` marking an elided gap.
    ///
    /// Always shows the first and last page plus `window` pages on each side of the current one.
    pub fn page_numbers(&self, window: usize) -> Vec<Option<usize>> {
        let total = self.total_pages();
        let low = self.current_page.saturating_sub(window).max(1);
        let high = (self.current_page + window).min(total);

        let mut pages = Vec::new();

        if low > 1 {
            pages.push(Some(1));
            if low > 2 {
                pages.push(None);
            }
        }

        pages.extend((low..=high).map(Some));

        if high < total {
            if high < total - 1 {
                pages.push(None);
            }
            pages.push(Some(total));
        }

        pages
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(0, crate::config::DEFAULT_PAGE_SIZE)
    }
}

/// Page sizes offered by the size selector
pub const STANDARD_PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

/// The standard sizes plus any configured or current size, ascending and without duplicates
pub fn page_size_options(extra: &[usize]) -> Vec<usize> {
    let mut sizes: Vec<usize> = STANDARD_PAGE_SIZES
        .iter()
        .chain(extra)
        .copied()
        .filter(|size| *size > 0)
        .collect();

    sizes.sort_unstable();
    sizes.dedup();
    sizes
}
