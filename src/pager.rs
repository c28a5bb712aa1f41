use serde::Serialize;

use crate::error::PagerError;

/// Number of page links shown when the caller does not pick a window size.
pub const DEFAULT_WINDOW_SIZE: u32 = 4;

/// The page numbers to display in a pagination bar, plus the jump targets
/// on either side of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    current_page: u32,
    total_pages: u32,
    window_size: u32,
    pages: Vec<u32>,
    previous_page: Option<u32>,
    next_page: Option<u32>,
}

/// One entry of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub page: u32,
    pub active: bool,
}

/// Compute the page window for `current_page` out of `total_pages`, showing
/// at most `window_size` links.
pub fn compute_page_window(
    current_page: u32,
    total_pages: u32,
    window_size: u32,
) -> Result<PageWindow, PagerError> {
    if total_pages == 0 {
        return Err(PagerError::ZeroTotalPages);
    }
    if current_page == 0 {
        return Err(PagerError::ZeroCurrentPage);
    }
    if current_page > total_pages {
        return Err(PagerError::CurrentPageOutOfRange {
            current: current_page,
            total: total_pages,
        });
    }
    if window_size == 0 {
        return Err(PagerError::ZeroWindowSize);
    }

    let remaining = total_pages - current_page;
    let visible = window_size.min(total_pages);
    let mut forward = remaining.min(window_size);

    // A window with room to spare ahead keeps exactly one page of lookback.
    let mut backward = if current_page == 1 {
        0
    } else {
        (visible - 1).checked_sub(forward).unwrap_or(1)
    };

    // Window would end on the last page with no lookback: shift it back one.
    if backward == 0 && forward > 0 && current_page + forward == total_pages {
        forward -= 1;
        if current_page > 1 {
            backward = 1;
        }
    }

    // Only matters for a window of one.
    let backward = backward.min(visible - 1);

    let first = current_page - backward;
    let last = first.saturating_add(visible - 1).min(total_pages);
    let pages: Vec<u32> = (first..=last).collect();

    let previous_page = (first > 1).then(|| first - 1);
    let next_page = (last < total_pages).then(|| last + 1);

    Ok(PageWindow {
        current_page,
        total_pages,
        window_size,
        pages,
        previous_page,
        next_page,
    })
}

/// Number of pages needed to list `total_items` at `items_per_page` each.
/// An empty list still has one (empty) page.
pub fn total_pages_for(total_items: u64, items_per_page: u32) -> Result<u32, PagerError> {
    if items_per_page == 0 {
        return Err(PagerError::ZeroItemsPerPage);
    }
    if total_items == 0 {
        return Ok(1);
    }
    let pages = total_items.div_ceil(u64::from(items_per_page));
    u32::try_from(pages).map_err(|_| PagerError::TooManyPages {
        items: total_items,
        per_page: items_per_page,
    })
}

impl PageWindow {
    pub fn new(current_page: u32, total_pages: u32, window_size: u32) -> Result<Self, PagerError> {
        compute_page_window(current_page, total_pages, window_size)
    }

    pub fn with_default_window(current_page: u32, total_pages: u32) -> Result<Self, PagerError> {
        compute_page_window(current_page, total_pages, DEFAULT_WINDOW_SIZE)
    }

    /// Build the window for a list of `total_items` split into pages of
    /// `items_per_page`.
    pub fn for_items(
        current_page: u32,
        items_per_page: u32,
        total_items: u64,
        window_size: u32,
    ) -> Result<Self, PagerError> {
        let total_pages = total_pages_for(total_items, items_per_page)?;
        compute_page_window(current_page, total_pages, window_size)
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn window_size(&self) -> u32 {
        self.window_size
    }

    pub fn pages(&self) -> &[u32] {
        &self.pages
    }

    pub fn previous_page(&self) -> Option<u32> {
        self.previous_page
    }

    pub fn next_page(&self) -> Option<u32> {
        self.next_page
    }

    pub fn first_page(&self) -> u32 {
        self.pages[0]
    }

    pub fn last_page(&self) -> u32 {
        self.pages[self.pages.len() - 1]
    }

    pub fn is_current(&self, page: u32) -> bool {
        page == self.current_page
    }

    pub fn links(&self) -> impl Iterator<Item = PageLink> + '_ {
        self.pages.iter().map(|&page| PageLink {
            page,
            active: self.is_current(page),
        })
    }
}
