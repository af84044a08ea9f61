//! Page arithmetic shared by the list store and pager views.

/// Pages always linked at each end of the pager.
const EDGE_PAGES: usize = 2;
/// Pages linked before the current one.
const PAGES_BEFORE_CURRENT: usize = 2;
/// Pages linked after the current one.
const PAGES_AFTER_CURRENT: usize = 4;

/// Number of pages needed to show `total` items `limit` at a time.
///
/// A `limit` of zero is treated as one so the result is always defined.
pub fn total_pages(total: usize, limit: usize) -> usize {
    total.div_ceil(limit.max(1))
}

/// Page numbers to render in a pager, with `None` marking elided ranges.
///
/// Links `start_edge` pages at the start and `end_edge` at the end, plus
/// `before_current` and `after_current` pages around `current`.
fn pager_window(
    last_page: usize,
    current: usize,
    start_edge: usize,
    before_current: usize,
    after_current: usize,
    end_edge: usize,
) -> Vec<Option<usize>> {
    if last_page == 0 {
        return vec![];
    }

    let mut links = Vec::new();

    let head_end = (1 + start_edge).min(last_page + 1);
    links.extend((1..head_end).map(Some));

    let window_start = head_end.max(current.saturating_sub(before_current));
    let window_end = (current + after_current + 1).min(last_page + 1);
    if window_start > head_end {
        links.push(None);
    }
    links.extend((window_start..window_end).map(Some));

    let tail_start = window_end.max(last_page.saturating_sub(end_edge) + 1);
    if tail_start > window_end {
        links.push(None);
    }
    links.extend((tail_start..=last_page).map(Some));

    links
}

/// Pager links for `current_page` out of `total_pages`.
pub fn page_links(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    let current_page = current_page.clamp(1, total_pages.max(1));
    pager_window(
        total_pages,
        current_page,
        EDGE_PAGES,
        PAGES_BEFORE_CURRENT,
        PAGES_AFTER_CURRENT,
        EDGE_PAGES,
    )
}
