//! Page-window selection for the pager widget.
//!
//! Every kind's table shares this logic: short page counts enumerate
//! fully, longer ones collapse to a head, tail, or centered window with
//! gap markers. The window shape must match the console's pager exactly.

/// One slot in the rendered pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    /// A clickable page number (1-based).
    Page(u32),
    /// The `...` gap between non-adjacent page numbers.
    Gap,
}

/// Compact page-label sequence for `total_pages` pages with
/// `current` (1-based) highlighted by the caller.
///
/// - `total_pages <= 7`: full enumeration.
/// - `current <= 3`: pages 1-5, gap, last.
/// - `current >= total_pages - 2`: first, gap, last five.
/// - otherwise: first, gap, the three pages around `current`, gap, last.
#[must_use]
pub fn page_window(total_pages: u32, current: u32) -> Vec<PageLabel> {
    if total_pages <= 7 {
        return (1..=total_pages).map(PageLabel::Page).collect();
    }

    if current <= 3 {
        let mut pages: Vec<PageLabel> = (1..=5).map(PageLabel::Page).collect();
        pages.push(PageLabel::Gap);
        pages.push(PageLabel::Page(total_pages));
        return pages;
    }

    if current >= total_pages.saturating_sub(2) {
        let mut pages = vec![PageLabel::Page(1), PageLabel::Gap];
        pages.extend((total_pages.saturating_sub(4)..=total_pages).map(PageLabel::Page));
        return pages;
    }

    vec![
        PageLabel::Page(1),
        PageLabel::Gap,
        PageLabel::Page(current.saturating_sub(1)),
        PageLabel::Page(current),
        PageLabel::Page(current.saturating_add(1)),
        PageLabel::Gap,
        PageLabel::Page(total_pages),
    ]
}

/// Clamp a current-page value after the page count shrank (e.g. a delete
/// removed the last record of the final page). Display-layer concern;
/// the store itself never clamps.
#[must_use]
pub fn clamp_page(current: u32, total_pages: u32) -> u32 {
    if total_pages > 0 && current > total_pages {
        total_pages
    } else {
        current
    }
}
