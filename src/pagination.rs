use serde::{Deserialize, Serialize};

use crate::error::PagerError;

/// Up to this many pages are listed without elision.
const MAX_INLINE_PAGES: i64 = 7;
/// Pages this close to either end snap the window to that end.
const EDGE_PAGES: i64 = 3;

/// Input to [`compute`]: the caller's current pagination state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaginationRequest {
    /// 1-based current page. Not clamped: the caller supplies a valid page.
    pub page: i64,
    pub page_size: i64,
    pub total_items: i64,
    /// Choices offered for changing `page_size`, rendered in the given order.
    #[serde(default)]
    pub page_size_options: Option<Vec<i64>>,
}

impl PaginationRequest {
    pub fn new(page: i64, page_size: i64, total_items: i64) -> Self {
        Self {
            page,
            page_size,
            total_items,
            page_size_options: None,
        }
    }

    pub fn with_page_size_options(mut self, options: Vec<i64>) -> Self {
        self.page_size_options = Some(options);
        self
    }
}

/// One visual unit of the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageSlot {
    Number { page_number: i64, is_current: bool },
    Ellipsis,
}

impl PageSlot {
    pub fn page_number(&self) -> Option<i64> {
        match self {
            PageSlot::Number { page_number, .. } => Some(*page_number),
            PageSlot::Ellipsis => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSizeChoice {
    pub size: i64,
    pub is_active: bool,
}

/// Everything a renderer needs to draw the pagination bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    /// False when everything fits on one page; render nothing at all then.
    pub is_visible: bool,
    pub page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
    pub range_start: i64,
    pub range_end: i64,
    pub items: Vec<PageSlot>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub previous_page: Option<i64>,
    pub next_page: Option<i64>,
    pub page_size_choices: Vec<PageSizeChoice>,
}

/// Compute the pagination bar for `request`.
///
/// Fails with [`PagerError::InvalidArgument`] when `page_size` or `page` is
/// not positive or `total_items` is negative. A `page` past the last page is
/// accepted as-is: the range runs past `total_items`, no slot is current and
/// `can_go_next` is false.
pub fn compute(request: &PaginationRequest) -> Result<PaginationView, PagerError> {
    let PaginationRequest {
        page,
        page_size,
        total_items,
        ..
    } = *request;

    if page_size <= 0 {
        return Err(PagerError::InvalidArgument(format!(
            "page_size must be positive, got {page_size}"
        )));
    }
    if total_items < 0 {
        return Err(PagerError::InvalidArgument(format!(
            "total_items must not be negative, got {total_items}"
        )));
    }
    if page <= 0 {
        return Err(PagerError::InvalidArgument(format!(
            "page must be positive, got {page}"
        )));
    }

    let total_pages = if total_items == 0 {
        1
    } else {
        (total_items - 1) / page_size + 1
    };
    let can_go_previous = page > 1;
    let can_go_next = page < total_pages;

    let view = PaginationView {
        is_visible: total_items > page_size,
        page,
        page_size,
        total_items,
        total_pages,
        range_start: (page - 1).saturating_mul(page_size).saturating_add(1),
        range_end: page.saturating_mul(page_size).min(total_items),
        items: page_window(page, total_pages),
        can_go_previous,
        can_go_next,
        previous_page: can_go_previous.then(|| page - 1),
        next_page: can_go_next.then(|| page + 1),
        page_size_choices: page_size_choices(page_size, request.page_size_options.as_deref()),
    };

    tracing::debug!(
        page,
        total_pages,
        visible = view.is_visible,
        slots = view.items.len(),
        "computed pagination view"
    );
    Ok(view)
}

/// Page numbers and ellipses, always starting at 1 and ending at `total_pages`.
fn page_window(page: i64, total_pages: i64) -> Vec<PageSlot> {
    let (lo, hi) = if total_pages <= MAX_INLINE_PAGES {
        (2, total_pages - 1)
    } else if page <= EDGE_PAGES {
        (2, EDGE_PAGES + 1)
    } else if page >= total_pages - (EDGE_PAGES - 1) {
        (total_pages - (EDGE_PAGES + 1), total_pages - 1)
    } else {
        (page - 1, page + 1)
    };

    let mut anchors = vec![1];
    anchors.extend(lo..=hi);
    if total_pages > 1 {
        anchors.push(total_pages);
    }

    let number = |n: i64| PageSlot::Number {
        page_number: n,
        is_current: n == page,
    };

    let mut slots = Vec::with_capacity(anchors.len() + 2);
    let mut prev: Option<i64> = None;
    for n in anchors {
        if let Some(p) = prev {
            match n - p {
                // Never hide a single page behind an ellipsis.
                2 => slots.push(number(p + 1)),
                gap if gap > 2 => slots.push(PageSlot::Ellipsis),
                _ => {}
            }
        }
        slots.push(number(n));
        prev = Some(n);
    }
    slots
}

fn page_size_choices(page_size: i64, options: Option<&[i64]>) -> Vec<PageSizeChoice> {
    let Some(options) = options else {
        return Vec::new();
    };
    let has_alternatives = options.iter().any(|&size| size != options[0]);
    if !has_alternatives {
        return Vec::new();
    }
    options
        .iter()
        .map(|&size| PageSizeChoice {
            size,
            is_active: size == page_size,
        })
        .collect()
}
