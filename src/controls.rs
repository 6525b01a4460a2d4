use std::str::FromStr;

use crate::error::PagerError;
use crate::pagination::{PaginationRequest, PaginationView, compute};

/// A user interaction with the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
    Page(i64),
    PageSize(i64),
}

/// Receives navigation requests. The owner of the page state implements this
/// and recomputes the view afterwards.
pub trait PaginationHandler {
    fn on_page_change(&mut self, page: i64);
    fn on_page_size_change(&mut self, size: i64);
}

/// Adapts a pair of closures to [`PaginationHandler`].
pub struct Callbacks<P, S> {
    pub on_page_change: P,
    pub on_page_size_change: S,
}

impl<P, S> Callbacks<P, S>
where
    P: FnMut(i64),
    S: FnMut(i64),
{
    pub fn new(on_page_change: P, on_page_size_change: S) -> Self {
        Self {
            on_page_change,
            on_page_size_change,
        }
    }
}

impl<P, S> PaginationHandler for Callbacks<P, S>
where
    P: FnMut(i64),
    S: FnMut(i64),
{
    fn on_page_change(&mut self, page: i64) {
        (self.on_page_change)(page)
    }

    fn on_page_size_change(&mut self, size: i64) {
        (self.on_page_size_change)(size)
    }
}

/// Route `control` to `handler`. Returns whether a callback ran.
///
/// Previous/next are inert when the view disables them, and nothing fires on
/// an invisible view since it renders no controls. Page and page-size values
/// are passed through unvalidated.
pub fn dispatch<H>(view: &PaginationView, control: Control, handler: &mut H) -> bool
where
    H: PaginationHandler + ?Sized,
{
    if !view.is_visible {
        tracing::debug!(?control, "ignored control on hidden pagination");
        return false;
    }

    let fired = match control {
        Control::Previous => navigate(handler, view.previous_page),
        Control::Next => navigate(handler, view.next_page),
        Control::Page(page) => navigate(handler, Some(page)),
        Control::PageSize(size) => {
            handler.on_page_size_change(size);
            true
        }
    };

    tracing::debug!(?control, fired, page = view.page, "dispatched control");
    fired
}

/// Page state owned by a caller that drives the bar from a list of controls.
/// A page-size change starts over at page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub page: i64,
    pub page_size: i64,
}

impl PaginationHandler for PageState {
    fn on_page_change(&mut self, page: i64) {
        self.page = page;
    }

    fn on_page_size_change(&mut self, size: i64) {
        self.page_size = size;
        self.page = 1;
    }
}

impl PageState {
    pub fn view(&self, total_items: i64, options: &[i64]) -> Result<PaginationView, PagerError> {
        let request = PaginationRequest::new(self.page, self.page_size, total_items)
            .with_page_size_options(options.to_vec());
        compute(&request)
    }

    /// Apply `controls` in order, recomputing after each one that fires.
    /// Disabled controls leave the state untouched.
    pub fn apply(
        &mut self,
        controls: &[Control],
        total_items: i64,
        options: &[i64],
    ) -> Result<PaginationView, PagerError> {
        let mut view = self.view(total_items, options)?;
        for &control in controls {
            if dispatch(&view, control, self) {
                view = self.view(total_items, options)?;
            } else {
                tracing::warn!(?control, "control is disabled on page {}", view.page);
            }
        }
        Ok(view)
    }
}

fn navigate<H>(handler: &mut H, target: Option<i64>) -> bool
where
    H: PaginationHandler + ?Sized,
{
    match target {
        Some(page) => {
            handler.on_page_change(page);
            true
        }
        None => false,
    }
}

impl FromStr for Control {
    type Err = PagerError;

    /// Parses `prev`, `previous`, `next`, `page:N` and `size:N`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PagerError::InvalidArgument(format!("unknown control '{s}'"));
        match s.trim() {
            "prev" | "previous" => Ok(Control::Previous),
            "next" => Ok(Control::Next),
            other => {
                let (kind, value) = other.split_once(':').ok_or_else(invalid)?;
                let value: i64 = value.trim().parse().map_err(|_| invalid())?;
                match kind.trim() {
                    "page" => Ok(Control::Page(value)),
                    "size" => Ok(Control::PageSize(value)),
                    _ => Err(invalid()),
                }
            }
        }
    }
}
