pub mod config;
pub mod controls;
pub mod error;
pub mod pagination;
pub mod web;

pub use controls::{Callbacks, Control, PageState, PaginationHandler, dispatch};
pub use error::PagerError;
pub use pagination::{PageSizeChoice, PageSlot, PaginationRequest, PaginationView, compute};
