pub mod context;
pub mod render;

pub use render::{RenderOptions, Renderer, initialize};
