pub mod config;
pub mod error;
pub mod pager;
pub mod render;

pub use error::{AppError, PagerError, RenderError};
pub use pager::{DEFAULT_WINDOW_SIZE, PageLink, PageWindow, compute_page_window, total_pages_for};
