/// Precondition violations rejected by the page window calculator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PagerError {
    #[error("invalid argument: total pages must be at least 1")]
    ZeroTotalPages,

    #[error("invalid argument: current page must be at least 1")]
    ZeroCurrentPage,

    #[error("invalid argument: current page {current} is beyond the last page {total}")]
    CurrentPageOutOfRange { current: u32, total: u32 },

    #[error("invalid argument: window size must be at least 1")]
    ZeroWindowSize,

    #[error("invalid argument: items per page must be at least 1")]
    ZeroItemsPerPage,

    #[error("invalid argument: {items} items at {per_page} per page exceed the page limit")]
    TooManyPages { items: u64, per_page: u32 },
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level error for the `pagebar` binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    #[error(transparent)]
    Pager(#[from] PagerError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
