use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The results list lives in the second `view-content` region.
    #[error("page has {found} view-content region(s), results region missing")]
    MissingRegion { found: usize },

    #[error("category block has no view-grouping-header")]
    MissingHeader,

    #[error("category {category:?} has no content block")]
    MissingContent { category: String },

    /// Raised by in-memory page sources.
    #[allow(dead_code)]
    #[error("no page available for ceremony year {0}")]
    MissingPage(i32),

    #[error("ceremony year {year}")]
    Year {
        year: i32,
        #[source]
        source: Box<ScrapeError>,
    },

    #[error("invalid progress bar template")]
    Progress(#[from] indicatif::style::TemplateError),

    #[error("corpus JSON encoding failed")]
    Json(#[from] serde_json::Error),

    #[error("corpus JSON is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("i/o error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
