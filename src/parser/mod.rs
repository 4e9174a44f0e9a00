pub mod category;
pub mod page;

use scraper::Html;

use crate::error::Result;
use crate::model::CategoryRecord;

/// Two-step pipeline: page → category blocks → category records.
pub fn parse_page(html: &str) -> Result<Vec<CategoryRecord>> {
    let document = Html::parse_document(html);
    page::category_blocks(&document)?
        .into_iter()
        .map(category::parse_category)
        .collect()
}

// ── Tests ──
