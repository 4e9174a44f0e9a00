use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};

static VIEW_CONTENT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.view-content").unwrap());
static VIEW_GROUPING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.view-grouping").unwrap());

/// Index of the results region among the page's `view-content` regions.
/// The first one is page chrome, not a category list.
const RESULTS_REGION: usize = 1;

/// Return the `view-grouping` blocks of the results region, in page order.
pub fn category_blocks(document: &Html) -> Result<Vec<ElementRef<'_>>> {
    let regions: Vec<ElementRef> = document.select(&VIEW_CONTENT).collect();
    let results = regions
        .get(RESULTS_REGION)
        .ok_or(ScrapeError::MissingRegion {
            found: regions.len(),
        })?;
    Ok(results.select(&VIEW_GROUPING).collect())
}

/// Element children only; whitespace, text and comment nodes are dropped.
pub fn element_children(element: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    element.children().filter_map(ElementRef::wrap).collect()
}

// ── Tests ──
