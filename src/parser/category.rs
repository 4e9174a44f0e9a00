use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
use tracing::debug;

use super::page::element_children;
use crate::error::{Result, ScrapeError};
use crate::model::{AwardEntry, CategoryRecord, CategoryResult, MISSING};

static GROUPING_HEADER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.view-grouping-header").unwrap());
static ACTOR_FIELD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.views-field-field-actor-name").unwrap());
static TITLE_FIELD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.views-field-title").unwrap());

const NOMINEES_LABEL: &str = "Nominees";

/// Parse one `view-grouping` block into `{category: {Winner, Nominees?}}`.
pub fn parse_category(block: ElementRef<'_>) -> Result<CategoryRecord> {
    let category = category_title(block)?;
    let body = element_children(block)
        .into_iter()
        .nth(1)
        .ok_or_else(|| ScrapeError::MissingContent {
            category: category.clone(),
        })?;
    let content = element_children(body);
    let result = split_roles(&content);

    debug!(
        category = %category,
        winners = result.winner.len(),
        nominees = result.nominees.as_ref().map_or(0, Vec::len),
        "parsed category"
    );

    Ok(CategoryRecord { category, result })
}

fn category_title(block: ElementRef<'_>) -> Result<String> {
    let header = block
        .select(&GROUPING_HEADER)
        .next()
        .ok_or(ScrapeError::MissingHeader)?;
    Ok(header.text().collect::<String>().trim().to_string())
}

/// Split a category's content into winner and nominee entries.
///
/// Element 0 is the winner label and is always skipped. When a nominee
/// divider sits at index `s > 0`, entries `1..s` are winners and entries
/// after `s` are nominees; otherwise everything after index 0 is a winner.
pub fn split_roles(content: &[ElementRef<'_>]) -> CategoryResult {
    let tail = content.get(1..).unwrap_or_default();
    match divider_index(content) {
        0 => CategoryResult {
            winner: records(tail),
            nominees: None,
        },
        s => CategoryResult {
            winner: records(&content[1..s]),
            nominees: Some(records(&content[s + 1..])),
        },
    }
}

/// First index past the winner label whose element opens with the literal
/// text `Nominees`, or 0.
pub fn divider_index(content: &[ElementRef<'_>]) -> usize {
    content
        .iter()
        .skip(1)
        .position(|el| is_divider(*el))
        .map_or(0, |i| i + 1)
}

fn is_divider(element: ElementRef<'_>) -> bool {
    element
        .children()
        .next()
        .and_then(|node| node.value().as_text().map(|t| &**t == NOMINEES_LABEL))
        .unwrap_or(false)
}

fn records(entries: &[ElementRef<'_>]) -> Vec<AwardEntry> {
    entries.iter().map(|e| award_entry(*e)).collect()
}

/// Actor name is the key, film title the value.
pub fn award_entry(entry: ElementRef<'_>) -> AwardEntry {
    AwardEntry {
        name: field_value(entry, &ACTOR_FIELD),
        film: field_value(entry, &TITLE_FIELD),
    }
}

fn field_value(entry: ElementRef<'_>, selector: &Selector) -> String {
    entry
        .select(selector)
        .next()
        .and_then(field_text)
        .unwrap_or_else(|| MISSING.to_string())
}

/// Text carried by a field wrapper, if any.
///
/// A rendered field yields its surrounding whitespace plus the content, so the
/// content is the second text node. Exactly two text nodes means the wrapper
/// was rendered empty.
fn field_text(field: ElementRef<'_>) -> Option<String> {
    let texts: Vec<&str> = field.text().collect();
    match texts.as_slice() {
        [_, _] => None,
        [_, content, ..] => Some(content.trim().to_string()),
        _ => texts
            .iter()
            .map(|t| t.trim())
            .find(|t| !t.is_empty())
            .map(str::to_string),
    }
}

// ── Tests ──
