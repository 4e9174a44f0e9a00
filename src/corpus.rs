use std::ops::Range;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::error::{Result, ScrapeError};
use crate::fetch::PageSource;
use crate::model::{Corpus, YearRecord};
use crate::parser;

/// Fetch and parse every category of one ceremony year.
pub fn scrape_year(source: &impl PageSource, year: i32) -> Result<YearRecord> {
    let html = source.fetch(year)?;
    let categories = parser::parse_page(&html)?;
    debug!(year, categories = categories.len(), "parsed ceremony");
    Ok(YearRecord { year, categories })
}

/// Scrape `years` in order. The first failing year aborts the whole build.
pub fn build_corpus(
    source: &impl PageSource,
    years: Range<i32>,
    pb: &ProgressBar,
) -> Result<Corpus> {
    let mut corpus = Vec::with_capacity(years.len());
    for year in years {
        pb.set_message(year.to_string());
        info!(year, "scraping ceremony");
        let record = scrape_year(source, year).map_err(|e| ScrapeError::Year {
            year,
            source: Box::new(e),
        })?;
        corpus.push(record);
        pb.inc(1);
    }
    Ok(corpus)
}

/// Progress bar over the year range; the message shows the current year.
pub fn year_progress(years: &Range<i32>) -> Result<ProgressBar> {
    let pb = ProgressBar::new(years.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );
    Ok(pb)
}

// ── Tests ──
