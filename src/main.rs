mod corpus;
mod error;
mod fetch;
mod model;
mod parser;
mod settings;
mod writer;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use fetch::HttpFetcher;
use settings::Settings;

#[derive(Parser)]
#[command(
    name = "oscars_scraper",
    about = "Scrape Academy Awards winners and nominees into a JSON file"
)]
struct Cli {
    /// First ceremony year to scrape
    #[arg(long)]
    start: Option<i32>,
    /// Stop before this ceremony year
    #[arg(long)]
    end: Option<i32>,
    /// Output JSON path
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Ceremony page base URL; the year is appended as a path segment
    #[arg(long)]
    base_url: Option<String>,
}

impl Cli {
    fn apply(self, mut settings: Settings) -> Settings {
        if let Some(start) = self.start {
            settings.start_year = start;
        }
        if let Some(end) = self.end {
            settings.end_year = end;
        }
        if let Some(out) = self.out {
            settings.output = out;
        }
        if let Some(base_url) = self.base_url {
            settings.base_url = base_url;
        }
        settings
    }
}

/// `RUST_LOG` wins; otherwise this crate logs at info and dependencies at warn.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn,oscars_scraper=info".into());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let started = Instant::now();
    let settings = Cli::parse().apply(Settings::load().context("Failed to load settings")?);
    settings.validate().context("Invalid year range")?;
    info!(?settings, "Starting academy awards scrape");

    let years = settings.years();
    let fetcher = HttpFetcher::new(&settings.base_url)?;
    let pb = corpus::year_progress(&years)?;
    let result = corpus::build_corpus(&fetcher, years, &pb);
    pb.finish_and_clear();
    let awards = result.context("Scrape aborted, no output written")?;

    writer::write_corpus(&settings.output, &awards)
        .with_context(|| format!("Failed to write {}", settings.output.display()))?;

    println!(
        "Wrote {} ceremonies to {} in {}",
        awards.len(),
        settings.output.display(),
        elapsed_label(started.elapsed())
    );
    Ok(())
}

/// Tenths of a second under a minute, whole seconds above.
fn elapsed_label(d: Duration) -> String {
    let total = d.as_secs();
    let (h, m, s) = (total / 3600, total / 60 % 60, total % 60);
    match (h, m) {
        (0, 0) => format!("{:.1}s", d.as_secs_f64()),
        (0, _) => format!("{}m {:02}s", m, s),
        _ => format!("{}h {:02}m {:02}s", h, m, s),
    }
}

// ── Tests ──
