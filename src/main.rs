use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use siteharvest::CrawlConfig;

/// Dual-mode website scraper: crawls a site from a seed URL, merging a
/// static fetch and a headless-browser render of every page.
#[derive(Parser, Debug)]
#[command(name = "siteharvest", version, about)]
struct Cli {
    /// Seed URL to start crawling from
    url: String,

    /// Maximum number of pages to crawl (unbounded when omitted)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Output directory for images, data files and checkpoints
    #[arg(short, long, default_value = "./harvest")]
    output: PathBuf,

    /// Politeness delay between pages, in milliseconds
    #[arg(long, default_value_t = 2000)]
    delay_ms: u64,

    /// Checkpoint the aggregate dataset every N pages
    #[arg(long, default_value_t = 10)]
    checkpoint_every: usize,

    /// CSS selector of a "next page" link; restricts the crawl to
    /// pagination instead of following every in-scope link
    #[arg(long)]
    next_selector: Option<String>,

    /// Run the browser with a visible window
    #[arg(long)]
    headed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut builder = CrawlConfig::builder()
        .storage_dir(cli.output)
        .start_url(cli.url)
        .politeness_delay_ms(cli.delay_ms)
        .checkpoint_interval(cli.checkpoint_every)
        .headless(!cli.headed);
    if let Some(limit) = cli.limit {
        builder = builder.limit(limit);
    }
    if let Some(selector) = cli.next_selector {
        builder = builder.next_page_selector(selector);
    }
    let config = builder.build()?;

    let outcome = siteharvest::crawl(config).await?;

    println!(
        "crawl {:?}: {} pages, {} images, {} links, {} text runs",
        outcome.state,
        outcome.pages_crawled,
        outcome.dataset.images.len(),
        outcome.dataset.links.len(),
        outcome.dataset.text.len(),
    );
    Ok(())
}
