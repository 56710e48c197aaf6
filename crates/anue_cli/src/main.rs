use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use anue_core::{FeedPayload, Result};
use anue_feed::{snapshot, FeedSource, HeadlineClient};
use anue_report::{render_page, Section, SectionTables};

#[derive(Parser, Debug)]
#[command(author, version, about = "Static HTML reports from the cnyes headline feed", long_about = None)]
struct Cli {
    /// Feed page to request
    #[arg(long, default_value_t = 1)]
    page: u32,
    /// Number of items per page
    #[arg(long, default_value_t = 50)]
    limit: u32,
    /// Directory receiving the generated HTML documents
    #[arg(long, default_value = "news_html")]
    output_dir: PathBuf,
    /// Path of the raw JSON snapshot
    #[arg(long, default_value = "news.json")]
    snapshot: PathBuf,
}

/// One run: fetch, snapshot, then render. A fetch failure aborts before any
/// file is touched.
async fn run(source: &dyn FeedSource, cli: &Cli) -> Result<()> {
    info!("📰 Fetching headline feed (page {}, limit {})", cli.page, cli.limit);
    let payload = source.fetch(cli.page, cli.limit).await?;
    info!("✨ Fetched {} items", payload.data.len());

    snapshot::write_snapshot(&payload, &cli.snapshot)?;
    info!("💾 Snapshot written to {}", cli.snapshot.display());

    generate_reports(&payload, &cli.output_dir)
}

/// Formats the three windows once, then writes one document per active
/// section into `output_dir` (created on demand).
fn generate_reports(payload: &FeedPayload, output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)?;
    let tables = SectionTables::build(payload);
    for section in Section::ALL {
        let page = render_page(&tables, section);
        let path = output_dir.join(section.file_name());
        fs::write(&path, page)?;
        info!("📄 Wrote {}", path.display());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let client = HeadlineClient::new()?;
    run(&client, &cli).await
}
