use anyhow::{Context, Result};
use colored::Colorize;
use tokio::task;

use tiktok_scrapping::comments::{ApiCommentSource, CommentSource, NoComments};
use tiktok_scrapping::config::config::{AppConfig, SETTINGS_FILE};
use tiktok_scrapping::config::load_config;
use tiktok_scrapping::observer::ConsoleObserver;
use tiktok_scrapping::snapshot::scrape_snapshot;
use tiktok_scrapping::utilities::parse_tiktok_time::RelativeTimeParser;
use tiktok_scrapping::utilities::write_records::{write_csv, write_json};
use tiktok_scrapping::VideoRecord;
use tiktok_scrapping::VideoScraper;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration settings
    let config = match load_config(SETTINGS_FILE) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", format!("Failed to load configuration: {}", e).red());
            return Err(e.into());
        }
    };

    println!("{} {}", config.base.name.bold(), config.base.version);

    let html_content = tokio::fs::read_to_string(&config.file.source_html)
        .await
        .with_context(|| format!("Failed to read {}", config.file.source_html))?;

    // Comment requests block, keep the whole pass off the async workers
    let pass_config = config.clone();
    let records = task::spawn_blocking(move || run_extraction(&html_content, &pass_config))
        .await
        .context("Extraction task panicked")??;

    println!("{}", format!("Extracted {} videos", records.len()).green());

    write_json(&config.file.output_json, &records).await?;
    write_csv(&config.file.output_csv, &records).await?;

    println!(
        "{}",
        format!(
            "Saved {} and {}",
            config.file.output_json, config.file.output_csv
        )
        .green()
    );

    Ok(())
}

fn run_extraction(html_content: &str, config: &AppConfig) -> Result<Vec<VideoRecord>> {
    let observer = ConsoleObserver::new(config.scraping.verbose);
    let time_parser = RelativeTimeParser::new();

    let comments: Box<dyn CommentSource> = if config.comments.enabled {
        Box::new(ApiCommentSource::new(&config.comments)?)
    } else {
        Box::new(NoComments)
    };

    let scraper = VideoScraper::new(&time_parser, comments.as_ref(), &observer);

    scrape_snapshot(html_content, &config.scraping.card_selector, &scraper)
}
