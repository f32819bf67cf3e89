use anyhow::Result;
use scraper::Html;

use crate::dom::html_element::parse_selector;
use crate::dom::HtmlElement;
use crate::video_scraper::{VideoRecord, VideoScraper};

pub const DEFAULT_CARD_SELECTOR: &str = "div[class*='DivItemContainer']";

/// Runs the extractor over every video card of a saved page, in document order.
pub fn scrape_snapshot(
    html_content: &str,
    card_selector: &str,
    scraper: &VideoScraper<'_>,
) -> Result<Vec<VideoRecord>> {
    let document = Html::parse_document(html_content);
    let selector = parse_selector(card_selector)?;

    Ok(document
        .select(&selector)
        .map(HtmlElement::new)
        .filter_map(|card| scraper.extract_video_data(&card))
        .collect())
}
