//! Extraction of TikTok video cards from a rendered page.
//!
//! `VideoScraper` turns one card element into a `VideoRecord`, trying a chain of
//! selectors per field and dropping cards posted more than 24 hours ago.
pub mod comments;
pub mod config;
pub mod dom;
pub mod observer;
pub mod scraping;
pub mod snapshot;
pub mod utilities;
pub mod video_scraper;

pub use video_scraper::{VideoRecord, VideoScraper};
