use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

use crate::comments::{Comment, CommentSource};
use crate::dom::Element;
use crate::observer::ExtractionObserver;
use crate::scraping::{
    extract_author, extract_description, extract_hashtags, extract_posted_time,
    extract_thumbnail, extract_video_url, extract_views,
};
use crate::utilities::extract_id_from_url::extract_id_from_url;
use crate::utilities::parse_tiktok_time::TimeParser;

pub const EXTRACTED_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fields extracted from one video card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoRecord {
    pub posted_time: String,
    pub posted_timestamp: f64,
    pub video_url: String,
    pub thumbnail: String,
    pub description: String,
    pub hashtags: Vec<String>,
    pub author: String,
    pub views: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
    pub extracted_time: String,
}

/// Extracts `VideoRecord`s from video cards.
///
/// Holds no state of its own; the collaborators are borrowed for the whole pass.
pub struct VideoScraper<'a> {
    time_parser: &'a dyn TimeParser,
    comments: &'a dyn CommentSource,
    observer: &'a dyn ExtractionObserver,
}

impl<'a> VideoScraper<'a> {
    pub fn new(
        time_parser: &'a dyn TimeParser,
        comments: &'a dyn CommentSource,
        observer: &'a dyn ExtractionObserver,
    ) -> Self {
        Self {
            time_parser,
            comments,
            observer,
        }
    }

    /// Extracts one card, or `None` when it is older than 24 hours or fails.
    ///
    /// Never returns an error: failures are reported to the observer.
    pub fn extract_video_data<E: Element>(&self, element: &E) -> Option<VideoRecord> {
        match self.try_extract(element) {
            Ok(record) => record,
            Err(e) => {
                self.observer.extraction_failed(&e);
                None
            }
        }
    }

    fn try_extract<E: Element>(&self, element: &E) -> Result<Option<VideoRecord>> {
        let observer = self.observer;

        let posted =
            match extract_posted_time::extract_posted_time(element, self.time_parser, observer) {
                Some(posted) => posted,
                None => {
                    observer.stale_post_skipped();
                    return Ok(None);
                }
            };

        let mut record = VideoRecord {
            posted_time: posted.posted_time,
            posted_timestamp: posted.posted_timestamp,
            video_url: extract_video_url::extract_video_url(element, observer),
            thumbnail: extract_thumbnail::extract_thumbnail(element, observer),
            description: extract_description::extract_description(element, observer),
            hashtags: extract_hashtags::extract_hashtags(element, observer),
            author: extract_author::extract_author(element, observer),
            views: extract_views::extract_views(element, observer),
            comments: None,
            extracted_time: String::new(),
        };

        if !record.video_url.is_empty() {
            observer.comments_requested(&record.video_url);
            let post_id = extract_id_from_url(&record.video_url);
            let comments = self
                .comments
                .extract_comments(post_id)
                .with_context(|| format!("Failed to extract comments for post {}", post_id))?;
            observer.comments_found(comments.len());
            record.comments = Some(comments);
        }

        record.extracted_time = Local::now().format(EXTRACTED_TIME_FORMAT).to_string();

        Ok(Some(record))
    }
}
