use chrono::{DateTime, Duration, Local};
use serde::Serialize;

use crate::dom::Element;
use crate::observer::ExtractionObserver;
use crate::utilities::parse_tiktok_time::TimeParser;

pub const TIME_SELECTORS: &[&str] = &["div.css-dennn6-DivTimeTag", "div[class*='TimeTag']"];

/// Only posts this recent are kept.
pub const POST_WINDOW_HOURS: i64 = 24;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostedTime {
    pub posted_time: String,
    pub posted_timestamp: f64,
}

/// Extracts the posted time of a card and checks it against the time window.
///
/// The first selector with non-empty text decides; a parser error on that text
/// falls through to the next selector. The fallback selector also matches the
/// primary node, so an empty or unparsable primary label is read again and the
/// card is dropped. Returns `None` when the card has no
/// usable time or was posted outside `[now - 24h, now]`, with `now` taken
/// after parsing.
pub fn extract_posted_time<E: Element>(
    element: &E,
    parser: &dyn TimeParser,
    observer: &dyn ExtractionObserver,
) -> Option<PostedTime> {
    let mut resolved: Option<(String, DateTime<Local>)> = None;

    for selector in TIME_SELECTORS {
        let text = match element.find_element(selector).and_then(|found| found.text()) {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                observer.selector_missed("posted_time", selector, &e);
                continue;
            }
        };
        if text.is_empty() {
            continue;
        }

        match parser.parse(&text) {
            Ok(posted) => {
                resolved = Some((text, posted));
                break;
            }
            Err(e) => observer.field_failed("posted_time", &e),
        }
    }

    let (posted_time, posted) = resolved?;
    if !within_window(posted, Local::now()) {
        return None;
    }

    Some(PostedTime {
        posted_time,
        posted_timestamp: posted.timestamp_millis() as f64 / 1000.0,
    })
}

/// `now - 24h <= posted <= now`, both ends inclusive.
pub fn within_window(posted: DateTime<Local>, now: DateTime<Local>) -> bool {
    now - Duration::hours(POST_WINDOW_HOURS) <= posted && posted <= now
}
