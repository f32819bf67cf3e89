use crate::dom::Element;
use crate::observer::ExtractionObserver;
use crate::scraping::selector_chain::{attribute_containing, first_accepted};

pub const VIDEO_URL_SELECTORS: &[&str] = &[
    "a.css-1g95xhm-AVideoContainer",
    "a[href*='/video/']",
    "a[class*='AVideoContainer']",
];

/// Extracts the link to the video page, or an empty string.
pub fn extract_video_url<E: Element>(element: &E, observer: &dyn ExtractionObserver) -> String {
    first_accepted(element, "video_url", VIDEO_URL_SELECTORS, observer, |link| {
        attribute_containing(link, "href", "/video/")
    })
    .unwrap_or_default()
}
