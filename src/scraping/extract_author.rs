use crate::dom::Element;
use crate::observer::ExtractionObserver;
use crate::scraping::selector_chain::{first_accepted, non_empty_text};

/// The first selector is shared with the hashtag chain.
pub const AUTHOR_SELECTORS: &[&str] = &["a.css-4rbku5-A", "a[href*='/user/']"];

pub fn extract_author<E: Element>(element: &E, observer: &dyn ExtractionObserver) -> String {
    first_accepted(element, "author", AUTHOR_SELECTORS, observer, non_empty_text)
        .unwrap_or_default()
}
