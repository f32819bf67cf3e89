use crate::dom::Element;
use crate::observer::ExtractionObserver;
use crate::scraping::selector_chain::{first_accepted, non_empty_text};

pub const DESCRIPTION_SELECTORS: &[&str] = &["div.css-1dbjc4n", "div[class*='Description']"];

pub fn extract_description<E: Element>(element: &E, observer: &dyn ExtractionObserver) -> String {
    first_accepted(element, "description", DESCRIPTION_SELECTORS, observer, non_empty_text)
        .unwrap_or_default()
}
