use crate::dom::Element;
use crate::observer::ExtractionObserver;
use crate::scraping::selector_chain::{attribute_containing, first_accepted};

pub const THUMBNAIL_SELECTORS: &[&str] = &["img.css-1dbjc4n", "img[src*='webp']"];

/// Extracts the `.webp` cover image of the card, or an empty string.
pub fn extract_thumbnail<E: Element>(element: &E, observer: &dyn ExtractionObserver) -> String {
    first_accepted(element, "thumbnail", THUMBNAIL_SELECTORS, observer, |image| {
        attribute_containing(image, "src", ".webp")
    })
    .unwrap_or_default()
}
