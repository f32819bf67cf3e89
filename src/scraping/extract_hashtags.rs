use crate::dom::Element;
use crate::observer::ExtractionObserver;

pub const HASHTAG_SELECTORS: &[&str] = &["a.css-4rbku5-A", "a[href*='/tag/']"];

/// Collects hashtags from every selector, in selector then document order.
///
/// Results are additive: an anchor matched by both selectors is listed twice.
pub fn extract_hashtags<E: Element>(element: &E, observer: &dyn ExtractionObserver) -> Vec<String> {
    let mut hashtags = Vec::new();

    for selector in HASHTAG_SELECTORS {
        let found = match element.find_elements(selector) {
            Ok(found) => found,
            Err(e) => {
                observer.selector_missed("hashtags", selector, &e);
                continue;
            }
        };

        for tag in found {
            match tag.text() {
                Ok(text) => {
                    let text = text.trim();
                    if text.starts_with('#') {
                        hashtags.push(text.to_string());
                    }
                }
                Err(e) => observer.selector_missed("hashtags", selector, &e),
            }
        }
    }

    hashtags
}
