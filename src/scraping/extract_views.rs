use crate::dom::Element;
use crate::observer::ExtractionObserver;
use crate::scraping::selector_chain::{first_accepted, non_empty_text};

pub const VIEWS_SELECTORS: &[&str] = &["div.css-1dbjc4n", "div[class*='Views']"];

/// Extracts the view counter as displayed (`1.2M`), or an empty string.
pub fn extract_views<E: Element>(element: &E, observer: &dyn ExtractionObserver) -> String {
    first_accepted(element, "views", VIEWS_SELECTORS, observer, non_empty_text)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::HtmlElement;
    use crate::observer::SilentObserver;
    use scraper::Html;

    #[test]
    fn reads_view_counter() {
        let document = Html::parse_fragment(r#"<div class="css-x-DivViews">1.2M</div>"#);
        let root = HtmlElement::root(&document);

        assert_eq!(extract_views(&root, &SilentObserver), "1.2M");
    }

    #[test]
    fn defaults_to_empty_string() {
        let document = Html::parse_fragment(r#"<div class="css-x-DivViews"> </div>"#);
        let root = HtmlElement::root(&document);

        assert_eq!(extract_views(&root, &SilentObserver), "");
    }
}
