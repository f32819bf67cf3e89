use anyhow::{anyhow, Result};

use crate::dom::Element;
use crate::observer::ExtractionObserver;

/// Walks `selectors` in order and returns the first value `read` accepts.
///
/// `read` returns `Ok(None)` to reject a matched element; query errors and
/// rejections are reported to the observer and the next selector is tried.
pub fn first_accepted<E, F>(
    element: &E,
    field: &str,
    selectors: &[&str],
    observer: &dyn ExtractionObserver,
    mut read: F,
) -> Option<String>
where
    E: Element,
    F: FnMut(&E) -> Result<Option<String>>,
{
    for selector in selectors {
        match element.find_element(selector).and_then(|found| read(&found)) {
            Ok(Some(value)) => return Some(value),
            Ok(None) => {
                observer.selector_missed(field, selector, &anyhow!("Value rejected"));
            }
            Err(e) => observer.selector_missed(field, selector, &e),
        }
    }
    None
}

/// Non-empty trimmed text of the element.
pub fn non_empty_text<E: Element>(found: &E) -> Result<Option<String>> {
    let text = found.text()?;
    let text = text.trim();

    Ok((!text.is_empty()).then(|| text.to_string()))
}

/// Value of attribute `name` when it contains `needle`.
pub fn attribute_containing<E: Element>(
    found: &E,
    name: &str,
    needle: &str,
) -> Result<Option<String>> {
    Ok(found
        .attribute(name)?
        .filter(|value| value.contains(needle)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::HtmlElement;
    use crate::observer::SilentObserver;
    use scraper::Html;

    #[test]
    fn first_matching_selector_wins() {
        let document = Html::parse_fragment(
            r#"<p class="a">from a</p><p class="b">from b</p>"#,
        );
        let root = HtmlElement::root(&document);

        let value = first_accepted(&root, "test", &["p.a", "p.b"], &SilentObserver, non_empty_text);
        assert_eq!(value.as_deref(), Some("from a"));
    }

    #[test]
    fn rejected_values_fall_through() {
        let document = Html::parse_fragment(
            r#"<p class="a">   </p><p class="b">from b</p>"#,
        );
        let root = HtmlElement::root(&document);

        let value = first_accepted(
            &root,
            "test",
            &["span.missing", "p.a", "p.b"],
            &SilentObserver,
            non_empty_text,
        );
        assert_eq!(value.as_deref(), Some("from b"));
    }

    #[test]
    fn attribute_must_contain_needle() {
        let document = Html::parse_fragment(r#"<a href="/tag/x">x</a>"#);
        let root = HtmlElement::root(&document);
        let anchor = root.find_element("a").unwrap();

        assert_eq!(
            attribute_containing(&anchor, "href", "/tag/").unwrap().as_deref(),
            Some("/tag/x")
        );
        assert_eq!(attribute_containing(&anchor, "href", "/video/").unwrap(), None);
        assert_eq!(attribute_containing(&anchor, "src", "/tag/").unwrap(), None);
    }
}
