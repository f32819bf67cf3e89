pub mod html_element;

use anyhow::Result;

pub use html_element::HtmlElement;

/// Minimal view of a DOM node that the extractors need.
///
/// Every query is fallible so a live browser backend (stale or detached nodes)
/// and a static HTML backend can both sit behind it.
pub trait Element: Sized {
    /// First descendant matching `selector`, or an error when nothing matches.
    fn find_element(&self, selector: &str) -> Result<Self>;

    /// All descendants matching `selector`, in document order.
    fn find_elements(&self, selector: &str) -> Result<Vec<Self>>;

    /// Rendered text with whitespace collapsed.
    fn text(&self) -> Result<String>;

    fn attribute(&self, name: &str) -> Result<Option<String>>;
}
