use anyhow::{anyhow, Result};
use scraper::{ElementRef, Html, Selector};

use crate::dom::Element;

/// `Element` backed by a parsed `scraper` document.
#[derive(Clone, Copy, Debug)]
pub struct HtmlElement<'a> {
    element: ElementRef<'a>,
}

impl<'a> HtmlElement<'a> {
    pub fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// The `<html>` root of a parsed document.
    pub fn root(document: &'a Html) -> Self {
        Self::new(document.root_element())
    }
}

pub fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| anyhow!("Invalid selector `{}`: {:?}", selector, e))
}

impl<'a> Element for HtmlElement<'a> {
    fn find_element(&self, selector: &str) -> Result<Self> {
        let parsed = parse_selector(selector)?;

        self.element
            .select(&parsed)
            .next()
            .map(HtmlElement::new)
            .ok_or_else(|| anyhow!("No element matches `{}`", selector))
    }

    fn find_elements(&self, selector: &str) -> Result<Vec<Self>> {
        let parsed = parse_selector(selector)?;

        Ok(self.element.select(&parsed).map(HtmlElement::new).collect())
    }

    fn text(&self) -> Result<String> {
        let raw = self.element.text().collect::<String>();

        Ok(raw.split_whitespace().collect::<Vec<_>>().join(" "))
    }

    fn attribute(&self, name: &str) -> Result<Option<String>> {
        Ok(self.element.value().attr(name).map(String::from))
    }
}
