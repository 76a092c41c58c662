use scraper::{ElementRef, Html, Selector};

use crate::extract::error::ExtractError;
use crate::markup::document::{MarkupDocument, MarkupNode};

/// Elements a `<label>` without a `for` attribute can point at.
const LABELABLE_TAGS: [&str; 7] = [
    "button", "input", "meter", "output", "progress", "select", "textarea",
];

// ============================================================================
// scraper-backed document
// ============================================================================

/// A template parsed with the HTML5 algorithm (html5ever via `scraper`).
///
/// Parsing never fails: unclosed tags, custom elements and Angular binding
/// attributes like `[(ngModel)]` are kept the way a browser would keep them.
/// Attribute and tag names come out lowercased.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    /// Parser-reported recoverable errors, useful at `trace` level.
    pub fn parse_errors(&self) -> usize {
        self.html.errors.len()
    }
}

impl MarkupDocument for HtmlDocument {
    type Node<'a> = HtmlElement<'a>;

    fn elements_by_tag<'a>(&'a self, tag: &str) -> Result<Vec<HtmlElement<'a>>, ExtractError> {
        let selector = Selector::parse(tag)
            .map_err(|e| ExtractError::malformed(format!("cannot look up tag '{}': {:?}", tag, e)))?;

        Ok(self.html.select(&selector).map(HtmlElement).collect())
    }
}

// ============================================================================
// Element wrapper
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct HtmlElement<'a>(ElementRef<'a>);

impl<'a> HtmlElement<'a> {
    fn same_node(&self, other: &ElementRef<'a>) -> bool {
        self.0.id() == other.id()
    }

    /// Outermost element of the tree this element belongs to (`<html>`).
    fn root(&self) -> ElementRef<'a> {
        self.0
            .ancestors()
            .filter_map(ElementRef::wrap)
            .last()
            .unwrap_or(self.0)
    }

    fn labels_self(&self, label: &ElementRef<'a>) -> bool {
        match label.value().attr("for") {
            Some(target) => self.0.value().attr("id") == Some(target),
            None => label
                .descendants()
                .filter_map(ElementRef::wrap)
                .find(is_labelable)
                .map(|first| self.same_node(&first))
                .unwrap_or(false),
        }
    }
}

fn is_labelable(el: &ElementRef<'_>) -> bool {
    let name = el.value().name();
    if name == "input" {
        return el.value().attr("type") != Some("hidden");
    }
    LABELABLE_TAGS.contains(&name)
}

impl<'a> MarkupNode for HtmlElement<'a> {
    fn tag_name(&self) -> String {
        self.0.value().name().to_string()
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0
            .value()
            .attr(&name.to_ascii_lowercase())
            .map(str::to_string)
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent().and_then(ElementRef::wrap).map(HtmlElement)
    }

    fn text_content(&self) -> String {
        self.0.text().collect()
    }

    fn label_text(&self) -> Option<String> {
        let selector = Selector::parse("label").ok()?;
        self.root()
            .select(&selector)
            .find(|label| self.labels_self(label))
            .map(|label| label.text().collect())
    }
}
