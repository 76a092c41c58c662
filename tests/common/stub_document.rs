use std::cell::RefCell;

use template_fields::extract::error::ExtractError;
use template_fields::markup::document::{MarkupDocument, MarkupNode};

/// Hand-built tree for exercising shapes a real parser never produces
/// (orphans, cycles) and for counting parent visits.
#[derive(Default)]
pub struct StubDocument {
    pub nodes: Vec<StubElement>,
    pub fail_lookup: bool,
    pub parent_visits: RefCell<Vec<usize>>,
}

#[derive(Default, Clone)]
pub struct StubElement {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub parent: Option<usize>,
    /// Rendered text of this node, descendants included.
    pub text: String,
    pub label: Option<String>,
}

impl StubElement {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn parent(mut self, idx: usize) -> Self {
        self.parent = Some(idx);
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }
}

impl StubDocument {
    pub fn new(nodes: Vec<StubElement>) -> Self {
        Self {
            nodes,
            ..Default::default()
        }
    }

    pub fn node(&self, idx: usize) -> StubNode<'_> {
        StubNode { doc: self, idx }
    }
}

#[derive(Clone, Copy)]
pub struct StubNode<'a> {
    doc: &'a StubDocument,
    idx: usize,
}

impl<'a> StubNode<'a> {
    fn element(&self) -> &'a StubElement {
        &self.doc.nodes[self.idx]
    }
}

impl MarkupDocument for StubDocument {
    type Node<'a> = StubNode<'a>;

    fn elements_by_tag<'a>(&'a self, tag: &str) -> Result<Vec<StubNode<'a>>, ExtractError> {
        if self.fail_lookup {
            return Err(ExtractError::malformed(format!("lookup of {} refused", tag)));
        }

        Ok((0..self.nodes.len())
            .filter(|&idx| self.nodes[idx].tag == tag)
            .map(|idx| self.node(idx))
            .collect())
    }
}

impl<'a> MarkupNode for StubNode<'a> {
    fn tag_name(&self) -> String {
        self.element().tag.clone()
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.element()
            .attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.clone())
    }

    fn parent(&self) -> Option<Self> {
        let parent = self.element().parent?;
        self.doc.parent_visits.borrow_mut().push(parent);
        Some(self.doc.node(parent))
    }

    fn text_content(&self) -> String {
        self.element().text.clone()
    }

    fn label_text(&self) -> Option<String> {
        self.element().label.clone()
    }
}
