//! Transient per-entry XML subtree.
//!
//! The walker materializes exactly one `entry` subtree at a time; the
//! extractor reads it and the walker drops it before the next entry is
//! parsed. This is what keeps resident memory bounded by one entry
//! regardless of document size.

use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace as XmlNamespace, ResolveResult};
use quick_xml::reader::NsReader;

use crate::types::{UniprotError, UniprotResult};

/// One element of a materialized entry subtree.
///
/// Element names use Clark notation (`{namespace}local`) so lookups stay
/// namespace-exact. Attribute keys are local names; UniProt attributes are
/// never namespace-qualified. Child order is document order.
#[derive(Debug, Clone, Default)]
pub(crate) struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Returns an attribute value by local name.
    pub(crate) fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the first direct child with the given qualified name.
    pub(crate) fn find(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == tag)
    }

    /// Returns all direct children with the given qualified name, in
    /// document order.
    pub(crate) fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == tag)
    }

    /// Returns the accumulated text content of this element.
    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    /// Builds a childless element from a start tag and its resolved
    /// namespace.
    pub(crate) fn from_start(resolve: &ResolveResult, start: &BytesStart) -> UniprotResult<Self> {
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name: qualified_name(resolve, start.local_name().as_ref()),
            attributes,
            text: String::new(),
            children: Vec::new(),
        })
    }

    /// Reads the remainder of the subtree rooted at `root`, whose start tag
    /// has already been consumed, and returns the completed tree.
    ///
    /// The reader is left positioned immediately after the matching end
    /// tag. Reaching end-of-file first is a malformed-input error.
    pub(crate) fn read_subtree<B: BufRead>(
        reader: &mut NsReader<B>,
        root: Element,
        buf: &mut Vec<u8>,
    ) -> UniprotResult<Element> {
        let mut stack: Vec<Element> = vec![root];
        loop {
            buf.clear();
            let (resolve, event) = reader.read_resolved_event_into(buf)?;
            match event {
                Event::Start(start) => {
                    stack.push(Element::from_start(&resolve, &start)?);
                }
                Event::Empty(start) => {
                    let child = Element::from_start(&resolve, &start)?;
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(child);
                    }
                }
                Event::Text(text) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&text.unescape()?);
                    }
                }
                Event::CData(data) => {
                    if let Some(top) = stack.last_mut() {
                        top.text
                            .push_str(&String::from_utf8_lossy(&data.into_inner()));
                    }
                }
                // Stray end tags are rejected by the reader itself, so
                // every End event here pops a matching start.
                Event::End(_) => {
                    if let Some(done) = stack.pop() {
                        match stack.last_mut() {
                            Some(parent) => parent.children.push(done),
                            None => return Ok(done),
                        }
                    }
                }
                Event::Eof => {
                    let element = stack
                        .last()
                        .map(|open| open.name.clone())
                        .unwrap_or_default();
                    return Err(UniprotError::UnexpectedEof { element });
                }
                _ => {}
            }
        }
    }
}

/// Qualifies an element name in Clark notation (`{namespace}local`).
///
/// Elements outside any namespace keep their bare local name, which never
/// matches a qualified tag table entry.
fn qualified_name(resolve: &ResolveResult, local: &[u8]) -> String {
    let local = String::from_utf8_lossy(local);
    match resolve {
        ResolveResult::Bound(XmlNamespace(ns)) => {
            format!("{{{}}}{}", String::from_utf8_lossy(ns), local)
        }
        _ => local.into_owned(),
    }
}
