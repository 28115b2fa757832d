//! Minimal XML element tree
//!
//! `.binds` files are small (a few thousand elements), so the whole document
//! is read into an owned tree with `quick-xml` before the binding nodes are
//! built. Only elements, attributes and text are kept; comments, processing
//! instructions and the XML declaration are dropped.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Structural problems found while reading a document
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The tokenizer rejected the input (bad syntax, mismatched end tag, ...)
    #[error("xml: {0}")]
    Xml(#[from] quick_xml::Error),

    /// No element found at all
    #[error("document has no root element")]
    NoRoot,

    /// A second element appeared after the root was closed
    #[error("unexpected element <{0}> after the root element")]
    TrailingElement(String),

    /// Input ended while elements were still open
    #[error("unexpected end of document inside <{0}>")]
    Unclosed(String),
}

/// A node inside an element's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(Element),
    Text(String),
}

/// An element with its attributes and content, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Local name (namespace prefix stripped)
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl Element {
    /// Create an empty element with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder helper: add an attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Builder helper: append a child element
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    /// Value of the first attribute with this exact name
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Direct child elements, skipping text
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(el) => Some(el),
            XmlNode::Text(_) => None,
        })
    }

    pub fn has_child_elements(&self) -> bool {
        self.child_elements().next().is_some()
    }

    /// All descendant elements in pre-order (document order), excluding `self`
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![self.children.iter()],
        }
    }

    /// Concatenated direct text content
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                XmlNode::Text(t) => Some(t.as_str()),
                XmlNode::Element(_) => None,
            })
            .collect()
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, quick_xml::Error> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, value));
        }
        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
        })
    }
}

/// Pre-order iterator over descendant elements
pub struct Descendants<'a> {
    stack: Vec<std::slice::Iter<'a, XmlNode>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<&'a Element> {
        while let Some(iter) = self.stack.last_mut() {
            match iter.next() {
                Some(XmlNode::Element(el)) => {
                    self.stack.push(el.children.iter());
                    return Some(el);
                }
                Some(XmlNode::Text(_)) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

/// Parse a complete document and return its root element.
pub fn parse_document(xml: &str) -> Result<Element, DocumentError> {
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => open.push(Element::from_start(&e)?),
            Event::Empty(e) => {
                let el = Element::from_start(&e)?;
                attach(&mut open, &mut root, el)?;
            }
            Event::End(_) => {
                // quick-xml checks end names, so an End always has a matching Start
                if let Some(el) = open.pop() {
                    attach(&mut open, &mut root, el)?;
                }
            }
            Event::Text(t) => {
                if let Some(parent) = open.last_mut() {
                    parent.children.push(XmlNode::Text(t.unescape()?.into_owned()));
                }
            }
            Event::CData(c) => {
                if let Some(parent) = open.last_mut() {
                    let text = String::from_utf8_lossy(&c.into_inner()).into_owned();
                    parent.children.push(XmlNode::Text(text));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(DocumentError::Unclosed(unclosed.name.clone()));
    }
    root.ok_or(DocumentError::NoRoot)
}

fn attach(
    open: &mut [Element],
    root: &mut Option<Element>,
    el: Element,
) -> Result<(), DocumentError> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(XmlNode::Element(el));
        return Ok(());
    }
    if root.is_some() {
        return Err(DocumentError::TrailingElement(el.name));
    }
    *root = Some(el);
    Ok(())
}
