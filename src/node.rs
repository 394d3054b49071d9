//! Owned, read-only element tree in the text/tail shape the pretty-printer
//! walks.
//!
//! Each element carries:
//! - **text**: the text inside it, before its first child element
//! - **tail**: the text after its closing tag, before the next sibling
//!
//! ```html
//! <div>
//!   TEXT OF DIV
//!   <span>inner</span>
//!   TAIL OF SPAN
//! </div>
//! ```

use ego_tree::iter::Children;
use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node as DomNode};

/// One element of a parsed tree, or the tagless document root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    /// Lowercase tag name; `None` for the document root
    pub tag: Option<String>,
    /// Attributes in source order
    pub attributes: Vec<(String, String)>,
    /// Text before the first child element
    pub text: Option<String>,
    /// Text after this element's closing tag
    pub tail: Option<String>,
    /// Child elements in document order
    pub children: Vec<Node>,
}

impl Node {
    /// A tagless root node.
    pub fn root() -> Self {
        Self::default()
    }

    /// An element node with the given tag and nothing else.
    pub fn element(tag: impl Into<String>) -> Self {
        let mut node = Self::default();
        node.tag = Some(tag.into());
        node
    }

    /// Append an attribute after the existing ones.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Set the text before the first child.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the text after the closing tag.
    pub fn with_tail(mut self, tail: impl Into<String>) -> Self {
        self.tail = Some(tail.into());
        self
    }

    /// Append a child element.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Tag name, with the empty string treated as no tag.
    pub fn tag_name(&self) -> Option<&str> {
        self.tag.as_deref().filter(|tag| !tag.is_empty())
    }

    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    /// Build the tree for a whole parsed document. The result is a tagless
    /// root whose children are the top-level elements.
    pub fn from_document(html: &Html) -> Self {
        build(Frame::new(Self::root(), html.tree.root()))
    }

    /// Build the tree rooted at a single element. The returned node has no
    /// tail, even if the element is followed by text in its document.
    pub fn from_element(element: ElementRef<'_>) -> Self {
        build(Frame::element(element))
    }
}

// Children are released on a work list so dropping a deep tree does not
// recurse once per level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// An element under construction and the source children not yet visited.
struct Frame<'a> {
    node: Node,
    pending: Children<'a, DomNode>,
}

impl<'a> Frame<'a> {
    fn new(node: Node, source: NodeRef<'a, DomNode>) -> Self {
        Self {
            node,
            pending: source.children(),
        }
    }

    fn element(element: ElementRef<'a>) -> Self {
        let value = element.value();
        let mut node = Node::element(value.name().to_ascii_lowercase());
        node.attributes = value
            .attrs()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Self::new(node, *element)
    }
}

// Depth-first on an explicit stack of open elements; a finished element is
// attached to the frame below it.
fn build(root: Frame<'_>) -> Node {
    let mut current = root;
    let mut ancestors = Vec::new();

    loop {
        match current.pending.next() {
            Some(child) => match child.value() {
                DomNode::Text(text) => append_text(&mut current.node, text),
                DomNode::Element(_) => {
                    if let Some(element) = ElementRef::wrap(child) {
                        let opened = Frame::element(element);
                        ancestors.push(std::mem::replace(&mut current, opened));
                    }
                }
                // Comments, doctypes and processing instructions are dropped;
                // the text around them stays contiguous.
                _ => {}
            },
            None => match ancestors.pop() {
                Some(mut parent) => {
                    parent.node.children.push(current.node);
                    current = parent;
                }
                None => return current.node,
            },
        }
    }
}

fn append_text(parent: &mut Node, text: &str) {
    let slot = match parent.children.last_mut() {
        Some(previous) => &mut previous.tail,
        None => &mut parent.text,
    };
    slot.get_or_insert_with(String::new).push_str(text);
}
