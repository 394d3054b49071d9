//! Parsed HTML with CSS-selector queries.

use std::fmt;

use scraper::{Html, Selector};

use crate::element::Element;
use crate::node::Node;
use crate::prettify::{prettify_with, PrettifyOptions};
use crate::{HtmlsError, Result};

/// Something that can turn an HTML string into a parsed tree.
///
/// Implemented by [`ParseMode`] and by any `Fn(&str) -> Html` closure, so a
/// test suite can plug in its own parsing routine.
pub trait ParseHtml {
    fn parse_html(&self, html: &str) -> Html;
}

/// How the built-in HTML5 parser treats its input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Parse as a full document; `html`, `head` and `body` are synthesized
    /// when missing
    #[default]
    Document,
    /// Parse as a fragment of body content
    Fragment,
}

impl ParseHtml for ParseMode {
    fn parse_html(&self, html: &str) -> Html {
        match self {
            ParseMode::Document => Html::parse_document(html),
            ParseMode::Fragment => Html::parse_fragment(html),
        }
    }
}

impl<F> ParseHtml for F
where
    F: Fn(&str) -> Html,
{
    fn parse_html(&self, html: &str) -> Html {
        self(html)
    }
}

/// An HTML string, parsed once, ready to be queried with CSS selectors.
///
/// # Example
/// ```ignore
/// use htmls::Document;
///
/// let doc = Document::parse(r#"<a href="#hello">Hello</a><a class="btn">World</a>"#);
/// assert_eq!(doc.count("a").unwrap(), 2);
/// assert!(doc.one("a").is_err());
/// assert_eq!(doc.one("a.btn").unwrap().text_normalized(), "World");
/// ```
pub struct Document {
    source: String,
    html: Html,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl Document {
    /// Parse `html` as a full HTML5 document.
    pub fn parse(html: impl Into<String>) -> Self {
        Self::parse_with(html, &ParseMode::Document)
    }

    /// Parse `html` with the given parser.
    pub fn parse_with(html: impl Into<String>, parser: &impl ParseHtml) -> Self {
        let source = html.into();
        let html = parser.parse_html(&source);
        Self { source, html }
    }

    /// The string this document was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parsed tree.
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// The whole document as an owned [`Node`] tree with a tagless root.
    pub fn root_node(&self) -> Node {
        Node::from_document(&self.html)
    }

    /// All elements matching `selector`, in document order.
    pub fn list(&self, selector: &str) -> Result<Vec<Element<'_>>> {
        let compiled = compile(selector)?;
        let matches: Vec<_> = self.html.select(&compiled).map(Element::new).collect();
        debug!(selector, count = matches.len(), "selected elements");
        Ok(matches)
    }

    /// Number of elements matching `selector`.
    pub fn count(&self, selector: &str) -> Result<usize> {
        Ok(self.list(selector)?.len())
    }

    /// Whether `selector` matches at least one element.
    pub fn exists(&self, selector: &str) -> Result<bool> {
        let compiled = compile(selector)?;
        Ok(self.html.select(&compiled).next().is_some())
    }

    /// The single element matching `selector`.
    ///
    /// Fails with [`HtmlsError::NotExactlyOneMatch`] when `selector` matches
    /// zero elements or more than one.
    pub fn one(&self, selector: &str) -> Result<Element<'_>> {
        let mut matches = self.list(selector)?;
        if matches.len() != 1 {
            debug!(selector, count = matches.len(), "expected exactly one match");
            return Err(HtmlsError::NotExactlyOneMatch {
                selector: selector.to_string(),
                count: matches.len(),
            });
        }
        Ok(matches.remove(0))
    }

    /// Pretty-print the whole document with default options.
    pub fn prettify(&self) -> String {
        self.prettify_with(&PrettifyOptions::default())
    }

    pub fn prettify_with(&self, options: &PrettifyOptions) -> String {
        prettify_with(&self.root_node(), options)
    }

    /// Print [`prettify`](Self::prettify) to stdout.
    pub fn prettyprint(&self) {
        println!("{}", self.prettify());
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html.html())
    }
}

pub(crate) fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|err| {
        debug!(selector, error = %err, "invalid selector");
        HtmlsError::InvalidSelector {
            selector: selector.to_string(),
            message: err.to_string(),
        }
    })
}
