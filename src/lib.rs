//! A small toolkit for testing HTML output with CSS selectors.
//!
//! This crate parses an HTML string with an HTML5 parser, selects elements
//! with CSS selectors, and offers convenient accessors for the things tests
//! usually check: tag names, text with normalized whitespace, attributes
//! and CSS classes. When a test fails, the parsed document can be
//! pretty-printed to see what the parser actually built.
//!
//! # Example
//! ```ignore
//! use htmls::Document;
//!
//! let doc = Document::parse(r##"
//!     <a href="#hello">Hello</a>
//!     <a href="#cruel" class="btn btn-default btn-lg">
//!         Cruel
//!         World
//!     </a>
//! "##);
//!
//! assert_eq!(doc.count("a").unwrap(), 2);
//! assert!(doc.one("a").is_err());
//!
//! let button = doc.one("a.btn").unwrap();
//! assert_eq!(button.text_normalized(), "Cruel World");
//! assert!(button.hasclasses(["btn-default", "btn-lg"]));
//! assert_eq!(button.attribute("href").unwrap(), "#cruel");
//!
//! println!("{}", doc.prettify());
//! ```
//!
//! For tests, the assertion macros print the prettified document on failure:
//! ```ignore
//! # use htmls::{assert_count, assert_exists, Document};
//! let doc = Document::parse("<ul><li>A</li><li>B</li></ul>");
//! assert_count!(doc, "li", 2);
//! assert_exists!(doc, "ul > li");
//! ```

/// Asserts that a CSS selector matches exactly `n` elements of a document.
///
/// # Examples
/// ```ignore
/// use htmls::{assert_count, Document};
///
/// let doc = Document::parse("<p>One</p><p>Two</p>");
/// assert_count!(doc, "p", 2);
/// ```
#[macro_export]
macro_rules! assert_count {
    ($document:expr, $selector:expr, $expected:expr $(,)?) => {{
        match (&$document, &$selector, &$expected) {
            (document, selector, expected) => match document.count(selector) {
                Ok(count) => {
                    if count != *expected {
                        panic!(
                            "\n\
                            selector {:?} matched {} elements, expected {}\n\n\
                            document:\n\
                            {}\
                        ",
                            selector,
                            count,
                            expected,
                            document.prettify()
                        );
                    }
                }
                Err(err) => panic!("{}", err),
            },
        }
    }};
}

/// Asserts that a CSS selector matches at least one element of a document.
///
/// # Examples
/// ```ignore
/// use htmls::{assert_exists, Document};
///
/// assert_exists!(Document::parse(r#"<a class="btn">Go</a>"#), "a.btn");
/// ```
#[macro_export]
macro_rules! assert_exists {
    ($document:expr, $selector:expr $(,)?) => {{
        match (&$document, &$selector) {
            (document, selector) => match document.exists(selector) {
                Ok(true) => {}
                Ok(false) => panic!(
                    "\n\
                    selector {:?} did not match any element\n\n\
                    document:\n\
                    {}\
                ",
                    selector,
                    document.prettify()
                ),
                Err(err) => panic!("{}", err),
            },
        }
    }};
}

/// Asserts that a CSS selector matches no element of a document.
#[macro_export]
macro_rules! assert_not_exists {
    ($document:expr, $selector:expr $(,)?) => {{
        match (&$document, &$selector) {
            (document, selector) => match document.exists(selector) {
                Ok(false) => {}
                Ok(true) => panic!(
                    "\n\
                    selector {:?} matched elements but was expected not to\n\n\
                    document:\n\
                    {}\
                ",
                    selector,
                    document.prettify()
                ),
                Err(err) => panic!("{}", err),
            },
        }
    }};
}

/// Asserts that a [`Document`] or [`Element`] pretty-prints to exactly
/// `expected`.
///
/// # Examples
/// ```ignore
/// use htmls::{assert_prettified_eq, Document};
///
/// let doc = Document::parse("<b>Hi</b>");
/// assert_prettified_eq!(doc.one("b").unwrap(), "<b>\n    Hi\n</b>");
/// ```
#[macro_export]
macro_rules! assert_prettified_eq {
    ($subject:expr, $expected:expr $(,)?) => {{
        match (&$subject, &$expected) {
            (subject, expected) => {
                let actual = subject.prettify();
                if actual != *expected {
                    panic!(
                        "\n\
                        prettified output differs\n\n\
                        actual:\n\
                        {}\n\n\
                        expected:\n\
                        {}\
                    ",
                        actual, expected
                    );
                }
            }
        }
    }};
}

#[macro_use]
mod tracing_macros;

mod attributes;
mod document;
mod element;
mod node;
mod prettify;
mod whitespace;

pub use attributes::{encode_attributes, quote_attribute};
pub use document::{Document, ParseHtml, ParseMode};
pub use element::Element;
pub use node::Node;
pub use prettify::{prettify, prettify_text, prettify_with, PrettifyOptions};
pub use whitespace::normalize_whitespace;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HtmlsError {
    #[error("{selector:?} did not match a single element in the given HTML, it matched {count} elements.")]
    NotExactlyOneMatch { selector: String, count: usize },
    #[error("Missing attribute: {name}")]
    MissingAttribute { name: String },
    #[error("Invalid CSS selector {selector:?}: {message}")]
    InvalidSelector { selector: String, message: String },
}

pub type Result<T, E = HtmlsError> = std::result::Result<T, E>;

/// Ready-made pretty-printing configurations
pub mod presets {
    use super::*;

    /// Two-space indentation
    pub fn compact() -> PrettifyOptions {
        PrettifyOptions {
            indent: "  ".to_string(),
            normalize_text: true,
        }
    }

    /// Tab indentation
    pub fn tabs() -> PrettifyOptions {
        PrettifyOptions {
            indent: "\t".to_string(),
            normalize_text: true,
        }
    }

    /// Four-space indentation, text kept line by line instead of collapsed
    pub fn verbatim() -> PrettifyOptions {
        PrettifyOptions {
            indent: "    ".to_string(),
            normalize_text: false,
        }
    }
}
