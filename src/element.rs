//! A single element matched by a query on a [`Document`](crate::Document).

use std::collections::HashSet;
use std::fmt;

use scraper::{ElementRef, Node as DomNode};

use crate::node::Node;
use crate::prettify::{prettify_with, PrettifyOptions};
use crate::whitespace::normalize_whitespace;
use crate::{HtmlsError, Result};

/// A matched element, borrowed from the document it was selected from.
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    inner: ElementRef<'a>,
}

impl<'a> Element<'a> {
    pub fn new(inner: ElementRef<'a>) -> Self {
        Self { inner }
    }

    /// The underlying parser element.
    pub fn element_ref(&self) -> ElementRef<'a> {
        self.inner
    }

    /// The tag name, always lowercase.
    pub fn tag(&self) -> String {
        self.inner.value().name().to_ascii_lowercase()
    }

    /// The text directly inside the element, before its first child
    /// element. `None` when the element starts with a child element or is
    /// empty.
    pub fn text(&self) -> Option<String> {
        let mut text: Option<String> = None;
        for child in self.inner.children() {
            match child.value() {
                DomNode::Text(chunk) => text.get_or_insert_with(String::new).push_str(chunk),
                DomNode::Element(_) => break,
                _ => {}
            }
        }
        text
    }

    /// [`text`](Self::text) with whitespace normalized; empty when there is
    /// no text.
    pub fn text_normalized(&self) -> String {
        self.text()
            .map(|text| normalize_whitespace(&text))
            .unwrap_or_default()
    }

    /// All text inside this element and its descendants, in document
    /// order. Whitespace-only text nodes are left out.
    pub fn alltext(&self) -> String {
        self.inner
            .text()
            .filter(|chunk| !chunk.trim().is_empty())
            .collect()
    }

    /// [`alltext`](Self::alltext) with whitespace normalized.
    pub fn alltext_normalized(&self) -> String {
        normalize_whitespace(&self.alltext())
    }

    /// The value of an attribute.
    ///
    /// Fails with [`HtmlsError::MissingAttribute`] when the element does not
    /// have it.
    pub fn attribute(&self, name: &str) -> Result<&'a str> {
        self.get(name).ok_or_else(|| HtmlsError::MissingAttribute {
            name: name.to_string(),
        })
    }

    /// The value of an attribute, if present.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.inner.value().attr(name)
    }

    /// The value of an attribute, or `default` when it is absent.
    pub fn get_or<'b>(&self, name: &str, default: &'b str) -> &'b str
    where
        'a: 'b,
    {
        self.get(name).unwrap_or(default)
    }

    pub fn hasattribute(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The CSS classes from the `class` attribute, in source order.
    pub fn cssclasses(&self) -> Result<Vec<&'a str>> {
        Ok(self.attribute("class")?.split_whitespace().collect())
    }

    /// The CSS classes from the `class` attribute, as a set.
    pub fn cssclasses_set(&self) -> Result<HashSet<&'a str>> {
        Ok(self.attribute("class")?.split_whitespace().collect())
    }

    /// Whether `class` is one of the element's CSS classes. An element
    /// without a `class` attribute has no classes.
    pub fn hasclass(&self, class: &str) -> bool {
        self.class_set().contains(class)
    }

    /// Whether every class in `classes` is one of the element's CSS
    /// classes.
    pub fn hasclasses<I, S>(&self, classes: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let own = self.class_set();
        classes.into_iter().all(|class| own.contains(class.as_ref()))
    }

    fn class_set(&self) -> HashSet<&'a str> {
        self.get("class")
            .map(|classes| classes.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// The element and its subtree as an owned [`Node`] tree.
    pub fn node(&self) -> Node {
        Node::from_element(self.inner)
    }

    /// Pretty-print the element with default options.
    pub fn prettify(&self) -> String {
        self.prettify_with(&PrettifyOptions::default())
    }

    pub fn prettify_with(&self, options: &PrettifyOptions) -> String {
        prettify_with(&self.node(), options)
    }

    /// Print [`prettify`](Self::prettify) to stdout.
    pub fn prettyprint(&self) {
        println!("{}", self.prettify());
    }
}

impl fmt::Display for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.html())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::{Document, HtmlsError};

    fn one(html: &str, f: impl FnOnce(crate::Element<'_>)) {
        let doc = Document::parse(html);
        f(doc.one("a").unwrap());
    }

    #[test]
    fn test_tag() {
        one(r#"<a class="btn">Tst</a>"#, |a| assert_eq!(a.tag(), "a"));
        one(r#"<A CLASS="btn">Tst</A>"#, |a| assert_eq!(a.tag(), "a"));
    }

    #[test]
    fn test_text() {
        one(r#"<a class="btn">Tst</a>"#, |a| {
            assert_eq!(a.text().as_deref(), Some("Tst"))
        });
        one("<a>before<b>bold</b>after</a>", |a| {
            assert_eq!(a.text().as_deref(), Some("before"))
        });
        one("<a><b>bold</b>after</a>", |a| assert_eq!(a.text(), None));
        one("<a></a>", |a| {
            assert_eq!(a.text(), None);
            assert_eq!(a.text_normalized(), "");
        });
    }

    #[test]
    fn test_text_normalized() {
        one(r#"<a class="btn">Hello world</a>"#, |a| {
            assert_eq!(a.text_normalized(), "Hello world")
        });
        one("<a class=\"btn\">   Hello\n\tworld\n\t</a>", |a| {
            assert_eq!(a.text_normalized(), "Hello world")
        });
        one("<a>Cruel&nbsp;&nbsp;World</a>", |a| {
            assert_eq!(a.text_normalized(), "Cruel World")
        });
    }

    #[test]
    fn test_alltext() {
        one("<a>\n  Hello <b>big</b>\n  <i>wide</i> world  \n</a>", |a| {
            assert_eq!(a.alltext(), "\n  Hello bigwide world  \n");
            assert_eq!(a.alltext_normalized(), "Hello bigwide world");
        });
    }

    #[test]
    fn test_attributes() {
        one(r##"<a class="btn" href="#cruel">Tst</a>"##, |a| {
            assert_eq!(a.attribute("href").unwrap(), "#cruel");
            assert_eq!(a.get("href"), Some("#cruel"));
            assert_eq!(a.get("title"), None);
            assert_eq!(a.get_or("title", "none"), "none");
            assert!(a.hasattribute("class"));
            assert!(!a.hasattribute("href-lang"));

            match a.attribute("title") {
                Err(HtmlsError::MissingAttribute { name }) => assert_eq!(name, "title"),
                other => panic!("unexpected result: {:?}", other),
            }
        });
    }

    #[test]
    fn test_cssclasses() {
        one(r#"<a class="btn">Tst</a>"#, |a| {
            assert_eq!(a.cssclasses().unwrap(), vec!["btn"])
        });
        one(r#"<a class=" btn  btn-default ">Tst</a>"#, |a| {
            assert_eq!(a.cssclasses().unwrap(), vec!["btn", "btn-default"]);
            assert_eq!(
                a.cssclasses_set().unwrap(),
                HashSet::from(["btn", "btn-default"])
            );
        });
        one("<a>Tst</a>", |a| {
            assert!(matches!(
                a.cssclasses(),
                Err(HtmlsError::MissingAttribute { .. })
            ));
            assert!(a.cssclasses_set().is_err());
        });
    }

    #[test]
    fn test_hasclass() {
        one(r#"<a class="btn">Tst</a>"#, |a| {
            assert!(a.hasclass("btn"));
            assert!(!a.hasclass("link"));
        });
        one("<a>Tst</a>", |a| assert!(!a.hasclass("btn")));
    }

    #[test]
    fn test_hasclasses() {
        one(r#"<a class="btn btn-default btn-lg">Tst</a>"#, |a| {
            assert!(a.hasclasses(["btn", "btn-default"]));
            assert!(a.hasclasses(["btn", "btn-default", "btn-lg"]));
            assert!(!a.hasclasses(["btn", "missing"]));
            assert!(a.hasclasses(vec!["btn-lg".to_string()]));
        });
        one("<a>Tst</a>", |a| {
            assert!(!a.hasclasses(["btn"]));
            assert!(a.hasclasses(Vec::<&str>::new()));
        });
    }

    #[test]
    fn test_prettify_element() {
        let doc = Document::parse(
            r#"<p>before <a href="x" class="btn">Go <b>now</b></a> after</p>"#,
        );
        let a = doc.one("a").unwrap();
        assert_eq!(
            a.prettify(),
            "<a href=\"x\" class=\"btn\">\n    Go\n    <b>\n        now\n    </b>\n</a>"
        );
        assert_eq!(a.node().attribute("class"), Some("btn"));
    }

    #[test]
    fn test_display() {
        let doc = Document::parse(r#"<a class="btn">Tst</a>"#);
        assert_eq!(doc.one("a").unwrap().to_string(), r#"<a class="btn">Tst</a>"#);
    }
}
