//! Pretty-printer: renders a [`Node`] tree as indented, human-readable markup.
//!
//! Every tag gets a line of its own, every non-blank text gets a line of its
//! own, and each nesting level adds one indent unit:
//!
//! ```text
//! <ul>
//!     <li>
//!         A test
//!     </li>
//! </ul>
//! ```

use crate::attributes::encode_attributes;
use crate::node::Node;
use crate::whitespace::{dedent, normalize_whitespace};

/// Configuration for pretty-printing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrettifyOptions {
    /// String written once per nesting level
    pub indent: String,
    /// Collapse whitespace inside text to single spaces. When false, text is
    /// only dedented and trimmed, so multi-line text keeps its lines.
    pub normalize_text: bool,
}

impl Default for PrettifyOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            normalize_text: true,
        }
    }
}

impl PrettifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indent unit.
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Turn whitespace normalization of text on or off.
    pub fn normalize_text(mut self, normalize_text: bool) -> Self {
        self.normalize_text = normalize_text;
        self
    }
}

/// Pretty-print a tree with the default options (four-space indent,
/// normalized text).
pub fn prettify(root: &Node) -> String {
    prettify_with(root, &PrettifyOptions::default())
}

/// Pretty-print a tree.
///
/// Tagless nodes (such as the document root) emit no lines of their own and
/// do not add a nesting level. The root's tail is never printed. Lines are
/// joined with `\n`, without a trailing newline.
pub fn prettify_with(root: &Node, options: &PrettifyOptions) -> String {
    let lines = Printer::new(options).print(root);
    trace!(lines = lines.len(), "prettified tree");
    lines.join("\n")
}

/// Dedent, trim and re-indent a block of text.
///
/// # Examples
/// ```ignore
/// use htmls::prettify_text;
///
/// assert_eq!(prettify_text("   Test", ""), "Test");
/// assert_eq!(prettify_text("       Test", "  "), "  Test");
/// ```
pub fn prettify_text(text: &str, indent: &str) -> String {
    dedent(text)
        .trim()
        .split('\n')
        .map(|line| format!("{}{}", indent, line))
        .collect::<Vec<_>>()
        .join("\n")
}

enum Step<'a> {
    Open(&'a Node, usize),
    Close(&'a Node, usize),
}

struct Printer<'a> {
    options: &'a PrettifyOptions,
    lines: Vec<String>,
}

impl<'a> Printer<'a> {
    fn new(options: &'a PrettifyOptions) -> Self {
        Self {
            options,
            lines: Vec::new(),
        }
    }

    // Pre-order walk on an explicit stack so deep documents cannot overflow
    // the call stack. A node's Close step sits below its children's steps.
    fn print(mut self, root: &Node) -> Vec<String> {
        let mut stack = vec![Step::Open(root, 0)];

        while let Some(step) = stack.pop() {
            match step {
                Step::Open(node, depth) => {
                    self.open(node, depth);
                    stack.push(Step::Close(node, depth));
                    let child_depth = if node.tag_name().is_some() {
                        depth + 1
                    } else {
                        depth
                    };
                    stack.extend(
                        node.children
                            .iter()
                            .rev()
                            .map(|child| Step::Open(child, child_depth)),
                    );
                }
                Step::Close(node, depth) => {
                    self.close(node, depth);
                    if !std::ptr::eq(node, root) {
                        if let Some(tail) = &node.tail {
                            self.push_text(tail, depth);
                        }
                    }
                }
            }
        }

        self.lines
    }

    fn open(&mut self, node: &Node, depth: usize) {
        let indent = self.indent(depth);
        let tag = node.tag_name();

        if let Some(tag) = tag {
            let line = if node.attributes.is_empty() {
                format!("{}<{}>", indent, tag)
            } else {
                format!(
                    "{}<{} {}>",
                    indent,
                    tag,
                    encode_attributes(node.attributes.iter().map(|(name, value)| (name, value)))
                )
            };
            self.lines.push(line);
        }

        if let Some(text) = &node.text {
            let text_depth = if tag.is_some() { depth + 1 } else { depth };
            self.push_text(text, text_depth);
        }
    }

    fn close(&mut self, node: &Node, depth: usize) {
        if let Some(tag) = node.tag_name() {
            let line = format!("{}</{}>", self.indent(depth), tag);
            self.lines.push(line);
        }
    }

    fn push_text(&mut self, text: &str, depth: usize) {
        if text.trim().is_empty() {
            return;
        }
        let indent = self.indent(depth);
        let block = if self.options.normalize_text {
            format!("{}{}", indent, normalize_whitespace(text))
        } else {
            prettify_text(text, &indent)
        };
        self.lines.push(block);
    }

    fn indent(&self, depth: usize) -> String {
        self.options.indent.repeat(depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const EXAMPLE_HTML: &str = r#"
        <html>
            <body>
                <a class="btn">Hello world</a>This is a test!<ul><li>A test</li><li>Another test</li></ul>
            </body>
        </html>
    "#;

    const EXAMPLE_PRETTY: &str = r#"<html>
    <head>
    </head>
    <body>
        <a class="btn">
            Hello world
        </a>
        This is a test!
        <ul>
            <li>
                A test
            </li>
            <li>
                Another test
            </li>
        </ul>
    </body>
</html>"#;

    fn document(html: &str) -> Node {
        Node::from_document(&Html::parse_document(html))
    }

    #[test]
    fn test_document_example() {
        assert_eq!(prettify(&document(EXAMPLE_HTML)), EXAMPLE_PRETTY);
    }

    #[test]
    fn test_surrounding_whitespace_is_irrelevant() {
        let compact = r#"<html><body><a class="btn">Hello world</a>This is a test!<ul><li>A test</li><li>Another test</li></ul></body></html>"#;
        assert_eq!(prettify(&document(compact)), EXAMPLE_PRETTY);
        assert_eq!(
            prettify(&document(&format!("\n\n   {}\n\t  ", compact))),
            EXAMPLE_PRETTY
        );
    }

    #[test]
    fn test_hand_built_tree() {
        let tree = Node::element("p")
            .with_attribute("id", "intro")
            .with_attribute("title", r#"say "hi""#)
            .with_text("  Hello  ")
            .with_child(Node::element("b").with_text("big").with_tail("  world\n"))
            .with_child(Node::element("br").with_tail("   "));

        assert_eq!(
            prettify(&tree),
            "<p id=\"intro\" title='say \"hi\"'>\n    Hello\n    <b>\n        big\n    </b>\n    world\n    <br>\n    </br>\n</p>"
        );
    }

    #[test]
    fn test_root_tail_is_not_printed() {
        let tree = Node::element("a").with_text("x").with_tail("after");
        assert_eq!(prettify(&tree), "<a>\n    x\n</a>");
    }

    #[test]
    fn test_tagless_root_does_not_indent() {
        let tree = Node::root()
            .with_text("loose text")
            .with_child(Node::element("i").with_tail("tail"));
        assert_eq!(prettify(&tree), "loose text\n<i>\n</i>\ntail");

        let empty_tag = Node::element("").with_child(Node::element("b"));
        assert_eq!(prettify(&empty_tag), "<b>\n</b>");
    }

    #[test]
    fn test_empty_root() {
        assert_eq!(prettify(&Node::root()), "");
        assert_eq!(prettify(&Node::root().with_text(" \n\t ")), "");
    }

    #[test]
    fn test_indent_depth_matches_nesting() {
        let tree = document("<div><section><p><span>deep</span></p></section></div>");
        let options = PrettifyOptions::new().indent("  ");
        let output = prettify_with(&tree, &options);

        for (tag, depth) in [
            ("html", 0),
            ("body", 1),
            ("div", 2),
            ("section", 3),
            ("p", 4),
            ("span", 5),
        ] {
            let open = format!("<{}>", tag);
            let line = output
                .lines()
                .find(|line| line.trim_start() == open)
                .unwrap();
            assert_eq!(line.len() - line.trim_start().len(), depth * 2, "{}", tag);
        }
    }

    #[test]
    fn test_normalized_text() {
        let tree = Node::element("a").with_text("\n        Cruel\n        World\n    ");
        assert_eq!(prettify(&tree), "<a>\n    Cruel World\n</a>");
    }

    #[test]
    fn test_verbatim_text_keeps_lines() {
        let tree = Node::element("a").with_text("\n        Cruel\n          World\n    ");
        let options = PrettifyOptions::new().normalize_text(false);
        assert_eq!(
            prettify_with(&tree, &options),
            "<a>\n    Cruel\n      World\n</a>"
        );
    }

    #[test]
    fn test_prettify_text() {
        assert_eq!(prettify_text("   Test", ""), "Test");
        assert_eq!(prettify_text("       Test", "  "), "  Test");
        assert_eq!(prettify_text("\n    a\n    b\n", "> "), "> a\n> b");
    }

    #[test]
    fn test_reparse_preserves_structure() {
        let source = r#"<div id="main" class="a b"><p>Some <em>text</em> here</p><ul><li data-x="1">One</li><li>Two</li></ul></div>"#;
        let original = document(source);
        let reparsed = document(&prettify(&original));

        fn shape(node: &Node, out: &mut Vec<String>) {
            if let Some(tag) = node.tag_name() {
                out.push(format!("{} {:?}", tag, node.attributes));
            }
            for text in [&node.text, &node.tail].into_iter().flatten() {
                let text = normalize_whitespace(text);
                if !text.is_empty() {
                    out.push(text);
                }
            }
            for child in &node.children {
                shape(child, out);
            }
        }

        let (mut before, mut after) = (Vec::new(), Vec::new());
        shape(&original, &mut before);
        shape(&reparsed, &mut after);
        assert_eq!(before, after);
    }

    #[test]
    fn test_very_deep_tree() {
        let mut tree = Node::element("span").with_text("leaf");
        for _ in 0..10_000 {
            tree = Node::element("span").with_child(tree);
        }
        let output = prettify_with(&tree, &PrettifyOptions::new().indent(""));
        assert_eq!(output.lines().count(), 2 * 10_001 + 1);
    }
}
