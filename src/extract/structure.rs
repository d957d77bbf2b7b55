//! Structural extraction over a document tree
//!
//! All three extractors walk the tree depth-first in document order. Link
//! and image values are recorded exactly as written in the markup; they are
//! neither resolved against a base URL nor validated.

use crate::extract::node::DocumentNode;

/// Visits every node below (and including) `root` in document order
fn walk<N: DocumentNode>(root: N, mut visit: impl FnMut(&N)) {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        visit(&node);
        stack.extend(node.children().into_iter().rev());
    }
}

/// Collects the non-empty `attr` values of every `tag` element
fn collect_attribute<N: DocumentNode>(root: N, tag: &str, attr: &str) -> Vec<String> {
    let mut values = Vec::new();
    walk(root, |node| {
        let matches_tag = node
            .tag_name()
            .map(|name| name.eq_ignore_ascii_case(tag))
            .unwrap_or(false);
        if !matches_tag {
            return;
        }
        match node.attribute(attr) {
            Some(value) if !value.is_empty() => values.push(value.to_string()),
            _ => {}
        }
    });
    values
}

/// Lists the name of every element in document order
///
/// Repeated and nested elements each contribute one entry. Document, text
/// and comment nodes are skipped.
pub fn extract_tag_names<N: DocumentNode>(root: N) -> Vec<String> {
    let mut names = Vec::new();
    walk(root, |node| {
        if let Some(name) = node.tag_name() {
            names.push(name.to_string());
        }
    });
    names
}

/// Lists the `href` of every `<a>` element that has a non-empty one
pub fn extract_links<N: DocumentNode>(root: N) -> Vec<String> {
    collect_attribute(root, "a", "href")
}

/// Lists the `src` of every `<img>` element that has a non-empty one
pub fn extract_images<N: DocumentNode>(root: N) -> Vec<String> {
    collect_attribute(root, "img", "src")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{DocumentParser, HtmlParser, ParsedDocument};

    /// Minimal hand-built tree, independent of any HTML parser
    #[derive(Debug, Clone)]
    struct FakeNode {
        tag: Option<&'static str>,
        attrs: Vec<(&'static str, &'static str)>,
        children: Vec<FakeNode>,
        text: &'static str,
    }

    impl FakeNode {
        fn element(tag: &'static str, children: Vec<FakeNode>) -> Self {
            Self {
                tag: Some(tag),
                attrs: vec![],
                children,
                text: "",
            }
        }

        fn with_attr(mut self, name: &'static str, value: &'static str) -> Self {
            self.attrs.push((name, value));
            self
        }

        fn text_node(text: &'static str) -> Self {
            Self {
                tag: None,
                attrs: vec![],
                children: vec![],
                text,
            }
        }
    }

    impl DocumentNode for FakeNode {
        fn tag_name(&self) -> Option<&str> {
            self.tag
        }

        fn attribute(&self, name: &str) -> Option<&str> {
            self.attrs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value)
        }

        fn children(&self) -> Vec<Self> {
            self.children.clone()
        }

        fn text(&self) -> String {
            let own = self.text.to_string();
            self.children
                .iter()
                .fold(own, |acc, child| acc + &child.text())
        }
    }

    #[test]
    fn test_tag_names_in_document_order() {
        let root = FakeNode::element(
            "div",
            vec![
                FakeNode::element("p", vec![FakeNode::element("b", vec![])]),
                FakeNode::text_node("loose"),
                FakeNode::element("p", vec![]),
            ],
        );
        assert_eq!(extract_tag_names(root), vec!["div", "p", "b", "p"]);
    }

    #[test]
    fn test_tag_name_case_as_given() {
        let root = FakeNode::element("SVG", vec![FakeNode::element("linearGradient", vec![])]);
        assert_eq!(extract_tag_names(root), vec!["SVG", "linearGradient"]);
    }

    #[test]
    fn test_links_and_images_from_fake_tree() {
        let root = FakeNode::element(
            "body",
            vec![
                FakeNode::element("a", vec![]).with_attr("href", "/a"),
                FakeNode::element("a", vec![]),
                FakeNode::element("img", vec![]).with_attr("src", ""),
                FakeNode::element("link", vec![]).with_attr("href", "/style.css"),
            ],
        );
        assert_eq!(extract_links(root.clone()), vec!["/a"]);
        assert!(extract_images(root).is_empty());
    }

    #[test]
    fn test_html_links_and_images() {
        let doc = HtmlParser.parse(
            r#"<html><body>
                <a href="/a">first</a>
                <a>no target</a>
                <img src="">
            </body></html>"#,
        );
        assert_eq!(extract_links(doc.root()), vec!["/a"]);
        assert!(extract_images(doc.root()).is_empty());
    }

    #[test]
    fn test_html_values_kept_raw() {
        let doc = HtmlParser.parse(
            r##"<a href="#top">t</a><a href="javascript:void(0)">j</a>
                <a href="../up?q=1&amp;r=2">u</a>
                <img src="pic.png"><img src="pic.png"><img>"##,
        );
        assert_eq!(
            extract_links(doc.root()),
            vec!["#top", "javascript:void(0)", "../up?q=1&r=2"]
        );
        assert_eq!(extract_images(doc.root()), vec!["pic.png", "pic.png"]);
    }

    #[test]
    fn test_html_tag_names() {
        let doc = HtmlParser.parse(
            "<!DOCTYPE html><html><head><title>T</title></head>\
             <body><!-- c --><div><p>a</p><p>b</p></div></body></html>",
        );
        assert_eq!(
            extract_tag_names(doc.root()),
            vec!["html", "head", "title", "body", "div", "p", "p"]
        );
    }

    #[test]
    fn test_html_uppercase_markup_lowercased_by_parser() {
        let doc = HtmlParser.parse("<DIV><A HREF='/x'>x</A><IMG SRC='y.png'></DIV>");
        assert_eq!(
            extract_tag_names(doc.root()),
            vec!["html", "head", "body", "div", "a", "img"]
        );
        assert_eq!(extract_links(doc.root()), vec!["/x"]);
        assert_eq!(extract_images(doc.root()), vec!["y.png"]);
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let html = "<div><a href='/1'>one</a><img src='i.png'><span>two</span></div>";
        let first = HtmlParser.parse(html);
        let second = HtmlParser.parse(html);

        assert_eq!(extract_tag_names(first.root()), extract_tag_names(second.root()));
        assert_eq!(extract_links(first.root()), extract_links(second.root()));
        assert_eq!(extract_images(first.root()), extract_images(second.root()));
        assert_eq!(first.text(), second.text());
    }

    #[test]
    fn test_deep_nesting() {
        let depth = 2_000;
        let html = format!("{}{}", "<div>".repeat(depth), "</div>".repeat(depth));
        let doc = HtmlParser.parse(&html);
        let names = extract_tag_names(doc.root());
        assert_eq!(names.len(), depth + 3);
        assert!(names.iter().skip(3).all(|name| name == "div"));
    }
}
