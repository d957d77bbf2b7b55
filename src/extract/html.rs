//! `scraper`-backed implementation of the document abstraction
//!
//! `scraper` builds an html5ever tree, so element names arrive lowercased and
//! the usual `<html>`, `<head>` and `<body>` wrappers are synthesized when the
//! markup omits them.
//!
//! Text under `<script>`, `<style>` and `<template>` is not page text and is
//! left out of [`DocumentNode::text`].

use crate::extract::node::{DocumentNode, DocumentParser, ParsedDocument};
use ego_tree::NodeRef;
use scraper::{Html, Node};

/// Elements whose text content is never rendered
const HIDDEN_ELEMENTS: [&str; 3] = ["script", "style", "template"];

/// Handle to a node inside a parsed [`Html`] tree
#[derive(Debug, Clone, Copy)]
pub struct HtmlNode<'a>(NodeRef<'a, Node>);

impl<'a> HtmlNode<'a> {
    pub fn new(node: NodeRef<'a, Node>) -> Self {
        Self(node)
    }
}

impl<'a> DocumentNode for HtmlNode<'a> {
    fn tag_name(&self) -> Option<&str> {
        self.0.value().as_element().map(|element| element.name())
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.0
            .value()
            .as_element()
            .and_then(|element| element.attr(name))
    }

    fn children(&self) -> Vec<Self> {
        self.0.children().map(HtmlNode).collect()
    }

    fn text(&self) -> String {
        let mut text = String::new();
        let mut stack = vec![self.0];

        while let Some(node) = stack.pop() {
            match node.value() {
                Node::Text(t) => text.push_str(t),
                Node::Element(element) if HIDDEN_ELEMENTS.contains(&element.name()) => continue,
                _ => {}
            }
            // Reversed so children pop in document order
            stack.extend(node.children().rev());
        }
        text
    }
}

impl ParsedDocument for Html {
    type Node<'a> = HtmlNode<'a>;

    fn root(&self) -> HtmlNode<'_> {
        HtmlNode(self.tree.root())
    }
}

/// Parses full HTML documents with `scraper`
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlParser;

impl DocumentParser for HtmlParser {
    type Document = Html;

    fn parse(&self, raw: &str) -> Html {
        Html::parse_document(raw)
    }
}
