//! Parser-independent document tree abstraction

/// A node of a parsed document tree
///
/// Element nodes report a tag name; document, text and comment nodes do not.
/// Implementations are expected to be cheap handles into a tree owned
/// elsewhere.
pub trait DocumentNode: Clone {
    /// Element name as provided by the parser, `None` for non-element nodes
    fn tag_name(&self) -> Option<&str>;

    /// Attribute value on an element node
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Direct children in document order
    fn children(&self) -> Vec<Self>;

    /// Concatenated text content of this node and all of its descendants
    fn text(&self) -> String;
}

/// A whole parsed document
pub trait ParsedDocument {
    type Node<'a>: DocumentNode
    where
        Self: 'a;

    /// The document root (the node above the outermost element)
    fn root(&self) -> Self::Node<'_>;

    /// Full text content of the document
    fn text(&self) -> String {
        self.root().text()
    }
}

/// Turns raw markup into a [`ParsedDocument`]
pub trait DocumentParser {
    type Document: ParsedDocument;

    fn parse(&self, raw: &str) -> Self::Document;
}
