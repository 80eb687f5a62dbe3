//! In-memory document implementation.
//!
//! [`MemoryNode`] and [`MemoryDocument`] implement the node capability traits
//! over plain owned data. They exist so the serializer can be exercised
//! without a live document backend, and double as ready-made fakes for
//! downstream test suites.

use std::collections::BTreeMap;

use crate::node::{DataNode, NodeLookup};
use crate::value::Value;

/// An owned tree node with attributes, properties, an optional first child
/// text value, and element children in document order.
#[derive(Debug, Clone, Default)]
pub struct MemoryNode {
    attributes: BTreeMap<String, Value>,
    properties: BTreeMap<String, Value>,
    text: Option<String>,
    children: Vec<MemoryNode>,
}

impl MemoryNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Set the node's first child text value (what `textContent` extraction
    /// reads). Text does not count as an element child.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: MemoryNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = MemoryNode>) -> Self {
        self.children.extend(children);
        self
    }
}

impl DataNode for MemoryNode {
    fn attribute(&self, name: &str) -> Option<Value> {
        self.attributes.get(name).cloned()
    }

    fn property(&self, name: &str) -> Option<Value> {
        self.properties.get(name).cloned()
    }

    fn first_child_text(&self) -> Option<Value> {
        self.text.clone().map(Value::Text)
    }

    fn children(&self) -> Vec<&Self> {
        self.children.iter().collect()
    }

    fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// A rooted in-memory document supporting attribute lookup.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    root: MemoryNode,
}

impl MemoryDocument {
    pub fn new(root: MemoryNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &MemoryNode {
        &self.root
    }
}

impl NodeLookup for MemoryDocument {
    type Node = MemoryNode;

    fn find_by_attribute(&self, attribute: &str, key: &str) -> Option<&MemoryNode> {
        // Depth-first in document order; first match wins. Comparison is on
        // the attribute's string form, matching selector semantics.
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if node
                .attributes
                .get(attribute)
                .is_some_and(|value| value.to_string() == key)
            {
                return Some(node);
            }
            for child in node.children.iter().rev() {
                stack.push(child);
            }
        }
        None
    }
}
