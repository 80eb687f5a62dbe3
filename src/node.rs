//! Node capability traits.
//!
//! The serializer never sees a concrete tree type. It works against the
//! minimal capability set below, which decouples it from any particular
//! document representation and keeps it unit-testable with in-memory fakes
//! (see [`crate::memory`]).

use crate::value::Value;

/// Property name with first-child-text semantics.
///
/// Reading this property returns the node's first child text value via
/// [`DataNode::first_child_text`], not an aggregated text property. This is a
/// deliberate special case for one property identifier, tied to how the
/// originating document model exposes rendered text; it does not generalize
/// to other property names.
pub const TEXT_CONTENT: &str = "textContent";

/// Read access to one node of a hierarchical document.
pub trait DataNode {
    /// Read an attribute by name. `None` means the attribute is absent.
    fn attribute(&self, name: &str) -> Option<Value>;

    /// Read a property by name. `None` means the property is absent.
    fn property(&self, name: &str) -> Option<Value>;

    /// The raw value of the node's first child text node, if any.
    ///
    /// Only consulted when the configured property is [`TEXT_CONTENT`].
    fn first_child_text(&self) -> Option<Value>;

    /// Direct element children in document order.
    fn children(&self) -> Vec<&Self>;

    fn has_children(&self) -> bool {
        !self.children().is_empty()
    }
}

/// Resolve a lookup key to the single node whose attribute matches it.
pub trait NodeLookup {
    type Node: DataNode;

    /// Find the node whose attribute `attribute` equals `key`, searching in
    /// document order. `None` if no node matches.
    fn find_by_attribute(&self, attribute: &str, key: &str) -> Option<&Self::Node>;
}
