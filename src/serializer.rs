//! Recursive tree serialization.
//!
//! Depth-first, document-order walk producing the indented body text. The
//! per-node result is `Option<String>`: `None` is the "no output" sentinel
//! for an elided leaf (or an elided branch whose subtree produced nothing),
//! and is distinct from `Some("")`, a genuinely empty formatted line that
//! still occupies a row in the output.

use itertools::Itertools;
use tracing::trace;

use crate::node::{DataNode, TEXT_CONTENT};
use crate::printer::{Printer, Source};
use crate::value::Value;

const INDENT: &str = "  ";

impl<N: DataNode> Printer<N> {
    /// Serialize an ordered sibling list at one indentation level.
    ///
    /// `None` results vanish before the join, which is how a filtered-out
    /// node's children get promoted next to whatever siblings remain. An
    /// all-elided list yields the empty string.
    pub(crate) fn serialize_siblings(&self, nodes: &[&N], level: usize) -> String {
        nodes
            .iter()
            .filter_map(|node| self.serialize_node(node, level))
            .join("\n")
    }

    /// Serialize one node and its subtree.
    pub(crate) fn serialize_node(&self, node: &N, level: usize) -> Option<String> {
        let indent = INDENT.repeat(level);
        let value = self.extract(node);
        let retained = (self.filter)(&value, node);
        trace!(level, retained, %value, "visit");

        if !node.has_children() {
            return retained.then(|| format!("{indent}{}", (self.format)(&value)));
        }

        // An elided node does not consume an indentation level: its children
        // render at the level the node itself would have occupied.
        let child_level = if retained { level + 1 } else { level };
        let subtree = self.serialize_siblings(&node.children(), child_level);

        if subtree.is_empty() {
            // Retained branch whose descendants all vanished still prints its
            // own line, with no children block.
            return retained.then(|| format!("{indent}{}", (self.format)(&value)));
        }

        if retained {
            Some(format!("{indent}{}\n{subtree}", (self.format)(&value)))
        } else {
            Some(subtree)
        }
    }

    /// Pull the node's value from the configured source. Absent data reads as
    /// [`Value::Null`] rather than failing the walk.
    fn extract(&self, node: &N) -> Value {
        match &self.source {
            Source::Attribute(name) => node.attribute(name),
            Source::Property(name) if name == TEXT_CONTENT => node.first_child_text(),
            Source::Property(name) => node.property(name),
        }
        .unwrap_or(Value::Null)
    }
}
