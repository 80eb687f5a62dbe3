//! Deterministic indented-text rendering of hierarchical node trees.
//!
//! A [`Printer`] walks a node's descendant tree, extracts one value per node
//! from a fixed source (an attribute or a property), optionally filters and
//! reformats it, and renders the surviving nodes as a newline-separated,
//! two-space-indented tree. The output is framed by exactly one leading and
//! one trailing newline so it embeds cleanly in snapshot assertions.
//!
//! ```
//! use treesnap::{MemoryNode, Printer};
//!
//! let root = MemoryNode::new()
//!     .with_child(
//!         MemoryNode::new()
//!             .with_attribute("data-id", "parent")
//!             .with_child(MemoryNode::new().with_attribute("data-id", "child")),
//!     );
//!
//! let printer = Printer::builder().attribute_name("data-id").build().unwrap();
//! assert_eq!(printer.print_node(&root), "\nparent\n  child\n");
//! ```
//!
//! Filtering elides a node's own line without hiding its descendants, which
//! move up to the level the elided node would have occupied. Node access goes
//! through the [`DataNode`] trait, so any tree representation can be printed;
//! [`MemoryNode`] is a ready-made in-memory implementation.

pub mod errors;
pub mod memory;
pub mod node;
pub mod printer;
mod serializer;
pub mod util;
pub mod value;

pub use errors::{ConfigError, ConfigResult, PrintError, PrintResult};
pub use memory::{MemoryDocument, MemoryNode};
pub use node::{DataNode, NodeLookup, TEXT_CONTENT};
pub use printer::{Filter, Formatter, Printer, PrinterBuilder, Source};
pub use value::Value;
