//! Printer construction: configuration validation and the factory.
//!
//! A [`PrinterBuilder`] validates its configuration eagerly, so a malformed
//! configuration fails when the printer is built rather than on first use.
//! The resulting [`Printer`] is immutable and reusable across invocations.

use tracing::{debug, instrument};

use crate::errors::{ConfigError, ConfigResult, PrintError, PrintResult};
use crate::node::{DataNode, NodeLookup};
use crate::value::Value;

/// Turns an extracted value into its printed form. Defaults to the value's
/// `Display` rendering.
pub type Formatter = Box<dyn Fn(&Value) -> String>;

/// Decides whether a node's own line appears in the output. Defaults to
/// retaining every node. Filtering never prevents descendants from being
/// visited.
pub type Filter<N> = Box<dyn Fn(&Value, &N) -> bool>;

/// The single extraction source fixed for the lifetime of a printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Read the named attribute from each node.
    Attribute(String),
    /// Read the named property from each node, with the
    /// [`TEXT_CONTENT`](crate::node::TEXT_CONTENT) special case.
    Property(String),
}

impl Source {
    pub fn name(&self) -> &str {
        match self {
            Source::Attribute(name) | Source::Property(name) => name,
        }
    }
}

/// Builder for [`Printer`]. Exactly one of [`attribute_name`] and
/// [`property_name`] must be set before [`build`].
///
/// [`attribute_name`]: PrinterBuilder::attribute_name
/// [`property_name`]: PrinterBuilder::property_name
/// [`build`]: PrinterBuilder::build
pub struct PrinterBuilder<N> {
    attribute_name: Option<String>,
    property_name: Option<String>,
    format: Option<Formatter>,
    filter: Option<Filter<N>>,
}

impl<N: DataNode> Default for PrinterBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: DataNode> PrinterBuilder<N> {
    pub fn new() -> Self {
        Self {
            attribute_name: None,
            property_name: None,
            format: None,
            filter: None,
        }
    }

    /// Extract each node's value from the attribute with this name.
    pub fn attribute_name(mut self, name: impl Into<String>) -> Self {
        self.attribute_name = Some(name.into());
        self
    }

    /// Extract each node's value from the property with this name.
    pub fn property_name(mut self, name: impl Into<String>) -> Self {
        self.property_name = Some(name.into());
        self
    }

    /// Reformat extracted values before printing.
    pub fn format(mut self, format: impl Fn(&Value) -> String + 'static) -> Self {
        self.format = Some(Box::new(format));
        self
    }

    /// Elide nodes whose value/node pair the predicate rejects. Descendants
    /// of an elided node are still visited and take its place in the output.
    pub fn filter(mut self, filter: impl Fn(&Value, &N) -> bool + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Validate the configuration and build the printer.
    ///
    /// Exactly one source must be named, and the name must be non-empty.
    #[instrument(level = "debug", skip(self))]
    pub fn build(self) -> ConfigResult<Printer<N>> {
        let source = match (self.attribute_name, self.property_name) {
            (Some(name), None) => {
                if name.is_empty() {
                    return Err(ConfigError::InvalidSourceName("attribute name"));
                }
                Source::Attribute(name)
            }
            (None, Some(name)) => {
                if name.is_empty() {
                    return Err(ConfigError::InvalidSourceName("property name"));
                }
                Source::Property(name)
            }
            (attribute_name, property_name) => {
                // Diagnostic only, the error itself carries the contract.
                debug!(?attribute_name, ?property_name, "ambiguous or missing extraction source");
                return Err(ConfigError::AmbiguousOrMissingSource);
            }
        };

        Ok(Printer {
            source,
            format: self.format.unwrap_or_else(|| Box::new(|value| value.to_string())),
            filter: self.filter.unwrap_or_else(|| Box::new(|_, _| true)),
        })
    }
}

/// A configured tree printer.
///
/// Stateless and reusable: each invocation operates only on its arguments and
/// the closed-over configuration. Output is always framed by exactly one
/// leading and one trailing newline so that it embeds cleanly in snapshot
/// comparisons.
pub struct Printer<N> {
    pub(crate) source: Source,
    pub(crate) format: Formatter,
    pub(crate) filter: Filter<N>,
}

impl<N: DataNode> Printer<N> {
    pub fn builder() -> PrinterBuilder<N> {
        PrinterBuilder::new()
    }

    /// The extraction source this printer was built with.
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Render the tree below `node` as framed, indentation-encoded text.
    ///
    /// The node's own line never appears; its children start at indentation
    /// level zero. A childless or fully-elided tree renders as `"\n\n"`.
    pub fn print_node(&self, node: &N) -> String {
        let body = self.serialize_siblings(&node.children(), 0);
        format!("\n{}\n", body)
    }

    /// Resolve `key` against the active attribute name, then render as
    /// [`print_node`](Printer::print_node).
    #[instrument(level = "debug", skip(self, document))]
    pub fn print<L>(&self, document: &L, key: &str) -> PrintResult<String>
    where
        L: NodeLookup<Node = N>,
    {
        let Source::Attribute(attribute) = &self.source else {
            return Err(PrintError::KeyLookupRequiresAttribute);
        };

        let node = document.find_by_attribute(attribute, key).ok_or_else(|| {
            PrintError::NodeNotFound {
                attribute: attribute.clone(),
                key: key.to_string(),
            }
        })?;

        Ok(self.print_node(node))
    }
}
