//! Error taxonomy.
//!
//! Every failure surfaces to the immediate caller; nothing is swallowed or
//! retried, and there is no degraded mode. Construction failures and print
//! failures are separate enums because they occur at different points in the
//! printer lifecycle.

use thiserror::Error;

/// Configuration rejected at construction time.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Both or neither of attribute/property source supplied.
    #[error("you must pass either an attribute name or a property name, and only one")]
    AmbiguousOrMissingSource,

    /// The chosen source name is empty.
    #[error("{0} must be a non-empty string")]
    InvalidSourceName(&'static str),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Failure of a single print invocation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PrintError {
    /// The lookup key resolved to no node.
    #[error("no node found for {attribute}: {key}")]
    NodeNotFound { attribute: String, key: String },

    /// Key lookup resolves against the attribute source only; a
    /// property-configured printer must be given a node directly.
    #[error("lookup by key requires an attribute-configured printer")]
    KeyLookupRequiresAttribute,
}

pub type PrintResult<T> = Result<T, PrintError>;
