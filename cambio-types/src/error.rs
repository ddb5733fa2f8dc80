use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::role::SourceRole;

/// Unified error type for the cambio workspace.
///
/// Covers configuration problems, connector transport and payload failures,
/// upstream error envelopes, and the fatal wrapper produced when a required
/// source cannot be used.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CambioError {
    /// Required configuration (credentials, paths) is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid input argument, typically builder misuse.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The connector does not implement the role it was registered for.
    #[error("unsupported role: {role}")]
    Unsupported {
        /// Role that was requested from the connector.
        role: SourceRole,
    },

    /// An individual connector failed at the transport or HTTP status level.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The returned payload could not be parsed at all.
    #[error("data issue: {0}")]
    Data(String),

    /// The upstream answered with well-formed JSON of an unexpected shape,
    /// which is how providers report their own failures.
    #[error("{connector} rejected the request: {msg}")]
    ProviderRejected {
        /// Connector name whose upstream rejected the request.
        connector: String,
        /// Upstream message or a description of the unexpected shape.
        msg: String,
    },

    /// A required source failed; the run is aborted without output.
    #[error("required source {role} via {connector} failed: {reason}")]
    RequiredSource {
        /// Role the source was serving.
        role: SourceRole,
        /// Connector name that failed.
        connector: String,
        /// Rendered cause.
        reason: String,
    },

    /// The snapshot could not be written to its destination.
    #[error("failed to persist snapshot to {path}: {msg}")]
    Persist {
        /// Destination path.
        path: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl CambioError {
    /// Helper: build a `Config` error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Helper: build an `Unsupported` error for a role.
    #[must_use]
    pub const fn unsupported(role: SourceRole) -> Self {
        Self::Unsupported { role }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `ProviderRejected` error.
    pub fn provider_rejected(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::ProviderRejected {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: wrap a failure of a required source.
    pub fn required_source(role: SourceRole, connector: impl Into<String>, cause: &Self) -> Self {
        Self::RequiredSource {
            role,
            connector: connector.into(),
            reason: cause.to_string(),
        }
    }

    /// Helper: build a `Persist` error.
    pub fn persist(path: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Persist {
            path: path.into(),
            msg: msg.into(),
        }
    }

    /// Returns true if this error must abort a run even when it comes from an
    /// optional source.
    ///
    /// Only upstream rejections qualify: a provider that answers with its own
    /// error object is failing, not empty.
    #[must_use]
    pub const fn is_fatal_for_optional(&self) -> bool {
        matches!(self, Self::ProviderRejected { .. })
    }

    /// Returns true for configuration errors, which callers usually report
    /// with a distinct exit status.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
