//! Error taxonomy for registration, collection, and configuration.
//!
//! Every error is an authoring or configuration mistake detected synchronously
//! where it happens. Nothing is retried and nothing is partially applied.

use std::fmt;

/// Convenience result type used across strata.
pub type CollateResult<T> = Result<T, CollateError>;

/// The identity that collided during registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    /// A breakpoint with this name is already registered.
    Name(String),
    /// This rank is already held by another breakpoint.
    Rank {
        /// The contested rank.
        rank: i32,
        /// Name of the breakpoint already holding it.
        held_by: String,
    },
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "name `{name}` is already registered"),
            Self::Rank { rank, held_by } => {
                write!(f, "rank {rank} is already held by `{held_by}`")
            }
        }
    }
}

/// Top-level error type for the compiler core.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CollateError {
    /// A breakpoint name or rank was reused during registration.
    #[error("duplicate breakpoint identity: {0}")]
    DuplicateIdentity(Identity),

    /// A width+hi-dpi breakpoint references a base that is not registered yet.
    #[error("breakpoint `{name}` pairs with `{paired_with}`, which is not registered")]
    DanglingPair {
        /// The pairing breakpoint.
        name: String,
        /// The missing base.
        paired_with: String,
    },

    /// A width+hi-dpi breakpoint references a breakpoint that has no width predicate.
    #[error("breakpoint `{name}` pairs with `{paired_with}`, which is not a base-width breakpoint")]
    InvalidPair {
        /// The pairing breakpoint.
        name: String,
        /// The referenced, non-width breakpoint.
        paired_with: String,
    },

    /// A name was looked up (or a fragment submitted) that the registry does not know.
    #[error("unknown breakpoint `{0}`")]
    UnknownBreakpoint(String),

    /// A configured breakpoint has a field combination its kind does not allow.
    #[error("invalid breakpoint `{name}`: {reason}")]
    InvalidBreakpoint {
        /// The offending breakpoint.
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Configuration or source text could not be deserialized.
    #[error("configuration error: {0}")]
    Config(String),
}

impl CollateError {
    /// Build a [`CollateError::InvalidBreakpoint`] value.
    #[must_use]
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBreakpoint {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Build a [`CollateError::Config`] value.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<serde_json::Error> for CollateError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
