//! # Errors raised while reading node trees
//!
//! Printing a typed AST is infallible. [Error] is only produced when an externally built tree,
//! such as a JSON AST, is converted into typed nodes.

use std::{error, fmt, result};

/// Shorthand for results carrying an [Error].
pub type Result<T> = result::Result<T, Error>;

/// A rejected node.
///
/// `message` says what was wrong with it and `context`, when set, holds a shortened copy of the
/// offending input. [`Display`](fmt::Display) prints both on separate lines.
#[derive(PartialEq, Eq, Clone)]
pub struct Error {
    pub(crate) message: String,
    pub(crate) context: Option<String>,
    pub(crate) error_type: ErrorType,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorType {
    /// A node carried a `kind` tag that has no printing rule.
    UnknownNodeKind,
    /// A node with a known `kind` was malformed or appeared where it isn't allowed.
    InvalidNode,
}

impl Error {
    /// Builds an error without context. `error_type` defaults to [`ErrorType::InvalidNode`].
    pub fn new<S: Into<String>>(message: S, error_type: Option<ErrorType>) -> Self {
        Self {
            message: message.into(),
            context: None,
            error_type: error_type.unwrap_or(ErrorType::InvalidNode),
        }
    }

    /// Builds an error that also carries a snippet of the rejected input.
    pub fn new_with_context<S: Into<String>>(
        message: S,
        context: S,
        error_type: Option<ErrorType>,
    ) -> Self {
        Self {
            message: message.into(),
            context: Some(context.into()),
            error_type: error_type.unwrap_or(ErrorType::InvalidNode),
        }
    }

    /// Error for a `kind` tag without a printing rule.
    pub fn unknown_node_kind(kind: &str) -> Self {
        Self::new(
            format!("No printer exists for node kind '{kind}'"),
            Some(ErrorType::UnknownNodeKind),
        )
    }

    /// The message alone, without context.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    /// Renders the error prefixed by its type, appending the context on a second line when
    /// `include_ctx` is set.
    pub fn print(&self, include_ctx: bool) -> String {
        let formatted = match self.error_type {
            ErrorType::UnknownNodeKind => {
                format!("Unknown Node Kind: {}", self.message)
            }
            ErrorType::InvalidNode => {
                format!("Invalid Node: {}", self.message)
            }
        };

        match self.context {
            Some(ref context) if include_ctx => format!("{}\n{}", formatted, context),
            _ => formatted,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print(true))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n", self)
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_node_kind() {
        let err = Error::unknown_node_kind("Bogus");
        assert_eq!(err.error_type(), ErrorType::UnknownNodeKind);
        assert_eq!(err.message(), "No printer exists for node kind 'Bogus'");
        assert_eq!(
            err.to_string(),
            "Unknown Node Kind: No printer exists for node kind 'Bogus'"
        );
    }

    #[test]
    fn context_is_optional_in_print() {
        let err = Error::new_with_context("Field is missing its name", "{\"kind\":\"Field\"}", None);
        assert_eq!(err.error_type(), ErrorType::InvalidNode);
        assert_eq!(err.print(false), "Invalid Node: Field is missing its name");
        assert_eq!(
            err.print(true),
            "Invalid Node: Field is missing its name\n{\"kind\":\"Field\"}"
        );
    }
}
