//! # JSON Ingestion
//!
//! The `graphql_ast_printer::json` module reads node trees that were built outside of Rust, in the
//! conventional JSON form of a GraphQL AST where every node is an object with a `"kind"` tag, as
//! written for instance by `graphql-js`. Names may be given as `Name` nodes or as plain strings,
//! and `null` or missing fields stand for absent parts.
//!
//! The [NodeFromJson] trait reads any typed AST Node from a [serde_json::Value], and [print_json]
//! reads a whole tree into a [Node](crate::ast::Node) and prints it in one go.
//!
//! Reading fails with [ErrorType::UnknownNodeKind](crate::error::ErrorType::UnknownNodeKind) when
//! a `kind` has no printing rule, and with
//! [ErrorType::InvalidNode](crate::error::ErrorType::InvalidNode) when a known node is malformed,
//! such as a `Field` without a `name`.

extern crate serde;
extern crate serde_json;

mod conversion;
mod values;

pub use conversion::{print_json, NodeFromJson};
