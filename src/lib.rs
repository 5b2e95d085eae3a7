//! `graphql_ast_printer`
//! ====================
//!
//! _Turns a GraphQL AST back into GraphQL source text._
//!
//! The **`graphql_ast_printer`** library is the inverse of a GraphQL parser. Given a typed tree of
//! GraphQL nodes, from a whole document down to a single value or type reference, it prints
//! canonical source text that re-parses into an equivalent tree:
//!
//! - Executable documents: operations, fragments, selections, variables and values
//! - The Schema Definition Language: type system definitions and their `extend` counterparts
//!
//! The output is canonical rather than pretty. It doesn't preserve the original whitespace or
//! comments, but it never leaves dangling punctuation behind when an optional part of a node is
//! absent.
//!
//! Parsing and validation are left to other tools. Trees built elsewhere, for instance by
//! `graphql-js`, can be read from their JSON form using the `json` module, which is enabled by
//! the default `json` feature.
//!
//! Start with the [`ast`] module.

pub mod ast;
pub mod error;

pub use bumpalo;

#[cfg(feature = "json")]
pub mod json;
