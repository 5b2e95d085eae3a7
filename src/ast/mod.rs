//! # GraphQL AST and Printer
//!
//! The `graphql_ast_printer::ast` module contains a typed GraphQL AST, covering both executable
//! documents (operations, fragments, selections) and the Schema Definition Language (type system
//! definitions and their `extend` counterparts), and the [`PrintNode`] trait that turns any node
//! of it back into GraphQL source text.
//!
//! Glob-importing the module is the usual way in. The pieces that matter most:
//! - [`ASTContext`] owns the arena every node is allocated in
//! - [`Node`] holds one node of any [`ASTKind`]
//! - [`PrintNode`] is implemented by every node and does the printing
//!
//! Absent optional parts are left out together with their punctuation. Definitions of a
//! [`Document`] are separated by a blank line.
//!
//! ```
//! use graphql_ast_printer::ast::*;
//!
//! let ctx = ASTContext::new();
//! let field = Field::new_aliased_leaf(&ctx, "me", "viewer");
//! assert_eq!(field.print(), "me: viewer");
//! ```

#[allow(clippy::module_inception)]
mod ast;

mod ast_conversion;
mod ast_kind;
mod compose;
mod node;
mod printer;
mod schema_printer;
mod type_system;

pub use ast::*;
pub use ast_kind::ASTKind;
pub use node::Node;
pub use printer::PrintNode;
