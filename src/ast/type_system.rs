use super::ast::{Directives, NamedType, OperationKind, StringValue, Type, Value};
use bumpalo::collections::Vec;
use std::fmt;

/// AST Node for a Schema Definition, which names the root operation types of a schema.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema)
#[derive(Debug, PartialEq, Clone)]
pub struct SchemaDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub directives: Directives<'a>,
    pub operation_types: Vec<'a, OperationTypeDefinition<'a>>,
}

/// AST Node for a root operation type entry, e.g. `query: Query`, inside a [`SchemaDefinition`].
///
/// [Reference](https://spec.graphql.org/October2021/#RootOperationTypeDefinition)
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct OperationTypeDefinition<'a> {
    pub operation: OperationKind,
    pub of_type: NamedType<'a>,
}

/// AST Node for a custom Scalar type.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Scalars)
#[derive(Debug, PartialEq, Clone)]
pub struct ScalarTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub directives: Directives<'a>,
}

/// AST Node for an Object type, which defines a set of output fields.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Objects)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    /// Interfaces that this Object type implements.
    pub interfaces: Vec<'a, NamedType<'a>>,
    pub directives: Directives<'a>,
    pub fields: Vec<'a, FieldDefinition<'a>>,
}

/// AST Node for an output field on an Object or Interface type.
///
/// [Reference](https://spec.graphql.org/October2021/#FieldDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct FieldDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub arguments: Vec<'a, InputValueDefinition<'a>>,
    pub of_type: Type<'a>,
    pub directives: Directives<'a>,
}

/// AST Node for an input value, which is either an argument of a field or directive, or a field
/// of an Input Object type.
///
/// [Reference](https://spec.graphql.org/October2021/#InputValueDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct InputValueDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub of_type: Type<'a>,
    /// The default value, or `None` when no default is given.
    pub default_value: Option<Value<'a>>,
    pub directives: Directives<'a>,
}

/// AST Node for an Interface type.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Interfaces)
#[derive(Debug, PartialEq, Clone)]
pub struct InterfaceTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    /// Interfaces that this Interface type implements.
    pub interfaces: Vec<'a, NamedType<'a>>,
    pub directives: Directives<'a>,
    pub fields: Vec<'a, FieldDefinition<'a>>,
}

/// AST Node for a Union type, listing its member Object types.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Unions)
#[derive(Debug, PartialEq, Clone)]
pub struct UnionTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub types: Vec<'a, NamedType<'a>>,
}

/// AST Node for an Enum type.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enums)
#[derive(Debug, PartialEq, Clone)]
pub struct EnumTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub values: Vec<'a, EnumValueDefinition<'a>>,
}

/// AST Node for a single value of an [`EnumTypeDefinition`].
#[derive(Debug, PartialEq, Clone)]
pub struct EnumValueDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub directives: Directives<'a>,
}

/// AST Node for an Input Object type.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Objects)
#[derive(Debug, PartialEq, Clone)]
pub struct InputObjectTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub fields: Vec<'a, InputValueDefinition<'a>>,
}

/// AST Node for a Directive Definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-System.Directives)
#[derive(Debug, PartialEq, Clone)]
pub struct DirectiveDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub arguments: Vec<'a, InputValueDefinition<'a>>,
    pub repeatable: bool,
    pub locations: Vec<'a, DirectiveLocation>,
}

/// A location a directive may be placed at, as listed by a [`DirectiveDefinition`].
///
/// [Reference](https://spec.graphql.org/October2021/#DirectiveLocations)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(
    feature = "json",
    derive(serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Extensions mirror their base definitions field by field, minus the description which the
// grammar doesn't allow on `extend` definitions. Empty lists stand for omitted parts.

/// AST Node for a Schema Extension, e.g. `extend schema @dir { subscription: Subscription }`.
#[derive(Debug, PartialEq, Clone)]
pub struct SchemaExtension<'a> {
    pub directives: Directives<'a>,
    pub operation_types: Vec<'a, OperationTypeDefinition<'a>>,
}

/// AST Node for a Scalar type extension.
#[derive(Debug, PartialEq, Clone)]
pub struct ScalarTypeExtension<'a> {
    pub name: &'a str,
    pub directives: Directives<'a>,
}

/// AST Node for an Object type extension.
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectTypeExtension<'a> {
    pub name: &'a str,
    pub interfaces: Vec<'a, NamedType<'a>>,
    pub directives: Directives<'a>,
    pub fields: Vec<'a, FieldDefinition<'a>>,
}

/// AST Node for an Interface type extension.
#[derive(Debug, PartialEq, Clone)]
pub struct InterfaceTypeExtension<'a> {
    pub name: &'a str,
    pub interfaces: Vec<'a, NamedType<'a>>,
    pub directives: Directives<'a>,
    pub fields: Vec<'a, FieldDefinition<'a>>,
}

/// AST Node for a Union type extension.
#[derive(Debug, PartialEq, Clone)]
pub struct UnionTypeExtension<'a> {
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub types: Vec<'a, NamedType<'a>>,
}

/// AST Node for an Enum type extension.
#[derive(Debug, PartialEq, Clone)]
pub struct EnumTypeExtension<'a> {
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub values: Vec<'a, EnumValueDefinition<'a>>,
}

/// AST Node for an Input Object type extension.
#[derive(Debug, PartialEq, Clone)]
pub struct InputObjectTypeExtension<'a> {
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub fields: Vec<'a, InputValueDefinition<'a>>,
}
