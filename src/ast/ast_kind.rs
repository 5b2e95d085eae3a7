use crate::error::Error;
use std::{fmt, str::FromStr};

/// An enum of identifiers representing AST nodes.
///
/// Each variant corresponds to one `kind` label of the conventional GraphQL AST, as it's written
/// by `graphql-js` and most tools that exchange GraphQL ASTs as JSON. The enum can be printed
/// using the [`fmt::Display`] trait, which outputs that label, and parsed from it with
/// [`FromStr`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ASTKind {
    /// See: `Name` on [crate::ast::Node]
    Name,
    /// See: [crate::ast::Document]
    Document,
    /// See: [crate::ast::OperationDefinition]
    OperationDefinition,
    /// See: [crate::ast::VariableDefinition]
    VariableDefinition,
    /// See: [crate::ast::SelectionSet]
    SelectionSet,
    /// See: [crate::ast::Field]
    Field,
    /// See: [crate::ast::Argument]
    Argument,
    /// See: [crate::ast::FragmentSpread]
    FragmentSpread,
    /// See: [crate::ast::InlineFragment]
    InlineFragment,
    /// See: [crate::ast::FragmentDefinition]
    FragmentDefinition,
    /// See: [crate::ast::Variable]
    Variable,
    /// See: [crate::ast::IntValue]
    IntValue,
    /// See: [crate::ast::FloatValue]
    FloatValue,
    /// See: [crate::ast::StringValue]
    StringValue,
    /// See: [crate::ast::BooleanValue]
    BooleanValue,
    /// See: `Null` on [crate::ast::Value]
    NullValue,
    /// See: [crate::ast::EnumValue]
    EnumValue,
    /// See: [crate::ast::ListValue]
    ListValue,
    /// See: [crate::ast::ObjectValue]
    ObjectValue,
    /// See: [crate::ast::ObjectField]
    ObjectField,
    /// See: [crate::ast::Directive]
    Directive,
    /// See: [crate::ast::NamedType]
    NamedType,
    /// See: `ListType` on [crate::ast::Type]
    ListType,
    /// See: `NonNullType` on [crate::ast::Type]
    NonNullType,
    /// See: [crate::ast::SchemaDefinition]
    SchemaDefinition,
    /// See: [crate::ast::OperationTypeDefinition]
    OperationTypeDefinition,
    /// See: [crate::ast::ScalarTypeDefinition]
    ScalarTypeDefinition,
    /// See: [crate::ast::ObjectTypeDefinition]
    ObjectTypeDefinition,
    /// See: [crate::ast::FieldDefinition]
    FieldDefinition,
    /// See: [crate::ast::InputValueDefinition]
    InputValueDefinition,
    /// See: [crate::ast::InterfaceTypeDefinition]
    InterfaceTypeDefinition,
    /// See: [crate::ast::UnionTypeDefinition]
    UnionTypeDefinition,
    /// See: [crate::ast::EnumTypeDefinition]
    EnumTypeDefinition,
    /// See: [crate::ast::EnumValueDefinition]
    EnumValueDefinition,
    /// See: [crate::ast::InputObjectTypeDefinition]
    InputObjectTypeDefinition,
    /// See: [crate::ast::DirectiveDefinition]
    DirectiveDefinition,
    /// See: [crate::ast::SchemaExtension]
    SchemaExtension,
    /// See: [crate::ast::ScalarTypeExtension]
    ScalarTypeExtension,
    /// See: [crate::ast::ObjectTypeExtension]
    ObjectTypeExtension,
    /// See: [crate::ast::InterfaceTypeExtension]
    InterfaceTypeExtension,
    /// See: [crate::ast::UnionTypeExtension]
    UnionTypeExtension,
    /// See: [crate::ast::EnumTypeExtension]
    EnumTypeExtension,
    /// See: [crate::ast::InputObjectTypeExtension]
    InputObjectTypeExtension,
}

impl ASTKind {
    /// Returns the `kind` label of this node kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ASTKind::Name => "Name",
            ASTKind::Document => "Document",
            ASTKind::OperationDefinition => "OperationDefinition",
            ASTKind::VariableDefinition => "VariableDefinition",
            ASTKind::SelectionSet => "SelectionSet",
            ASTKind::Field => "Field",
            ASTKind::Argument => "Argument",
            ASTKind::FragmentSpread => "FragmentSpread",
            ASTKind::InlineFragment => "InlineFragment",
            ASTKind::FragmentDefinition => "FragmentDefinition",
            ASTKind::Variable => "Variable",
            ASTKind::IntValue => "IntValue",
            ASTKind::FloatValue => "FloatValue",
            ASTKind::StringValue => "StringValue",
            ASTKind::BooleanValue => "BooleanValue",
            ASTKind::NullValue => "NullValue",
            ASTKind::EnumValue => "EnumValue",
            ASTKind::ListValue => "ListValue",
            ASTKind::ObjectValue => "ObjectValue",
            ASTKind::ObjectField => "ObjectField",
            ASTKind::Directive => "Directive",
            ASTKind::NamedType => "NamedType",
            ASTKind::ListType => "ListType",
            ASTKind::NonNullType => "NonNullType",
            ASTKind::SchemaDefinition => "SchemaDefinition",
            ASTKind::OperationTypeDefinition => "OperationTypeDefinition",
            ASTKind::ScalarTypeDefinition => "ScalarTypeDefinition",
            ASTKind::ObjectTypeDefinition => "ObjectTypeDefinition",
            ASTKind::FieldDefinition => "FieldDefinition",
            ASTKind::InputValueDefinition => "InputValueDefinition",
            ASTKind::InterfaceTypeDefinition => "InterfaceTypeDefinition",
            ASTKind::UnionTypeDefinition => "UnionTypeDefinition",
            ASTKind::EnumTypeDefinition => "EnumTypeDefinition",
            ASTKind::EnumValueDefinition => "EnumValueDefinition",
            ASTKind::InputObjectTypeDefinition => "InputObjectTypeDefinition",
            ASTKind::DirectiveDefinition => "DirectiveDefinition",
            ASTKind::SchemaExtension => "SchemaExtension",
            ASTKind::ScalarTypeExtension => "ScalarTypeExtension",
            ASTKind::ObjectTypeExtension => "ObjectTypeExtension",
            ASTKind::InterfaceTypeExtension => "InterfaceTypeExtension",
            ASTKind::UnionTypeExtension => "UnionTypeExtension",
            ASTKind::EnumTypeExtension => "EnumTypeExtension",
            ASTKind::InputObjectTypeExtension => "InputObjectTypeExtension",
        }
    }

    /// Returns the kind of definition an extension kind is printed as, or `None` when this isn't
    /// an extension kind.
    pub fn base_definition(&self) -> Option<ASTKind> {
        match self {
            ASTKind::SchemaExtension => Some(ASTKind::SchemaDefinition),
            ASTKind::ScalarTypeExtension => Some(ASTKind::ScalarTypeDefinition),
            ASTKind::ObjectTypeExtension => Some(ASTKind::ObjectTypeDefinition),
            ASTKind::InterfaceTypeExtension => Some(ASTKind::InterfaceTypeDefinition),
            ASTKind::UnionTypeExtension => Some(ASTKind::UnionTypeDefinition),
            ASTKind::EnumTypeExtension => Some(ASTKind::EnumTypeDefinition),
            ASTKind::InputObjectTypeExtension => Some(ASTKind::InputObjectTypeDefinition),
            _ => None,
        }
    }

    /// Checks whether this is one of the `extend` kinds.
    #[inline]
    pub fn is_extension(&self) -> bool {
        self.base_definition().is_some()
    }

    /// Checks whether nodes of this kind may be preceded by a description.
    ///
    /// Only type system definitions and their members can. Executable nodes, values and all
    /// `extend` kinds can't.
    pub fn takes_description(&self) -> bool {
        matches!(
            self,
            ASTKind::SchemaDefinition
                | ASTKind::ScalarTypeDefinition
                | ASTKind::ObjectTypeDefinition
                | ASTKind::FieldDefinition
                | ASTKind::InputValueDefinition
                | ASTKind::InterfaceTypeDefinition
                | ASTKind::UnionTypeDefinition
                | ASTKind::EnumTypeDefinition
                | ASTKind::EnumValueDefinition
                | ASTKind::InputObjectTypeDefinition
                | ASTKind::DirectiveDefinition
        )
    }
}

impl FromStr for ASTKind {
    type Err = Error;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        let kind = match kind {
            "Name" => ASTKind::Name,
            "Document" => ASTKind::Document,
            "OperationDefinition" => ASTKind::OperationDefinition,
            "VariableDefinition" => ASTKind::VariableDefinition,
            "SelectionSet" => ASTKind::SelectionSet,
            "Field" => ASTKind::Field,
            "Argument" => ASTKind::Argument,
            "FragmentSpread" => ASTKind::FragmentSpread,
            "InlineFragment" => ASTKind::InlineFragment,
            "FragmentDefinition" => ASTKind::FragmentDefinition,
            "Variable" => ASTKind::Variable,
            "IntValue" => ASTKind::IntValue,
            "FloatValue" => ASTKind::FloatValue,
            "StringValue" => ASTKind::StringValue,
            "BooleanValue" => ASTKind::BooleanValue,
            "NullValue" => ASTKind::NullValue,
            "EnumValue" => ASTKind::EnumValue,
            "ListValue" => ASTKind::ListValue,
            "ObjectValue" => ASTKind::ObjectValue,
            "ObjectField" => ASTKind::ObjectField,
            "Directive" => ASTKind::Directive,
            "NamedType" => ASTKind::NamedType,
            "ListType" => ASTKind::ListType,
            "NonNullType" => ASTKind::NonNullType,
            "SchemaDefinition" => ASTKind::SchemaDefinition,
            "OperationTypeDefinition" => ASTKind::OperationTypeDefinition,
            "ScalarTypeDefinition" => ASTKind::ScalarTypeDefinition,
            "ObjectTypeDefinition" => ASTKind::ObjectTypeDefinition,
            "FieldDefinition" => ASTKind::FieldDefinition,
            "InputValueDefinition" => ASTKind::InputValueDefinition,
            "InterfaceTypeDefinition" => ASTKind::InterfaceTypeDefinition,
            "UnionTypeDefinition" => ASTKind::UnionTypeDefinition,
            "EnumTypeDefinition" => ASTKind::EnumTypeDefinition,
            "EnumValueDefinition" => ASTKind::EnumValueDefinition,
            "InputObjectTypeDefinition" => ASTKind::InputObjectTypeDefinition,
            "DirectiveDefinition" => ASTKind::DirectiveDefinition,
            "SchemaExtension" => ASTKind::SchemaExtension,
            "ScalarTypeExtension" => ASTKind::ScalarTypeExtension,
            "ObjectTypeExtension" => ASTKind::ObjectTypeExtension,
            "InterfaceTypeExtension" => ASTKind::InterfaceTypeExtension,
            "UnionTypeExtension" => ASTKind::UnionTypeExtension,
            "EnumTypeExtension" => ASTKind::EnumTypeExtension,
            "InputObjectTypeExtension" => ASTKind::InputObjectTypeExtension,
            _ => return Err(Error::unknown_node_kind(kind)),
        };
        Ok(kind)
    }
}

impl fmt::Display for ASTKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
