use super::ast::*;
use super::ast_kind::ASTKind;

/// Any single AST Node, tagged by its kind.
///
/// This is the closed set of nodes this crate knows how to print. It's what externally built trees
/// are read into, e.g. by [`NodeFromJson`](crate::json::NodeFromJson), and is printed by
/// dispatching to the [`PrintNode`](crate::ast::PrintNode) implementation of the contained node.
///
/// Values and type references are carried by their enums, [`Value`] and [`Type`], which resolve to
/// their individual kinds via [`Node::kind`].
#[derive(Debug, PartialEq, Clone)]
pub enum Node<'a> {
    Name(&'a str),
    Document(Document<'a>),
    OperationDefinition(OperationDefinition<'a>),
    VariableDefinition(VariableDefinition<'a>),
    SelectionSet(SelectionSet<'a>),
    Field(Field<'a>),
    Argument(Argument<'a>),
    FragmentSpread(FragmentSpread<'a>),
    InlineFragment(InlineFragment<'a>),
    FragmentDefinition(FragmentDefinition<'a>),
    Value(Value<'a>),
    ObjectField(ObjectField<'a>),
    Directive(Directive<'a>),
    Type(Type<'a>),
    SchemaDefinition(SchemaDefinition<'a>),
    OperationTypeDefinition(OperationTypeDefinition<'a>),
    ScalarTypeDefinition(ScalarTypeDefinition<'a>),
    ObjectTypeDefinition(ObjectTypeDefinition<'a>),
    FieldDefinition(FieldDefinition<'a>),
    InputValueDefinition(InputValueDefinition<'a>),
    InterfaceTypeDefinition(InterfaceTypeDefinition<'a>),
    UnionTypeDefinition(UnionTypeDefinition<'a>),
    EnumTypeDefinition(EnumTypeDefinition<'a>),
    EnumValueDefinition(EnumValueDefinition<'a>),
    InputObjectTypeDefinition(InputObjectTypeDefinition<'a>),
    DirectiveDefinition(DirectiveDefinition<'a>),
    SchemaExtension(SchemaExtension<'a>),
    ScalarTypeExtension(ScalarTypeExtension<'a>),
    ObjectTypeExtension(ObjectTypeExtension<'a>),
    InterfaceTypeExtension(InterfaceTypeExtension<'a>),
    UnionTypeExtension(UnionTypeExtension<'a>),
    EnumTypeExtension(EnumTypeExtension<'a>),
    InputObjectTypeExtension(InputObjectTypeExtension<'a>),
}

impl<'a> Node<'a> {
    /// Returns the kind of the contained node.
    pub fn kind(&self) -> ASTKind {
        match self {
            Node::Name(_) => ASTKind::Name,
            Node::Document(_) => ASTKind::Document,
            Node::OperationDefinition(_) => ASTKind::OperationDefinition,
            Node::VariableDefinition(_) => ASTKind::VariableDefinition,
            Node::SelectionSet(_) => ASTKind::SelectionSet,
            Node::Field(_) => ASTKind::Field,
            Node::Argument(_) => ASTKind::Argument,
            Node::FragmentSpread(_) => ASTKind::FragmentSpread,
            Node::InlineFragment(_) => ASTKind::InlineFragment,
            Node::FragmentDefinition(_) => ASTKind::FragmentDefinition,
            Node::Value(value) => value.kind(),
            Node::ObjectField(_) => ASTKind::ObjectField,
            Node::Directive(_) => ASTKind::Directive,
            Node::Type(of_type) => of_type.kind(),
            Node::SchemaDefinition(_) => ASTKind::SchemaDefinition,
            Node::OperationTypeDefinition(_) => ASTKind::OperationTypeDefinition,
            Node::ScalarTypeDefinition(_) => ASTKind::ScalarTypeDefinition,
            Node::ObjectTypeDefinition(_) => ASTKind::ObjectTypeDefinition,
            Node::FieldDefinition(_) => ASTKind::FieldDefinition,
            Node::InputValueDefinition(_) => ASTKind::InputValueDefinition,
            Node::InterfaceTypeDefinition(_) => ASTKind::InterfaceTypeDefinition,
            Node::UnionTypeDefinition(_) => ASTKind::UnionTypeDefinition,
            Node::EnumTypeDefinition(_) => ASTKind::EnumTypeDefinition,
            Node::EnumValueDefinition(_) => ASTKind::EnumValueDefinition,
            Node::InputObjectTypeDefinition(_) => ASTKind::InputObjectTypeDefinition,
            Node::DirectiveDefinition(_) => ASTKind::DirectiveDefinition,
            Node::SchemaExtension(_) => ASTKind::SchemaExtension,
            Node::ScalarTypeExtension(_) => ASTKind::ScalarTypeExtension,
            Node::ObjectTypeExtension(_) => ASTKind::ObjectTypeExtension,
            Node::InterfaceTypeExtension(_) => ASTKind::InterfaceTypeExtension,
            Node::UnionTypeExtension(_) => ASTKind::UnionTypeExtension,
            Node::EnumTypeExtension(_) => ASTKind::EnumTypeExtension,
            Node::InputObjectTypeExtension(_) => ASTKind::InputObjectTypeExtension,
        }
    }
}

impl<'a> Value<'a> {
    /// Returns the kind of value this is.
    pub fn kind(&self) -> ASTKind {
        match self {
            Value::Variable(_) => ASTKind::Variable,
            Value::String(_) => ASTKind::StringValue,
            Value::Float(_) => ASTKind::FloatValue,
            Value::Int(_) => ASTKind::IntValue,
            Value::Boolean(_) => ASTKind::BooleanValue,
            Value::Enum(_) => ASTKind::EnumValue,
            Value::List(_) => ASTKind::ListValue,
            Value::Object(_) => ASTKind::ObjectValue,
            Value::Null => ASTKind::NullValue,
        }
    }
}

impl<'a> Type<'a> {
    /// Returns the kind of the outermost type reference.
    pub fn kind(&self) -> ASTKind {
        match self {
            Type::NamedType(_) => ASTKind::NamedType,
            Type::ListType(_) => ASTKind::ListType,
            Type::NonNullType(_) => ASTKind::NonNullType,
        }
    }
}

impl<'a> Selection<'a> {
    /// Returns the kind of selection this is.
    pub fn kind(&self) -> ASTKind {
        match self {
            Selection::Field(_) => ASTKind::Field,
            Selection::FragmentSpread(_) => ASTKind::FragmentSpread,
            Selection::InlineFragment(_) => ASTKind::InlineFragment,
        }
    }
}

impl<'a> Definition<'a> {
    /// Returns the kind of definition this is.
    pub fn kind(&self) -> ASTKind {
        match self {
            Definition::Operation(_) => ASTKind::OperationDefinition,
            Definition::Fragment(_) => ASTKind::FragmentDefinition,
            Definition::Schema(_) => ASTKind::SchemaDefinition,
            Definition::ScalarType(_) => ASTKind::ScalarTypeDefinition,
            Definition::ObjectType(_) => ASTKind::ObjectTypeDefinition,
            Definition::InterfaceType(_) => ASTKind::InterfaceTypeDefinition,
            Definition::UnionType(_) => ASTKind::UnionTypeDefinition,
            Definition::EnumType(_) => ASTKind::EnumTypeDefinition,
            Definition::InputObjectType(_) => ASTKind::InputObjectTypeDefinition,
            Definition::Directive(_) => ASTKind::DirectiveDefinition,
            Definition::SchemaExtension(_) => ASTKind::SchemaExtension,
            Definition::ScalarTypeExtension(_) => ASTKind::ScalarTypeExtension,
            Definition::ObjectTypeExtension(_) => ASTKind::ObjectTypeExtension,
            Definition::InterfaceTypeExtension(_) => ASTKind::InterfaceTypeExtension,
            Definition::UnionTypeExtension(_) => ASTKind::UnionTypeExtension,
            Definition::EnumTypeExtension(_) => ASTKind::EnumTypeExtension,
            Definition::InputObjectTypeExtension(_) => ASTKind::InputObjectTypeExtension,
        }
    }
}

macro_rules! into_node {
    ($($for_type:ident),+) => {
        $(
            impl<'a> From<$for_type<'a>> for Node<'a> {
                #[inline]
                fn from(x: $for_type<'a>) -> Self {
                    Node::$for_type(x)
                }
            }
        )+
    };
}

into_node!(
    Document,
    OperationDefinition,
    VariableDefinition,
    SelectionSet,
    Field,
    Argument,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,
    Value,
    ObjectField,
    Directive,
    Type,
    SchemaDefinition,
    OperationTypeDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    DirectiveDefinition,
    SchemaExtension,
    ScalarTypeExtension,
    ObjectTypeExtension,
    InterfaceTypeExtension,
    UnionTypeExtension,
    EnumTypeExtension,
    InputObjectTypeExtension
);

impl<'a> From<Selection<'a>> for Node<'a> {
    #[inline]
    fn from(x: Selection<'a>) -> Self {
        match x {
            Selection::Field(field) => Node::Field(field),
            Selection::FragmentSpread(spread) => Node::FragmentSpread(spread),
            Selection::InlineFragment(fragment) => Node::InlineFragment(fragment),
        }
    }
}

impl<'a> From<Definition<'a>> for Node<'a> {
    fn from(x: Definition<'a>) -> Self {
        match x {
            Definition::Operation(x) => Node::OperationDefinition(x),
            Definition::Fragment(x) => Node::FragmentDefinition(x),
            Definition::Schema(x) => Node::SchemaDefinition(x),
            Definition::ScalarType(x) => Node::ScalarTypeDefinition(x),
            Definition::ObjectType(x) => Node::ObjectTypeDefinition(x),
            Definition::InterfaceType(x) => Node::InterfaceTypeDefinition(x),
            Definition::UnionType(x) => Node::UnionTypeDefinition(x),
            Definition::EnumType(x) => Node::EnumTypeDefinition(x),
            Definition::InputObjectType(x) => Node::InputObjectTypeDefinition(x),
            Definition::Directive(x) => Node::DirectiveDefinition(x),
            Definition::SchemaExtension(x) => Node::SchemaExtension(x),
            Definition::ScalarTypeExtension(x) => Node::ScalarTypeExtension(x),
            Definition::ObjectTypeExtension(x) => Node::ObjectTypeExtension(x),
            Definition::InterfaceTypeExtension(x) => Node::InterfaceTypeExtension(x),
            Definition::UnionTypeExtension(x) => Node::UnionTypeExtension(x),
            Definition::EnumTypeExtension(x) => Node::EnumTypeExtension(x),
            Definition::InputObjectTypeExtension(x) => Node::InputObjectTypeExtension(x),
        }
    }
}
