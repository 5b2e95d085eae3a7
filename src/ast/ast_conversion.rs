use super::ast::*;
use bumpalo::collections::Vec;

pub trait DefaultIn<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self;
}

impl<'a, T> DefaultIn<'a> for T
where
    T: Default,
{
    fn default_in(_ctx: &'a bumpalo::Bump) -> Self {
        Self::default()
    }
}

impl<'a> DefaultIn<'a> for Document<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        Document {
            definitions: Vec::new_in(arena),
        }
    }
}

impl<'a> DefaultIn<'a> for VariableDefinitions<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        VariableDefinitions {
            children: Vec::new_in(arena),
        }
    }
}

impl<'a> DefaultIn<'a> for ObjectValue<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        ObjectValue {
            children: Vec::new_in(arena),
        }
    }
}

impl<'a> DefaultIn<'a> for ListValue<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        ListValue {
            children: Vec::new_in(arena),
        }
    }
}

impl<'a> DefaultIn<'a> for Arguments<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        Arguments {
            children: Vec::new_in(arena),
        }
    }
}

impl<'a> DefaultIn<'a> for Directives<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        Directives {
            children: Vec::new_in(arena),
        }
    }
}

impl<'a> DefaultIn<'a> for SelectionSet<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        SelectionSet {
            selections: Vec::new_in(arena),
        }
    }
}

impl<'a> From<&'a str> for NamedType<'a> {
    #[inline]
    fn from(name: &'a str) -> Self {
        NamedType { name }
    }
}

impl<'a> From<&'a str> for Variable<'a> {
    #[inline]
    fn from(name: &'a str) -> Variable<'a> {
        Variable { name }
    }
}

impl From<bool> for BooleanValue {
    #[inline]
    fn from(value: bool) -> Self {
        BooleanValue { value }
    }
}

impl<'a> From<&'a str> for StringValue<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        StringValue {
            value,
            block: false,
        }
    }
}

impl<'a> From<Variable<'a>> for Value<'a> {
    #[inline]
    fn from(x: Variable<'a>) -> Self {
        Value::Variable(x)
    }
}

impl<'a> From<StringValue<'a>> for Value<'a> {
    #[inline]
    fn from(x: StringValue<'a>) -> Self {
        Value::String(x)
    }
}

impl<'a> From<FloatValue<'a>> for Value<'a> {
    #[inline]
    fn from(x: FloatValue<'a>) -> Self {
        Value::Float(x)
    }
}

impl<'a> From<IntValue<'a>> for Value<'a> {
    #[inline]
    fn from(x: IntValue<'a>) -> Self {
        Value::Int(x)
    }
}

impl<'a> From<BooleanValue> for Value<'a> {
    #[inline]
    fn from(x: BooleanValue) -> Self {
        Value::Boolean(x)
    }
}

impl<'a> From<EnumValue<'a>> for Value<'a> {
    #[inline]
    fn from(x: EnumValue<'a>) -> Self {
        Value::Enum(x)
    }
}

impl<'a> From<ListValue<'a>> for Value<'a> {
    #[inline]
    fn from(x: ListValue<'a>) -> Self {
        Value::List(x)
    }
}

impl<'a> From<ObjectValue<'a>> for Value<'a> {
    #[inline]
    fn from(x: ObjectValue<'a>) -> Self {
        Value::Object(x)
    }
}

impl<'a> From<NamedType<'a>> for Type<'a> {
    #[inline]
    fn from(x: NamedType<'a>) -> Self {
        Type::NamedType(x)
    }
}

impl<'a> From<Field<'a>> for Selection<'a> {
    #[inline]
    fn from(x: Field<'a>) -> Self {
        Selection::Field(x)
    }
}

impl<'a> From<FragmentSpread<'a>> for Selection<'a> {
    #[inline]
    fn from(x: FragmentSpread<'a>) -> Self {
        Selection::FragmentSpread(x)
    }
}

impl<'a> From<InlineFragment<'a>> for Selection<'a> {
    #[inline]
    fn from(x: InlineFragment<'a>) -> Self {
        Selection::InlineFragment(x)
    }
}

macro_rules! into_definition {
    ($($for_type:ident => $variant:ident),+) => {
        $(
            impl<'a> From<$for_type<'a>> for Definition<'a> {
                #[inline]
                fn from(x: $for_type<'a>) -> Self {
                    Definition::$variant(x)
                }
            }
        )+
    };
}

into_definition!(
    OperationDefinition => Operation,
    FragmentDefinition => Fragment,
    SchemaDefinition => Schema,
    ScalarTypeDefinition => ScalarType,
    ObjectTypeDefinition => ObjectType,
    InterfaceTypeDefinition => InterfaceType,
    UnionTypeDefinition => UnionType,
    EnumTypeDefinition => EnumType,
    InputObjectTypeDefinition => InputObjectType,
    DirectiveDefinition => Directive,
    SchemaExtension => SchemaExtension,
    ScalarTypeExtension => ScalarTypeExtension,
    ObjectTypeExtension => ObjectTypeExtension,
    InterfaceTypeExtension => InterfaceTypeExtension,
    UnionTypeExtension => UnionTypeExtension,
    EnumTypeExtension => EnumTypeExtension,
    InputObjectTypeExtension => InputObjectTypeExtension
);

// Re-tagging an extension as its base definition. The definition is a new value built from the
// extension's fields, and never carries a description. Its lists are copies allocated in the
// extension's arena, so printing goes through the shared rules instead.

impl<'a> From<&SchemaExtension<'a>> for SchemaDefinition<'a> {
    fn from(x: &SchemaExtension<'a>) -> Self {
        SchemaDefinition {
            description: None,
            directives: x.directives.clone(),
            operation_types: x.operation_types.clone(),
        }
    }
}

impl<'a> From<&ScalarTypeExtension<'a>> for ScalarTypeDefinition<'a> {
    fn from(x: &ScalarTypeExtension<'a>) -> Self {
        ScalarTypeDefinition {
            description: None,
            name: x.name,
            directives: x.directives.clone(),
        }
    }
}

impl<'a> From<&ObjectTypeExtension<'a>> for ObjectTypeDefinition<'a> {
    fn from(x: &ObjectTypeExtension<'a>) -> Self {
        ObjectTypeDefinition {
            description: None,
            name: x.name,
            interfaces: x.interfaces.clone(),
            directives: x.directives.clone(),
            fields: x.fields.clone(),
        }
    }
}

impl<'a> From<&InterfaceTypeExtension<'a>> for InterfaceTypeDefinition<'a> {
    fn from(x: &InterfaceTypeExtension<'a>) -> Self {
        InterfaceTypeDefinition {
            description: None,
            name: x.name,
            interfaces: x.interfaces.clone(),
            directives: x.directives.clone(),
            fields: x.fields.clone(),
        }
    }
}

impl<'a> From<&UnionTypeExtension<'a>> for UnionTypeDefinition<'a> {
    fn from(x: &UnionTypeExtension<'a>) -> Self {
        UnionTypeDefinition {
            description: None,
            name: x.name,
            directives: x.directives.clone(),
            types: x.types.clone(),
        }
    }
}

impl<'a> From<&EnumTypeExtension<'a>> for EnumTypeDefinition<'a> {
    fn from(x: &EnumTypeExtension<'a>) -> Self {
        EnumTypeDefinition {
            description: None,
            name: x.name,
            directives: x.directives.clone(),
            values: x.values.clone(),
        }
    }
}

impl<'a> From<&InputObjectTypeExtension<'a>> for InputObjectTypeDefinition<'a> {
    fn from(x: &InputObjectTypeExtension<'a>) -> Self {
        InputObjectTypeDefinition {
            description: None,
            name: x.name,
            directives: x.directives.clone(),
            fields: x.fields.clone(),
        }
    }
}
