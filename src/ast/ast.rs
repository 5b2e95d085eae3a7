pub use super::ast_conversion::*;
pub use super::type_system::*;

/// Owner of the arena that every node of a document is allocated into.
///
/// Nodes borrow their strings, lists and boxed types from this arena, so a tree lives exactly as
/// long as its context. Dropping the context releases the whole tree in one go.
pub struct ASTContext {
    /// Bump allocator backing all nodes built against this context
    pub arena: bumpalo::Bump,
}

impl ASTContext {
    /// Creates a context with an empty arena.
    pub fn new() -> Self {
        let arena = bumpalo::Bump::new();
        ASTContext { arena }
    }

    /// Moves `item` into the arena.
    #[inline]
    pub fn alloc<T>(&self, item: T) -> &T {
        self.arena.alloc(item)
    }

    /// Copies a string slice into the arena.
    ///
    /// Needed for names and values read from short-lived input such as a JSON tree. Literals with
    /// a `'static` lifetime can be used as they are.
    #[inline]
    pub fn alloc_str(&self, str: &str) -> &str {
        self.arena.alloc_str(str)
    }

    /// Moves an owned `String` into the arena without copying its contents.
    #[inline]
    pub fn alloc_string(&self, str: String) -> &str {
        self.arena.alloc(str)
    }
}

impl Default for ASTContext {
    fn default() -> Self {
        Self::new()
    }
}

/// `true` or `false` literal.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Boolean-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct BooleanValue {
    pub value: bool,
}

/// Variable reference, printed as `$name`.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Variables)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Variable<'a> {
    pub name: &'a str,
}

/// Bare enum literal such as `MOBILE_WEB`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct EnumValue<'a> {
    pub value: &'a str,
}

/// Integer literal, kept as the exact text it is printed with.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct IntValue<'a> {
    pub value: &'a str,
}

/// Float literal, kept as the exact text it is printed with.
///
/// No numeric normalisation takes place, so `1.0` and `1.00` are different values.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Float)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct FloatValue<'a> {
    pub value: &'a str,
}

/// String literal holding its unescaped contents.
///
/// Escaping is applied when printing. With `block` set the value prints between `"""`
/// delimiters, otherwise between plain double quotes.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-String)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct StringValue<'a> {
    pub value: &'a str,
    pub block: bool,
}

impl<'a> StringValue<'a> {
    /// Copies `str` into the arena as a quoted string.
    pub fn new<S: AsRef<str>>(ctx: &'a ASTContext, str: S) -> Self {
        StringValue {
            value: ctx.alloc_str(str.as_ref()),
            block: false,
        }
    }

    /// Copies `str` into the arena as a block string.
    pub fn new_block<S: AsRef<str>>(ctx: &'a ASTContext, str: S) -> Self {
        StringValue {
            value: ctx.alloc_str(str.as_ref()),
            block: true,
        }
    }
}

/// Any input value that may appear as an argument, a default or inside a list or object literal.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Values)
#[derive(Debug, PartialEq, Clone)]
pub enum Value<'a> {
    Variable(Variable<'a>),
    String(StringValue<'a>),
    Float(FloatValue<'a>),
    Int(IntValue<'a>),
    Boolean(BooleanValue),
    Enum(EnumValue<'a>),
    List(ListValue<'a>),
    Object(ObjectValue<'a>),
    /// The `null` literal.
    ///
    /// Always printed. Places where a value may be left out altogether use `Option<Value>`.
    Null,
}

/// Ordered list literal, printed as `[a, b]`.
#[derive(Debug, PartialEq, Clone)]
pub struct ListValue<'a> {
    pub children: bumpalo::collections::Vec<'a, Value<'a>>,
}

/// One `name: value` entry of an [`ObjectValue`].
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectField<'a> {
    pub name: &'a str,
    pub value: Value<'a>,
}

/// Input object literal, printed as `{a: 1, b: 2}`.
///
/// Fields print in the order they are stored.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Object-Values)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectValue<'a> {
    pub children: bumpalo::collections::Vec<'a, ObjectField<'a>>,
}

/// `name: value` pair passed to a field or a directive.
#[derive(Debug, PartialEq, Clone)]
pub struct Argument<'a> {
    pub name: &'a str,
    pub value: Value<'a>,
}

/// Arguments of a field or directive.
///
/// An empty list prints nothing at all, not even the parentheses.
#[derive(Debug, PartialEq, Clone)]
pub struct Arguments<'a> {
    pub children: bumpalo::collections::Vec<'a, Argument<'a>>,
}

/// Directive application such as `@include(if: $flag)` or `@deprecated`.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Directives)
#[derive(Debug, PartialEq, Clone)]
pub struct Directive<'a> {
    pub name: &'a str,
    pub arguments: Arguments<'a>,
}

/// Space separated directives attached to a node. Empty means none are printed.
#[derive(Debug, PartialEq, Clone)]
pub struct Directives<'a> {
    pub children: bumpalo::collections::Vec<'a, Directive<'a>>,
}

/// Braced list of selections.
///
/// Leaf fields carry an empty set, which prints as nothing instead of `{}`.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Selection-Sets)
#[derive(Debug, PartialEq, Clone)]
pub struct SelectionSet<'a> {
    pub selections: bumpalo::collections::Vec<'a, Selection<'a>>,
}

impl<'a> SelectionSet<'a> {
    /// Returns `true` for the set of a leaf field.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

/// A selected field, printed as `alias: name(args) @directives { ... }`.
///
/// Every part except `name` is optional and printed only when present.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fields)
#[derive(Debug, PartialEq, Clone)]
pub struct Field<'a> {
    /// Response key used in place of `name`, printed with a trailing `: `.
    pub alias: Option<&'a str>,
    /// Name of the selected field. Must not be empty.
    pub name: &'a str,
    pub arguments: Arguments<'a>,
    pub directives: Directives<'a>,
    /// Sub-selections on the field's type. Empty for leaf fields.
    pub selection_set: SelectionSet<'a>,
}

impl<'a> Field<'a> {
    /// Builds a field selecting `name` with no arguments, directives or sub-selections.
    #[inline]
    pub fn new_leaf(ctx: &'a ASTContext, name: &'a str) -> Self {
        Field {
            alias: None,
            name,
            arguments: Arguments::default_in(&ctx.arena),
            directives: Directives::default_in(&ctx.arena),
            selection_set: SelectionSet::default_in(&ctx.arena),
        }
    }

    /// Same as [`Field::new_leaf`] but selected under `alias`.
    #[inline]
    pub fn new_aliased_leaf(ctx: &'a ASTContext, alias: &'a str, name: &'a str) -> Self {
        Field {
            alias: Some(alias),
            ..Field::new_leaf(ctx, name)
        }
    }
}

/// `...Name` reference to a [`FragmentDefinition`].
#[derive(Debug, PartialEq, Clone)]
pub struct FragmentSpread<'a> {
    pub name: NamedType<'a>,
    pub directives: Directives<'a>,
}

/// Anonymous fragment inlined into a selection set.
///
/// Without a type condition this prints as `... { ... }` or `... @directive { ... }`.
///
/// [Reference](https://spec.graphql.org/October2021/#InlineFragment)
#[derive(Debug, PartialEq, Clone)]
pub struct InlineFragment<'a> {
    /// Type after `on`, if any.
    pub type_condition: Option<NamedType<'a>>,
    pub directives: Directives<'a>,
    pub selection_set: SelectionSet<'a>,
}

/// Entry of a [`SelectionSet`].
#[derive(Debug, PartialEq, Clone)]
pub enum Selection<'a> {
    Field(Field<'a>),
    FragmentSpread(FragmentSpread<'a>),
    InlineFragment(InlineFragment<'a>),
}

/// A name that refers to a type, a fragment or an operation.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct NamedType<'a> {
    pub name: &'a str,
}

/// Type reference as written in variable definitions and schema fields.
///
/// Wrappers nest, so `[Int!]!` is a non-null of a list of a non-null of `Int`.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-References)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Type<'a> {
    NamedType(NamedType<'a>),
    /// Prints as `[inner]`.
    ListType(&'a Type<'a>),
    /// Prints as `inner!`.
    NonNullType(&'a Type<'a>),
}

impl<'a> Type<'a> {
    /// Wraps this type in a list.
    #[inline]
    pub fn into_list(self, ctx: &'a ASTContext) -> Type<'a> {
        Type::ListType(ctx.alloc(self))
    }

    /// Marks this type as non-null.
    #[inline]
    pub fn into_nonnull(self, ctx: &'a ASTContext) -> Type<'a> {
        Type::NonNullType(ctx.alloc(self))
    }

    /// Strips all list and non-null wrappers and returns the innermost named type.
    #[inline]
    pub fn of_type(&self) -> &NamedType<'a> {
        match self {
            Type::NamedType(of_type) => of_type,
            Type::ListType(inner) | Type::NonNullType(inner) => inner.of_type(),
        }
    }
}

/// A single `$name: Type = default @directives` entry of an operation.
///
/// [Reference](https://spec.graphql.org/October2021/#VariableDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct VariableDefinition<'a> {
    pub variable: Variable<'a>,
    pub of_type: Type<'a>,
    /// `None` prints no ` = ` part at all. `Some(Value::Null)` prints ` = null`.
    pub default_value: Option<Value<'a>>,
    pub directives: Directives<'a>,
}

/// Parenthesised variable list of an operation. Empty prints no parentheses.
#[derive(Debug, PartialEq, Clone)]
pub struct VariableDefinitions<'a> {
    pub children: bumpalo::collections::Vec<'a, VariableDefinition<'a>>,
}

/// Named fragment, printed as `fragment Name on Type @directives { ... }`.
///
/// [Reference](https://spec.graphql.org/October2021/#FragmentDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct FragmentDefinition<'a> {
    pub name: NamedType<'a>,
    pub type_condition: NamedType<'a>,
    pub directives: Directives<'a>,
    pub selection_set: SelectionSet<'a>,
}

/// The `query`, `mutation` or `subscription` keyword.
///
/// Shared by [`OperationDefinition`] and the root entries of a [`SchemaDefinition`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(
    feature = "json",
    derive(serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// Returns the keyword that introduces this kind of operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }
}

/// An operation, printed as `kind Name($vars) @directives { ... }`.
///
/// The keyword is always printed, so an anonymous query comes out as `query{ ... }` rather than
/// the shorthand form.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Operations)
#[derive(Debug, PartialEq, Clone)]
pub struct OperationDefinition<'a> {
    pub operation: OperationKind,
    /// `None` for anonymous operations.
    pub name: Option<NamedType<'a>>,
    pub variable_definitions: VariableDefinitions<'a>,
    pub directives: Directives<'a>,
    pub selection_set: SelectionSet<'a>,
}

/// Root of a tree. Its definitions print in order, separated by a blank line.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Document)
#[derive(Debug, PartialEq, Clone)]
pub struct Document<'a> {
    pub definitions: bumpalo::collections::Vec<'a, Definition<'a>>,
}

/// Top-level entry of a [`Document`].
///
/// Covers operations and fragments as well as every schema definition and `extend` form. A
/// single document may mix both.
#[derive(Debug, PartialEq, Clone)]
pub enum Definition<'a> {
    Operation(OperationDefinition<'a>),
    Fragment(FragmentDefinition<'a>),
    Schema(SchemaDefinition<'a>),
    ScalarType(ScalarTypeDefinition<'a>),
    ObjectType(ObjectTypeDefinition<'a>),
    InterfaceType(InterfaceTypeDefinition<'a>),
    UnionType(UnionTypeDefinition<'a>),
    EnumType(EnumTypeDefinition<'a>),
    InputObjectType(InputObjectTypeDefinition<'a>),
    Directive(DirectiveDefinition<'a>),
    SchemaExtension(SchemaExtension<'a>),
    ScalarTypeExtension(ScalarTypeExtension<'a>),
    ObjectTypeExtension(ObjectTypeExtension<'a>),
    InterfaceTypeExtension(InterfaceTypeExtension<'a>),
    UnionTypeExtension(UnionTypeExtension<'a>),
    EnumTypeExtension(EnumTypeExtension<'a>),
    InputObjectTypeExtension(InputObjectTypeExtension<'a>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_of_type() {
        let ctx = ASTContext::new();
        let of_type = Type::NamedType(NamedType { name: "Int" })
            .into_nonnull(&ctx)
            .into_list(&ctx);
        assert_eq!(of_type.of_type().name, "Int");
    }

    #[test]
    fn aliased_leaf() {
        let ctx = ASTContext::new();
        let field = Field::new_aliased_leaf(&ctx, "me", "user");
        assert_eq!(field.alias, Some("me"));
        assert_eq!(field.name, "user");
        assert!(field.arguments.children.is_empty());
        assert!(field.selection_set.is_empty());
    }

    #[test]
    fn string_values() {
        let ctx = ASTContext::new();
        assert!(!StringValue::new(&ctx, "line").block);
        assert!(StringValue::new_block(&ctx, "block").block);
    }
}
