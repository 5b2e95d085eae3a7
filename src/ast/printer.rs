use super::ast::*;
use super::compose::{join_list, join_with_separators, stringify, text, wrap_if_present};
use super::node::Node;
use std::{fmt, fmt::Write};

/// Turns a node, and everything below it, back into GraphQL source text.
///
/// Any node can be printed on its own, not only whole documents.
///
/// Output is canonical rather than pretty: every node prints on a single line (apart from
/// descriptions and the blank line between definitions), selections and fields are separated by
/// `", "`, and optional parts of a node are left out without leaving stray punctuation behind.
///
/// `Display` is provided for `dyn PrintNode` and for [`Node`], so printed nodes can be used
/// directly in `format!`.
pub trait PrintNode {
    /// Write the AST node's own source text to a buffer implementing the [Write] trait, leaving
    /// out its description.
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result;

    /// The description that's printed on its own line before this node, if any.
    #[inline]
    fn description(&self) -> Option<&StringValue<'_>> {
        None
    }

    /// Write the AST node to a buffer, preceded by its description on a separate line.
    ///
    /// Printing nested nodes always goes through this method, so descriptions at any depth are
    /// kept.
    fn write_node(&self, buffer: &mut dyn Write) -> fmt::Result {
        wrap_if_present(buffer, "", self.description().and_then(stringify), "\n")?;
        self.write_to_buffer(buffer)
    }

    /// Prints the node, including its description, into a new `String`.
    fn print(&self) -> String {
        let mut buf = String::new();
        match self.write_node(&mut buf) {
            Ok(()) => buf,
            _ => "".to_string(),
        }
    }
}

impl fmt::Display for dyn PrintNode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f)
    }
}

impl<'a> fmt::Display for Node<'a> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f)
    }
}

/// A missing node prints as the empty string.
impl<T: PrintNode> PrintNode for Option<T> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Some(node) => node.write_to_buffer(buffer),
            None => Ok(()),
        }
    }

    #[inline]
    fn description(&self) -> Option<&StringValue<'_>> {
        self.as_ref().and_then(|node| node.description())
    }
}

/// Names print as themselves.
impl<'a> PrintNode for &'a str {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self)
    }
}

impl<'a> PrintNode for NamedType<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.name)
    }
}

impl<'a> PrintNode for Variable<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "${}", self.name)
    }
}

impl PrintNode for BooleanValue {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        match self.value {
            true => buffer.write_str("true"),
            false => buffer.write_str("false"),
        }
    }
}

impl<'a> PrintNode for EnumValue<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.value)
    }
}

impl<'a> PrintNode for FloatValue<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.value)
    }
}

impl<'a> PrintNode for IntValue<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.value)
    }
}

impl<'a> PrintNode for StringValue<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        use lexical_core::*;
        let mut buf = [b'0'; u32::FORMATTED_SIZE];

        if !self.block {
            buffer.write_char('"')?;
            for c in self.value.chars() {
                match c {
                    '\r' => buffer.write_str(r"\r")?,
                    '\n' => buffer.write_str(r"\n")?,
                    '\t' => buffer.write_str(r"\t")?,
                    '"' => buffer.write_str("\\\"")?,
                    '\\' => buffer.write_str(r"\\")?,
                    '\u{0000}'..='\u{001F}' => unsafe {
                        const FORMAT: u128 = NumberFormatBuilder::hexadecimal();
                        const OPTIONS: WriteIntegerOptions = WriteIntegerOptions::new();
                        let buf =
                            write_with_options_unchecked::<_, FORMAT>(c as u32, &mut buf, &OPTIONS);
                        write!(buffer, "\\u{:0>4}", std::str::from_utf8_unchecked(buf))?;
                    },
                    _ => buffer.write_char(c)?,
                };
            }
            buffer.write_char('"')
        } else {
            match block_layout(self.value) {
                Some(own_line) => {
                    buffer.write_str("\"\"\"")?;
                    if own_line {
                        buffer.write_char('\n')?;
                    }
                    buffer.write_str(&self.value.replace(r#"""""#, r#"\""""#))?;
                    buffer.write_str("\n\"\"\"")
                }
                None => StringValue {
                    value: self.value,
                    block: false,
                }
                .write_to_buffer(buffer),
            }
        }
    }
}

/// Picks a block string layout that reads back as the same `value`.
///
/// Parsers strip the indentation shared by all lines after the first one and drop blank lines at
/// either end. `Some(true)` starts the value on its own line below the opening quotes, which keeps
/// its indentation as long as some line is flush left. `Some(false)` starts it right after the
/// quotes, where the first line keeps its own indentation. `None` means no block layout is
/// lossless and a quoted string has to be written instead.
fn block_layout(value: &str) -> Option<bool> {
    if value
        .chars()
        .any(|c| c < '\u{0020}' && c != '\t' && c != '\n')
    {
        return None;
    }
    if value.is_empty() {
        return Some(false);
    }

    let is_blank = |line: &str| line.chars().all(|c| c == ' ' || c == '\t');
    let indent = |line: &str| line.len() - line.trim_start_matches([' ', '\t']).len();
    let first = value.split('\n').next().unwrap_or_default();
    let last = value.rsplit('\n').next().unwrap_or_default();
    if is_blank(first) || is_blank(last) {
        return None;
    }

    let rest_indent = value
        .split('\n')
        .skip(1)
        .filter(|line| !is_blank(*line))
        .map(indent)
        .min();
    if indent(first) == 0 || rest_indent == Some(0) {
        Some(true)
    } else if rest_indent.is_none() {
        Some(false)
    } else {
        None
    }
}

impl<'a> PrintNode for Value<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Value::Boolean(value) => value.write_to_buffer(buffer),
            Value::Enum(value) => value.write_to_buffer(buffer),
            Value::Float(value) => value.write_to_buffer(buffer),
            Value::Int(value) => value.write_to_buffer(buffer),
            Value::String(value) => value.write_to_buffer(buffer),
            Value::Variable(value) => value.write_to_buffer(buffer),
            Value::Object(value) => value.write_to_buffer(buffer),
            Value::List(value) => value.write_to_buffer(buffer),
            Value::Null => buffer.write_str("null"),
        }
    }
}

impl<'a> PrintNode for ObjectField<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        join_with_separators(
            buffer,
            &["", ": ", ""],
            &[text(self.name), stringify(&self.value)],
        )
    }
}

impl<'a> PrintNode for ObjectValue<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_char('{')?;
        wrap_if_present(buffer, "", join_list(self.children.iter(), ", "), "")?;
        buffer.write_char('}')
    }
}

impl<'a> PrintNode for ListValue<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_char('[')?;
        wrap_if_present(buffer, "", join_list(self.children.iter(), ", "), "")?;
        buffer.write_char(']')
    }
}

impl<'a> PrintNode for Argument<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        join_with_separators(
            buffer,
            &["", ": ", ""],
            &[text(self.name), stringify(&self.value)],
        )
    }
}

impl<'a> PrintNode for Directive<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        join_with_separators(
            buffer,
            &["@", "(", ")"],
            &[text(self.name), join_list(self.arguments.children.iter(), ", ")],
        )
    }
}

impl<'a> PrintNode for SelectionSet<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        join_with_separators(
            buffer,
            &["{ ", " }"],
            &[join_list(self.selections.iter(), ", ")],
        )
    }
}

impl<'a> PrintNode for Selection<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Selection::Field(field) => field.write_to_buffer(buffer),
            Selection::FragmentSpread(spread) => spread.write_to_buffer(buffer),
            Selection::InlineFragment(inline) => inline.write_to_buffer(buffer),
        }
    }
}

impl<'a> PrintNode for Field<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        // Each group carries its own leading punctuation and is simply concatenated
        join_with_separators(buffer, &["", ": "], &[self.alias.and_then(text)])?;
        join_with_separators(
            buffer,
            &["", "(", ")"],
            &[text(self.name), join_list(self.arguments.children.iter(), ", ")],
        )?;
        join_with_separators(
            buffer,
            &[" ", " ", ""],
            &[
                join_list(self.directives.children.iter(), " "),
                stringify(&self.selection_set),
            ],
        )
    }
}

impl<'a> PrintNode for FragmentSpread<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        join_with_separators(
            buffer,
            &["...", " ", ""],
            &[
                stringify(&self.name),
                join_list(self.directives.children.iter(), " "),
            ],
        )
    }
}

impl<'a> PrintNode for InlineFragment<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("...")?;
        join_with_separators(buffer, &[" on ", ""], &[stringify(&self.type_condition)])?;
        join_with_separators(
            buffer,
            &[" ", " ", ""],
            &[
                join_list(self.directives.children.iter(), " "),
                stringify(&self.selection_set),
            ],
        )
    }
}

impl<'a> PrintNode for Type<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Type::NamedType(name) => name.write_to_buffer(buffer),
            Type::ListType(inner) => {
                join_with_separators(buffer, &["[", "]"], &[stringify(*inner)])
            }
            Type::NonNullType(inner) => {
                join_with_separators(buffer, &["", "!"], &[stringify(*inner)])
            }
        }
    }
}

impl<'a> PrintNode for VariableDefinition<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        join_with_separators(
            buffer,
            &["", ": ", " = ", " ", ""],
            &[
                stringify(&self.variable),
                stringify(&self.of_type),
                stringify(&self.default_value),
                join_list(self.directives.children.iter(), " "),
            ],
        )
    }
}

impl<'a> PrintNode for FragmentDefinition<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        join_with_separators(
            buffer,
            &["fragment ", " on ", " ", " ", ""],
            &[
                stringify(&self.name),
                stringify(&self.type_condition),
                join_list(self.directives.children.iter(), " "),
                stringify(&self.selection_set),
            ],
        )
    }
}

impl<'a> PrintNode for OperationDefinition<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        join_with_separators(
            buffer,
            &["", " ", "(", ")"],
            &[
                text(self.operation.as_str()),
                stringify(&self.name),
                join_list(self.variable_definitions.children.iter(), ", "),
            ],
        )?;
        join_with_separators(
            buffer,
            &[" ", ""],
            &[join_list(self.directives.children.iter(), " ")],
        )?;
        self.selection_set.write_node(buffer)
    }
}

impl<'a> Definition<'a> {
    #[inline]
    fn as_print_node(&self) -> &dyn PrintNode {
        match self {
            Definition::Operation(x) => x,
            Definition::Fragment(x) => x,
            Definition::Schema(x) => x,
            Definition::ScalarType(x) => x,
            Definition::ObjectType(x) => x,
            Definition::InterfaceType(x) => x,
            Definition::UnionType(x) => x,
            Definition::EnumType(x) => x,
            Definition::InputObjectType(x) => x,
            Definition::Directive(x) => x,
            Definition::SchemaExtension(x) => x,
            Definition::ScalarTypeExtension(x) => x,
            Definition::ObjectTypeExtension(x) => x,
            Definition::InterfaceTypeExtension(x) => x,
            Definition::UnionTypeExtension(x) => x,
            Definition::EnumTypeExtension(x) => x,
            Definition::InputObjectTypeExtension(x) => x,
        }
    }
}

impl<'a> PrintNode for Definition<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        self.as_print_node().write_to_buffer(buffer)
    }

    #[inline]
    fn description(&self) -> Option<&StringValue<'_>> {
        self.as_print_node().description()
    }
}

impl<'a> PrintNode for Document<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        wrap_if_present(buffer, "", join_list(self.definitions.iter(), "\n\n"), "")
    }
}

impl<'a> Node<'a> {
    /// Looks up the printing rule for the contained node.
    #[inline]
    fn as_print_node(&self) -> &dyn PrintNode {
        match self {
            Node::Name(x) => x,
            Node::Document(x) => x,
            Node::OperationDefinition(x) => x,
            Node::VariableDefinition(x) => x,
            Node::SelectionSet(x) => x,
            Node::Field(x) => x,
            Node::Argument(x) => x,
            Node::FragmentSpread(x) => x,
            Node::InlineFragment(x) => x,
            Node::FragmentDefinition(x) => x,
            Node::Value(x) => x,
            Node::ObjectField(x) => x,
            Node::Directive(x) => x,
            Node::Type(x) => x,
            Node::SchemaDefinition(x) => x,
            Node::OperationTypeDefinition(x) => x,
            Node::ScalarTypeDefinition(x) => x,
            Node::ObjectTypeDefinition(x) => x,
            Node::FieldDefinition(x) => x,
            Node::InputValueDefinition(x) => x,
            Node::InterfaceTypeDefinition(x) => x,
            Node::UnionTypeDefinition(x) => x,
            Node::EnumTypeDefinition(x) => x,
            Node::EnumValueDefinition(x) => x,
            Node::InputObjectTypeDefinition(x) => x,
            Node::DirectiveDefinition(x) => x,
            Node::SchemaExtension(x) => x,
            Node::ScalarTypeExtension(x) => x,
            Node::ObjectTypeExtension(x) => x,
            Node::InterfaceTypeExtension(x) => x,
            Node::UnionTypeExtension(x) => x,
            Node::EnumTypeExtension(x) => x,
            Node::InputObjectTypeExtension(x) => x,
        }
    }
}

impl<'a> PrintNode for Node<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        self.as_print_node().write_to_buffer(buffer)
    }

    #[inline]
    fn description(&self) -> Option<&StringValue<'_>> {
        self.as_print_node().description()
    }
}

#[cfg(test)]
mod tests {
    use super::super::*;
    use bumpalo::vec;

    fn leaf<'a>(ctx: &'a ASTContext, name: &'a str) -> Selection<'a> {
        Field::new_leaf(ctx, name).into()
    }

    fn no_directives(ctx: &ASTContext) -> Directives<'_> {
        Directives::default_in(&ctx.arena)
    }

    fn argument<'a>(name: &'a str, value: Value<'a>) -> Argument<'a> {
        Argument { name, value }
    }

    #[test]
    fn values() {
        let ctx = ASTContext::new();
        let value = Value::Object(ObjectValue {
            children: vec![in &ctx.arena;
                ObjectField { name: "a", value: Value::Boolean(true.into()) },
                ObjectField {
                    name: "b",
                    value: Value::List(ListValue {
                        children: vec![in &ctx.arena;
                            Value::Int(IntValue { value: "1" }),
                            Value::Int(IntValue { value: "2" }),
                        ],
                    }),
                },
            ],
        });
        assert_eq!(value.print(), "{a: true, b: [1, 2]}");
        assert_eq!(Value::Float(FloatValue { value: "123.23e20" }).print(), "123.23e20");
        assert_eq!(Value::Enum(EnumValue { value: "MOBILE" }).print(), "MOBILE");
        assert_eq!(Value::Variable("foo".into()).print(), "$foo");
        assert_eq!(Value::Null.print(), "null");
        assert_eq!(Value::Object(ObjectValue::default_in(&ctx.arena)).print(), "{}");
        assert_eq!(Value::List(ListValue::default_in(&ctx.arena)).print(), "[]");
    }

    #[test]
    fn falsy_values_are_kept() {
        let ctx = ASTContext::new();
        let directive = Directive {
            name: "include",
            arguments: Arguments {
                children: vec![in &ctx.arena;
                    argument("if", Value::Boolean(false.into())),
                    argument("count", Value::Int(IntValue { value: "0" })),
                    argument("label", Value::String("".into())),
                    argument("other", Value::Null),
                ],
            },
        };
        assert_eq!(
            directive.print(),
            r#"@include(if: false, count: 0, label: "", other: null)"#
        );
    }

    #[test]
    fn strings() {
        assert_eq!(Value::String("\u{0001}".into()).print(), "\"\\u0001\"");
        assert_eq!(Value::String("\u{0019}".into()).print(), "\"\\u0019\"");
        assert_eq!(Value::String("\0".into()).print(), "\"\\u0000\"");
        assert_eq!(
            Value::String("say \"hi\"\n\tnow \\".into()).print(),
            r#""say \"hi\"\n\tnow \\""#
        );
        assert_eq!(Value::String("日本語 🚀".into()).print(), "\"日本語 🚀\"");
    }

    #[test]
    fn block_strings() {
        let ctx = ASTContext::new();
        assert_eq!(
            StringValue::new_block(&ctx, "this\n  is\ndoc").print(),
            "\"\"\"\nthis\n  is\ndoc\n\"\"\""
        );
        assert_eq!(
            StringValue::new_block(&ctx, r#"uses """ inside"#).print(),
            "\"\"\"\nuses \\\"\"\" inside\n\"\"\""
        );
        assert_eq!(
            StringValue::new_block(&ctx, r#"ends with "quote""#).print(),
            "\"\"\"\nends with \"quote\"\n\"\"\""
        );
        assert_eq!(StringValue::new_block(&ctx, "").print(), "\"\"\"\n\"\"\"");
    }

    #[test]
    fn block_strings_keep_their_indentation() {
        let ctx = ASTContext::new();
        // the first line is exempt from dedenting, so it stays next to the quotes
        assert_eq!(
            StringValue::new_block(&ctx, "  indented").print(),
            "\"\"\"  indented\n\"\"\""
        );
        assert_eq!(
            StringValue::new_block(&ctx, "  first\nsecond").print(),
            "\"\"\"\n  first\nsecond\n\"\"\""
        );
        // shared indentation or blank edges can't be expressed as a block string
        assert_eq!(
            StringValue::new_block(&ctx, "  a\n  b").print(),
            r#""  a\n  b""#
        );
        assert_eq!(
            StringValue::new_block(&ctx, "trailing\n").print(),
            r#""trailing\n""#
        );
        assert_eq!(
            StringValue::new_block(&ctx, "carriage\rreturn").print(),
            r#""carriage\rreturn""#
        );
    }

    #[test]
    fn directives() {
        let ctx = ASTContext::new();
        let directive = Directive {
            name: "deprecated",
            arguments: Arguments {
                children: vec![in &ctx.arena;
                    argument("reason", Value::String("old".into())),
                ],
            },
        };
        assert_eq!(directive.print(), r#"@deprecated(reason: "old")"#);

        let directive = Directive {
            name: "skip",
            arguments: Arguments::default_in(&ctx.arena),
        };
        assert_eq!(directive.print(), "@skip");
    }

    #[test]
    fn bare_field() {
        let ctx = ASTContext::new();
        assert_eq!(Field::new_leaf(&ctx, "id").print(), "id");
        assert_eq!(Field::new_aliased_leaf(&ctx, "me", "user").print(), "me: user");
    }

    #[test]
    fn field() {
        let ctx = ASTContext::new();
        let field = Field {
            alias: Some("alias"),
            name: "field1",
            arguments: Arguments {
                children: vec![in &ctx.arena;
                    argument("first", Value::Int(IntValue { value: "10" })),
                    argument("after", Value::Variable("foo".into())),
                ],
            },
            directives: Directives {
                children: vec![in &ctx.arena;
                    Directive {
                        name: "include",
                        arguments: Arguments {
                            children: vec![in &ctx.arena;
                                argument("if", Value::Variable("foo".into())),
                            ],
                        },
                    },
                ],
            },
            selection_set: SelectionSet {
                selections: vec![in &ctx.arena; leaf(&ctx, "id"), leaf(&ctx, "name")],
            },
        };
        assert_eq!(
            field.print(),
            "alias: field1(first: 10, after: $foo) @include(if: $foo) { id, name }"
        );

        let field = Field {
            selection_set: SelectionSet {
                selections: vec![in &ctx.arena; leaf(&ctx, "child")],
            },
            ..Field::new_leaf(&ctx, "field")
        };
        assert_eq!(field.print(), "field { child }");
    }

    #[test]
    fn fragment_spread() {
        let ctx = ASTContext::new();
        let spread = FragmentSpread {
            name: "Type".into(),
            directives: no_directives(&ctx),
        };
        assert_eq!(spread.print(), "...Type");
        let spread = FragmentSpread {
            name: "Type".into(),
            directives: Directives {
                children: vec![in &ctx.arena;
                    Directive { name: "test", arguments: Arguments::default_in(&ctx.arena) },
                ],
            },
        };
        assert_eq!(spread.print(), "...Type @test");
    }

    #[test]
    fn inline_fragment() {
        let ctx = ASTContext::new();
        let selection_set = SelectionSet {
            selections: vec![in &ctx.arena; leaf(&ctx, "field")],
        };
        let fragment = InlineFragment {
            type_condition: Some("Type".into()),
            directives: no_directives(&ctx),
            selection_set: selection_set.clone(),
        };
        assert_eq!(fragment.print(), "... on Type { field }");

        let fragment = InlineFragment {
            type_condition: None,
            directives: Directives {
                children: vec![in &ctx.arena;
                    Directive { name: "test", arguments: Arguments::default_in(&ctx.arena) },
                ],
            },
            selection_set: selection_set.clone(),
        };
        assert_eq!(fragment.print(), "... @test { field }");

        let fragment = InlineFragment {
            type_condition: None,
            directives: no_directives(&ctx),
            selection_set,
        };
        assert_eq!(fragment.print(), "... { field }");
    }

    #[test]
    fn _type() {
        let ctx = ASTContext::new();
        let named = Type::NamedType("Int".into());
        assert_eq!(named.print(), "Int");
        assert_eq!(named.into_nonnull(&ctx).into_list(&ctx).print(), "[Int!]");
        assert_eq!(
            named.into_nonnull(&ctx).into_list(&ctx).into_nonnull(&ctx).print(),
            "[Int!]!"
        );
    }

    #[test]
    fn variable_definitions() {
        let ctx = ASTContext::new();
        let definition = |default_value| VariableDefinition {
            variable: "x".into(),
            of_type: Type::NamedType("Int".into()),
            default_value,
            directives: no_directives(&ctx),
        };
        assert_eq!(definition(None).print(), "$x: Int");
        assert_eq!(
            definition(Some(Value::Int(IntValue { value: "1" }))).print(),
            "$x: Int = 1"
        );
        assert_eq!(
            definition(Some(Value::Int(IntValue { value: "0" }))).print(),
            "$x: Int = 0"
        );
        assert_eq!(definition(Some(Value::Null)).print(), "$x: Int = null");
    }

    #[test]
    fn fragment_definitions() {
        let ctx = ASTContext::new();
        let fragment = FragmentDefinition {
            name: "Test".into(),
            type_condition: "Type".into(),
            directives: no_directives(&ctx),
            selection_set: SelectionSet {
                selections: vec![in &ctx.arena; leaf(&ctx, "field")],
            },
        };
        assert_eq!(fragment.print(), "fragment Test on Type { field }");
    }

    #[test]
    fn operation_definition() {
        let ctx = ASTContext::new();
        let operation = OperationDefinition {
            operation: OperationKind::Query,
            name: Some("GetUser".into()),
            variable_definitions: VariableDefinitions::default_in(&ctx.arena),
            directives: no_directives(&ctx),
            selection_set: SelectionSet {
                selections: vec![in &ctx.arena; leaf(&ctx, "id"), leaf(&ctx, "name")],
            },
        };
        assert_eq!(operation.print(), "query GetUser{ id, name }");

        let operation = OperationDefinition {
            operation: OperationKind::Mutation,
            name: None,
            variable_definitions: VariableDefinitions {
                children: vec![in &ctx.arena;
                    VariableDefinition {
                        variable: "var".into(),
                        of_type: Type::NamedType("String".into()),
                        default_value: None,
                        directives: no_directives(&ctx),
                    },
                ],
            },
            directives: Directives {
                children: vec![in &ctx.arena;
                    Directive { name: "defer", arguments: Arguments::default_in(&ctx.arena) },
                ],
            },
            selection_set: SelectionSet {
                selections: vec![in &ctx.arena; leaf(&ctx, "doThing")],
            },
        };
        assert_eq!(
            operation.print(),
            "mutation($var: String) @defer{ doThing }"
        );
    }

    #[test]
    fn document_and_nodes() {
        let ctx = ASTContext::new();
        let document = Document {
            definitions: vec![in &ctx.arena;
                Definition::Operation(OperationDefinition {
                    operation: OperationKind::Query,
                    name: Some("A".into()),
                    variable_definitions: VariableDefinitions::default_in(&ctx.arena),
                    directives: no_directives(&ctx),
                    selection_set: SelectionSet {
                        selections: vec![in &ctx.arena; leaf(&ctx, "a")],
                    },
                }),
                Definition::Fragment(FragmentDefinition {
                    name: "B".into(),
                    type_condition: "Query".into(),
                    directives: no_directives(&ctx),
                    selection_set: SelectionSet {
                        selections: vec![in &ctx.arena; leaf(&ctx, "b")],
                    },
                }),
            ],
        };
        assert_eq!(document.print(), "query A{ a }\n\nfragment B on Query { b }");
        assert_eq!(Document::default_in(&ctx.arena).print(), "");

        let node = Node::from(document);
        assert_eq!(node.to_string(), "query A{ a }\n\nfragment B on Query { b }");
        assert_eq!(Node::Name("id").print(), "id");
        let missing: Option<Node> = None;
        assert_eq!(missing.print(), "");
    }

    #[test]
    fn reparses_as_same_query() {
        let ctx = ASTContext::new();
        let operation = OperationDefinition {
            operation: OperationKind::Query,
            name: Some("Q".into()),
            variable_definitions: VariableDefinitions {
                children: vec![in &ctx.arena;
                    VariableDefinition {
                        variable: "first".into(),
                        of_type: Type::NamedType("Int".into()).into_nonnull(&ctx),
                        default_value: Some(Value::Int(IntValue { value: "10" })),
                        directives: no_directives(&ctx),
                    },
                ],
            },
            directives: no_directives(&ctx),
            selection_set: SelectionSet {
                selections: vec![in &ctx.arena;
                    Selection::Field(Field {
                        arguments: Arguments {
                            children: vec![in &ctx.arena;
                                argument("first", Value::Variable("first".into())),
                                argument("flag", Value::Boolean(false.into())),
                            ],
                        },
                        selection_set: SelectionSet {
                            selections: vec![in &ctx.arena;
                                leaf(&ctx, "id"),
                                Selection::InlineFragment(InlineFragment {
                                    type_condition: Some("User".into()),
                                    directives: no_directives(&ctx),
                                    selection_set: SelectionSet {
                                        selections: vec![in &ctx.arena; leaf(&ctx, "name")],
                                    },
                                }),
                            ],
                        },
                        ..Field::new_leaf(&ctx, "nodes")
                    }),
                ],
            },
        };
        let printed = operation.print();
        let expected = indoc::indoc! {r#"
            query Q($first: Int! = 10) {
              nodes(first: $first, flag: false) {
                id
                ... on User {
                  name
                }
              }
            }
        "#};
        let reparsed = graphql_parser::parse_query::<&str>(&printed).unwrap();
        let reference = graphql_parser::parse_query::<&str>(expected).unwrap();
        assert_eq!(reparsed.to_string(), reference.to_string());
    }
}
